/// Animated number that eases from zero to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub target: f64,
    pub decimals: usize,
    pub suffix: &'static str,
    pub duration_ms: u32,
}

pub const DEFAULT_DURATION_MS: u32 = 2_000;

impl CountUp {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            decimals: 0,
            suffix: "",
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.duration_ms)
    }

    /// Ease-out cubic position at `elapsed_ms`.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 || self.is_done(elapsed_ms) {
            return self.target;
        }
        let t = (elapsed_ms / f64::from(self.duration_ms)).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.target * eased
    }

    pub fn label_at(&self, elapsed_ms: f64) -> String {
        format!("{}{}", group_digits(self.value_at(elapsed_ms), self.decimals), self.suffix)
    }
}

/// Floors to `decimals` places and inserts thousands separators.
pub fn group_digits(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let floored = (value.abs() * scale).floor() / scale;
    let text = format!("{:.*}", decimals, floored);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if value < 0.0 && floored > 0.0 {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
