use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-.]+$").expect("phone pattern compiles"));

const MIN_PHONE_DIGITS: usize = 7;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn is_phone(value: &str) -> bool {
    let value = value.trim();
    PHONE_RE.is_match(value) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Absolute http(s) URL with a host.
pub fn is_web_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email(" john@example.co.uk "));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("@b.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_phone() {
        assert!(is_phone("+1 234 567 8900"));
        assert!(is_phone("(02) 555-0199"));
        assert!(!is_phone("12345"));
        assert!(!is_phone("call me"));
    }

    #[test]
    fn test_web_url() {
        assert!(is_web_url("https://linkedin.com/in/someone"));
        assert!(!is_web_url("linkedin.com/in/someone"));
        assert!(!is_web_url("mailto:x@y.com"));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank("   "));
        assert!(!is_blank(" x "));
    }
}
