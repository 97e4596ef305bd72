use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::animation::CountUp;

const FRAME_MS: u32 = 30;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub value: f64,
    #[prop_or_default]
    pub decimals: usize,
    #[prop_or_default]
    pub suffix: &'static str,
}

/// Number that counts up from zero when mounted.
#[function_component(CountUpValue)]
pub fn count_up_value(props: &CountUpProps) -> Html {
    let counter = CountUp::new(props.value)
        .decimals(props.decimals)
        .suffix(props.suffix);
    let elapsed = use_state_eq(|| 0.0_f64);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |counter: &CountUp| {
                let counter = *counter;
                let started = Date::now();
                elapsed.set(0.0);
                // Clamped, so once finished every tick sets an equal value and
                // nothing re-renders.
                let interval = Interval::new(FRAME_MS, move || {
                    let now = Date::now() - started;
                    elapsed.set(now.min(f64::from(counter.duration_ms)));
                });
                move || drop(interval)
            },
            counter,
        );
    }

    html! {
        <span class="count-up">{ counter.label_at(*elapsed) }</span>
    }
}
