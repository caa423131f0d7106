//! Stat Counter Component
//!
//! A headline number that counts up from zero the first time it scrolls into
//! view.

use std::time::Duration;

use dioxus::prelude::*;
use vitrine_core::CounterAnimation;

use crate::hooks::{run_counter, use_first_visible, VisibilityOptions};

/// Properties for the StatCounter component
#[derive(Clone, PartialEq, Props)]
pub struct StatCounterProps {
    /// Element id observed for visibility; unique per page
    pub id: String,
    /// Number to count up to
    pub target: i64,
    /// Text shown after the number, e.g. "+"
    #[props(default)]
    pub suffix: String,
    /// Caption under the number
    pub label: String,
    /// Animation length
    #[props(default = 2000)]
    pub duration_ms: u64,
}

/// Animated statistic
///
/// Shows 0 until half of the element is visible, then eases up to `target`
/// over `duration_ms`. Runs once; scrolling away and back does not restart it.
#[component]
pub fn StatCounter(props: StatCounterProps) -> Element {
    let visible = use_first_visible(props.id.clone(), VisibilityOptions::COUNTER);
    let display = use_signal(|| 0_i64);
    let mut started = use_signal(|| false);

    let target = props.target;
    let duration = Duration::from_millis(props.duration_ms);

    use_effect(move || {
        if visible() && !*started.peek() {
            started.set(true);
            let animation = CounterAnimation::new(0, target, duration);
            spawn(run_counter(animation, display));
        }
    });

    rsx! {
        div { class: "stat-item", id: "{props.id}",
            span { class: "stat-number", "{display}{props.suffix}" }
            span { class: "stat-label", "{props.label}" }
        }
    }
}
