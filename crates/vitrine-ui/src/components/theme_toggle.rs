//! Theme Toggle Component
//!
//! Light/dark switch. Renders purely from the theme it is given, so several
//! toggles on one page always agree.

use dioxus::prelude::*;
use vitrine_core::Theme;

/// Icon for the theme the button switches to.
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{263E}", // moon
        Theme::Dark => "\u{2600}",  // sun
    }
}

/// Light/dark toggle button
#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let label = format!("Switch to {} theme", theme.toggled());

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            "aria-label": "{label}",
            "aria-pressed": "{theme.is_dark()}",
            onclick: move |_| on_toggle.call(()),
            span { class: "theme-icon", "{theme_icon(theme)}" }
        }
    }
}
