//! Fade-in on first scroll into view.

use dioxus::prelude::*;
use vitrine_ui::{use_first_visible, VisibilityOptions};

/// Wraps content that fades up the first time a tenth of it is visible.
/// Once revealed it stays revealed.
#[component]
pub fn Reveal(id: String, #[props(default)] class: String, children: Element) -> Element {
    let revealed = use_first_visible(id.clone(), VisibilityOptions::REVEAL);
    let state = if revealed() { "reveal revealed" } else { "reveal" };

    rsx! {
        div { id: "{id}", class: "{state} {class}", {children} }
    }
}
