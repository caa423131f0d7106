//! Routed pages.

mod gallery;
mod menu;
mod portfolio;

pub use gallery::Gallery;
pub use menu::Menu;
pub use portfolio::Portfolio;

use dioxus::prelude::*;

/// Shown in place of a page whose bundled content failed to parse.
#[component]
fn ContentError(message: String) -> Element {
    rsx! {
        div { class: "content-error",
            p { "This page could not be loaded." }
            p { class: "content-error-detail", "{message}" }
        }
    }
}
