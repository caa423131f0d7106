//! Fixed top navigation bar.
//!
//! Compacts itself once the page scrolls past the threshold and carries the
//! theme toggle.

use dioxus::prelude::*;
use vitrine_ui::ThemeToggle;

use crate::app::Route;
use crate::components::scroll::use_navbar_scrolled;
use crate::context::{toggle_theme, use_preferences};

#[component]
pub fn NavBar(brand: String) -> Element {
    let scrolled = use_navbar_scrolled();
    let prefs = use_preferences();
    let theme = prefs.read().get();

    let class = if scrolled() { "navbar scrolled" } else { "navbar" };

    rsx! {
        nav { class: "{class}",
            div { class: "nav-container",
                Link { class: "nav-logo", to: Route::Menu {}, "{brand}" }

                ul { class: "nav-menu",
                    li { Link { class: "nav-link", active_class: "active", to: Route::Menu {}, "Menu" } }
                    li { Link { class: "nav-link", active_class: "active", to: Route::Gallery {}, "Gallery" } }
                    li { Link { class: "nav-link", active_class: "active", to: Route::Portfolio {}, "Portfolio" } }
                }

                ThemeToggle {
                    theme,
                    on_toggle: move |_| toggle_theme(prefs),
                }
            }
        }
    }
}
