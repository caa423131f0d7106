//! Restaurant home: hero and the filterable menu.

use dioxus::prelude::*;
use vitrine_ui::{ButtonVariant, LinkButton};

use super::ContentError;
use crate::components::scroll::follow_anchor;
use crate::components::MenuBoard;
use crate::content;

#[component]
pub fn Menu() -> Element {
    let menu = use_hook(|| {
        content::menu().map_err(|e| {
            tracing::error!("Failed to load menu content: {}", e);
            e.to_string()
        })
    });

    let menu = match menu {
        Ok(menu) => menu,
        Err(message) => return rsx! { ContentError { message } },
    };

    rsx! {
        section { class: "hero", id: "home",
            div { class: "hero-content",
                h1 { class: "hero-title", "Himalayan Momo House" }
                p { class: "hero-subtitle", "Hand-folded dumplings and home cooking from the hills of Nepal" }
                div { class: "hero-buttons",
                    LinkButton {
                        href: "#menu",
                        on_anchor: move |href| follow_anchor(href),
                        "View Menu"
                    }
                    LinkButton {
                        variant: ButtonVariant::Outline,
                        href: "#contact",
                        on_anchor: move |href| follow_anchor(href),
                        "Find Us"
                    }
                }
            }
        }

        MenuBoard { menu }

        section { class: "contact", id: "contact",
            h2 { class: "section-title", "Find Us" }
            p { "Jhamsikhel Road, Lalitpur" }
            p { "Open daily 11:00 to 22:00" }
            LinkButton {
                variant: ButtonVariant::Ghost,
                href: "#",
                on_anchor: move |href| follow_anchor(href),
                "Back to top"
            }
        }
    }
}
