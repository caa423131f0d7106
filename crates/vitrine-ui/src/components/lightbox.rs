//! Lightbox Overlay Component
//!
//! Full-screen image viewer for the gallery. Renders whatever the gallery's
//! [`Lightbox`](vitrine_core::Lightbox) state reports and forwards arrow
//! buttons and backdrop clicks back to it. Keyboard input arrives through
//! [`use_lightbox_keys`](crate::use_lightbox_keys).

use dioxus::prelude::*;
use vitrine_core::{GalleryItem, LightboxKey};

use super::{CloseButton, IconButton};

/// Map a DOM `KeyboardEvent.key` name to a lightbox key, if it is one.
pub fn lightbox_key(name: &str) -> Option<LightboxKey> {
    match name {
        "Escape" => Some(LightboxKey::Escape),
        "ArrowLeft" => Some(LightboxKey::ArrowLeft),
        "ArrowRight" => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

/// Properties for the LightboxOverlay component
#[derive(Clone, PartialEq, Props)]
pub struct LightboxOverlayProps {
    /// Item whose data is on screen
    pub item: GalleryItem,
    /// One-based position within the visible items
    pub position: usize,
    /// Number of visible items
    pub total: usize,
    /// False while the image is cross-fading
    pub image_visible: bool,
    /// Handler for the close, previous and next controls and backdrop clicks
    pub on_key: EventHandler<LightboxKey>,
}

/// Image lightbox with caption, position indicator and previous/next controls
///
/// Only rendered while open. The overlay does not listen for keys itself;
/// pair it with [`use_lightbox_keys`](crate::use_lightbox_keys) in the owning
/// component so Escape and the arrows work wherever focus is.
///
/// # Example
///
/// ```rust,ignore
/// if let Some(view) = lightbox.read().view(&items, &subset) {
///     rsx! {
///         LightboxOverlay {
///             item: view.item.clone(),
///             position: view.position,
///             total: view.total,
///             image_visible: view.image_visible,
///             on_key: move |key| handle_key(key),
///         }
///     }
/// }
/// ```
#[component]
pub fn LightboxOverlay(props: LightboxOverlayProps) -> Element {
    let on_key = props.on_key;
    let item = &props.item;
    let image_style = if props.image_visible {
        "opacity: 1;"
    } else {
        "opacity: 0;"
    };

    rsx! {
        div {
            class: "lightbox active",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{item.title}",
            onclick: move |_| on_key.call(LightboxKey::Escape),

            div {
                class: "lightbox-content",
                onclick: move |evt| evt.stop_propagation(),

                CloseButton { onclick: move |_| on_key.call(LightboxKey::Escape) }

                IconButton {
                    onclick: move |_| on_key.call(LightboxKey::ArrowLeft),
                    aria_label: "Previous image".to_string(),
                    class: "lightbox-prev".to_string(),
                    "\u{2039}"
                }

                img {
                    class: "lightbox-img",
                    src: "{item.source_url}",
                    alt: "{item.alt_text}",
                    style: "{image_style}",
                }

                IconButton {
                    onclick: move |_| on_key.call(LightboxKey::ArrowRight),
                    aria_label: "Next image".to_string(),
                    class: "lightbox-next".to_string(),
                    "\u{203A}"
                }

                div { class: "lightbox-info",
                    h3 { class: "lightbox-title", "{item.title}" }
                    p { class: "lightbox-description", "{item.description}" }
                    span { class: "lightbox-counter",
                        span { class: "current-image", "{props.position}" }
                        " / "
                        span { class: "total-images", "{props.total}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bound_keys_only() {
        assert_eq!(lightbox_key("Escape"), Some(LightboxKey::Escape));
        assert_eq!(lightbox_key("ArrowLeft"), Some(LightboxKey::ArrowLeft));
        assert_eq!(lightbox_key("ArrowRight"), Some(LightboxKey::ArrowRight));
        assert_eq!(lightbox_key("Enter"), None);
        assert_eq!(lightbox_key("a"), None);
        assert_eq!(lightbox_key("escape"), None);
    }
}
