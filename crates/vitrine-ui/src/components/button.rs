//! Button Components
//!
//! Button styles shared by both sites:
//! - Primary: filled call-to-action ("View Menu", "Book a Table")
//! - Outline: secondary action on hero sections
//! - Ghost: text-only, used inside cards
//! - Icon buttons for the lightbox controls

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled call-to-action
    #[default]
    Primary,
    /// Bordered secondary action
    Outline,
    /// Text-only action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Link target; `#id` anchors are handled by `on_anchor`
    pub href: String,
    /// Called instead of navigating when `href` is an in-page anchor
    #[props(default)]
    pub on_anchor: Option<EventHandler<String>>,
    /// Button content
    pub children: Element,
}

/// A call-to-action styled as a button.
///
/// In-page anchors (`#menu`) are intercepted and passed to `on_anchor` so the
/// page can scroll smoothly with its navbar offset.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton {
///         href: "#menu".to_string(),
///         on_anchor: move |href| scroll_to_anchor(href),
///         "View Menu"
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let href = props.href.clone();
    let on_anchor = props.on_anchor;
    let is_anchor = href.starts_with('#') && on_anchor.is_some();

    rsx! {
        a {
            class: props.variant.class(),
            href: "{props.href}",
            onclick: move |evt| {
                if is_anchor {
                    evt.prevent_default();
                    if let Some(handler) = on_anchor {
                        handler.call(href.clone());
                    }
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, previous, next)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    let onclick = props.onclick;

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
