//! Category Pills Component
//!
//! Horizontal row of filter buttons. Exactly one pill, the selected
//! category's, carries the `active` class.

use dioxus::prelude::*;
use vitrine_core::content::FilterOption;
use vitrine_core::ItemPhase;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Buttons to render, in order
    pub options: Vec<FilterOption>,
    /// Value of the currently selected filter
    pub selected: String,
    /// Handler called with the clicked pill's value
    pub on_select: EventHandler<String>,
    /// Extra class on the container (e.g. "menu-nav" or "gallery-filters")
    #[props(default)]
    pub class: Option<String>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "all".to_string());
///
/// rsx! {
///     CategoryPills {
///         options: menu.filters.clone(),
///         selected: selected(),
///         on_select: move |cat| selected.set(cat)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();
    let container_class = match props.class.as_deref() {
        Some(extra) => format!("category-pills {}", extra),
        None => "category-pills".to_string(),
    };

    rsx! {
        div {
            class: "{container_class}",
            role: "radiogroup",
            "aria-label": "Category filter",
            for option in props.options.iter() {
                {
                    let value = option.value.clone();
                    let is_selected = selected == option.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{option.value}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(value.clone());
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill active"
    } else {
        "pill"
    }
}

/// CSS class for an item in a filtered list.
///
/// `.phase-entering` and `.phase-leaving` are transparent but keep their
/// place in the layout; `.phase-removed` takes the item out of it.
pub fn phase_class(phase: ItemPhase) -> &'static str {
    match phase {
        ItemPhase::Entering => "phase-entering",
        ItemPhase::Visible => "phase-visible",
        ItemPhase::Leaving => "phase-leaving",
        ItemPhase::Removed => "phase-removed",
    }
}
