//! Filterable restaurant menu.
//!
//! Sections carry space-separated tags ("momo veg"), so a pill matches any
//! section whose tags contain it. After a filter change the page scrolls to
//! the first section still shown.

use dioxus::prelude::*;
use vitrine_core::content::MenuContent;
use vitrine_core::{AbsoluteIndex, FilterController, FilterVariant};
use vitrine_ui::{phase_class, CategoryPills};

use crate::components::scroll::scroll_to_section;
use crate::components::Reveal;
use crate::context::use_timing;
use crate::schedule::run_plan;

#[component]
pub fn MenuBoard(menu: MenuContent) -> Element {
    let timing = use_timing();
    let mut controller = use_signal(|| {
        FilterController::new(&menu.sections, FilterVariant::menu(&timing), &timing)
    });

    // Page-load reveal
    use_effect(move || {
        let plan = controller.write().reveal_all();
        run_plan(plan, controller, |_| {});
    });

    let section_ids: Vec<String> = menu.sections.iter().map(|s| s.id.clone()).collect();
    let select = move |category: String| {
        let plan = controller.write().apply(&category);
        let ids = section_ids.clone();
        run_plan(plan, controller, move |first: AbsoluteIndex| {
            if let Some(id) = ids.get(first.get()) {
                scroll_to_section(id.clone());
            }
        });
    };

    let state = controller.read();
    let selected = state.filter().as_str().to_string();

    rsx! {
        section { class: "menu-board", id: "menu",
            Reveal { id: "menu-title", class: "section-header",
                h2 { class: "section-title", "Our Menu" }
            }

            CategoryPills {
                options: menu.filters.clone(),
                selected,
                on_select: select,
                class: "menu-nav".to_string(),
            }

            div { class: "menu-sections",
                for (i, section) in menu.sections.iter().enumerate() {
                    div {
                        key: "{section.id}",
                        id: "{section.id}",
                        class: "detailed-menu-section {phase_class(state.phase(AbsoluteIndex::new(i)))}",
                        h3 { class: "menu-section-title", "{section.name}" }
                        div { class: "menu-items",
                            for (j, item) in section.items.iter().enumerate() {
                                Reveal {
                                    key: "{section.id}-{j}",
                                    id: format!("{}-item-{}", section.id, j),
                                    class: "menu-item",
                                    div { class: "menu-item-header",
                                        h4 { "{item.name}" }
                                        span { class: "price", "{item.price}" }
                                    }
                                    if !item.description.is_empty() {
                                        p { class: "menu-item-description", "{item.description}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
