//! Designer portfolio: introduction, stats and filterable project cards.

use dioxus::prelude::*;
use vitrine_core::content::PortfolioContent;
use vitrine_core::{AbsoluteIndex, FilterController, FilterVariant};
use vitrine_ui::{phase_class, CategoryPills, StatCounter};

use super::ContentError;
use crate::components::Reveal;
use crate::content;
use crate::context::use_timing;
use crate::schedule::run_plan;

#[component]
pub fn Portfolio() -> Element {
    let portfolio = use_hook(|| {
        content::portfolio().map_err(|e| {
            tracing::error!("Failed to load portfolio content: {}", e);
            e.to_string()
        })
    });

    match portfolio {
        Ok(portfolio) => rsx! { PortfolioBody { portfolio } },
        Err(message) => rsx! { ContentError { message } },
    }
}

#[component]
fn PortfolioBody(portfolio: PortfolioContent) -> Element {
    let timing = use_timing();
    let mut controller = use_signal(|| {
        FilterController::new(&portfolio.projects, FilterVariant::gallery(&timing), &timing)
    });

    use_effect(move || {
        let plan = controller.write().reveal_all();
        run_plan(plan, controller, |_| {});
    });

    let select = move |category: String| {
        let plan = controller.write().apply(&category);
        run_plan(plan, controller, |_| {});
    };

    let state = controller.read();
    let selected = state.filter().as_str().to_string();

    rsx! {
        section { class: "hero portfolio-hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "{portfolio.owner}" }
                p { class: "hero-subtitle", "{portfolio.tagline}" }
            }
        }

        if !portfolio.about.is_empty() {
            Reveal { id: "about", class: "about",
                h2 { class: "section-title", "About" }
                p { "{portfolio.about}" }
            }
        }

        section { class: "stats",
            div { class: "stats-grid",
                for (i, stat) in portfolio.stats.iter().enumerate() {
                    StatCounter {
                        key: "{i}",
                        id: format!("portfolio-stat-{}", i),
                        target: stat.target(),
                        suffix: stat.suffix().to_string(),
                        label: stat.label.clone(),
                        duration_ms: timing.stat_counter_ms,
                    }
                }
            }
        }

        section { class: "projects", id: "projects",
            h2 { class: "section-title", "Selected Work" }

            CategoryPills {
                options: portfolio.filters.clone(),
                selected,
                on_select: select,
                class: "project-filters".to_string(),
            }

            div { class: "project-grid",
                for (i, project) in portfolio.projects.iter().enumerate() {
                    article {
                        key: "{i}",
                        class: "project-card {phase_class(state.phase(AbsoluteIndex::new(i)))}",
                        h3 { "{project.title}" }
                        p { "{project.description}" }
                        ul { class: "project-tags",
                            for tag in project.tags.iter() {
                                li { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
