//! Photo gallery: headline stats, filterable grid and lightbox.

use dioxus::prelude::*;
use vitrine_ui::StatCounter;

use super::ContentError;
use crate::components::GalleryGrid;
use crate::content;
use crate::context::use_timing;

#[component]
pub fn Gallery() -> Element {
    let timing = use_timing();
    let gallery = use_hook(|| {
        content::gallery().map_err(|e| {
            tracing::error!("Failed to load gallery content: {}", e);
            e.to_string()
        })
    });

    let gallery = match gallery {
        Ok(gallery) => gallery,
        Err(message) => return rsx! { ContentError { message } },
    };

    rsx! {
        section { class: "page-header",
            h1 { class: "page-title", "Gallery" }
            p { class: "page-subtitle", "Our food, our kitchen and the people who gather here" }
        }

        section { class: "stats",
            div { class: "stats-grid",
                for (i, stat) in gallery.stats.iter().enumerate() {
                    StatCounter {
                        key: "{i}",
                        id: format!("gallery-stat-{}", i),
                        target: stat.target(),
                        suffix: stat.suffix().to_string(),
                        label: stat.label.clone(),
                        duration_ms: timing.stat_counter_ms,
                    }
                }
            }
        }

        GalleryGrid { gallery }
    }
}
