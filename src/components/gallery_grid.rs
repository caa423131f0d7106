//! Filterable photo grid with a lightbox.
//!
//! Filter pills use exact category matching. Clicking an image opens the
//! lightbox over the items currently visible; arrow keys cycle through them
//! and wrap at both ends. The "showing N images" counter animates to the new
//! total after every filter change.

use dioxus::prelude::*;
use vitrine_core::content::GalleryContent;
use vitrine_core::{
    AbsoluteIndex, CounterAnimation, FilterController, FilterVariant, KeyOutcome, Lightbox,
    LightboxKey,
};
use vitrine_ui::{
    phase_class, run_counter, set_scroll_locked, use_lightbox_keys, CategoryPills, LightboxOverlay,
};

use crate::context::use_timing;
use crate::schedule::run_plan;

#[component]
pub fn GalleryGrid(gallery: GalleryContent) -> Element {
    let timing = use_timing();
    let mut controller = use_signal(|| {
        FilterController::new(gallery.items.as_slice(), FilterVariant::gallery(&timing), &timing)
    });
    let lightbox = use_signal(Lightbox::new);
    let shown_count = use_signal(|| gallery.items.len() as i64);
    let mut count_task = use_signal(|| None::<Task>);

    use_effect(move || {
        let plan = controller.write().reveal_all();
        run_plan(plan, controller, |_| {});
    });

    let on_key = use_callback(move |key: LightboxKey| {
        handle_lightbox_key(controller, lightbox, timing.crossfade(), key)
    });
    use_lightbox_keys(on_key);

    // Leaving the page with the lightbox open must not leave the body locked.
    use_drop(|| set_scroll_locked(false));

    let select = move |category: String| {
        let plan = controller.write().apply(&category);
        let target = plan.visible_count as i64;
        run_plan(plan, controller, |_| {});

        resync_lightbox(controller, lightbox);

        if let Some(task) = count_task.write().take() {
            task.cancel();
        }
        let from = *shown_count.peek();
        let animation = CounterAnimation::new(from, target, timing.count_update());
        count_task.set(Some(spawn(run_counter(animation, shown_count))));
    };

    let state = controller.read();
    let subset = state.visible_subset();
    let selected = state.filter().as_str().to_string();
    let total = gallery.items.len();

    let overlay = lightbox.read().view(&gallery.items, &subset).map(|view| {
        rsx! {
            LightboxOverlay {
                item: view.item.clone(),
                position: view.position,
                total: view.total,
                image_visible: view.image_visible,
                on_key,
            }
        }
    });

    rsx! {
        section { class: "gallery-section", id: "gallery",
            CategoryPills {
                options: gallery.filters.clone(),
                selected,
                on_select: select,
                class: "gallery-filters".to_string(),
            }

            p { class: "gallery-count",
                "Showing "
                span { class: "image-count", "{shown_count}" }
                " of {total} images"
            }

            div { class: "gallery-grid",
                for item in gallery.items.iter() {
                    {
                        let index = item.original_index();
                        rsx! {
                            div {
                                key: "{index.get()}",
                                class: "gallery-item {phase_class(state.phase(index))}",
                                onclick: move |_| open_item(controller, lightbox, index),
                                div { class: "gallery-image",
                                    img { src: "{item.source_url}", alt: "{item.alt_text}", loading: "lazy" }
                                }
                                div { class: "gallery-info",
                                    h3 { "{item.title}" }
                                    p { "{item.description}" }
                                }
                            }
                        }
                    }
                }
            }

            if subset.is_empty() {
                p { class: "gallery-empty", "No images in this category." }
            }

            {overlay}
        }
    }
}

fn open_item(controller: Signal<FilterController>, mut lightbox: Signal<Lightbox>, index: AbsoluteIndex) {
    let subset = controller.read().visible_subset();
    if lightbox.write().open(index, &subset) {
        set_scroll_locked(true);
    }
}

fn handle_lightbox_key(
    controller: Signal<FilterController>,
    mut lightbox: Signal<Lightbox>,
    crossfade: std::time::Duration,
    key: LightboxKey,
) {
    let subset = controller.read().visible_subset();
    let outcome = lightbox.write().handle_key(key, &subset);
    match outcome {
        KeyOutcome::Closed => set_scroll_locked(false),
        KeyOutcome::Stepped(ticket) => {
            spawn(async move {
                tokio::time::sleep(crossfade).await;
                lightbox.write().commit_swap(ticket);
            });
        }
        KeyOutcome::Ignored => {}
    }
}

/// Keep an open lightbox pointing at the same item after the filter changed,
/// or close it if that item was filtered out.
fn resync_lightbox(controller: Signal<FilterController>, mut lightbox: Signal<Lightbox>) {
    if !lightbox.peek().is_open() {
        return;
    }
    let subset = controller.peek().visible_subset();
    if !lightbox.write().resync(&subset) {
        set_scroll_locked(false);
    }
}
