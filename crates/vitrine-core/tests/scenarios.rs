//! End-to-end scenarios for the gallery page state.
//!
//! Each test drives the filter controller, the lightbox and the counters the
//! way the gallery page does, firing deferred updates in delay order.

use std::time::Duration;

use vitrine_core::content::parse_gallery;
use vitrine_core::{
    AbsoluteIndex, AnimationTiming, CounterAnimation, DeferredOutcome, Direction,
    FilterController, FilterPlan, FilterVariant, GalleryEntry, ItemCollection, ItemPhase,
    KeyOutcome, Lightbox, LightboxKey, PreferenceStore, Storage, Theme,
};

fn collection(tags: &[&str]) -> ItemCollection {
    ItemCollection::new(tags.iter().enumerate().map(|(i, tag)| GalleryEntry {
        source_url: format!("images/{}.jpg", i),
        alt_text: format!("image {}", i),
        title: format!("Title {}", i),
        description: format!("Description {}", i),
        category: tag.to_string(),
    }))
}

fn gallery_controller(items: &ItemCollection) -> FilterController {
    let timing = AnimationTiming::default();
    FilterController::new(items.as_slice(), FilterVariant::gallery(&timing), &timing)
}

fn settle(controller: &mut FilterController, plan: &FilterPlan) {
    let mut updates = plan.deferred.clone();
    updates.sort_by_key(|u| u.delay);
    for update in &updates {
        controller.apply_deferred(update);
    }
}

#[test]
fn filter_open_and_wrap() {
    let items = collection(&["a", "b", "a", "c", "a"]);
    let mut filter = gallery_controller(&items);
    let plan = filter.apply("a");
    settle(&mut filter, &plan);

    let subset = filter.visible_subset();
    assert_eq!(subset.len(), 3);
    let members: Vec<usize> = subset.iter().map(AbsoluteIndex::get).collect();
    assert_eq!(members, vec![0, 2, 4]);

    let mut lightbox = Lightbox::new();
    assert!(lightbox.open(AbsoluteIndex::new(2), &subset));
    assert_eq!(lightbox.cursor().map(|c| c.get()), Some(1));
    assert_eq!(lightbox.position_indicator(), Some(2));

    let ticket = lightbox.step(Direction::Next, &subset).expect("open");
    assert_eq!(ticket.target(), AbsoluteIndex::new(4));
    assert!(lightbox.commit_swap(ticket));
    assert_eq!(lightbox.position_indicator(), Some(3));

    let ticket = lightbox.step(Direction::Next, &subset).expect("open");
    assert_eq!(ticket.target(), AbsoluteIndex::new(0));
    assert!(lightbox.commit_swap(ticket));
    assert_eq!(lightbox.position_indicator(), Some(1));

    let view = lightbox.view(&items, &subset).expect("open");
    assert_eq!(view.item.title, "Title 0");
    assert_eq!((view.position, view.total), (1, 3));
}

#[test]
fn all_restores_full_collection_in_order() {
    let items = collection(&["a", "b", "a", "c", "a"]);
    let mut filter = gallery_controller(&items);

    let plan = filter.apply("c");
    settle(&mut filter, &plan);
    assert_eq!(filter.visible_subset().len(), 1);

    let plan = filter.apply("all");
    assert_eq!(plan.visible_count, 5);
    settle(&mut filter, &plan);

    let members: Vec<usize> = filter.visible_subset().iter().map(AbsoluteIndex::get).collect();
    assert_eq!(members, vec![0, 1, 2, 3, 4]);
    assert!(filter.phases().iter().all(|p| *p == ItemPhase::Visible));
}

#[test]
fn keyboard_drives_the_carousel() {
    let items = collection(&["a", "a", "a"]);
    let filter = gallery_controller(&items);
    let subset = filter.visible_subset();
    let mut lightbox = Lightbox::new();

    assert_eq!(lightbox.handle_key(LightboxKey::ArrowLeft, &subset), KeyOutcome::Ignored);

    lightbox.open(AbsoluteIndex::new(0), &subset);
    match lightbox.handle_key(LightboxKey::ArrowLeft, &subset) {
        KeyOutcome::Stepped(ticket) => assert_eq!(ticket.target(), AbsoluteIndex::new(2)),
        other => panic!("expected a step, got {:?}", other),
    }
    assert!(lightbox.scroll_locked());

    assert_eq!(lightbox.handle_key(LightboxKey::Escape, &subset), KeyOutcome::Closed);
    assert!(!lightbox.scroll_locked());
    assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight, &subset), KeyOutcome::Ignored);
}

#[test]
fn rapid_refilter_keeps_the_latest_layout() {
    let items = collection(&["a", "b", "a"]);
    let mut filter = gallery_controller(&items);

    let first = filter.apply("b");
    let second = filter.apply("a");

    // Interleave: every timer of the first action fires after the second action.
    let mut stale = 0;
    for update in &first.deferred {
        if filter.apply_deferred(update) == DeferredOutcome::Stale {
            stale += 1;
        }
    }
    assert_eq!(stale, first.deferred.len());

    settle(&mut filter, &second);
    assert_eq!(
        filter.phases(),
        &[ItemPhase::Visible, ItemPhase::Removed, ItemPhase::Visible]
    );
}

#[test]
fn stat_counter_lands_exactly() {
    let anim = CounterAnimation::new(0, 42, Duration::from_millis(2000));
    assert_eq!(anim.value_at(Duration::from_millis(1999)), 41);
    assert_eq!(anim.value_at(Duration::from_millis(2000)), 42);
    assert_eq!(anim.value_at(Duration::from_millis(2500)), 42);
}

#[test]
fn total_count_follows_filter() {
    let items = collection(&["a", "b", "a", "c", "a"]);
    let mut filter = gallery_controller(&items);
    let timing = AnimationTiming::default();

    let plan = filter.apply("a");
    let anim = CounterAnimation::new(items.len() as i64, plan.visible_count as i64, timing.count_update());
    assert_eq!(anim.value_at(timing.count_update()), 3);
}

#[test]
fn gallery_document_to_lightbox() {
    let _ = tracing_subscriber::fmt::try_init();
    let json = r#"{
        "stats": [{ "label": "Photos", "value": "3" }],
        "items": [
            { "src": "momo.jpg", "title": "Momo", "category": "food" },
            { "src": "broken.jpg", "category": "food" },
            { "src": "hall.jpg", "title": "Hall", "category": "interior" },
            { "src": "thali.jpg", "title": "Thali", "category": "food" }
        ]
    }"#;
    let gallery = parse_gallery(json).unwrap();
    assert_eq!(gallery.items.len(), 3);

    let mut filter = gallery_controller(&gallery.items);
    filter.apply("food");
    let subset = filter.visible_subset();

    let mut lightbox = Lightbox::new();
    assert!(lightbox.open(AbsoluteIndex::new(2), &subset));
    let view = lightbox.view(&gallery.items, &subset).expect("open");
    assert_eq!(view.item.title, "Thali");
    assert_eq!((view.position, view.total), (2, 2));
}

#[test]
fn theme_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitrine.redb");

    {
        let mut store = PreferenceStore::open(Storage::new(&path).unwrap());
        assert_eq!(store.get(), Theme::Light);
        store.toggle().unwrap();
    }

    let store = PreferenceStore::open(Storage::new(&path).unwrap());
    assert_eq!(store.get(), Theme::Dark);
}

/// Play a plan on real (paused) timers, one task per deferred update.
fn schedule(
    controller: &std::sync::Arc<parking_lot::Mutex<FilterController>>,
    plan: &FilterPlan,
) -> Vec<tokio::task::JoinHandle<DeferredOutcome>> {
    plan.deferred
        .iter()
        .map(|update| {
            let controller = controller.clone();
            let update = *update;
            tokio::spawn(async move {
                tokio::time::sleep(update.delay).await;
                controller.lock().apply_deferred(&update)
            })
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn superseded_timers_fire_but_change_nothing() {
    let _ = tracing_subscriber::fmt::try_init();
    let items = collection(&["a", "b", "a", "b"]);
    let controller = std::sync::Arc::new(parking_lot::Mutex::new(gallery_controller(&items)));

    let first = controller.lock().apply("a");
    let first_timers = schedule(&controller, &first);

    // A second click 20ms later, before most of the first plan has fired
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = controller.lock().apply("b");
    let second_timers = schedule(&controller, &second);

    tokio::time::sleep(Duration::from_millis(1000)).await;

    let mut stale = 0;
    for timer in first_timers {
        if timer.await.unwrap() == DeferredOutcome::Stale {
            stale += 1;
        }
    }
    // Only the reveal of item 0 (zero delay) fired before the second click
    assert_eq!(stale, first.deferred.len() - 1);

    for timer in second_timers {
        assert_ne!(timer.await.unwrap(), DeferredOutcome::Stale);
    }

    assert_eq!(
        controller.lock().phases(),
        &[ItemPhase::Removed, ItemPhase::Visible, ItemPhase::Removed, ItemPhase::Visible]
    );
}
