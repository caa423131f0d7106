//! Runs the deferred half of a filter plan.
//!
//! A [`FilterPlan`] lists phase changes that must happen after a delay. The
//! plan is played back in one spawned task: updates are sorted by delay and
//! handed to the controller as their time comes. Nothing is cancelled when a
//! newer filter is applied; the controller rejects updates from superseded
//! generations, so an old plan playing out is harmless.

use std::time::Duration;

use dioxus::prelude::*;
use vitrine_core::{AbsoluteIndex, DeferredOutcome, DeferredUpdate, FilterController, FilterPlan};

/// Sort deferred updates by when they fire. Updates with equal delays keep
/// their plan order.
pub fn timeline(plan: &FilterPlan) -> Vec<DeferredUpdate> {
    let mut updates = plan.deferred.clone();
    updates.sort_by_key(|u| u.delay);
    updates
}

/// Play `plan` back against `controller`. `on_scroll` is called with the
/// first visible item when the plan asks for a scroll and one exists.
pub fn run_plan(
    plan: FilterPlan,
    mut controller: Signal<FilterController>,
    on_scroll: impl Fn(AbsoluteIndex) + 'static,
) {
    let updates = timeline(&plan);
    spawn(async move {
        let mut elapsed = Duration::ZERO;
        for update in updates {
            if update.delay > elapsed {
                tokio::time::sleep(update.delay - elapsed).await;
                elapsed = update.delay;
            }

            if !controller.peek().is_current(plan.generation) {
                tracing::trace!(generation = plan.generation.get(), "filter plan superseded");
                return;
            }

            match controller.write().apply_deferred(&update) {
                DeferredOutcome::ScrollTo(first) => on_scroll(first),
                DeferredOutcome::Stale => return,
                DeferredOutcome::Applied | DeferredOutcome::Nothing => {}
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{AnimationTiming, DeferredAction, FilterVariant};

    #[test]
    fn timeline_orders_by_delay() {
        let timing = AnimationTiming::default();
        let tags = ["momo", "veg", "momo veg"];
        let mut controller = FilterController::new(&tags, FilterVariant::menu(&timing), &timing);
        let plan = controller.apply("momo");

        let ordered = timeline(&plan);
        assert_eq!(ordered.len(), plan.deferred.len());
        assert!(ordered.windows(2).all(|w| w[0].delay <= w[1].delay));
        // Scroll comes after every reveal and removal
        assert_eq!(
            ordered.last().map(|u| u.action),
            Some(DeferredAction::ScrollToFirstVisible)
        );
    }

    #[test]
    fn timeline_is_stable_for_equal_delays() {
        let timing = AnimationTiming::reduced_motion();
        let tags = ["a", "b", "c"];
        let mut controller = FilterController::new(&tags, FilterVariant::gallery(&timing), &timing);
        let plan = controller.reveal_all();

        let order: Vec<_> = timeline(&plan).iter().map(|u| u.action).collect();
        assert_eq!(
            order,
            vec![
                DeferredAction::Reveal(AbsoluteIndex::new(0)),
                DeferredAction::Reveal(AbsoluteIndex::new(1)),
                DeferredAction::Reveal(AbsoluteIndex::new(2)),
            ]
        );
    }
}
