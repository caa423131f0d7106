//! Category filtering with staggered, generation-guarded transitions.
//!
//! A [`FilterController`] owns the visual phase of every item in a list and
//! the currently selected [`VisibilityFilter`]. Applying a filter changes the
//! phases that must change at once and returns a [`FilterPlan`] describing the
//! rest: which items to reveal or remove after which delay, and (on the menu
//! page) when to scroll to the first visible section.
//!
//! Every plan is stamped with a [`FilterGeneration`]. The UI schedules the
//! deferred updates on timers and hands them back through
//! [`FilterController::apply_deferred`], which drops any update whose
//! generation has been superseded by a later filter. Without that check a
//! quick second click could have a timer from the first click hide an item
//! the second click just made visible.

use std::time::Duration;

use crate::gallery::{AbsoluteIndex, VisibleIndex};
use crate::timing::AnimationTiming;

/// The category value that matches every item.
pub const ALL_CATEGORIES: &str = "all";

/// Anything that can be filtered by a category tag.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for String {
    fn category(&self) -> &str {
        self
    }
}

impl Categorized for &str {
    fn category(&self) -> &str {
        self
    }
}

/// How a requested tag is compared with an item's category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Category must equal the tag (gallery page)
    Exact,
    /// Category equals or contains the tag (menu page, e.g. "momo veg" matches "veg")
    Contains,
}

/// The currently selected filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VisibilityFilter {
    #[default]
    All,
    Tag(String),
}

impl VisibilityFilter {
    /// Parse a button value; `"all"` selects everything.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            VisibilityFilter::All
        } else {
            VisibilityFilter::Tag(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VisibilityFilter::All => ALL_CATEGORIES,
            VisibilityFilter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, category: &str, mode: MatchMode) -> bool {
        match self {
            VisibilityFilter::All => true,
            VisibilityFilter::Tag(tag) => match mode {
                MatchMode::Exact => category == tag,
                // An empty category never "contains" anything.
                MatchMode::Contains => {
                    category == tag || (!category.is_empty() && category.contains(tag.as_str()))
                }
            },
        }
    }
}

/// The ordered members of a list that match a filter.
///
/// Derived on demand from the filter and the item categories; never stored
/// across filter changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleSubset {
    // Strictly increasing.
    members: Vec<AbsoluteIndex>,
}

impl VisibleSubset {
    /// Compute the subset of `items` matching `filter`.
    pub fn derive<T: Categorized>(items: &[T], filter: &VisibilityFilter, mode: MatchMode) -> Self {
        let members = items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item.category(), mode))
            .map(|(i, _)| AbsoluteIndex::new(i))
            .collect();
        Self { members }
    }

    /// Every item of a list of `len` items.
    pub fn full(len: usize) -> Self {
        Self {
            members: (0..len).map(AbsoluteIndex::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Position of `index` in this subset, if the item is visible.
    pub fn to_visible(&self, index: AbsoluteIndex) -> Option<VisibleIndex> {
        self.members.binary_search(&index).ok().map(VisibleIndex::new)
    }

    /// The item at `index` in this subset.
    pub fn to_absolute(&self, index: VisibleIndex) -> Option<AbsoluteIndex> {
        self.members.get(index.get()).copied()
    }

    pub fn contains(&self, index: AbsoluteIndex) -> bool {
        self.to_visible(index).is_some()
    }

    pub fn first(&self) -> Option<AbsoluteIndex> {
        self.members.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = AbsoluteIndex> + '_ {
        self.members.iter().copied()
    }
}

/// Visual phase of one filterable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    /// In layout, transparent, waiting for its staggered reveal
    Entering,
    /// In layout, fully shown
    Visible,
    /// Still in layout, fading out
    Leaving,
    /// Out of layout
    Removed,
}

impl ItemPhase {
    /// Whether the item occupies space in the layout
    pub fn in_layout(self) -> bool {
        !matches!(self, ItemPhase::Removed)
    }

    /// Whether the item is fully opaque
    pub fn is_shown(self) -> bool {
        matches!(self, ItemPhase::Visible)
    }
}

/// Per-page filter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterVariant {
    pub mode: MatchMode,
    /// Reveal delay per item position
    pub stagger: Duration,
    /// Scroll to the first visible item after this delay, if set
    pub scroll_after: Option<Duration>,
}

impl FilterVariant {
    /// Exact matching, fast stagger, no auto-scroll.
    pub fn gallery(timing: &AnimationTiming) -> Self {
        Self {
            mode: MatchMode::Exact,
            stagger: Duration::from_millis(timing.gallery_stagger_ms),
            scroll_after: None,
        }
    }

    /// Substring matching, slower stagger, scrolls to the first visible section.
    pub fn menu(timing: &AnimationTiming) -> Self {
        Self {
            mode: MatchMode::Contains,
            stagger: Duration::from_millis(timing.menu_stagger_ms),
            scroll_after: Some(Duration::from_millis(timing.menu_scroll_delay_ms)),
        }
    }
}

/// Identifies the filter action a deferred update belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterGeneration(u64);

impl FilterGeneration {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What a deferred update does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Entering -> Visible
    Reveal(AbsoluteIndex),
    /// Leaving -> Removed
    Remove(AbsoluteIndex),
    /// Report the first visible item so the UI can scroll to it
    ScrollToFirstVisible,
}

/// A state change to apply after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredUpdate {
    pub generation: FilterGeneration,
    pub delay: Duration,
    pub action: DeferredAction,
}

/// Result of handing a fired [`DeferredUpdate`] back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredOutcome {
    /// The phase change was applied
    Applied,
    /// A later filter superseded this update; nothing changed
    Stale,
    /// Scroll the viewport to this item
    ScrollTo(AbsoluteIndex),
    /// Current, but there was nothing to do
    Nothing,
}

/// Everything the UI needs to carry out a filter action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub generation: FilterGeneration,
    pub visible_count: usize,
    pub deferred: Vec<DeferredUpdate>,
}

/// Owns the selected filter and the visual phase of every item in a list.
#[derive(Debug, Clone)]
pub struct FilterController {
    variant: FilterVariant,
    filter: VisibilityFilter,
    categories: Vec<String>,
    phases: Vec<ItemPhase>,
    generation: u64,
    hide_delay: Duration,
    initial_stagger: Duration,
}

impl FilterController {
    /// Snapshot the categories of `items`. Every item starts out
    /// [`ItemPhase::Entering`]; call [`reveal_all`](Self::reveal_all) for the
    /// page-load animation.
    pub fn new<T: Categorized>(items: &[T], variant: FilterVariant, timing: &AnimationTiming) -> Self {
        Self {
            variant,
            filter: VisibilityFilter::All,
            categories: items.iter().map(|i| i.category().to_string()).collect(),
            phases: vec![ItemPhase::Entering; items.len()],
            generation: 0,
            hide_delay: timing.hide_delay(),
            initial_stagger: timing.initial_stagger(),
        }
    }

    /// Page-load reveal: every item fades in, staggered by position.
    pub fn reveal_all(&mut self) -> FilterPlan {
        let generation = self.bump();
        self.filter = VisibilityFilter::All;

        let mut deferred = Vec::with_capacity(self.phases.len());
        for (i, phase) in self.phases.iter_mut().enumerate() {
            *phase = ItemPhase::Entering;
            deferred.push(DeferredUpdate {
                generation,
                delay: stagger(self.initial_stagger, i),
                action: DeferredAction::Reveal(AbsoluteIndex::new(i)),
            });
        }

        FilterPlan {
            generation,
            visible_count: self.phases.len(),
            deferred,
        }
    }

    /// Select `category` and plan the transitions it requires.
    pub fn apply(&mut self, category: &str) -> FilterPlan {
        let generation = self.bump();
        self.filter = VisibilityFilter::parse(category);

        let mut visible_count = 0;
        let mut deferred = Vec::new();

        for (i, phase) in self.phases.iter_mut().enumerate() {
            let index = AbsoluteIndex::new(i);
            if self.filter.matches(&self.categories[i], self.variant.mode) {
                visible_count += 1;
                *phase = ItemPhase::Entering;
                deferred.push(DeferredUpdate {
                    generation,
                    delay: stagger(self.variant.stagger, i),
                    action: DeferredAction::Reveal(index),
                });
            } else {
                *phase = ItemPhase::Leaving;
                deferred.push(DeferredUpdate {
                    generation,
                    delay: self.hide_delay,
                    action: DeferredAction::Remove(index),
                });
            }
        }

        if let Some(delay) = self.variant.scroll_after {
            deferred.push(DeferredUpdate {
                generation,
                delay,
                action: DeferredAction::ScrollToFirstVisible,
            });
        }

        tracing::debug!(
            category,
            generation = generation.get(),
            visible_count,
            total = self.phases.len(),
            "filter applied"
        );

        FilterPlan {
            generation,
            visible_count,
            deferred,
        }
    }

    /// Apply a fired deferred update, unless a later filter superseded it.
    pub fn apply_deferred(&mut self, update: &DeferredUpdate) -> DeferredOutcome {
        if !self.is_current(update.generation) {
            tracing::trace!(
                stale = update.generation.get(),
                current = self.generation,
                "discarding stale filter update"
            );
            return DeferredOutcome::Stale;
        }

        match update.action {
            DeferredAction::Reveal(index) => self.transition(index, ItemPhase::Entering, ItemPhase::Visible),
            DeferredAction::Remove(index) => self.transition(index, ItemPhase::Leaving, ItemPhase::Removed),
            DeferredAction::ScrollToFirstVisible => match self.visible_subset().first() {
                Some(first) => DeferredOutcome::ScrollTo(first),
                None => DeferredOutcome::Nothing,
            },
        }
    }

    pub fn is_current(&self, generation: FilterGeneration) -> bool {
        generation.0 == self.generation
    }

    pub fn generation(&self) -> FilterGeneration {
        FilterGeneration(self.generation)
    }

    pub fn filter(&self) -> &VisibilityFilter {
        &self.filter
    }

    /// Phase of one item; out-of-range indices report `Removed`.
    pub fn phase(&self, index: AbsoluteIndex) -> ItemPhase {
        self.phases
            .get(index.get())
            .copied()
            .unwrap_or(ItemPhase::Removed)
    }

    pub fn phases(&self) -> &[ItemPhase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Items matching the current filter, derived fresh on every call.
    pub fn visible_subset(&self) -> VisibleSubset {
        VisibleSubset::derive(&self.categories, &self.filter, self.variant.mode)
    }

    fn bump(&mut self) -> FilterGeneration {
        self.generation += 1;
        FilterGeneration(self.generation)
    }

    fn transition(&mut self, index: AbsoluteIndex, from: ItemPhase, to: ItemPhase) -> DeferredOutcome {
        match self.phases.get_mut(index.get()) {
            Some(phase) if *phase == from => {
                *phase = to;
                DeferredOutcome::Applied
            }
            _ => DeferredOutcome::Nothing,
        }
    }
}

fn stagger(step: Duration, position: usize) -> Duration {
    step.saturating_mul(u32::try_from(position).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(categories: &[&str]) -> FilterController {
        let timing = AnimationTiming::default();
        FilterController::new(categories, FilterVariant::gallery(&timing), &timing)
    }

    fn menu(categories: &[&str]) -> FilterController {
        let timing = AnimationTiming::default();
        FilterController::new(categories, FilterVariant::menu(&timing), &timing)
    }

    fn fire_all(controller: &mut FilterController, plan: &FilterPlan) -> Vec<DeferredOutcome> {
        let mut updates = plan.deferred.clone();
        updates.sort_by_key(|u| u.delay);
        updates.iter().map(|u| controller.apply_deferred(u)).collect()
    }

    #[test]
    fn exact_match_does_not_match_substrings() {
        let filter = VisibilityFilter::parse("veg");
        assert!(filter.matches("veg", MatchMode::Exact));
        assert!(!filter.matches("momo veg", MatchMode::Exact));
        assert!(filter.matches("momo veg", MatchMode::Contains));
        assert!(!filter.matches("", MatchMode::Contains));
    }

    #[test]
    fn all_matches_everything() {
        let filter = VisibilityFilter::parse("all");
        assert_eq!(filter, VisibilityFilter::All);
        assert!(filter.matches("", MatchMode::Exact));
        assert!(filter.matches("anything", MatchMode::Contains));
    }

    #[test]
    fn subset_conversions_are_inverse() {
        let subset = VisibleSubset::derive(&["a", "b", "a", "c", "a"], &VisibilityFilter::parse("a"), MatchMode::Exact);
        assert_eq!(subset.len(), 3);
        for (v, abs) in subset.iter().enumerate() {
            assert_eq!(subset.to_visible(abs), Some(VisibleIndex::new(v)));
            assert_eq!(subset.to_absolute(VisibleIndex::new(v)), Some(abs));
        }
        assert_eq!(subset.to_visible(AbsoluteIndex::new(1)), None);
        assert_eq!(subset.to_absolute(VisibleIndex::new(3)), None);
    }

    #[test]
    fn apply_sets_immediate_phases() {
        let mut controller = gallery(&["food", "interior", "food"]);
        let plan = controller.apply("food");

        assert_eq!(plan.visible_count, 2);
        assert_eq!(controller.phase(AbsoluteIndex::new(0)), ItemPhase::Entering);
        assert_eq!(controller.phase(AbsoluteIndex::new(1)), ItemPhase::Leaving);
        assert_eq!(controller.phase(AbsoluteIndex::new(2)), ItemPhase::Entering);
        assert_eq!(controller.filter().as_str(), "food");
    }

    #[test]
    fn deferred_updates_complete_the_transition() {
        let mut controller = gallery(&["food", "interior", "food"]);
        let plan = controller.apply("food");
        fire_all(&mut controller, &plan);

        assert_eq!(
            controller.phases(),
            &[ItemPhase::Visible, ItemPhase::Removed, ItemPhase::Visible]
        );
    }

    #[test]
    fn reveal_delays_are_staggered_by_position() {
        let mut controller = gallery(&["a", "b", "a"]);
        let plan = controller.apply("a");

        let reveal_delays: Vec<_> = plan
            .deferred
            .iter()
            .filter(|u| matches!(u.action, DeferredAction::Reveal(_)))
            .map(|u| u.delay)
            .collect();
        assert_eq!(reveal_delays, vec![Duration::ZERO, Duration::from_millis(100)]);

        let remove = plan
            .deferred
            .iter()
            .find(|u| matches!(u.action, DeferredAction::Remove(_)))
            .expect("one item hidden");
        assert_eq!(remove.delay, Duration::from_millis(300));
    }

    #[test]
    fn superseded_updates_are_discarded() {
        let mut controller = gallery(&["a", "b"]);
        let first = controller.apply("a");
        let second = controller.apply("b");

        // The first plan's removal of item 1 fires after the second plan made it visible again.
        let stale_remove = first
            .deferred
            .iter()
            .find(|u| u.action == DeferredAction::Remove(AbsoluteIndex::new(1)))
            .copied()
            .expect("item 1 hidden by first plan");
        assert_eq!(controller.apply_deferred(&stale_remove), DeferredOutcome::Stale);
        assert_eq!(controller.phase(AbsoluteIndex::new(1)), ItemPhase::Entering);

        fire_all(&mut controller, &second);
        assert_eq!(controller.phases(), &[ItemPhase::Removed, ItemPhase::Visible]);
    }

    #[test]
    fn menu_variant_scrolls_to_first_visible_section() {
        let mut controller = menu(&["momo veg", "drinks", "momo chicken"]);
        let plan = controller.apply("momo");

        let scroll = plan
            .deferred
            .iter()
            .find(|u| u.action == DeferredAction::ScrollToFirstVisible)
            .copied()
            .expect("menu plans scroll");
        assert_eq!(scroll.delay, Duration::from_millis(350));
        assert_eq!(controller.apply_deferred(&scroll), DeferredOutcome::ScrollTo(AbsoluteIndex::new(0)));
    }

    #[test]
    fn menu_scroll_with_no_match_does_nothing() {
        let mut controller = menu(&["momo veg", "drinks"]);
        let plan = controller.apply("desserts");
        assert_eq!(plan.visible_count, 0);

        let outcomes = fire_all(&mut controller, &plan);
        assert_eq!(outcomes.last(), Some(&DeferredOutcome::Nothing));
        assert!(controller.visible_subset().is_empty());
    }

    #[test]
    fn gallery_variant_never_scrolls() {
        let mut controller = gallery(&["a", "b"]);
        let plan = controller.apply("a");
        assert!(plan
            .deferred
            .iter()
            .all(|u| u.action != DeferredAction::ScrollToFirstVisible));
    }

    #[test]
    fn reveal_all_restores_every_item() {
        let mut controller = gallery(&["a", "b", "c"]);
        let plan = controller.apply("b");
        fire_all(&mut controller, &plan);

        let plan = controller.reveal_all();
        assert_eq!(plan.visible_count, 3);
        fire_all(&mut controller, &plan);
        assert!(controller.phases().iter().all(|p| p.is_shown()));
        assert_eq!(controller.visible_subset(), VisibleSubset::full(3));
    }

    #[test]
    fn empty_list_is_harmless() {
        let mut controller = gallery(&[]);
        let plan = controller.apply("a");
        assert_eq!(plan.visible_count, 0);
        assert!(plan.deferred.is_empty());
        assert!(controller.visible_subset().is_empty());
        assert_eq!(controller.phase(AbsoluteIndex::new(0)), ItemPhase::Removed);
    }
}
