//! Vitrine Core Library
//!
//! State and invariants behind the interactive pieces of the showcase pages:
//! category filtering, the gallery lightbox, animated counters, scroll
//! navigation and the persisted theme preference.
//!
//! ## Overview
//!
//! Nothing in this crate touches a UI toolkit. Every controller is an owned
//! state object; the UI layer feeds it events (clicks, keys, elapsed time,
//! visibility changes) and renders whatever it reports back. Deferred work
//! such as staggered fades and cross-fade swaps is described as data and
//! carries a generation id, so a superseded callback can be recognised and
//! dropped when it finally fires.
//!
//! ## Index spaces
//!
//! Gallery items live in two index spaces at once:
//!
//! - [`AbsoluteIndex`]: position in the full, unfiltered collection
//! - [`VisibleIndex`]: position in the subset matching the active filter
//!
//! [`VisibleSubset`] converts between them; the lightbox cursor is always a
//! `VisibleIndex`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vitrine_core::{content, Direction, FilterController, FilterVariant, Lightbox};
//! use vitrine_core::{AbsoluteIndex, AnimationTiming};
//!
//! let gallery = content::parse_gallery(GALLERY_JSON)?;
//! let timing = AnimationTiming::default();
//! let mut filter = FilterController::new(gallery.items.as_slice(), FilterVariant::gallery(&timing), &timing);
//! filter.apply("food");
//!
//! let mut lightbox = Lightbox::new();
//! let subset = filter.visible_subset();
//! lightbox.open(AbsoluteIndex::new(2), &subset);
//! lightbox.step(Direction::Next, &subset);
//! ```

pub mod content;
pub mod counter;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod lightbox;
pub mod navigation;
pub mod preferences;
pub mod storage;
pub mod timing;

// Re-exports
pub use counter::{ease_out_quad, parse_leading_integer, CounterAnimation, VisibilityLatch};
pub use error::{VitrineError, VitrineResult};
pub use filter::{
    Categorized, DeferredAction, DeferredOutcome, DeferredUpdate, FilterController,
    FilterGeneration, FilterPlan, FilterVariant, ItemPhase, MatchMode, VisibilityFilter,
    VisibleSubset, ALL_CATEGORIES,
};
pub use gallery::{AbsoluteIndex, GalleryEntry, GalleryItem, ItemCollection, VisibleIndex};
pub use lightbox::{Direction, KeyOutcome, Lightbox, LightboxKey, LightboxView, SwapTicket};
pub use navigation::{navbar_scrolled, scroll_destination, AnchorTarget};
pub use preferences::{MemoryBackend, PreferenceBackend, PreferenceStore, Theme, THEME_KEY};
pub use storage::Storage;
pub use timing::AnimationTiming;
