//! Animation delays and durations.
//!
//! The defaults are the site's standard timings. Everything that schedules
//! deferred work reads its delays from here, so a single
//! [`AnimationTiming::reduced_motion`] switch collapses the whole site to
//! instant transitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Every delay used by the page controllers, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    /// Per-position stagger of the reveal on page load
    pub initial_stagger_ms: u64,
    /// Per-position stagger when a gallery filter shows items
    pub gallery_stagger_ms: u64,
    /// Per-position stagger when a menu filter shows sections
    pub menu_stagger_ms: u64,
    /// Fade-out time before a hidden item leaves the layout
    pub hide_delay_ms: u64,
    /// Wait before the menu scrolls to its first visible section
    pub menu_scroll_delay_ms: u64,
    /// Lightbox image fade before the data swap
    pub crossfade_ms: u64,
    /// Stat counters, 0 to final value
    pub stat_counter_ms: u64,
    /// Gallery "total images" counter after a filter change
    pub count_update_ms: u64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            initial_stagger_ms: 100,
            gallery_stagger_ms: 50,
            menu_stagger_ms: 100,
            hide_delay_ms: 300,
            menu_scroll_delay_ms: 350,
            crossfade_ms: 200,
            stat_counter_ms: 2000,
            count_update_ms: 500,
        }
    }
}

impl AnimationTiming {
    /// All delays zero: items snap, counters jump to their final value.
    pub fn reduced_motion() -> Self {
        Self {
            initial_stagger_ms: 0,
            gallery_stagger_ms: 0,
            menu_stagger_ms: 0,
            hide_delay_ms: 0,
            menu_scroll_delay_ms: 0,
            crossfade_ms: 0,
            stat_counter_ms: 0,
            count_update_ms: 0,
        }
    }

    pub fn initial_stagger(&self) -> Duration {
        Duration::from_millis(self.initial_stagger_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn crossfade(&self) -> Duration {
        Duration::from_millis(self.crossfade_ms)
    }

    pub fn stat_counter(&self) -> Duration {
        Duration::from_millis(self.stat_counter_ms)
    }

    pub fn count_update(&self) -> Duration {
        Duration::from_millis(self.count_update_ms)
    }
}
