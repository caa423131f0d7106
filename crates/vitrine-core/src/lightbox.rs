//! Gallery lightbox: opening an item and stepping through the visible subset.
//!
//! The lightbox keeps its cursor in the visible index space and resolves it
//! back to an [`AbsoluteIndex`] whenever it needs display data. The indicator
//! shown to the user ("2 / 3") is therefore always counted within the
//! currently visible items, never the full collection.
//!
//! Stepping is a cross-fade: the image hides at once, and the displayed data
//! only swaps when the UI commits the returned [`SwapTicket`] after the fade
//! delay. Only the most recent ticket can commit, so holding an arrow key
//! cannot leave an older image on screen.

use crate::filter::VisibleSubset;
use crate::gallery::{AbsoluteIndex, GalleryItem, ItemCollection, VisibleIndex};

/// Carousel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Keys the lightbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Lightbox closed, key not bound, or nothing to step through
    Ignored,
    Closed,
    Stepped(SwapTicket),
}

/// Permission to swap the displayed item once the fade-out has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapTicket {
    seq: u64,
    target: AbsoluteIndex,
}

impl SwapTicket {
    /// The item this ticket will display
    pub fn target(&self) -> AbsoluteIndex {
        self.target
    }
}

/// Everything the overlay renders.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxView<'a> {
    pub item: &'a GalleryItem,
    /// One-based position within the visible subset
    pub position: usize,
    /// Size of the visible subset
    pub total: usize,
    /// False while a cross-fade is in progress
    pub image_visible: bool,
}

/// Open/closed state, carousel cursor and cross-fade bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    cursor: Option<VisibleIndex>,
    // The item the cursor resolves to; survives filter changes.
    current: Option<AbsoluteIndex>,
    // The item whose data is on screen; lags `current` during a cross-fade.
    displayed: Option<AbsoluteIndex>,
    image_visible: bool,
    swap_seq: u64,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on the clicked item.
    ///
    /// Returns `false` and stays closed if the item is not in `subset`
    /// (a click on an element that has since been filtered out).
    pub fn open(&mut self, clicked: AbsoluteIndex, subset: &VisibleSubset) -> bool {
        let Some(cursor) = subset.to_visible(clicked) else {
            tracing::debug!(item = %clicked, "ignoring open on an item outside the visible subset");
            return false;
        };

        self.cursor = Some(cursor);
        self.current = Some(clicked);
        self.displayed = Some(clicked);
        self.image_visible = true;
        self.swap_seq += 1;

        tracing::debug!(item = %clicked, position = cursor.ordinal(), total = subset.len(), "lightbox opened");
        true
    }

    /// Move the cursor one step, wrapping at both ends.
    ///
    /// Returns the ticket to commit after the cross-fade delay, or `None` if
    /// the lightbox is closed or the subset is empty.
    pub fn step(&mut self, direction: Direction, subset: &VisibleSubset) -> Option<SwapTicket> {
        let cursor = self.cursor?;
        if subset.is_empty() {
            return None;
        }

        let len = subset.len() as isize;
        let next = VisibleIndex::new((cursor.get() as isize + direction.offset()).rem_euclid(len) as usize);
        let target = subset.to_absolute(next)?;

        self.cursor = Some(next);
        self.current = Some(target);
        self.image_visible = false;
        self.swap_seq += 1;

        Some(SwapTicket {
            seq: self.swap_seq,
            target,
        })
    }

    /// Swap in the ticket's item and reveal the image.
    ///
    /// Returns `false` if the ticket was superseded by a later step, an
    /// open, or a close.
    pub fn commit_swap(&mut self, ticket: SwapTicket) -> bool {
        if !self.is_open() || ticket.seq != self.swap_seq {
            return false;
        }
        self.displayed = Some(ticket.target);
        self.image_visible = true;
        true
    }

    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("lightbox closed");
        }
        self.cursor = None;
        self.current = None;
        self.displayed = None;
        self.image_visible = false;
        self.swap_seq += 1;
    }

    /// Keyboard binding. Keys are ignored entirely while closed.
    pub fn handle_key(&mut self, key: LightboxKey, subset: &VisibleSubset) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            LightboxKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            LightboxKey::ArrowLeft => self
                .step(Direction::Previous, subset)
                .map_or(KeyOutcome::Ignored, KeyOutcome::Stepped),
            LightboxKey::ArrowRight => self
                .step(Direction::Next, subset)
                .map_or(KeyOutcome::Ignored, KeyOutcome::Stepped),
        }
    }

    /// Re-derive the cursor after the visible subset changed.
    ///
    /// The cursor follows the current item to its new visible position. If
    /// the item is no longer visible the lightbox closes. Returns whether the
    /// lightbox is still open.
    pub fn resync(&mut self, subset: &VisibleSubset) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        match subset.to_visible(current) {
            Some(cursor) => {
                self.cursor = Some(cursor);
                true
            }
            None => {
                self.close();
                false
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    /// Background scrolling is disabled exactly while the lightbox is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn cursor(&self) -> Option<VisibleIndex> {
        self.cursor
    }

    /// The item the cursor points at
    pub fn current(&self) -> Option<AbsoluteIndex> {
        self.current
    }

    /// "k + 1" for a cursor at visible position k
    pub fn position_indicator(&self) -> Option<usize> {
        self.cursor.map(VisibleIndex::ordinal)
    }

    pub fn image_visible(&self) -> bool {
        self.image_visible
    }

    /// Resolve the overlay contents against the collection and the subset.
    pub fn view<'a>(&self, items: &'a ItemCollection, subset: &VisibleSubset) -> Option<LightboxView<'a>> {
        let position = self.position_indicator()?;
        let item = items.get(self.displayed?)?;
        Some(LightboxView {
            item,
            position,
            total: subset.len(),
            image_visible: self.image_visible,
        })
    }
}
