//! Index newtypes for the full collection and the visible subset.

use std::fmt;

/// Position of an item in the full, unfiltered collection.
///
/// Assigned once when the collection is built and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbsoluteIndex(usize);

impl AbsoluteIndex {
    /// Wrap a raw position in the full collection
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw position
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for AbsoluteIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position of an item within the currently visible subset.
///
/// Only meaningful together with the [`VisibleSubset`](crate::VisibleSubset)
/// it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisibleIndex(usize);

impl VisibleIndex {
    /// Wrap a raw position in the visible subset
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw, zero-based position
    pub const fn get(self) -> usize {
        self.0
    }

    /// One-based position, as shown to the user ("3 / 7")
    pub const fn ordinal(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for VisibleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_index_ordinal_is_one_based() {
        assert_eq!(VisibleIndex::new(0).ordinal(), 1);
        assert_eq!(VisibleIndex::new(4).ordinal(), 5);
        assert_eq!(VisibleIndex::new(4).to_string(), "5");
    }

    #[test]
    fn absolute_index_display() {
        assert_eq!(AbsoluteIndex::new(7).to_string(), "#7");
    }

    #[test]
    fn absolute_indices_order_by_position() {
        assert!(AbsoluteIndex::new(1) < AbsoluteIndex::new(2));
    }
}
