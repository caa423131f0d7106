//! A single displayable image.

use crate::filter::Categorized;

use super::AbsoluteIndex;

/// A validated gallery entry that has not been placed in a collection yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    /// Image source (URL or asset path)
    pub source_url: String,
    /// Alternative text for the image
    pub alt_text: String,
    /// Caption title
    pub title: String,
    /// Caption body
    pub description: String,
    /// Category tag used by the filter buttons
    pub category: String,
}

/// One image in an [`ItemCollection`](super::ItemCollection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub source_url: String,
    pub alt_text: String,
    pub title: String,
    pub description: String,
    pub category: String,
    original_index: AbsoluteIndex,
}

impl GalleryItem {
    pub(super) fn from_entry(entry: GalleryEntry, original_index: AbsoluteIndex) -> Self {
        Self {
            source_url: entry.source_url,
            alt_text: entry.alt_text,
            title: entry.title,
            description: entry.description,
            category: entry.category,
            original_index,
        }
    }

    /// Position of this item in the full collection
    pub fn original_index(&self) -> AbsoluteIndex {
        self.original_index
    }
}

impl Categorized for GalleryItem {
    fn category(&self) -> &str {
        &self.category
    }
}
