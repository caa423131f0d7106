//! Gallery items and the two index spaces they live in.
//!
//! An [`ItemCollection`] is built once from parsed content and never changes
//! afterwards; only the visibility of its items does. Each item remembers its
//! [`AbsoluteIndex`] so that a position in a filtered view can always be
//! traced back to the item it came from.

mod collection;
mod index;
mod item;

pub use collection::ItemCollection;
pub use index::{AbsoluteIndex, VisibleIndex};
pub use item::{GalleryEntry, GalleryItem};
