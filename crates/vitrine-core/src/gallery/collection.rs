//! The immutable, ordered set of gallery items.

use super::{AbsoluteIndex, GalleryEntry, GalleryItem};

/// Ordered gallery items, indexed by [`AbsoluteIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    items: Vec<GalleryItem>,
}

impl ItemCollection {
    /// Build a collection, assigning each entry its original index in order.
    pub fn new(entries: impl IntoIterator<Item = GalleryEntry>) -> Self {
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| GalleryItem::from_entry(entry, AbsoluteIndex::new(i)))
            .collect();
        Self { items }
    }

    /// Look up an item by its original index
    pub fn get(&self, index: AbsoluteIndex) -> Option<&GalleryItem> {
        self.items.get(index.get())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in &self.items {
            if !seen.iter().any(|c| c == &item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str) -> GalleryEntry {
        GalleryEntry {
            source_url: format!("images/{}.jpg", title),
            alt_text: title.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn original_indices_follow_input_order() {
        let collection = ItemCollection::new(vec![
            entry("momo", "food"),
            entry("hall", "interior"),
            entry("chowmein", "food"),
        ]);

        for (i, item) in collection.iter().enumerate() {
            assert_eq!(item.original_index(), AbsoluteIndex::new(i));
        }
        assert_eq!(
            collection.get(AbsoluteIndex::new(1)).map(|i| i.title.as_str()),
            Some("hall")
        );
        assert!(collection.get(AbsoluteIndex::new(3)).is_none());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let collection = ItemCollection::new(vec![
            entry("a", "food"),
            entry("b", "interior"),
            entry("c", "food"),
            entry("d", "events"),
        ]);
        assert_eq!(collection.categories(), vec!["food", "interior", "events"]);
    }

    #[test]
    fn empty_collection() {
        let collection = ItemCollection::default();
        assert!(collection.is_empty());
        assert!(collection.categories().is_empty());
    }
}
