//! Page content, parsed once at start-up into typed collections.
//!
//! Content documents are JSON. Gallery entries are validated one by one: an
//! entry missing its image, title or category is skipped with a warning
//! instead of surfacing later as an empty caption or a broken image.

use serde::Deserialize;

use crate::counter::parse_leading_integer;
use crate::error::{VitrineError, VitrineResult};
use crate::filter::{Categorized, ALL_CATEGORIES};
use crate::gallery::{GalleryEntry, ItemCollection};

/// A headline number such as "500+ happy guests".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Display text; the counter animates to its leading integer
    pub value: String,
}

impl Stat {
    /// The number the counter animates to (0 if the text has none)
    pub fn target(&self) -> i64 {
        parse_leading_integer(&self.value).unwrap_or(0)
    }

    /// Whatever follows the number, e.g. the "+" in "500+"
    pub fn suffix(&self) -> &str {
        let trimmed = self.value.trim_start();
        let start = trimmed
            .char_indices()
            .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());
        &trimmed[start..]
    }
}

/// A gallery entry as written in the content document.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawGalleryEntry {
    src: Option<String>,
    alt: Option<String>,
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
}

fn required(value: Option<String>, field: &str, index: usize) -> VitrineResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(VitrineError::MalformedEntry {
            index,
            reason: format!("missing {}", field),
        }),
    }
}

impl RawGalleryEntry {
    fn validate(self, index: usize) -> VitrineResult<GalleryEntry> {
        let source_url = required(self.src, "src", index)?;
        let title = required(self.title, "title", index)?;
        let category = required(self.category, "category", index)?;
        Ok(GalleryEntry {
            source_url,
            // Alt text falls back to the caption title.
            alt_text: self.alt.unwrap_or_else(|| title.clone()),
            title,
            description: self.description.unwrap_or_default(),
            category,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawGalleryDocument {
    #[serde(default)]
    stats: Vec<Stat>,
    #[serde(default)]
    filters: Vec<FilterOption>,
    items: Vec<RawGalleryEntry>,
}

/// The gallery page: headline stats and the image collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryContent {
    pub stats: Vec<Stat>,
    /// Filter buttons; derived from the item categories when the document has none
    pub filters: Vec<FilterOption>,
    pub items: ItemCollection,
}

/// Parse a gallery document. Malformed entries are skipped and logged; the
/// remaining items are indexed in document order.
pub fn parse_gallery(json: &str) -> VitrineResult<GalleryContent> {
    let doc: RawGalleryDocument = serde_json::from_str(json)?;
    let total = doc.items.len();

    let entries: Vec<GalleryEntry> = doc
        .items
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| match raw.validate(i) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping gallery entry: {}", e);
                None
            }
        })
        .collect();

    tracing::info!(loaded = entries.len(), skipped = total - entries.len(), "gallery content parsed");

    let items = ItemCollection::new(entries);
    let filters = if doc.filters.is_empty() {
        derive_filters(&items)
    } else {
        doc.filters
    };

    Ok(GalleryContent {
        stats: doc.stats,
        filters,
        items,
    })
}

/// "All" followed by one button per category, labelled with the capitalised tag.
fn derive_filters(items: &ItemCollection) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        value: ALL_CATEGORIES.to_string(),
        label: "All".to_string(),
    })
    .chain(items.categories().into_iter().map(|category| {
        let mut chars = category.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        FilterOption { value: category, label }
    }))
    .collect()
}

/// One dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
}

/// A filterable block of the menu, e.g. "Steamed Momo".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuSection {
    /// Anchor id of the section element
    pub id: String,
    pub name: String,
    /// Space-separated tags, e.g. "momo veg"
    pub category: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Categorized for MenuSection {
    fn category(&self) -> &str {
        &self.category
    }
}

/// A filter button: the value it selects and its label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// The menu page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuContent {
    pub filters: Vec<FilterOption>,
    pub sections: Vec<MenuSection>,
}

pub fn parse_menu(json: &str) -> VitrineResult<MenuContent> {
    let menu: MenuContent = serde_json::from_str(json)?;
    tracing::info!(sections = menu.sections.len(), "menu content parsed");
    Ok(menu)
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Categorized for ProjectCard {
    fn category(&self) -> &str {
        &self.category
    }
}

/// The portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortfolioContent {
    pub owner: String,
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub filters: Vec<FilterOption>,
    pub projects: Vec<ProjectCard>,
}

pub fn parse_portfolio(json: &str) -> VitrineResult<PortfolioContent> {
    let portfolio: PortfolioContent = serde_json::from_str(json)?;
    tracing::info!(projects = portfolio.projects.len(), "portfolio content parsed");
    Ok(portfolio)
}
