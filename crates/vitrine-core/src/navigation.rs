//! Scroll-driven navigation: the navbar state and in-page anchor targets.

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Fixed-navbar clearance when following an anchor link.
pub const ANCHOR_OFFSET: f64 = 80.0;

/// Fixed-navbar clearance when the menu scrolls to its first visible section.
pub const MENU_SCROLL_OFFSET: f64 = 100.0;

/// Whether the navbar is in its "scrolled" state at vertical offset `scroll_y`.
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Where an in-page link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    /// A bare `#`: the top of the page
    Top,
    /// `#id`
    Element(String),
}

impl AnchorTarget {
    /// Parse an `href`. Anything not starting with `#` is an ordinary link.
    pub fn parse(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            Some(AnchorTarget::Top)
        } else {
            Some(AnchorTarget::Element(id.to_string()))
        }
    }
}

/// Document offset to scroll to so an element whose viewport top is
/// `element_top` lands `nav_offset` below the top of the window.
pub fn scroll_destination(element_top: f64, page_offset: f64, nav_offset: f64) -> f64 {
    element_top + page_offset - nav_offset
}
