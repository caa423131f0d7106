//! Content documents bundled into the binary.

use vitrine_core::content::{
    parse_gallery, parse_menu, parse_portfolio, GalleryContent, MenuContent, PortfolioContent,
};
use vitrine_core::VitrineResult;

const MENU_JSON: &str = include_str!("menu.json");
const GALLERY_JSON: &str = include_str!("gallery.json");
const PORTFOLIO_JSON: &str = include_str!("portfolio.json");

pub fn menu() -> VitrineResult<MenuContent> {
    parse_menu(MENU_JSON)
}

pub fn gallery() -> VitrineResult<GalleryContent> {
    parse_gallery(GALLERY_JSON)
}

pub fn portfolio() -> VitrineResult<PortfolioContent> {
    parse_portfolio(PORTFOLIO_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{AnimationTiming, Categorized, FilterController, FilterVariant};

    #[test]
    fn bundled_gallery_is_complete() {
        let gallery = gallery().unwrap();
        assert_eq!(gallery.items.len(), 9);
        assert_eq!(gallery.filters[0].value, "all");
        assert!(gallery.stats.iter().all(|s| s.target() > 0));
    }

    #[test]
    fn every_menu_filter_matches_a_section() {
        let menu = menu().unwrap();
        let timing = AnimationTiming::default();
        let mut controller = FilterController::new(&menu.sections, FilterVariant::menu(&timing), &timing);
        for filter in &menu.filters {
            let plan = controller.apply(&filter.value);
            assert!(plan.visible_count > 0, "filter {} shows nothing", filter.value);
        }
        // "veg" is a tag of the steamed momo section as well as the thali
        let plan = controller.apply("veg");
        assert_eq!(plan.visible_count, 2);
        assert!(menu.sections[0].category().contains("veg"));
    }

    #[test]
    fn bundled_portfolio_parses() {
        let portfolio = portfolio().unwrap();
        assert!(!portfolio.projects.is_empty());
        assert!(portfolio
            .projects
            .iter()
            .all(|p| portfolio.filters.iter().any(|f| f.value == p.category)));
    }
}
