//! Page sections for the showcase site.
//!
//! Generic pieces (pills, lightbox, counters) live in `vitrine-ui`; these are
//! the page-specific sections built from them.

mod gallery_grid;
mod menu_board;
mod nav_bar;
mod reveal;
pub mod scroll;

pub use gallery_grid::GalleryGrid;
pub use menu_board::MenuBoard;
pub use nav_bar::NavBar;
pub use reveal::Reveal;
