//! Reusable UI components for the showcase pages.

mod button;
mod category_pills;
mod lightbox;
mod stat_counter;
mod theme_toggle;

pub use button::*;
pub use category_pills::*;
pub use lightbox::*;
pub use stat_counter::*;
pub use theme_toggle::*;
