//! Vitrine UI Components
//!
//! Dioxus components for the restaurant and portfolio pages. Components hold
//! no business state of their own: each renders what a `vitrine-core`
//! controller reports and forwards user input back as events.
//!
//! ## Browser bridges
//!
//! A few behaviors need the page's window rather than a single element:
//!
//! - **Visibility**: [`use_first_visible`] wraps an `IntersectionObserver`
//! - **Scroll lock**: [`set_scroll_locked`] toggles `body` overflow
//! - **Keyboard**: [`use_lightbox_keys`] listens on `document` for Escape and the arrows
//! - **Counters**: [`run_counter`] drives a number at frame rate

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
