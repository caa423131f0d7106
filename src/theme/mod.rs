//! Visual theme: global stylesheet with light and dark palettes.

mod styles;

pub use styles::GLOBAL_STYLES;
