//! Theme for the gallery view.

mod styles;

pub use styles::GLOBAL_STYLES;
