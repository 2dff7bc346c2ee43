//! Font registration and text metrics.

mod font_store;

pub use font_store::{FontLoadError, FontStore};
