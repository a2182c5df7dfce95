//! Font data backends and format conversions

pub mod conversions;
pub mod ufo;

pub use ufo::{load_ufo_from_path, save_ufo, UfoBackend};
