//! Geometric Primitives and Operations

pub mod grid;

// Re-export commonly used items
pub use grid::{center_of, raised_dots, DotIndex, DotRadii, GlyphBox, DOTS_PER_CELL};
