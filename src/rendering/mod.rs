//! Outline rendering for Braille dots

pub mod dot_shapes;

pub use dot_shapes::{circle_path, rectangle_path, render_dot, DotStyle, CIRCLE_KAPPA};
