//! Binary font export for generated sources

pub mod compiler;

pub use compiler::FontCompiler;
