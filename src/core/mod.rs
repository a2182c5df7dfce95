//! Core application functionality
//!
//! This module contains the driver around the font generator:
//! - CLI parsing and validation
//! - Settings file handling
//! - Error types
//! - Running a generation end to end

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::{CliArgs, RunSettings};
pub use config_file::ConfigFile;
pub use errors::BrailleError;
pub use runner::{generate, run_app, GenerationReport};
