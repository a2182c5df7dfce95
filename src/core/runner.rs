//! Application runner logic
//!
//! Resolves settings, generates the font, saves it and optionally compiles it.

use crate::core::cli::{CliArgs, RunSettings};
use crate::core::config_file::ConfigFile;
use crate::data::{save_ufo, UfoBackend};
use crate::font_source::{build_font, PATTERN_COUNT};
use crate::qa::FontCompiler;
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::info;

/// What a generation run produced
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub glyph_count: usize,
    pub style: String,
    pub ufo_path: PathBuf,
    pub ttf_path: Option<PathBuf>,
}

/// Run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to [`generate`].
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    cli_args.validate().map_err(|message| anyhow!(message))?;

    let config = match &cli_args.config {
        Some(path) => ConfigFile::load_from(path),
        None => ConfigFile::load(),
    };
    let settings = cli_args.resolve(config.as_ref());

    let report = generate(&settings)?;
    println!(
        "Generated {} Braille glyphs ({} dots) in {}",
        report.glyph_count,
        report.style,
        report.ufo_path.display()
    );
    if let Some(ttf) = &report.ttf_path {
        println!("Compiled binary font: {}", ttf.display());
    }
    Ok(())
}

/// Build the font, save the UFO, and compile it when a TTF path is set
pub fn generate(settings: &RunSettings) -> Result<GenerationReport> {
    let font = build_font(&settings.params, UfoBackend::new())?;
    let glyph_count = font.default_layer().len();
    debug_assert_eq!(glyph_count, PATTERN_COUNT);

    save_ufo(&font, &settings.output)?;
    info!("Wrote {} glyphs to {:?}", glyph_count, settings.output);

    let ttf_path = match &settings.ttf {
        Some(ttf) => Some(FontCompiler::new().compile(&settings.output, ttf)?),
        None => None,
    };

    Ok(GenerationReport {
        glyph_count,
        style: settings.params.style.clone(),
        ufo_path: settings.output.clone(),
        ttf_path,
    })
}
