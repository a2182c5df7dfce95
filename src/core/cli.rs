//! Command line interface for the Braille font generator
//!
//! Every geometry option is optional here; missing values fall back to the
//! settings file and then to built-in defaults (see [`CliArgs::resolve`]).

use crate::core::config_file::ConfigFile;
use crate::font_source::BrailleParams;
use crate::rendering::DotStyle;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Default output location for the generated UFO
pub const DEFAULT_OUTPUT: &str = "BrailleFont-Regular.ufo";

/// braille-font CLI arguments
///
/// Examples:
///   braille-font                                   # Defaults, writes BrailleFont-Regular.ufo
///   braille-font --style gapless                   # Touching square dots
///   braille-font --style rectangle --ratio 0.6     # Small square dots
///   braille-font --width 600 --ymax 900 --ymin -300
///   braille-font --output out/Braille.ufo --ttf out/Braille.ttf
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "braille-font",
    version,
    about = "Generate a complete Braille pattern font (U+2800-U+28FF)",
    long_about = "Generates one glyph for each of the 256 Unicode Braille patterns, drawing every raised dot on a fixed 2x4 grid, and saves the result as a UFO font source. Optionally compiles it to a binary font with fontc."
)]
pub struct CliArgs {
    /// Units per em
    #[clap(long = "em", help = "Units per em")]
    pub em: Option<f64>,

    /// Advance width shared by every glyph
    #[clap(long = "width", help = "Advance width of every glyph")]
    pub width: Option<f64>,

    /// Top of the dot grid
    #[clap(
        long = "ymax",
        allow_hyphen_values = true,
        help = "Top of the Braille cell"
    )]
    pub ymax: Option<f64>,

    /// Bottom of the dot grid, usually negative
    #[clap(
        long = "ymin",
        allow_hyphen_values = true,
        help = "Bottom of the Braille cell"
    )]
    pub ymin: Option<f64>,

    /// Dot style: rectangle, circle or gapless
    #[clap(
        long = "style",
        short = 's',
        help = "Dot style",
        long_help = "Dot style. Available styles: rectangle, circle (default), gapless. Gapless draws full-size rectangles so neighbouring dots touch, and ignores --ratio."
    )]
    pub style: Option<String>,

    /// Dot size relative to the largest size that avoids overlap
    #[clap(
        long = "ratio",
        short = 'r',
        help = "Dot size ratio in (0, 1]",
        long_help = "Dot size relative to the largest size at which neighbouring dots do not overlap. Must lie in (0, 1]. Ignored for the gapless style."
    )]
    pub ratio: Option<f64>,

    /// Where to write the UFO font source
    #[clap(long = "output", short = 'o', help = "Output UFO directory")]
    pub output: Option<PathBuf>,

    /// Also compile the UFO into a binary font with fontc
    #[clap(
        long = "ttf",
        help = "Compile to a binary font at this path",
        long_help = "After saving the UFO, run fontc to compile it into a binary font at this path. Requires fontc on PATH."
    )]
    pub ttf: Option<PathBuf>,

    /// Read settings from this file instead of the user config directory
    #[clap(long = "config", short = 'c', help = "Settings file to use")]
    pub config: Option<PathBuf>,

    /// Write a settings file with the built-in defaults
    #[clap(
        long = "new-config",
        help = "Initialize the user settings file with default values",
        long_help = "Create ~/.config/braille-font/settings.json filled with the built-in defaults, so they can be edited instead of repeated on the command line. An existing file is left untouched."
    )]
    pub new_config: bool,

    /// Write logs to the user log directory instead of stderr
    #[clap(long = "log-file", help = "Write logs to ~/.config/braille-font/logs/")]
    pub log_file: bool,

    /// Enable debug logging
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub params: BrailleParams,
    pub output: PathBuf,
    pub ttf: Option<PathBuf>,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Only checks that can be made without the settings file happen here;
    /// geometry is validated once all sources are merged.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(style) = &self.style {
            if style.parse::<DotStyle>().is_err() {
                let available = DotStyle::all_names().join(", ");
                return Err(format!(
                    "Unknown style: '{style}'\nAvailable styles: {available}"
                ));
            }
        }

        if let Some(config) = &self.config {
            if !config.is_file() {
                return Err(format!(
                    "Settings file does not exist: {}\nMake sure the path is correct and the file exists.",
                    config.display()
                ));
            }
        }

        Ok(())
    }

    /// Merge CLI flags over the settings file over built-in defaults
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Settings file
    /// 3. Built-in default
    pub fn resolve(&self, config: Option<&ConfigFile>) -> RunSettings {
        let defaults = BrailleParams::default();
        let file = config.cloned().unwrap_or_default();

        let pick = |cli: Option<f64>, file: Option<f64>, default: f64, name: &str| {
            let value = cli.or(file).unwrap_or(default);
            debug!("Using {} = {}", name, value);
            value
        };

        let params = BrailleParams {
            em: pick(self.em, file.em, defaults.em, "em"),
            width: pick(self.width, file.width, defaults.width, "width"),
            ymax: pick(self.ymax, file.ymax, defaults.ymax, "ymax"),
            ymin: pick(self.ymin, file.ymin, defaults.ymin, "ymin"),
            style: self.style.clone().or(file.style).unwrap_or(defaults.style),
            ratio: pick(self.ratio, file.ratio, defaults.ratio, "ratio"),
        };

        let output = self
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        RunSettings {
            params,
            output,
            ttf: self.ttf.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_ymin() {
        let args = CliArgs::parse_from(["braille-font", "--ymin", "-250", "--style", "gapless"]);
        assert_eq!(args.ymin, Some(-250.0));
        assert_eq!(args.style.as_deref(), Some("gapless"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_style() {
        let args = CliArgs::parse_from(["braille-font", "--style", "triangle"]);
        let message = args.validate().unwrap_err();
        assert!(message.contains("triangle"));
        assert!(message.contains("rectangle, circle, gapless"));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = CliArgs::default().resolve(None);
        assert_eq!(settings.params, BrailleParams::default());
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.ttf, None);
    }

    #[test]
    fn test_cli_overrides_settings_file() {
        let config = ConfigFile {
            width: Some(600.0),
            ratio: Some(0.5),
            style: Some("rectangle".to_string()),
            output: Some(PathBuf::from("from-config.ufo")),
            ..ConfigFile::default()
        };
        let args = CliArgs::parse_from(["braille-font", "--ratio", "0.9"]);

        let settings = args.resolve(Some(&config));
        assert_eq!(settings.params.width, 600.0);
        assert_eq!(settings.params.ratio, 0.9);
        assert_eq!(settings.params.style, "rectangle");
        assert_eq!(settings.params.em, 1000.0);
        assert_eq!(settings.output, PathBuf::from("from-config.ufo"));
    }
}
