//! User configuration file handling
//!
//! Manages settings from ~/.config/braille-font/settings.json

use crate::font_source::BrailleParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/braille-font/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub em: Option<f64>,
    pub width: Option<f64>,
    pub ymax: Option<f64>,
    pub ymin: Option<f64>,
    /// Dot style (e.g., "rectangle", "circle", "gapless")
    pub style: Option<String>,
    pub ratio: Option<f64>,
    /// Default UFO output path
    pub output: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the braille-font config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("braille-font")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Settings file populated with the built-in defaults
    pub fn with_defaults() -> Self {
        let defaults = BrailleParams::default();
        Self {
            em: Some(defaults.em),
            width: Some(defaults.width),
            ymax: Some(defaults.ymax),
            ymin: Some(defaults.ymin),
            style: Some(defaults.style),
            ratio: Some(defaults.ratio),
            output: Some(PathBuf::from(crate::core::cli::DEFAULT_OUTPUT)),
        }
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file
    ///
    /// A missing, unreadable or malformed file yields `None`; the latter two
    /// are logged.
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/braille-font directory
    /// 2. A settings.json file with the built-in defaults
    /// 3. A logs/ directory for --log-file output
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())?;
        Ok(())
    }

    /// Returns the settings file path and whether it was newly written
    pub fn initialize_in(config_dir: &Path) -> anyhow::Result<(PathBuf, bool)> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        let created = !settings_path.exists();
        if created {
            Self::with_defaults().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        Ok((settings_path, created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_file() {
        let config: ConfigFile =
            serde_json::from_str(r#"{ "style": "gapless", "ymin": -150 }"#).unwrap();
        assert_eq!(config.style.as_deref(), Some("gapless"));
        assert_eq!(config.ymin, Some(-150.0));
        assert_eq!(config.width, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let config = ConfigFile::with_defaults();
        config.save_to(&path).unwrap();

        assert_eq!(ConfigFile::load_from(&path), Some(config));
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(ConfigFile::load_from(&path), None);
        assert_eq!(
            ConfigFile::load_from(&dir.path().join("missing.json")),
            None
        );
    }

    #[test]
    fn test_initialize_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let (path, created) = ConfigFile::initialize_in(dir.path()).unwrap();
        assert!(created);
        assert!(dir.path().join("logs").is_dir());

        let custom = ConfigFile {
            ratio: Some(0.4),
            ..ConfigFile::default()
        };
        custom.save_to(&path).unwrap();

        let (_, created) = ConfigFile::initialize_in(dir.path()).unwrap();
        assert!(!created);
        assert_eq!(ConfigFile::load_from(&path), Some(custom));
    }
}
