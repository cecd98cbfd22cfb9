//! Configuration file support for gains-graph.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/gains-graph/config.toml`.
//! Every field is optional.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// How the export file is read
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// The delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(Error::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }
}

/// Chart rendering and display
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Where charts go when no output path is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_open_viewer")]
    pub open_viewer: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output_dir: default_output_dir(),
            open_viewer: default_open_viewer(),
        }
    }
}

// Default value functions
fn default_delimiter() -> String {
    ",".into()
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_output_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gains-graph")
}

fn default_open_viewer() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            other => {
                tracing::debug!("No config file found at {:?}, using defaults", other);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("gains-graph").join("config.toml"))
    }

    /// Reject values that would only fail later, mid-run
    pub fn validate(&self) -> Result<()> {
        self.input.delimiter_byte()?;
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(Error::Config(format!(
                "chart size must be non-zero, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.delimiter, ",");
        assert_eq!(config.chart.width, 1280);
        assert_eq!(config.chart.height, 720);
        assert!(config.chart.open_viewer);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.chart.width, parsed.chart.width);
        assert_eq!(config.chart.output_dir, parsed.chart.output_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[chart]
open_viewer = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(!config.chart.open_viewer);
        assert_eq!(config.chart.width, 1280); // default
        assert_eq!(config.input.delimiter, ","); // default
    }

    #[test]
    fn test_load_from_rejects_bad_delimiter() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[input]\ndelimiter = \";;\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::FileAccess { .. }));
    }

    #[test]
    fn test_delimiter_byte() {
        let config = InputConfig {
            delimiter: "\t".into(),
        };
        assert_eq!(config.delimiter_byte().unwrap(), b'\t');
    }
}
