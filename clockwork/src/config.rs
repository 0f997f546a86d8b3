//! Configuration file support.
//!
//! A `clockwork.toml` picks the circle that angles live on and how statistics behave:
//!
//! ```toml
//! [circle]
//! unit = "deg"            # deg | rad | grad | turn | hour | doy
//! # full_arc = 365.2422   # overrides `unit` when present
//!
//! [stats]
//! skip_nan = false
//! zero_resultant = "error"  # error | zero
//! ```
//!
//! Every section and key is optional; an empty file yields degrees with the strict defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use clockwork_core::angular::{DayOfYear, Degree, Gradian, HourAngle, Radian, Turn};
use clockwork_core::{Circle, CircularError, MeanOptions};

/// Errors raised while loading or interpreting a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `circle.unit` names no known unit.
    #[error("Unknown angle unit: {0}. Use 'deg', 'rad', 'grad', 'turn', 'hour' or 'doy'")]
    UnknownUnit(String),

    /// No configuration file was found.
    #[error("No clockwork.toml found in standard locations")]
    NotFound,

    /// The configured values describe an invalid circle.
    #[error(transparent)]
    Circular(#[from] CircularError),
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockworkConfig {
    /// Circle settings.
    #[serde(default)]
    pub circle: CircleSettings,
    /// Statistics settings.
    #[serde(default)]
    pub stats: MeanOptions,
}

/// `[circle]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleSettings {
    /// Unit name; see [`ClockworkConfig::circle`].
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Explicit full arc, taking precedence over `unit`.
    #[serde(default)]
    pub full_arc: Option<f64>,
}

fn default_unit() -> String {
    "deg".to_string()
}

impl Default for CircleSettings {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            full_arc: None,
        }
    }
}

impl ClockworkConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded clockwork config from {}", path.display());
        Ok(config)
    }

    /// Load `clockwork.toml` from the current or the parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("clockwork.toml"),
            PathBuf::from("../clockwork.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// The configured circle.
    pub fn circle(&self) -> Result<Circle, ConfigError> {
        if let Some(full_arc) = self.circle.full_arc {
            return Ok(Circle::new(full_arc)?);
        }

        let circle = match self.circle.unit.to_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Circle::of::<Degree>(),
            "rad" | "radian" | "radians" => Circle::of::<Radian>(),
            "grad" | "gon" | "gradian" | "gradians" => Circle::of::<Gradian>(),
            "turn" | "turns" => Circle::of::<Turn>(),
            "hour" | "hours" | "hour-angle" => Circle::of::<HourAngle>(),
            "doy" | "day-of-year" => Circle::of::<DayOfYear>(),
            other => return Err(ConfigError::UnknownUnit(other.to_string())),
        };
        Ok(circle)
    }

    /// The configured mean options.
    pub fn mean_options(&self) -> MeanOptions {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockwork_core::ZeroResultant;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ClockworkConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClockworkConfig::default());
        assert_eq!(config.circle().unwrap(), Circle::DEGREES);
        assert_eq!(config.mean_options(), MeanOptions::default());
    }

    #[test]
    fn unit_names_are_case_insensitive() {
        let config = ClockworkConfig::from_toml_str("[circle]\nunit = \"HOUR\"\n").unwrap();
        assert_eq!(config.circle().unwrap().full_arc(), 24.0);
    }

    #[test]
    fn full_arc_overrides_unit() {
        let config =
            ClockworkConfig::from_toml_str("[circle]\nunit = \"rad\"\nfull_arc = 12.0\n").unwrap();
        assert_eq!(config.circle().unwrap().full_arc(), 12.0);
    }

    #[test]
    fn stats_section() {
        let config = ClockworkConfig::from_toml_str(
            "[stats]\nskip_nan = true\nzero_resultant = \"zero\"\n",
        )
        .unwrap();
        let options = config.mean_options();
        assert!(options.skip_nan);
        assert_eq!(options.zero_resultant, ZeroResultant::Zero);
    }

    #[test]
    fn unknown_unit() {
        let config = ClockworkConfig::from_toml_str("[circle]\nunit = \"furlong\"\n").unwrap();
        let err = config.circle().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownUnit(ref u) if u == "furlong"));
    }

    #[test]
    fn invalid_full_arc() {
        let config = ClockworkConfig::from_toml_str("[circle]\nfull_arc = -1.0\n").unwrap();
        assert!(matches!(
            config.circle(),
            Err(ConfigError::Circular(CircularError::InvalidFullArc(_)))
        ));
    }

    #[test]
    fn malformed_toml() {
        let err = ClockworkConfig::from_toml_str("[stats\nskip_nan = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_policy_value() {
        let err =
            ClockworkConfig::from_toml_str("[stats]\nzero_resultant = \"maybe\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
