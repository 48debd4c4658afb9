//! Configuration for the `lattice-line` tool.
//!
//! Supports YAML configuration with precedence: CLI > ENV > file > defaults.

use crate::error::{Error, Result};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;

/// Environment variable that overrides [`RasterConfig::max_points`].
pub const MAX_POINTS_ENV: &str = "LATTICE_LINE_MAX_POINTS";

/// How rasterized points are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `x y` pair per line.
    #[default]
    Text,
    /// A YAML sequence of `{x, y}` maps.
    Yaml,
}

impl OutputFormat {
    /// Encodes `points` in this format.
    pub fn encode(self, points: &[Point]) -> Result<String> {
        match self {
            Self::Text => {
                let mut out = String::with_capacity(points.len() * 8);
                for p in points {
                    // writing to a String cannot fail
                    let _ = writeln!(out, "{} {}", p.x, p.y);
                }
                Ok(out)
            }
            Self::Yaml => {
                serde_yaml_ng::to_string(points).map_err(|e| Error::Encode(e.to_string()))
            }
        }
    }
}

/// Rasterization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Largest path checked rasterization will produce.
    #[serde(default = "default_max_points")]
    pub max_points: usize,

    /// Output format for the command-line tool.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_max_points() -> usize {
    1_000_000
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
            format: OutputFormat::default(),
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_points == 0 {
            return Err(Error::ConfigInvalid {
                key: "max_points".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Layers overrides onto a file (or default) configuration.
    ///
    /// Precedence is CLI > ENV > file > defaults: `env_max_points` is the raw
    /// value of [`MAX_POINTS_ENV`], the `cli_*` values come from flags.
    pub fn resolve(
        self,
        env_max_points: Option<&str>,
        cli_max_points: Option<usize>,
        cli_format: Option<OutputFormat>,
    ) -> Result<Self> {
        let mut config = self.with_max_points_override(env_max_points)?;
        if let Some(max_points) = cli_max_points {
            config.max_points = max_points;
        }
        if let Some(format) = cli_format {
            config.format = format;
        }
        config.validate()?;
        Ok(config)
    }

    /// Replaces `max_points` with a textual override, when given.
    pub fn with_max_points_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(raw) = value {
            self.max_points = raw.trim().parse().map_err(|_| Error::ConfigInvalid {
                key: "max_points".to_string(),
                message: format!("'{raw}' is not a positive integer"),
            })?;
            self.validate()?;
        }
        Ok(self)
    }
}
