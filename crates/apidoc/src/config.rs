//! Configuration schema for apidoc
//!
//! Config lives at `.config/apidoc/config.yaml` relative to the working
//! directory. Every field is optional; command-line flags take precedence.

use eyre::{Result, WrapErr};
use facet::Facet;
use std::path::Path;
use tracing::debug;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".config/apidoc/config.yaml";

/// Root configuration for apidoc
#[derive(Debug, Clone, Default, Facet)]
pub struct Config {
    /// Report format: `text` or `json`
    #[facet(default)]
    pub format: Option<String>,

    /// Fail the build when any warning was recorded
    #[facet(default)]
    pub strict: bool,

    /// Print warnings in text reports (defaults to true)
    #[facet(default)]
    pub report_warnings: Option<bool>,
}

impl Config {
    /// Whether warnings should be listed in text reports
    pub fn report_warnings(&self) -> bool {
        self.report_warnings.unwrap_or(true)
    }

    /// Parse a config from YAML source
    pub fn from_yaml(source: &str) -> Result<Self> {
        facet_yaml::from_str(source).wrap_err("Failed to parse apidoc config")
    }

    /// Load the config at `path`, or the defaults if there is no file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_yaml(&content)
            .wrap_err_with(|| format!("Failed to parse config from {}", path.display()))
    }
}
