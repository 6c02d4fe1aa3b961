//! TOML configuration file.
//!
//! ```toml
//! [analysis]
//! threshold = 50.0
//! confidence_level = 99.0
//!
//! [output]
//! dir = "reports"
//! format = "csv"
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use abx_model::AnalysisOptions;
use abx_report::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub analysis: AnalysisOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Report directory; relative paths resolve against the working directory.
    pub dir: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("parse config")?;
        config
            .analysis
            .validate()
            .context("invalid [analysis] settings")?;
        Ok(config)
    }

    /// Analysis options with command-line overrides applied and validated.
    pub fn analysis_options(
        &self,
        threshold: Option<f64>,
        confidence_level: Option<f64>,
    ) -> Result<AnalysisOptions> {
        let mut options = self.analysis;
        if let Some(value) = threshold {
            options = options.with_threshold(value);
        }
        if let Some(value) = confidence_level {
            options = options.with_confidence_level(value);
        }
        Ok(options.validate()?)
    }
}

/// Load a config file, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config = Config::from_toml(&text).with_context(|| format!("load {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
