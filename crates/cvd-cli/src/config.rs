//! Dashboard configuration stored as TOML.
//!
//! Lookup order: an explicit `--config` path (which must exist), then
//! `covid-dash.toml` in the working directory, then built-in defaults.
//! Command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cvd_model::DEFAULT_COUNTRIES;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "covid-dash.toml";
pub const DEFAULT_DATASET: &str = "worldometer_coronavirus_summary_data_with_latlong.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "dashboard";
pub const DEFAULT_TITLE: &str = "BOD Analysis";
pub const DEFAULT_HEADING: &str = "Covid 19 Analysis Dashboard";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset: DatasetConfig,
    pub page: PageConfig,
    pub selection: SelectionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET),
        }
    }
}

/// Page header shown above the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            icon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Preselected countries; those absent from the dataset are dropped.
    pub defaults: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            defaults: DEFAULT_COUNTRIES.into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse dashboard config")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize dashboard config")
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Resolve the config for a run started in `working_dir`.
    ///
    /// # Errors
    ///
    /// Fails when an explicit path does not exist or any chosen file cannot
    /// be parsed. A missing `covid-dash.toml` is not an error.
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            return Self::load(path);
        }
        let candidate = working_dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::debug!(dir = %working_dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
