use crate::common::constants::DEFAULT_BASE_URL;
use crate::common::error::{Result, UpdaterError};
use crate::common::types::Dataset;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime configuration for a refresh run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the static data host
    pub base_url: String,
    /// Directory the `<dataset>.json` files are written to
    pub output_dir: PathBuf,
    /// Datasets to refresh, always in canonical order
    pub datasets: Vec<Dataset>,
}

/// On-disk form of [`Config`]; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    output_dir: Option<PathBuf>,
    datasets: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: default_output_dir(),
            datasets: Dataset::ALL.to_vec(),
        }
    }
}

/// Installation root of the tool
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

impl Config {
    /// Load from a TOML file, falling back to defaults for anything it omits
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path).map_err(|e| {
            UpdaterError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Config::default();
        if let Some(base_url) = file.base_url {
            config = config.with_base_url(base_url)?;
        }
        if let Some(output_dir) = file.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(datasets) = file.datasets {
            config.datasets = parse_datasets(datasets.iter().map(String::as_str))?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(UpdaterError::Config("base URL must not be empty".into()));
        }
        self.base_url = base_url;
        Ok(self)
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = normalize(datasets);
        self
    }
}

/// Parse dataset names (e.g. from `--datasets items,mods`). Unknown names are
/// rejected; the result is deduplicated and in canonical order.
pub fn parse_datasets<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Vec<Dataset>> {
    let mut datasets = Vec::new();
    for name in names {
        if name.trim().is_empty() {
            continue;
        }
        let dataset = Dataset::from_name(name).ok_or_else(|| {
            UpdaterError::Config(format!(
                "Unknown dataset '{}'. Available: {}",
                name.trim(),
                crate::common::constants::get_supported_datasets().join(", ")
            ))
        })?;
        datasets.push(dataset);
    }
    if datasets.is_empty() {
        return Err(UpdaterError::Config("no datasets selected".into()));
    }
    Ok(normalize(datasets))
}

fn normalize(mut datasets: Vec<Dataset>) -> Vec<Dataset> {
    datasets.sort();
    datasets.dedup();
    datasets
}
