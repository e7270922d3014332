use crate::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_URL};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub user_agent: Option<String>,
    /// No timeout unless set
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Treat an empty extraction as an error instead of writing `[]`
    pub require_records: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            require_records: false,
        }
    }
}

/// Values supplied on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub output: Option<PathBuf>,
    pub require_records: bool,
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Start from the file at `config_path` if given, otherwise defaults,
    /// then apply command line overrides on top.
    pub fn resolve(config_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        Ok(config)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.url {
            self.source.url = url;
        }
        if let Some(output) = overrides.output {
            self.output.path = output;
        }
        if overrides.require_records {
            self.output.require_records = true;
        }
    }
}
