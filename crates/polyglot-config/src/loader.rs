//! Configuration loading from TOML, YAML or JSON files.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use polyglot_common::{PolyglotError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(PolyglotError::config(format!(
                "Unsupported configuration format: {}",
                path.display()
            ))),
        }
    }

    /// Parse configuration text in this format.
    pub fn parse(self, contents: &str) -> Result<Config> {
        match self {
            Self::Toml => toml::from_str(contents)
                .map_err(|e| PolyglotError::config_with_source("Invalid TOML configuration", e)),
            Self::Yaml => serde_yaml::from_str(contents)
                .map_err(|e| PolyglotError::config_with_source("Invalid YAML configuration", e)),
            Self::Json => serde_json::from_str(contents)
                .map_err(|e| PolyglotError::config_with_source("Invalid JSON configuration", e)),
        }
    }
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates configuration from file.
    pub async fn load(&self) -> Result<Config> {
        let format = ConfigFormat::from_path(&self.path)?;
        debug!("Loading {:?} configuration from {}", format, self.path.display());

        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PolyglotError::config_with_source(
                format!("Cannot read configuration file {}", self.path.display()),
                e,
            )
        })?;

        let config = format.parse(&contents)?;
        ConfigValidator::validate(&config)?;

        info!(
            "Loaded configuration from {} ({} preloaded catalogs)",
            self.path.display(),
            config.messages.len()
        );
        Ok(config)
    }
}
