//! Global agendarank configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AgendaRankError, AgendaRankResult};

static DEFAULT_OUTPUT_PATH: &str = "output.csv";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Global configuration at ~/.config/agendarank/config.toml
///
/// Every field has a default, so a missing file and an empty file behave the same.
/// Command-line flags always take precedence over these values.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GlobalConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub importer: ImporterConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default env_logger filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImporterConfig {
    /// Where the ranked CSV is written when --output is not given
    #[serde(default = "default_output_path")]
    pub output: PathBuf,

    /// Row count used when --display is not given
    #[serde(default)]
    pub display: i64,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            output: default_output_path(),
            display: 0,
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> AgendaRankResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaRankError::Config("Could not determine config directory".into()))?
            .join("agendarank");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if the file does not exist.
    pub fn load() -> AgendaRankResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> AgendaRankResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AgendaRankResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
