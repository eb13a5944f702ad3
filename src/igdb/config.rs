use crate::error::{IgdbError, Result};
use crate::store::fs::DEFAULT_DB_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "igdb.json";
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Configuration for igdb, read from `igdb.json`. Command-line flags take
/// precedence over anything set here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IgdbConfig {
    /// Database file, used both for loading and as the primary save target
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Log level for diagnostics on stderr (e.g. "error", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for IgdbConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            log_level: default_log_level(),
        }
    }
}

impl IgdbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(IgdbError::Io)?;
        let config: IgdbConfig = serde_json::from_str(&content).map_err(IgdbError::Config)?;
        Ok(config)
    }

    pub fn with_database(mut self, database: Option<PathBuf>) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        self
    }

    pub fn with_log_level(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level {
            self.log_level = level.to_string();
        }
        self
    }
}
