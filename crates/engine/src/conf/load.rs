//! Load: config loading from file and environment variables.

use std::path::Path;

use super::model::{ConsoleConfig, CorpusConfig, TasklogConfig};
use crate::error::{ConfigError, ConfigResult};

pub const CONFIG_FILE_ENV: &str = "TASKLOG_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "tasklog.toml";

impl TasklogConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> ConfigResult<Self> {
        let config_path =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!("Config file not found at {}, using environment variables", config_path);
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from `TASKLOG_*` variables. Unparseable values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.corpus.apply_env(&lookup);
        self.console.apply_env(&lookup);
    }
}

impl CorpusConfig {
    fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("TASKLOG_LOG_DIR") {
            self.log_dir = dir;
        }
        if let Some(suffix) = lookup("TASKLOG_FILE_SUFFIX") {
            self.file_suffix = suffix;
        }
        if let Some(pattern) = lookup("TASKLOG_DATE_FORMAT") {
            self.date_format = pattern;
        }
        if let Some(strict) = lookup("TASKLOG_STRICT").and_then(|s| s.parse().ok()) {
            self.strict = strict;
        }
        if let Some(cache) = lookup("TASKLOG_CACHE").and_then(|s| s.parse().ok()) {
            self.cache = cache;
        }
    }
}

impl ConsoleConfig {
    fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(sentinel) = lookup("TASKLOG_SENTINEL") {
            self.sentinel = sentinel;
        }
        if let Some(output) = lookup("TASKLOG_OUTPUT").and_then(|s| s.parse().ok()) {
            self.output = output;
        }
    }
}
