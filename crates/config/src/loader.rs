//! Configuration loader applying source precedence

use crate::config::{CompressionSettings, ConfigSource, LedgerConfig, StoreKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use txproof_core::{
    constants::{
        TXPROOF_COMPRESSION_VAR, TXPROOF_CONFIG_VAR, TXPROOF_DATA_DIR_VAR, TXPROOF_LOG_VAR,
        TXPROOF_STORE_VAR,
    },
    Error, Result,
};

/// Name of the config file looked up in the data directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Shape of the JSON config file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub store: Option<StoreKind>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub compression: Option<FileCompression>,
}

/// Compression section of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileCompression {
    pub enabled: Option<bool>,
    pub level: Option<i32>,
    pub min_size: Option<usize>,
}

/// Loads a [`LedgerConfig`] from defaults, file, environment and command line
///
/// Command-line values are given through the builder methods and win over
/// every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    store: Option<StoreKind>,
    data_dir: Option<PathBuf>,
    log_level: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of `$TXPROOF_CONFIG` or the data directory's
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Command-line store override
    pub fn store(mut self, store: Option<StoreKind>) -> Self {
        self.store = store;
        self
    }

    /// Command-line data directory override
    pub fn data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Command-line log level override
    pub fn log_level(mut self, log_level: Option<String>) -> Self {
        self.log_level = log_level;
        self
    }

    /// Load configuration with full precedence handling
    pub fn load(self) -> Result<LedgerConfig> {
        let mut config = LedgerConfig::default();

        // The data directory decides where the default config file lives.
        let data_dir_hint = self
            .data_dir
            .clone()
            .or_else(|| env_var(TXPROOF_DATA_DIR_VAR).map(PathBuf::from))
            .unwrap_or_else(|| config.data_dir.clone());
        let config_path = self.config_file_path(&data_dir_hint);

        if let Some(file_config) = Self::load_from_config_file(&config_path)? {
            Self::apply_file(&mut config, file_config);
            config.source = ConfigSource::ConfigFile(config_path);
        }

        if let Some(variable) = Self::apply_env(&mut config)? {
            config.source = ConfigSource::EnvironmentVariable(variable);
        }

        if self.apply_command_line(&mut config) {
            config.source = ConfigSource::CommandLine;
        }

        config.validate()?;
        tracing::debug!(
            store = %config.store,
            data_dir = %config.data_dir.display(),
            source = ?config.source,
            "loaded configuration"
        );
        Ok(config)
    }

    fn config_file_path(&self, data_dir: &Path) -> PathBuf {
        self.config_file
            .clone()
            .or_else(|| env_var(TXPROOF_CONFIG_VAR).map(PathBuf::from))
            .unwrap_or_else(|| data_dir.join(CONFIG_FILE_NAME))
    }

    /// Load the config file, `None` if it does not exist
    pub fn load_from_config_file(path: &Path) -> Result<Option<FileConfig>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::configuration(format!(
                    "cannot read config file {}: {e}",
                    path.display()
                )))
            }
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            Error::configuration(format!("invalid config file {}: {e}", path.display()))
        })
    }

    fn apply_file(config: &mut LedgerConfig, file: FileConfig) {
        if let Some(store) = file.store {
            config.store = store;
        }
        if let Some(data_dir) = file.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(log_level) = file.log_level {
            config.log_level = log_level;
        }
        if let Some(compression) = file.compression {
            let CompressionSettings {
                enabled,
                level,
                min_size,
            } = config.compression;
            config.compression = CompressionSettings {
                enabled: compression.enabled.unwrap_or(enabled),
                level: compression.level.unwrap_or(level),
                min_size: compression.min_size.unwrap_or(min_size),
            };
        }
    }

    /// Apply `TXPROOF_*` variables, returning the last one that was set
    fn apply_env(config: &mut LedgerConfig) -> Result<Option<String>> {
        let mut applied = None;

        if let Some(store) = env_var(TXPROOF_STORE_VAR) {
            config.store = store.parse()?;
            applied = Some(TXPROOF_STORE_VAR);
        }

        if let Some(data_dir) = env_var(TXPROOF_DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(data_dir);
            applied = Some(TXPROOF_DATA_DIR_VAR);
        }

        if let Some(log_level) = env_var(TXPROOF_LOG_VAR) {
            config.log_level = log_level;
            applied = Some(TXPROOF_LOG_VAR);
        }

        if let Some(compression) = env_var(TXPROOF_COMPRESSION_VAR) {
            config.compression = config.compression.parse_toggle(&compression)?;
            applied = Some(TXPROOF_COMPRESSION_VAR);
        }

        Ok(applied.map(str::to_string))
    }

    fn apply_command_line(&self, config: &mut LedgerConfig) -> bool {
        let mut applied = false;

        if let Some(store) = self.store {
            config.store = store;
            applied = true;
        }
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
            applied = true;
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
            applied = true;
        }

        applied
    }
}

/// Non-empty value of an environment variable
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
