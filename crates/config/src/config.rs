//! Ledger configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use txproof_core::{Error, DEFAULT_COMPRESSION_LEVEL, DEFAULT_COMPRESSION_MIN_SIZE};

/// Which store backs the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Volatile in-process map
    Memory,
    /// One file per key under the data directory
    #[default]
    File,
}

impl FromStr for StoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreKind::Memory),
            "file" | "disk" => Ok(StoreKind::File),
            other => Err(Error::configuration(format!(
                "unknown store kind '{other}', expected 'memory' or 'file'"
            ))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => write!(f, "memory"),
            StoreKind::File => write!(f, "file"),
        }
    }
}

/// Compression of values written by the file store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionSettings {
    pub enabled: bool,
    /// Zstd level, 1 to 22
    pub level: i32,
    /// Minimum value size in bytes before compression applies
    pub min_size: usize,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_COMPRESSION_LEVEL,
            min_size: DEFAULT_COMPRESSION_MIN_SIZE,
        }
    }
}

impl CompressionSettings {
    /// Parse the value of `TXPROOF_COMPRESSION`: on/off or a zstd level
    pub fn parse_toggle(&self, value: &str) -> txproof_core::Result<Self> {
        let mut settings = *self;
        match value.trim().to_ascii_lowercase().as_str() {
            "on" | "true" => settings.enabled = true,
            "off" | "false" | "0" => settings.enabled = false,
            other => {
                let level = other.parse::<i32>().map_err(|_| {
                    Error::configuration(format!(
                        "invalid compression setting '{other}', expected on, off or a level"
                    ))
                })?;
                settings.enabled = true;
                settings.level = level;
            }
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> txproof_core::Result<()> {
        if !(1..=22).contains(&self.level) {
            return Err(Error::configuration(format!(
                "compression level {} is out of range 1..=22",
                self.level
            )));
        }
        Ok(())
    }
}

/// Source of configuration for debugging and precedence tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Built-in defaults
    Default,
    /// Configuration file
    ConfigFile(PathBuf),
    /// Environment variable
    EnvironmentVariable(String),
    /// Command line argument
    CommandLine,
}

/// Resolved configuration of a ledger process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Store backing the ledger
    pub store: StoreKind,
    /// Directory for the file store and the default config file
    pub data_dir: PathBuf,
    /// Default `tracing` filter directive
    pub log_level: String,
    pub compression: CompressionSettings,
    /// Highest-precedence source that contributed a value
    pub source: ConfigSource,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            data_dir: default_data_dir(),
            log_level: "info".to_string(),
            compression: CompressionSettings::default(),
            source: ConfigSource::Default,
        }
    }
}

impl LedgerConfig {
    pub fn builder() -> LedgerConfigBuilder {
        LedgerConfigBuilder::new()
    }

    /// Check values that parsing alone cannot rule out
    pub fn validate(&self) -> txproof_core::Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(Error::configuration("log level must not be empty"));
        }
        if self.store == StoreKind::File && self.data_dir.as_os_str().is_empty() {
            return Err(Error::configuration(
                "file store requires a data directory",
            ));
        }
        self.compression.validate()
    }
}

/// `<platform data dir>/txproof`, falling back to `./.txproof`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("txproof"))
        .unwrap_or_else(|| PathBuf::from(".txproof"))
}

/// Builder for creating ledger configurations
#[derive(Debug, Clone, Default)]
pub struct LedgerConfigBuilder {
    config: LedgerConfig,
}

impl LedgerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(mut self, store: StoreKind) -> Self {
        self.config.store = store;
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = data_dir.into();
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.config.log_level = log_level.into();
        self
    }

    pub fn with_compression(mut self, compression: CompressionSettings) -> Self {
        self.config.compression = compression;
        self
    }

    pub fn with_source(mut self, source: ConfigSource) -> Self {
        self.config.source = source;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> txproof_core::Result<LedgerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
