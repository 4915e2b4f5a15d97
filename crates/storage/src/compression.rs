//! Compression configuration for the file store

use txproof_core::{DEFAULT_COMPRESSION_LEVEL, DEFAULT_COMPRESSION_MIN_SIZE};

/// Compression configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionConfig {
    /// Whether compression is enabled
    pub enabled: bool,
    /// Compression level (1-22 for zstd, default 3)
    pub level: i32,
    /// Minimum size in bytes before compression is applied
    pub min_size: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_COMPRESSION_LEVEL,
            min_size: DEFAULT_COMPRESSION_MIN_SIZE,
        }
    }
}

impl CompressionConfig {
    /// Store every value uncompressed
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_COMPRESSION_LEVEL,
            min_size: 0,
        }
    }

    pub(crate) fn applies_to(&self, len: usize) -> bool {
        self.enabled && len >= self.min_size
    }
}
