//! Durable file-backed store
//!
//! Each key maps to one file named after the SHA-256 digest of the key, so
//! every key fits the file system's name limit. Values are framed with a checksummed header (see [`crate::format`]) and published
//! with an atomic rename or hard link, so readers observe either nothing or a
//! complete value, never a partial write.

mod reader;
mod recovery;
mod writer;

use crate::compression::CompressionConfig;
use crate::store::{validate_key, Store};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{Semaphore, SemaphorePermit};
use txproof_core::{Error, Result};

pub use reader::decode_frame;
pub use recovery::{sweep_temp_files, TEMP_GRACE_PERIOD};
pub use writer::encode_frame;

/// Maximum concurrent file operations
const MAX_CONCURRENT_IO: usize = 64;

/// Store persisting every value as its own file under a base directory
pub struct FileStore {
    /// Base directory for stored values
    base_dir: PathBuf,
    /// Compression configuration
    compression: CompressionConfig,
    /// I/O semaphore for rate limiting
    io_semaphore: Arc<Semaphore>,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `base_dir`.
    ///
    /// Temporary files left behind by interrupted writes are removed once
    /// they are older than [`TEMP_GRACE_PERIOD`].
    pub async fn open(base_dir: impl Into<PathBuf>, compression: CompressionConfig) -> Result<Self> {
        let base_dir = base_dir.into();

        if let Err(e) = fs::create_dir_all(&base_dir).await {
            return Err(Error::storage_unavailable(
                base_dir.display().to_string(),
                "create storage directory",
                e,
            ));
        }

        sweep_temp_files(&base_dir, TEMP_GRACE_PERIOD).await?;

        tracing::debug!(
            "Opened file store at {} (compression: {})",
            base_dir.display(),
            compression.enabled
        );

        Ok(Self {
            base_dir,
            compression,
            io_semaphore: Arc::new(Semaphore::new(MAX_CONCURRENT_IO)),
        })
    }

    /// Directory values are stored in
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File a key is stored in
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.base_dir.join(format!("{}.bin", hex::encode(digest)))
    }

    async fn acquire(&self, key: &str) -> Result<SemaphorePermit<'_>> {
        self.io_semaphore
            .acquire()
            .await
            .map_err(|e| Error::storage_unavailable(key, "acquire I/O permit", e))
    }
}

#[async_trait]
impl Store for FileStore {
    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        validate_key(key)?;
        let frame = encode_frame(key, value, &self.compression)?;
        let path = self.path_for(key);

        let _permit = self.acquire(key).await?;
        let temp_path = writer::write_temp(key, &path, &frame).await?;
        writer::publish_replace(key, &temp_path, &path).await?;

        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool> {
        validate_key(key)?;
        let frame = encode_frame(key, value, &self.compression)?;
        let path = self.path_for(key);

        let _permit = self.acquire(key).await?;
        let temp_path = writer::write_temp(key, &path, &frame).await?;
        let created = writer::publish_new(key, &temp_path, &path).await?;

        if created {
            tracing::trace!(key, bytes = value.len(), "created value");
        } else {
            tracing::debug!(key, "value already present, left unchanged");
        }
        Ok(created)
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        let path = self.path_for(key);

        let _permit = self.acquire(key).await?;
        reader::read_value(key, &path).await
    }

    async fn contains(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        let path = self.path_for(key);

        let _permit = self.acquire(key).await?;
        fs::try_exists(&path)
            .await
            .map_err(|e| Error::storage_unavailable(key, "check existence", e))
    }
}
