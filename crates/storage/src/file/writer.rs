//! Write operations for the file store
//!
//! Values are framed, written to a uniquely named temporary file and synced
//! before they are published under their final name, so a reader never sees
//! a partially written value.

use crate::compression::CompressionConfig;
use crate::format::StorageHeader;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use txproof_core::{Error, Result};
use zstd::stream::encode_all as zstd_encode;

/// Suffix marker of temporary files, swept on open
pub(crate) const TEMP_MARKER: &str = ".tmp.";

/// Frame a value with a header, compressing it when configured to
pub fn encode_frame(key: &str, data: &[u8], compression: &CompressionConfig) -> Result<Vec<u8>> {
    let should_compress = compression.applies_to(data.len());

    let payload = if should_compress {
        zstd_encode(data, compression.level)
            .map_err(|e| Error::serialization(key, "compress", e))?
    } else {
        data.to_vec()
    };

    tracing::trace!(
        key,
        original = data.len(),
        stored = payload.len(),
        compressed = should_compress,
        "framed value"
    );

    StorageHeader::describe(data.len(), &payload, should_compress).frame(key, &payload)
}

/// Write bytes to a fresh temporary sibling of `path` and sync them to disk
pub async fn write_temp(key: &str, path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(
        "{file_name}{TEMP_MARKER}{}",
        uuid::Uuid::new_v4().simple()
    ));

    let result = async {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await
    }
    .await;

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path).await;
        return Err(Error::storage_unavailable(key, "write temporary file", e));
    }

    Ok(temp_path)
}

/// Publish a synced temporary file under `path`, replacing any previous value
pub async fn publish_replace(key: &str, temp_path: &Path, path: &Path) -> Result<()> {
    if let Err(e) = fs::rename(temp_path, path).await {
        let _ = fs::remove_file(temp_path).await;
        return Err(Error::storage_unavailable(key, "atomic rename", e));
    }
    Ok(())
}

/// Publish a synced temporary file under `path` unless it already exists.
///
/// A hard link fails atomically when the target exists, which makes the
/// existence check and the publication a single step.
pub async fn publish_new(key: &str, temp_path: &Path, path: &Path) -> Result<bool> {
    let linked = fs::hard_link(temp_path, path).await;
    let _ = fs::remove_file(temp_path).await;

    match linked {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(Error::storage_unavailable(key, "atomic link", e)),
    }
}
