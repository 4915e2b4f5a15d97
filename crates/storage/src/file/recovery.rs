//! Recovery operations for the file store

use super::writer::TEMP_MARKER;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tokio::fs;
use txproof_core::{Error, Result};

/// Temporary files younger than this may still belong to a live writer
pub const TEMP_GRACE_PERIOD: Duration = Duration::from_secs(15 * 60);

/// Remove temporary files left behind by interrupted writes.
///
/// Only files last modified more than `grace` ago are removed, so another
/// process writing to the same directory keeps its in-flight files. Returns
/// how many were removed.
pub async fn sweep_temp_files(base_dir: &Path, grace: Duration) -> Result<usize> {
    let dir_key = base_dir.display().to_string();
    let mut entries = fs::read_dir(base_dir)
        .await
        .map_err(|e| Error::storage_unavailable(dir_key.clone(), "scan store", e))?;

    let now = SystemTime::now();
    let mut removed = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::storage_unavailable(dir_key.clone(), "scan store", e))?
    {
        let name = entry.file_name();
        if !name.to_string_lossy().contains(TEMP_MARKER) {
            continue;
        }

        // A file whose age cannot be read is left for a later sweep.
        let age = match entry.metadata().await.and_then(|meta| meta.modified()) {
            Ok(modified) => now.duration_since(modified).unwrap_or_default(),
            Err(e) => {
                tracing::debug!("Cannot read age of temporary file {:?}: {}", name, e);
                continue;
            }
        };
        if age < grace {
            continue;
        }

        match fs::remove_file(entry.path()).await {
            Ok(()) => removed += 1,
            Err(e) => tracing::warn!("Failed to remove stale temporary file {:?}: {}", name, e),
        }
    }

    if removed > 0 {
        tracing::info!("Swept {} stale temporary files from {}", removed, dir_key);
    }
    Ok(removed)
}
