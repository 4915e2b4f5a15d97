//! Read operations for the file store

use crate::format::StorageHeader;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use txproof_core::{Error, Result};
use zstd::stream::decode_all as zstd_decode;

/// Read a stored value, `None` if nothing is stored at `path`
pub async fn read_value(key: &str, path: &Path) -> Result<Option<Vec<u8>>> {
    let file_data = match fs::read(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::storage_unavailable(key, "read value", e)),
    };

    decode_frame(key, &file_data).map(Some)
}

/// Validate a frame and return the value it carries
pub fn decode_frame(key: &str, file_data: &[u8]) -> Result<Vec<u8>> {
    let (header, payload) = StorageHeader::unframe(key, file_data)?;

    let value = if header.is_compressed() {
        zstd_decode(payload).map_err(|e| Error::corruption(key, format!("decompress failed: {e}")))?
    } else {
        payload.to_vec()
    };

    if value.len() as u64 != header.original_len() {
        return Err(Error::corruption(
            key,
            format!(
                "value is {} bytes, header says {}",
                value.len(),
                header.original_len()
            ),
        ));
    }
    Ok(value)
}
