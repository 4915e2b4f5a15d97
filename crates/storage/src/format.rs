//! On-disk frame of a stored value
//!
//! `[bincode StorageHeader][payload]`, where the header carries a magic
//! number, a format version, flags, the payload sizes and CRC32C checksums of
//! both itself and the payload. Bincode's fixed-width integer encoding keeps
//! the header a constant size.

use crc32c::crc32c;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use txproof_core::{Error, Result};

/// Magic number for stored values: "TXPF"
pub const STORE_MAGIC: u32 = 0x5458_5046;

/// Current storage format version
pub const STORAGE_VERSION: u16 = 1;

/// Header framing every value written by the file store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageHeader {
    magic: u32,
    version: u16,
    /// Bit 0: payload is zstd compressed
    flags: u16,
    /// Seconds since the Unix epoch at write time
    written_at: u64,
    /// Size of the value before compression
    original_len: u64,
    /// Size of the payload following the header
    payload_len: u64,
    payload_crc: u32,
    /// CRC32C of the header with this field zeroed
    header_crc: u32,
}

impl StorageHeader {
    const FLAG_COMPRESSED: u16 = 1;

    /// Describe `payload`, the possibly compressed form of a value of `original_len` bytes
    pub fn describe(original_len: usize, payload: &[u8], compressed: bool) -> Self {
        let mut header = Self {
            magic: STORE_MAGIC,
            version: STORAGE_VERSION,
            flags: if compressed { Self::FLAG_COMPRESSED } else { 0 },
            written_at: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default(),
            original_len: original_len as u64,
            payload_len: payload.len() as u64,
            payload_crc: crc32c(payload),
            header_crc: 0,
        };
        header.header_crc = header.checksum();
        header
    }

    fn checksum(&self) -> u32 {
        let unsealed = Self {
            header_crc: 0,
            ..*self
        };
        bincode::serialize(&unsealed)
            .map(|bytes| crc32c(&bytes))
            .unwrap_or_default()
    }

    /// Header followed by `payload`
    pub fn frame(&self, key: &str, payload: &[u8]) -> Result<Vec<u8>> {
        let mut frame = bincode::serialize(self)
            .map_err(|e| Error::serialization(key, "encode header", e))?;
        frame.extend_from_slice(payload);
        Ok(frame)
    }

    /// Split a frame into its validated header and payload
    pub fn unframe<'a>(key: &str, frame: &'a [u8]) -> Result<(Self, &'a [u8])> {
        let corrupt = |reason: String| Error::corruption(key, reason);

        let header: Self = bincode::deserialize(frame)
            .map_err(|e| corrupt(format!("unreadable header: {e}")))?;
        let header_len = bincode::serialized_size(&header)
            .map_err(|e| corrupt(format!("unreadable header: {e}")))? as usize;

        if header.magic != STORE_MAGIC {
            return Err(corrupt(format!(
                "invalid magic number: expected {STORE_MAGIC:08x}, got {:08x}",
                header.magic
            )));
        }
        if header.version > STORAGE_VERSION {
            return Err(corrupt(format!(
                "unsupported storage version {}",
                header.version
            )));
        }
        let expected_crc = header.checksum();
        if header.header_crc != expected_crc {
            return Err(corrupt(format!(
                "header CRC mismatch: expected {expected_crc:08x}, got {:08x}",
                header.header_crc
            )));
        }

        let payload = frame.get(header_len..).unwrap_or_default();
        if payload.len() as u64 != header.payload_len {
            return Err(corrupt(format!(
                "payload is {} bytes, header says {}",
                payload.len(),
                header.payload_len
            )));
        }
        let actual_crc = crc32c(payload);
        if actual_crc != header.payload_crc {
            return Err(corrupt(format!(
                "payload CRC mismatch: expected {:08x}, got {actual_crc:08x}",
                header.payload_crc
            )));
        }

        Ok((header, payload))
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & Self::FLAG_COMPRESSED != 0
    }

    pub fn original_len(&self) -> u64 {
        self.original_len
    }
}
