use crate::error::{MeshError, Result};
use std::fmt;

const VERSION_STRING_LEN: usize = 12;

const FIXED_RECORD_VERSIONS: [&str; 6] = ["2.00", "3.00", "3.01", "4.00", "4.01", "5.00"];
const CHUNKED_VERSIONS: [&str; 2] = ["6.00", "7.00"];

/// Decoder family selected from the `version X.XX` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    /// `version 1.xx`, text vertex dump.
    Legacy,
    /// `version 2.00` through `version 5.00`, carrying the `X.XX` suffix.
    FixedRecord(&'static str),
    /// `version 6.00` and `version 7.00`.
    Chunked(&'static str),
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshFormat::Legacy => write!(f, "legacy text (1.x)"),
            MeshFormat::FixedRecord(version) => write!(f, "fixed-record binary ({})", version),
            MeshFormat::Chunked(version) => write!(f, "chunked/compressed ({})", version),
        }
    }
}

/// Reads the first 12 bytes as a version string, lossily.
pub fn read_header(data: &[u8]) -> Result<String> {
    let header = data.get(..VERSION_STRING_LEN).ok_or_else(|| {
        MeshError::UnsupportedFormat(format!(
            "mesh data too small: {} bytes, need at least {}",
            data.len(),
            VERSION_STRING_LEN
        ))
    })?;
    let (decoded, _) = encoding_rs::UTF_8.decode_without_bom_handling(header);
    Ok(decoded.trim().to_string())
}

pub fn sniff_version(data: &[u8]) -> Result<MeshFormat> {
    let header = read_header(data)?;

    if header.starts_with("version 1.") {
        return Ok(MeshFormat::Legacy);
    }

    let suffix = header.strip_prefix("version ").unwrap_or_default();
    if let Some(version) = FIXED_RECORD_VERSIONS.iter().copied().find(|&v| v == suffix) {
        return Ok(MeshFormat::FixedRecord(version));
    }
    if let Some(version) = CHUNKED_VERSIONS.iter().copied().find(|&v| v == suffix) {
        return Ok(MeshFormat::Chunked(version));
    }

    Err(MeshError::UnsupportedFormat(format!(
        "unsupported mesh version: {}",
        header
    )))
}
