use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("unsupported mesh format: {0}")]
    UnsupportedFormat(String),

    #[error("malformed mesh record: {0}")]
    MalformedRecord(String),

    #[error("no version 2 COREMESH chunk found in chunked mesh")]
    MissingGeometryChunk,

    #[error("failed to decode compressed geometry: {0}")]
    CompressionDecode(String),

    #[error("no geometry codec is installed, cannot decode {0} meshes")]
    CodecUnavailable(String),

    #[error("an i/o error occurred: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MeshError>;

pub(crate) fn malformed(message: impl Into<String>) -> MeshError {
    MeshError::MalformedRecord(message.into())
}
