//! Converts Roblox `.mesh` files (versions 1.00 through 7.00) to OBJ text.
//!
//! ```no_run
//! let data = std::fs::read("model.mesh").unwrap();
//! if let Some(obj) = rbxmesh_obj::convert(&data, None) {
//!     println!("{}", obj);
//! }
//! ```
//!
//! 6.00/7.00 meshes store their geometry as a compressed `COREMESH` chunk and
//! need a [`GeometryCodec`], supplied through [`MeshConverter::with_codec`].

pub mod chunked;
pub mod codec;
pub mod error;
pub mod filemesh;
pub mod legacy;
pub mod mesh_types;
pub mod obj;
pub mod reader;
pub mod version;

#[cfg(test)]
mod fixtures;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub use codec::{CodecError, CodecResult, DecodedGeometry, GeometryCodec};
pub use error::{MeshError, Result};
pub use mesh_types::{Mesh, Triangle, Vertex};
pub use obj::write_obj;
pub use version::{MeshFormat, sniff_version};

/// Mesh to OBJ converter. Holds no per-call state, so one instance can be
/// shared across threads.
#[derive(Clone, Default)]
pub struct MeshConverter {
    codec: Option<Arc<dyn GeometryCodec>>,
}

impl MeshConverter {
    /// A converter without a geometry codec; 6.00/7.00 meshes fail with
    /// [`MeshError::CodecUnavailable`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codec(codec: impl GeometryCodec + 'static) -> Self {
        Self {
            codec: Some(Arc::new(codec)),
        }
    }

    pub fn has_codec(&self) -> bool {
        self.codec.is_some()
    }

    /// Decodes `data` into the intermediate mesh.
    pub fn decode(&self, data: &[u8]) -> Result<Mesh> {
        let format = sniff_version(data)?;
        debug!("detected mesh format: {}", format);

        match format {
            MeshFormat::Legacy => legacy::parse_v1(data),
            MeshFormat::FixedRecord(version) => filemesh::parse_fixed_record(data, version),
            MeshFormat::Chunked(version) => {
                let codec = self
                    .codec
                    .as_deref()
                    .ok_or_else(|| MeshError::CodecUnavailable(format!("version {}", version)))?;
                chunked::parse_chunked(data, codec)
            }
        }
    }

    pub fn convert_to_obj(&self, data: &[u8]) -> Result<String> {
        let mesh = self.decode(data)?;
        write_obj(&mesh)
    }

    /// Converts `data` and writes the OBJ to `path`. Unlike [`Self::convert`],
    /// a failed write is an error.
    pub fn convert_to_file(&self, data: &[u8], path: &Path) -> Result<String> {
        let obj = self.convert_to_obj(data)?;
        fs::write(path, &obj)?;
        info!("OBJ file written to {}", path.display());
        Ok(obj)
    }

    /// Converts `data`, optionally also writing the OBJ to `output_path`.
    ///
    /// Every failure is logged and reported as `None`. A failed write is
    /// only logged; the text is still returned.
    pub fn convert(&self, data: &[u8], output_path: Option<&Path>) -> Option<String> {
        let obj = match self.convert_to_obj(data) {
            Ok(obj) => obj,
            Err(err) => {
                error!("mesh conversion failed: {}", err);
                return None;
            }
        };

        if let Some(path) = output_path {
            match fs::write(path, &obj) {
                Ok(()) => info!("OBJ file written to {}", path.display()),
                Err(err) => warn!("failed to write OBJ file {}: {}", path.display(), err),
            }
        }

        Some(obj)
    }
}

/// Converts with a codec-less [`MeshConverter`].
pub fn convert(data: &[u8], output_path: Option<&Path>) -> Option<String> {
    MeshConverter::new().convert(data, output_path)
}
