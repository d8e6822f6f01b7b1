//! Seam for the geometry-decompression library used by chunked meshes.
//!
//! `COREMESH` payloads are Draco bitstreams. The converter never links a
//! decoder itself; hosts hand one in through [`GeometryCodec`], and a
//! converter built without one reports `CodecUnavailable` for 6.00/7.00 data.

use std::error::Error;

/// Raw output of a geometry codec. Indices are 0-based, as the codec produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub tex_coords: Option<Vec<[f32; 2]>>,
    pub triangles: Vec<[u32; 3]>,
}

pub type CodecError = Box<dyn Error + Send + Sync>;
pub type CodecResult = std::result::Result<DecodedGeometry, CodecError>;

pub trait GeometryCodec: Send + Sync {
    fn decode(&self, payload: &[u8]) -> CodecResult;
}

impl<F> GeometryCodec for F
where
    F: Fn(&[u8]) -> CodecResult + Send + Sync,
{
    fn decode(&self, payload: &[u8]) -> CodecResult {
        self(payload)
    }
}
