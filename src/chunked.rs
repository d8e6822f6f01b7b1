//! `version 6.00` / `version 7.00` chunk containers.
//!
//! Each chunk is an 8-byte NUL-padded tag, a u32 chunk version and a u32
//! size. Version 2 chunks carry an extra u32 data size, which is the real
//! payload length.

use crate::codec::{DecodedGeometry, GeometryCodec};
use crate::error::{MeshError, Result};
use crate::mesh_types::{Mesh, Triangle, VERSION_HEADER_LEN, Vertex};
use crate::reader::ByteReader;
use tracing::{debug, info, warn};

const CHUNK_HEADER_SIZE: usize = 16;
const COREMESH_TAG: &str = "COREMESH";
const LODS_TAG: &str = "LODS";
const COMPRESSED_CHUNK_VERSION: u32 = 2;
/// LODS payloads must be longer than their 7-byte preamble.
const LODS_MIN_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub tag: String,
    pub version: u32,
    pub payload: &'a [u8],
}

/// Chunks captured from a container.
#[derive(Debug, Default)]
pub struct ChunkSet<'a> {
    pub coremesh: Option<&'a [u8]>,
    pub lods: Option<&'a [u8]>,
}

/// Walks the chunk list after the version line. Iteration stops when fewer
/// than 16 bytes remain or a chunk claims more data than the buffer holds.
pub fn read_chunks(data: &[u8]) -> Vec<Chunk<'_>> {
    let mut reader = ByteReader::at(data, VERSION_HEADER_LEN);
    let mut chunks = Vec::new();

    while reader.remaining() >= CHUNK_HEADER_SIZE {
        match read_chunk(&mut reader) {
            Ok(chunk) => chunks.push(chunk),
            Err(err) => {
                warn!("stopping chunk scan at offset {}: {}", reader.position(), err);
                break;
            }
        }
    }

    chunks
}

// Every successful call consumes at least the 16-byte chunk header.
fn read_chunk<'a>(reader: &mut ByteReader<'a>) -> Result<Chunk<'a>> {
    let tag_bytes = reader.take(8)?;
    let version = reader.read_u32()?;
    let chunk_size = reader.read_u32()?;
    let data_size = if version == COMPRESSED_CHUNK_VERSION {
        reader.read_u32()?
    } else {
        chunk_size
    };

    let tag = chunk_tag(tag_bytes);
    let payload = reader.take(data_size as usize).map_err(|_| {
        MeshError::MalformedRecord(format!(
            "chunk {} claims {} bytes but only {} remain",
            tag,
            data_size,
            reader.remaining()
        ))
    })?;

    Ok(Chunk {
        tag,
        version,
        payload,
    })
}

/// Tags are ASCII; other bytes are dropped and NUL padding is stripped.
fn chunk_tag(bytes: &[u8]) -> String {
    let tag: String = bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    tag.trim_end_matches('\0').to_string()
}

pub fn collect_chunks<'a>(chunks: &[Chunk<'a>]) -> ChunkSet<'a> {
    let mut set = ChunkSet::default();
    for chunk in chunks {
        match chunk.tag.as_str() {
            COREMESH_TAG if chunk.version == COMPRESSED_CHUNK_VERSION => {
                if chunk.payload.is_empty() {
                    warn!("ignoring empty {} chunk", COREMESH_TAG);
                } else {
                    set.coremesh = Some(chunk.payload);
                }
            }
            LODS_TAG => set.lods = Some(chunk.payload),
            other => debug!("skipping chunk {:?} version {}", other, chunk.version),
        }
    }
    set
}

/// Decodes a 6.00/7.00 mesh through `codec`.
pub fn parse_chunked(data: &[u8], codec: &dyn GeometryCodec) -> Result<Mesh> {
    let chunks = read_chunks(data);
    let set = collect_chunks(&chunks);

    let coremesh = set.coremesh.ok_or(MeshError::MissingGeometryChunk)?;
    let geometry = codec
        .decode(coremesh)
        .map_err(|err| MeshError::CompressionDecode(err.to_string()))?;

    let mut mesh = geometry_to_mesh(geometry)?;
    info!(
        "compressed mesh decoded: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    if let Some(lods) = set.lods {
        match high_quality_face_count(lods) {
            Ok(Some(max_faces)) if max_faces < mesh.triangles.len() => {
                info!(
                    "applying high-quality LOD: {} -> {} faces",
                    mesh.triangles.len(),
                    max_faces
                );
                mesh.triangles.truncate(max_faces);
            }
            Ok(_) => {}
            Err(err) => warn!("LOD parsing failed, keeping all faces: {}", err),
        }
    }

    Ok(mesh)
}

fn geometry_to_mesh(geometry: DecodedGeometry) -> Result<Mesh> {
    let DecodedGeometry {
        positions,
        normals,
        tex_coords,
        triangles,
    } = geometry;

    let num_verts = positions.len();
    if num_verts == 0 {
        return Err(MeshError::CompressionDecode(
            "decoded mesh has no vertices".to_string(),
        ));
    }

    let mut vertices: Vec<Vertex> = positions
        .into_iter()
        .map(|pos| Vertex::new(pos, [0.0; 3], [0.0; 3]))
        .collect();

    if let Some(normals) = normals {
        if normals.len() == num_verts {
            for (vertex, normal) in vertices.iter_mut().zip(normals) {
                vertex.normal = normal;
            }
        } else {
            warn!("normal count mismatch ({} vs {})", normals.len(), num_verts);
        }
    }

    if let Some(tex_coords) = tex_coords {
        if tex_coords.len() == num_verts {
            for (vertex, [u, v]) in vertices.iter_mut().zip(tex_coords) {
                vertex.uv = [u, 1.0 - v, 0.0];
            }
        } else {
            warn!("UV count mismatch ({} vs {})", tex_coords.len(), num_verts);
        }
    }

    let triangles = triangles
        .into_iter()
        .map(|[a, b, c]| Triangle::from_zero_based_reversed(a, b, c))
        .collect();

    Ok(Mesh {
        vertices,
        triangles,
    })
}

/// Face count of the first LOD tier, from the first two offsets of a LODS payload.
fn high_quality_face_count(lods: &[u8]) -> Result<Option<usize>> {
    if lods.len() < LODS_MIN_LEN {
        return Ok(None);
    }

    let mut reader = ByteReader::new(lods);
    let _lod_type = reader.read_u16()?;
    let _num_high_quality = reader.read_u8()?;
    let num_offsets = reader.read_u32()?;
    if num_offsets < 2 {
        return Ok(None);
    }

    let first = reader.read_u32()?;
    let second = reader.read_u32()?;
    let faces = second.checked_sub(first).ok_or_else(|| {
        MeshError::MalformedRecord(format!(
            "LOD offsets decrease: {} then {}",
            first, second
        ))
    })?;
    Ok(Some(faces as usize))
}
