//! Synthetic mesh files for unit tests.

use crate::mesh_types::expected_header_size;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

#[derive(Debug, Clone, Copy)]
pub struct FixtureVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    /// As stored on disk, before the V flip.
    pub uv: [f32; 2],
    pub tangent: [i8; 4],
    pub color: [u8; 4],
}

impl Default for FixtureVertex {
    fn default() -> Self {
        Self {
            pos: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
            uv: [0.0; 2],
            tangent: [0, 0, -127, 127],
            color: [255, 255, 255, 255],
        }
    }
}

/// Builds a 2.00-5.00 file with the header size its version expects,
/// followed by an optional LOD offset table.
pub fn fixed_record_mesh(
    version: &str,
    lod_type: u16,
    vertices: &[FixtureVertex],
    faces: &[[u32; 3]],
    lod_offsets: &[u32],
) -> Vec<u8> {
    let header_size = expected_header_size(version).unwrap_or(12);
    let mut writer = Vec::new();
    write!(writer, "version {}\n", version).unwrap();

    writer.write_u16::<LittleEndian>(header_size).unwrap();
    writer.write_u16::<LittleEndian>(lod_type).unwrap();
    writer.write_u32::<LittleEndian>(vertices.len() as u32).unwrap();
    writer.write_u32::<LittleEndian>(faces.len() as u32).unwrap();
    writer.resize(writer.len() + header_size as usize - 12, 0);

    for vertex in vertices {
        for value in vertex.pos.iter().chain(&vertex.normal).chain(&vertex.uv) {
            writer.write_f32::<LittleEndian>(*value).unwrap();
        }
        for value in vertex.tangent {
            writer.write_i8(value).unwrap();
        }
        writer.write_all(&vertex.color).unwrap();
    }

    for face in faces {
        for &index in face {
            writer.write_u32::<LittleEndian>(index).unwrap();
        }
    }

    for &offset in lod_offsets {
        writer.write_u32::<LittleEndian>(offset).unwrap();
    }

    writer
}

/// One chunk of a 6.00/7.00 container. `chunk_version` 2 gets the extra data size field.
pub fn chunk(tag: &str, chunk_version: u32, payload: &[u8]) -> Vec<u8> {
    let mut writer = Vec::new();
    let mut tag_bytes = [0u8; 8];
    tag_bytes[..tag.len()].copy_from_slice(tag.as_bytes());
    writer.write_all(&tag_bytes).unwrap();
    writer.write_u32::<LittleEndian>(chunk_version).unwrap();
    writer.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
    if chunk_version == 2 {
        writer.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
    }
    writer.write_all(payload).unwrap();
    writer
}

pub fn chunked_mesh(version: &str, chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut writer = format!("version {}\n", version).into_bytes();
    for chunk in chunks {
        writer.extend_from_slice(chunk);
    }
    writer
}

/// LODS payload: lod type, high quality count, offset count, offsets.
pub fn lods_payload(offsets: &[u32]) -> Vec<u8> {
    let mut writer = Vec::new();
    writer.write_u16::<LittleEndian>(2).unwrap();
    writer.write_u8(1).unwrap();
    writer.write_u32::<LittleEndian>(offsets.len() as u32).unwrap();
    for &offset in offsets {
        writer.write_u32::<LittleEndian>(offset).unwrap();
    }
    writer
}
