#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use rbxmesh_obj::mesh_types::expected_header_size;
use rbxmesh_obj::{CodecResult, DecodedGeometry};
use std::io::Write;

/// Fixed-record file whose vertices sit on the X axis with the given stored V.
pub fn fixed_record(version: &str, lod_type: u16, tv: &[f32], faces: &[[u32; 3]], lods: &[u32]) -> Vec<u8> {
    let header_size = expected_header_size(version).unwrap_or(12);
    let mut out = Vec::new();
    write!(out, "version {}\n", version).unwrap();
    out.write_u16::<LittleEndian>(header_size).unwrap();
    out.write_u16::<LittleEndian>(lod_type).unwrap();
    out.write_u32::<LittleEndian>(tv.len() as u32).unwrap();
    out.write_u32::<LittleEndian>(faces.len() as u32).unwrap();
    out.resize(out.len() + header_size as usize - 12, 0);

    for (i, &v) in tv.iter().enumerate() {
        for value in [i as f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, v] {
            out.write_f32::<LittleEndian>(value).unwrap();
        }
        out.write_all(&[0, 0, 0x81, 0x7f, 255, 255, 255, 255]).unwrap();
    }
    for face in faces {
        for &index in face {
            out.write_u32::<LittleEndian>(index).unwrap();
        }
    }
    for &offset in lods {
        out.write_u32::<LittleEndian>(offset).unwrap();
    }
    out
}

pub fn chunked(version: &str, chunks: &[(&str, u32, &[u8])]) -> Vec<u8> {
    let mut out = format!("version {}\n", version).into_bytes();
    for &(tag, chunk_version, payload) in chunks {
        let mut tag_bytes = [0u8; 8];
        tag_bytes[..tag.len()].copy_from_slice(tag.as_bytes());
        out.write_all(&tag_bytes).unwrap();
        out.write_u32::<LittleEndian>(chunk_version).unwrap();
        out.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        if chunk_version == 2 {
            out.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        }
        out.write_all(payload).unwrap();
    }
    out
}

/// Stand-in for the compressed geometry library: one triangle over three vertices.
pub fn triangle_codec(_: &[u8]) -> CodecResult {
    Ok(DecodedGeometry {
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        normals: Some(vec![[0.0, 0.0, 1.0]; 3]),
        tex_coords: Some(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]),
        triangles: vec![[0, 1, 2]],
    })
}

pub fn lines_with_prefix<'a>(obj: &'a str, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    obj.lines().filter(move |line| line.starts_with(prefix))
}

pub fn face_indices(obj: &str) -> Vec<u32> {
    lines_with_prefix(obj, "f ")
        .flat_map(|line| line[2..].split_whitespace())
        .flat_map(|corner| corner.split('/'))
        .map(|index| index.parse().unwrap())
        .collect()
}
