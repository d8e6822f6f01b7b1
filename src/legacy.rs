//! `version 1.xx` meshes: a face count line followed by one line of
//! concatenated `[x,y,z]` arrays, three arrays (position, normal, uv) per corner.

use crate::error::{malformed, Result};
use crate::mesh_types::{Mesh, Triangle, Vertex};
use tracing::{debug, warn};

const VERTEX_DATA_LINE: usize = 2;

pub fn parse_v1(data: &[u8]) -> Result<Mesh> {
    let (text, _) = encoding_rs::UTF_8.decode_without_bom_handling(data);
    let lines = split_lines(&text);
    if lines.len() <= VERTEX_DATA_LINE {
        return Err(malformed(format!(
            "text mesh has {} lines, expected at least {}",
            lines.len(),
            VERTEX_DATA_LINE + 1
        )));
    }

    let vectors = parse_bracket_vectors(lines[VERTEX_DATA_LINE])?;
    let groups = vectors.len() / 3;
    if vectors.len() % 3 != 0 {
        warn!(
            "text mesh has {} arrays, ignoring {} trailing",
            vectors.len(),
            vectors.len() % 3
        );
    }

    let mut vertices = Vec::with_capacity(groups);
    for (index, group) in vectors.chunks_exact(3).enumerate() {
        let pos = components::<3>(&group[0], index, "position")?;
        let normal = components::<3>(&group[1], index, "normal")?;
        let uv = &group[2];
        if uv.len() < 2 {
            return Err(malformed(format!(
                "vertex {} uv has {} components, expected at least 2",
                index,
                uv.len()
            )));
        }
        let w = uv.get(2).copied().unwrap_or(0.0);
        vertices.push(Vertex::new(pos, normal, [uv[0], 1.0 - uv[1], w]));
    }

    if groups % 3 != 0 {
        warn!("text mesh has {} vertices, last triangle is incomplete", groups);
    }
    let triangles = (0..groups / 3)
        .map(|face| {
            let first = (face * 3) as u32;
            Triangle::from_zero_based(first, first + 1, first + 2)
        })
        .collect::<Vec<_>>();

    debug!(
        "text mesh decoded: {} vertices, {} faces",
        vertices.len(),
        triangles.len()
    );
    Ok(Mesh { vertices, triangles })
}

/// `[1,2,3][4,5,6]` has no separators between arrays; insert them and parse
/// the whole line as one JSON array.
/// Splits on `\r\n`, `\n` and a bare `\r`. A trailing terminator does not
/// start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split("\r\n")
        .flat_map(|part| part.split(['\r', '\n']))
        .collect();
    if text.ends_with(['\r', '\n']) {
        lines.pop();
    }
    lines
}

fn parse_bracket_vectors(line: &str) -> Result<Vec<Vec<f32>>> {
    let repaired = format!("[{}]", line.trim().replace("][", "],["));
    serde_json::from_str(&repaired)
        .map_err(|err| malformed(format!("failed to parse text mesh vertex data: {}", err)))
}

fn components<const N: usize>(values: &[f32], vertex: usize, what: &str) -> Result<[f32; N]> {
    values
        .get(..N)
        .and_then(|slice| <[f32; N]>::try_from(slice).ok())
        .ok_or_else(|| {
            malformed(format!(
                "vertex {} {} has {} components, expected {}",
                vertex,
                what,
                values.len(),
                N
            ))
        })
}
