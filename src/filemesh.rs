// https://devforum.roblox.com/t/roblox-filemesh-format-specification/326114/
use crate::error::Result;
use crate::mesh_types::{
    FILEMESH_FACE_SIZE, FILEMESH_VERTEX_SIZE, Mesh, Triangle, VERSION_HEADER_LEN, Vertex,
    expected_header_size,
};
use crate::reader::ByteReader;
use tracing::{debug, info, warn};

/// Bytes of the header read explicitly: size, lod type, vertex and face counts.
const HEADER_FIELDS_SIZE: usize = 12;

/// Decodes versions 2.00 through 5.00. `version` is the `X.XX` suffix.
pub fn parse_fixed_record(data: &[u8], version: &str) -> Result<Mesh> {
    let mut reader = ByteReader::at(data, VERSION_HEADER_LEN);

    let header_size = reader.read_u16()?;
    if let Some(expected) = expected_header_size(version) {
        if header_size != expected {
            warn!(
                "unexpected header size {} for version {}, expected {}",
                header_size, version, expected
            );
        }
    }

    let lod_type = reader.read_u16()?;
    let num_verts = reader.read_u32()? as usize;
    let num_faces = reader.read_u32()? as usize;

    let remaining_header = match (header_size as usize).checked_sub(HEADER_FIELDS_SIZE) {
        Some(remaining) => remaining,
        None => {
            warn!(
                "header size {} smaller than its own fields at version {}",
                header_size, version
            );
            0
        }
    };
    reader.skip(remaining_header)?;

    let vertices = read_vertices(&mut reader, num_verts)?;
    let mut triangles = read_faces(&mut reader, num_faces)?;

    if lod_type != 0 && !triangles.is_empty() {
        if let Some(limit) = first_lod_face_count(data, version, reader.position()) {
            if limit < triangles.len() {
                info!("applied LOD: {} -> {} faces", triangles.len(), limit);
                triangles.truncate(limit);
            }
        }
    }

    debug!(
        "version {} mesh decoded: {} vertices, {} faces",
        version,
        vertices.len(),
        triangles.len()
    );
    Ok(Mesh { vertices, triangles })
}

/// Face count of the highest-detail LOD tier, if the LOD table can be read.
///
/// The LOD count is read at a fixed offset per version family rather than
/// from the parsed header; the second offset follows the face array.
fn first_lod_face_count(data: &[u8], version: &str, faces_end: usize) -> Option<usize> {
    let lod_count_offset = match version {
        "4.00" | "4.01" | "5.00" => VERSION_HEADER_LEN + 8,
        _ => VERSION_HEADER_LEN + 6,
    };
    let num_lods = ByteReader::at(data, lod_count_offset).read_u16().ok()?;
    if num_lods < 2 {
        return None;
    }
    let lod1_offset = ByteReader::at(data, faces_end + 4).read_u32().ok()?;
    Some(lod1_offset as usize)
}

fn read_vertices(reader: &mut ByteReader<'_>, count: usize) -> Result<Vec<Vertex>> {
    let mut vertices = Vec::with_capacity(count.min(reader.remaining() / FILEMESH_VERTEX_SIZE));

    for _ in 0..count {
        let pos = reader.read_vec3()?;
        let normal = reader.read_vec3()?;
        let tu = reader.read_f32()?;
        let tv = reader.read_f32()?;
        let tangent = [
            reader.read_i8()?,
            reader.read_i8()?,
            reader.read_i8()?,
            reader.read_i8()?,
        ];
        let color = [
            reader.read_u8()?,
            reader.read_u8()?,
            reader.read_u8()?,
            reader.read_u8()?,
        ];

        vertices.push(Vertex {
            pos,
            normal,
            uv: [tu, 1.0 - tv, 0.0],
            tangent,
            color,
        });
    }

    Ok(vertices)
}

fn read_faces(reader: &mut ByteReader<'_>, count: usize) -> Result<Vec<Triangle>> {
    let mut faces = Vec::with_capacity(count.min(reader.remaining() / FILEMESH_FACE_SIZE));
    for _ in 0..count {
        let a = reader.read_u32()?;
        let b = reader.read_u32()?;
        let c = reader.read_u32()?;
        faces.push(Triangle::from_zero_based(a, b, c));
    }
    Ok(faces)
}
