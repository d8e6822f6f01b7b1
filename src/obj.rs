use crate::error::{MeshError, Result};
use crate::mesh_types::{Mesh, Triangle};
use std::fmt::{self, Write as FmtWrite};
use std::io;

/// Renders a mesh as OBJ text. Vertex, texture and normal indices of a face
/// corner are always the same; indices are trusted as-is.
pub fn write_obj(mesh: &Mesh) -> Result<String> {
    let mut output = String::new();
    fmt_ok(render(&mut output, mesh))?;
    Ok(output)
}

fn render(output: &mut impl FmtWrite, mesh: &Mesh) -> fmt::Result {
    writeln!(output, "# Converted from Roblox mesh format")?;
    writeln!(
        output,
        "# Vertices: {}, Faces: {}\n",
        mesh.vertices.len(),
        mesh.triangles.len()
    )?;

    for vertex in &mesh.vertices {
        write_record(output, "v", &vertex.pos)?;
    }
    writeln!(output)?;

    for vertex in &mesh.vertices {
        write_record(output, "vn", &vertex.normal)?;
    }
    writeln!(output)?;

    for vertex in &mesh.vertices {
        write_record(output, "vt", &vertex.uv)?;
    }
    writeln!(output)?;

    for &Triangle([a, b, c]) in &mesh.triangles {
        writeln!(output, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// Floats use fixed six decimals. `core::fmt` ignores the host locale, so
/// the separator is always `.`.
fn write_record(output: &mut impl FmtWrite, tag: &str, values: &[f32]) -> fmt::Result {
    output.write_str(tag)?;
    for value in values {
        write!(output, " {:.6}", value)?;
    }
    writeln!(output)
}

fn fmt_ok(result: fmt::Result) -> Result<()> {
    result.map_err(|_| MeshError::Io(io::Error::other("failed to format OBJ output")))
}
