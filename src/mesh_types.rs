/// Size of one vertex record in the fixed-record formats (2.00 through 5.00).
pub const FILEMESH_VERTEX_SIZE: usize = 40;
/// Size of one face record: three little-endian u32 indices.
pub const FILEMESH_FACE_SIZE: usize = 12;
/// `"version X.XX"` plus the separator byte that follows it.
pub const VERSION_HEADER_LEN: usize = 13;

pub const DEFAULT_COLOR: [u8; 4] = [255, 255, 255, 255];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    /// Already flipped to the OBJ convention (`v = 1 - stored_v`).
    pub uv: [f32; 3],
    pub tangent: [i8; 4],
    pub color: [u8; 4],
}

impl Vertex {
    pub fn new(pos: [f32; 3], normal: [f32; 3], uv: [f32; 3]) -> Self {
        Self {
            pos,
            normal,
            uv,
            tangent: [0; 4],
            color: DEFAULT_COLOR,
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new([0.0; 3], [0.0; 3], [0.0; 3])
    }
}

/// Three 1-based indices into the vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle(pub [u32; 3]);

impl Triangle {
    /// Converts on-disk 0-based indices, keeping the stored winding.
    pub fn from_zero_based(a: u32, b: u32, c: u32) -> Self {
        Self([a.saturating_add(1), b.saturating_add(1), c.saturating_add(1)])
    }

    /// Converts 0-based indices and swaps the last two corners.
    pub fn from_zero_based_reversed(a: u32, b: u32, c: u32) -> Self {
        Self::from_zero_based(a, c, b)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Header size each fixed-record version is expected to declare.
pub fn expected_header_size(version: &str) -> Option<u16> {
    match version {
        "2.00" | "3.00" | "3.01" => Some(12),
        "4.00" | "4.01" => Some(24),
        "5.00" => Some(32),
        _ => None,
    }
}
