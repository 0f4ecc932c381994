//! Output buffers of a meshing pass: positions, UVs and a triangle index list.

use glam::{Vec2, Vec3};
use voxkit_geometry::Face;
use voxkit_shape::UvRect;

/// Largest vertex count addressable with 16-bit indices.
const U16_INDEX_LIMIT: usize = u16::MAX as usize;

/// Flat mesh data ready for upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions in grid space.
    pub positions: Vec<Vec3>,
    /// Vertex texture coordinates, parallel to `positions`.
    pub uvs: Vec<Vec2>,
    /// Triangle list, 3 indices per triangle.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns `true` if the mesh has too many vertices for a `u16` index buffer.
    pub fn needs_wide_indices(&self) -> bool {
        self.vertex_count() >= U16_INDEX_LIMIT
    }

    /// Appends every renderable polygon of `face` translated by `offset`.
    ///
    /// With `uv_rect` set, tile UVs are remapped into that rectangle.
    /// Polygons are fan-triangulated as `(start, start + i + 1, start + i)`.
    pub fn add_face(&mut self, face: &Face, offset: Vec3, uv_rect: Option<UvRect>) {
        for polygon in face.renderable_polygons() {
            let start = self.positions.len() as u32;
            for v in polygon {
                self.positions.push(offset + v.position);
                self.uvs.push(match uv_rect {
                    Some(rect) => rect.map(v.uv),
                    None => v.uv,
                });
            }
            for i in 1..polygon.len() as u32 - 1 {
                self.indices
                    .extend_from_slice(&[start, start + i + 1, start + i]);
            }
        }
    }

    /// Appends another mesh, rebasing its indices.
    pub fn append(&mut self, other: &MeshBuffers) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Removes all data, keeping allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Position buffer as raw bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// UV buffer as raw bytes.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxkit_geometry::Vertex;

    fn unit_quad() -> Face {
        let v = |x: f32, y: f32| Vertex::new(Vec3::new(x, y, 0.0), Vec2::new(x, y));
        Face::quad(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0))
    }

    #[test]
    fn test_quad_fan() {
        let mut mesh = MeshBuffers::new();
        mesh.add_face(&unit_quad(), Vec3::ZERO, None);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 2, 1, 0, 3, 2]);
    }

    #[test]
    fn test_offset_and_uv_remap() {
        let mut mesh = MeshBuffers::new();
        let rect = UvRect::new(Vec2::new(0.5, 0.5), Vec2::splat(0.25));
        mesh.add_face(&unit_quad(), Vec3::new(2.0, 3.0, 4.0), Some(rect));
        assert_eq!(mesh.positions[2], Vec3::new(3.0, 4.0, 4.0));
        assert_eq!(mesh.uvs[2], Vec2::new(0.75, 0.75));
    }

    #[test]
    fn test_degenerate_polygons_skipped() {
        let mut face = Face::new();
        face.add_polygon(vec![Vertex::default(), Vertex::default()]);
        let mut mesh = MeshBuffers::new();
        mesh.add_face(&face, Vec3::ZERO, None);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut a = MeshBuffers::new();
        a.add_face(&unit_quad(), Vec3::ZERO, None);
        let b = a.clone();
        a.append(&b);
        assert_eq!(a.vertex_count(), 8);
        assert_eq!(&a.indices[6..], &[4, 6, 5, 4, 7, 6]);
    }

    #[test]
    fn test_byte_views() {
        let mut mesh = MeshBuffers::new();
        mesh.add_face(&unit_quad(), Vec3::ZERO, None);
        assert_eq!(mesh.position_bytes().len(), 4 * 12);
        assert_eq!(mesh.uv_bytes().len(), 4 * 8);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        assert!(!mesh.needs_wide_indices());
    }
}
