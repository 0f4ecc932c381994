//! Renderable surface made of one or more planar polygons.

use glam::{Vec2, Vec3};

use crate::polygon::{PlaneBasis, polygon_in_union};

/// Minimum squared length of a usable polygon normal.
pub const NORMAL_EPSILON: f32 = 1e-3;

/// Distance tolerance when comparing a vertex against a cube side.
pub const POINT_EPSILON: f32 = 1e-3;

/// A face vertex: unit-cube position plus tile UV.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    /// Position in voxel-local space.
    pub position: Vec3,
    /// Texture coordinate.
    pub uv: Vec2,
}

impl Vertex {
    /// Creates a vertex.
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

/// An ordered list of polygons sharing one surface.
///
/// Polygon vertex order defines the winding. Faces are built once by a shape
/// and then only read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Face {
    polygons: Vec<Vec<Vertex>>,
}

impl Face {
    /// Creates a face with no polygons.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Creates a face holding a single polygon.
    pub fn from_polygon(polygon: Vec<Vertex>) -> Self {
        let mut face = Self::new();
        face.add_polygon(polygon);
        face
    }

    /// Creates a single-quad face from four corners in winding order.
    pub fn quad(a: Vertex, b: Vertex, c: Vertex, d: Vertex) -> Self {
        Self::from_polygon(vec![a, b, c, d])
    }

    /// Creates a single-triangle face.
    pub fn triangle(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self::from_polygon(vec![a, b, c])
    }

    /// Appends a polygon. Empty polygons are ignored.
    pub fn add_polygon(&mut self, polygon: Vec<Vertex>) {
        if !polygon.is_empty() {
            self.polygons.push(polygon);
        }
    }

    /// All polygons, including any with fewer than three vertices.
    pub fn polygons(&self) -> &[Vec<Vertex>] {
        &self.polygons
    }

    /// Iterates the polygons that can produce triangles.
    pub fn renderable_polygons(&self) -> impl Iterator<Item = &[Vertex]> {
        self.polygons
            .iter()
            .filter(|p| p.len() >= 3)
            .map(Vec::as_slice)
    }

    /// Returns `true` if at least one polygon has three or more vertices.
    pub fn has_renderable_polygons(&self) -> bool {
        self.renderable_polygons().next().is_some()
    }

    /// Number of vertices the face emits into a mesh.
    pub fn vertex_count(&self) -> usize {
        self.renderable_polygons().map(<[Vertex]>::len).sum()
    }

    /// Number of triangles the face emits into a mesh.
    pub fn triangle_count(&self) -> usize {
        self.renderable_polygons().map(|p| p.len() - 2).sum()
    }

    /// Plane normal of the first polygon whose first three vertices are not
    /// collinear. Not normalized; its sign follows the winding.
    pub fn normal(&self) -> Option<Vec3> {
        self.renderable_polygons().find_map(|p| {
            let n = (p[1].position - p[0].position).cross(p[2].position - p[0].position);
            (n.length_squared() >= NORMAL_EPSILON).then_some(n)
        })
    }

    /// Returns a copy with every vertex mapped by `f` and, if `reverse` is set,
    /// every polygon's vertex order reversed.
    pub fn map_vertices(&self, reverse: bool, mut f: impl FnMut(Vertex) -> Vertex) -> Face {
        let polygons = self
            .polygons
            .iter()
            .map(|polygon| {
                let mut mapped: Vec<Vertex> = polygon.iter().map(|&v| f(v)).collect();
                if reverse {
                    mapped.reverse();
                }
                mapped
            })
            .collect();
        Face { polygons }
    }

    /// Returns `true` if every polygon of this face lies inside the union of
    /// `other`'s polygons, projected along this face's normal.
    ///
    /// Either face being unrenderable, or this face having no usable normal,
    /// yields `false`. Distance along the normal is not compared; callers
    /// only test faces that share a cube side.
    pub fn is_occluded_by(&self, other: &Face) -> bool {
        if !self.has_renderable_polygons() || !other.has_renderable_polygons() {
            return false;
        }
        let Some(basis) = self.normal().and_then(PlaneBasis::from_normal) else {
            return false;
        };

        let containers: Vec<Vec<Vec2>> = other
            .renderable_polygons()
            .map(|p| basis.project_all(p.iter().map(|v| &v.position)))
            .collect();

        self.renderable_polygons().all(|p| {
            let projected = basis.project_all(p.iter().map(|v| &v.position));
            polygon_in_union(&projected, &containers)
        })
    }
}
