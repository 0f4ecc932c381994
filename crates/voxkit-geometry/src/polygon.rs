//! Planar polygon helpers used by the occlusion test: projection onto a 2D
//! basis and point / polygon containment against a union of polygons.

use glam::{Vec2, Vec3};

/// Tolerance for a point lying on a polygon edge.
pub const EDGE_TOLERANCE: f32 = 1e-4;

/// Edges whose vertical extent is below this are skipped by the ray test.
const RAY_DENOMINATOR_EPSILON: f32 = 1e-6;

/// Orthonormal 2D basis spanning a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneBasis {
    /// First in-plane axis.
    pub tangent: Vec3,
    /// Second in-plane axis, `normal × tangent`.
    pub bitangent: Vec3,
}

impl PlaneBasis {
    /// Builds a basis for the plane with the given normal.
    ///
    /// Returns `None` if the normal is degenerate.
    pub fn from_normal(normal: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        let up = if normal.y.abs() < 0.99 { Vec3::Y } else { Vec3::X };
        let tangent = up.cross(normal).try_normalize()?;
        let bitangent = normal.cross(tangent);
        Some(Self { tangent, bitangent })
    }

    /// Projects a point onto the basis.
    pub fn project(&self, p: Vec3) -> Vec2 {
        Vec2::new(p.dot(self.tangent), p.dot(self.bitangent))
    }

    /// Projects every point of a polygon.
    pub fn project_all<'a>(&self, points: impl IntoIterator<Item = &'a Vec3>) -> Vec<Vec2> {
        points.into_iter().map(|&p| self.project(p)).collect()
    }
}

/// Returns `true` if `p` is within `tolerance` of the segment `a`–`b`.
pub fn point_on_segment(p: Vec2, a: Vec2, b: Vec2, tolerance: f32) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.length_squared();
    if len_sq <= tolerance * tolerance {
        return ap.length() <= tolerance;
    }
    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(p) <= tolerance
}

/// Even-odd point-in-polygon test. Points on an edge count as inside.
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut j = n - 1;
    for i in 0..n {
        if point_on_segment(p, polygon[j], polygon[i], EDGE_TOLERANCE) {
            return true;
        }
        j = i;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let denominator = pj.y - pi.y;
            if denominator.abs() >= RAY_DENOMINATOR_EPSILON {
                let cross_x = (pj.x - pi.x) * (p.y - pi.y) / denominator + pi.x;
                if p.x < cross_x {
                    inside = !inside;
                }
            }
        }
        j = i;
    }
    inside
}

/// Returns `true` if `p` lies inside at least one of `containers`.
pub fn point_in_union(p: Vec2, containers: &[Vec<Vec2>]) -> bool {
    containers.iter().any(|c| point_in_polygon(p, c))
}

/// Returns `true` if `polygon` is covered by the union of `containers`.
///
/// Samples the centroid, every vertex and every edge midpoint; each sample
/// must fall inside some container. Exact for convex polygons covered by
/// convex containers that share the sampled vertices, which is what voxel
/// faces are.
pub fn polygon_in_union(polygon: &[Vec2], containers: &[Vec<Vec2>]) -> bool {
    if polygon.len() < 3 || containers.is_empty() {
        return false;
    }

    let centroid = polygon.iter().copied().sum::<Vec2>() / polygon.len() as f32;
    if !point_in_union(centroid, containers) {
        return false;
    }

    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[j], polygon[i]);
        if !point_in_union(b, containers) || !point_in_union((a + b) * 0.5, containers) {
            return false;
        }
        j = i;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_basis_is_orthonormal() {
        for normal in [Vec3::X, Vec3::Y, Vec3::NEG_Z, Vec3::new(0.0, 1.0, -1.0)] {
            let basis = PlaneBasis::from_normal(normal).expect("basis");
            assert!((basis.tangent.length() - 1.0).abs() < 1e-5);
            assert!((basis.bitangent.length() - 1.0).abs() < 1e-5);
            assert!(basis.tangent.dot(basis.bitangent).abs() < 1e-5);
            assert!(basis.tangent.dot(normal.normalize()).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_normal_has_no_basis() {
        assert!(PlaneBasis::from_normal(Vec3::ZERO).is_none());
    }

    #[test]
    fn test_point_inside_and_outside() {
        let square = unit_square();
        assert!(point_in_polygon(Vec2::new(0.5, 0.5), &square));
        assert!(!point_in_polygon(Vec2::new(1.5, 0.5), &square));
        assert!(!point_in_polygon(Vec2::new(-0.01, 0.5), &square));
    }

    #[test]
    fn test_points_on_boundary_are_inside() {
        let square = unit_square();
        assert!(point_in_polygon(Vec2::new(1.0, 0.3), &square));
        assert!(point_in_polygon(Vec2::new(0.0, 0.0), &square));
        assert!(point_in_polygon(Vec2::new(0.5, 1.0), &square));
    }

    #[test]
    fn test_polygon_covered_by_two_halves() {
        let left = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.5, 0.0),
            Vec2::new(0.5, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let right = vec![
            Vec2::new(0.5, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.5, 1.0),
        ];
        assert!(polygon_in_union(&unit_square(), &[left.clone(), right]));
        assert!(!polygon_in_union(&unit_square(), &[left]));
    }

    #[test]
    fn test_triangle_in_square_but_not_reverse() {
        let triangle = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ];
        assert!(polygon_in_union(&triangle, &[unit_square()]));
        assert!(!polygon_in_union(&unit_square(), &[triangle]));
    }
}
