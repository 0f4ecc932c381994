//! Grid meshing passes.
//!
//! The render and collision passes share one shell algorithm: each outer face
//! is emitted unless the neighbouring cell's opposing outer face covers it,
//! and inner faces are emitted whenever at least one side of the cell is
//! exposed. The mask pass emits overlay faces for flagged cells with no
//! occlusion at all.

use std::sync::Arc;

use glam::Vec3;
use voxkit_geometry::{
    AxisPlane, Face, FlipOrientation, is_coplanar_with_plane, map_world_plane_to_local,
};
use voxkit_grid::{Cell, CellSource, MaskLayer};
use voxkit_shape::{CardinalPoint, FaceSet, VoxelFilter, VoxelRegistry};

use crate::cache::TransformCache;
use crate::mesh_buffers::MeshBuffers;
use crate::sprites::MaskSpriteSource;

/// Which face set of a shape a shell pass reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Render,
    Collision,
}

/// Builds meshes from a grid and a registry. Owns the transform cache, so a
/// single mesher should be reused across rebuilds of the same world.
#[derive(Default)]
pub struct Mesher {
    cache: TransformCache,
}

impl Mesher {
    /// Creates a mesher with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The transform cache.
    pub fn cache(&self) -> &TransformCache {
        &self.cache
    }

    /// Mutable access to the transform cache, e.g. to clear it after the
    /// registry is replaced.
    pub fn cache_mut(&mut self) -> &mut TransformCache {
        &mut self.cache
    }

    /// Builds the visible surface of every registered cell.
    pub fn build_render_mesh<S: CellSource>(
        &mut self,
        grid: &S,
        registry: &VoxelRegistry,
    ) -> MeshBuffers {
        let mesh = self.build_shell_mesh(grid, registry, Channel::Render, VoxelFilter::Any);
        tracing::debug!(
            "Render mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        mesh
    }

    /// Builds the collision surface of the cells accepted by `filter`. Cells
    /// the filter rejects are treated as empty, neighbours included.
    pub fn build_collision_mesh<S: CellSource>(
        &mut self,
        grid: &S,
        registry: &VoxelRegistry,
        filter: VoxelFilter,
    ) -> MeshBuffers {
        let mesh = self.build_shell_mesh(grid, registry, Channel::Collision, filter);
        tracing::debug!(
            "Collision mesh ({:?}): {} vertices, {} triangles",
            filter,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        mesh
    }

    /// Builds overlay geometry for every non-air cell with an active mask.
    ///
    /// The highest-priority mask of a cell selects the sprite; the shape's
    /// mask faces for the cell's flip are rotated by its orientation and
    /// their tile UVs remapped into the sprite rectangle. A mask type with no
    /// sprite keeps the raw tile UVs.
    pub fn build_mask_mesh<S: CellSource, M: MaskSpriteSource + ?Sized>(
        &mut self,
        grid: &S,
        masks: &MaskLayer,
        registry: &VoxelRegistry,
        sprites: &M,
    ) -> MeshBuffers {
        let mut mesh = MeshBuffers::new();
        let (sx, sy, sz) = grid.size();

        for z in 0..sz {
            for y in 0..sy {
                for x in 0..sx {
                    let Some(mask) = masks.get(x, y, z).topmost() else {
                        continue;
                    };
                    let (xi, yi, zi) = (x as i32, y as i32, z as i32);
                    let Some(cell) = grid.cell_at(xi, yi, zi) else {
                        continue;
                    };
                    let Some(shape) = registry.shape_for(cell.id) else {
                        tracing::debug!("Mask at ({}, {}, {}): unregistered id {}", x, y, z, cell.id);
                        continue;
                    };
                    let rect = sprites.uv_rect_for(mask);
                    if rect.is_none() {
                        tracing::debug!("No sprite for mask {:?}, using tile UVs", mask);
                    }

                    let offset = Vec3::new(x as f32, y as f32, z as f32);
                    for face in shape.mask_faces(cell.flip) {
                        let placed =
                            self.cache
                                .transformed(face, cell.orientation, FlipOrientation::PositiveY);
                        mesh.add_face(&placed, offset, rect);
                    }
                }
            }
        }

        tracing::debug!(
            "Mask mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        mesh
    }

    /// World-space anchor `which` of the cell at `(x, y, z)`, or `None` for
    /// air, out-of-bounds and unregistered cells.
    pub fn cardinal_point<S: CellSource>(
        &mut self,
        grid: &S,
        registry: &VoxelRegistry,
        x: i32,
        y: i32,
        z: i32,
        which: CardinalPoint,
    ) -> Option<Vec3> {
        let cell = grid.cell_at(x, y, z)?;
        let shape = registry.shape_for(cell.id)?;
        let points = self
            .cache
            .transformed_points(shape.cardinal_points(cell.flip), cell.orientation);
        Some(Vec3::new(x as f32, y as f32, z as f32) + points.get(which))
    }

    // -----------------------------------------------------------------------
    // Shell pass
    // -----------------------------------------------------------------------

    fn build_shell_mesh<S: CellSource>(
        &mut self,
        grid: &S,
        registry: &VoxelRegistry,
        channel: Channel,
        filter: VoxelFilter,
    ) -> MeshBuffers {
        let mut mesh = MeshBuffers::new();
        let (sx, sy, sz) = grid.size();

        for z in 0..sz as i32 {
            for y in 0..sy as i32 {
                for x in 0..sx as i32 {
                    let Some((cell, faces)) = resolve(grid, registry, channel, filter, x, y, z)
                    else {
                        continue;
                    };
                    let offset = Vec3::new(x as f32, y as f32, z as f32);
                    let mut any_outer_visible = false;

                    for world in AxisPlane::ALL {
                        let neighbour =
                            self.neighbour_face(grid, registry, channel, filter, world, (x, y, z));
                        let local = map_world_plane_to_local(world, cell.orientation, cell.flip);

                        match faces.outer(local) {
                            Some(face) => {
                                let placed =
                                    self.cache.transformed(face, cell.orientation, cell.flip);
                                let hidden = neighbour
                                    .as_ref()
                                    .is_some_and(|n| self.cache.is_occluded(&placed, n));
                                if !hidden {
                                    mesh.add_face(&placed, offset, None);
                                    any_outer_visible = true;
                                }
                            }
                            None => {
                                if !self.seals(neighbour.as_ref(), world.opposite()) {
                                    any_outer_visible = true;
                                }
                            }
                        }
                    }

                    if any_outer_visible {
                        for face in faces.inner() {
                            let placed = self.cache.transformed(face, cell.orientation, cell.flip);
                            mesh.add_face(&placed, offset, None);
                        }
                    }
                }
            }
        }
        mesh
    }

    /// Transformed outer face of the neighbour across `world` that lies on
    /// the shared side, if any.
    fn neighbour_face<S: CellSource>(
        &mut self,
        grid: &S,
        registry: &VoxelRegistry,
        channel: Channel,
        filter: VoxelFilter,
        world: AxisPlane,
        (x, y, z): (i32, i32, i32),
    ) -> Option<Arc<Face>> {
        let (nx, ny, nz) = world.offset(x, y, z);
        let (cell, faces) = resolve(grid, registry, channel, filter, nx, ny, nz)?;
        let facing = map_world_plane_to_local(world.opposite(), cell.orientation, cell.flip);
        let face = faces.outer(facing)?;
        Some(self.cache.transformed(face, cell.orientation, cell.flip))
    }

    /// Approximate seal test for a side the cell leaves open: the neighbour
    /// face must lie on `plane` and cover the whole reference quad.
    fn seals(&mut self, neighbour: Option<&Arc<Face>>, plane: AxisPlane) -> bool {
        let Some(face) = neighbour else {
            return false;
        };
        if !is_coplanar_with_plane(face, plane) {
            return false;
        }
        let full = self.cache.full_face(plane);
        self.cache.is_occluded(&full, face)
    }
}

/// Cell at `(x, y, z)` and the face set the pass reads from it, or `None`
/// for air, unregistered ids and cells the filter rejects.
fn resolve<'r, S: CellSource>(
    grid: &S,
    registry: &'r VoxelRegistry,
    channel: Channel,
    filter: VoxelFilter,
    x: i32,
    y: i32,
    z: i32,
) -> Option<(Cell, &'r FaceSet)> {
    let cell = grid.cell_at(x, y, z)?;
    let Some(definition) = registry.get(cell.id) else {
        tracing::debug!("Cell ({}, {}, {}): unregistered id {}", x, y, z, cell.id);
        return None;
    };
    if channel == Channel::Collision && !filter.accepts(definition.traversal) {
        return None;
    }
    let shape = definition.shape();
    let faces = match channel {
        Channel::Render => shape.render(),
        Channel::Collision => shape.collision(),
    };
    Some((cell, faces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxkit_geometry::Orientation;
    use voxkit_grid::VoxelGrid;
    use voxkit_shape::{CubeTextures, ShapeKind, Traversal, UvRect, VoxelDefinition};

    fn registry() -> VoxelRegistry {
        let mut registry = VoxelRegistry::new();
        registry
            .register(
                0,
                VoxelDefinition::new(
                    "cube",
                    Traversal::Obstacle,
                    ShapeKind::Cube(CubeTextures::uniform(UvRect::FULL)),
                ),
            )
            .expect("register");
        registry
            .register(
                1,
                VoxelDefinition::new("slab", Traversal::Walkable, ShapeKind::Slab(CubeTextures::default())),
            )
            .expect("register");
        registry
    }

    #[test]
    fn test_single_cube() {
        let grid = VoxelGrid::new(1, 1, 1, Cell::new(0)).expect("grid");
        let mesh = Mesher::new().build_render_mesh(&grid, &registry());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn test_cube_on_slab() {
        let mut grid = VoxelGrid::new_air(1, 2, 1).expect("grid");
        grid.set(0, 0, 0, Cell::new(1));
        grid.set(0, 1, 0, Cell::new(0));
        let mesh = Mesher::new().build_render_mesh(&grid, &registry());
        // Slab: four walls, bottom and its inner top. The open top does not
        // hide the cube's bottom, so the cube keeps all six sides.
        assert_eq!(mesh.vertex_count(), (6 + 6) * 4);
    }

    #[test]
    fn test_unregistered_id_emits_nothing() {
        let grid = VoxelGrid::new(2, 1, 1, Cell::new(42)).expect("grid");
        let mesh = Mesher::new().build_render_mesh(&grid, &registry());
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_cardinal_point_world_space() {
        let grid = VoxelGrid::new(
            3,
            1,
            1,
            Cell::oriented(1, Orientation::NegativeX, FlipOrientation::PositiveY),
        )
        .expect("grid");
        let mut mesher = Mesher::new();
        let p = mesher
            .cardinal_point(&grid, &registry(), 2, 0, 0, CardinalPoint::Stationary)
            .expect("point");
        assert!((p - Vec3::new(2.5, 0.5, 0.5)).length() < 1e-6);
        assert!(mesher
            .cardinal_point(&grid, &registry(), 5, 0, 0, CardinalPoint::Stationary)
            .is_none());
    }
}
