//! The stepping loop: grid-aligned ray marching.

use crate::{Ray, RaycastError};
use glam::Vec3;
use grid::{Voxel, VoxelGrid};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Default distance budget for a traversal, in grid units.
pub const MAX_RAY_LENGTH: f32 = 100.0;

/// Hard ceiling on march iterations. Each step crosses a cell boundary, so
/// any non-degenerate ray exits the grid or the budget long before this.
const MAX_STEPS: u32 = 10_000;

/// Outcome of a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TraversalResult {
    /// First occupied voxel along the ray, with the Euclidean distance
    /// travelled to reach it
    Hit { voxel: Voxel, distance: f32 },
    /// No occupied voxel found: the distance budget ran out or the ray
    /// left the grid domain
    Miss { distance: f32 },
}

impl TraversalResult {
    fn hit(voxel: Voxel, distance: f32) -> Self {
        Self::Hit { voxel, distance }
    }

    fn miss(distance: f32) -> Self {
        Self::Miss { distance }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// Distance travelled when the traversal terminated.
    pub fn distance(&self) -> f32 {
        match self {
            Self::Hit { distance, .. } | Self::Miss { distance } => *distance,
        }
    }
}

/// Cast a ray given as an origin and a planar angle in degrees.
///
/// The angle is converted to the unit vector `(cos θ, sin θ, 0)` with trig
/// components rounded to 3 decimal places; the march therefore never steps
/// the z axis. See [`cast_ray_dir`] for the fully 3D entry point.
pub fn cast_ray(
    grid: &VoxelGrid,
    origin: Vec3,
    angle_degrees: f32,
    max_distance: f32,
) -> Result<TraversalResult, RaycastError> {
    Ray::new(origin, angle_degrees).cast(grid, max_distance)
}

/// Cast a ray given as an origin and a direction vector, stepping all
/// three axes.
///
/// The direction need not be normalized: parametric step lengths are
/// converted to Euclidean distance through the vector's length. A zero
/// direction is rejected with [`RaycastError::InvalidDirection`] before
/// marching begins, since it could never make progress.
pub fn cast_ray_dir(
    grid: &VoxelGrid,
    origin: Vec3,
    dir: Vec3,
    max_distance: f32,
) -> Result<TraversalResult, RaycastError> {
    if dir == Vec3::ZERO {
        return Err(RaycastError::InvalidDirection);
    }
    debug!(?origin, ?dir, max_distance, "cast");
    Ok(march(grid, origin, dir, max_distance))
}

/// Parametric distance to the next integer boundary in the direction of
/// travel. Always in `(0, 1]`.
#[inline]
fn boundary_dist(coord: f32, dir: f32) -> f32 {
    if dir > 0.0 {
        (coord + 1.0).floor() - coord
    } else {
        coord - (coord - 1.0).ceil()
    }
}

/// Integer boundary the march lands on when stepping the given axis.
#[inline]
fn boundary_coord(coord: f32, dir: f32) -> f32 {
    if dir > 0.0 {
        (coord + 1.0).floor()
    } else {
        (coord - 1.0).ceil()
    }
}

fn march(grid: &VoxelGrid, origin: Vec3, dir: Vec3, max_distance: f32) -> TraversalResult {
    let unit_length = dir.length();
    let mut cur_pos = origin;
    let mut len = 0.0_f32;

    for _ in 0..MAX_STEPS {
        if len >= max_distance {
            trace!(len, "distance budget exhausted");
            return TraversalResult::miss(len);
        }

        // Nearest boundary crossing over the constrained axes. On an exact
        // tie the smaller index wins, but advancing along the full
        // direction vector crosses both boundaries simultaneously either
        // way.
        let mut step: Option<(usize, f32)> = None;
        for axis in 0..3 {
            let d = dir[axis];
            if d == 0.0 {
                continue; // degenerate axis contributes no constraint
            }
            let t = boundary_dist(cur_pos[axis], d) / d.abs();
            if t > 0.0 && step.map_or(true, |(_, best)| t < best) {
                step = Some((axis, t));
            }
        }
        let Some((axis, t)) = step else {
            // Unreachable for a nonzero direction: every constrained axis
            // yields a positive step.
            return TraversalResult::miss(len);
        };

        let boundary = boundary_coord(cur_pos[axis], dir[axis]);
        cur_pos += dir * t;
        // Land exactly on the crossed boundary for the stepped axis.
        cur_pos[axis] = boundary;
        len += t * unit_length;

        let cell = cur_pos.floor().as_ivec3();
        match grid.get(cell) {
            Ok(voxel) if voxel.occupied => {
                trace!(?cell, len, "hit");
                return TraversalResult::hit(voxel, len);
            }
            Ok(_) => {}
            Err(_) => {
                // Stepped outside the grid domain: implicit miss.
                trace!(?cell, len, "left grid");
                return TraversalResult::miss(len);
            }
        }
    }

    warn!(max_steps = MAX_STEPS, len, "step ceiling reached");
    TraversalResult::miss(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{IVec3, Vec4};

    fn grid_with(cells: &[(i32, i32, i32, Vec4)]) -> VoxelGrid {
        let mut grid = VoxelGrid::new();
        for &(x, y, z, color) in cells {
            grid.set(IVec3::new(x, y, z), Voxel::solid(color)).unwrap();
        }
        grid
    }

    #[test]
    fn test_boundary_dist_positive() {
        assert_eq!(boundary_dist(3.0, 1.0), 1.0);
        assert_eq!(boundary_dist(3.25, 1.0), 0.75);
        assert_eq!(boundary_dist(0.0, 1.0), 1.0);
    }

    #[test]
    fn test_boundary_dist_negative() {
        assert_eq!(boundary_dist(3.25, -1.0), 0.25);
        assert_eq!(boundary_dist(3.0, -1.0), 1.0);
    }

    #[test]
    fn test_hit_along_x() {
        let color = Vec4::new(100.0, 0.0, 0.0, 0.0);
        let grid = grid_with(&[(5, 0, 0, color)]);

        let result = cast_ray(&grid, Vec3::new(0.0, 0.5, 0.0), 0.0, MAX_RAY_LENGTH).unwrap();
        match result {
            TraversalResult::Hit { voxel, distance } => {
                assert_eq!(voxel.color, color);
                assert_relative_eq!(distance, 5.0, epsilon = 1e-4);
            }
            TraversalResult::Miss { .. } => panic!("expected hit, got {result:?}"),
        }
    }

    #[test]
    fn test_first_occupied_wins() {
        let near = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let far = Vec4::new(0.0, 1.0, 0.0, 1.0);
        let grid = grid_with(&[(3, 0, 0, near), (7, 0, 0, far)]);

        let result = cast_ray(&grid, Vec3::new(0.0, 0.5, 0.0), 0.0, MAX_RAY_LENGTH).unwrap();
        match result {
            TraversalResult::Hit { voxel, distance } => {
                assert_eq!(voxel.color, near);
                assert_relative_eq!(distance, 3.0, epsilon = 1e-4);
            }
            TraversalResult::Miss { .. } => panic!("expected hit, got {result:?}"),
        }
    }

    #[test]
    fn test_zero_direction_rejected() {
        let grid = VoxelGrid::new();
        let err = cast_ray_dir(&grid, Vec3::ZERO, Vec3::ZERO, MAX_RAY_LENGTH).unwrap_err();
        assert_eq!(err, RaycastError::InvalidDirection);
    }

    #[test]
    fn test_leaving_grid_is_miss() {
        let grid = VoxelGrid::new();
        // Marches along y = 15.5 and exits at x = 16, well short of the budget.
        let result = cast_ray(&grid, Vec3::new(0.5, 15.5, 0.0), 0.0, MAX_RAY_LENGTH).unwrap();
        match result {
            TraversalResult::Miss { distance } => {
                assert!(distance < 20.0, "expected early exit, got {distance}");
            }
            TraversalResult::Hit { .. } => panic!("expected miss, got {result:?}"),
        }
    }

    #[test]
    fn test_budget_exhaustion_inside_grid() {
        let grid = VoxelGrid::new();
        // 45 degrees from the corner stays inside the 16-cube past len 10.
        let result = cast_ray(&grid, Vec3::new(0.5, 0.5, 0.0), 45.0, 10.0).unwrap();
        match result {
            TraversalResult::Miss { distance } => {
                assert!(distance >= 10.0, "budget not exhausted at {distance}");
            }
            TraversalResult::Hit { .. } => panic!("expected miss, got {result:?}"),
        }
    }

    #[test]
    fn test_negative_direction() {
        let color = Vec4::new(0.0, 0.0, 1.0, 1.0);
        let grid = grid_with(&[(3, 0, 0, color)]);

        // 180 degrees: unit (-1, 0, 0). Walking down from x = 10.5 the
        // march lands on each integer boundary and reads the cell to its
        // right, so the occupied cell registers at the x = 3 boundary.
        let result = cast_ray(&grid, Vec3::new(10.5, 0.5, 0.0), 180.0, MAX_RAY_LENGTH).unwrap();
        match result {
            TraversalResult::Hit { voxel, distance } => {
                assert_eq!(voxel.color, color);
                assert_relative_eq!(distance, 7.5, epsilon = 1e-3);
            }
            TraversalResult::Miss { .. } => panic!("expected hit, got {result:?}"),
        }
    }

    #[test]
    fn test_z_axis_stepping() {
        let color = Vec4::new(0.5, 0.5, 0.5, 1.0);
        let grid = grid_with(&[(5, 5, 3, color)]);

        let result = cast_ray_dir(
            &grid,
            Vec3::new(5.5, 5.5, 0.2),
            Vec3::new(0.0, 0.0, 1.0),
            MAX_RAY_LENGTH,
        )
        .unwrap();
        match result {
            TraversalResult::Hit { voxel, distance } => {
                assert_eq!(voxel.color, color);
                assert_relative_eq!(distance, 2.8, epsilon = 1e-4);
            }
            TraversalResult::Miss { .. } => panic!("expected hit, got {result:?}"),
        }
    }

    #[test]
    fn test_distance_accessor() {
        assert_eq!(TraversalResult::miss(12.5).distance(), 12.5);
        assert!(!TraversalResult::miss(12.5).is_hit());
        let hit = TraversalResult::hit(Voxel::default(), 3.0);
        assert_eq!(hit.distance(), 3.0);
        assert!(hit.is_hit());
    }
}
