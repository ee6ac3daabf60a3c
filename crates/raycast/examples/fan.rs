//! Cast a fan of rays from the grid center and print what each one sees.

use glam::{IVec3, Vec3, Vec4};
use grid::{Voxel, VoxelGrid};
use raycast::{cast_ray, TraversalResult, MAX_RAY_LENGTH};

fn main() {
    let mut grid = VoxelGrid::new();
    grid.set(IVec3::new(2, 8, 0), Voxel::solid(Vec4::new(1.0, 0.0, 0.0, 1.0)))
        .unwrap();
    grid.set(IVec3::new(8, 14, 0), Voxel::solid(Vec4::new(0.0, 1.0, 0.0, 1.0)))
        .unwrap();
    grid.set(IVec3::new(13, 3, 0), Voxel::solid(Vec4::new(0.0, 0.0, 1.0, 1.0)))
        .unwrap();

    let origin = Vec3::new(8.5, 8.5, 0.0);
    for i in 0..24 {
        let angle = i as f32 * 15.0;
        match cast_ray(&grid, origin, angle, MAX_RAY_LENGTH).unwrap() {
            TraversalResult::Hit { voxel, distance } => {
                println!("{angle:>5.1} deg: hit {:?} at {distance:.3}", voxel.color);
            }
            TraversalResult::Miss { distance } => {
                println!("{angle:>5.1} deg: miss after {distance:.3}");
            }
        }
    }
}
