use glam::Vec4;
use serde::{Deserialize, Serialize};

/// A single grid cell: an occupancy flag plus an rgba color attribute.
///
/// The default voxel is unoccupied with a zero color, which is what every
/// cell of a freshly allocated grid holds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Voxel {
    /// Whether this cell contains content
    pub occupied: bool,
    /// Color attribute returned on a raycast hit (rgba)
    pub color: Vec4,
}

impl Voxel {
    /// Create an occupied voxel with the given color.
    pub fn solid(color: Vec4) -> Self {
        Self {
            occupied: true,
            color,
        }
    }

    /// An unoccupied voxel with zero color.
    pub fn empty() -> Self {
        Self::default()
    }
}
