use glam::IVec3;
use thiserror::Error;

/// Errors raised by grid accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate is outside the grid's `[0, side)` domain on some axis
    #[error("coordinate {pos} is outside the {side}x{side}x{side} grid")]
    OutOfBounds { pos: IVec3, side: usize },
}
