use thiserror::Error;

/// Errors that can occur during raycasting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RaycastError {
    /// Ray direction is zero; the march could never progress
    #[error("ray direction is zero or invalid")]
    InvalidDirection,
}
