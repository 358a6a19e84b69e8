//! Error types for the geometry model.

use thiserror::Error;

/// Errors raised by the geometry model.
///
/// All of them are programming or input errors rather than runtime
/// conditions: there is no degraded mode for an unpositioned picture or a
/// wire wider than its frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("picture not positioned: run the layout before reading derived points")]
    NotPositioned,

    #[error("invalid wall {width}x{height}: both dimensions must be positive and finite")]
    InvalidWall { width: f32, height: f32 },

    #[error("invalid picture {width}x{height}: both dimensions must be positive and finite")]
    InvalidPicture { width: f32, height: f32 },

    #[error("invalid suspension: {0}")]
    InvalidSuspension(String),
}
