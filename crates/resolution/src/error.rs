//! Error types for resolution conversions.

use thiserror::Error;

use crate::Resolution3D;

/// Errors produced when a resolution is parsed, decoded, or converted into an
/// unsigned GPU extent.
///
/// Construction itself never fails; see [`Resolution3D::from_floats`].
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// A component was negative where an unsigned extent is required.
    #[error("{axis} dimension is negative: {value}")]
    NegativeDimension { axis: char, value: i64 },

    /// A component does not fit in a `u32`.
    #[error("{axis} dimension {value} does not fit in a u32")]
    DimensionOverflow { axis: char, value: i64 },

    /// The voxel count does not fit in a `u32`.
    #[error("voxel count of {0} does not fit in a u32")]
    VolumeOverflow(Resolution3D),

    /// A string was not of the form `XxYxZ`.
    #[error("invalid resolution name '{0}' - expected `XxYxZ`")]
    InvalidName(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolutionError>;
