use grid_util::point::Point;
use thiserror::Error;

/// Errors raised at the API boundary of the pathfinder. An unreachable goal is not one of them:
/// it yields an empty path instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("{point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("dimension range [{min}, {max}) is empty")]
    EmptyDimensionRange { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, PathError>;
