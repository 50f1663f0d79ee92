//! Grid construction errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large to address")]
    TooLarge { width: usize, height: usize },
}
