use thiserror::Error;

/// Errors raised while laying out raw samples as an intensity field
#[derive(Debug, Error)]
pub enum FieldError {
    /// Buffer length does not match the requested dimensions
    #[error(
        "Sample buffer holds {actual} samples but a {height}x{width} field needs {expected}"
    )]
    DimensionMismatch {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },

    /// `height * width` does not fit in `usize`
    #[error("Field dimensions {height}x{width} overflow the addressable sample count")]
    DimensionOverflow { height: usize, width: usize },
}
