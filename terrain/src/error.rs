use thiserror::Error;

/// Failures raised by terrain construction, exact-cell access and loading.
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("terrain dimensions must be positive, got {width}x{length}")]
    InvalidDimensions { width: usize, length: usize },

    #[error("cell ({x}, {z}) is outside the {width}x{length} terrain")]
    OutOfRange {
        x: usize,
        z: usize,
        width: usize,
        length: usize,
    },

    #[error("failed to decode heightmap: {0}")]
    Image(#[from] image::ImageError),
}
