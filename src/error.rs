use thiserror::Error;

/// Errors returned by the drawing surface and its host
#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),

    #[error("Brush width must be a positive number, got {0}")]
    InvalidBrushWidth(f32),

    #[error("Failed to decode background image: {0}")]
    BackgroundDecode(#[from] image::ImageError),

    #[error("Failed to read settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type for drawing operations
pub type DrawingResult<T> = Result<T, DrawingError>;
