//! Shared error types for the statue converter

use thiserror::Error;

/// Statue conversion error types
#[derive(Debug, Error)]
pub enum StatueError {
    #[error("palette source unavailable: {0}")]
    PaletteUnavailable(String),

    #[error("invalid palette entry {key:?}: {reason}")]
    InvalidPaletteEntry { key: String, reason: String },

    #[error("block palette has no entries")]
    EmptyPalette,

    #[error("statue has no blocks (fully transparent skin?)")]
    EmptyStatue,

    #[error("failed to decode skin image: {0}")]
    SkinDecode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for statue operations that may fail
pub type Result<T> = std::result::Result<T, StatueError>;
