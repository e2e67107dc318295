//! Error types for slide model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlideModelError {
    #[error("Unknown color slot: {0}")]
    UnknownColorSlot(String),

    #[error("Unknown shape type: {0}")]
    UnknownShapeType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlideModelError>;
