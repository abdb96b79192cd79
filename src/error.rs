use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a binarization run. None of these are recovered from.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image_rs::ImageError,
    },

    #[error("Failed to encode image '{path}': {source}")]
    Encode {
        path: PathBuf,
        source: image_rs::ImageError,
    },

    #[error("Window size {window_size} is invalid, it must be odd, at least 1 and at most 4 times the longest image side plus 1")]
    InvalidWindowSize { window_size: usize },

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Shape mismatch: expected {expected:?} (rows, cols), found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
