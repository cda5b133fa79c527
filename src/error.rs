use std::io;

use thiserror::Error;

/// Failures surfaced while loading the arena or preparing the drawing surface.
#[derive(Debug, Error)]
pub enum CrawlerError {
    #[error("failed to read layout {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid color token `{0}`")]
    InvalidColor(String),
    #[error("{what} must have a positive size, got {width}x{height}")]
    InvalidSize {
        what: &'static str,
        width: i32,
        height: i32,
    },
    #[error("drawing surface is not ready (screen {width}x{height})")]
    SurfaceUnavailable { width: f32, height: f32 },
}
