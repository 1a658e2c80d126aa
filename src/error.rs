//! Crate-level error type.

use thiserror::Error;

/// Errors produced while loading, saving or exporting chart data.
#[derive(Error, Debug)]
pub enum Error {
    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input or state file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An SVG document was rejected by the parser or lacks a root element.
    #[error("SVG error: {0}")]
    Svg(String),

    /// An interaction row did not have the expected positional shape.
    #[error("malformed interaction row {index}: {reason}")]
    MalformedRow { index: usize, reason: String },

    /// A chart identifier did not match any known statistics chart.
    #[error("unknown chart: {0}")]
    UnknownChart(String),

    /// The native window could not be started.
    #[error("UI error: {0}")]
    Ui(String),
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        Self::Svg(e.to_string())
    }
}

impl From<eframe::Error> for Error {
    fn from(e: eframe::Error) -> Self {
        Self::Ui(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
