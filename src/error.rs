// src/error.rs
use fontscale_filter::FilterError;
use fontscale_rules::RewriteError;
use fontscale_style::StyleParseError;
use thiserror::Error;

/// Errors surfaced by plugin construction, option loading and the command line.
///
/// Per-file transforms never return this type to the host: parse and rewrite
/// failures are contained and reported through [`crate::TransformOutcome::Degraded`].
#[derive(Error, Debug)]
pub enum FontScaleError {
    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path filter is invalid: {0}")]
    Filter(#[from] FilterError),

    #[error("Parsing failed: {0}")]
    Parse(#[from] StyleParseError),

    #[error("Rewriting failed: {0}")]
    Rewrite(#[from] RewriteError),

    #[error("Source map error: {0}")]
    SourceMap(#[from] sourcemap::Error),

    #[error("Transform task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
