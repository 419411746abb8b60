use std::path::PathBuf;

use epd_pipeline::PipelineError;
use thiserror::Error;

/// Errors surfaced by one processing run.
///
/// Every variant aborts the run; nothing is retried or partially
/// recovered. Decode and encode failures carry the path they concern so
/// the CLI can report which artifact failed.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
