//! Pipeline error type.

use thiserror::Error;

/// Errors produced by the core transform pipeline.
///
/// The transforms themselves are total over valid images; the only way a
/// run can fail inside the core is being handed an image with no pixels.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}
