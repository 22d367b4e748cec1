//! Error types for the export pipeline.

use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting a visualization.
///
/// A missing widget handle is deliberately not represented here: dispatching
/// against an unmounted widget is a silent no-op, not a failure.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Session context (query/source) could not be read, so no export file
    /// name can be built. Fatal to the current attempt only.
    #[error("session context unavailable, cannot build export file name")]
    ContextUnavailable,

    /// Image capture failed: the effective background could not be
    /// resolved, the widget produced no usable image data, or the data-URI
    /// payload could not be decoded.
    #[error("rasterization failed: {0}")]
    Rasterization(String),

    /// The widget state mapping could not be serialized to JSON.
    #[error("state serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The save sink reported a failure while persisting the payload.
    #[error("save failed: {0}")]
    Save(anyhow::Error),
}

impl ExportError {
    /// Check whether the failure happened inside a strategy, before any
    /// payload reached the save sink.
    pub fn is_strategy_failure(&self) -> bool {
        matches!(self, Self::Rasterization(_) | Self::Serialization(_))
    }
}
