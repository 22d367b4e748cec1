//! Format-specific export strategies.
//!
//! Responsibilities:
//! - Define the payload handed to the save sink.
//! - Host the bitmap and structured strategies.
//!
//! Does NOT handle:
//! - Strategy selection or file naming (see `dispatcher` and `filename`).
//! - Persisting the payload (see `sink`).

mod bitmap;
mod structured;

pub use bitmap::{CAPTURE_PIXEL_RATIO, capture_bitmap};
pub use structured::dump_state;

/// Blob plus metadata produced by a strategy; consumed exactly once by the
/// save sink, never cached or reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
    pub mime_type: &'static str,
}
