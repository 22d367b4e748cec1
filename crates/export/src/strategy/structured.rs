//! Structured export: dump the widget state as JSON.

use crate::error::Result;
use crate::format::ExportFormat;
use crate::strategy::ExportPayload;
use crate::widget::{ELEMENT_KEY, VisualizationWidget};

/// Dump the widget's full internal state as a JSON payload, with the live
/// element handle scrubbed.
///
/// The element entry is implementation internal, not user-facing data, and
/// is the only key removed. Everything else the widget exposes is exported
/// as-is, with no guaranteed key order.
pub fn dump_state<W: VisualizationWidget>(widget: &W) -> Result<ExportPayload> {
    let mut state = widget.state();
    state.remove(ELEMENT_KEY);

    Ok(ExportPayload {
        bytes: serde_json::to_vec(&state)?,
        extension: ExportFormat::Json.extension(),
        mime_type: ExportFormat::Json.mime_type(),
    })
}
