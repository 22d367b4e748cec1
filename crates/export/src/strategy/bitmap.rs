//! Bitmap export: rasterize the widget as a JPEG.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::background::BackgroundResolver;
use crate::error::{ExportError, Result};
use crate::format::ExportFormat;
use crate::strategy::ExportPayload;
use crate::widget::{RenderOptions, VisualizationWidget};

/// Linear resolution multiplier for captures; 2x keeps exports sharp on
/// high-DPI displays.
pub const CAPTURE_PIXEL_RATIO: u32 = 2;

/// Capture the widget's current appearance as a JPEG payload.
///
/// The capture paints the background actually rendered behind the widget,
/// which `background` resolves from the surrounding layout; an unresolvable
/// background fails the capture the same way a rejected render does.
pub async fn capture_bitmap<W, B>(widget: &W, background: &B) -> Result<ExportPayload>
where
    W: VisualizationWidget,
    B: BackgroundResolver<W>,
{
    let background_color = background.effective_background(widget).ok_or_else(|| {
        ExportError::Rasterization("effective background color unavailable".to_string())
    })?;

    let options = RenderOptions {
        format: ExportFormat::Jpeg.mime_type(),
        pixel_ratio: CAPTURE_PIXEL_RATIO,
        background_color,
    };
    let payload = widget
        .render_image(options)
        .await
        .map_err(|e| ExportError::Rasterization(e.to_string()))?;

    Ok(ExportPayload {
        bytes: decode_data_uri(&payload)?,
        extension: ExportFormat::Jpeg.extension(),
        mime_type: ExportFormat::Jpeg.mime_type(),
    })
}

/// Decode a base64 data-URI payload (`data:image/jpeg;base64,<data>`, or the
/// bare `base64,<data>` form some widgets return) into raw bytes.
fn decode_data_uri(payload: &str) -> Result<Vec<u8>> {
    let (_, data) = payload
        .split_once(',')
        .ok_or_else(|| ExportError::Rasterization("malformed data-URI payload".to_string()))?;

    let data = data.trim();
    if data.is_empty() {
        return Err(ExportError::Rasterization(
            "widget returned no image data".to_string(),
        ));
    }

    STANDARD
        .decode(data)
        .map_err(|e| ExportError::Rasterization(format!("undecodable image data: {e}")))
}
