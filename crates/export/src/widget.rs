//! Widget handle boundary.
//!
//! Responsibilities:
//! - Define the two capabilities the export pipeline consumes from a live
//!   visualization: render-to-image and state dump.
//! - Define the element surface used for background inspection.
//!
//! Does NOT handle:
//! - Rendering or layout (the widget implementation owns those).
//! - Strategy selection (see `dispatcher`).

use serde_json::{Map, Value};

/// State mapping key holding the live element handle. The entry is
/// implementation internal; the structured export scrubs it before
/// serialization.
pub const ELEMENT_KEY: &str = "element";

/// Options for a bitmap capture request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// MIME type of the requested image encoding.
    pub format: &'static str,
    /// Linear resolution multiplier (2 renders at 2x for high-DPI output).
    pub pixel_ratio: u32,
    /// Effective background color to paint behind the visualization.
    pub background_color: String,
}

/// Minimal element-tree surface: enough to walk ancestors and read a
/// computed background color.
pub trait ElementNode {
    fn parent(&self) -> Option<&Self>;

    /// Computed background color of this node.
    fn background_color(&self) -> &str;
}

/// A live, renderable visualization instance.
///
/// Handles are borrowed for the duration of one export call and never
/// mutated. The surrounding application may unmount a handle while a capture
/// is in flight; implementations should fail the pending `render_image`
/// rather than panic.
#[allow(async_fn_in_trait)]
pub trait VisualizationWidget {
    type Element: ElementNode;

    /// Root element the widget renders into, or `None` when unmounted.
    fn element(&self) -> Option<&Self::Element>;

    /// Rasterize the current appearance, returning a base64 data-URI
    /// payload (`…;base64,<data>`).
    async fn render_image(&self, options: RenderOptions) -> anyhow::Result<String>;

    /// Full internal state as a key-value mapping. May include the live
    /// element handle under [`ELEMENT_KEY`].
    fn state(&self) -> Map<String, Value>;
}
