//! Effective background color resolution.
//!
//! The widget's own root is typically transparent; the color actually
//! painted behind it belongs to a container some ancestor levels up. The
//! resolver is an injected capability so the pipeline does not hard-code the
//! container depth of any particular layout.

use crate::widget::{ElementNode, VisualizationWidget};

/// Capability that yields the background color a bitmap export should paint.
pub trait BackgroundResolver<W: VisualizationWidget> {
    /// Effective background color, or `None` when it cannot be determined
    /// (unmounted widget, missing ancestor).
    fn effective_background(&self, widget: &W) -> Option<String>;
}

/// Resolver that reads the computed background of the ancestor a fixed
/// number of levels above the widget's root element.
#[derive(Debug, Clone, Copy)]
pub struct ContainerBackground {
    levels: usize,
}

impl ContainerBackground {
    /// Ancestor distance of the container that paints the real background in
    /// the stock layout: two levels above the widget root.
    pub const DEFAULT_LEVELS: usize = 2;

    pub fn new(levels: usize) -> Self {
        Self { levels }
    }
}

impl Default for ContainerBackground {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVELS)
    }
}

impl<W: VisualizationWidget> BackgroundResolver<W> for ContainerBackground {
    fn effective_background(&self, widget: &W) -> Option<String> {
        let mut node = widget.element()?;
        for _ in 0..self.levels {
            node = node.parent()?;
        }
        Some(node.background_color().to_string())
    }
}
