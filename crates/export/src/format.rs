//! Export format selection.
//!
//! Responsibilities:
//! - Define the supported export formats.
//! - Resolve open-set format tags and trigger modifiers to a format.
//!
//! Does NOT handle:
//! - Running the strategies themselves (see `strategy`).
//! - Input-device semantics (callers pre-resolve key state to a boolean).

/// Supported export formats for a rendered visualization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Rasterized bitmap capture of the widget (`image/jpeg`).
    #[default]
    Jpeg,
    /// Structured dump of the widget's internal state (`application/json`).
    Json,
}

impl ExportFormat {
    /// Resolve an open-set format tag.
    ///
    /// Only `"json"` selects the structured dump; every other tag, including
    /// an empty one, selects the bitmap capture. The fallback is deliberate
    /// policy, not an error path: absence of an explicit selection means
    /// "export an image".
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "json" => Self::Json,
            _ => Self::Jpeg,
        }
    }

    /// Resolve the trigger surface's held-modifier flag; a held modifier
    /// selects the structured dump.
    pub fn from_modifier(structured: bool) -> Self {
        if structured { Self::Json } else { Self::Jpeg }
    }

    /// File extension used in the generated file name.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Json => "json",
        }
    }

    /// MIME type of the payload produced for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Json => "application/json",
        }
    }
}
