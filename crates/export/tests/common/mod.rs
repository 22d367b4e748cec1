//! Shared fakes for the dispatcher tests: a scriptable widget with an
//! element tree, a recording sink, and an empty session provider.

#![allow(dead_code)]

use std::sync::Mutex;

use serde_json::{Map, Value, json};
use viz_export::{
    ELEMENT_KEY, ElementNode, ExportPayload, RenderOptions, SaveSink, SessionContext,
    SessionContextProvider, VisualizationWidget,
};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Raw bytes the mounted fake widget "renders".
pub const JPEG_BYTES: &[u8] = b"\xff\xd8\xfffake-jpeg-scanlines";

/// Background painted by the container two levels above the widget root.
pub const CONTAINER_BACKGROUND: &str = "rgb(16, 22, 26)";

pub struct FakeElement {
    background: &'static str,
    parent: Option<Box<FakeElement>>,
}

impl FakeElement {
    /// Widget root nested inside two transparent-to-opaque containers, the
    /// outermost of which paints [`CONTAINER_BACKGROUND`].
    pub fn nested() -> Self {
        FakeElement {
            background: "transparent",
            parent: Some(Box::new(FakeElement {
                background: "transparent",
                parent: Some(Box::new(FakeElement {
                    background: CONTAINER_BACKGROUND,
                    parent: None,
                })),
            })),
        }
    }

    /// Root with no ancestors at all.
    pub fn orphan() -> Self {
        FakeElement {
            background: "white",
            parent: None,
        }
    }
}

impl ElementNode for FakeElement {
    fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    fn background_color(&self) -> &str {
        self.background
    }
}

/// Scriptable widget: canned state mapping, canned render outcome, and a
/// log of the options each render call received.
pub struct FakeWidget {
    element: Option<FakeElement>,
    state: Map<String, Value>,
    render_result: Result<String, String>,
    pub render_calls: Mutex<Vec<RenderOptions>>,
}

impl FakeWidget {
    pub fn mounted() -> Self {
        Self {
            element: Some(FakeElement::nested()),
            state: canned_state(),
            render_result: Ok(format!(
                "data:image/jpeg;base64,{}",
                STANDARD.encode(JPEG_BYTES)
            )),
            render_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_failing_render() -> Self {
        Self {
            render_result: Err("image capture rejected".to_string()),
            ..Self::mounted()
        }
    }

    /// Mounted, but its root element has no ancestors to read a background
    /// from.
    pub fn without_containers() -> Self {
        Self {
            element: Some(FakeElement::orphan()),
            ..Self::mounted()
        }
    }
}

impl VisualizationWidget for FakeWidget {
    type Element = FakeElement;

    fn element(&self) -> Option<&FakeElement> {
        self.element.as_ref()
    }

    async fn render_image(&self, options: RenderOptions) -> anyhow::Result<String> {
        self.render_calls.lock().unwrap().push(options);
        self.render_result.clone().map_err(|e| anyhow::anyhow!(e))
    }

    fn state(&self) -> Map<String, Value> {
        self.state.clone()
    }
}

fn canned_state() -> Map<String, Value> {
    let mut state = Map::new();
    state.insert(ELEMENT_KEY.to_string(), json!({"node": "div#visualization"}));
    state.insert(
        "groups".to_string(),
        json!([
            {"label": "machine learning", "weight": 41},
            {"label": "neural networks", "weight": 17},
        ]),
    );
    state.insert("layout".to_string(), json!("relaxed"));
    state.insert("zoom".to_string(), json!(1.0));
    state
}

/// Sink that records every save instead of touching the filesystem.
#[derive(Default)]
pub struct RecordingSink {
    pub saves: Mutex<Vec<(String, ExportPayload)>>,
}

impl RecordingSink {
    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

impl SaveSink for RecordingSink {
    async fn save(&self, file_name: &str, payload: &ExportPayload) -> anyhow::Result<()> {
        self.saves
            .lock()
            .unwrap()
            .push((file_name.to_string(), payload.clone()));
        Ok(())
    }
}

/// Provider for the "no search has run yet" case.
pub struct NoSession;

impl SessionContextProvider for NoSession {
    fn current(&self) -> Option<SessionContext> {
        None
    }
}
