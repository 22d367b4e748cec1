//! Export dispatch.
//!
//! Responsibilities:
//! - Resolve the requested format to a strategy.
//! - Run the strategy, build the file name, hand the payload to the sink.
//! - Drop per-attempt failures after logging them once.
//!
//! Does NOT handle:
//! - Input-device policy (callers pre-resolve modifiers to an
//!   `ExportFormat`).
//! - De-duplication of overlapping exports (each call runs independently to
//!   completion or failure).

use crate::background::BackgroundResolver;
use crate::context::SessionContextProvider;
use crate::error::{ExportError, Result};
use crate::filename;
use crate::format::ExportFormat;
use crate::sink::SaveSink;
use crate::strategy::{self, ExportPayload};
use crate::widget::VisualizationWidget;

/// Dispatches one export request to the matching strategy and save sink.
///
/// Holds the three injected collaborators: the session context provider
/// (file naming), the background resolver (bitmap captures), and the save
/// sink (persistence).
#[derive(Debug, Clone)]
pub struct ExportDispatcher<C, B, S> {
    context: C,
    background: B,
    sink: S,
}

impl<C, B, S> ExportDispatcher<C, B, S> {
    pub fn new(context: C, background: B, sink: S) -> Self {
        Self {
            context,
            background,
            sink,
        }
    }
}

impl<C, B, S> ExportDispatcher<C, B, S>
where
    C: SessionContextProvider,
    S: SaveSink,
{
    /// Export the widget's current state; completion is unobserved by the
    /// caller.
    ///
    /// A `None` widget is a silent no-op: the trigger control may be
    /// activated before the visualization has mounted. Failures never reach
    /// the caller either; the attempt is logged once and no file is
    /// produced.
    pub async fn save<W>(&self, widget: Option<&W>, suffix: &str, format: ExportFormat)
    where
        W: VisualizationWidget,
        B: BackgroundResolver<W>,
    {
        let Some(widget) = widget else {
            return;
        };

        match self.export(widget, suffix, format).await {
            Ok(file_name) => {
                tracing::debug!("exported {:?} to {}", format, file_name);
            }
            Err(e) => {
                tracing::warn!("{:?} export ({}) failed, no file written: {}", format, suffix, e);
            }
        }
    }

    async fn export<W>(&self, widget: &W, suffix: &str, format: ExportFormat) -> Result<String>
    where
        W: VisualizationWidget,
        B: BackgroundResolver<W>,
    {
        let payload = self.run_strategy(widget, format).await?;
        let file_name = filename::build_file_name(&self.context, suffix, payload.extension)?;
        self.sink
            .save(&file_name, &payload)
            .await
            .map_err(ExportError::Save)?;
        Ok(file_name)
    }

    async fn run_strategy<W>(&self, widget: &W, format: ExportFormat) -> Result<ExportPayload>
    where
        W: VisualizationWidget,
        B: BackgroundResolver<W>,
    {
        match format {
            ExportFormat::Json => strategy::dump_state(widget),
            ExportFormat::Jpeg => strategy::capture_bitmap(widget, &self.background).await,
        }
    }
}
