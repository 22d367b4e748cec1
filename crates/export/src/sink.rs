//! Save sinks for export payloads.
//!
//! Responsibilities:
//! - Define the persistence seam fed by the dispatcher.
//! - Provide a directory-backed sink for native targets.
//!
//! Does NOT handle:
//! - File name derivation (see `filename`).
//! - Collision handling for repeated identical exports.

use std::path::PathBuf;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::strategy::ExportPayload;

/// Persists one export payload under a file name.
///
/// The dispatcher calls this at most once per export attempt and does not
/// surface the result to the export's caller.
#[allow(async_fn_in_trait)]
pub trait SaveSink {
    async fn save(&self, file_name: &str, payload: &ExportPayload) -> anyhow::Result<()>;
}

impl<S: SaveSink> SaveSink for &S {
    async fn save(&self, file_name: &str, payload: &ExportPayload) -> anyhow::Result<()> {
        (**self).save(file_name, payload).await
    }
}

/// Sink that writes payloads into a fixed download directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SaveSink for DirectorySink {
    async fn save(&self, file_name: &str, payload: &ExportPayload) -> anyhow::Result<()> {
        let path = self.dir.join(file_name);

        let mut file = File::create(&path)
            .await
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;

        file.write_all(&payload.bytes)
            .await
            .with_context(|| format!("Failed to write export to: {}", path.display()))?;

        file.flush()
            .await
            .with_context(|| format!("Failed to flush export to: {}", path.display()))?;

        Ok(())
    }
}
