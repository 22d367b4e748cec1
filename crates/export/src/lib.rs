//! Visualization export pipeline.
//!
//! Exports the current state of an on-screen visualization widget as either
//! a rasterized JPEG capture or a JSON dump of the widget's internal model,
//! under a deterministic file name derived from the current search session
//! (`{source}-{query}-{suffix}.{extension}`).
//!
//! The surrounding application supplies the collaborators at the seams: a
//! [`SessionContextProvider`] for the query/source snapshot, a
//! [`VisualizationWidget`] handle for rendering and state, a
//! [`BackgroundResolver`] for the effective container background, and a
//! [`SaveSink`] that persists the resulting payload.
//!
//! # Example
//!
//! ```
//! use viz_export::{
//!     ContainerBackground, DirectorySink, ExportDispatcher, FixedContext, SessionContext,
//! };
//!
//! let dispatcher = ExportDispatcher::new(
//!     FixedContext(SessionContext::new("machine learning", "bing")),
//!     ContainerBackground::default(),
//!     DirectorySink::new("exports"),
//! );
//! # let _ = dispatcher;
//! ```

pub mod background;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod filename;
pub mod format;
pub mod sink;
pub mod strategy;
pub mod widget;

// Re-export commonly used types at the crate root
pub use background::{BackgroundResolver, ContainerBackground};
pub use context::{FixedContext, SessionContext, SessionContextProvider};
pub use dispatcher::ExportDispatcher;
pub use error::{ExportError, Result};
pub use filename::build_file_name;
pub use format::ExportFormat;
pub use sink::{DirectorySink, SaveSink};
pub use strategy::ExportPayload;
pub use widget::{ELEMENT_KEY, ElementNode, RenderOptions, VisualizationWidget};
