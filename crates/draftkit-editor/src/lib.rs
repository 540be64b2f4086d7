//! # DraftKit Editor
//!
//! Interactive machinery for DraftKit documents: the bounds registry
//! with per-kind hit-test handlers, layer-level hit queries, grid
//! snapping and the drawing-tool state machine. The document model
//! lives in `draftkit-core`; this crate mutates it only through the
//! container's layer API.
//!
//! ## Core Components
//!
//! - [`bounds::BoundsRegistry`]: control-point lookup, containment and
//!   marquee overlap per shape kind
//! - [`hit_test`]: topmost-wins queries over a layer
//! - [`tools::Editor`]: click-sequence state machine staging shapes on
//!   the working layer
//! - [`snap::snap`]: grid snapping applied to every pointer event

pub mod bounds;
pub mod options;
pub mod snap;
pub mod tools;

pub use bounds::{BoundsRegistry, ShapeBounds};
pub use options::EditorOptions;
pub use snap::snap;
pub use tools::{Editor, Tool, ToolState};
