//! morph-chart: line-and-point chart core with animated data transitions.
//!
//! Samples are mapped to pixel space, point sequences of different lengths
//! are aligned by index duplication, and successive data sets are morphed
//! through a frame-driven linear interpolation. Drawing and frame scheduling
//! are supplied by the host through the `DrawingSurface` and
//! `FrameScheduler` traits; `trace` replays scripted sessions headlessly.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod trace;

pub use api::{CanvasChart, ChartConfig, FrameOutcome};
pub use error::{ChartError, ChartResult};
