//! chart-overlay-rs: overlay-annotation rendering for financial charts.
//!
//! This crate turns domain-indexed rectangle annotations (time range by price
//! range, e.g. fair value gaps) and internal time-series rows into
//! pixel-accurate, device-pixel-ratio-correct drawable primitives with
//! hit-testing. Scale math, render scheduling, and canvas setup stay with the
//! host chart and are consumed through injected collaborator traits.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{HostContext, RectangleOverlay, SeriesDataItem, SeriesType, project_plot_row};
pub use core::{PlotRow, RectangleAnnotation, RectangleOverlayOptions};
pub use error::{OverlayError, OverlayResult};
