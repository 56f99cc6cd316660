pub mod annotation;
pub mod coordinate_mapper;
pub mod plot_row;
pub mod primitives;
pub mod types;

pub use annotation::{RectangleAnnotation, RectangleOverlayOptions, RectangleOverlayOptionsUpdate};
pub use coordinate_mapper::{SeriesApi, TimeScaleApi, map_annotation, map_annotations};
pub use plot_row::{CustomValues, PlotRow, PlotValueIndex};
pub use types::{DomainTime, VisibleRange};
