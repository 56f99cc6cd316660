mod primitives;
mod rectangle_renderer;
mod surface;

pub use primitives::{Color, LineStyle, RectangleItem};
pub use rectangle_renderer::{RectangleHit, RectangleRenderer};
pub use surface::{BitmapSize, BitmapSurface, DrawCommand, RecordingSurface};
