use smallvec::SmallVec;

use crate::render::Color;

/// Device-pixel dimensions of the drawable bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapSize {
    pub width: i64,
    pub height: i64,
}

impl BitmapSize {
    #[must_use]
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

/// Contract implemented by any drawing backend.
///
/// The renderer hands the surface fully resolved device-pixel geometry so
/// backends stay isolated from overlay domain logic. Pixel ratios describe
/// the logical-to-device scaling the renderer must apply before calling
/// `fill_rect`/`stroke_rect`.
pub trait BitmapSurface {
    fn bitmap_size(&self) -> BitmapSize;
    fn horizontal_pixel_ratio(&self) -> f64;
    fn vertical_pixel_ratio(&self) -> f64;
    fn fill_rect(&mut self, left: i64, top: i64, width: i64, height: i64, color: Color);
    fn stroke_rect(
        &mut self,
        left: i64,
        top: i64,
        width: i64,
        height: i64,
        line_width: f64,
        dash_pattern: &[f64],
        color: Color,
    );
}

/// One captured draw call, in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        left: i64,
        top: i64,
        width: i64,
        height: i64,
        color: Color,
    },
    StrokeRect {
        left: i64,
        top: i64,
        width: i64,
        height: i64,
        line_width: f64,
        dash_pattern: SmallVec<[f64; 2]>,
        color: Color,
    },
}

/// Command-capturing surface used by tests and headless overlay usage.
///
/// It records every emitted draw call so tests can assert on exact device
/// geometry before a real backend is introduced.
#[derive(Debug)]
pub struct RecordingSurface {
    size: BitmapSize,
    horizontal_pixel_ratio: f64,
    vertical_pixel_ratio: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(size: BitmapSize, horizontal_pixel_ratio: f64, vertical_pixel_ratio: f64) -> Self {
        Self {
            size,
            horizontal_pixel_ratio,
            vertical_pixel_ratio,
            commands: Vec::new(),
        }
    }

    /// Convenience constructor for a 1:1 logical-to-device surface.
    #[must_use]
    pub fn with_unit_ratio(width: i64, height: i64) -> Self {
        Self::new(BitmapSize::new(width, height), 1.0, 1.0)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillRect { .. }))
            .count()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::StrokeRect { .. }))
            .count()
    }
}

impl BitmapSurface for RecordingSurface {
    fn bitmap_size(&self) -> BitmapSize {
        self.size
    }

    fn horizontal_pixel_ratio(&self) -> f64 {
        self.horizontal_pixel_ratio
    }

    fn vertical_pixel_ratio(&self) -> f64 {
        self.vertical_pixel_ratio
    }

    fn fill_rect(&mut self, left: i64, top: i64, width: i64, height: i64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            left,
            top,
            width,
            height,
            color,
        });
    }

    fn stroke_rect(
        &mut self,
        left: i64,
        top: i64,
        width: i64,
        height: i64,
        line_width: f64,
        dash_pattern: &[f64],
        color: Color,
    ) {
        self.commands.push(DrawCommand::StrokeRect {
            left,
            top,
            width,
            height,
            line_width,
            dash_pattern: SmallVec::from_slice(dash_pattern),
            color,
        });
    }
}
