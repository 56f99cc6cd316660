use serde_json::Value;
use tracing::trace;

use crate::render::{BitmapSurface, RectangleItem};

/// Result of a successful point-containment query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleHit<'a> {
    pub item: &'a RectangleItem,
    pub external_id: Option<&'a str>,
}

/// Rasterizes rectangle overlay batches onto a device-pixel bitmap.
///
/// `draw` and `hit_test` are total over the current batch: they never panic
/// and never return an error, matching the drop-silently policy of the
/// coordinate mapping stage.
#[derive(Debug, Default)]
pub struct RectangleRenderer {
    items: Vec<RectangleItem>,
}

impl RectangleRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full working batch; no incremental diffing.
    pub fn set_data(&mut self, items: Vec<RectangleItem>) {
        trace!(count = items.len(), "set rectangle renderer batch");
        self.items = items;
    }

    #[must_use]
    pub fn items(&self) -> &[RectangleItem] {
        &self.items
    }

    /// Draws the current batch onto `surface`.
    ///
    /// Logical coordinates are scaled by the surface pixel ratios and rounded
    /// to integer device pixels. Items whose bounding box misses the bitmap
    /// are culled before any surface call. Border line width floors
    /// `border_width * horizontal_pixel_ratio` so thin borders never
    /// overshoot at fractional pixel ratios.
    pub fn draw(
        &self,
        surface: &mut dyn BitmapSurface,
        _is_hovered: bool,
        _hit_test_hint: Option<&Value>,
    ) {
        let bitmap = surface.bitmap_size();
        let horizontal_ratio = surface.horizontal_pixel_ratio();
        let vertical_ratio = surface.vertical_pixel_ratio();

        for item in &self.items {
            if !item.visible {
                continue;
            }

            let x1 = (item.x1 * horizontal_ratio).round() as i64;
            let y1 = (item.y1 * vertical_ratio).round() as i64;
            let x2 = (item.x2 * horizontal_ratio).round() as i64;
            let y2 = (item.y2 * vertical_ratio).round() as i64;

            let left = x1.min(x2);
            let top = y1.min(y2);
            let width = (x2 - x1).abs();
            let height = (y2 - y1).abs();

            if left + width < 0 || left > bitmap.width || top + height < 0 || top > bitmap.height {
                continue;
            }

            if item.fill_color.alpha > 0.0 {
                surface.fill_rect(left, top, width, height, item.fill_color);
            }

            if item.border_visible && item.border_width > 0.0 {
                let line_width = (item.border_width * horizontal_ratio).floor();
                surface.stroke_rect(
                    left,
                    top,
                    width,
                    height,
                    line_width,
                    &item.border_style.dash_pattern(),
                    item.border_color,
                );
            }
        }
    }

    /// Returns the first batch item whose normalized bounding box contains
    /// `(x, y)` in logical pixels.
    ///
    /// Scan order is the stored batch order, so overlapping items resolve to
    /// the earliest inserted one rather than the topmost drawn one.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<RectangleHit<'_>> {
        for item in &self.items {
            if !item.visible {
                continue;
            }

            let left = item.x1.min(item.x2);
            let right = item.x1.max(item.x2);
            let top = item.y1.min(item.y2);
            let bottom = item.y1.max(item.y2);

            if x >= left && x <= right && y >= top && y <= bottom {
                return Some(RectangleHit {
                    item,
                    external_id: item.external_id.as_deref(),
                });
            }
        }

        None
    }
}
