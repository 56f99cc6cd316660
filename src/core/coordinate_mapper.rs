use tracing::trace;

use crate::core::{DomainTime, RectangleAnnotation, RectangleOverlayOptions, VisibleRange};
use crate::render::RectangleItem;

/// Horizontal scale collaborator injected by the host chart.
///
/// `time_to_coordinate` answers in logical pixels, `None` when the value is
/// outside the visible range or the scale is not ready.
pub trait TimeScaleApi {
    fn time_to_coordinate(&self, time: DomainTime) -> Option<f64>;
    fn visible_range(&self) -> Option<VisibleRange>;
    fn width(&self) -> f64;
}

/// Vertical (price) scale collaborator injected by the host chart.
pub trait SeriesApi {
    fn price_to_coordinate(&self, price: f64) -> Option<f64>;
}

/// Converts one annotation's domain coordinates into a pixel-space item.
///
/// Partially visible annotations are clamped to the viewport edges when the
/// time domain is numerically comparable:
/// - unresolved start with resolved end and `start_time < visible_range.from`
///   clamps the left edge to 0
/// - unresolved end with resolved start and `end_time > visible_range.to`
///   clamps the right edge to the viewport width
///
/// Structured time domains skip clamping and must resolve both endpoints
/// natively. Any coordinate still unresolved after clamping drops the
/// annotation for this pass; this is never an error. Output coordinates are
/// not normalized into min/max order.
#[must_use]
pub fn map_annotation(
    annotation: &RectangleAnnotation,
    time_scale: &dyn TimeScaleApi,
    series: &dyn SeriesApi,
    options: &RectangleOverlayOptions,
) -> Option<RectangleItem> {
    let mut x1 = time_scale.time_to_coordinate(annotation.start_time);
    let mut x2 = time_scale.time_to_coordinate(annotation.end_time);

    if let Some(range) = time_scale.visible_range() {
        if x1.is_none() && x2.is_some() && starts_left_of(annotation.start_time, range) {
            x1 = Some(0.0);
        }

        if x2.is_none() && x1.is_some() && ends_right_of(annotation.end_time, range) {
            x2 = Some(time_scale.width());
        }
    }

    let y1 = series.price_to_coordinate(annotation.upper_price);
    let y2 = series.price_to_coordinate(annotation.lower_price);

    let (Some(x1), Some(x2), Some(y1), Some(y2)) = (x1, x2, y1, y2) else {
        trace!(id = %annotation.id, "dropping annotation with unresolved coordinates");
        return None;
    };

    Some(RectangleItem {
        x1,
        y1,
        x2,
        y2,
        fill_color: annotation.fill_color.unwrap_or(options.fill_color),
        border_color: annotation.border_color.unwrap_or(options.border_color),
        border_width: options.border_width,
        border_style: options.border_style,
        border_visible: options.border_visible,
        visible: true,
        external_id: Some(annotation.id.clone()),
    })
}

fn starts_left_of(time: DomainTime, range: VisibleRange) -> bool {
    match (time.as_finite_numeric(), range.from.as_finite_numeric()) {
        (Some(start), Some(from)) => start < from,
        _ => false,
    }
}

fn ends_right_of(time: DomainTime, range: VisibleRange) -> bool {
    match (time.as_finite_numeric(), range.to.as_finite_numeric()) {
        (Some(end), Some(to)) => end > to,
        _ => false,
    }
}

/// Maps an annotation batch, preserving list order for hit-test tie-breaking.
///
/// Runs fresh on every render pass; there is no caching across frames, so the
/// output always tracks the current pan/zoom state.
#[must_use]
pub fn map_annotations(
    annotations: &[RectangleAnnotation],
    time_scale: &dyn TimeScaleApi,
    series: &dyn SeriesApi,
    options: &RectangleOverlayOptions,
) -> Vec<RectangleItem> {
    annotations
        .iter()
        .filter_map(|annotation| map_annotation(annotation, time_scale, series, options))
        .collect()
}
