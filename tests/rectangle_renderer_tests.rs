use chart_overlay::render::{
    Color, DrawCommand, LineStyle, RectangleItem, RectangleRenderer, RecordingSurface,
};

const FILL: Color = Color::rgba(0.2, 0.4, 0.6, 0.5);
const BORDER: Color = Color::rgb(0.2, 0.4, 0.6);

fn item(x1: f64, y1: f64, x2: f64, y2: f64, id: &str) -> RectangleItem {
    RectangleItem {
        x1,
        y1,
        x2,
        y2,
        fill_color: FILL,
        border_color: BORDER,
        border_width: 1.0,
        border_style: LineStyle::Solid,
        border_visible: true,
        visible: true,
        external_id: Some(id.to_owned()),
    }
}

#[test]
fn draw_scales_logical_coordinates_by_pixel_ratio_and_rounds() {
    let mut renderer = RectangleRenderer::new();
    renderer.set_data(vec![item(10.4, 5.0, 20.0, 15.0, "a")]);

    let mut surface = RecordingSurface::new(
        chart_overlay::render::BitmapSize::new(1000, 1000),
        2.0,
        2.0,
    );
    renderer.draw(&mut surface, false, None);

    assert_eq!(surface.fill_count(), 1);
    let &DrawCommand::FillRect {
        left,
        top,
        width,
        height,
        ..
    } = &surface.commands[0]
    else {
        panic!("expected a fill command first");
    };
    // 10.4 * 2.0 rounds to 21.
    assert_eq!((left, top), (21, 10));
    assert_eq!((width, height), (19, 20));
}

#[test]
fn draw_normalizes_swapped_corners_into_the_same_bbox() {
    let mut renderer = RectangleRenderer::new();
    renderer.set_data(vec![item(20.0, 15.0, 10.0, 5.0, "swapped")]);

    let mut surface = RecordingSurface::with_unit_ratio(1000, 1000);
    renderer.draw(&mut surface, false, None);

    let &DrawCommand::FillRect {
        left,
        top,
        width,
        height,
        ..
    } = &surface.commands[0]
    else {
        panic!("expected a fill command first");
    };
    assert_eq!((left, top, width, height), (10, 5, 10, 10));
}

#[test]
fn border_width_is_floored_at_fractional_pixel_ratios() {
    let mut renderer = RectangleRenderer::new();
    renderer.set_data(vec![item(10.0, 10.0, 20.0, 20.0, "thin")]);

    let mut surface = RecordingSurface::new(
        chart_overlay::render::BitmapSize::new(1000, 1000),
        1.5,
        1.5,
    );
    renderer.draw(&mut surface, false, None);

    let stroke = surface
        .commands
        .iter()
        .find_map(|command| match command {
            DrawCommand::StrokeRect { line_width, .. } => Some(*line_width),
            DrawCommand::FillRect { .. } => None,
        })
        .expect("border must be stroked");
    // floor(1.0 * 1.5), not round: thin borders must not overshoot.
    assert_eq!(stroke, 1.0);
}

#[test]
fn zero_border_width_emits_no_stroke() {
    let mut renderer = RectangleRenderer::new();
    let mut zero_border = item(10.0, 10.0, 20.0, 20.0, "no-border");
    zero_border.border_width = 0.0;
    renderer.set_data(vec![zero_border]);

    let mut surface = RecordingSurface::with_unit_ratio(1000, 1000);
    renderer.draw(&mut surface, false, None);

    assert_eq!(surface.fill_count(), 1);
    assert_eq!(surface.stroke_count(), 0);
}

#[test]
fn hidden_border_emits_no_stroke() {
    let mut renderer = RectangleRenderer::new();
    let mut hidden = item(10.0, 10.0, 20.0, 20.0, "hidden-border");
    hidden.border_visible = false;
    renderer.set_data(vec![hidden]);

    let mut surface = RecordingSurface::with_unit_ratio(1000, 1000);
    renderer.draw(&mut surface, false, None);

    assert_eq!(surface.stroke_count(), 0);
}

#[test]
fn transparent_fill_skips_the_fill_but_keeps_the_border() {
    let mut renderer = RectangleRenderer::new();
    let mut outline_only = item(10.0, 10.0, 20.0, 20.0, "outline");
    outline_only.fill_color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    renderer.set_data(vec![outline_only]);

    let mut surface = RecordingSurface::with_unit_ratio(1000, 1000);
    renderer.draw(&mut surface, false, None);

    assert_eq!(surface.fill_count(), 0);
    assert_eq!(surface.stroke_count(), 1);
}

#[test]
fn items_outside_the_bitmap_are_culled_before_any_surface_call() {
    let mut renderer = RectangleRenderer::new();
    renderer.set_data(vec![
        item(-50.0, 10.0, -20.0, 20.0, "left-of-bitmap"),
        item(10.0, 2000.0, 20.0, 2100.0, "below-bitmap"),
    ]);

    let mut surface = RecordingSurface::with_unit_ratio(1000, 1000);
    renderer.draw(&mut surface, false, None);

    assert!(surface.commands.is_empty());
}

#[test]
fn invisible_items_are_skipped_by_draw_and_hit_test() {
    let mut renderer = RectangleRenderer::new();
    let mut invisible = item(10.0, 10.0, 20.0, 20.0, "ghost");
    invisible.visible = false;
    renderer.set_data(vec![invisible]);

    let mut surface = RecordingSurface::with_unit_ratio(1000, 1000);
    renderer.draw(&mut surface, false, None);

    assert!(surface.commands.is_empty());
    assert!(renderer.hit_test(15.0, 15.0).is_none());
}

#[test]
fn dashed_and_dotted_borders_carry_their_dash_patterns() {
    let mut renderer = RectangleRenderer::new();
    let mut dashed = item(10.0, 10.0, 20.0, 20.0, "dashed");
    dashed.border_style = LineStyle::Dashed;
    let mut dotted = item(30.0, 10.0, 40.0, 20.0, "dotted");
    dotted.border_style = LineStyle::Dotted;
    renderer.set_data(vec![dashed, dotted]);

    let mut surface = RecordingSurface::with_unit_ratio(1000, 1000);
    renderer.draw(&mut surface, false, None);

    let patterns: Vec<Vec<f64>> = surface
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::StrokeRect { dash_pattern, .. } => Some(dash_pattern.to_vec()),
            DrawCommand::FillRect { .. } => None,
        })
        .collect();
    assert_eq!(patterns, vec![vec![4.0, 4.0], vec![1.0, 2.0]]);
}

#[test]
fn hit_test_returns_first_inserted_item_for_overlapping_geometry() {
    let mut renderer = RectangleRenderer::new();
    renderer.set_data(vec![
        item(10.0, 10.0, 30.0, 30.0, "first"),
        item(15.0, 15.0, 35.0, 35.0, "second"),
    ]);

    let hit = renderer.hit_test(20.0, 20.0).expect("point inside both");
    assert_eq!(hit.external_id, Some("first"));
}

#[test]
fn hit_test_uses_normalized_bounds_and_inclusive_edges() {
    let mut renderer = RectangleRenderer::new();
    renderer.set_data(vec![item(30.0, 30.0, 10.0, 10.0, "swapped")]);

    assert!(renderer.hit_test(10.0, 10.0).is_some());
    assert!(renderer.hit_test(30.0, 30.0).is_some());
    assert!(renderer.hit_test(9.9, 10.0).is_none());
    assert!(renderer.hit_test(20.0, 30.1).is_none());
}

#[test]
fn hit_test_on_empty_batch_is_a_clean_miss() {
    let renderer = RectangleRenderer::new();
    assert!(renderer.hit_test(0.0, 0.0).is_none());
}

#[test]
fn set_data_replaces_the_batch_wholesale() {
    let mut renderer = RectangleRenderer::new();
    renderer.set_data(vec![item(10.0, 10.0, 20.0, 20.0, "old")]);
    renderer.set_data(vec![item(50.0, 50.0, 60.0, 60.0, "new")]);

    assert!(renderer.hit_test(15.0, 15.0).is_none());
    let hit = renderer.hit_test(55.0, 55.0).expect("new item present");
    assert_eq!(hit.external_id, Some("new"));
}
