use chart_overlay::api::{SeriesDataItem, SeriesType, project_plot_row};
use chart_overlay::core::{CustomValues, PlotRow};
use chart_overlay::render::Color;
use proptest::prelude::*;
use serde_json::json;

fn color_strategy() -> impl Strategy<Value = Color> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64)
        .prop_map(|(red, green, blue, alpha)| Color::rgba(red, green, blue, alpha))
}

fn custom_values_strategy() -> impl Strategy<Value = CustomValues> {
    proptest::collection::btree_map("[a-z]{1,8}", -1_000.0..1_000.0f64, 0..4).prop_map(|map| {
        map.into_iter()
            .map(|(key, value)| (key, json!(value)))
            .collect()
    })
}

proptest! {
    #[test]
    fn single_value_variants_expose_optional_fields_iff_source_defined_them(
        time in -1.0e6..1.0e6f64,
        value in -1.0e6..1.0e6f64,
        color in proptest::option::of(color_strategy()),
        line_color in proptest::option::of(color_strategy()),
        top_color in proptest::option::of(color_strategy()),
        bottom_color in proptest::option::of(color_strategy()),
        custom_values in proptest::option::of(custom_values_strategy()),
    ) {
        let mut row = PlotRow::from_close(time, value);
        row.color = color;
        row.line_color = line_color;
        row.top_color = top_color;
        row.bottom_color = bottom_color;
        row.custom_values = custom_values.clone();

        let SeriesDataItem::Line(line) = project_plot_row(SeriesType::Line, &row) else {
            panic!("expected line data");
        };
        prop_assert_eq!(line.color.is_some(), color.is_some());
        prop_assert_eq!(line.custom_values.is_some(), custom_values.is_some());
        prop_assert_eq!(line.value, value);

        let SeriesDataItem::Area(area) = project_plot_row(SeriesType::Area, &row) else {
            panic!("expected area data");
        };
        prop_assert_eq!(area.line_color.is_some(), line_color.is_some());
        prop_assert_eq!(area.top_color.is_some(), top_color.is_some());
        prop_assert_eq!(area.bottom_color.is_some(), bottom_color.is_some());
        prop_assert_eq!(area.custom_values.is_some(), custom_values.is_some());

        let SeriesDataItem::Histogram(histogram) = project_plot_row(SeriesType::Histogram, &row) else {
            panic!("expected histogram data");
        };
        prop_assert_eq!(histogram.color.is_some(), color.is_some());
    }

    #[test]
    fn baseline_variant_preserves_each_optional_field_independently(
        value in -1.0e6..1.0e6f64,
        top_line_color in proptest::option::of(color_strategy()),
        bottom_line_color in proptest::option::of(color_strategy()),
        top_fill_color1 in proptest::option::of(color_strategy()),
        top_fill_color2 in proptest::option::of(color_strategy()),
        bottom_fill_color1 in proptest::option::of(color_strategy()),
        bottom_fill_color2 in proptest::option::of(color_strategy()),
    ) {
        let mut row = PlotRow::from_close(0.0, value);
        row.top_line_color = top_line_color;
        row.bottom_line_color = bottom_line_color;
        row.top_fill_color1 = top_fill_color1;
        row.top_fill_color2 = top_fill_color2;
        row.bottom_fill_color1 = bottom_fill_color1;
        row.bottom_fill_color2 = bottom_fill_color2;

        let SeriesDataItem::Baseline(baseline) = project_plot_row(SeriesType::Baseline, &row) else {
            panic!("expected baseline data");
        };
        prop_assert_eq!(baseline.top_line_color, top_line_color);
        prop_assert_eq!(baseline.bottom_line_color, bottom_line_color);
        prop_assert_eq!(baseline.top_fill_color1, top_fill_color1);
        prop_assert_eq!(baseline.top_fill_color2, top_fill_color2);
        prop_assert_eq!(baseline.bottom_fill_color1, bottom_fill_color1);
        prop_assert_eq!(baseline.bottom_fill_color2, bottom_fill_color2);
    }

    #[test]
    fn ohlc_variants_map_slots_and_sparse_style_fields(
        open in -1.0e6..1.0e6f64,
        high in -1.0e6..1.0e6f64,
        low in -1.0e6..1.0e6f64,
        close in -1.0e6..1.0e6f64,
        color in proptest::option::of(color_strategy()),
        border_color in proptest::option::of(color_strategy()),
        wick_color in proptest::option::of(color_strategy()),
    ) {
        let mut row = PlotRow::from_ohlc(0.0, open, high, low, close);
        row.color = color;
        row.border_color = border_color;
        row.wick_color = wick_color;

        let SeriesDataItem::Bar(bar) = project_plot_row(SeriesType::Bar, &row) else {
            panic!("expected bar data");
        };
        prop_assert_eq!((bar.open, bar.high, bar.low, bar.close), (open, high, low, close));
        prop_assert_eq!(bar.color, color);

        let SeriesDataItem::Candlestick(candle) = project_plot_row(SeriesType::Candlestick, &row) else {
            panic!("expected candlestick data");
        };
        prop_assert_eq!(candle.color, color);
        prop_assert_eq!(candle.border_color, border_color);
        prop_assert_eq!(candle.wick_color, wick_color);
    }

    #[test]
    fn rectangle_variant_defaults_and_overrides_span_fields_piecewise(
        time in -1.0e6..1.0e6f64,
        open in -1.0e6..1.0e6f64,
        close in -1.0e6..1.0e6f64,
        time1 in proptest::option::of(-1.0e6..1.0e6f64),
        time2 in proptest::option::of(-1.0e6..1.0e6f64),
        price1 in proptest::option::of(-1.0e6..1.0e6f64),
        price2 in proptest::option::of(-1.0e6..1.0e6f64),
        fill_color in proptest::option::of(color_strategy()),
    ) {
        let mut row = PlotRow::from_ohlc(time, open, open.max(close), open.min(close), close);
        row.time1 = time1.map(Into::into);
        row.time2 = time2.map(Into::into);
        row.price1 = price1;
        row.price2 = price2;
        row.fill_color = fill_color;

        let SeriesDataItem::Rectangle(data) = project_plot_row(SeriesType::Rectangle, &row) else {
            panic!("expected rectangle data");
        };
        prop_assert_eq!(data.time1, time1.map(Into::into).unwrap_or(row.original_time));
        prop_assert_eq!(data.time2, time2.map(Into::into).unwrap_or(row.original_time));
        prop_assert_eq!(data.price1, price1.unwrap_or(open));
        prop_assert_eq!(data.price2, price2.unwrap_or(close));
        prop_assert_eq!(data.fill_color, fill_color);
    }

    #[test]
    fn custom_variant_never_leaks_a_payload_time_key(
        time in -1.0e6..1.0e6f64,
        payload in custom_values_strategy(),
        shadow_time in proptest::option::of(-1.0e6..1.0e6f64),
    ) {
        let mut payload = payload;
        if let Some(shadow) = shadow_time {
            payload.insert("time".to_owned(), json!(shadow));
        }
        let expected_len = payload.len() - usize::from(payload.contains_key("time"));
        let row = PlotRow::from_close(time, 0.0).with_data(payload);

        let SeriesDataItem::Custom(data) = project_plot_row(SeriesType::Custom, &row) else {
            panic!("expected custom data");
        };
        prop_assert!(!data.fields.contains_key("time"));
        prop_assert_eq!(data.fields.len(), expected_len);
        prop_assert_eq!(data.time, row.original_time);
    }
}
