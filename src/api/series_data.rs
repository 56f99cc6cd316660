use serde::{Deserialize, Serialize};

use crate::core::plot_row::{CustomValues, PlotRow, PlotValueIndex};
use crate::core::types::DomainTime;
use crate::render::Color;

/// Closed set of series kinds the projector dispatches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesType {
    Area,
    Line,
    Baseline,
    Histogram,
    Bar,
    Candlestick,
    Rectangle,
    Custom,
}

/// Shared base for all non-OHLC, non-rectangle variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleValueData {
    pub time: DomainTime,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    pub time: DomainTime,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaData {
    pub time: DomainTime,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineData {
    pub time: DomainTime,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_fill_color1: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_fill_color2: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color1: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_fill_color2: Option<Color>,
}

/// Shared base for OHLC variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcData {
    pub time: DomainTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub time: DomainTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickData {
    pub time: DomainTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wick_color: Option<Color>,
}

/// Rectangle projection output.
///
/// Span fields always carry a value: absent row overrides default to a
/// zero-width time span at `original_time` and an open-to-close price span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleData {
    pub time: DomainTime,
    pub time1: DomainTime,
    pub price1: f64,
    pub time2: DomainTime,
    pub price2: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,
}

/// Custom-series projection output: the row's free-form payload shallow-merged
/// with `time`. A `time` key inside the payload never survives the merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomData {
    pub time: DomainTime,
    #[serde(flatten)]
    pub fields: CustomValues,
}

/// Public, per-series-type projection of one internal plot row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesDataItem {
    Area(AreaData),
    Line(LineData),
    Baseline(BaselineData),
    Histogram(LineData),
    Bar(BarData),
    Candlestick(CandlestickData),
    Rectangle(RectangleData),
    Custom(CustomData),
}

impl SeriesDataItem {
    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        match self {
            Self::Area(_) => SeriesType::Area,
            Self::Line(_) => SeriesType::Line,
            Self::Baseline(_) => SeriesType::Baseline,
            Self::Histogram(_) => SeriesType::Histogram,
            Self::Bar(_) => SeriesType::Bar,
            Self::Candlestick(_) => SeriesType::Candlestick,
            Self::Rectangle(_) => SeriesType::Rectangle,
            Self::Custom(_) => SeriesType::Custom,
        }
    }

    #[must_use]
    pub fn time(&self) -> DomainTime {
        match self {
            Self::Area(data) => data.time,
            Self::Line(data) | Self::Histogram(data) => data.time,
            Self::Baseline(data) => data.time,
            Self::Bar(data) => data.time,
            Self::Candlestick(data) => data.time,
            Self::Rectangle(data) => data.time,
            Self::Custom(data) => data.time,
        }
    }
}

/// Projects an internal plot row into its public data item.
///
/// Pure and deterministic. The match is exhaustive over `SeriesType`, so an
/// unrecognized tag cannot reach runtime. Optional output fields are present
/// exactly when the source row defined them.
#[must_use]
pub fn project_plot_row(series_type: SeriesType, row: &PlotRow) -> SeriesDataItem {
    match series_type {
        SeriesType::Area => SeriesDataItem::Area(area_data(row)),
        SeriesType::Line => SeriesDataItem::Line(line_data(row)),
        SeriesType::Baseline => SeriesDataItem::Baseline(baseline_data(row)),
        SeriesType::Histogram => SeriesDataItem::Histogram(line_data(row)),
        SeriesType::Bar => SeriesDataItem::Bar(bar_data(row)),
        SeriesType::Candlestick => SeriesDataItem::Candlestick(candlestick_data(row)),
        SeriesType::Rectangle => SeriesDataItem::Rectangle(rectangle_data(row)),
        SeriesType::Custom => SeriesDataItem::Custom(custom_data(row)),
    }
}

fn single_value_data(row: &PlotRow) -> SingleValueData {
    SingleValueData {
        time: row.original_time,
        value: row.value_at(PlotValueIndex::Close),
        custom_values: row.custom_values.clone(),
    }
}

fn line_data(row: &PlotRow) -> LineData {
    let base = single_value_data(row);
    LineData {
        time: base.time,
        value: base.value,
        custom_values: base.custom_values,
        color: row.color,
    }
}

fn area_data(row: &PlotRow) -> AreaData {
    let base = single_value_data(row);
    AreaData {
        time: base.time,
        value: base.value,
        custom_values: base.custom_values,
        line_color: row.line_color,
        top_color: row.top_color,
        bottom_color: row.bottom_color,
    }
}

fn baseline_data(row: &PlotRow) -> BaselineData {
    let base = single_value_data(row);
    BaselineData {
        time: base.time,
        value: base.value,
        custom_values: base.custom_values,
        top_line_color: row.top_line_color,
        bottom_line_color: row.bottom_line_color,
        top_fill_color1: row.top_fill_color1,
        top_fill_color2: row.top_fill_color2,
        bottom_fill_color1: row.bottom_fill_color1,
        bottom_fill_color2: row.bottom_fill_color2,
    }
}

fn ohlc_data(row: &PlotRow) -> OhlcData {
    OhlcData {
        time: row.original_time,
        open: row.value_at(PlotValueIndex::Open),
        high: row.value_at(PlotValueIndex::High),
        low: row.value_at(PlotValueIndex::Low),
        close: row.value_at(PlotValueIndex::Close),
        custom_values: row.custom_values.clone(),
    }
}

fn bar_data(row: &PlotRow) -> BarData {
    let base = ohlc_data(row);
    BarData {
        time: base.time,
        open: base.open,
        high: base.high,
        low: base.low,
        close: base.close,
        custom_values: base.custom_values,
        color: row.color,
    }
}

fn candlestick_data(row: &PlotRow) -> CandlestickData {
    let base = ohlc_data(row);
    CandlestickData {
        time: base.time,
        open: base.open,
        high: base.high,
        low: base.low,
        close: base.close,
        custom_values: base.custom_values,
        color: row.color,
        border_color: row.border_color,
        wick_color: row.wick_color,
    }
}

fn rectangle_data(row: &PlotRow) -> RectangleData {
    RectangleData {
        time: row.original_time,
        time1: row.time1.unwrap_or(row.original_time),
        price1: row.price1.unwrap_or(row.value_at(PlotValueIndex::Open)),
        time2: row.time2.unwrap_or(row.original_time),
        price2: row.price2.unwrap_or(row.value_at(PlotValueIndex::Close)),
        fill_color: row.fill_color,
        border_color: row.border_color,
        custom_values: row.custom_values.clone(),
    }
}

fn custom_data(row: &PlotRow) -> CustomData {
    let mut fields = row.data.clone().unwrap_or_default();
    fields.shift_remove("time");
    CustomData {
        time: row.original_time,
        fields,
    }
}
