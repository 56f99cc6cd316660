use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::DomainTime;
use crate::render::Color;

/// Free-form per-row payload, insertion-ordered for stable serialization.
pub type CustomValues = IndexMap<String, Value>;

/// Slot positions inside `PlotRow::value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotValueIndex {
    Open = 0,
    High = 1,
    Low = 2,
    Close = 3,
}

/// Internal time-indexed data record feeding series projection.
///
/// The row is sparse: every per-variant field is `None` unless the data
/// source supplied it, and projection preserves exactly that presence.
/// Owned by the series-data layer; read-only to the projector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotRow {
    pub value: [f64; 4],
    pub original_time: DomainTime,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wick_color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_color: Option<Color>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_values: Option<CustomValues>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time1: Option<DomainTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time2: Option<DomainTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CustomValues>,
}

impl PlotRow {
    #[must_use]
    pub fn new(original_time: impl Into<DomainTime>, value: [f64; 4]) -> Self {
        Self {
            value,
            original_time: original_time.into(),
            ..Self::default()
        }
    }

    /// Builds a single-value row with the value mirrored into all four slots.
    #[must_use]
    pub fn from_close(original_time: impl Into<DomainTime>, close: f64) -> Self {
        Self::new(original_time, [close; 4])
    }

    #[must_use]
    pub fn from_ohlc(
        original_time: impl Into<DomainTime>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Self {
        Self::new(original_time, [open, high, low, close])
    }

    #[must_use]
    pub fn value_at(&self, index: PlotValueIndex) -> f64 {
        self.value[index as usize]
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_wick_color(mut self, color: Color) -> Self {
        self.wick_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_top_color(mut self, color: Color) -> Self {
        self.top_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_bottom_color(mut self, color: Color) -> Self {
        self.bottom_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_top_line_color(mut self, color: Color) -> Self {
        self.top_line_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_bottom_line_color(mut self, color: Color) -> Self {
        self.bottom_line_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_top_fill_colors(mut self, first: Color, second: Color) -> Self {
        self.top_fill_color1 = Some(first);
        self.top_fill_color2 = Some(second);
        self
    }

    #[must_use]
    pub fn with_bottom_fill_colors(mut self, first: Color, second: Color) -> Self {
        self.bottom_fill_color1 = Some(first);
        self.bottom_fill_color2 = Some(second);
        self
    }

    #[must_use]
    pub fn with_custom_values(mut self, custom_values: CustomValues) -> Self {
        self.custom_values = Some(custom_values);
        self
    }

    #[must_use]
    pub fn with_time_span(
        mut self,
        time1: impl Into<DomainTime>,
        time2: impl Into<DomainTime>,
    ) -> Self {
        self.time1 = Some(time1.into());
        self.time2 = Some(time2.into());
        self
    }

    #[must_use]
    pub fn with_price_span(mut self, price1: f64, price2: f64) -> Self {
        self.price1 = Some(price1);
        self.price2 = Some(price2);
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: CustomValues) -> Self {
        self.data = Some(data);
        self
    }
}
