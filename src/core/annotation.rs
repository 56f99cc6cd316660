use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::DomainTime;
use crate::core::primitives::decimal_to_f64;
use crate::error::OverlayResult;
use crate::render::{Color, LineStyle};

/// Caller-supplied rectangle overlay keyed by a domain time/price span.
///
/// `id` is the caller's own correlation key for removal and hit-test results.
/// Uniqueness is not enforced here: `remove_rectangle` removes every matching
/// entry, so duplicate ids degrade to all-matching-removed semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleAnnotation {
    pub id: String,
    pub start_time: DomainTime,
    pub end_time: DomainTime,
    pub upper_price: f64,
    pub lower_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
}

impl RectangleAnnotation {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        start_time: impl Into<DomainTime>,
        end_time: impl Into<DomainTime>,
        upper_price: f64,
        lower_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            upper_price,
            lower_price,
            fill_color: None,
            border_color: None,
        }
    }

    /// Converts strongly-typed decimal prices into an annotation.
    pub fn from_decimal_prices(
        id: impl Into<String>,
        start_time: impl Into<DomainTime>,
        end_time: impl Into<DomainTime>,
        upper_price: Decimal,
        lower_price: Decimal,
    ) -> OverlayResult<Self> {
        Ok(Self::new(
            id,
            start_time,
            end_time,
            decimal_to_f64(upper_price, "upper_price")?,
            decimal_to_f64(lower_price, "lower_price")?,
        ))
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}

/// Shared style defaults applied to annotations without per-item overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleOverlayOptions {
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub border_style: LineStyle,
    pub border_visible: bool,
}

impl Default for RectangleOverlayOptions {
    fn default() -> Self {
        Self {
            fill_color: Color::rgba(38.0 / 255.0, 166.0 / 255.0, 154.0 / 255.0, 0.2),
            border_color: Color::rgba(38.0 / 255.0, 166.0 / 255.0, 154.0 / 255.0, 1.0),
            border_width: 1.0,
            border_style: LineStyle::Solid,
            border_visible: true,
        }
    }
}

impl RectangleOverlayOptions {
    /// Copy-with-override merge: fields absent from `update` keep their
    /// current value. The options value is replaced wholesale, never mutated
    /// in place.
    #[must_use]
    pub fn merged(self, update: &RectangleOverlayOptionsUpdate) -> Self {
        Self {
            fill_color: update.fill_color.unwrap_or(self.fill_color),
            border_color: update.border_color.unwrap_or(self.border_color),
            border_width: update.border_width.unwrap_or(self.border_width),
            border_style: update.border_style.unwrap_or(self.border_style),
            border_visible: update.border_visible.unwrap_or(self.border_visible),
        }
    }
}

/// Partial options payload; unknown keys in deserialized input are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleOverlayOptionsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_visible: Option<bool>,
}

impl RectangleOverlayOptionsUpdate {
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_border_style(mut self, style: LineStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_border_visible(mut self, visible: bool) -> Self {
        self.border_visible = Some(visible);
        self
    }
}
