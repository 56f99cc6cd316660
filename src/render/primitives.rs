use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::{OverlayError, OverlayResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> OverlayResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(OverlayError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke style for rectangle borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Dash segment lengths in device pixels; empty means a solid stroke.
    #[must_use]
    pub fn dash_pattern(self) -> SmallVec<[f64; 2]> {
        match self {
            Self::Solid => smallvec![],
            Self::Dashed => smallvec![4.0, 4.0],
            Self::Dotted => smallvec![1.0, 2.0],
        }
    }
}

/// Pixel-space render primitive for one rectangle overlay.
///
/// Coordinates are logical pixels and deliberately not sorted into min/max
/// order; the renderer normalizes when it computes the bounding box.
/// Recomputed every render pass, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleItem {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub border_style: LineStyle,
    pub border_visible: bool,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl RectangleItem {
    pub fn validate(&self) -> OverlayResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(OverlayError::InvalidData(
                "rectangle coordinates must be finite".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(OverlayError::InvalidData(
                "rectangle border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}
