use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_seconds;

/// Horizontal-domain value owned by the host chart.
///
/// The overlay subsystem never interprets times beyond asking the injected
/// time scale for a coordinate. The one exception is viewport clamping, which
/// only applies when the value is numerically comparable; structured values
/// (`Timestamp`, `BusinessDay`) opt out of clamping and must resolve natively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainTime {
    Numeric(f64),
    Timestamp(DateTime<Utc>),
    BusinessDay { year: i32, month: u32, day: u32 },
}

impl DomainTime {
    /// Returns the value as a finite number when the domain supports ordering
    /// against visible-range endpoints, `None` otherwise.
    #[must_use]
    pub fn as_finite_numeric(self) -> Option<f64> {
        match self {
            Self::Numeric(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }

    /// Lowers a timestamp to `Numeric` unix seconds (millisecond precision).
    ///
    /// Hosts whose time scale is keyed by unix seconds use this instead of
    /// `Timestamp` so the annotation stays numerically comparable and keeps
    /// participating in viewport clamping.
    #[must_use]
    pub fn numeric_seconds(time: DateTime<Utc>) -> Self {
        Self::Numeric(datetime_to_unix_seconds(time))
    }
}

impl Default for DomainTime {
    fn default() -> Self {
        Self::Numeric(0.0)
    }
}

impl From<f64> for DomainTime {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<DateTime<Utc>> for DomainTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Currently displayed domain-time interval, queried fresh every render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub from: DomainTime,
    pub to: DomainTime,
}

impl VisibleRange {
    #[must_use]
    pub fn new(from: DomainTime, to: DomainTime) -> Self {
        Self { from, to }
    }
}
