//! Per-chart data point types
//!
//! Plain value objects owned by the caller and read once per render.
//! Missing optional fields fall back to palette/default styling at
//! render time, never at construction.

use crate::colors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY DATA (bar, percentage bar, pie)
// ============================================================================

/// One category: a bar, a pie slice, a percentage row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_background_color: Option<String>,
}

impl DataPoint {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            color: None,
            outline_color: None,
            outline_width: None,
            label_background_color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Placeholder substituted for empty or invalid input.
    pub fn no_data() -> Self {
        Self::new(100.0, "No Data").with_color(colors::NO_DATA)
    }

    /// Resolved fill color: explicit, else palette by index.
    pub fn fill_color(&self, index: usize) -> String {
        self.color
            .clone()
            .unwrap_or_else(|| colors::by_index(index).to_string())
    }
}

/// Substitute a single "No Data" placeholder when the input is empty.
/// Charts always render something reasonable rather than failing.
pub fn fallback_non_empty(data: &[DataPoint]) -> Vec<DataPoint> {
    if data.is_empty() {
        tracing::warn!("empty chart data, rendering placeholder");
        vec![DataPoint::no_data()]
    } else {
        data.to_vec()
    }
}

// ============================================================================
// RING DATA
// ============================================================================

/// One concentric ring: `value` is implicitly a fraction of `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingDataPoint {
    pub value: f64,
    pub total: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_color: Option<String>,
}

impl RingDataPoint {
    pub fn new(value: f64, total: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            total,
            label: label.into(),
            full_color: None,
            empty_color: None,
        }
    }

    /// Filled fraction in [0, 1]; a non-positive total yields 0.
    pub fn fraction(&self) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        (self.value / self.total).clamp(0.0, 1.0)
    }
}

// ============================================================================
// LINE DATA
// ============================================================================

/// One sample on a line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDataPoint {
    pub value: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_size: Option<f64>,
    #[serde(default)]
    pub show_dot: Option<bool>,
}

impl LineDataPoint {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            color: None,
            dot_color: None,
            dot_size: None,
            show_dot: None,
        }
    }
}

// ============================================================================
// BUBBLE DATA
// ============================================================================

/// A three-dimensional point: position plus magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleDataPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

impl BubbleDataPoint {
    pub fn new(x: f64, y: f64, size: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            size,
            label: label.into(),
            color: None,
            border_color: None,
            border_width: None,
        }
    }
}

// ============================================================================
// CONTRIBUTION DATA
// ============================================================================

/// One calendar day's activity count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionDataPoint {
    pub value: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ContributionDataPoint {
    pub fn new(value: f64, date: NaiveDate) -> Self {
        Self {
            value,
            date,
            color: None,
        }
    }

    /// Parse from an ISO `YYYY-MM-DD` string.
    pub fn from_iso(value: f64, date: &str) -> Result<Self, crate::ChartDataError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| {
            crate::ChartDataError::InvalidDate {
                date: date.to_string(),
                source,
            }
        })?;
        Ok(Self::new(value, date))
    }
}

// ============================================================================
// GAUGE DATA
// ============================================================================

/// A single scalar reading with optional bounds (defaults 0..100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_color: Option<String>,
}

impl GaugeReading {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            min_value: None,
            max_value: None,
            label: label.into(),
            color: None,
            background_color: None,
            value_color: None,
        }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    pub fn min(&self) -> f64 {
        self.min_value.unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.max_value.unwrap_or(100.0)
    }

    /// Value clamped into the reading's bounds.
    pub fn clamped_value(&self) -> f64 {
        self.value.clamp(self.min(), self.max())
    }

    /// Normalized position in [0, 1]; degenerate bounds yield 0.
    pub fn fraction(&self) -> f64 {
        let (min, max) = (self.min(), self.max());
        if (max - min).abs() < f64::EPSILON {
            return 0.0;
        }
        (self.clamped_value() - min) / (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_substitutes_placeholder() {
        let out = fallback_non_empty(&[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "No Data");

        let real = vec![DataPoint::new(3.0, "a")];
        assert_eq!(fallback_non_empty(&real), real);
    }

    #[test]
    fn test_fill_color_falls_back_to_palette() {
        let explicit = DataPoint::new(1.0, "x").with_color("#123456");
        assert_eq!(explicit.fill_color(5), "#123456");

        let implicit = DataPoint::new(1.0, "y");
        assert_eq!(implicit.fill_color(1), "#DC3912");
    }

    #[test]
    fn test_ring_fraction_clamps() {
        assert_eq!(RingDataPoint::new(75.0, 100.0, "r").fraction(), 0.75);
        assert_eq!(RingDataPoint::new(150.0, 100.0, "r").fraction(), 1.0);
        assert_eq!(RingDataPoint::new(5.0, 0.0, "r").fraction(), 0.0);
    }

    #[test]
    fn test_gauge_fraction_clamps_out_of_range() {
        let reading = GaugeReading::new(120.0, "load").with_bounds(0.0, 100.0);
        assert_eq!(reading.clamped_value(), 100.0);
        assert_eq!(reading.fraction(), 1.0);

        let below = GaugeReading::new(-3.0, "load");
        assert_eq!(below.fraction(), 0.0);
    }

    #[test]
    fn test_gauge_degenerate_bounds() {
        let flat = GaugeReading::new(5.0, "flat").with_bounds(10.0, 10.0);
        assert_eq!(flat.fraction(), 0.0);
    }

    #[test]
    fn test_data_point_json_optional_fields() {
        let point: DataPoint = serde_json::from_str(r#"{"value": 30, "label": "A"}"#).unwrap();
        assert_eq!(point, DataPoint::new(30.0, "A"));

        // Unset optional fields stay out of the serialized form
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"value":30.0,"label":"A"}"#);
    }

    #[test]
    fn test_contribution_from_iso() {
        let point = ContributionDataPoint::from_iso(4.0, "2024-03-09").unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert!(ContributionDataPoint::from_iso(1.0, "not-a-date").is_err());
    }
}
