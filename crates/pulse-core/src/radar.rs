//! Multi-series radar data with an explicit category axis
//!
//! Every series supplies exactly one value per category; alignment is by
//! the shared `categories` list, never by array position across series.

use crate::ChartDataError;
use serde::{Deserialize, Serialize};

/// One polygon drawn over the shared category axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    pub name: String,
    /// One value per category, in category order.
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_size: Option<f64>,
    #[serde(default)]
    pub show_dots: Option<bool>,
}

impl RadarSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            color: None,
            fill_color: None,
            fill_opacity: None,
            stroke_width: None,
            dot_color: None,
            dot_size: None,
            show_dots: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Radar chart input: named category axes shared by all series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarChartData {
    pub categories: Vec<String>,
    pub series: Vec<RadarSeries>,
}

impl RadarChartData {
    pub fn new(
        categories: impl IntoIterator<Item = impl Into<String>>,
        series: Vec<RadarSeries>,
    ) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
        }
    }

    /// Check that every series carries exactly one value per category.
    pub fn validate(&self) -> Result<(), ChartDataError> {
        if self.categories.is_empty() {
            return Err(ChartDataError::EmptyCategories);
        }
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(ChartDataError::SeriesLengthMismatch {
                    series: series.name.clone(),
                    expected: self.categories.len(),
                    actual: series.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Largest value across all series, or None when there is no data.
    pub fn max_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(None, |acc: Option<f64>, v| {
                Some(acc.map_or(v, |m| m.max(v)))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty() || self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RadarChartData {
        RadarChartData::new(
            ["Speed", "Power", "Range"],
            vec![
                RadarSeries::new("A", vec![3.0, 5.0, 2.0]),
                RadarSeries::new("B", vec![4.0, 1.0, 6.0]),
            ],
        )
    }

    #[test]
    fn test_validate_aligned_series() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatched_length() {
        let mut data = sample();
        data.series[1].values.pop();
        let err = data.validate().unwrap_err();
        assert!(matches!(
            err,
            ChartDataError::SeriesLengthMismatch { expected: 3, actual: 2, .. }
        ));
    }

    #[test]
    fn test_validate_rejects_empty_categories() {
        let data = RadarChartData::new(Vec::<String>::new(), vec![]);
        assert!(matches!(
            data.validate(),
            Err(ChartDataError::EmptyCategories)
        ));
    }

    #[test]
    fn test_max_value_across_series() {
        assert_eq!(sample().max_value(), Some(6.0));
        assert_eq!(RadarChartData::default().max_value(), None);
    }
}
