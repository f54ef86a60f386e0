//! Partial style structs with cascading defaults
//!
//! Every field is optional; `merged_over` composes a caller-supplied
//! partial style over a component default so that the caller's field wins
//! wherever it is set. A plain shallow merge, nothing cascades deeper.

use serde::{Deserialize, Serialize};

// ============================================================================
// TEXT
// ============================================================================

/// SVG text styling overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Caller field wins, else the default's field.
    pub fn merged_over(&self, defaults: &Self) -> Self {
        Self {
            fill: self.fill.clone().or_else(|| defaults.fill.clone()),
            font_size: self.font_size.or(defaults.font_size),
            font_weight: self
                .font_weight
                .clone()
                .or_else(|| defaults.font_weight.clone()),
        }
    }

    pub fn fill_or(&self, fallback: &str) -> String {
        self.fill.clone().unwrap_or_else(|| fallback.to_string())
    }

    pub fn font_size_or(&self, fallback: f64) -> f64 {
        self.font_size.unwrap_or(fallback)
    }

    pub fn font_weight_or(&self, fallback: &str) -> String {
        self.font_weight
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

// ============================================================================
// STROKE
// ============================================================================

/// SVG stroke styling overrides (axes, grids, connector lines).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
}

impl StrokeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = Some(opacity);
        self
    }

    pub fn dasharray(mut self, dasharray: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(dasharray.into());
        self
    }

    pub fn merged_over(&self, defaults: &Self) -> Self {
        Self {
            stroke: self.stroke.clone().or_else(|| defaults.stroke.clone()),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            stroke_opacity: self.stroke_opacity.or(defaults.stroke_opacity),
            stroke_dasharray: self
                .stroke_dasharray
                .clone()
                .or_else(|| defaults.stroke_dasharray.clone()),
        }
    }

    pub fn stroke_or(&self, fallback: &str) -> String {
        self.stroke.clone().unwrap_or_else(|| fallback.to_string())
    }

    pub fn width_or(&self, fallback: f64) -> f64 {
        self.stroke_width.unwrap_or(fallback)
    }

    pub fn opacity_or(&self, fallback: f64) -> f64 {
        self.stroke_opacity.unwrap_or(fallback)
    }
}

// ============================================================================
// SHAPE (stroke + fill, radar polygons and chart backgrounds)
// ============================================================================

/// Combined stroke and fill overrides for filled shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

impl ShapeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn merged_over(&self, defaults: &Self) -> Self {
        Self {
            stroke: self.stroke.clone().or_else(|| defaults.stroke.clone()),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            stroke_opacity: self.stroke_opacity.or(defaults.stroke_opacity),
            fill: self.fill.clone().or_else(|| defaults.fill.clone()),
            fill_opacity: self.fill_opacity.or(defaults.fill_opacity),
        }
    }

    pub fn fill_or(&self, fallback: &str) -> String {
        self.fill.clone().unwrap_or_else(|| fallback.to_string())
    }

    pub fn fill_opacity_or(&self, fallback: f64) -> f64 {
        self.fill_opacity.unwrap_or(fallback)
    }

    pub fn stroke_or(&self, fallback: &str) -> String {
        self.stroke.clone().unwrap_or_else(|| fallback.to_string())
    }

    pub fn stroke_width_or(&self, fallback: f64) -> f64 {
        self.stroke_width.unwrap_or(fallback)
    }

    pub fn stroke_opacity_or(&self, fallback: f64) -> f64 {
        self.stroke_opacity.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_field_wins() {
        let defaults = TextStyle::new().fill("#4A5568").font_size(12.0).font_weight("500");
        let caller = TextStyle::new().fill("#000000");

        let merged = caller.merged_over(&defaults);
        assert_eq!(merged.fill.as_deref(), Some("#000000"));
        assert_eq!(merged.font_size, Some(12.0));
        assert_eq!(merged.font_weight.as_deref(), Some("500"));
    }

    #[test]
    fn test_empty_caller_keeps_defaults() {
        let defaults = StrokeStyle::new().stroke("#CBD5E0").stroke_width(1.0);
        let merged = StrokeStyle::new().merged_over(&defaults);
        assert_eq!(merged.stroke_or("x"), "#CBD5E0");
        assert_eq!(merged.width_or(9.0), 1.0);
        assert_eq!(merged.opacity_or(0.7), 0.7);
    }

    #[test]
    fn test_shape_merge_mixes_fields() {
        let defaults = ShapeStyle::new().fill("#F7FAFC").fill_opacity(0.3);
        let caller = ShapeStyle::new().fill_opacity(0.9);
        let merged = caller.merged_over(&defaults);
        assert_eq!(merged.fill_or(""), "#F7FAFC");
        assert_eq!(merged.fill_opacity_or(0.0), 0.9);
    }
}
