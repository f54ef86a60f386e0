//! Label, connector and legend placement
//!
//! Pure placement math for the secondary decorations around computed
//! geometry: anchored labels with connector lines, estimated-extent
//! background boxes, external pie labels, legend entries.
//!
//! Text extents are estimated as `chars * font_size * 0.6` rather than
//! measured. The approximation can mis-size boxes for non-Latin scripts
//! or unusually wide fonts.

use crate::chartkit::{polar_point, PathBuilder};
use pulse_core::{DataPoint, RingDataPoint};

// ============================================================================
// TEXT EXTENT ESTIMATION
// ============================================================================

/// Estimated bounding box of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Estimate rendered text width from character count.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.6
}

pub fn estimate_extent(text: &str, font_size: f64) -> TextExtent {
    TextExtent {
        width: estimate_text_width(text, font_size),
        height: font_size * 1.2,
    }
}

// ============================================================================
// ANCHORED PLACEMENT
// ============================================================================

/// SVG text-anchor values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Where a ring/gauge label sits relative to its anchor circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Where a ring value sits; `WithLabel` stacks it under the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuePosition {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    WithLabel,
}

/// Legend block placement around the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

/// A connector line from geometry to its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A positioned text element with an optional connector back to the
/// geometry it annotates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub connector: Option<Connector>,
}

/// Place a ring label outside the circle of `radius` around `(cx, cy)`.
pub fn ring_label_placement(
    cx: f64,
    cy: f64,
    radius: f64,
    position: LabelPosition,
    offset: f64,
) -> PlacedLabel {
    match position {
        LabelPosition::Top => PlacedLabel {
            x: cx,
            y: cy - radius - offset,
            anchor: TextAnchor::Middle,
            connector: Some(Connector {
                x1: cx,
                y1: cy - radius,
                x2: cx,
                y2: cy - radius - offset + 4.0,
            }),
        },
        LabelPosition::Bottom => PlacedLabel {
            x: cx,
            y: cy + radius + offset,
            anchor: TextAnchor::Middle,
            connector: Some(Connector {
                x1: cx,
                y1: cy + radius,
                x2: cx,
                y2: cy + radius + offset - 4.0,
            }),
        },
        LabelPosition::Left => PlacedLabel {
            x: cx - radius - offset,
            y: cy,
            anchor: TextAnchor::End,
            connector: Some(Connector {
                x1: cx - radius,
                y1: cy,
                x2: cx - radius - offset + 4.0,
                y2: cy,
            }),
        },
        LabelPosition::Right => PlacedLabel {
            x: cx + radius + offset,
            y: cy,
            anchor: TextAnchor::Start,
            connector: Some(Connector {
                x1: cx + radius,
                y1: cy,
                x2: cx + radius + offset - 4.0,
                y2: cy,
            }),
        },
    }
}

/// Place a ring value relative to its ring and (for `WithLabel`) the
/// already-placed label.
pub fn ring_value_placement(
    cx: f64,
    cy: f64,
    radius: f64,
    position: ValuePosition,
    label: &PlacedLabel,
    value_font_size: f64,
    offset: f64,
) -> PlacedLabel {
    match position {
        ValuePosition::WithLabel => PlacedLabel {
            x: label.x,
            y: label.y + value_font_size * 1.2,
            anchor: label.anchor,
            connector: None,
        },
        ValuePosition::Top => ring_label_placement(cx, cy, radius, LabelPosition::Top, offset + value_font_size),
        ValuePosition::Bottom => {
            ring_label_placement(cx, cy, radius, LabelPosition::Bottom, offset + value_font_size)
        }
        ValuePosition::Left => ring_label_placement(cx, cy, radius, LabelPosition::Left, offset),
        ValuePosition::Right => ring_label_placement(cx, cy, radius, LabelPosition::Right, offset),
    }
}

// ============================================================================
// BACKGROUND BOXES
// ============================================================================

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Styling for label/value background boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundStyle {
    pub color: String,
    pub opacity: f64,
    pub border_radius: f64,
    pub border_width: f64,
    pub border_color: Option<String>,
    pub padding: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            color: pulse_core::colors::white_alpha(0.9),
            opacity: 0.9,
            border_radius: 4.0,
            border_width: 0.0,
            border_color: None,
            padding: 6.0,
        }
    }
}

/// Background box for text centered at `cx` with its baseline at
/// `baseline_y`.
pub fn centered_background(cx: f64, baseline_y: f64, extent: TextExtent, padding: f64) -> Rect {
    Rect {
        x: cx - extent.width / 2.0 - padding,
        y: baseline_y - extent.height - padding,
        width: extent.width + padding * 2.0,
        height: extent.height + padding * 2.0,
    }
}

// ============================================================================
// EXTERNAL PIE LABELS
// ============================================================================

/// Connector rendering for external pie labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorStyle {
    #[default]
    Straight,
    Curved,
}

/// Connector rendering for ring labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingConnectorStyle {
    #[default]
    Straight,
    Dashed,
}

/// A pie label pushed outside the wedge, with its connecting line.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLabel {
    pub text_x: f64,
    pub text_y: f64,
    pub anchor: TextAnchor,
    pub is_right_side: bool,
    pub connector_path: String,
}

/// Place an external label for a slice too narrow for internal text.
/// The connector leaves the rim at 95% radius and either bends at 90% of
/// the label distance or curves through a lifted midpoint.
pub fn pie_external_label(
    mid_angle: f64,
    radius: f64,
    distance_factor: f64,
    style: ConnectorStyle,
) -> ExternalLabel {
    let (lx, ly) = polar_point(0.0, 0.0, radius * 0.95, mid_angle);
    let (ex, ey) = polar_point(0.0, 0.0, radius * distance_factor, mid_angle);

    let is_right_side = mid_angle.cos() > 0.0;
    let anchor = if is_right_side {
        TextAnchor::Start
    } else {
        TextAnchor::End
    };
    let x_offset = if is_right_side { 8.0 } else { -8.0 };
    let gap = if is_right_side { 5.0 } else { -5.0 };

    let connector_path = match style {
        ConnectorStyle::Curved => {
            let control_x = (lx + ex) / 2.0;
            let control_y = (ly + ey) / 2.0 - 15.0;
            PathBuilder::new()
                .move_to(lx, ly)
                .quadratic_to(control_x, control_y, ex - gap, ey)
                .build()
        }
        ConnectorStyle::Straight => PathBuilder::new()
            .move_to(lx, ly)
            .line_to(ex * 0.9, ey * 0.9)
            .line_to(ex - gap, ey)
            .build(),
    };

    ExternalLabel {
        text_x: ex + x_offset,
        text_y: ey,
        anchor,
        is_right_side,
        connector_path,
    }
}

// ============================================================================
// LEGENDS
// ============================================================================

/// One legend row: swatch color, label text, optional share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub percentage: Option<f64>,
}

impl LegendEntry {
    /// Entry without a percentage share (radar series legends).
    pub fn plain(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            percentage: None,
        }
    }

    /// "Label (42.0%)", or just the label when no share applies.
    pub fn text(&self) -> String {
        match self.percentage {
            Some(pct) => format!("{} ({:.1}%)", self.label, pct),
            None => self.label.clone(),
        }
    }
}

/// Legend entries for category data, percentages relative to the sum.
pub fn legend_entries(data: &[DataPoint]) -> Vec<LegendEntry> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    data.iter()
        .enumerate()
        .map(|(i, item)| LegendEntry {
            label: item.label.clone(),
            color: item.fill_color(i),
            percentage: Some(if total > 0.0 {
                item.value.max(0.0) / total * 100.0
            } else {
                0.0
            }),
        })
        .collect()
}

/// Legend entries for ring data, percentages relative to each ring's own
/// total.
pub fn ring_legend_entries(data: &[RingDataPoint]) -> Vec<LegendEntry> {
    data.iter()
        .enumerate()
        .map(|(i, item)| LegendEntry {
            label: item.label.clone(),
            color: item
                .full_color
                .clone()
                .unwrap_or_else(|| pulse_core::colors::by_index(i).to_string()),
            percentage: Some(item.fraction() * 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_estimate_extent() {
        let extent = estimate_extent("Sales", 12.0);
        assert_eq!(extent.width, 5.0 * 12.0 * 0.6);
        assert_eq!(extent.height, 12.0 * 1.2);
    }

    #[test]
    fn test_ring_label_top_placement() {
        let label = ring_label_placement(100.0, 100.0, 40.0, LabelPosition::Top, 20.0);
        assert_eq!(label.x, 100.0);
        assert_eq!(label.y, 40.0);
        assert_eq!(label.anchor, TextAnchor::Middle);
        let connector = label.connector.unwrap();
        assert_eq!((connector.x1, connector.y1), (100.0, 60.0));
    }

    #[test]
    fn test_ring_label_side_anchors() {
        let left = ring_label_placement(100.0, 100.0, 40.0, LabelPosition::Left, 20.0);
        assert_eq!(left.anchor, TextAnchor::End);
        let right = ring_label_placement(100.0, 100.0, 40.0, LabelPosition::Right, 20.0);
        assert_eq!(right.anchor, TextAnchor::Start);
        assert_eq!(right.x, 160.0);
    }

    #[test]
    fn test_value_stacks_under_label() {
        let label = ring_label_placement(100.0, 100.0, 40.0, LabelPosition::Top, 20.0);
        let value =
            ring_value_placement(100.0, 100.0, 40.0, ValuePosition::WithLabel, &label, 10.0, 20.0);
        assert_eq!(value.x, label.x);
        assert_eq!(value.y, label.y + 12.0);
        assert!(value.connector.is_none());
    }

    #[test]
    fn test_external_label_sides() {
        // Mid angle pointing right
        let right = pie_external_label(0.0, 100.0, 1.2, ConnectorStyle::Straight);
        assert!(right.is_right_side);
        assert_eq!(right.anchor, TextAnchor::Start);
        assert!((right.text_x - 128.0).abs() < 1e-9);

        // Mid angle pointing left
        let left = pie_external_label(PI, 100.0, 1.2, ConnectorStyle::Straight);
        assert!(!left.is_right_side);
        assert_eq!(left.anchor, TextAnchor::End);
    }

    #[test]
    fn test_external_label_connector_styles() {
        let straight = pie_external_label(0.0, 100.0, 1.2, ConnectorStyle::Straight);
        assert!(straight.connector_path.contains('L'));
        let curved = pie_external_label(0.0, 100.0, 1.2, ConnectorStyle::Curved);
        assert!(curved.connector_path.contains('Q'));
    }

    #[test]
    fn test_centered_background() {
        let rect = centered_background(50.0, 30.0, TextExtent { width: 20.0, height: 12.0 }, 6.0);
        assert_eq!(rect.x, 50.0 - 10.0 - 6.0);
        assert_eq!(rect.y, 30.0 - 12.0 - 6.0);
        assert_eq!(rect.width, 32.0);
        assert_eq!(rect.height, 24.0);
    }

    #[test]
    fn test_legend_percentages() {
        let data = vec![DataPoint::new(30.0, "A"), DataPoint::new(70.0, "B")];
        let entries = legend_entries(&data);
        assert_eq!(entries.len(), 2);
        assert!((entries[0].percentage.unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(entries[1].text(), "B (70.0%)");
    }

    #[test]
    fn test_legend_zero_total() {
        let data = vec![DataPoint::new(0.0, "A")];
        assert_eq!(legend_entries(&data)[0].percentage, Some(0.0));
    }

    #[test]
    fn test_plain_legend_entry_has_no_share() {
        let entry = LegendEntry::plain("Series A", "#3366CC");
        assert_eq!(entry.text(), "Series A");
    }

    #[test]
    fn test_ring_legend_uses_own_total() {
        let data = vec![
            RingDataPoint::new(75.0, 100.0, "cpu"),
            RingDataPoint::new(1.0, 4.0, "mem"),
        ];
        let entries = ring_legend_entries(&data);
        assert!((entries[0].percentage.unwrap() - 75.0).abs() < 1e-9);
        assert!((entries[1].percentage.unwrap() - 25.0).abs() < 1e-9);
    }
}
