//! # pulse-core
//!
//! Core domain types for Pulse chart components.
//! Implements Strategy pattern for value formatting and style resolution.
//!
//! ## Modules
//!
//! - `data` - per-chart data points (bars, rings, lines, bubbles, cells, gauge)
//! - `radar` - multi-series radar data with an explicit category axis
//! - `style` - partial style structs with shallow-merge resolution
//! - `error` - data validation errors

pub mod data;
pub mod error;
pub mod radar;
pub mod style;

pub use data::*;
pub use error::*;
pub use radar::*;
pub use style::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for formatting a single chart value
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Strategy trait for formatting a value against its total (ring charts)
pub trait FractionFormatter: Send + Sync {
    fn format(&self, value: f64, total: f64) -> String;
}

/// Default formatter: integers render without a decimal point
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl ValueFormatter for PlainFormatter {
    fn format(&self, value: f64) -> String {
        format_value(value)
    }
}

/// Percentage formatter with configurable decimals
#[derive(Debug, Clone)]
pub struct PercentFormatter {
    pub decimals: usize,
}

impl Default for PercentFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl ValueFormatter for PercentFormatter {
    fn format(&self, value: f64) -> String {
        format!("{:.prec$}%", value, prec = self.decimals)
    }
}

/// Default ring formatter: rounded share of the total, e.g. "75%"
#[derive(Debug, Clone, Copy, Default)]
pub struct SharePercentFormatter;

impl FractionFormatter for SharePercentFormatter {
    fn format(&self, value: f64, total: f64) -> String {
        if total <= 0.0 {
            return "0%".to_string();
        }
        format!("{}%", (value / total * 100.0).round() as i64)
    }
}

/// Format a value the way template interpolation would: integral values
/// drop the trailing ".0".
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Default tooltip text for a contribution cell
pub fn format_contribution(value: f64, date: chrono::NaiveDate) -> String {
    format!("{} contributions on {}", format_value(value), date.format("%Y-%m-%d"))
}

/// Default bubble caption: "(x, y)"
pub fn format_bubble(x: f64, y: f64, _size: f64) -> String {
    format!("({}, {})", format_value(x), format_value(y))
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    /// Categorical palette cycled by item index when a data point carries
    /// no explicit color.
    pub const PALETTE: [&str; 16] = [
        "#3366CC", // blue
        "#DC3912", // red
        "#FF9900", // orange
        "#109618", // green
        "#990099", // purple
        "#0099C6", // teal
        "#DD4477", // pink
        "#66AA00", // lime
        "#B82E2E", // dark red
        "#316395", // dark blue
        "#994499", // dark purple
        "#22AA99", // sea green
        "#AAAA11", // olive
        "#6633CC", // indigo
        "#E67300", // burnt orange
        "#329262", // forest green
    ];

    pub const NO_DATA: &str = "#CCCCCC";
    pub const OUTLINE: &str = "#FFFFFF";
    pub const CONNECTOR: &str = "#888888";

    pub const TEXT_LABEL: &str = "#4A5568";
    pub const TEXT_VALUE: &str = "#718096";
    pub const TEXT_FAINT: &str = "#A0AEC0";
    pub const TEXT_DARK: &str = "#333333";
    pub const TEXT_MUTED: &str = "#555555";

    pub const AXIS: &str = "#CBD5E0";
    pub const GRID: &str = "#E2E8F0";
    pub const SURFACE: &str = "#F7FAFC";

    pub const NEEDLE: &str = "#E53E3E";
    pub const NEEDLE_BASE: &str = "#718096";

    pub const CELL_EMPTY: &str = "#ebedf0";
    /// GitHub-style contribution intensity scale, lightest to darkest.
    pub const CELL_SCALE: [&str; 4] = ["#9be9a8", "#40c463", "#30a14e", "#216e39"];

    /// Color for item `index`, cycling through the palette.
    pub fn by_index(index: usize) -> &'static str {
        PALETTE[index % PALETTE.len()]
    }

    pub fn white_alpha(alpha: f64) -> String {
        format!("rgba(255, 255, 255, {:.2})", alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_drops_trailing_zero() {
        assert_eq!(format_value(30.0), "30");
        assert_eq!(format_value(30.5), "30.5");
        assert_eq!(format_value(-4.0), "-4");
    }

    #[test]
    fn test_share_percent_formatter() {
        let formatter = SharePercentFormatter;
        assert_eq!(formatter.format(75.0, 100.0), "75%");
        assert_eq!(formatter.format(1.0, 3.0), "33%");
        assert_eq!(formatter.format(5.0, 0.0), "0%");
    }

    #[test]
    fn test_percent_formatter_strategy() {
        let formatter = PercentFormatter { decimals: 1 };
        assert_eq!(formatter.format(42.0), "42.0%");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(colors::by_index(0), colors::by_index(16));
        assert_eq!(colors::by_index(3), "#109618");
    }
}
