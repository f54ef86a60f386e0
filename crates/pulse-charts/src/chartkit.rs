//! # chartkit
//!
//! Core chart primitives: scales, path builders, arc and polygon geometry.
//! Everything here is a pure function of its inputs; components feed these
//! with normalized data and an animation progress scalar.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (continuous domain to continuous range)
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Generate "nice" tick values (rounded to clean numbers)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let range = max - min;

        if range == 0.0 || count == 0 {
            return vec![min];
        }

        let rough_step = range / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let nice_min = (min / nice_step).floor() * nice_step;
        let nice_max = (max / nice_step).ceil() * nice_step;

        let mut ticks = Vec::new();
        let mut tick = nice_min;

        while tick <= nice_max + nice_step * 0.5 {
            if tick >= min && tick <= max {
                ticks.push(tick);
            }
            tick += nice_step;
        }

        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let mut normalized = (value - d_min) / (d_max - d_min);

        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }

        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        if count <= 1 {
            return vec![min];
        }

        let step = (max - min) / (count - 1) as f64;
        (0..count).map(|i| min + step * i as f64).collect()
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalize `value` into [0, 1] over `[min, max]`.
/// A degenerate domain (`max == min`) returns 0 rather than NaN.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Resolve a domain from data, letting explicit bounds win over inferred
/// ones. An empty iterator falls back to (0, 1).
pub fn infer_domain(
    values: impl IntoIterator<Item = f64>,
    explicit_min: Option<f64>,
    explicit_max: Option<f64>,
) -> (f64, f64) {
    let mut observed: Option<(f64, f64)> = None;
    for v in values {
        observed = Some(match observed {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    let (lo, hi) = observed.unwrap_or((0.0, 1.0));
    (explicit_min.unwrap_or(lo), explicit_max.unwrap_or(hi))
}

// ============================================================================
// BAND SCALE (bar x positions)
// ============================================================================

/// Band scale for categorical data (e.g., bar x positions)
#[derive(Debug, Clone)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.clamp(0.0, 1.0);
        self
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        let total_range = r_max - r_min;
        let n = self.domain_count as f64;

        let outer_total = self.padding_outer * 2.0;
        let inner_total = self.padding_inner * (n - 1.0).max(0.0);

        let available = total_range / (n + outer_total + inner_total);
        available * (1.0 - self.padding_inner)
    }

    /// Step size (band + gap)
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        (r_max - r_min) / self.domain_count as f64
    }

    /// Position for index
    pub fn scale(&self, index: usize) -> f64 {
        if self.domain_count == 0 {
            return self.range.0;
        }

        let (r_min, _) = self.range;
        let step = self.step();
        let offset = self.padding_outer * step;

        r_min + offset + index as f64 * step
    }

    /// Center position for index
    pub fn scale_center(&self, index: usize) -> f64 {
        self.scale(index) + self.bandwidth() / 2.0
    }
}

impl Default for BandScale {
    fn default() -> Self {
        Self::new(10)
    }
}

// ============================================================================
// POLAR GEOMETRY
// ============================================================================

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Point at `angle_rad` (standard math angles, 0 = 3 o'clock) and distance
/// `radius` from `(cx, cy)`.
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle_rad: f64) -> (f64, f64) {
    (cx + radius * angle_rad.cos(), cy + radius * angle_rad.sin())
}

/// Needle/value angle for an arc gauge, in degrees:
/// `start + fraction * (end - start)`, with out-of-range fractions clamped.
pub fn arc_value_angle(start_deg: f64, end_deg: f64, fraction: f64) -> f64 {
    start_deg + fraction.clamp(0.0, 1.0) * (end_deg - start_deg)
}

/// Closed path for an annulus sector (gauge arcs, pie slices with inner
/// radius): outer arc from start to end, line to the inner radius, inner
/// arc back, closed.
pub fn annulus_sector_path(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_rad: f64,
    end_rad: f64,
) -> String {
    let inner_radius = inner_radius.clamp(0.0, outer_radius);
    let large_arc = (end_rad - start_rad).abs() > PI;

    let (ox1, oy1) = polar_point(cx, cy, outer_radius, start_rad);
    let (ox2, oy2) = polar_point(cx, cy, outer_radius, end_rad);
    let (ix1, iy1) = polar_point(cx, cy, inner_radius, start_rad);
    let (ix2, iy2) = polar_point(cx, cy, inner_radius, end_rad);

    if inner_radius <= f64::EPSILON {
        // Plain sector: arc plus two radii through the center
        return PathBuilder::new()
            .move_to(cx, cy)
            .line_to(ox1, oy1)
            .arc_to(outer_radius, outer_radius, 0.0, large_arc, true, ox2, oy2)
            .close()
            .build();
    }

    PathBuilder::new()
        .move_to(ox1, oy1)
        .arc_to(outer_radius, outer_radius, 0.0, large_arc, true, ox2, oy2)
        .line_to(ix2, iy2)
        .arc_to(inner_radius, inner_radius, 0.0, large_arc, false, ix1, iy1)
        .close()
        .build()
}

// ============================================================================
// PIE LAYOUT
// ============================================================================

/// One computed pie slice. Layout angles partition the full span; the
/// drawn angles inset each side by half the pad angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
}

impl PieSlice {
    /// Angular span excluding padding, radians.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Start angle of the visible wedge (pad inset applied).
    pub fn drawn_start(&self) -> f64 {
        if self.span() <= self.pad_angle {
            return self.start_angle;
        }
        self.start_angle + self.pad_angle / 2.0
    }

    /// End angle of the visible wedge (pad inset applied).
    pub fn drawn_end(&self) -> f64 {
        if self.span() <= self.pad_angle {
            return self.end_angle;
        }
        self.end_angle - self.pad_angle / 2.0
    }
}

/// Pie layout: maps values to contiguous angle pairs over the full circle,
/// preserving input order, starting at 12 o'clock.
#[derive(Debug, Clone)]
pub struct PieLayout {
    start_angle: f64,
    total_angle: f64,
    pad_angle: f64,
}

impl PieLayout {
    pub fn new() -> Self {
        Self {
            start_angle: -FRAC_PI_2,
            total_angle: TAU,
            pad_angle: 0.02,
        }
    }

    pub fn start_angle(mut self, start_rad: f64) -> Self {
        self.start_angle = start_rad;
        self
    }

    pub fn total_angle(mut self, total_rad: f64) -> Self {
        self.total_angle = total_rad;
        self
    }

    pub fn pad_angle(mut self, pad_rad: f64) -> Self {
        self.pad_angle = pad_rad.max(0.0);
        self
    }

    /// Compute slices for `values`. Negative values count as zero; an
    /// all-zero input distributes the span evenly so something renders.
    pub fn layout(&self, values: &[f64]) -> Vec<PieSlice> {
        if values.is_empty() {
            return Vec::new();
        }

        let clamped: Vec<f64> = values.iter().map(|v| v.max(0.0)).collect();
        let total: f64 = clamped.iter().sum();

        let fractions: Vec<f64> = if total > 0.0 {
            clamped.iter().map(|v| v / total).collect()
        } else {
            vec![1.0 / clamped.len() as f64; clamped.len()]
        };

        let mut slices = Vec::with_capacity(values.len());
        let mut cursor = self.start_angle;

        for (index, fraction) in fractions.iter().enumerate() {
            let span = fraction * self.total_angle;
            slices.push(PieSlice {
                index,
                value: clamped[index],
                start_angle: cursor,
                end_angle: cursor + span,
                pad_angle: self.pad_angle,
            });
            cursor += span;
        }

        slices
    }
}

impl Default for PieLayout {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RING DASH (stroke-dasharray arc reveal)
// ============================================================================

/// Stroke-dash pair drawing `fraction` of a circle of `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RingDash {
    pub circumference: f64,
    pub dash_array: String,
    pub dash_offset: f64,
}

/// Convert a filled fraction into a stroke-dash arc length on a circle.
pub fn ring_dash(radius: f64, fraction: f64) -> RingDash {
    let circumference = TAU * radius;
    let fraction = fraction.clamp(0.0, 1.0);
    RingDash {
        circumference,
        dash_array: format!("{circumference} {circumference}"),
        dash_offset: circumference * (1.0 - fraction),
    }
}

// ============================================================================
// POLYGON GEOMETRY (radar)
// ============================================================================

/// Vertices for radar values: N axes divide the circle into equal sectors
/// starting at 12 o'clock; vertex distance is `radius * normalized[i]`.
pub fn radar_vertices(cx: f64, cy: f64, radius: f64, normalized: &[f64]) -> Vec<(f64, f64)> {
    let n = normalized.len();
    if n == 0 {
        return Vec::new();
    }
    let angle_step = TAU / n as f64;
    normalized
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let angle = -FRAC_PI_2 + i as f64 * angle_step;
            polar_point(cx, cy, radius * v.clamp(0.0, 1.0), angle)
        })
        .collect()
}

/// Vertices of a regular polygon with `n` corners (radar grid rings).
pub fn regular_polygon_points(cx: f64, cy: f64, radius: f64, n: usize) -> Vec<(f64, f64)> {
    radar_vertices(cx, cy, radius, &vec![1.0; n])
}

/// SVG `points` attribute value: "x1,y1 x2,y2 ..."
pub fn points_attr(points: &[(f64, f64)]) -> String {
    let mut out = String::with_capacity(points.len() * 14);
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{:.2},{:.2}", x, y).unwrap();
    }
    out
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[(f64, f64)]) -> String;
}

/// Straight-segment line path
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        if points.is_empty() {
            return String::new();
        }

        let mut path = String::with_capacity(points.len() * 20);
        let (x, y) = points[0];
        write!(path, "M{:.2},{:.2}", x, y).unwrap();

        for &(x, y) in &points[1..] {
            write!(path, "L{:.2},{:.2}", x, y).unwrap();
        }

        path
    }
}

/// Smoothed path: cubic segments with horizontal-midpoint control points.
#[derive(Debug, Clone, Default)]
pub struct NaturalPath;

impl PathGenerator for NaturalPath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        if points.is_empty() {
            return String::new();
        }

        let mut path = String::with_capacity(points.len() * 48);
        let (x, y) = points[0];
        write!(path, "M{:.2},{:.2}", x, y).unwrap();

        for i in 1..points.len() {
            let (x0, y0) = points[i - 1];
            let (x1, y1) = points[i];
            let mid_x = x0 + (x1 - x0) / 2.0;
            write!(
                path,
                "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                mid_x, y0, mid_x, y1, x1, y1
            )
            .unwrap();
        }

        path
    }
}

/// Step path generator (for step charts)
#[derive(Debug, Clone)]
pub struct StepPath {
    pub step_position: StepPosition,
}

#[derive(Debug, Clone, Copy, Default)]
pub enum StepPosition {
    #[default]
    Before,
    After,
    Middle,
}

impl Default for StepPath {
    fn default() -> Self {
        Self {
            step_position: StepPosition::Before,
        }
    }
}

impl PathGenerator for StepPath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        if points.is_empty() {
            return String::new();
        }

        let mut path = String::with_capacity(points.len() * 30);
        let (x, y) = points[0];
        write!(path, "M{:.2},{:.2}", x, y).unwrap();

        for i in 1..points.len() {
            let (x0, y0) = points[i - 1];
            let (x1, y1) = points[i];

            match self.step_position {
                StepPosition::Before => {
                    write!(path, "V{:.2}H{:.2}", y1, x1).unwrap();
                }
                StepPosition::After => {
                    write!(path, "H{:.2}V{:.2}", x1, y1).unwrap();
                }
                StepPosition::Middle => {
                    let mid_x = (x0 + x1) / 2.0;
                    write!(path, "H{:.2}V{:.2}H{:.2}", mid_x, y1, x1).unwrap();
                }
            }
        }

        path
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "M{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "L{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        write!(self.commands, "H{:.2}", x).unwrap();
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        write!(self.commands, "V{:.2}", y).unwrap();
        self
    }

    pub fn cubic_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            x1, y1, x2, y2, x, y
        )
        .unwrap();
        self
    }

    pub fn quadratic_to(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        write!(self.commands, "Q{:.2},{:.2},{:.2},{:.2}", x1, y1, x, y).unwrap();
        self
    }

    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx,
            ry,
            rotation,
            large_arc as u8,
            sweep as u8,
            x,
            y
        )
        .unwrap();
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// AREA / LINE PATHS
// ============================================================================

/// Generate closed area path with baseline
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut builder = PathBuilder::new()
        .move_to(points[0].0, baseline_y)
        .line_to(points[0].0, points[0].1);

    for &(x, y) in &points[1..] {
        builder = builder.line_to(x, y);
    }

    if let Some(&(last_x, _)) = points.last() {
        builder = builder.line_to(last_x, baseline_y);
    }

    builder.close().build()
}

/// Generate line path (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    LinePath.generate(points)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new().domain(5.0, 5.0).range(0.0, 100.0);
        assert_eq!(scale.scale(5.0), 50.0);
        assert!(scale.scale(99.0).is_finite());
    }

    #[test]
    fn test_nice_ticks_round_values() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 1.0);
        assert_eq!(scale.nice_ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(scale.nice_ticks(0), vec![0.0]);
    }

    #[test]
    fn test_scale_invert_round_trip() {
        let scale = LinearScale::new().domain(0.0, 10.0).range(0.0, 200.0);
        assert!((scale.invert(scale.scale(4.0)) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_scale_clamps() {
        let scale = LinearScale::new()
            .domain(0.0, 10.0)
            .range(0.0, 100.0)
            .clamp(true);
        assert_eq!(scale.scale(-5.0), 0.0);
        assert_eq!(scale.scale(20.0), 100.0);
    }

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize(0.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(10.0, 0.0, 10.0), 1.0);
        assert_eq!(normalize(2.5, 0.0, 10.0), 0.25);
        assert_eq!(normalize(7.0, 7.0, 7.0), 0.0);
        assert_eq!(normalize(15.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn test_infer_domain() {
        assert_eq!(infer_domain([3.0, 1.0, 4.0], None, None), (1.0, 4.0));
        assert_eq!(infer_domain([3.0, 1.0], Some(0.0), None), (0.0, 3.0));
        assert_eq!(infer_domain([], None, None), (0.0, 1.0));
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(5).range(0.0, 100.0);
        let bw = scale.bandwidth();
        assert!(bw > 0.0);
        assert!(bw < 20.0);
        assert!(scale.scale(1) > scale.scale(0));
    }

    #[test]
    fn test_arc_value_angle_clamps() {
        assert_eq!(arc_value_angle(135.0, 405.0, 0.0), 135.0);
        assert_eq!(arc_value_angle(135.0, 405.0, 1.0), 405.0);
        assert_eq!(arc_value_angle(135.0, 405.0, 0.5), 270.0);
        assert_eq!(arc_value_angle(135.0, 405.0, 2.0), 405.0);
        assert_eq!(arc_value_angle(135.0, 405.0, -1.0), 135.0);
    }

    #[test]
    fn test_polar_point() {
        let (x, y) = polar_point(100.0, 100.0, 50.0, 0.0);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);

        let (x, y) = polar_point(100.0, 100.0, 50.0, -FRAC_PI_2);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_layout_example() {
        // 30/70 over a full circle: 108 and 252 degrees
        let slices = PieLayout::new().pad_angle(0.0).layout(&[30.0, 70.0]);
        assert_eq!(slices.len(), 2);
        assert!((rad_to_deg(slices[0].span()) - 108.0).abs() < 1e-9);
        assert!((rad_to_deg(slices[1].span()) - 252.0).abs() < 1e-9);
        // Contiguous, starting at 12 o'clock
        assert!((slices[0].start_angle + FRAC_PI_2).abs() < 1e-9);
        assert!((slices[0].end_angle - slices[1].start_angle).abs() < 1e-9);
    }

    #[test]
    fn test_pie_layout_spans_sum_to_full_circle() {
        let slices = PieLayout::new().pad_angle(0.02).layout(&[1.0, 2.0, 3.0, 4.0]);
        let sum: f64 = slices.iter().map(|s| s.span()).sum();
        assert!((sum - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_pie_layout_zero_total() {
        let slices = PieLayout::new().layout(&[0.0, 0.0]);
        assert_eq!(slices.len(), 2);
        assert!((slices[0].span() - slices[1].span()).abs() < 1e-9);
    }

    #[test]
    fn test_pie_drawn_angles_inset_by_pad() {
        let slices = PieLayout::new().pad_angle(0.1).layout(&[1.0, 1.0]);
        let s = &slices[0];
        assert!((s.drawn_start() - (s.start_angle + 0.05)).abs() < 1e-9);
        assert!((s.drawn_end() - (s.end_angle - 0.05)).abs() < 1e-9);
    }

    #[test]
    fn test_ring_dash() {
        let dash = ring_dash(100.0, 0.25);
        assert!((dash.circumference - TAU * 100.0).abs() < 1e-9);
        assert!((dash.dash_offset - dash.circumference * 0.75).abs() < 1e-9);

        let full = ring_dash(100.0, 1.5);
        assert_eq!(full.dash_offset, 0.0);
    }

    #[test]
    fn test_radar_vertices_start_at_top() {
        let verts = radar_vertices(0.0, 0.0, 10.0, &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(verts.len(), 4);
        // First axis points straight up
        assert!((verts[0].0).abs() < 1e-9);
        assert!((verts[0].1 + 10.0).abs() < 1e-9);
        // Second axis points right
        assert!((verts[1].0 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_radar_vertices_scale_by_value() {
        let verts = radar_vertices(0.0, 0.0, 10.0, &[0.5, 2.0]);
        // 0.5 -> half radius up, out-of-range 2.0 clamps to full radius
        assert!((verts[0].1 + 5.0).abs() < 1e-9);
        assert!((verts[1].1 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_annulus_sector_path_shape() {
        let path = annulus_sector_path(0.0, 0.0, 100.0, 80.0, 0.0, PI / 2.0);
        assert!(path.starts_with("M100.00,0.00"));
        assert!(path.contains('A'));
        assert!(path.ends_with('Z'));

        let sector = annulus_sector_path(0.0, 0.0, 100.0, 0.0, 0.0, PI / 2.0);
        assert!(sector.starts_with("M0.00,0.00"));
    }

    #[test]
    fn test_points_attr() {
        let attr = points_attr(&[(0.0, 0.0), (10.0, 5.5)]);
        assert_eq!(attr, "0.00,0.00 10.00,5.50");
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .close()
            .build();

        assert!(path.contains("M0.00,0.00"));
        assert!(path.contains("L100.00,100.00"));
        assert!(path.contains("Z"));
    }

    #[test]
    fn test_step_path_before() {
        let path = StepPath::default().generate(&[(0.0, 0.0), (10.0, 5.0)]);
        assert_eq!(path, "M0.00,0.00V5.00H10.00");
    }

    #[test]
    fn test_natural_path_midpoint_controls() {
        let path = NaturalPath.generate(&[(0.0, 0.0), (10.0, 20.0)]);
        assert_eq!(path, "M0.00,0.00C5.00,0.00,5.00,20.00,10.00,20.00");
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        let path = area_path(&[(0.0, 10.0), (50.0, 5.0)], 30.0);
        assert!(path.starts_with("M0.00,30.00"));
        assert!(path.ends_with("L50.00,30.00Z"));
    }
}
