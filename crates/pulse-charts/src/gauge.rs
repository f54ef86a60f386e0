//! Arc gauge component
//!
//! A single scalar reading rendered as an arc from `start_angle` to
//! `end_angle` (degrees, default 135..405 so the gauge opens downward),
//! with a needle, optional colored sections, ticks and min/max captions.
//! Out-of-range readings clamp to the bounds. The entrance animation
//! sweeps the needle and value arc from the start angle.

use crate::{
    animate::{AnimationDriver, Timeline},
    chartkit::{annulus_sector_path, arc_value_angle, deg_to_rad, polar_point, PathBuilder},
};
use leptos::prelude::*;
use pulse_core::{colors, format_value, GaugeReading, TextStyle};

/// A colored band on the gauge arc, spanning from the previous section's
/// value (or the minimum) up to `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSection {
    pub value: f64,
    pub color: String,
    pub label: Option<String>,
}

impl GaugeSection {
    pub fn new(value: f64, color: impl Into<String>) -> Self {
        Self {
            value,
            color: color.into(),
            label: None,
        }
    }
}

/// Gauge chart configuration
#[derive(Debug, Clone)]
pub struct GaugeChartConfig {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub thickness: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub show_labels: bool,
    pub show_values: bool,
    pub show_min_max: bool,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub min_max_style: TextStyle,
    pub needle_color: String,
    pub needle_base_color: String,
    pub needle_base_size: f64,
    pub show_sections: bool,
    pub sections: Vec<GaugeSection>,
    pub show_ticks: bool,
    pub tick_count: usize,
    pub tick_color: String,
    pub tick_size: f64,
    pub show_tick_labels: bool,
    pub tick_label_style: TextStyle,
    pub center_label: Option<String>,
    pub center_label_style: TextStyle,
    pub center_label_background: String,
    pub center_label_border_radius: f64,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for GaugeChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            radius: 120.0,
            thickness: 20.0,
            start_angle: 135.0,
            end_angle: 405.0,
            show_labels: true,
            show_values: true,
            show_min_max: true,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            min_max_style: TextStyle::new(),
            needle_color: colors::NEEDLE.to_string(),
            needle_base_color: colors::NEEDLE_BASE.to_string(),
            needle_base_size: 10.0,
            show_sections: false,
            sections: Vec::new(),
            show_ticks: true,
            tick_count: 5,
            tick_color: colors::AXIS.to_string(),
            tick_size: 10.0,
            show_tick_labels: true,
            tick_label_style: TextStyle::new(),
            center_label: None,
            center_label_style: TextStyle::new(),
            center_label_background: colors::OUTLINE.to_string(),
            center_label_border_radius: 20.0,
            animated: true,
            animation_duration: 1000.0,
        }
    }
}

/// Triangular needle path pointing at `angle_deg`.
fn needle_path(cx: f64, cy: f64, length: f64, half_width: f64, angle_deg: f64) -> String {
    let angle = deg_to_rad(angle_deg);
    let (tip_x, tip_y) = polar_point(cx, cy, length, angle);
    let (left_x, left_y) = polar_point(cx, cy, half_width, deg_to_rad(angle_deg + 90.0));
    let (right_x, right_y) = polar_point(cx, cy, half_width, deg_to_rad(angle_deg - 90.0));

    PathBuilder::new()
        .move_to(tip_x, tip_y)
        .line_to(left_x, left_y)
        .line_to(right_x, right_y)
        .close()
        .build()
}

/// Gauge chart component
#[component]
pub fn GaugeChart(
    #[prop(into)] data: Signal<GaugeReading>,
    #[prop(optional)] config: Option<GaugeChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<f64, String>>,
    #[prop(optional, into)] on_press: Option<Callback<GaugeReading>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = config.radius;
    let thickness = config.thickness;
    let inner_radius = radius - thickness;
    let start_angle = config.start_angle;
    let end_angle = config.end_angle;

    let show_labels = config.show_labels;
    let show_values = config.show_values;
    let show_min_max = config.show_min_max;
    let show_sections = config.show_sections;
    let sections = config.sections.clone();
    let show_ticks = config.show_ticks;
    let tick_count = config.tick_count.max(2);
    let tick_color = config.tick_color.clone();
    let tick_size = config.tick_size;
    let show_tick_labels = config.show_tick_labels;

    let label_style = config.label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_LABEL).font_size(16.0).font_weight("600"),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(24.0).font_weight("700"),
    );
    let min_max_style = config.min_max_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_FAINT).font_size(12.0).font_weight("400"),
    );
    let tick_label_style = config.tick_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_FAINT).font_size(10.0).font_weight("400"),
    );

    let reveal = AnimationDriver::new(Timeline::new(config.animation_duration));
    reveal.restart_on_change(data, config.animated);

    let background_arc = annulus_sector_path(
        cx,
        cy,
        radius,
        inner_radius,
        deg_to_rad(start_angle),
        deg_to_rad(end_angle),
    );

    let format = move |value: f64| match value_formatter {
        Some(formatter) => formatter.run(value),
        None => format_value(value),
    };

    // Value arc sweeps with the needle as progress advances
    let value_arc = move || {
        let reading = data.get();
        let angle = arc_value_angle(
            start_angle,
            end_angle,
            reading.fraction() * reveal.progress.get(),
        );
        annulus_sector_path(
            cx,
            cy,
            radius,
            inner_radius,
            deg_to_rad(start_angle),
            deg_to_rad(angle),
        )
    };

    let sections_view = move || {
        if !show_sections || sections.is_empty() {
            return None;
        }
        let reading = data.get();
        let (min, max) = (reading.min(), reading.max());

        let views = sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let from_value = if index == 0 {
                    min
                } else {
                    sections[index - 1].value
                };
                let from = arc_value_angle(
                    start_angle,
                    end_angle,
                    crate::chartkit::normalize(from_value, min, max),
                );
                let to = arc_value_angle(
                    start_angle,
                    end_angle,
                    crate::chartkit::normalize(section.value, min, max),
                );
                let path =
                    annulus_sector_path(cx, cy, radius, inner_radius, deg_to_rad(from), deg_to_rad(to));
                view! {
                    <path d=path fill=section.color.clone() />
                }
            })
            .collect_view();
        Some(views)
    };

    let tick_label_style_view = tick_label_style.clone();
    let ticks_view = move || {
        if !show_ticks {
            return None;
        }
        let style = tick_label_style_view.clone();
        let reading = data.get();
        let (min, max) = (reading.min(), reading.max());
        let angle_step = (end_angle - start_angle) / (tick_count - 1) as f64;
        let value_step = (max - min) / (tick_count - 1) as f64;

        let views = (0..tick_count)
            .map(|i| {
                let angle = deg_to_rad(start_angle + i as f64 * angle_step);
                let (x1, y1) = polar_point(cx, cy, inner_radius, angle);
                let (x2, y2) = polar_point(cx, cy, inner_radius + tick_size, angle);
                let (lx, ly) = polar_point(cx, cy, inner_radius + tick_size + 15.0, angle);
                let tick_value = min + i as f64 * value_step;
                let label = format(tick_value);
                let style = style.clone();
                view! {
                    <g class="gauge-tick">
                        <line
                            x1=x1
                            y1=y1
                            x2=x2
                            y2=y2
                            stroke=tick_color.clone()
                            stroke-width=1.5
                        />
                        {show_tick_labels.then(|| view! {
                            <text
                                x=lx
                                y=ly
                                dy="0.32em"
                                text-anchor="middle"
                                fill=style.fill_or(colors::TEXT_FAINT)
                                font-size=style.font_size_or(10.0)
                            >
                                {label.clone()}
                            </text>
                        })}
                    </g>
                }
            })
            .collect_view();
        Some(views)
    };

    let needle_color = config.needle_color.clone();
    let needle_base_color = config.needle_base_color.clone();
    let needle_base_size = config.needle_base_size;
    let needle_length = radius - thickness / 2.0;
    let needle_view = move || {
        let reading = data.get();
        let angle = arc_value_angle(
            start_angle,
            end_angle,
            reading.fraction() * reveal.progress.get(),
        );
        needle_path(cx, cy, needle_length, 5.0, angle)
    };

    let min_max_view = {
        let style = min_max_style.clone();
        move || {
            if !show_min_max {
                return None;
            }
            let style = style.clone();
            let reading = data.get();
            let (min_x, min_y) =
                polar_point(cx, cy, radius + 14.0, deg_to_rad(start_angle));
            let (max_x, max_y) = polar_point(cx, cy, radius + 14.0, deg_to_rad(end_angle));
            Some(view! {
                <g class="gauge-min-max">
                    <text
                        x=min_x
                        y=min_y + 12.0
                        text-anchor="middle"
                        fill=style.fill_or(colors::TEXT_FAINT)
                        font-size=style.font_size_or(12.0)
                    >
                        {format(reading.min())}
                    </text>
                    <text
                        x=max_x
                        y=max_y + 12.0
                        text-anchor="middle"
                        fill=style.fill_or(colors::TEXT_FAINT)
                        font-size=style.font_size_or(12.0)
                    >
                        {format(reading.max())}
                    </text>
                </g>
            })
        }
    };

    let label_style_view = label_style.clone();
    let value_style_view = value_style.clone();
    let caption_view = move || {
        let reading = data.get();
        let label_style = label_style_view.clone();
        let value_style = value_style_view.clone();
        let value_color = reading
            .value_color
            .clone()
            .unwrap_or_else(|| value_style.fill_or(colors::TEXT_VALUE));
        view! {
            <g class="gauge-caption">
                {show_values.then(|| view! {
                    <text
                        x=cx
                        y=cy + radius * 0.45
                        text-anchor="middle"
                        fill=value_color.clone()
                        font-size=value_style.font_size_or(24.0)
                        font-weight=value_style.font_weight_or("700")
                    >
                        {format(reading.clamped_value())}
                    </text>
                })}
                {show_labels.then(|| view! {
                    <text
                        x=cx
                        y=cy + radius * 0.45 + 22.0
                        text-anchor="middle"
                        fill=label_style.fill_or(colors::TEXT_LABEL)
                        font-size=label_style.font_size_or(16.0)
                        font-weight=label_style.font_weight_or("600")
                    >
                        {reading.label.clone()}
                    </text>
                })}
            </g>
        }
    };

    let center_label = config.center_label.clone();
    let center_style = config.center_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_LABEL).font_size(14.0).font_weight("600"),
    );
    let center_background = config.center_label_background.clone();
    let center_radius = config.center_label_border_radius;
    let center_view = move || {
        let text = center_label.clone()?;
        let extent = crate::labels::estimate_extent(&text, center_style.font_size_or(14.0));
        let box_width = extent.width + 16.0;
        Some(view! {
            <g class="gauge-center-label">
                <rect
                    x=cx - box_width / 2.0
                    y=cy - radius * 0.25 - extent.height
                    width=box_width
                    height=extent.height + 8.0
                    fill=center_background.clone()
                    rx=center_radius
                />
                <text
                    x=cx
                    y=cy - radius * 0.25
                    text-anchor="middle"
                    fill=center_style.fill_or(colors::TEXT_LABEL)
                    font-size=center_style.font_size_or(14.0)
                    font-weight=center_style.font_weight_or("600")
                >
                    {text.clone()}
                </text>
            </g>
        })
    };

    let value_fill = move || {
        data.with(|reading| {
            reading
                .color
                .clone()
                .unwrap_or_else(|| colors::by_index(0).to_string())
        })
    };
    let background_fill = move || {
        data.with(|reading| {
            reading
                .background_color
                .clone()
                .unwrap_or_else(|| colors::GRID.to_string())
        })
    };

    view! {
        <svg
            class="gauge-chart"
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: 100%;"
            on:click=move |_| {
                if let Some(handler) = on_press {
                    handler.run(data.get_untracked());
                }
            }
        >
            <path d=background_arc fill=background_fill />
            {sections_view}
            <path d=value_arc fill=value_fill />
            {ticks_view}
            <path d=needle_view fill=needle_color />
            <circle cx=cx cy=cy r=needle_base_size fill=needle_base_color />
            {min_max_view}
            {caption_view}
            {center_view}
        </svg>
    }
}
