//! Line chart component
//!
//! Samples are spaced evenly across the plot width; the y scale is
//! inferred from the data unless an explicit range is supplied. Supports
//! straight, smoothed and stepped paths, an optional filled area with a
//! gradient, grid lines and both axes. The entrance animation lifts the
//! line out of the baseline.

use crate::{
    animate::{AnimationDriver, Timeline},
    chartkit::{
        area_path, infer_domain, line_path, NaturalPath, PathGenerator, Scale, LinearScale,
        StepPath,
    },
    ChartDimensions, ChartMargin,
};
use leptos::prelude::*;
use pulse_core::{colors, format_value, LineDataPoint, TextStyle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Interpolation between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveType {
    #[default]
    Linear,
    Natural,
    Step,
}

/// Explicit axis range; unset bounds are inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Line chart configuration
#[derive(Debug, Clone)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub line_width: f64,
    pub curve_type: CurveType,
    pub show_area: bool,
    pub area_opacity: f64,
    pub show_gradient: bool,
    pub gradient_colors: Vec<String>,
    pub show_dots: bool,
    pub dot_size: f64,
    pub show_labels: bool,
    pub show_values: bool,
    pub show_grid: bool,
    pub grid_color: String,
    pub grid_opacity: f64,
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    pub y_axis_range: AxisRange,
    pub show_y_axis: bool,
    pub show_x_axis: bool,
    pub y_axis_width: f64,
    pub x_axis_height: f64,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub y_axis_label_style: TextStyle,
    pub x_axis_label_style: TextStyle,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            line_width: 2.0,
            curve_type: CurveType::Linear,
            show_area: false,
            area_opacity: 0.2,
            show_gradient: false,
            gradient_colors: Vec::new(),
            show_dots: true,
            dot_size: 4.0,
            show_labels: true,
            show_values: false,
            show_grid: true,
            grid_color: colors::GRID.to_string(),
            grid_opacity: 0.5,
            horizontal_lines: 5,
            vertical_lines: 0,
            y_axis_range: AxisRange::default(),
            show_y_axis: true,
            show_x_axis: true,
            y_axis_width: 40.0,
            x_axis_height: 30.0,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            y_axis_label_style: TextStyle::new(),
            x_axis_label_style: TextStyle::new(),
            animated: true,
            animation_duration: 800.0,
        }
    }
}

static GRADIENT_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Line chart component
#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<Vec<LineDataPoint>>,
    #[prop(optional)] config: Option<LineChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<f64, String>>,
    #[prop(optional, into)] on_point_press: Option<Callback<(LineDataPoint, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;

    let dims = ChartDimensions::new(width, height).with_margin(ChartMargin::axes(
        if config.show_y_axis { config.y_axis_width } else { 10.0 },
        if config.show_x_axis { config.x_axis_height } else { 10.0 },
    ));
    let plot_width = dims.inner_width();
    let plot_height = dims.inner_height();
    let padding_horizontal = 10.0;

    let curve_type = config.curve_type;
    let line_width = config.line_width;
    let show_area = config.show_area;
    let area_opacity = config.area_opacity;
    let show_dots = config.show_dots;
    let dot_size = config.dot_size;
    let show_labels = config.show_labels;
    let show_values = config.show_values;
    let show_grid = config.show_grid;
    let grid_color = config.grid_color.clone();
    let grid_opacity = config.grid_opacity;
    let horizontal_lines = config.horizontal_lines.max(2);
    let vertical_lines = config.vertical_lines;
    let y_range = config.y_axis_range;
    let show_y_axis = config.show_y_axis;
    let show_x_axis = config.show_x_axis;

    let show_gradient = config.show_gradient && !config.gradient_colors.is_empty();
    let gradient_colors = config.gradient_colors.clone();
    let gradient_id = format!(
        "line-gradient-{}",
        GRADIENT_SEQ.fetch_add(1, Ordering::Relaxed)
    );

    let label_style = config.x_axis_label_style.merged_over(
        &config
            .label_style
            .merged_over(&TextStyle::new().fill(colors::TEXT_LABEL).font_size(10.0).font_weight("400")),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(10.0).font_weight("400"),
    );
    let y_axis_style = config.y_axis_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_FAINT).font_size(10.0).font_weight("400"),
    );

    let reveal = AnimationDriver::new(Timeline::new(config.animation_duration));
    reveal.restart_on_change(data, config.animated);

    // Points at full reveal plus the scale used for axis ticks
    let geometry = move || {
        let items = data.get();
        if items.is_empty() {
            tracing::warn!("empty line data, nothing to render");
            return None;
        }

        let (min, max) = infer_domain(items.iter().map(|d| d.value), y_range.min, y_range.max);
        let y_scale = LinearScale::new()
            .domain(min, max)
            .range(plot_height, 0.0)
            .clamp(true);

        let x_step = if items.len() > 1 {
            (plot_width - padding_horizontal * 2.0) / (items.len() - 1) as f64
        } else {
            0.0
        };

        let points: Vec<(f64, f64)> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                (
                    padding_horizontal + i as f64 * x_step,
                    y_scale.scale(item.value),
                )
            })
            .collect();

        Some((items, points, y_scale))
    };

    let format = move |value: f64| match value_formatter {
        Some(formatter) => formatter.run(value),
        None => format_value(value),
    };

    // Vertical reveal: every y grows out of the baseline with progress
    let lift = move |y: f64| plot_height - (plot_height - y) * reveal.progress.get();

    let geometry_for_paths = geometry.clone();
    let gradient_fill_id = gradient_id.clone();
    let paths_view = move || {
        geometry_for_paths().map(|(items, points, _)| {
            let lifted: Vec<(f64, f64)> =
                points.iter().map(|&(x, y)| (x, lift(y))).collect();

            let stroke = items
                .first()
                .and_then(|d| d.color.clone())
                .unwrap_or_else(|| colors::by_index(0).to_string());

            let line = match curve_type {
                CurveType::Linear => line_path(&lifted),
                CurveType::Natural => NaturalPath.generate(&lifted),
                CurveType::Step => StepPath::default().generate(&lifted),
            };

            let area = show_area.then(|| area_path(&lifted, plot_height));
            let area_fill = if show_gradient {
                format!("url(#{})", gradient_fill_id)
            } else {
                stroke.clone()
            };

            view! {
                <g class="line-series">
                    {area.map(|d| view! {
                        <path d=d fill=area_fill.clone() opacity=area_opacity />
                    })}
                    <path
                        d=line
                        fill="none"
                        stroke=stroke
                        stroke-width=line_width
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </g>
            }
        })
    };

    let geometry_for_dots = geometry.clone();
    let value_style_for_dots = value_style.clone();
    let dots_view = move || {
        if !show_dots && !show_values {
            return None;
        }
        let value_style = value_style_for_dots.clone();
        geometry_for_dots().map(|(items, points, _)| {
            items
                .into_iter()
                .zip(points)
                .enumerate()
                .map(|(index, (item, (x, y)))| {
                    let radius = item.dot_size.unwrap_or(dot_size);
                    let fill = item
                        .dot_color
                        .clone()
                        .or_else(|| item.color.clone())
                        .unwrap_or_else(|| colors::by_index(0).to_string());
                    let visible = item.show_dot.unwrap_or(true) && show_dots;
                    let value_text = format(item.value);
                    let press_item = item.clone();

                    view! {
                        <g class="line-point">
                            {visible.then(|| view! {
                                <circle
                                    cx=x
                                    cy=move || lift(y)
                                    r=radius
                                    fill=fill.clone()
                                    stroke=colors::OUTLINE
                                    stroke-width=1.5
                                    on:click=move |_| {
                                        if let Some(handler) = on_point_press {
                                            handler.run((press_item.clone(), index));
                                        }
                                    }
                                />
                            })}
                            {show_values.then(|| view! {
                                <text
                                    x=x
                                    y=move || lift(y) - radius - 4.0
                                    text-anchor="middle"
                                    fill=value_style.fill_or(colors::TEXT_VALUE)
                                    font-size=value_style.font_size_or(10.0)
                                >
                                    {value_text.clone()}
                                </text>
                            })}
                        </g>
                    }
                })
                .collect_view()
        })
    };

    let grid_view = move || {
        if !show_grid {
            return None;
        }
        let h_lines = (0..horizontal_lines).map(|i| {
            let y = plot_height * i as f64 / (horizontal_lines - 1) as f64;
            view! {
                <line
                    x1=0.0
                    y1=y
                    x2=plot_width
                    y2=y
                    stroke=grid_color.clone()
                    stroke-opacity=grid_opacity
                    stroke-width=1.0
                    stroke-dasharray="2,2"
                />
            }
        });
        let v_lines = (0..vertical_lines).map(|i| {
            let x = plot_width * (i + 1) as f64 / (vertical_lines + 1) as f64;
            view! {
                <line
                    x1=x
                    y1=0.0
                    x2=x
                    y2=plot_height
                    stroke=grid_color.clone()
                    stroke-opacity=grid_opacity
                    stroke-width=1.0
                    stroke-dasharray="2,2"
                />
            }
        });
        Some(
            view! {
                <g class="chart-grid">
                    {h_lines.collect_view()}
                    {v_lines.collect_view()}
                </g>
            },
        )
    };

    let geometry_for_y_axis = geometry.clone();
    let y_axis_style_view = y_axis_style.clone();
    let y_axis_view = move || {
        if !show_y_axis {
            return None;
        }
        let style = y_axis_style_view.clone();
        geometry_for_y_axis().map(|(_, _, y_scale)| {
            let (min, max) = y_scale.domain_bounds();
            let ticks = (0..horizontal_lines).map(move |i| {
                let fraction = i as f64 / (horizontal_lines - 1) as f64;
                let value = max - (max - min) * fraction;
                let y = plot_height * fraction;
                let text = format(value);
                view! {
                    <text
                        x=-8.0
                        y=y
                        dy="0.32em"
                        text-anchor="end"
                        fill=style.fill_or(colors::TEXT_FAINT)
                        font-size=style.font_size_or(10.0)
                    >
                        {text}
                    </text>
                }
            });
            view! {
                <g class="y-axis">
                    <line
                        x1=0.0
                        y1=0.0
                        x2=0.0
                        y2=plot_height
                        stroke=colors::AXIS
                        stroke-width=1.0
                    />
                    {ticks.collect_view()}
                </g>
            }
        })
    };

    let geometry_for_x_axis = geometry.clone();
    let label_style_view = label_style.clone();
    let x_axis_view = move || {
        if !show_x_axis || !show_labels {
            return None;
        }
        let style = label_style_view.clone();
        geometry_for_x_axis().map(|(items, points, _)| {
            let labels = items
                .into_iter()
                .zip(points)
                .map(|(item, (x, _))| {
                    let style = style.clone();
                    view! {
                        <text
                            x=x
                            y=plot_height + 16.0
                            text-anchor="middle"
                            fill=style.fill_or(colors::TEXT_LABEL)
                            font-size=style.font_size_or(10.0)
                        >
                            {item.label.clone()}
                        </text>
                    }
                })
                .collect_view();
            view! {
                <g class="x-axis">
                    <line
                        x1=0.0
                        y1=plot_height
                        x2=plot_width
                        y2=plot_height
                        stroke=colors::AXIS
                        stroke-width=1.0
                    />
                    {labels}
                </g>
            }
        })
    };

    let gradient_defs = show_gradient.then(|| {
        let stops = gradient_colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let offset = if gradient_colors.len() > 1 {
                    i as f64 / (gradient_colors.len() - 1) as f64 * 100.0
                } else {
                    0.0
                };
                view! {
                    <stop offset=format!("{}%", offset) stop-color=color.clone() />
                }
            })
            .collect_view();
        let id = gradient_id.clone();
        view! {
            <defs>
                <linearGradient id=id x1="0" y1="0" x2="0" y2="1">
                    {stops}
                </linearGradient>
            </defs>
        }
    });

    view! {
        <svg
            class="line-chart"
            viewBox=dims.viewbox()
            style="width: 100%; height: 100%;"
        >
            {gradient_defs}
            <g transform=dims.inner_transform()>
                {grid_view}
                {paths_view}
                {dots_view}
                {y_axis_view}
                {x_axis_view}
            </g>
        </svg>
    }
}
