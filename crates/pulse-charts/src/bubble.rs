//! Bubble chart component
//!
//! Three-dimensional points: x/y position inside a Cartesian plot plus a
//! magnitude mapped onto the bubble radius. Axis domains are inferred
//! from the data unless explicit ranges are supplied; out-of-range points
//! clamp to the plot edge. Bubbles grow in with per-item animation.

use crate::{
    animate::{StaggerDriver, Timeline},
    chartkit::{infer_domain, normalize, LinearScale, Scale},
    line::AxisRange,
    ChartDimensions, ChartMargin,
};
use leptos::prelude::*;
use pulse_core::{colors, format_bubble, BubbleDataPoint, TextStyle};

/// Bubble radius bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self { min: 10.0, max: 50.0 }
    }
}

/// Bubble chart configuration
#[derive(Debug, Clone)]
pub struct BubbleChartConfig {
    pub width: f64,
    pub height: f64,
    pub show_labels: bool,
    pub show_values: bool,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub x_axis_range: AxisRange,
    pub y_axis_range: AxisRange,
    pub size_range: SizeRange,
    pub show_grid: bool,
    pub grid_color: String,
    pub grid_opacity: f64,
    pub horizontal_lines: usize,
    pub vertical_lines: usize,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub x_axis_label_style: TextStyle,
    pub y_axis_label_style: TextStyle,
    pub bubble_opacity: f64,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for BubbleChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            show_labels: true,
            show_values: false,
            x_axis_title: None,
            y_axis_title: None,
            x_axis_range: AxisRange::default(),
            y_axis_range: AxisRange::default(),
            size_range: SizeRange::default(),
            show_grid: true,
            grid_color: colors::GRID.to_string(),
            grid_opacity: 0.5,
            horizontal_lines: 5,
            vertical_lines: 5,
            show_x_axis: true,
            show_y_axis: true,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            x_axis_label_style: TextStyle::new(),
            y_axis_label_style: TextStyle::new(),
            bubble_opacity: 0.75,
            animated: true,
            animation_duration: 800.0,
        }
    }
}

#[derive(Clone)]
struct BubbleGeometry {
    item: BubbleDataPoint,
    index: usize,
    x: f64,
    y: f64,
    radius: f64,
    fill: String,
}

/// Bubble chart component
#[component]
pub fn BubbleChart(
    #[prop(into)] data: Signal<Vec<BubbleDataPoint>>,
    #[prop(optional)] config: Option<BubbleChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<(f64, f64, f64), String>>,
    #[prop(optional, into)] on_bubble_press: Option<Callback<(BubbleDataPoint, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;

    let dims = ChartDimensions::new(width, height).with_margin(ChartMargin::new(
        20.0,
        10.0,
        if config.show_x_axis { 40.0 } else { 10.0 },
        if config.show_y_axis { 40.0 } else { 10.0 },
    ));
    let plot_width = dims.inner_width();
    let plot_height = dims.inner_height();

    let show_labels = config.show_labels;
    let show_values = config.show_values;
    let show_grid = config.show_grid;
    let grid_color = config.grid_color.clone();
    let grid_opacity = config.grid_opacity;
    let horizontal_lines = config.horizontal_lines.max(1);
    let vertical_lines = config.vertical_lines.max(1);
    let show_x_axis = config.show_x_axis;
    let show_y_axis = config.show_y_axis;
    let x_range = config.x_axis_range;
    let y_range = config.y_axis_range;
    let size_range = config.size_range;
    let bubble_opacity = config.bubble_opacity;

    let label_style = config.label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_LABEL).font_size(11.0).font_weight("500"),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(10.0).font_weight("400"),
    );
    let x_axis_style = config.x_axis_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_FAINT).font_size(10.0).font_weight("400"),
    );
    let y_axis_style = config.y_axis_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_FAINT).font_size(10.0).font_weight("400"),
    );

    let reveal = StaggerDriver::new(Timeline::new(config.animation_duration), 0.0);
    reveal.restart_on_change(data, config.animated);

    // Domains plus placed bubbles at full reveal
    let geometry = move || {
        let items = data.get();
        if items.is_empty() {
            tracing::warn!("empty bubble data, nothing to render");
            return None;
        }

        let (min_x, max_x) =
            infer_domain(items.iter().map(|d| d.x), x_range.min, x_range.max);
        let (min_y, max_y) =
            infer_domain(items.iter().map(|d| d.y), y_range.min, y_range.max);
        let (min_size, max_size) = infer_domain(items.iter().map(|d| d.size), None, None);

        let x_scale = LinearScale::new()
            .domain(min_x, max_x)
            .range(0.0, plot_width)
            .clamp(true);
        let y_scale = LinearScale::new()
            .domain(min_y, max_y)
            .range(plot_height, 0.0)
            .clamp(true);

        let bubbles: Vec<BubbleGeometry> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let size_fraction = normalize(item.size, min_size, max_size);
                BubbleGeometry {
                    x: x_scale.scale(item.x),
                    y: y_scale.scale(item.y),
                    radius: size_range.min + size_fraction * (size_range.max - size_range.min),
                    fill: item
                        .color
                        .clone()
                        .unwrap_or_else(|| colors::by_index(index).to_string()),
                    index,
                    item,
                }
            })
            .collect();

        Some((bubbles, (min_x, max_x), (min_y, max_y)))
    };

    let format = move |x: f64, y: f64, size: f64| match value_formatter {
        Some(formatter) => formatter.run((x, y, size)),
        None => format_bubble(x, y, size),
    };

    let grid_view = move || {
        if !show_grid {
            return None;
        }
        let h_lines = (0..=horizontal_lines).map(|i| {
            let y = plot_height * i as f64 / horizontal_lines as f64;
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
        let v_lines = (0..=vertical_lines).map(|i| {
            let x = plot_width * i as f64 / vertical_lines as f64;
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

    let geometry_for_bubbles = geometry.clone();
    let label_style_view = label_style.clone();
    let value_style_view = value_style.clone();
    let bubbles_view = move || {
        let label_style = label_style_view.clone();
        let value_style = value_style_view.clone();
        geometry_for_bubbles().map(|(bubbles, _, _)| {
            bubbles
                .into_iter()
                .map(|bubble| {
                    let BubbleGeometry { item, index, x, y, radius, fill } = bubble;
                    let border_color = item
                        .border_color
                        .clone()
                        .unwrap_or_else(|| colors::OUTLINE.to_string());
                    let border_width = item.border_width.unwrap_or(1.5);
                    let label_text = item.label.clone();
                    let value_text = format(item.x, item.y, item.size);
                    let press_item = item.clone();

                    view! {
                        <g class="bubble">
                            <circle
                                cx=x
                                cy=y
                                r=move || radius * reveal.progress(index)
                                fill=fill
                                fill-opacity=bubble_opacity
                                stroke=border_color
                                stroke-width=border_width
                                on:click=move |_| {
                                    if let Some(handler) = on_bubble_press {
                                        handler.run((press_item.clone(), index));
                                    }
                                }
                            />
                            {show_labels.then(|| view! {
                                <text
                                    x=x
                                    y=move || y + radius * reveal.progress(index) + 12.0
                                    text-anchor="middle"
                                    fill=label_style.fill_or(colors::TEXT_LABEL)
                                    font-size=label_style.font_size_or(11.0)
                                    font-weight=label_style.font_weight_or("500")
                                >
                                    {label_text.clone()}
                                </text>
                            })}
                            {show_values.then(|| view! {
                                <text
                                    x=x
                                    y=move || y - radius * reveal.progress(index) - 6.0
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

    let geometry_for_x_axis = geometry.clone();
    let x_axis_style_view = x_axis_style.clone();
    let x_axis_title = config.x_axis_title.clone();
    let x_axis_view = move || {
        if !show_x_axis {
            return None;
        }
        let style = x_axis_style_view.clone();
        let title = x_axis_title.clone();
        geometry_for_x_axis().map(|(_, (min_x, max_x), _)| {
            let ticks = (0..=vertical_lines).map(move |i| {
                let fraction = i as f64 / vertical_lines as f64;
                let value = min_x + (max_x - min_x) * fraction;
                let x = plot_width * fraction;
                let text = pulse_core::format_value((value * 10.0).round() / 10.0);
                let style = style.clone();
                view! {
                    <text
                        x=x
                        y=plot_height + 16.0
                        text-anchor="middle"
                        fill=style.fill_or(colors::TEXT_FAINT)
                        font-size=style.font_size_or(10.0)
                    >
                        {text}
                    </text>
                }
            });
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
                    {ticks.collect_view()}
                    {title.map(|t| view! {
                        <text
                            x=plot_width / 2.0
                            y=plot_height + 32.0
                            text-anchor="middle"
                            fill=colors::TEXT_LABEL
                            font-size=11.0
                            font-weight="500"
                        >
                            {t}
                        </text>
                    })}
                </g>
            }
        })
    };

    let geometry_for_y_axis = geometry.clone();
    let y_axis_style_view = y_axis_style.clone();
    let y_axis_title = config.y_axis_title.clone();
    let y_axis_view = move || {
        if !show_y_axis {
            return None;
        }
        let style = y_axis_style_view.clone();
        let title = y_axis_title.clone();
        geometry_for_y_axis().map(|(_, _, (min_y, max_y))| {
            let ticks = (0..=horizontal_lines).map(move |i| {
                let fraction = i as f64 / horizontal_lines as f64;
                let value = max_y - (max_y - min_y) * fraction;
                let y = plot_height * fraction;
                let text = pulse_core::format_value((value * 10.0).round() / 10.0);
                let style = style.clone();
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
                    {title.map(|t| view! {
                        <text
                            x=-28.0
                            y=plot_height / 2.0
                            text-anchor="middle"
                            transform=format!("rotate(-90 {} {})", -28.0, plot_height / 2.0)
                            fill=colors::TEXT_LABEL
                            font-size=11.0
                            font-weight="500"
                        >
                            {t}
                        </text>
                    })}
                </g>
            }
        })
    };

    view! {
        <svg
            class="bubble-chart"
            viewBox=dims.viewbox()
            style="width: 100%; height: 100%;"
        >
            <g transform=dims.inner_transform()>
                {grid_view}
                {bubbles_view}
                {x_axis_view}
                {y_axis_view}
            </g>
        </svg>
    }
}
