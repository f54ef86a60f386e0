//! Radar chart component
//!
//! Series polygons share a set of named category axes. Input is validated
//! before layout: every series must supply exactly one value per
//! category, otherwise the chart logs the mismatch and renders nothing
//! rather than drawing misaligned geometry.

use crate::{
    animate::{AnimationDriver, Timeline},
    chartkit::{normalize, points_attr, polar_point, radar_vertices, regular_polygon_points},
    labels::{LegendEntry, LegendPosition, TextAnchor},
    pie::legend_block,
};
use leptos::prelude::*;
use pulse_core::{
    colors, format_value, RadarChartData, RadarSeries, ShapeStyle, StrokeStyle, TextStyle,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Radar chart configuration
#[derive(Debug, Clone)]
pub struct RadarChartConfig {
    pub width: f64,
    pub height: f64,
    /// Explicit polygon radius; inferred from the chart size when unset.
    pub radius: Option<f64>,
    pub min_value: f64,
    pub max_value: Option<f64>,
    pub show_labels: bool,
    pub show_values: bool,
    pub show_axis: bool,
    pub show_polygons: bool,
    pub show_grid: bool,
    pub grid_levels: usize,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub axis_style: StrokeStyle,
    pub grid_style: StrokeStyle,
    pub polygon_style: ShapeStyle,
    pub dot_style: ShapeStyle,
    pub background_style: ShapeStyle,
    pub show_legend: bool,
    pub legend_position: LegendPosition,
    pub legend_label_style: TextStyle,
    pub legend_item_background: String,
    pub legend_item_border_radius: f64,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            radius: None,
            min_value: 0.0,
            max_value: None,
            show_labels: true,
            show_values: false,
            show_axis: true,
            show_polygons: true,
            show_grid: true,
            grid_levels: 5,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            axis_style: StrokeStyle::new(),
            grid_style: StrokeStyle::new(),
            polygon_style: ShapeStyle::new(),
            dot_style: ShapeStyle::new(),
            background_style: ShapeStyle::new(),
            show_legend: false,
            legend_position: LegendPosition::Bottom,
            legend_label_style: TextStyle::new(),
            legend_item_background: colors::SURFACE.to_string(),
            legend_item_border_radius: 6.0,
            animated: true,
            animation_duration: 1000.0,
        }
    }
}

#[derive(Clone)]
struct SeriesGeometry {
    series: RadarSeries,
    series_index: usize,
    /// One normalized value per category.
    normalized: Vec<f64>,
    stroke: String,
    fill: String,
}

/// Radar chart component
#[component]
pub fn RadarChart(
    #[prop(into)] data: Signal<RadarChartData>,
    #[prop(optional)] config: Option<RadarChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<f64, String>>,
    #[prop(optional, into)] on_point_press: Option<Callback<(RadarSeries, usize, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let chart_size = width.min(height);
    let radius = config.radius.unwrap_or(chart_size / 2.0 - 50.0).max(10.0);

    let min_value = config.min_value;
    let max_value = config.max_value;
    let show_labels = config.show_labels;
    let show_values = config.show_values;
    let show_axis = config.show_axis;
    let show_polygons = config.show_polygons;
    let show_grid = config.show_grid;
    let grid_levels = config.grid_levels.max(1);

    let label_style = config.label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_LABEL).font_size(12.0).font_weight("500"),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(11.0).font_weight("400"),
    );
    let axis_style = config.axis_style.merged_over(
        &StrokeStyle::new().stroke(colors::AXIS).stroke_width(1.0).stroke_opacity(0.7),
    );
    let grid_style = config.grid_style.merged_over(
        &StrokeStyle::new()
            .stroke(colors::GRID)
            .stroke_width(1.0)
            .stroke_opacity(0.5)
            .dasharray("4,4"),
    );
    let polygon_style = config.polygon_style.merged_over(
        &ShapeStyle {
            stroke: None,
            stroke_width: Some(2.0),
            stroke_opacity: Some(0.8),
            fill: None,
            fill_opacity: Some(0.2),
        },
    );
    let dot_style = config.dot_style.merged_over(
        &ShapeStyle {
            stroke: Some(colors::TEXT_LABEL.to_string()),
            stroke_width: Some(1.5),
            stroke_opacity: None,
            fill: Some(colors::OUTLINE.to_string()),
            fill_opacity: None,
        },
    );
    let background_style = config.background_style.merged_over(
        &ShapeStyle::new().fill(colors::SURFACE).fill_opacity(0.3),
    );

    let reveal = AnimationDriver::new(Timeline::new(config.animation_duration));
    reveal.restart_on_change(data, config.animated);

    // Validated geometry; a mismatched series count renders nothing
    let geometry = move || {
        let chart_data = data.get();
        if chart_data.is_empty() {
            return None;
        }
        if let Err(error) = chart_data.validate() {
            tracing::warn!("invalid radar data: {error}");
            return None;
        }

        let max = max_value
            .or_else(|| chart_data.max_value())
            .unwrap_or(1.0);

        let series_geometry: Vec<SeriesGeometry> = chart_data
            .series
            .iter()
            .enumerate()
            .map(|(series_index, series)| {
                let stroke = series
                    .color
                    .clone()
                    .unwrap_or_else(|| colors::by_index(series_index).to_string());
                SeriesGeometry {
                    fill: series.fill_color.clone().unwrap_or_else(|| stroke.clone()),
                    normalized: series
                        .values
                        .iter()
                        .map(|v| normalize(*v, min_value, max))
                        .collect(),
                    series: series.clone(),
                    series_index,
                    stroke,
                }
            })
            .collect();

        Some((chart_data.categories, series_geometry))
    };

    let format = move |value: f64| match value_formatter {
        Some(formatter) => formatter.run(value),
        None => format_value(value),
    };

    let axis_count = move || geometry().map(|(categories, _)| categories.len()).unwrap_or(0);

    let background_fill = background_style.fill_or(colors::SURFACE);
    let background_opacity = background_style.fill_opacity_or(0.3);
    let frame_view = move || {
        let n = axis_count();
        if n == 0 {
            return None;
        }

        let background = view! {
            <polygon
                points=points_attr(&regular_polygon_points(cx, cy, radius, n))
                fill=background_fill.clone()
                fill-opacity=background_opacity
            />
        };

        let grid = show_grid.then(|| {
            (1..=grid_levels)
                .map(|level| {
                    let level_radius = radius * level as f64 / grid_levels as f64;
                    view! {
                        <polygon
                            points=points_attr(&regular_polygon_points(cx, cy, level_radius, n))
                            fill="none"
                            stroke=grid_style.stroke_or(colors::GRID)
                            stroke-width=grid_style.width_or(1.0)
                            stroke-opacity=grid_style.opacity_or(0.5)
                            stroke-dasharray=grid_style.stroke_dasharray.clone().unwrap_or_default()
                        />
                    }
                })
                .collect_view()
        });

        let axes = show_axis.then(|| {
            (0..n)
                .map(|i| {
                    let angle = -FRAC_PI_2 + i as f64 * TAU / n as f64;
                    let (x2, y2) = polar_point(cx, cy, radius, angle);
                    view! {
                        <line
                            x1=cx
                            y1=cy
                            x2=x2
                            y2=y2
                            stroke=axis_style.stroke_or(colors::AXIS)
                            stroke-width=axis_style.width_or(1.0)
                            stroke-opacity=axis_style.opacity_or(0.7)
                        />
                    }
                })
                .collect_view()
        });

        Some(view! {
            <g class="radar-frame">
                {background}
                {grid}
                {axes}
            </g>
        })
    };

    let geometry_for_polygons = geometry.clone();
    let polygons_view = move || {
        if !show_polygons {
            return None;
        }
        geometry_for_polygons().map(|(_, series_geometry)| {
            series_geometry
                .into_iter()
                .map(|geom| {
                    let SeriesGeometry { series, series_index, normalized, stroke, fill } = geom;
                    let fill_opacity = series
                        .fill_opacity
                        .unwrap_or_else(|| polygon_style.fill_opacity_or(0.2));
                    let stroke_width = series
                        .stroke_width
                        .unwrap_or_else(|| polygon_style.stroke_width_or(2.0));
                    let show_dots = series.show_dots.unwrap_or(true);
                    let dot_size = series.dot_size.unwrap_or(3.5);
                    let dot_fill = series
                        .dot_color
                        .clone()
                        .unwrap_or_else(|| dot_style.fill_or(colors::OUTLINE));
                    let normalized_for_points = normalized.clone();
                    let points = move || {
                        let scaled: Vec<f64> = normalized
                            .iter()
                            .map(|v| v * reveal.progress.get())
                            .collect();
                        points_attr(&radar_vertices(cx, cy, radius, &scaled))
                    };

                    let dots = show_dots.then(|| {
                        normalized_for_points
                            .iter()
                            .enumerate()
                            .map(|(point_index, &v)| {
                                let angle = -FRAC_PI_2
                                    + point_index as f64 * TAU
                                        / normalized_for_points.len() as f64;
                                let press_series = series.clone();
                                let dot_stroke = stroke.clone();
                                let dot_fill = dot_fill.clone();
                                view! {
                                    <circle
                                        cx=move || {
                                            polar_point(
                                                cx, cy,
                                                radius * v * reveal.progress.get(),
                                                angle,
                                            ).0
                                        }
                                        cy=move || {
                                            polar_point(
                                                cx, cy,
                                                radius * v * reveal.progress.get(),
                                                angle,
                                            ).1
                                        }
                                        r=dot_size
                                        fill=dot_fill
                                        stroke=dot_stroke
                                        stroke-width=dot_style.stroke_width_or(1.5)
                                        on:click=move |_| {
                                            if let Some(handler) = on_point_press {
                                                handler.run((
                                                    press_series.clone(),
                                                    series_index,
                                                    point_index,
                                                ));
                                            }
                                        }
                                    />
                                }
                            })
                            .collect_view()
                    });

                    view! {
                        <g class="radar-series">
                            <polygon
                                points=points
                                fill=fill
                                fill-opacity=fill_opacity
                                stroke=stroke.clone()
                                stroke-width=stroke_width
                                stroke-opacity=polygon_style.stroke_opacity_or(0.8)
                            />
                            {dots}
                        </g>
                    }
                })
                .collect_view()
        })
    };

    let geometry_for_labels = geometry.clone();
    let label_style_view = label_style.clone();
    let value_style_view = value_style.clone();
    let labels_view = move || {
        if !show_labels && !show_values {
            return None;
        }
        let label_style = label_style_view.clone();
        let value_style = value_style_view.clone();

        geometry_for_labels().map(|(categories, series_geometry)| {
            let n = categories.len();
            let category_labels = show_labels.then(|| {
                categories
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        let angle = -FRAC_PI_2 + i as f64 * TAU / n as f64;
                        let (x, y) = polar_point(cx, cy, radius + 20.0, angle);
                        let anchor = if angle.cos().abs() > 0.7 {
                            if angle.cos() > 0.0 {
                                TextAnchor::Start
                            } else {
                                TextAnchor::End
                            }
                        } else {
                            TextAnchor::Middle
                        };
                        view! {
                            <text
                                x=x
                                y=y
                                dy="0.32em"
                                text-anchor=anchor.as_svg()
                                fill=label_style.fill_or(colors::TEXT_LABEL)
                                font-size=label_style.font_size_or(12.0)
                                font-weight=label_style.font_weight_or("500")
                            >
                                {category.clone()}
                            </text>
                        }
                    })
                    .collect_view()
            });

            let value_labels = show_values.then(|| {
                series_geometry
                    .iter()
                    .flat_map(|geom| {
                        let n = geom.normalized.len();
                        geom.normalized
                            .iter()
                            .enumerate()
                            .map(|(i, &v)| {
                                let angle = -FRAC_PI_2 + i as f64 * TAU / n as f64;
                                let (x, y) =
                                    polar_point(cx, cy, radius * v + 12.0, angle);
                                let text = format(geom.series.values[i]);
                                view! {
                                    <text
                                        x=x
                                        y=y
                                        text-anchor="middle"
                                        fill=value_style.fill_or(colors::TEXT_VALUE)
                                        font-size=value_style.font_size_or(11.0)
                                    >
                                        {text}
                                    </text>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                    .collect_view()
            });

            view! {
                <g class="radar-labels">
                    {category_labels}
                    {value_labels}
                </g>
            }
        })
    };

    let show_legend = config.show_legend;
    let legend_position = config.legend_position;
    let legend_label_style = config.legend_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_LABEL).font_size(12.0).font_weight("500"),
    );
    let legend_item_background = config.legend_item_background.clone();
    let legend_item_radius = config.legend_item_border_radius;

    let legend_view = move || {
        if !show_legend {
            return None;
        }
        // One plain entry per series, no percentage share
        let chart_data = data.get();
        let legend: Vec<LegendEntry> = chart_data
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| {
                LegendEntry::plain(
                    series.name.clone(),
                    series
                        .color
                        .clone()
                        .unwrap_or_else(|| colors::by_index(i).to_string()),
                )
            })
            .collect();
        Some(legend_block(
            legend,
            legend_position,
            width,
            height,
            legend_label_style.clone(),
            legend_item_background.clone(),
            legend_item_radius,
            |_| {},
        ))
    };

    view! {
        <svg
            class="radar-chart"
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: 100%;"
        >
            {frame_view}
            {polygons_view}
            <g class="radar-label-layer" opacity=move || reveal.progress.get()>
                {labels_view}
            </g>
            {legend_view}
        </svg>
    }
}
