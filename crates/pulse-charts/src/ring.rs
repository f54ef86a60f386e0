//! Concentric ring chart component
//!
//! Each data point renders as one ring: a full background circle plus a
//! value arc drawn with a stroke-dash pair. The entrance animation grows
//! the filled fraction from zero.

use crate::{
    animate::{AnimationDriver, Timeline},
    chartkit::ring_dash,
    labels::{
        ring_label_placement, ring_legend_entries, ring_value_placement, LabelPosition,
        LegendPosition, RingConnectorStyle, ValuePosition,
    },
    pie::legend_block,
};
use leptos::prelude::*;
use pulse_core::{colors, RingDataPoint, SharePercentFormatter, FractionFormatter, TextStyle};

/// Ring chart configuration
#[derive(Debug, Clone)]
pub struct RingChartConfig {
    pub width: f64,
    pub height: f64,
    pub ring_thickness: f64,
    pub ring_spacing: f64,
    pub show_labels: bool,
    pub show_values: bool,
    pub label_position: LabelPosition,
    pub value_position: ValuePosition,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub show_connecting_lines: bool,
    pub connecting_line_color: Option<String>,
    pub connecting_line_width: f64,
    pub connecting_line_style: RingConnectorStyle,
    pub show_legend: bool,
    pub legend_position: LegendPosition,
    pub legend_label_style: TextStyle,
    pub legend_item_background: String,
    pub legend_item_border_radius: f64,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for RingChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            ring_thickness: 20.0,
            ring_spacing: 10.0,
            show_labels: true,
            show_values: true,
            label_position: LabelPosition::Top,
            value_position: ValuePosition::WithLabel,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            show_connecting_lines: false,
            connecting_line_color: None,
            connecting_line_width: 1.0,
            connecting_line_style: RingConnectorStyle::Straight,
            show_legend: true,
            legend_position: LegendPosition::Bottom,
            legend_label_style: TextStyle::new(),
            legend_item_background: colors::white_alpha(0.9),
            legend_item_border_radius: 6.0,
            animated: true,
            animation_duration: 800.0,
        }
    }
}

#[derive(Clone)]
struct RingGeometry {
    item: RingDataPoint,
    index: usize,
    radius: f64,
    fraction: f64,
    full_color: String,
    empty_color: String,
}

/// Ring chart component
#[component]
pub fn RingChart(
    #[prop(into)] data: Signal<Vec<RingDataPoint>>,
    #[prop(optional)] config: Option<RingChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<(f64, f64), String>>,
    #[prop(optional, into)] on_ring_press: Option<Callback<(RingDataPoint, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;
    let thickness = config.ring_thickness;
    let spacing = config.ring_spacing;
    let show_labels = config.show_labels;
    let show_values = config.show_values;
    let label_position = config.label_position;
    let value_position = config.value_position;
    let show_connectors = config.show_connecting_lines;
    let connector_width = config.connecting_line_width;
    let connector_dasharray = match config.connecting_line_style {
        RingConnectorStyle::Dashed => Some("5,5"),
        RingConnectorStyle::Straight => None,
    };
    let connector_color = config
        .connecting_line_color
        .clone()
        .unwrap_or_else(|| colors::CONNECTOR.to_string());

    let (chart_width, chart_height, chart_origin) = match (config.show_legend, config.legend_position) {
        (false, _) => (width, height, (0.0, 0.0)),
        (true, LegendPosition::Bottom) => (width, height - 80.0, (0.0, 0.0)),
        (true, LegendPosition::Top) => (width, height - 80.0, (0.0, 80.0)),
        (true, LegendPosition::Left) => (width - 130.0, height, (130.0, 0.0)),
        (true, LegendPosition::Right) => (width - 130.0, height, (0.0, 0.0)),
    };
    let cx = chart_origin.0 + chart_width / 2.0;
    let cy = chart_origin.1 + chart_height / 2.0;

    let label_style = config.label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_LABEL).font_size(12.0).font_weight("600"),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(11.0).font_weight("400"),
    );

    let reveal = AnimationDriver::new(Timeline::new(config.animation_duration));
    reveal.restart_on_change(data, config.animated);

    let geometry = move || {
        let items = data.get();
        if items.is_empty() {
            tracing::warn!("empty ring data, nothing to render");
        }
        let available = chart_width.min(chart_height);
        let max_radius = (available / 2.0 - 40.0)
            .min(items.len() as f64 * (thickness + spacing) + 20.0)
            .max(thickness);

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| RingGeometry {
                radius: (max_radius - index as f64 * (thickness + spacing)).max(thickness / 2.0),
                fraction: item.fraction(),
                full_color: item
                    .full_color
                    .clone()
                    .unwrap_or_else(|| colors::by_index(index).to_string()),
                empty_color: item
                    .empty_color
                    .clone()
                    .unwrap_or_else(|| colors::GRID.to_string()),
                index,
                item,
            })
            .collect::<Vec<_>>()
    };

    let format = move |value: f64, total: f64| match value_formatter {
        Some(formatter) => formatter.run((value, total)),
        None => SharePercentFormatter.format(value, total),
    };

    let geometry_for_labels = geometry.clone();
    let rings_view = move || {
        geometry()
            .into_iter()
            .map(|ring| {
                let RingGeometry { item, index, radius, fraction, full_color, empty_color } = ring;
                let dash = move || ring_dash(radius, fraction * reveal.progress.get());

                view! {
                    <g class="ring">
                        <circle
                            cx=cx
                            cy=cy
                            r=radius
                            fill="none"
                            stroke=empty_color
                            stroke-width=thickness
                        />
                        <circle
                            cx=cx
                            cy=cy
                            r=radius
                            fill="none"
                            stroke=full_color
                            stroke-width=thickness
                            stroke-linecap="round"
                            stroke-dasharray=move || dash().dash_array
                            stroke-dashoffset=move || dash().dash_offset
                            transform=format!("rotate(-90 {} {})", cx, cy)
                            on:click=move |_| {
                                if let Some(handler) = on_ring_press {
                                    handler.run((item.clone(), index));
                                }
                            }
                        />
                    </g>
                }
            })
            .collect_view()
    };

    let label_style_for_labels = label_style.clone();
    let value_style_for_labels = value_style.clone();
    let connector_color_for_labels = connector_color.clone();
    let labels_view = move || {
        if !show_labels && !show_values {
            return None;
        }
        let label_style = label_style_for_labels.clone();
        let value_style = value_style_for_labels.clone();
        let value_font = value_style.font_size_or(11.0);

        let views = geometry_for_labels()
            .into_iter()
            .map(|ring| {
                let label = ring_label_placement(cx, cy, ring.radius, label_position, 20.0);
                let value = ring_value_placement(
                    cx,
                    cy,
                    ring.radius,
                    value_position,
                    &label,
                    value_font,
                    20.0,
                );
                let value_text = format(ring.item.value, ring.item.total);
                let label_text = ring.item.label.clone();
                let connector = label.connector.filter(|_| show_connectors);

                view! {
                    <g class="ring-label">
                        {connector.map(|line| view! {
                            <line
                                x1=line.x1
                                y1=line.y1
                                x2=line.x2
                                y2=line.y2
                                stroke=connector_color_for_labels.clone()
                                stroke-width=connector_width
                                stroke-dasharray=connector_dasharray.unwrap_or_default()
                            />
                        })}
                        {show_labels.then(|| view! {
                            <text
                                x=label.x
                                y=label.y
                                text-anchor=label.anchor.as_svg()
                                fill=label_style.fill_or(colors::TEXT_LABEL)
                                font-size=label_style.font_size_or(12.0)
                                font-weight=label_style.font_weight_or("600")
                            >
                                {label_text.clone()}
                            </text>
                        })}
                        {show_values.then(|| view! {
                            <text
                                x=value.x
                                y=value.y
                                text-anchor=value.anchor.as_svg()
                                fill=value_style.fill_or(colors::TEXT_VALUE)
                                font-size=value_font
                                font-weight=value_style.font_weight_or("400")
                            >
                                {value_text.clone()}
                            </text>
                        })}
                    </g>
                }
            })
            .collect_view();

        Some(views)
    };

    let show_legend = config.show_legend;
    let legend_position = config.legend_position;
    let legend_label_style = config.legend_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_DARK).font_size(12.0).font_weight("500"),
    );
    let legend_item_background = config.legend_item_background.clone();
    let legend_item_radius = config.legend_item_border_radius;

    let legend_view = move || {
        if !show_legend {
            return None;
        }
        let entries = ring_legend_entries(&data.get());
        Some(legend_block(
            entries,
            legend_position,
            width,
            height,
            legend_label_style.clone(),
            legend_item_background.clone(),
            legend_item_radius,
            move |item_index| {
                if let Some(handler) = on_ring_press {
                    if let Some(item) = data.get_untracked().get(item_index) {
                        handler.run((item.clone(), item_index));
                    }
                }
            },
        ))
    };

    view! {
        <svg
            class="ring-chart"
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: 100%;"
        >
            {rings_view}
            <g class="ring-labels" opacity=move || reveal.progress.get()>
                {labels_view}
            </g>
            {legend_view}
        </svg>
    }
}
