//! Vertical bar chart component

use crate::{
    animate::{StaggerDriver, Timeline},
    chartkit::normalize,
};
use leptos::prelude::*;
use pulse_core::{colors, fallback_non_empty, format_value, DataPoint, TextStyle};

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    pub bar_width: f64,
    pub spacing: f64,
    pub corner_radius: f64,
    pub show_values: bool,
    pub show_labels: bool,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 200.0,
            bar_width: 30.0,
            spacing: 10.0,
            corner_radius: 4.0,
            show_values: true,
            show_labels: true,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            animated: true,
            animation_duration: 500.0,
        }
    }
}

#[derive(Clone)]
struct BarGeometry {
    item: DataPoint,
    index: usize,
    x: f64,
    full_height: f64,
    fill: String,
}

/// Bar chart component
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<DataPoint>>,
    #[prop(optional)] config: Option<BarChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<f64, String>>,
    #[prop(optional, into)] on_bar_press: Option<Callback<(DataPoint, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;
    let bar_width = config.bar_width;
    let spacing = config.spacing;
    let corner_radius = config.corner_radius;
    let show_values = config.show_values;
    let show_labels = config.show_labels;

    let label_style = config.label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_LABEL).font_size(12.0).font_weight("500"),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(11.0).font_weight("400"),
    );

    // Bottom strip reserved for category labels
    let label_height = if show_labels { 24.0 } else { 8.0 };
    let value_clearance = if show_values { 16.0 } else { 4.0 };
    let plot_height = (height - label_height - value_clearance).max(0.0);
    let baseline_y = value_clearance + plot_height;

    let reveal = StaggerDriver::new(Timeline::new(config.animation_duration), 0.0);
    reveal.restart_on_change(data, config.animated);

    let bars = move || {
        let items = fallback_non_empty(&data.get());
        let max = items.iter().map(|d| d.value).fold(0.0_f64, f64::max);

        let total_width = items.len() as f64 * (bar_width + spacing) - spacing;
        let start_x = ((width - total_width) / 2.0).max(0.0);

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let fraction = normalize(item.value, 0.0, max);
                BarGeometry {
                    fill: item.fill_color(index),
                    x: start_x + index as f64 * (bar_width + spacing),
                    full_height: fraction * plot_height,
                    index,
                    item,
                }
            })
            .collect::<Vec<_>>()
    };

    let format = move |value: f64| match value_formatter {
        Some(formatter) => formatter.run(value),
        None => format_value(value),
    };

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: 100%;"
        >
            {move || {
                bars()
                    .into_iter()
                    .map(|bar| {
                        let BarGeometry { item, index, x, full_height, fill } = bar;
                        let center_x = x + bar_width / 2.0;
                        let press_item = item.clone();
                        let value_text = format(item.value);
                        let label_text = item.label.clone();

                        view! {
                            <g class="bar">
                                <rect
                                    x=x
                                    y=move || baseline_y - full_height * reveal.progress(index)
                                    width=bar_width
                                    height=move || full_height * reveal.progress(index)
                                    fill=fill
                                    rx=corner_radius
                                    on:click=move |_| {
                                        if let Some(handler) = on_bar_press {
                                            handler.run((press_item.clone(), index));
                                        }
                                    }
                                />

                                {show_values.then(|| view! {
                                    <text
                                        x=center_x
                                        y=move || {
                                            baseline_y - full_height * reveal.progress(index) - 4.0
                                        }
                                        text-anchor="middle"
                                        fill=value_style.fill_or(colors::TEXT_VALUE)
                                        font-size=value_style.font_size_or(11.0)
                                        font-weight=value_style.font_weight_or("400")
                                    >
                                        {value_text.clone()}
                                    </text>
                                })}

                                {show_labels.then(|| view! {
                                    <text
                                        x=center_x
                                        y=height - 8.0
                                        text-anchor="middle"
                                        fill=label_style.fill_or(colors::TEXT_LABEL)
                                        font-size=label_style.font_size_or(12.0)
                                        font-weight=label_style.font_weight_or("500")
                                    >
                                        {label_text.clone()}
                                    </text>
                                })}
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}
