//! Percentage bar chart component
//!
//! Horizontal rows, one per category: a color swatch, the label, the
//! formatted value with its share of the total, and a proportional bar.

use crate::animate::{StaggerDriver, Timeline};
use leptos::prelude::*;
use pulse_core::{colors, fallback_non_empty, format_value, DataPoint, TextStyle};

/// Percentage bar chart configuration
#[derive(Debug, Clone)]
pub struct PercentageBarChartConfig {
    pub width: f64,
    pub height: f64,
    pub row_gap: f64,
    pub bar_height: f64,
    pub swatch_size: f64,
    pub text_column_width: f64,
    pub show_labels: bool,
    pub show_values: bool,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for PercentageBarChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            row_gap: 8.0,
            bar_height: 10.0,
            swatch_size: 12.0,
            text_column_width: 140.0,
            show_labels: true,
            show_values: true,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            animated: true,
            animation_duration: 500.0,
        }
    }
}

#[derive(Clone)]
struct RowGeometry {
    item: DataPoint,
    index: usize,
    y: f64,
    fraction: f64,
    fill: String,
}

/// Percentage bar chart component
#[component]
pub fn PercentageBarChart(
    #[prop(into)] data: Signal<Vec<DataPoint>>,
    #[prop(optional)] config: Option<PercentageBarChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<f64, String>>,
    #[prop(optional, into)] on_slice_press: Option<Callback<(DataPoint, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;
    let row_gap = config.row_gap;
    let bar_height = config.bar_height;
    let swatch_size = config.swatch_size;
    let text_column = config.text_column_width;
    let show_labels = config.show_labels;
    let show_values = config.show_values;

    let label_style = config.label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_DARK).font_size(12.0).font_weight("500"),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_MUTED).font_size(11.0).font_weight("400"),
    );

    let reveal = StaggerDriver::new(Timeline::new(config.animation_duration), 0.0);
    reveal.restart_on_change(data, config.animated);

    let rows = move || {
        let items = fallback_non_empty(&data.get());
        let total: f64 = items.iter().map(|d| d.value.max(0.0)).sum();
        let row_height = (height - row_gap * (items.len() as f64 - 1.0)) / items.len() as f64;

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| RowGeometry {
                fill: item.fill_color(index),
                y: index as f64 * (row_height + row_gap),
                fraction: if total > 0.0 { item.value.max(0.0) / total } else { 0.0 },
                index,
                item,
            })
            .collect::<Vec<_>>()
    };

    let format = move |value: f64| match value_formatter {
        Some(formatter) => formatter.run(value),
        None => format_value(value),
    };

    let bar_span = (width - text_column - swatch_size - 16.0).max(0.0);

    view! {
        <svg
            class="percentage-bar-chart"
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: 100%;"
        >
            {move || {
                rows()
                    .into_iter()
                    .map(|row| {
                        let RowGeometry { item, index, y, fraction, fill } = row;
                        let press_item = item.clone();
                        let swatch_fill = fill.clone();
                        let label_text = item.label.clone();
                        let value_text = format!(
                            "{} ({}%)",
                            format(item.value),
                            (fraction * 100.0).round() as i64
                        );
                        let text_x = swatch_size + 8.0;
                        let bar_x = swatch_size + 8.0 + text_column;
                        let bar_y = y + swatch_size / 2.0 - bar_height / 2.0;

                        view! {
                            <g
                                class="percentage-row"
                                on:click=move |_| {
                                    if let Some(handler) = on_slice_press {
                                        handler.run((press_item.clone(), index));
                                    }
                                }
                            >
                                <rect
                                    x=0.0
                                    y=y
                                    width=swatch_size
                                    height=swatch_size
                                    fill=swatch_fill
                                    rx=3.0
                                />

                                {show_labels.then(|| view! {
                                    <text
                                        x=text_x
                                        y=y + swatch_size - 2.0
                                        fill=label_style.fill_or(colors::TEXT_DARK)
                                        font-size=label_style.font_size_or(12.0)
                                        font-weight=label_style.font_weight_or("500")
                                    >
                                        {label_text.clone()}
                                    </text>
                                })}

                                {show_values.then(|| view! {
                                    <text
                                        x=text_x
                                        y=y + swatch_size + 12.0
                                        fill=value_style.fill_or(colors::TEXT_MUTED)
                                        font-size=value_style.font_size_or(11.0)
                                        font-weight=value_style.font_weight_or("400")
                                    >
                                        {value_text.clone()}
                                    </text>
                                })}

                                <rect
                                    x=bar_x
                                    y=bar_y
                                    width=move || bar_span * fraction * reveal.progress(index)
                                    height=bar_height
                                    fill=fill.clone()
                                    rx=bar_height / 2.0
                                />
                            </g>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}
