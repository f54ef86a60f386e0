//! Contribution heatmap component
//!
//! GitHub-style activity calendar: one cell per day over a rolling window
//! of N weeks ending today, bucketed by `calendar::organize_by_week`.
//! Cells fade in with a staggered per-cell reveal; tapping a cell shows a
//! tooltip and reports the day to the caller.

use crate::{
    animate::{StaggerDriver, Timeline},
    calendar::{color_for_value, month_labels, organize_by_week, ContributionGrid, DAY_LABELS},
};
use chrono::NaiveDate;
use leptos::prelude::*;
use pulse_core::{colors, format_contribution, ContributionDataPoint, TextStyle};

/// Contribution chart configuration
#[derive(Debug, Clone)]
pub struct ContributionChartConfig {
    pub width: f64,
    pub height: f64,
    pub cell_size: f64,
    pub cell_spacing: f64,
    pub cell_border_radius: f64,
    pub weeks_to_show: usize,
    pub empty_color: String,
    pub color_scale: Vec<String>,
    pub thresholds: Vec<f64>,
    pub show_month_labels: bool,
    pub show_day_labels: bool,
    pub show_tooltip: bool,
    pub month_label_style: TextStyle,
    pub day_label_style: TextStyle,
    pub tooltip_style: TextStyle,
    /// Window end; today when unset.
    pub end_date: Option<NaiveDate>,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for ContributionChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 200.0,
            cell_size: 14.0,
            cell_spacing: 2.0,
            cell_border_radius: 2.0,
            weeks_to_show: 52,
            empty_color: colors::CELL_EMPTY.to_string(),
            color_scale: colors::CELL_SCALE.iter().map(|c| c.to_string()).collect(),
            thresholds: vec![1.0, 5.0, 10.0],
            show_month_labels: true,
            show_day_labels: true,
            show_tooltip: true,
            month_label_style: TextStyle::new(),
            day_label_style: TextStyle::new(),
            tooltip_style: TextStyle::new(),
            end_date: None,
            animated: true,
            animation_duration: 800.0,
        }
    }
}

/// Contribution chart component
#[component]
pub fn ContributionChart(
    #[prop(into)] data: Signal<Vec<ContributionDataPoint>>,
    #[prop(optional)] config: Option<ContributionChartConfig>,
    #[prop(optional, into)] tooltip_formatter: Option<Callback<(f64, NaiveDate), String>>,
    #[prop(optional, into)] on_cell_press: Option<Callback<(ContributionDataPoint, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let cell_size = config.cell_size;
    let cell_spacing = config.cell_spacing;
    let cell_radius = config.cell_border_radius;
    let pitch = cell_size + cell_spacing;
    let weeks_to_show = config.weeks_to_show.max(1);
    let empty_color = config.empty_color.clone();
    let color_scale = config.color_scale.clone();
    let thresholds = config.thresholds.clone();
    let show_month_labels = config.show_month_labels;
    let show_day_labels = config.show_day_labels;
    let show_tooltip = config.show_tooltip;
    let end_date = config.end_date;

    let day_label_width = if show_day_labels { 28.0 } else { 0.0 };
    let month_label_height = if show_month_labels { 16.0 } else { 0.0 };
    let natural_width = day_label_width + weeks_to_show as f64 * pitch;
    let natural_height = month_label_height + 7.0 * pitch;

    let month_style = config.month_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(10.0).font_weight("400"),
    );
    let day_style = config.day_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_VALUE).font_size(9.0).font_weight("400"),
    );
    let tooltip_style = config.tooltip_style.merged_over(
        &TextStyle::new().fill(colors::OUTLINE).font_size(10.0).font_weight("500"),
    );

    // Staggered reveal rolls across the grid cell by cell
    let cell_count = weeks_to_show * 7;
    let stagger_delay = config.animation_duration / cell_count as f64 / 10.0;
    let reveal = StaggerDriver::new(Timeline::new(config.animation_duration), stagger_delay);
    reveal.restart_on_change_counted(data, config.animated, cell_count);

    let grid = move || -> ContributionGrid {
        let today = end_date.unwrap_or_else(|| chrono::Local::now().date_naive());
        organize_by_week(&data.get(), weeks_to_show, today)
    };

    let format_tooltip = move |value: f64, date: NaiveDate| match tooltip_formatter {
        Some(formatter) => formatter.run((value, date)),
        None => format_contribution(value, date),
    };

    // (text, x, y) of the currently shown tooltip
    let tooltip: RwSignal<Option<(String, f64, f64)>> = RwSignal::new(None);

    let month_style_view = month_style.clone();
    let months_view = move || {
        if !show_month_labels {
            return None;
        }
        let style = month_style_view.clone();
        let labels = month_labels(&grid(), pitch);
        Some(
            labels
                .into_iter()
                .map(|month| {
                    let style = style.clone();
                    view! {
                        <text
                            x=day_label_width + month.x
                            y=11.0
                            fill=style.fill_or(colors::TEXT_VALUE)
                            font-size=style.font_size_or(10.0)
                        >
                            {month.label}
                        </text>
                    }
                })
                .collect_view(),
        )
    };

    let day_style_view = day_style.clone();
    let days_view = move || {
        if !show_day_labels {
            return None;
        }
        let style = day_style_view.clone();
        Some(
            DAY_LABELS
                .iter()
                .enumerate()
                .filter(|(_, label)| !label.is_empty())
                .map(|(i, label)| {
                    // Mon, Wed, Fri sit on rows 1, 3, 5
                    let row = i * 2 - 1;
                    let style = style.clone();
                    view! {
                        <text
                            x=day_label_width - 6.0
                            y=month_label_height + row as f64 * pitch + cell_size - 3.0
                            text-anchor="end"
                            fill=style.fill_or(colors::TEXT_VALUE)
                            font-size=style.font_size_or(9.0)
                        >
                            {*label}
                        </text>
                    }
                })
                .collect_view(),
        )
    };

    let empty_color_cells = empty_color.clone();
    let cells_view = move || {
        let empty_color = empty_color_cells.clone();
        let color_scale = color_scale.clone();
        let thresholds = thresholds.clone();

        grid()
            .weeks
            .into_iter()
            .enumerate()
            .flat_map(|(week_index, week)| {
                let empty_color = empty_color.clone();
                let color_scale = color_scale.clone();
                let thresholds = thresholds.clone();
                week.into_iter()
                    .enumerate()
                    .filter_map(move |(day_index, cell)| {
                        let cell = cell?;
                        let flat_index = ContributionGrid::flat_index(week_index, day_index);
                        let x = day_label_width + week_index as f64 * pitch;
                        let y = month_label_height + day_index as f64 * pitch;
                        let fill = cell.color.clone().unwrap_or_else(|| {
                            color_for_value(cell.value, &thresholds, &color_scale, &empty_color)
                        });
                        let press_point = ContributionDataPoint {
                            value: cell.value,
                            date: cell.date,
                            color: cell.color.clone(),
                        };
                        let press_index = cell.source_index.unwrap_or(flat_index);
                        let tooltip_text = format_tooltip(cell.value, cell.date);

                        Some(view! {
                            <rect
                                x=x
                                y=y
                                width=cell_size
                                height=cell_size
                                rx=cell_radius
                                fill=fill
                                opacity=move || reveal.progress(flat_index)
                                on:click=move |_| {
                                    if show_tooltip {
                                        tooltip.set(Some((
                                            tooltip_text.clone(),
                                            x + cell_size / 2.0,
                                            y - 8.0,
                                        )));
                                    }
                                    if let Some(handler) = on_cell_press {
                                        handler.run((press_point.clone(), press_index));
                                    }
                                }
                            />
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect_view()
    };

    let tooltip_style_view = tooltip_style.clone();
    let tooltip_view = move || {
        if !show_tooltip {
            return None;
        }
        let style = tooltip_style_view.clone();
        tooltip.get().map(|(text, x, y)| {
            let extent = crate::labels::estimate_extent(&text, style.font_size_or(10.0));
            let box_rect = crate::labels::centered_background(x, y, extent, 4.0);
            view! {
                <g class="contribution-tooltip">
                    <rect
                        x=box_rect.x
                        y=box_rect.y
                        width=box_rect.width
                        height=box_rect.height
                        rx=3.0
                        fill=colors::TEXT_DARK
                        opacity=0.9
                    />
                    <text
                        x=x
                        y=y - 6.0
                        text-anchor="middle"
                        fill=style.fill_or(colors::OUTLINE)
                        font-size=style.font_size_or(10.0)
                        font-weight=style.font_weight_or("500")
                    >
                        {text.clone()}
                    </text>
                </g>
            }
        })
    };

    view! {
        <svg
            class="contribution-chart"
            viewBox=format!("0 0 {} {}", natural_width, natural_height)
            style=format!("width: {}px; height: {}px;", config.width, config.height)
        >
            {months_view}
            {days_view}
            {cells_view}
            {tooltip_view}
        </svg>
    }
}
