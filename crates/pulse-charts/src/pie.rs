//! Pie / donut chart component
//!
//! Slices are laid out over the full circle in input order. Large slices
//! carry internal labels; narrow ones get an external label with a
//! connecting line. The entrance animation grows the slice radius while
//! the label layer fades in with the same progress scalar.

use crate::{
    animate::{AnimationDriver, Easing, Timeline},
    chartkit::{annulus_sector_path, polar_point, PieLayout, PieSlice},
    labels::{
        centered_background, estimate_extent, legend_entries, pie_external_label,
        BackgroundStyle, ConnectorStyle, LegendEntry, LegendPosition,
    },
};
use leptos::prelude::*;
use pulse_core::{colors, fallback_non_empty, format_value, DataPoint, TextStyle};

/// Pie chart configuration
#[derive(Debug, Clone)]
pub struct PieChartConfig {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub donut: bool,
    pub donut_radius: f64,
    pub pad_angle: f64,
    pub outline_color: String,
    pub outline_width: f64,
    pub show_labels: bool,
    pub show_values: bool,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub show_label_background: bool,
    pub label_background: BackgroundStyle,
    pub show_value_background: bool,
    pub value_background: BackgroundStyle,
    /// Slices narrower than this angle (radians) get external labels.
    pub external_label_min_angle: f64,
    /// External label distance as a factor of the radius.
    pub external_label_distance: f64,
    pub connecting_line_color: Option<String>,
    pub connecting_line_width: f64,
    pub connecting_line_style: ConnectorStyle,
    pub center_label: Option<String>,
    pub center_label_style: TextStyle,
    pub center_label_background: String,
    pub center_label_border_color: Option<String>,
    pub center_label_border_width: f64,
    pub center_label_border_radius: f64,
    pub show_legend: bool,
    pub legend_position: LegendPosition,
    pub legend_label_style: TextStyle,
    pub legend_item_background: String,
    pub legend_item_border_radius: f64,
    pub animated: bool,
    pub animation_duration: f64,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            radius: 120.0,
            donut: false,
            donut_radius: 60.0,
            pad_angle: 0.02,
            outline_color: colors::OUTLINE.to_string(),
            outline_width: 1.5,
            show_labels: true,
            show_values: true,
            label_style: TextStyle::new(),
            value_style: TextStyle::new(),
            show_label_background: true,
            label_background: BackgroundStyle::default(),
            show_value_background: true,
            value_background: BackgroundStyle::default(),
            external_label_min_angle: 0.5,
            external_label_distance: 1.2,
            connecting_line_color: None,
            connecting_line_width: 1.0,
            connecting_line_style: ConnectorStyle::Straight,
            center_label: None,
            center_label_style: TextStyle::new(),
            center_label_background: colors::OUTLINE.to_string(),
            center_label_border_color: None,
            center_label_border_width: 0.0,
            center_label_border_radius: 0.0,
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
struct SliceGeometry {
    item: DataPoint,
    index: usize,
    slice: PieSlice,
    fill: String,
    outline_color: String,
    outline_width: f64,
}

/// Pie chart component
#[component]
pub fn PieChart(
    #[prop(into)] data: Signal<Vec<DataPoint>>,
    #[prop(optional)] config: Option<PieChartConfig>,
    #[prop(optional, into)] value_formatter: Option<Callback<f64, String>>,
    #[prop(optional, into)] on_slice_press: Option<Callback<(DataPoint, usize)>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let width = config.width;
    let height = config.height;

    // Reserve room for the legend strip before sizing the circle
    let (chart_width, chart_height, chart_origin) = match (config.show_legend, config.legend_position) {
        (false, _) => (width, height, (0.0, 0.0)),
        (true, LegendPosition::Bottom) => (width, height - 80.0, (0.0, 0.0)),
        (true, LegendPosition::Top) => (width, height - 80.0, (0.0, 80.0)),
        (true, LegendPosition::Left) => (width - 130.0, height, (130.0, 0.0)),
        (true, LegendPosition::Right) => (width - 130.0, height, (0.0, 0.0)),
    };
    let available = chart_width.min(chart_height);
    let radius = (available / 2.0 - 40.0).min(config.radius).max(10.0);
    let cx = chart_origin.0 + chart_width / 2.0;
    let cy = chart_origin.1 + chart_height / 2.0;

    let inner_radius = if config.donut { config.donut_radius } else { 0.0 };
    let pad_angle = config.pad_angle;
    let show_labels = config.show_labels;
    let show_values = config.show_values;
    let show_label_background = config.show_label_background;
    let show_value_background = config.show_value_background;
    let external_min_angle = config.external_label_min_angle;
    let external_distance = config.external_label_distance;
    let connector_style = config.connecting_line_style;
    let connector_width = config.connecting_line_width;
    let connector_color = config
        .connecting_line_color
        .clone()
        .unwrap_or_else(|| colors::CONNECTOR.to_string());
    let outline_color = config.outline_color.clone();
    let outline_width = config.outline_width;

    let label_style = config.label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_DARK).font_size(12.0).font_weight("bold"),
    );
    let value_style = config.value_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_MUTED).font_size(10.0).font_weight("400"),
    );
    let label_background = config.label_background.clone();
    let value_background = config.value_background.clone();
    let label_border_color = label_background
        .border_color
        .clone()
        .unwrap_or_else(|| outline_color.clone());
    let value_border_color = value_background
        .border_color
        .clone()
        .unwrap_or_else(|| outline_color.clone());

    let reveal = AnimationDriver::new(
        Timeline::new(config.animation_duration).with_easing(Easing::CubicOut),
    );
    reveal.restart_on_change(data, config.animated);

    let geometry = move || {
        let items = fallback_non_empty(&data.get());
        let values: Vec<f64> = items.iter().map(|d| d.value).collect();
        let slices = PieLayout::new().pad_angle(pad_angle).layout(&values);

        items
            .into_iter()
            .zip(slices)
            .enumerate()
            .map(|(index, (item, slice))| SliceGeometry {
                fill: item.fill_color(index),
                outline_color: item
                    .outline_color
                    .clone()
                    .unwrap_or_else(|| outline_color.clone()),
                outline_width: item.outline_width.unwrap_or(outline_width),
                item,
                index,
                slice,
            })
            .collect::<Vec<_>>()
    };

    let format = move |value: f64| match value_formatter {
        Some(formatter) => formatter.run(value),
        None => format_value(value),
    };

    let geometry_for_labels = geometry.clone();
    let slices_view = move || {
        geometry()
            .into_iter()
            .map(|geom| {
                let SliceGeometry { item, index, slice, fill, outline_color, outline_width } = geom;
                let path = move || {
                    annulus_sector_path(
                        0.0,
                        0.0,
                        radius * reveal.progress.get(),
                        inner_radius,
                        slice.drawn_start(),
                        slice.drawn_end(),
                    )
                };
                view! {
                    <path
                        d=path
                        fill=fill
                        stroke=outline_color
                        stroke-width=outline_width
                        on:click=move |_| {
                            if let Some(handler) = on_slice_press {
                                handler.run((item.clone(), index));
                            }
                        }
                    />
                }
            })
            .collect_view()
    };

    let label_style_for_labels = label_style.clone();
    let value_style_for_labels = value_style.clone();
    let labels_view = move || {
        if !show_labels {
            return None;
        }
        let label_style = label_style_for_labels.clone();
        let value_style = value_style_for_labels.clone();
        let label_font = label_style.font_size_or(12.0);
        let value_font = value_style.font_size_or(10.0);

        let views = geometry_for_labels()
            .into_iter()
            .map(|geom| {
                let mid = geom.slice.mid_angle();
                let item_background = geom
                    .item
                    .label_background_color
                    .clone()
                    .unwrap_or_else(|| label_background.color.clone());
                let label_text = geom.item.label.clone();
                let value_text = format(geom.item.value);

                if geom.slice.span() > external_min_angle {
                    // Internal label at 65% radius
                    let (lx, ly) = polar_point(0.0, 0.0, radius * 0.65, mid);
                    let label_rect = centered_background(
                        lx,
                        ly,
                        estimate_extent(&label_text, label_font),
                        label_background.padding,
                    );
                    let value_extent = estimate_extent(&value_text, value_font);
                    let value_height = value_extent.height;
                    let value_rect = centered_background(
                        lx,
                        ly + value_height + 2.0 + value_background.padding,
                        value_extent,
                        value_background.padding,
                    );

                    view! {
                        <g class="pie-label">
                            {show_label_background.then(|| view! {
                                <rect
                                    x=label_rect.x
                                    y=label_rect.y
                                    width=label_rect.width
                                    height=label_rect.height
                                    fill=item_background.clone()
                                    opacity=label_background.opacity
                                    rx=label_background.border_radius
                                    stroke=label_border_color.clone()
                                    stroke-width=label_background.border_width
                                />
                            })}
                            <text
                                x=lx
                                y=ly - 6.0
                                text-anchor="middle"
                                fill=label_style.fill_or(colors::TEXT_DARK)
                                font-size=label_font
                                font-weight=label_style.font_weight_or("bold")
                            >
                                {label_text.clone()}
                            </text>
                            {show_values.then(|| view! {
                                <g>
                                    {show_value_background.then(|| view! {
                                        <rect
                                            x=value_rect.x
                                            y=value_rect.y
                                            width=value_rect.width
                                            height=value_rect.height
                                            fill=value_background.color.clone()
                                            opacity=value_background.opacity
                                            rx=value_background.border_radius
                                            stroke=value_border_color.clone()
                                            stroke-width=value_background.border_width
                                        />
                                    })}
                                    <text
                                        x=lx
                                        y=ly + value_height
                                        text-anchor="middle"
                                        fill=value_style.fill_or(colors::TEXT_MUTED)
                                        font-size=value_font
                                    >
                                        {value_text.clone()}
                                    </text>
                                </g>
                            })}
                        </g>
                    }
                    .into_any()
                } else {
                    // External label with a connecting line
                    let placed =
                        pie_external_label(mid, radius, external_distance, connector_style);
                    let label_extent = estimate_extent(&label_text, label_font);
                    let box_x = if placed.is_right_side {
                        placed.text_x - 4.0
                    } else {
                        placed.text_x - label_extent.width - 4.0
                    };
                    let box_height = if show_values {
                        label_extent.height + value_font * 1.2 + 4.0
                    } else {
                        label_extent.height
                    };
                    let text_lift = if show_values { 8.0 } else { 0.0 };

                    view! {
                        <g class="pie-label-external">
                            <path
                                d=placed.connector_path.clone()
                                stroke=connector_color.clone()
                                stroke-width=connector_width
                                fill="none"
                            />
                            {show_label_background.then(|| view! {
                                <rect
                                    x=box_x
                                    y=placed.text_y - label_extent.height / 2.0 - 8.0
                                    width=label_extent.width + 8.0 + label_background.padding * 2.0
                                    height=box_height + label_background.padding * 2.0
                                    fill=item_background.clone()
                                    opacity=label_background.opacity
                                    rx=label_background.border_radius
                                    stroke=label_border_color.clone()
                                    stroke-width=label_background.border_width
                                />
                            })}
                            <text
                                x=placed.text_x
                                y=placed.text_y - text_lift
                                text-anchor=placed.anchor.as_svg()
                                fill=label_style.fill_or(colors::TEXT_DARK)
                                font-size=label_font
                                font-weight=label_style.font_weight_or("bold")
                            >
                                {label_text.clone()}
                            </text>
                            {show_values.then(|| view! {
                                <text
                                    x=placed.text_x
                                    y=placed.text_y + value_font * 1.2 - 2.0
                                    text-anchor=placed.anchor.as_svg()
                                    fill=value_style.fill_or(colors::TEXT_MUTED)
                                    font-size=value_font
                                >
                                    {value_text.clone()}
                                </text>
                            })}
                        </g>
                    }
                    .into_any()
                }
            })
            .collect_view();

        Some(views)
    };

    let center_label = config.center_label.clone();
    let center_style = config.center_label_style.merged_over(
        &TextStyle::new().fill(colors::TEXT_DARK).font_size(16.0).font_weight("bold"),
    );
    let center_background = config.center_label_background.clone();
    let center_border_color = config
        .center_label_border_color
        .clone()
        .unwrap_or_else(|| config.outline_color.clone());
    let center_border_width = config.center_label_border_width;
    let center_border_radius = config.center_label_border_radius;
    let donut = config.donut;
    let donut_radius = config.donut_radius;

    let center_view = move || {
        if !donut {
            return None;
        }
        let text = center_label.clone()?;
        let inset = donut_radius - 5.0;
        Some(view! {
            <g class="pie-center">
                {if center_border_radius > 0.0 {
                    view! {
                        <rect
                            x=-inset
                            y=-inset
                            width=inset * 2.0
                            height=inset * 2.0
                            fill=center_background.clone()
                            stroke=center_border_color.clone()
                            stroke-width=center_border_width
                            rx=center_border_radius
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <circle
                            cx=0.0
                            cy=0.0
                            r=inset
                            fill=center_background.clone()
                            stroke=center_border_color.clone()
                            stroke-width=center_border_width
                        />
                    }
                    .into_any()
                }}
                <text
                    x=0.0
                    y=0.0
                    text-anchor="middle"
                    dy="0.32em"
                    fill=center_style.fill_or(colors::TEXT_DARK)
                    font-size=center_style.font_size_or(16.0)
                    font-weight=center_style.font_weight_or("bold")
                >
                    {text}
                </text>
            </g>
        })
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
        let items = fallback_non_empty(&data.get());
        let entries = legend_entries(&items);
        Some(legend_block(
            entries,
            legend_position,
            width,
            height,
            legend_label_style.clone(),
            legend_item_background.clone(),
            legend_item_radius,
            move |item_index| {
                if let Some(handler) = on_slice_press {
                    let items = fallback_non_empty(&data.get_untracked());
                    if let Some(item) = items.get(item_index) {
                        handler.run((item.clone(), item_index));
                    }
                }
            },
        ))
    };

    view! {
        <svg
            class="pie-chart"
            viewBox=format!("0 0 {} {}", width, height)
            style="width: 100%; height: 100%;"
        >
            <g transform=format!("translate({}, {})", cx, cy)>
                {slices_view}
                <g class="pie-labels" opacity=move || reveal.progress.get()>
                    {labels_view}
                </g>
                {center_view}
            </g>
            {legend_view}
        </svg>
    }
}

/// Shared SVG legend block: horizontal strip for top/bottom, vertical
/// column for left/right.
pub(crate) fn legend_block(
    entries: Vec<LegendEntry>,
    position: LegendPosition,
    width: f64,
    height: f64,
    label_style: TextStyle,
    item_background: String,
    item_border_radius: f64,
    on_entry_click: impl Fn(usize) + Clone + 'static,
) -> impl IntoView {
    let font_size = label_style.font_size_or(12.0);
    let row_height = 24.0;
    let horizontal = matches!(position, LegendPosition::Top | LegendPosition::Bottom);

    // Pre-measure entries so horizontal strips can be centered
    let widths: Vec<f64> = entries
        .iter()
        .map(|e| crate::labels::estimate_text_width(&e.text(), font_size) + 34.0)
        .collect();
    let total_width: f64 = widths.iter().sum::<f64>() + (entries.len() as f64 - 1.0).max(0.0) * 8.0;

    let (mut cursor_x, mut cursor_y) = match position {
        LegendPosition::Bottom => (((width - total_width) / 2.0).max(0.0), height - 60.0),
        LegendPosition::Top => (((width - total_width) / 2.0).max(0.0), 20.0),
        LegendPosition::Left => (10.0, (height / 2.0 - entries.len() as f64 * row_height / 2.0).max(10.0)),
        LegendPosition::Right => (
            width - 120.0,
            (height / 2.0 - entries.len() as f64 * row_height / 2.0).max(10.0),
        ),
    };

    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry_width = widths[index];
            let (x, y) = (cursor_x, cursor_y);
            if horizontal {
                cursor_x += entry_width + 8.0;
            } else {
                cursor_y += row_height;
            }

            let on_click = on_entry_click.clone();
            let text = entry.text();
            view! {
                <g
                    class="legend-item"
                    on:click=move |_| on_click(index)
                >
                    <rect
                        x=x
                        y=y
                        width=entry_width
                        height=row_height - 4.0
                        fill=item_background.clone()
                        rx=item_border_radius
                    />
                    <circle
                        cx=x + 12.0
                        cy=y + (row_height - 4.0) / 2.0
                        r=6.0
                        fill=entry.color.clone()
                    />
                    <text
                        x=x + 24.0
                        y=y + (row_height - 4.0) / 2.0
                        dy="0.32em"
                        fill=label_style.fill_or(colors::TEXT_DARK)
                        font-size=font_size
                        font-weight=label_style.font_weight_or("500")
                    >
                        {text}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! { <g class="chart-legend">{rows}</g> }
}
