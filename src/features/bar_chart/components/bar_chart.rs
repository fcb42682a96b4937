use leptos::prelude::*;
use crate::core::models::PageStats;
use crate::features::bar_chart::services::{layout, Series, MARGIN_BOTTOM, X_AXIS_HEIGHT};

fn px(value: f64) -> String {
    format!("{:.1}", value)
}

#[component]
pub fn BarChart(data: Vec<PageStats>, width: f64, height: f64) -> impl IntoView {
    let chart = layout(&data, width, height);
    let (hovered, set_hovered) = signal::<Option<usize>>(None);

    let plot = chart.plot;
    let plot_bottom = plot.y + plot.height;
    let legend_y = height - MARGIN_BOTTOM - 10.0;

    let grid = chart
        .ticks
        .iter()
        .map(|tick| {
            view! {
                <line
                    class="grid-line"
                    x1=px(plot.x)
                    x2=px(plot.x + plot.width)
                    y1=px(tick.y)
                    y2=px(tick.y)
                    stroke-dasharray="3 3"
                />
                <text class="axis-label" x=px(plot.x - 8.0) y=px(tick.y + 4.0) text-anchor="end">
                    {tick.value.to_string()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let tooltip_data = data;
    let tooltip_positions: Vec<(f64, f64)> = chart
        .categories
        .iter()
        .map(|c| (c.band.x + c.band.width / 2.0, plot.y + 10.0))
        .collect();

    let categories = chart
        .categories
        .into_iter()
        .enumerate()
        .map(|(i, category)| {
            let label_x = category.band.x + category.band.width / 2.0;
            view! {
                <g
                    class="bar-category"
                    on:mouseenter=move |_| set_hovered.set(Some(i))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <rect
                        class="bar-band"
                        class:active=move || hovered.get() == Some(i)
                        x=px(category.band.x)
                        y=px(category.band.y)
                        width=px(category.band.width)
                        height=px(category.band.height)
                    />
                    {category
                        .bars
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <rect
                                    x=px(bar.rect.x)
                                    y=px(bar.rect.y)
                                    width=px(bar.rect.width)
                                    height=px(bar.rect.height)
                                    fill=bar.series.fill()
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                    <text class="axis-label" x=px(label_x) y=px(plot_bottom + X_AXIS_HEIGHT / 2.0 + 4.0) text-anchor="middle">
                        {category.label}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let legend = Series::all()
        .into_iter()
        .enumerate()
        .map(|(i, series)| {
            let x = width / 2.0 - 40.0 + i as f64 * 50.0;
            view! {
                <rect x=px(x) y=px(legend_y - 9.0) width="10" height="10" fill=series.fill() />
                <text class="legend-label" x=px(x + 14.0) y=px(legend_y) fill=series.fill()>
                    {series.key()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let tooltip = move || {
        hovered.get().and_then(|i| {
            let stats = tooltip_data.get(i)?;
            let (x, y) = *tooltip_positions.get(i)?;
            Some(view! {
                <g class="chart-tooltip">
                    <rect x=px(x - 50.0) y=px(y) width="100" height="58" rx="2" />
                    <text x=px(x - 42.0) y=px(y + 16.0)>{stats.name.clone()}</text>
                    {Series::all()
                        .into_iter()
                        .enumerate()
                        .map(|(j, series)| {
                            view! {
                                <text x=px(x - 42.0) y=px(y + 32.0 + j as f64 * 16.0) fill=series.fill()>
                                    {format!("{} : {}", series.key(), series.value(stats))}
                                </text>
                            }
                        })
                        .collect::<Vec<_>>()}
                </g>
            })
        })
    };

    view! {
        <svg class="bar-chart" width=px(width) height=px(height) viewBox=format!("0 0 {} {}", width, height)>
            <g class="grid">{grid}</g>
            <line class="axis" x1=px(plot.x) x2=px(plot.x) y1=px(plot.y) y2=px(plot_bottom) />
            <line class="axis" x1=px(plot.x) x2=px(plot.x + plot.width) y1=px(plot_bottom) y2=px(plot_bottom) />
            <g class="bars">{categories}</g>
            <g class="legend">{legend}</g>
            {tooltip}
        </svg>
    }
}
