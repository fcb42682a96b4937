//! Geometry for the grouped bar chart.
//!
//! Everything here is plain arithmetic over the sample figures so the SVG
//! component only has to draw rectangles and labels.

use crate::core::models::PageStats;

pub const MARGIN_TOP: f64 = 5.0;
pub const MARGIN_RIGHT: f64 = 30.0;
pub const MARGIN_LEFT: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 5.0;
pub const Y_AXIS_WIDTH: f64 = 60.0;
pub const X_AXIS_HEIGHT: f64 = 30.0;
pub const LEGEND_HEIGHT: f64 = 30.0;
const CATEGORY_GAP: f64 = 0.1;
const BAR_GAP: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Pv,
    Uv,
}

impl Series {
    pub fn all() -> Vec<Series> {
        vec![Series::Pv, Series::Uv]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Series::Pv => "pv",
            Series::Uv => "uv",
        }
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Series::Pv => "#8884d8",
            Series::Uv => "#82ca9d",
        }
    }

    pub fn value(&self, stats: &PageStats) -> f64 {
        match self {
            Series::Pv => stats.pv,
            Series::Uv => stats.uv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub series: Series,
    pub value: f64,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: String,
    pub band: Rect,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: Rect,
    pub ticks: Vec<Tick>,
    pub categories: Vec<Category>,
}

/// Round axis ticks from zero up to at least `max`, stepping by 1, 2, 2.5 or 5
/// times a power of ten.
pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
    if !(max > 0.0) || count < 2 {
        return vec![0.0];
    }
    let rough = max / (count - 1) as f64;
    let magnitude = 10f64.powi(rough.log10().floor() as i32);
    let residual = rough / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|nice| *nice >= residual)
        .unwrap_or(10.0)
        * magnitude;
    let steps = (max / step).ceil() as usize;
    (0..=steps).map(|i| i as f64 * step).collect()
}

pub fn layout(data: &[PageStats], width: f64, height: f64) -> ChartLayout {
    let plot = Rect {
        x: MARGIN_LEFT + Y_AXIS_WIDTH,
        y: MARGIN_TOP,
        width: (width - MARGIN_LEFT - Y_AXIS_WIDTH - MARGIN_RIGHT).max(0.0),
        height: (height - MARGIN_TOP - MARGIN_BOTTOM - X_AXIS_HEIGHT - LEGEND_HEIGHT).max(0.0),
    };

    let series = Series::all();
    let max = data
        .iter()
        .flat_map(|d| series.iter().map(move |s| s.value(d)))
        .fold(0.0, f64::max);
    let ticks = nice_ticks(max, 5);
    let top = ticks.last().copied().unwrap_or(0.0);
    let y_of = |value: f64| {
        if top > 0.0 {
            plot.y + plot.height * (1.0 - value / top)
        } else {
            plot.y + plot.height
        }
    };

    let band_width = if data.is_empty() { 0.0 } else { plot.width / data.len() as f64 };
    let inner = band_width * (1.0 - 2.0 * CATEGORY_GAP);
    let bar_width = ((inner - BAR_GAP * (series.len() as f64 - 1.0)) / series.len() as f64).max(0.0);

    let categories = data
        .iter()
        .enumerate()
        .map(|(i, stats)| {
            let band_x = plot.x + i as f64 * band_width;
            let bars = series
                .iter()
                .enumerate()
                .map(|(j, s)| {
                    let value = s.value(stats);
                    let y = y_of(value);
                    Bar {
                        series: *s,
                        value,
                        rect: Rect {
                            x: band_x + band_width * CATEGORY_GAP + j as f64 * (bar_width + BAR_GAP),
                            y,
                            width: bar_width,
                            height: plot.y + plot.height - y,
                        },
                    }
                })
                .collect();
            Category {
                label: stats.name.clone(),
                band: Rect {
                    x: band_x,
                    y: plot.y,
                    width: band_width,
                    height: plot.height,
                },
                bars,
            }
        })
        .collect();

    ChartLayout {
        plot,
        ticks: ticks.into_iter().map(|value| Tick { value, y: y_of(value) }).collect(),
        categories,
    }
}
