//! Geometry of the performance trend line chart.
//!
//! Pure layout math; the SVG markup is produced in `ui::trend_chart`.

use contracts::dashboards::d100_test_hub::PerformancePoint;

/// Grid and tick spacing on the value axis
pub const TICK_STEP: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Room reserved left of the plot for value labels
    pub y_axis_width: f64,
    /// Room reserved below the plot for category labels
    pub x_axis_height: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 320.0,
            margin_top: 5.0,
            margin_right: 30.0,
            margin_bottom: 5.0,
            margin_left: 20.0,
            y_axis_width: 40.0,
            x_axis_height: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub y_max: f64,
    pub ticks: Vec<Tick>,
    pub points: Vec<PlotPoint>,
}

impl ChartGeometry {
    /// SVG path through all points, empty for an empty series.
    pub fn line_path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{}{:.1},{:.1}", cmd, p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Smallest multiple of [`TICK_STEP`] that is >= `max`; 0 for non-positive input.
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        0.0
    } else {
        (max / TICK_STEP).ceil() * TICK_STEP
    }
}

pub fn layout_chart(series: &[PerformancePoint], layout: &ChartLayout) -> ChartGeometry {
    let left = layout.margin_left + layout.y_axis_width;
    let right = layout.width - layout.margin_right;
    let top = layout.margin_top;
    let bottom = layout.height - layout.margin_bottom - layout.x_axis_height;

    let y_max = nice_max(series.iter().map(|p| p.value).fold(0.0, f64::max));
    let scale_y = |value: f64| {
        if y_max == 0.0 {
            bottom
        } else {
            bottom - (value.clamp(0.0, y_max) / y_max) * (bottom - top)
        }
    };

    let tick_count = (y_max / TICK_STEP).round() as usize;
    let ticks = (0..=tick_count)
        .map(|i| {
            let value = i as f64 * TICK_STEP;
            Tick {
                value,
                y: scale_y(value),
            }
        })
        .collect();

    let n = series.len();
    let points = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if n == 1 {
                (left + right) / 2.0
            } else {
                left + (right - left) * i as f64 / (n - 1) as f64
            };
            PlotPoint {
                x,
                y: scale_y(p.value),
                label: p.label.clone(),
                value: p.value,
            }
        })
        .collect();

    ChartGeometry {
        left,
        right,
        top,
        bottom,
        y_max,
        ticks,
        points,
    }
}
