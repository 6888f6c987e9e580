use crate::dashboards::d100_test_hub::chart::{layout_chart, ChartLayout, PlotPoint};
use crate::dashboards::d100_test_hub::mock::performance_series;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

const TOOLTIP_WIDTH: f64 = 90.0;
const TOOLTIP_HEIGHT: f64 = 44.0;

/// Tooltip box position: above-right of the point, flipped left near the right edge.
fn tooltip_origin(point: &PlotPoint, right: f64) -> (f64, f64) {
    let x = if point.x + 10.0 + TOOLTIP_WIDTH > right {
        point.x - 10.0 - TOOLTIP_WIDTH
    } else {
        point.x + 10.0
    };
    let y = (point.y - TOOLTIP_HEIGHT - 10.0).max(0.0);
    (x, y)
}

/// Line chart of the monthly performance score.
#[component]
pub fn TrendChart() -> impl IntoView {
    let theme = use_theme();
    let layout = ChartLayout::default();
    let geo = layout_chart(&performance_series(), &layout);
    let hovered = RwSignal::new(None::<usize>);
    let palette = move || theme.theme.get().chart_palette();

    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let line_path = geo.line_path();
    let (left, right, top, bottom) = (geo.left, geo.right, geo.top, geo.bottom);

    let grid = geo
        .ticks
        .iter()
        .map(|tick| {
            let y = tick.y;
            let label = format!("{}", tick.value);
            view! {
                <line x1=left x2=right y1=y y2=y stroke=move || palette().grid stroke-dasharray="3 3" />
                <text x={left - 8.0} y={y + 4.0} text-anchor="end" class="trend-chart__tick" fill={move || palette().axis}>{label}</text>
            }
        })
        .collect_view();

    let x_labels = geo
        .points
        .iter()
        .map(|p| {
            let x = p.x;
            let label = p.label.clone();
            view! {
                <line x1=x x2=x y1=top y2=bottom stroke=move || palette().grid stroke-dasharray="3 3" />
                <text x=x y={bottom + 20.0} text-anchor="middle" class="trend-chart__tick" fill={move || palette().axis}>{label}</text>
            }
        })
        .collect_view();

    let dots = geo
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (cx, cy) = (p.x, p.y);
            let is_hovered = move || hovered.get() == Some(i);
            view! {
                <circle
                    cx=cx
                    cy=cy
                    r=move || if is_hovered() { "6" } else { "4" }
                    fill=move || if is_hovered() { palette().line } else { palette().tooltip_bg }
                    stroke=move || palette().line
                    stroke-width=move || if is_hovered() { "0" } else { "2" }
                    class="trend-chart__dot"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave={move |_| hovered.set(None)}
                />
            }
        })
        .collect_view();

    let points = StoredValue::new(geo.points.clone());
    let tooltip = move || {
        let point = hovered.get().and_then(|i| points.with_value(|pts| pts.get(i).cloned()))?;
        let (x, y) = tooltip_origin(&point, right);
        let colors = palette();
        Some(view! {
            <g class="trend-chart__tooltip" pointer-events="none">
                <rect x=x y=y width=TOOLTIP_WIDTH height=TOOLTIP_HEIGHT rx="4" fill={colors.tooltip_bg} stroke={colors.tooltip_border} />
                <text x={x + 10.0} y={y + 18.0} fill={colors.tooltip_text}>{point.label.clone()}</text>
                <text x={x + 10.0} y={y + 36.0} fill={colors.line}>{format!("value : {}", point.value)}</text>
            </g>
        })
    };

    view! {
        <section class="section">
            <div class="trend-chart">
                <svg viewBox=view_box width="100%" height="100%" preserveAspectRatio="xMidYMid meet" role="img" aria-label="性能测试趋势">
                    {grid}
                    {x_labels}
                    <line x1=left x2=left y1=top y2=bottom stroke={move || palette().axis} />
                    <line x1=left x2=right y1=bottom y2=bottom stroke={move || palette().axis} />
                    <path d=line_path fill="none" stroke=move || palette().line stroke-width="2" class="trend-chart__line" />
                    {dots}
                    {tooltip}
                </svg>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> PlotPoint {
        PlotPoint {
            x,
            y,
            label: "Jan".into(),
            value: 65.0,
        }
    }

    #[test]
    fn test_tooltip_right_of_point() {
        assert_eq!(tooltip_origin(&point(100.0, 200.0), 770.0), (110.0, 146.0));
    }

    #[test]
    fn test_tooltip_flips_near_right_edge() {
        assert_eq!(tooltip_origin(&point(760.0, 200.0), 770.0), (660.0, 146.0));
    }

    #[test]
    fn test_tooltip_clamped_to_top() {
        assert_eq!(tooltip_origin(&point(100.0, 20.0), 770.0).1, 0.0);
    }
}
