//! Inline SVG area chart for the traffic series.

use contracts::dashboards::d400_traffic::TrafficPoint;
use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 24.0;

/// Chart coordinates of each value, x spread evenly, y scaled to the maximum
fn plot_points(values: &[u64], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = padding + step * i as f64;
            let y = padding + inner_h * (1.0 - *v as f64 / max);
            (x, y)
        })
        .collect()
}

/// `(line, area)` SVG path data; the area is the line closed along the baseline
pub fn area_paths(values: &[u64], width: f64, height: f64, padding: f64) -> (String, String) {
    let points = plot_points(values, width, height, padding);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return (String::new(), String::new());
    };

    let line = points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { "L" }, x, y))
        .collect::<Vec<_>>()
        .join(" ");

    let baseline = height - padding;
    let area = format!(
        "{} L{:.1},{:.1} L{:.1},{:.1} Z",
        line, last.0, baseline, first.0, baseline
    );

    (line, area)
}

#[component]
pub fn TrafficChart(#[prop(into)] points: Signal<Vec<TrafficPoint>>) -> impl IntoView {
    let paths = move || {
        let values: Vec<u64> = points.with(|p| p.iter().map(|tp| tp.visits).collect());
        area_paths(&values, WIDTH, HEIGHT, PADDING)
    };

    let labels = move || {
        let values: Vec<u64> = points.with(|p| p.iter().map(|tp| tp.visits).collect());
        let coords = plot_points(&values, WIDTH, HEIGHT, PADDING);
        points
            .get()
            .into_iter()
            .zip(coords)
            .map(|(point, (x, _))| view! {
                <text x=format!("{:.1}", x) y=HEIGHT - 4.0 text-anchor="middle" class="chart__label">
                    {point.label}
                </text>
            })
            .collect_view()
    };

    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none" role="img">
            <defs>
                <linearGradient id="traffic-fill" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color="currentColor" stop-opacity="0.35" />
                    <stop offset="100%" stop-color="currentColor" stop-opacity="0.02" />
                </linearGradient>
            </defs>
            <path class="chart__area" d=move || paths().1 fill="url(#traffic-fill)" />
            <path class="chart__line" d=move || paths().0 fill="none" stroke="currentColor" stroke-width="2" />
            {labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_paths() {
        let (line, area) = area_paths(&[0, 10], 100.0, 50.0, 10.0);
        assert_eq!(line, "M10.0,40.0 L90.0,10.0");
        assert_eq!(area, "M10.0,40.0 L90.0,10.0 L90.0,40.0 L10.0,40.0 Z");
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(area_paths(&[], 100.0, 50.0, 10.0), (String::new(), String::new()));
    }

    #[test]
    fn test_flat_zero_series_sits_on_baseline() {
        let points = plot_points(&[0, 0, 0], 100.0, 50.0, 10.0);
        assert!(points.iter().all(|(_, y)| (*y - 40.0).abs() < f64::EPSILON));
        assert_eq!(points[1].0, 50.0);
    }
}
