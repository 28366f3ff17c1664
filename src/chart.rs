// Chart rendering - pure SVG generation for the time-vs-size plot.
// No I/O; the handler base64-encodes the returned markup.

use std::fmt::Write as _;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const GRID_LINES: usize = 5;

/// Render a scatter/line plot of running time against input size.
///
/// `sizes` and `durations` must be the same length and in the same order;
/// that is guaranteed by [`crate::harness::MeasurementSeries`]. An empty
/// series still yields a valid chart frame.
pub fn render_chart(title: &str, sizes: &[usize], durations: &[f64]) -> String {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let x_min = sizes.first().copied().unwrap_or(0) as f64;
    let x_max = sizes.last().copied().unwrap_or(1) as f64;
    let x_span = (x_max - x_min).max(1.0);

    let y_max = durations.iter().copied().fold(0.0_f64, f64::max);
    // a flat series still needs a non-zero vertical scale
    let y_span = y_max.max(1e-9);

    let to_x = |size: f64| MARGIN_LEFT + (size - x_min) / x_span * plot_width;
    let to_y = |seconds: f64| MARGIN_TOP + plot_height - seconds / y_span * plot_height;

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    let _ = write!(
        svg,
        r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    );

    let _ = write!(
        svg,
        r#"<text x="{}" y="30" font-size="18" font-family="sans-serif" text-anchor="middle">Measured Time Complexity – {}</text>"#,
        WIDTH / 2.0,
        escape_text(title),
    );

    // horizontal grid with y-axis tick labels
    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = MARGIN_TOP + plot_height - fraction * plot_height;
        let _ = write!(
            svg,
            r##"<line x1="{}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="#cccccc" stroke-dasharray="4 3"/>"##,
            MARGIN_LEFT,
            WIDTH - MARGIN_RIGHT,
        );
        let _ = write!(
            svg,
            r#"<text x="{}" y="{:.1}" font-size="11" font-family="sans-serif" text-anchor="end">{:.6}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            fraction * y_span,
        );
    }

    // axes
    let _ = write!(
        svg,
        r#"<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="black"/><line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="black"/>"#,
        l = MARGIN_LEFT,
        r = WIDTH - MARGIN_RIGHT,
        t = MARGIN_TOP,
        b = MARGIN_TOP + plot_height,
    );

    // connecting polyline, then the sample markers on top
    if sizes.len() > 1 {
        let points: Vec<String> = sizes
            .iter()
            .zip(durations.iter())
            .map(|(&size, &seconds)| format!("{:.1},{:.1}", to_x(size as f64), to_y(seconds)))
            .collect();
        let _ = write!(
            svg,
            r#"<polyline points="{}" fill="none" stroke="teal" stroke-width="2"/>"#,
            points.join(" "),
        );
    }
    for (&size, &seconds) in sizes.iter().zip(durations.iter()) {
        let _ = write!(
            svg,
            r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="teal"/>"#,
            to_x(size as f64),
            to_y(seconds),
        );
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{}" font-size="11" font-family="sans-serif" text-anchor="middle">{}</text>"#,
            to_x(size as f64),
            MARGIN_TOP + plot_height + 18.0,
            size,
        );
    }

    // axis labels
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-size="13" font-family="sans-serif" text-anchor="middle">Input size (n)</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        HEIGHT - 15.0,
    );
    let _ = write!(
        svg,
        r#"<text x="20" y="{}" font-size="13" font-family="sans-serif" text-anchor="middle" transform="rotate(-90 20 {})">Running time (seconds)</text>"#,
        MARGIN_TOP + plot_height / 2.0,
        MARGIN_TOP + plot_height / 2.0,
    );

    svg.push_str("</svg>");
    svg
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_well_formed_svg() {
        let svg = render_chart("Binary Search", &[10, 257, 505, 752, 1000], &[
            0.000001, 0.000002, 0.000002, 0.000003, 0.000003,
        ]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Binary Search"));
        assert!(svg.contains("<polyline"));
        assert_eq!(svg.matches("<circle").count(), 5);
    }

    #[test]
    fn test_empty_series_still_renders_frame() {
        let svg = render_chart("Linear Search", &[], &[]);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<polyline"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_flat_series_does_not_divide_by_zero() {
        let svg = render_chart("Nested Loops", &[10, 10, 10, 10], &[0.0, 0.0, 0.0, 0.0]);
        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_title_is_escaped() {
        let svg = render_chart("<Evil & Co>", &[10, 100], &[0.1, 0.2]);
        assert!(svg.contains("&lt;Evil &amp; Co&gt;"));
        assert!(!svg.contains("<Evil"));
    }
}
