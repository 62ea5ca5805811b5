use std::ops::Range;

use plotters::prelude::*;

use crate::app::calculator::{Entry, Series};
use crate::app::error::{AppError, Result};

pub const TITLE: &str = "Interest Chart";
pub const X_LABEL: &str = "Year";
pub const Y_LABEL: &str = "Total";

/// Draws the series as an SVG line chart.
pub fn render_svg(series: &Series, size: (u32, u32)) -> Result<String> {
    let points: Vec<(f64, f64)> = series
        .iter()
        .map(Entry::point)
        .map(|[x, y]| (x, y))
        .filter(|(_, y)| y.is_finite())
        .collect();
    let (xs, ys) = ranges(&points);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(xs, ys)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .y_label_formatter(&|v| format!("{v:.2}"))
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(points, &BLUE))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    Ok(svg)
}

fn ranges(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    if points.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }

    let (mut x0, mut x1) = (f64::MAX, f64::MIN);
    let (mut y0, mut y1) = (f64::MAX, f64::MIN);
    for &(x, y) in points {
        x0 = x0.min(x);
        x1 = x1.max(x);
        y0 = y0.min(y);
        y1 = y1.max(y);
    }

    if x1 <= x0 {
        x0 -= 0.5;
        x1 += 0.5;
    }
    let pad = if y1 > y0 {
        (y1 - y0) * 0.05
    } else {
        (y0.abs() * 0.05).max(1.0)
    };

    (x0..x1, (y0 - pad)..(y1 + pad))
}

fn chart_err<E: std::error::Error>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::app::calculator::{project, Params};

    fn series(years: i64) -> Series {
        project(&Params {
            rate: Decimal::new(10, 2),
            principal: Decimal::new(1000, 0),
            years,
        })
        .unwrap()
    }

    #[test]
    fn svg_has_title_axes_and_line() {
        let svg = render_svg(&series(5), (640, 480)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(TITLE));
        assert!(svg.contains(X_LABEL));
        assert!(svg.contains(Y_LABEL));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn empty_series_still_renders() {
        let svg = render_svg(&Series::new(), (320, 240)).unwrap();
        assert!(svg.contains(TITLE));
    }

    #[test]
    fn single_year_gets_padded_ranges() {
        let (xs, ys) = ranges(&[(1.0, 1100.0)]);
        assert!(xs.start < 1.0 && xs.end > 1.0);
        assert!(ys.start < 1100.0 && ys.end > 1100.0);
        assert!(render_svg(&series(1), (320, 240)).is_ok());
    }

    #[test]
    fn ranges_cover_every_point() {
        let (xs, ys) = ranges(&[(1.0, 5.0), (2.0, -3.0), (3.0, 8.0)]);
        assert_eq!(xs, 1.0..3.0);
        assert!(ys.start < -3.0 && ys.end > 8.0);
    }
}
