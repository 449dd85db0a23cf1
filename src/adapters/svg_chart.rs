//! SVG line chart that accepts highlight instructions.
//!
//! X positions are linear in calendar days between the earliest and latest
//! date of all series. Shapes on [`Layer::Below`] are emitted before the
//! series so they render beneath the lines.

use crate::domain::highlight::{HighlightStyle, Layer};
use crate::ports::render_port::RenderTarget;
use chrono::NaiveDate;
use std::fmt::Write;

const SERIES_COLORS: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

#[derive(Debug, Clone)]
struct Series {
    name: String,
    points: Vec<(NaiveDate, f64)>,
}

#[derive(Debug, Clone)]
struct Shape {
    start: NaiveDate,
    end: NaiveDate,
    style: HighlightStyle,
}

#[derive(Debug, Clone)]
pub struct SvgChart {
    title: String,
    width: f64,
    height: f64,
    padding: f64,
    series: Vec<Series>,
    shapes: Vec<Shape>,
}

struct Scale {
    first: NaiveDate,
    span_days: f64,
    min_y: f64,
    range_y: f64,
    left: f64,
    top: f64,
    plot_width: f64,
    plot_height: f64,
}

impl Scale {
    fn x(&self, date: NaiveDate) -> f64 {
        let days = (date - self.first).num_days() as f64;
        let frac = if self.span_days > 0.0 {
            days / self.span_days
        } else {
            0.5
        };
        self.left + frac.clamp(0.0, 1.0) * self.plot_width
    }

    fn y(&self, value: f64) -> f64 {
        let frac = if self.range_y > 0.0 {
            (value - self.min_y) / self.range_y
        } else {
            0.5
        };
        self.top + self.plot_height - frac * self.plot_height
    }
}

impl SvgChart {
    pub fn new(title: &str) -> Self {
        Self::with_size(title, 900.0, 320.0)
    }

    pub fn with_size(title: &str, width: f64, height: f64) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            padding: 40.0,
            series: Vec::new(),
            shapes: Vec::new(),
        }
    }

    pub fn add_series(&mut self, name: &str, points: Vec<(NaiveDate, f64)>) {
        self.series.push(Series {
            name: name.to_string(),
            points,
        });
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn scale(&self) -> Option<Scale> {
        let points = self.series.iter().flat_map(|s| s.points.iter());
        let mut first: Option<NaiveDate> = None;
        let mut last: Option<NaiveDate> = None;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &(date, value) in points {
            first = Some(first.map_or(date, |f| f.min(date)));
            last = Some(last.map_or(date, |l| l.max(date)));
            min_y = min_y.min(value);
            max_y = max_y.max(value);
        }
        let (first, last) = (first?, last?);

        Some(Scale {
            first,
            span_days: (last - first).num_days() as f64,
            min_y,
            range_y: max_y - min_y,
            left: self.padding,
            top: self.padding,
            plot_width: self.width - 2.0 * self.padding,
            plot_height: self.height - 2.0 * self.padding,
        })
    }

    fn write_shapes(&self, out: &mut String, scale: &Scale, layer: Layer) {
        for shape in self.shapes.iter().filter(|s| s.style.layer == layer) {
            let x0 = scale.x(shape.start);
            let x1 = scale.x(shape.end);
            let _ = writeln!(
                out,
                r#"  <rect class="highlight" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" opacity="{}" stroke="{}" stroke-width="{}"/>"#,
                x0,
                scale.top,
                (x1 - x0).max(0.0),
                scale.plot_height,
                shape.style.fill_color,
                shape.style.opacity,
                shape.style.line_color,
                shape.style.line_width
            );
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.0}" y="20" font-size="14" font-family="sans-serif">{}</text>"#,
            self.padding,
            escape(&self.title)
        );

        let Some(scale) = self.scale() else {
            let _ = writeln!(
                out,
                r#"  <text x="{:.0}" y="{:.0}" font-size="12">No data available.</text>"#,
                self.padding,
                self.height / 2.0
            );
            out.push_str("</svg>\n");
            return out;
        };

        self.write_shapes(&mut out, &scale, Layer::Below);

        let bottom = scale.top + scale.plot_height;
        let right = scale.left + scale.plot_width;
        let _ = writeln!(
            out,
            r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
            scale.left, scale.top, scale.left, bottom
        );
        let _ = writeln!(
            out,
            r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
            scale.left, bottom, right, bottom
        );

        for (i, series) in self.series.iter().enumerate() {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let points: Vec<String> = series
                .points
                .iter()
                .map(|&(date, value)| format!("{:.1},{:.1}", scale.x(date), scale.y(value)))
                .collect();
            let _ = writeln!(
                out,
                r#"  <polyline class="series" fill="none" stroke="{}" stroke-width="1" points="{}"/>"#,
                color,
                points.join(" ")
            );
            let _ = writeln!(
                out,
                r#"  <text x="{:.1}" y="{:.1}" font-size="10" fill="{}">{}</text>"#,
                scale.left + 150.0 * i as f64,
                self.height - 10.0,
                color,
                escape(&series.name)
            );
        }

        self.write_shapes(&mut out, &scale, Layer::Above);

        out.push_str("</svg>\n");
        out
    }
}

impl RenderTarget for SvgChart {
    fn shade_x_range(&mut self, start: NaiveDate, end: NaiveDate, style: &HighlightStyle) {
        self.shapes.push(Shape {
            start,
            end,
            style: style.clone(),
        });
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
