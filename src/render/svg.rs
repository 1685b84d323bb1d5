//! SVG canvas.
//!
//! Draws the bundle as a square SVG document: obstacles underneath, then
//! shapes, then the point cloud as a translucent path with dots, and the
//! title above. The plot area keeps y pointing up.

use super::{Canvas, RenderError};
use crate::engine::RenderBundle;
use crate::pipeline;
use crate::shapes::{Obstacle, Point, Shape};
use std::fs;
use std::path::PathBuf;

const BACKGROUND: &str = "#ffffff";
const OBSTACLE_FILL: &str = "#808080";
const POINT_ALPHA: f64 = 0.6;

pub struct SvgCanvas {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SvgCanvas {
    /// Canvas writing to `path`. Fails when either side is zero.
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Unavailable(format!(
                "cannot draw on a {width}x{height} canvas"
            )));
        }
        Ok(Self {
            path: path.into(),
            width,
            height,
        })
    }

    /// Scale factor relative to an 800px canvas.
    fn scale(&self) -> f64 {
        self.width.min(self.height) as f64 / 800.0
    }

    fn title_height(&self) -> f64 {
        90.0 * self.scale()
    }

    fn margin(&self) -> f64 {
        20.0 * self.scale()
    }

    /// Map unit-square coordinates into the plot area.
    fn to_px(&self, p: Point) -> (f64, f64) {
        let m = self.margin();
        let top = self.title_height();
        let w = self.width as f64 - 2.0 * m;
        let h = self.height as f64 - top - m;
        (m + p.x * w, top + (1.0 - p.y) * h)
    }

    fn length_x(&self, d: f64) -> f64 {
        d * (self.width as f64 - 2.0 * self.margin())
    }

    fn length_y(&self, d: f64) -> f64 {
        d * (self.height as f64 - self.title_height() - self.margin())
    }

    fn draw_obstacle(&self, o: &Obstacle) -> String {
        let (x, y) = self.to_px(Point::new(o.x0, o.y1));
        format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="0.35"/>"#,
            x,
            y,
            self.length_x(o.width()),
            self.length_y(o.height()),
            OBSTACLE_FILL
        )
    }

    fn draw_shape(&self, shape: &Shape) -> String {
        match shape {
            Shape::Triangle { vertices, color } => {
                let points = vertices
                    .iter()
                    .map(|v| {
                        let (x, y) = self.to_px(*v);
                        format!("{:.1},{:.1}", x, y)
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    r#"<polygon points="{}" fill="{}" fill-opacity="0.8"/>"#,
                    points, color
                )
            }
            Shape::Rect {
                x0,
                y0,
                x1,
                y1,
                color,
            } => {
                let (x, y) = self.to_px(Point::new(*x0, *y1));
                format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="0.8"/>"#,
                    x,
                    y,
                    self.length_x(x1 - x0),
                    self.length_y(y1 - y0),
                    color
                )
            }
            Shape::Oval {
                cx,
                cy,
                rx,
                ry,
                color,
            } => {
                let (x, y) = self.to_px(Point::new(*cx, *cy));
                format!(
                    r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}" fill-opacity="0.8"/>"#,
                    x,
                    y,
                    self.length_x(*rx),
                    self.length_y(*ry),
                    color
                )
            }
            Shape::Arc {
                cx,
                cy,
                radius,
                start,
                extent,
                color,
            } => {
                let extent = extent.clamp(-359.9, 359.9);
                let from = Point::polar(*cx, *cy, *radius, start.to_radians());
                let to = Point::polar(*cx, *cy, *radius, (start + extent).to_radians());
                let (x0, y0) = self.to_px(from);
                let (x1, y1) = self.to_px(to);
                let large_arc = u8::from(extent.abs() > 180.0);
                // Counter-clockwise in unit space is sweep 0 once y is flipped.
                let sweep = u8::from(extent < 0.0);
                format!(
                    r#"<path d="M {:.1} {:.1} A {:.1} {:.1} 0 {} {} {:.1} {:.1}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
                    x0,
                    y0,
                    self.length_x(*radius),
                    self.length_y(*radius),
                    large_arc,
                    sweep,
                    x1,
                    y1,
                    color,
                    3.0 * self.scale()
                )
            }
        }
    }

    fn draw_points(&self, points: &[Point], color: &str) -> Vec<String> {
        let mut elements = Vec::with_capacity(points.len() + 1);
        let path = points
            .iter()
            .map(|p| {
                let (x, y) = self.to_px(*p);
                format!("{:.1},{:.1}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");
        elements.push(format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{:.2}"/>"#,
            path,
            color,
            POINT_ALPHA / 2.0,
            0.6 * self.scale()
        ));

        let r = 1.6 * self.scale();
        for p in points {
            let (x, y) = self.to_px(*p);
            elements.push(format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" fill-opacity="{}"/>"#,
                x, y, r, color, POINT_ALPHA
            ));
        }
        elements
    }

    fn draw_title(&self, bundle: &RenderBundle) -> String {
        let size = 18.0 * self.scale();
        bundle
            .display()
            .title_lines()
            .iter()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="{:.1}" text-anchor="middle">{}</text>"#,
                    self.width as f64 / 2.0,
                    (i as f64 + 1.0) * size * 1.4,
                    size,
                    escape(line)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The full document for a bundle.
    pub fn document(&self, bundle: &RenderBundle, max_points: usize) -> String {
        let mut content = Vec::new();
        content.extend(bundle.obstacles().iter().map(|o| self.draw_obstacle(o)));
        content.extend(bundle.shapes().iter().map(|s| self.draw_shape(s)));
        content.extend(self.draw_points(
            pipeline::truncate(bundle.points(), max_points),
            bundle.color(),
        ));
        content.push(self.draw_title(bundle));

        self.wrap_svg(&content.join("\n  "))
    }

    fn wrap_svg(&self, content: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
  <rect width="100%" height="100%" fill="{}"/>
  {}
</svg>"#,
            self.width, self.height, self.width, self.height, BACKGROUND, content
        )
    }
}

impl Canvas for SvgCanvas {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn draw(&self, bundle: &RenderBundle, max_points: usize) -> Result<(), RenderError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, self.document(bundle, max_points))?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ArtEngine, GenerationRequest};

    fn bundle(mood: i32, prompt: &str) -> RenderBundle {
        let req = GenerationRequest::new(mood, prompt, "Partly cloudy")
            .with_date("20240615")
            .with_point_budget(200);
        ArtEngine::default().generate(&req)
    }

    #[test]
    fn zero_sized_canvas_is_unavailable() {
        assert!(matches!(
            SvgCanvas::new("x.svg", 0, 100),
            Err(RenderError::Unavailable(_))
        ));
    }

    #[test]
    fn document_contains_every_layer() {
        let b = bundle(4, "layers");
        let canvas = SvgCanvas::new("unused.svg", 800, 800).unwrap();
        let doc = canvas.document(&b, 50);
        assert!(doc.starts_with("<?xml"));
        assert_eq!(doc.matches("<circle").count(), 50);
        assert_eq!(doc.matches(r##"fill="#808080""##).count(), 4);
        assert!(doc.contains("20240615 - Partly cloudy"));
        assert!(doc.contains("Feeling: 4"));
        assert!(doc.contains(b.color()));
    }

    #[test]
    fn title_is_escaped() {
        let canvas = SvgCanvas::new("unused.svg", 400, 400).unwrap();
        let doc = canvas.document(&bundle(1, "<b> & \"q\""), 10);
        assert!(doc.contains("&lt;b&gt; &amp; &quot;q&quot;"));
        assert!(!doc.contains("<b>"));
    }

    #[test]
    fn points_land_inside_the_plot_area() {
        let canvas = SvgCanvas::new("unused.svg", 800, 800).unwrap();
        let (x0, y0) = canvas.to_px(Point::new(0.0, 0.0));
        let (x1, y1) = canvas.to_px(Point::new(1.0, 1.0));
        assert!(x0 >= 0.0 && x1 <= 800.0);
        assert!(y1 >= canvas.title_height() && y0 <= 800.0);
        assert!(y0 > y1, "y axis should point up");
    }

    #[test]
    fn draw_writes_the_file() {
        let dir = std::env::temp_dir().join(format!("abstdraw-svg-{}", std::process::id()));
        let path = dir.join("nested").join("piece.svg");
        let canvas = SvgCanvas::new(&path, 300, 300).unwrap();
        canvas.draw(&bundle(2, "file"), 100).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("</svg>"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
