//! Text-grid renderer.
//!
//! The fallback that always works: the unit square becomes a character
//! grid. Paint order is obstacles, shapes, then points, with the last write
//! winning each cell.

use crate::shapes::{Obstacle, Point, Shape};

pub const POINT_GLYPH: char = '*';
pub const OBSTACLE_GLYPH: char = '#';
pub const TRIANGLE_GLYPH: char = '^';
pub const RECT_GLYPH: char = '=';
pub const OVAL_GLYPH: char = 'o';
pub const ARC_GLYPH: char = '~';
pub const EMPTY: char = ' ';

const ARC_SAMPLES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextGrid {
    width: usize,
    height: usize,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self {
            width: 60,
            height: 30,
        }
    }
}

fn shape_glyph(shape: &Shape) -> char {
    match shape {
        Shape::Triangle { .. } => TRIANGLE_GLYPH,
        Shape::Rect { .. } => RECT_GLYPH,
        Shape::Oval { .. } => OVAL_GLYPH,
        Shape::Arc { .. } => ARC_GLYPH,
    }
}

/// Signed area test for point-in-triangle.
fn in_triangle(p: Point, [a, b, c]: &[Point; 3]) -> bool {
    let cross = |u: Point, v: Point| (v.x - u.x) * (p.y - u.y) - (v.y - u.y) * (p.x - u.x);
    let (d1, d2, d3) = (cross(*a, *b), cross(*b, *c), cross(*c, *a));
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

struct Cells {
    cells: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Cells {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![EMPTY; width]; height],
            width,
            height,
        }
    }

    fn column(&self, x: f64) -> usize {
        let x = if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 };
        ((x * (self.width - 1) as f64).round() as usize).min(self.width - 1)
    }

    /// Row 0 is the top of the square (y = 1).
    fn row(&self, y: f64) -> usize {
        let y = if y.is_finite() { y.clamp(0.0, 1.0) } else { 0.0 };
        let from_bottom = ((y * (self.height - 1) as f64).round() as usize).min(self.height - 1);
        self.height - 1 - from_bottom
    }

    /// Unit-square coordinates of a cell's center.
    fn center(&self, col: usize, row: usize) -> Point {
        let frac = |i: usize, n: usize| if n > 1 { i as f64 / (n - 1) as f64 } else { 0.5 };
        Point::new(frac(col, self.width), 1.0 - frac(row, self.height))
    }

    fn plot(&mut self, p: Point, glyph: char) {
        let (col, row) = (self.column(p.x), self.row(p.y));
        self.cells[row][col] = glyph;
    }

    /// Paint the cells of a box whose centers satisfy `inside`.
    fn fill(&mut self, lo: Point, hi: Point, glyph: char, inside: impl Fn(Point) -> bool) {
        let (c0, c1) = (self.column(lo.x), self.column(hi.x));
        let (r0, r1) = (self.row(hi.y), self.row(lo.y));
        for row in r0..=r1 {
            for col in c0..=c1 {
                if inside(self.center(col, row)) {
                    self.cells[row][col] = glyph;
                }
            }
        }
    }

    /// Solid rectangle; its corner cells are always painted so boxes
    /// narrower than a cell stay visible.
    fn fill_rect(&mut self, lo: Point, hi: Point, glyph: char) {
        self.fill(lo, hi, glyph, |_| true);
        self.plot(lo, glyph);
        self.plot(hi, glyph);
    }

    fn paint_obstacle(&mut self, o: &Obstacle) {
        self.fill_rect(Point::new(o.x0, o.y0), Point::new(o.x1, o.y1), OBSTACLE_GLYPH);
    }

    fn paint_shape(&mut self, shape: &Shape) {
        let glyph = shape_glyph(shape);
        match shape {
            Shape::Triangle { vertices, .. } => {
                let lo = vertices
                    .iter()
                    .fold(Point::new(1.0, 1.0), |m, v| Point::new(m.x.min(v.x), m.y.min(v.y)));
                let hi = vertices
                    .iter()
                    .fold(Point::new(0.0, 0.0), |m, v| Point::new(m.x.max(v.x), m.y.max(v.y)));
                self.fill(lo, hi, glyph, |p| in_triangle(p, vertices));
                for v in vertices {
                    self.plot(*v, glyph);
                }
            }
            Shape::Rect { x0, y0, x1, y1, .. } => {
                self.fill_rect(Point::new(*x0, *y0), Point::new(*x1, *y1), glyph);
            }
            Shape::Oval { cx, cy, rx, ry, .. } => {
                let (cx, cy, rx, ry) = (*cx, *cy, rx.max(f64::EPSILON), ry.max(f64::EPSILON));
                self.fill(
                    Point::new(cx - rx, cy - ry),
                    Point::new(cx + rx, cy + ry),
                    glyph,
                    |p| ((p.x - cx) / rx).powi(2) + ((p.y - cy) / ry).powi(2) <= 1.0,
                );
                self.plot(Point::new(cx, cy), glyph);
            }
            Shape::Arc {
                cx,
                cy,
                radius,
                start,
                extent,
                ..
            } => {
                for i in 0..=ARC_SAMPLES {
                    let deg = start + extent * i as f64 / ARC_SAMPLES as f64;
                    self.plot(Point::polar(*cx, *cy, *radius, deg.to_radians()), glyph);
                }
            }
        }
    }

    fn into_string(self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextGrid {
    /// Grid of `width` x `height` cells, each at least 1.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Draw already-truncated points with obstacles and shapes beneath them.
    pub fn render(&self, points: &[Point], obstacles: &[Obstacle], shapes: &[Shape]) -> String {
        let mut canvas = Cells::new(self.width, self.height);
        for obstacle in obstacles {
            canvas.paint_obstacle(obstacle);
        }
        for shape in shapes {
            canvas.paint_shape(shape);
        }
        for point in points {
            canvas.plot(*point, POINT_GLYPH);
        }
        canvas.into_string()
    }
}
