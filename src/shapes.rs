//! Geometry shared by generators and renderers.
//!
//! All coordinates are fractions of the unit square with y pointing up.
//! Raw generator output may leave the square; normalization brings it back.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` and `angle` (radians) around `(cx, cy)`.
    pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> Self {
        Self::new(cx + radius * angle.cos(), cy + radius * angle.sin())
    }
}

/// A decorative primitive drawn alongside the point cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Triangle {
        vertices: [Point; 3],
        color: &'static str,
    },
    Rect {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: &'static str,
    },
    Oval {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        color: &'static str,
    },
    /// Arc outline; angles in degrees, counter-clockwise from +x.
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        extent: f64,
        color: &'static str,
    },
}

impl Shape {
    pub fn color(&self) -> &'static str {
        match self {
            Shape::Triangle { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Oval { color, .. }
            | Shape::Arc { color, .. } => color,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Triangle { .. } => "triangle",
            Shape::Rect { .. } => "rect",
            Shape::Oval { .. } => "oval",
            Shape::Arc { .. } => "arc",
        }
    }
}

/// Axis-aligned rectangular zone overlaid on the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Obstacle {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}
