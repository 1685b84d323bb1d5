//! Spiral-growth style.
//!
//! Angle and radius both accumulate step to step, each increment nudged by
//! chaos, so the spiral loosens unevenly as it grows from the center.
//! Decorated with circles strung along a second, independent spiral.

use super::{pick_color, StyleGenerator};
use crate::rng::DeterministicRng;
use crate::shapes::{Point, Shape};
use crate::symbols::Symbolism;
use std::f64::consts::TAU;

pub struct SpiralStyle;

impl StyleGenerator for SpiralStyle {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn points(&self, rng: &mut DeterministicRng, chaos: f64, count: usize) -> Vec<Point> {
        let mut angle = 0.0;
        let mut radius = 0.0;

        (0..count)
            .map(|_| {
                angle += 0.1 + chaos * rng.uniform();
                radius += 0.005 + chaos * rng.uniform() * 0.01;
                Point::polar(0.5, 0.5, radius, angle)
            })
            .collect()
    }

    fn shapes(
        &self,
        rng: &mut DeterministicRng,
        chaos: f64,
        count: usize,
        symbols: &Symbolism,
    ) -> Vec<Shape> {
        let mut angle = rng.range(0.0, TAU);
        let mut radius: f64 = 0.05;

        (0..count)
            .map(|_| {
                angle += 0.6 + chaos * rng.uniform();
                radius += 0.04;
                let center = Point::polar(0.5, 0.5, radius.min(0.45), angle);
                let size = rng.range(0.01, 0.04);
                Shape::Oval {
                    cx: center.x,
                    cy: center.y,
                    rx: size,
                    ry: size,
                    color: pick_color(rng, symbols.shape_palette()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance_from_center(p: &Point) -> f64 {
        ((p.x - 0.5).powi(2) + (p.y - 0.5).powi(2)).sqrt()
    }

    #[test]
    fn radius_grows_every_step() {
        let mut rng = DeterministicRng::new(13);
        let points = SpiralStyle.points(&mut rng, 0.5, 300);
        for pair in points.windows(2) {
            assert!(distance_from_center(&pair[1]) > distance_from_center(&pair[0]));
        }
    }

    #[test]
    fn zero_chaos_is_a_regular_spiral() {
        let mut rng = DeterministicRng::new(13);
        let points = SpiralStyle.points(&mut rng, 0.0, 10);
        let last = points.last().unwrap();
        assert!((distance_from_center(last) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn decorations_follow_a_spiral() {
        let mut rng = DeterministicRng::new(1);
        let shapes = SpiralStyle.shapes(&mut rng, 0.3, 8, &Symbolism::default());
        let mut last = 0.0;
        for shape in shapes {
            let Shape::Oval { cx, cy, .. } = shape else {
                panic!("spiral style produced a {}", shape.kind());
            };
            let d = distance_from_center(&Point::new(cx, cy));
            assert!(d >= last - 1e-12);
            last = d;
        }
    }

    #[test]
    fn decoration_radius_is_capped() {
        let mut rng = DeterministicRng::new(8);
        let shapes = SpiralStyle.shapes(&mut rng, 1.0, 40, &Symbolism::default());
        assert_eq!(shapes.len(), 40);
        for shape in &shapes[10..] {
            let Shape::Oval { cx, cy, .. } = *shape else {
                panic!("spiral style produced a {}", shape.kind());
            };
            assert!((distance_from_center(&Point::new(cx, cy)) - 0.45).abs() < 1e-9);
        }
    }
}
