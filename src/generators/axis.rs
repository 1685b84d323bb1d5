//! Axis-alignment style.
//!
//! Points arrive in bands of ten that share one jittered coordinate,
//! alternating between horizontal and vertical bands. Decorated with
//! rectangles in the primary triad.

use super::{pick_color, StyleGenerator};
use crate::rng::DeterministicRng;
use crate::shapes::{Point, Shape};
use crate::symbols::Symbolism;

const BAND_SIZE: usize = 10;

pub struct AxisStyle;

impl StyleGenerator for AxisStyle {
    fn name(&self) -> &'static str {
        "axis"
    }

    fn points(&self, rng: &mut DeterministicRng, chaos: f64, count: usize) -> Vec<Point> {
        let mut points = Vec::with_capacity(count + BAND_SIZE);
        let mut horizontal = true;

        while points.len() < count {
            let fixed = rng.uniform();
            for _ in 0..BAND_SIZE {
                let along = fixed + rng.range(-1.0, 1.0) * 0.1 * chaos;
                let across = rng.uniform();
                points.push(if horizontal {
                    Point::new(across, along)
                } else {
                    Point::new(along, across)
                });
            }
            horizontal = !horizontal;
        }

        points.truncate(count);
        points
    }

    fn shapes(
        &self,
        rng: &mut DeterministicRng,
        chaos: f64,
        count: usize,
        symbols: &Symbolism,
    ) -> Vec<Shape> {
        (0..count)
            .map(|_| {
                let x0 = rng.range(0.0, 0.8);
                let y0 = rng.range(0.0, 0.8);
                let w = rng.range(0.05, 0.15 + 0.1 * chaos);
                let h = rng.range(0.05, 0.15 + 0.1 * chaos);
                Shape::Rect {
                    x0,
                    y0,
                    x1: (x0 + w).min(1.0),
                    y1: (y0 + h).min(1.0),
                    color: pick_color(rng, symbols.primary_triad()),
                }
            })
            .collect()
    }
}
