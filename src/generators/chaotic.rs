//! Logistic-map style.
//!
//! Iterates `x <- r x (1 - x)` and plots each value against the next one.
//! Chaos pushes `r` from 3.5 toward 4, deeper into the chaotic regime,
//! which gives the cloud its fractal clustering. Decorated with small
//! triangles.

use super::{pick_color, StyleGenerator};
use crate::rng::DeterministicRng;
use crate::shapes::{Point, Shape};
use crate::symbols::Symbolism;

pub struct ChaoticStyle;

impl ChaoticStyle {
    /// Growth rate for a chaos coefficient.
    pub fn growth_rate(chaos: f64) -> f64 {
        3.5 + 0.5 * chaos
    }
}

impl StyleGenerator for ChaoticStyle {
    fn name(&self) -> &'static str {
        "chaotic"
    }

    fn points(&self, rng: &mut DeterministicRng, chaos: f64, count: usize) -> Vec<Point> {
        let r = Self::growth_rate(chaos);
        let mut x = rng.uniform();

        (0..count)
            .map(|_| {
                x = r * x * (1.0 - x);
                Point::new(x, r * x * (1.0 - x))
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
        (0..count)
            .map(|_| {
                let cx = rng.uniform();
                let cy = rng.uniform();
                let size = rng.range(0.02, 0.06) * (1.0 + chaos);
                let color = pick_color(rng, symbols.shape_palette());

                let vertex = |dx: f64, dy: f64| {
                    Point::new((cx + dx).clamp(0.0, 1.0), (cy + dy).clamp(0.0, 1.0))
                };
                Shape::Triangle {
                    vertices: [vertex(0.0, size), vertex(-size, -size), vertex(size, -size)],
                    color,
                }
            })
            .collect()
    }
}
