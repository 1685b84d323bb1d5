//! Random-walk style.
//!
//! A gesture that wanders from a random start. Nothing keeps it inside the
//! square; normalization rescales whatever ground it covers. Decorated with
//! circles.

use super::{pick_color, StyleGenerator};
use crate::rng::DeterministicRng;
use crate::shapes::{Point, Shape};
use crate::symbols::Symbolism;

pub struct DriftStyle;

impl DriftStyle {
    /// Largest per-axis step for a chaos coefficient.
    pub fn max_step(chaos: f64) -> f64 {
        0.2 * (1.0 + chaos)
    }
}

impl StyleGenerator for DriftStyle {
    fn name(&self) -> &'static str {
        "drift"
    }

    fn points(&self, rng: &mut DeterministicRng, chaos: f64, count: usize) -> Vec<Point> {
        let step = Self::max_step(chaos);
        let mut x = rng.uniform();
        let mut y = rng.uniform();

        (0..count)
            .map(|_| {
                x += rng.range(-step, step);
                y += rng.range(-step, step);
                Point::new(x, y)
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
                let radius = rng.range(0.02, 0.08 + 0.07 * chaos);
                Shape::Oval {
                    cx,
                    cy,
                    rx: radius,
                    ry: radius,
                    color: pick_color(rng, symbols.shape_palette()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_bounded() {
        let chaos = 0.7;
        let step = DriftStyle::max_step(chaos);
        let mut rng = DeterministicRng::new(17);
        let points = DriftStyle.points(&mut rng, chaos, 500);
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= step + 1e-12);
            assert!((pair[1].y - pair[0].y).abs() <= step + 1e-12);
        }
    }

    #[test]
    fn walk_is_not_clamped() {
        // With enough steps the walk leaves the unit square for some seed.
        let escaped = (0..20).any(|seed| {
            let mut rng = DeterministicRng::new(seed);
            DriftStyle
                .points(&mut rng, 1.0, 2000)
                .iter()
                .any(|p| !(0.0..=1.0).contains(&p.x) || !(0.0..=1.0).contains(&p.y))
        });
        assert!(escaped);
    }

    #[test]
    fn shapes_are_circles() {
        let mut rng = DeterministicRng::new(5);
        for shape in DriftStyle.shapes(&mut rng, 0.2, 10, &Symbolism::default()) {
            let Shape::Oval { rx, ry, .. } = shape else {
                panic!("drift style produced a {}", shape.kind());
            };
            assert_eq!(rx, ry);
            assert!(rx > 0.0);
        }
    }
}
