//! Radial-arm style.
//!
//! Six rotationally symmetric arms grow outward from the center; chaos
//! scatters each point's angle and stretches the bloom. Decorated with arcs
//! around the center.

use super::{pick_color, StyleGenerator};
use crate::rng::DeterministicRng;
use crate::shapes::{Point, Shape};
use crate::symbols::Symbolism;
use std::f64::consts::TAU;

pub const ARMS: usize = 6;

pub struct RadialStyle;

impl StyleGenerator for RadialStyle {
    fn name(&self) -> &'static str {
        "radial"
    }

    fn points(&self, rng: &mut DeterministicRng, chaos: f64, count: usize) -> Vec<Point> {
        let reach = 0.4 + chaos * 0.5;
        let arm_spacing = TAU / ARMS as f64;

        (0..count)
            .map(|i| {
                let t = i as f64;
                let angle = t / 30.0 + rng.uniform() * chaos * TAU;
                let radius = t / count as f64 * reach;
                let offset = (i % ARMS) as f64 * arm_spacing;
                Point::polar(0.5, 0.5, radius, angle + offset)
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
            .map(|_| Shape::Arc {
                cx: 0.5,
                cy: 0.5,
                radius: rng.range(0.05, 0.45),
                start: rng.range(0.0, 360.0),
                extent: rng.range(20.0, 120.0 + 180.0 * chaos),
                color: pick_color(rng, symbols.shape_palette()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_chaos_arms_are_evenly_spaced() {
        let mut rng = DeterministicRng::new(10);
        let count = 600;
        let points = RadialStyle.points(&mut rng, 0.0, count);
        // Consecutive points differ by one arm plus the slow i/30 drift.
        let step = 1.0 / 30.0 + TAU / ARMS as f64;
        for (i, pair) in points.windows(2).enumerate().skip(1) {
            let a0 = (pair[0].y - 0.5).atan2(pair[0].x - 0.5);
            let a1 = (pair[1].y - 0.5).atan2(pair[1].x - 0.5);
            let diff = (a1 - a0 - step).rem_euclid(TAU);
            assert!(diff < 1e-6 || TAU - diff < 1e-6, "bad arm step at {i}");
        }
    }

    #[test]
    fn bloom_stays_within_its_reach() {
        let mut rng = DeterministicRng::new(10);
        for p in RadialStyle.points(&mut rng, 1.0, 1000) {
            let d = ((p.x - 0.5).powi(2) + (p.y - 0.5).powi(2)).sqrt();
            assert!(d <= 0.9 + 1e-9);
        }
    }

    #[test]
    fn arcs_are_centered() {
        let mut rng = DeterministicRng::new(10);
        for shape in RadialStyle.shapes(&mut rng, 0.5, 9, &Symbolism::default()) {
            let Shape::Arc { cx, cy, radius, extent, .. } = shape else {
                panic!("radial style produced a {}", shape.kind());
            };
            assert_eq!((cx, cy), (0.5, 0.5));
            assert!(radius > 0.0 && extent >= 20.0);
        }
    }
}
