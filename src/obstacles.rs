//! Obstacle synthesis: one small rectangle per mood point.

use crate::rng::DeterministicRng;
use crate::shapes::Obstacle;

/// `max(0, mood)` rectangles with corners in `[0, 0.9]` and sides in
/// `[0.02, 0.12]`, clipped to the unit square.
pub fn synthesize(rng: &mut DeterministicRng, mood: i32) -> Vec<Obstacle> {
    let count = mood.max(0) as usize;

    (0..count)
        .map(|_| {
            let x0 = rng.range(0.0, 0.9);
            let y0 = rng.range(0.0, 0.9);
            let w = rng.range(0.02, 0.12);
            let h = rng.range(0.02, 0.12);
            Obstacle {
                x0,
                y0,
                x1: (x0 + w).min(1.0),
                y1: (y0 + h).min(1.0),
            }
        })
        .collect()
}
