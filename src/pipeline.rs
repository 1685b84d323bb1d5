//! Post-processing shared by every style: jitter, then min-max
//! normalization into the unit square.

use crate::rng::DeterministicRng;
use crate::shapes::Point;

/// Standard deviation of the jitter for a chaos coefficient.
pub fn noise_magnitude(chaos: f64) -> f64 {
    0.1 + 0.3 * chaos
}

/// Add independent Gaussian jitter to every coordinate, x before y.
pub fn add_noise(points: &mut [Point], rng: &mut DeterministicRng, chaos: f64) {
    let scale = noise_magnitude(chaos);
    for p in points.iter_mut() {
        p.x += rng.normal(scale);
        p.y += rng.normal(scale);
    }
}

/// Remap each axis so its observed min becomes 0 and its max 1.
///
/// An axis with no spread keeps a unit denominator and collapses to 0.
pub fn normalize(points: &mut [Point]) {
    let Some((min, max)) = bounds(points) else {
        return;
    };

    let span = |lo: f64, hi: f64| if hi > lo { hi - lo } else { 1.0 };
    let (span_x, span_y) = (span(min.x, max.x), span(min.y, max.y));

    for p in points.iter_mut() {
        p.x = (p.x - min.x) / span_x;
        p.y = (p.y - min.y) / span_y;
    }
}

/// Per-axis minimum and maximum, `None` for an empty set.
pub fn bounds(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}

/// Jitter then normalize. Length and order are preserved.
pub fn post_process(mut points: Vec<Point>, rng: &mut DeterministicRng, chaos: f64) -> Vec<Point> {
    add_noise(&mut points, rng, chaos);
    normalize(&mut points);
    points
}

/// The first `limit` points, without resampling.
pub fn truncate(points: &[Point], limit: usize) -> &[Point] {
    &points[..points.len().min(limit)]
}
