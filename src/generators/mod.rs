//! Style generators - each style owns a point algorithm and the shape
//! algorithm that decorates it.

pub mod axis;
pub mod chaotic;
pub mod drift;
pub mod radial;
pub mod spiral;

use crate::rng::DeterministicRng;
use crate::shapes::{Point, Shape};
use crate::symbols::Symbolism;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use axis::AxisStyle;
pub use chaotic::ChaoticStyle;
pub use drift::DriftStyle;
pub use radial::RadialStyle;
pub use spiral::SpiralStyle;

/// Trait for all style generators.
pub trait StyleGenerator {
    /// Name of this style.
    fn name(&self) -> &'static str;

    /// Produce `count` raw, unnormalized points.
    fn points(&self, rng: &mut DeterministicRng, chaos: f64, count: usize) -> Vec<Point>;

    /// Produce `count` decorative shapes.
    fn shapes(
        &self,
        rng: &mut DeterministicRng,
        chaos: f64,
        count: usize,
        symbols: &Symbolism,
    ) -> Vec<Shape>;
}

/// One of the five concrete styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Logistic-map recurrence
    Chaotic,
    /// Grid-aligned scatter bands
    Axis,
    /// Unbounded random walk
    Drift,
    /// Expanding spiral
    Spiral,
    /// Six-armed radial bloom
    Radial,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Chaotic,
        Style::Axis,
        Style::Drift,
        Style::Spiral,
        Style::Radial,
    ];

    /// The generator pair for this style. Points and shapes always come from
    /// the same implementation.
    pub fn generator(self) -> &'static dyn StyleGenerator {
        match self {
            Style::Chaotic => &ChaoticStyle,
            Style::Axis => &AxisStyle,
            Style::Drift => &DriftStyle,
            Style::Spiral => &SpiralStyle,
            Style::Radial => &RadialStyle,
        }
    }

    pub fn name(self) -> &'static str {
        self.generator().name()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested style: a concrete one, or `Auto` to let the seed decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleChoice {
    #[default]
    Auto,
    Fixed(Style),
}

impl StyleChoice {
    /// Label used in seed material: `"auto"` or the style name.
    pub fn label(self) -> &'static str {
        match self {
            StyleChoice::Auto => "auto",
            StyleChoice::Fixed(style) => style.name(),
        }
    }

    /// Resolve to a concrete style. `Auto` consumes one choice draw.
    pub fn resolve(self, rng: &mut DeterministicRng) -> Style {
        match self {
            StyleChoice::Fixed(style) => style,
            StyleChoice::Auto => rng
                .choice(&Style::ALL)
                .copied()
                .unwrap_or(Style::Chaotic),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style '{0}' (expected auto, chaotic, axis, drift, spiral or radial)")]
pub struct UnknownStyle(pub String);

impl FromStr for StyleChoice {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.is_empty() || s == "auto" {
            return Ok(StyleChoice::Auto);
        }
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .map(StyleChoice::Fixed)
            .ok_or(UnknownStyle(s))
    }
}

/// Uniform pick from a color table.
pub(crate) fn pick_color(rng: &mut DeterministicRng, palette: &[&'static str]) -> &'static str {
    rng.choice(palette).copied().unwrap_or("black")
}

/// Number of decorative shapes for a mood.
pub fn shape_count(mood: i32) -> usize {
    mood.max(3) as usize
}
