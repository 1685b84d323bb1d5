//! abstdraw - deterministic abstract drawings from a feeling.
//!
//! A mood, a few words, the day's date and the weather outside are hashed
//! into a seed. The seed drives one of five point-cloud styles, a handful
//! of matching decorative shapes and some obstacle zones. The result is
//! drawn as SVG, or as a text grid when no canvas is available.

pub mod config;
pub mod engine;
pub mod generators;
pub mod obstacles;
pub mod pipeline;
pub mod render;
pub mod rng;
pub mod seed;
pub mod shapes;
pub mod symbols;
pub mod weather;

pub use config::AbstdrawConfig;
pub use engine::{ArtEngine, GenerationRequest, RenderBundle};
pub use generators::{Style, StyleChoice, StyleGenerator};
pub use render::{Canvas, RenderDispatcher, RenderOutcome};
pub use symbols::Symbolism;
