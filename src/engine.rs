//! The generation engine.
//!
//! A request goes in, an immutable [`RenderBundle`] comes out. Each call
//! seeds its own RNG from its own inputs, so calls are independent and
//! repeatable:
//!
//! 1. seed material -> seed -> RNG
//! 2. resolve the style (`auto` consumes one draw)
//! 3. raw points, then shapes, from the style's generator pair
//! 4. jitter and normalize the points
//! 5. obstacles

use crate::generators::{shape_count, Style, StyleChoice};
use crate::obstacles;
use crate::pipeline;
use crate::rng::DeterministicRng;
use crate::seed::{self, SeedMaterial};
use crate::shapes::{Obstacle, Point, Shape};
use crate::symbols::Symbolism;
use serde::Serialize;
use tracing::debug;

pub const MAX_PROMPT_CHARS: usize = 100;
pub const MIN_POINTS: usize = 1;
pub const MAX_POINTS: usize = 5000;
pub const DEFAULT_POINTS: usize = 1000;

/// Validated inputs for one drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    mood: i32,
    prompt: String,
    style: StyleChoice,
    point_budget: usize,
    weather: String,
    date: String,
}

impl GenerationRequest {
    /// A request dated today, auto style, default point budget. The prompt
    /// is cut to 100 characters.
    pub fn new(mood: i32, prompt: &str, weather: &str) -> Self {
        Self {
            mood,
            prompt: prompt.chars().take(MAX_PROMPT_CHARS).collect(),
            style: StyleChoice::Auto,
            point_budget: DEFAULT_POINTS,
            weather: weather.to_string(),
            date: seed::today(),
        }
    }

    pub fn with_style(mut self, style: StyleChoice) -> Self {
        self.style = style;
        self
    }

    /// Budget clamped to `1..=5000`.
    pub fn with_point_budget(mut self, points: usize) -> Self {
        self.point_budget = points.clamp(MIN_POINTS, MAX_POINTS);
        self
    }

    /// Pin the calendar day (`YYYYMMDD`).
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn mood(&self) -> i32 {
        self.mood
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> StyleChoice {
        self.style
    }

    pub fn point_budget(&self) -> usize {
        self.point_budget
    }

    pub fn weather(&self) -> &str {
        &self.weather
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn seed_material(&self) -> SeedMaterial<'_> {
        SeedMaterial {
            date: &self.date,
            weather: &self.weather,
            mood: self.mood,
            prompt: &self.prompt,
            style: self.style.label(),
        }
    }
}

/// Text shown next to the drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayText {
    pub date: String,
    pub weather: String,
    pub mood: i32,
    pub meaning: String,
    pub prompt: String,
}

impl DisplayText {
    /// Canvas title, one entry per line.
    pub fn title_lines(&self) -> Vec<String> {
        vec![
            format!("{} - {}", self.date, self.weather),
            format!("Feeling: {} ({})", self.mood, self.meaning),
            self.prompt.clone(),
        ]
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Date: {}", self.date),
            format!("Weather: {}", self.weather),
            format!("Mood: {}", self.mood),
            format!("Meaning: {}", self.meaning),
            format!("Prompt: {}", self.prompt),
        ]
    }
}

/// Everything a renderer needs. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBundle {
    seed: u32,
    chaos: f64,
    style: Style,
    color: &'static str,
    points: Vec<Point>,
    shapes: Vec<Shape>,
    obstacles: Vec<Obstacle>,
    display: DisplayText,
}

impl RenderBundle {
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn chaos(&self) -> f64 {
        self.chaos
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Line color of the point cloud.
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Normalized points, in generation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn meaning(&self) -> &str {
        &self.display.meaning
    }

    pub fn display(&self) -> &DisplayText {
        &self.display
    }
}

/// Turns requests into bundles using a fixed set of symbol tables.
#[derive(Debug, Clone, Default)]
pub struct ArtEngine {
    symbols: Symbolism,
}

impl ArtEngine {
    pub fn symbols(&self) -> &Symbolism {
        &self.symbols
    }

    pub fn generate(&self, request: &GenerationRequest) -> RenderBundle {
        let seed = request.seed_material().seed();
        let chaos = seed::chaos_coefficient(request.prompt());
        let mut rng = DeterministicRng::new(seed);

        let style = request.style().resolve(&mut rng);
        let generator = style.generator();
        debug!(seed, chaos, style = style.name(), "generating");

        let raw = generator.points(&mut rng, chaos, request.point_budget());
        let shapes = generator.shapes(
            &mut rng,
            chaos,
            shape_count(request.mood()),
            &self.symbols,
        );
        let points = pipeline::post_process(raw, &mut rng, chaos);
        let obstacles = obstacles::synthesize(&mut rng, request.mood());

        let meaning = self.symbols.meaning(request.mood());
        RenderBundle {
            seed,
            chaos,
            style,
            color: self.symbols.line_color(request.mood()),
            points,
            shapes,
            obstacles,
            display: DisplayText {
                date: request.date().to_string(),
                weather: request.weather().to_string(),
                mood: request.mood(),
                meaning: meaning.to_string(),
                prompt: request.prompt().to_string(),
            },
        }
    }
}
