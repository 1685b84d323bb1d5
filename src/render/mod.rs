//! Rendering dispatch.
//!
//! A bundle is offered to the canvas first, when one was provided. Any
//! canvas failure is logged and the same bundle is drawn as a text grid
//! instead; rendering never fails outright.

pub mod svg;
pub mod text;

use crate::engine::RenderBundle;
use crate::pipeline;
use std::io::Write;
use thiserror::Error;
use tracing::{info, warn};

pub use svg::SvgCanvas;
pub use text::TextGrid;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The canvas cannot be used in this environment.
    #[error("canvas unavailable: {0}")]
    Unavailable(String),

    #[error("canvas io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rich drawing surface.
pub trait Canvas {
    /// Name used in logs and outcomes.
    fn name(&self) -> &'static str;

    /// Draw the bundle, limited to its first `max_points` points.
    fn draw(&self, bundle: &RenderBundle, max_points: usize) -> Result<(), RenderError>;
}

/// How a bundle ended up being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Canvas { name: &'static str },
    /// Text grid; `reason` is set when a canvas was tried and failed.
    Text { reason: Option<String> },
}

pub struct RenderDispatcher {
    canvas: Option<Box<dyn Canvas>>,
    grid: TextGrid,
}

impl RenderDispatcher {
    /// Text-only dispatcher.
    pub fn new(grid: TextGrid) -> Self {
        Self { canvas: None, grid }
    }

    pub fn with_canvas(mut self, canvas: Box<dyn Canvas>) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn render(
        &self,
        bundle: &RenderBundle,
        max_points: usize,
        out: &mut impl Write,
    ) -> RenderOutcome {
        let reason = match &self.canvas {
            Some(canvas) => match canvas.draw(bundle, max_points) {
                Ok(()) => {
                    info!(canvas = canvas.name(), "rendered on canvas");
                    return RenderOutcome::Canvas {
                        name: canvas.name(),
                    };
                }
                Err(e) => {
                    warn!(canvas = canvas.name(), "falling back to text: {e}");
                    Some(e.to_string())
                }
            },
            None => None,
        };

        let drawing = self.grid.render(
            pipeline::truncate(bundle.points(), max_points),
            bundle.obstacles(),
            bundle.shapes(),
        );
        if let Err(e) = writeln!(out, "{drawing}") {
            warn!("could not write text drawing: {e}");
        }
        RenderOutcome::Text { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ArtEngine, GenerationRequest};
    use std::cell::Cell;
    use std::rc::Rc;

    struct BrokenCanvas;

    impl Canvas for BrokenCanvas {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn draw(&self, _: &RenderBundle, _: usize) -> Result<(), RenderError> {
            Err(RenderError::Unavailable("no display".to_string()))
        }
    }

    struct CountingCanvas(Rc<Cell<usize>>);

    impl Canvas for CountingCanvas {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn draw(&self, bundle: &RenderBundle, max_points: usize) -> Result<(), RenderError> {
            self.0.set(bundle.points().len().min(max_points));
            Ok(())
        }
    }

    fn bundle() -> RenderBundle {
        let req = GenerationRequest::new(4, "render me", "Clear").with_date("20240301");
        ArtEngine::default().generate(&req)
    }

    #[test]
    fn failing_canvas_falls_back_to_text() {
        let dispatcher =
            RenderDispatcher::new(TextGrid::default()).with_canvas(Box::new(BrokenCanvas));
        let mut out = Vec::new();
        let outcome = dispatcher.render(&bundle(), 100, &mut out);
        assert_eq!(
            outcome,
            RenderOutcome::Text {
                reason: Some("canvas unavailable: no display".to_string())
            }
        );
        let drawing = String::from_utf8(out).unwrap();
        assert!(drawing.contains(text::POINT_GLYPH));
    }

    #[test]
    fn no_canvas_means_text() {
        let mut out = Vec::new();
        let outcome = RenderDispatcher::new(TextGrid::default()).render(&bundle(), 10, &mut out);
        assert_eq!(outcome, RenderOutcome::Text { reason: None });
        assert!(!out.is_empty());
    }

    #[test]
    fn working_canvas_skips_text() {
        let drawn = Rc::new(Cell::new(0));
        let dispatcher = RenderDispatcher::new(TextGrid::default())
            .with_canvas(Box::new(CountingCanvas(Rc::clone(&drawn))));
        let mut out = Vec::new();
        let outcome = dispatcher.render(&bundle(), 25, &mut out);
        assert_eq!(outcome, RenderOutcome::Canvas { name: "counting" });
        assert!(out.is_empty());
        assert_eq!(drawn.get(), 25);
    }
}
