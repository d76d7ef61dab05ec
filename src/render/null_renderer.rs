use crate::error::RadarResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_circle_count: usize,
    pub last_line_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()> {
        frame.validate()?;
        self.last_circle_count = frame.circles.len();
        self.last_line_count = frame.lines.len();
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size_px: f64) -> f64 {
        // Headless estimate: average glyph advance of 0.6 em.
        font_size_px * 0.6 * text.chars().count() as f64
    }
}
