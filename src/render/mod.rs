mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::RadarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()>;

    /// Measured pixel width of `text` at `font_size_px` on this surface.
    ///
    /// Label wrapping is driven by this, so the width should reflect what
    /// the backend will actually draw.
    fn measure_text(&self, text: &str, font_size_px: f64) -> f64;
}
