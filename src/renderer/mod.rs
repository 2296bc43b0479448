//! Rendering: the `Painter` boundary plus the WebGPU implementation
//!
//! The game draws exclusively through `Painter`; everything wgpu-specific
//! stays behind it. `ScenePainter` tessellates draw calls into a per-frame
//! vertex list for the pipeline, `RecordPainter` logs them for headless
//! runs and tests.

pub mod glyph;
pub mod pipeline;
pub mod scene;
pub mod tess;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawCommand, RecordPainter, ScenePainter};

use glam::Vec2;

use crate::geom::Rect;

/// RGBA color, components in 0..1
pub type Color = [f32; 4];

/// Opaque color from 8-bit components
pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ]
}

/// Primitive drawing surface handed to every renderable element.
///
/// Coordinates are viewport pixels, y down. Text is drawn centered on the
/// given point with a glyph height of `size` pixels.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn polyline(&mut self, points: &[Vec2], color: Color);
    fn text_centered(&mut self, text: &str, center: Vec2, color: Color, size: f32);
}
