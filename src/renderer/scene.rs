//! Painter implementations
//!
//! `ScenePainter` turns draw calls into the frame's triangle list, rebuilt
//! from scratch every frame and uploaded wholesale by the pipeline.
//! `RecordPainter` keeps the draw calls themselves, for headless runs and
//! for asserting on render output in tests.

use glam::Vec2;

use super::glyph;
use super::tess;
use super::vertex::Vertex;
use crate::geom::Rect;
use crate::renderer::{Color, Painter};

/// Accumulates tessellated triangles for one frame
#[derive(Default)]
pub struct ScenePainter {
    vertices: Vec<Vertex>,
}

impl ScenePainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's triangles
    pub fn begin_frame(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Painter for ScenePainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(tess::fill_rect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(tess::stroke_rect(rect, color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.vertices.extend(tess::line_segment(from, to, color));
    }

    fn polyline(&mut self, points: &[Vec2], color: Color) {
        self.vertices.extend(tess::polyline(points, color));
    }

    fn text_centered(&mut self, text: &str, center: Vec2, color: Color, size: f32) {
        glyph::layout_text(text, center, size, |stroke| {
            self.vertices.extend(tess::polyline(stroke, color));
        });
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    Polyline { points: Vec<Vec2>, color: Color },
    Text { text: String, center: Vec2, color: Color, size: f32 },
}

/// Records draw calls instead of tessellating them
#[derive(Default)]
pub struct RecordPainter {
    pub commands: Vec<DrawCommand>,
}

impl RecordPainter {
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for RecordPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn polyline(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn text_centered(&mut self, text: &str, center: Vec2, color: Color, size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            color,
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_scene_accumulates_and_resets() {
        let mut painter = ScenePainter::new();
        painter.fill_rect(Rect::from_size(10.0, 10.0), WHITE);
        painter.line(Vec2::ZERO, Vec2::new(5.0, 0.0), WHITE);
        assert_eq!(painter.vertices().len(), 12);

        painter.begin_frame();
        assert!(painter.vertices().is_empty());
    }

    #[test]
    fn test_scene_text_produces_triangles() {
        let mut painter = ScenePainter::new();
        painter.text_centered("42", Vec2::new(50.0, 50.0), WHITE, 20.0);
        assert!(!painter.vertices().is_empty());
        assert_eq!(painter.vertices().len() % 3, 0);
    }

    #[test]
    fn test_record_keeps_order() {
        let mut painter = RecordPainter::default();
        painter.fill_rect(Rect::from_size(1.0, 1.0), WHITE);
        painter.text_centered("A", Vec2::ZERO, WHITE, 10.0);

        assert_eq!(painter.commands.len(), 2);
        assert!(matches!(painter.commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(painter.commands[1], DrawCommand::Text { .. }));
    }
}
