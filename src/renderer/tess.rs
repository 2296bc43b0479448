//! Triangle tessellation for 2D primitives
//!
//! Everything on screen ends up as colored triangles in one big vertex
//! list. Lines become thin quads oriented along the segment.

use glam::Vec2;

use super::vertex::Vertex;
use crate::geom::Rect;
use crate::renderer::Color;

/// Stroke width for lines and outlines (pixels)
pub const STROKE_WIDTH: f32 = 2.0;

/// Two triangles covering a rectangle
pub fn fill_rect(rect: Rect, color: Color) -> Vec<Vertex> {
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.w, rect.y + rect.h);

    vec![
        Vertex::new(left, top, color),
        Vertex::new(right, top, color),
        Vertex::new(right, bottom, color),
        Vertex::new(right, bottom, color),
        Vertex::new(left, bottom, color),
        Vertex::new(left, top, color),
    ]
}

/// A quad along the segment from `a` to `b`
pub fn line_segment(a: Vec2, b: Vec2, color: Color) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (STROKE_WIDTH / 2.0);

    let v1 = a + perp;
    let v2 = a - perp;
    let v3 = b + perp;
    let v4 = b - perp;

    vec![
        Vertex::new(v1.x, v1.y, color),
        Vertex::new(v2.x, v2.y, color),
        Vertex::new(v3.x, v3.y, color),
        Vertex::new(v3.x, v3.y, color),
        Vertex::new(v2.x, v2.y, color),
        Vertex::new(v4.x, v4.y, color),
    ]
}

/// Connected line segments through every point in order
pub fn polyline(points: &[Vec2], color: Color) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len().saturating_sub(1) * 6);
    for pair in points.windows(2) {
        vertices.extend(line_segment(pair[0], pair[1], color));
    }
    vertices
}

/// Four segments tracing a rectangle's edges
pub fn stroke_rect(rect: Rect, color: Color) -> Vec<Vertex> {
    let corners = [
        Vec2::new(rect.x, rect.y),
        Vec2::new(rect.x + rect.w, rect.y),
        Vec2::new(rect.x + rect.w, rect.y + rect.h),
        Vec2::new(rect.x, rect.y + rect.h),
        Vec2::new(rect.x, rect.y),
    ];
    polyline(&corners, color)
}
