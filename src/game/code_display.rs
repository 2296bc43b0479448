//! Typed-code display with per-digit feedback colors
//!
//! The only place the typed code is stored. Renders one slot per digit plus
//! a delete control; pressing the delete control clears the code internally,
//! no coordination with the controller needed.

use glam::Vec2;

use crate::game::element::{Interactable, Renderable};
use crate::geom::Rect;
use crate::renderer::{Color, Painter};

/// Placeholder glyph for digits not yet entered
const MISSING_CHAR: char = '*';

pub struct CodeDisplay {
    max_digits: usize,
    digit_spacing: f32,
    digits: String,
    digit_colors: Vec<Color>,
    neutral_color: Color,
    delete_color: Color,
    viewport: Option<Rect>,
}

impl CodeDisplay {
    pub fn new(
        max_digits: usize,
        digit_spacing: f32,
        neutral_color: Color,
        delete_color: Color,
    ) -> Self {
        Self {
            max_digits,
            digit_spacing,
            digits: String::new(),
            digit_colors: Vec::new(),
            neutral_color,
            delete_color,
            viewport: None,
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = Some(area);
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn digit_colors(&self) -> &[Color] {
        &self.digit_colors
    }

    pub fn is_full(&self) -> bool {
        self.digits.chars().count() == self.max_digits
    }

    /// Replace the stored code, truncating to the slot count. Stored colors
    /// are flushed on every call; they only survive when re-supplied along
    /// with the digits they describe.
    pub fn set_digits(&mut self, new_digits: &str, colors: Option<Vec<Color>>) {
        self.digits = new_digits.chars().take(self.max_digits).collect();
        self.digit_colors = colors.unwrap_or_default();
    }

    pub fn clear(&mut self) {
        self.set_digits("", None);
    }

    fn digit_size(area: &Rect) -> f32 {
        area.h
    }

    /// Half-width of the digit block, for centering it in the viewport
    fn code_extent(&self, area: &Rect) -> f32 {
        let size = Self::digit_size(area);
        (self.max_digits as f32 * size + (self.max_digits as f32 - 1.0) * self.digit_spacing) / 2.0
    }

    fn digit_area(&self, area: &Rect, index: usize) -> Rect {
        let center = area.center();
        let size = Self::digit_size(area);
        let extent = self.code_extent(area);

        Rect::new(
            center.x - extent + index as f32 * (size + self.digit_spacing),
            center.y - size / 2.0,
            size,
            size,
        )
    }

    fn delete_area(area: &Rect) -> Rect {
        Rect::new(area.x + area.w - area.h, area.y, area.h, area.h)
    }
}

impl Interactable for CodeDisplay {
    fn begin_interaction(&mut self, point: Vec2) {
        let Some(area) = self.viewport else { return };

        if Self::delete_area(&area).contains(point) {
            log::debug!("code display cleared");
            self.clear();
        }
    }

    fn end_interaction(&mut self) {}

    fn move_interaction(&mut self, _from: Vec2, _to: Vec2) {}
}

impl Renderable for CodeDisplay {
    fn render(&self, painter: &mut dyn Painter, _now_ms: u64) {
        let Some(area) = self.viewport else { return };

        let size = Self::digit_size(&area);
        let entered: Vec<char> = self.digits.chars().collect();
        let is_full = entered.len() == self.max_digits;

        for slot in 0..self.max_digits {
            let digit = entered.get(slot).copied().unwrap_or(MISSING_CHAR);
            // Feedback colors only apply to a complete code
            let color = if is_full && slot < self.digit_colors.len() {
                self.digit_colors[slot]
            } else {
                self.neutral_color
            };

            let mut buf = [0u8; 4];
            painter.text_centered(
                digit.encode_utf8(&mut buf),
                self.digit_area(&area, slot).center(),
                color,
                size,
            );
        }

        // Delete control: outlined square with an X across it
        let delete = Self::delete_area(&area);
        painter.stroke_rect(delete, self.delete_color);
        painter.line(
            Vec2::new(delete.x, delete.y),
            Vec2::new(delete.x + delete.w, delete.y + delete.h),
            self.delete_color,
        );
        painter.line(
            Vec2::new(delete.x + delete.w, delete.y),
            Vec2::new(delete.x, delete.y + delete.h),
            self.delete_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordPainter};

    const NEUTRAL: Color = [0.5, 0.5, 0.5, 1.0];
    const DELETE: Color = [1.0, 0.0, 0.0, 1.0];
    const GREEN: Color = [0.0, 1.0, 0.0, 1.0];

    fn display() -> CodeDisplay {
        CodeDisplay::new(4, 15.0, NEUTRAL, DELETE)
    }

    #[test]
    fn test_set_digits_truncates() {
        let mut display = display();
        display.set_digits("123456", None);
        assert_eq!(display.digits(), "1234");
        assert!(display.is_full());
    }

    #[test]
    fn test_partial_code_state() {
        let mut display = display();
        display.set_digits("12", None);
        assert_eq!(display.digits(), "12");
        assert!(display.digit_colors().is_empty());
        assert!(!display.is_full());
    }

    #[test]
    fn test_colors_flushed_on_replace() {
        let mut display = display();
        display.set_digits("1234", Some(vec![GREEN; 4]));
        assert_eq!(display.digit_colors().len(), 4);

        display.set_digits("56", None);
        assert!(display.digit_colors().is_empty());
    }

    #[test]
    fn test_delete_control_clears() {
        let mut display = display();
        display.set_viewport(Rect::new(0.0, 0.0, 400.0, 64.0));
        display.set_digits("1234", None);

        // Delete control is the right-aligned 64x64 square
        display.begin_interaction(Vec2::new(370.0, 30.0));
        assert_eq!(display.digits(), "");

        display.set_digits("1234", None);
        display.begin_interaction(Vec2::new(100.0, 30.0));
        assert_eq!(display.digits(), "1234");
    }

    #[test]
    fn test_no_viewport_is_inert() {
        let mut display = display();
        display.set_digits("1234", None);
        display.begin_interaction(Vec2::new(370.0, 30.0));
        assert_eq!(display.digits(), "1234");

        let mut painter = RecordPainter::default();
        display.render(&mut painter, 0);
        assert!(painter.commands.is_empty());
    }

    #[test]
    fn test_render_neutral_until_full() {
        let mut display = display();
        display.set_viewport(Rect::new(0.0, 0.0, 400.0, 64.0));
        // Stale colors with a partial code must not apply
        display.set_digits("12", Some(vec![GREEN; 4]));

        let mut painter = RecordPainter::default();
        display.render(&mut painter, 0);

        let texts: Vec<_> = painter
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, color, .. } => Some((text.clone(), *color)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[0].0, "1");
        assert_eq!(texts[2].0, "*");
        assert!(texts.iter().all(|(_, color)| *color == NEUTRAL));
    }

    #[test]
    fn test_render_colors_when_full() {
        let mut display = display();
        display.set_viewport(Rect::new(0.0, 0.0, 400.0, 64.0));
        display.set_digits("1234", Some(vec![GREEN; 4]));

        let mut painter = RecordPainter::default();
        display.render(&mut painter, 0);

        let colored = painter
            .commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Text { color, .. } if *color == GREEN))
            .count();
        assert_eq!(colored, 4);
    }
}
