//! Rotary character dial
//!
//! Renders the charset in a circle and lets the player spin it by dragging.
//! Pressing the submit control at the hub appends the character currently
//! aligned with the top of the wheel to an internal buffer; whoever owns the
//! dial drains that buffer and decides what the input means.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::consts::{
    ACTIVE_CHAR_SIZE_RATIO, SUBMIT_SIZE_RATIO, WHEEL_CHAR_SIZE_RATIO, WHEEL_RADIUS_RATIO,
};
use crate::game::element::{Interactable, Renderable};
use crate::geom::Rect;
use crate::renderer::{Color, Painter};
use crate::{polar_to_cartesian, wrap_angle};

pub struct Dial {
    charset: Vec<char>,
    main_color: Color,
    accent_color: Color,
    angle_step: f32,
    /// Always in [0, 2π); mutate only through `set_rotation`/`rotate`
    rotation: f32,
    buffer: String,
    dragging: bool,
    viewport: Option<Rect>,
}

impl Dial {
    /// `charset` must be non-empty.
    pub fn new(charset: &str, main_color: Color, accent_color: Color) -> Self {
        let charset: Vec<char> = charset.chars().collect();
        let angle_step = TAU / charset.len() as f32;
        Self {
            charset,
            main_color,
            accent_color,
            angle_step,
            rotation: 0.0,
            buffer: String::new(),
            dragging: false,
            viewport: None,
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = Some(area);
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = wrap_angle(angle);
    }

    pub fn rotate(&mut self, delta: f32) {
        self.set_rotation(self.rotation + delta);
    }

    /// Charset index nearest the top-of-wheel position
    pub fn active_character_index(&self) -> usize {
        let index = ((TAU - self.rotation) / self.angle_step).round() as i64;
        // A rotation near zero resolves to charset_len; treat any
        // out-of-range result of the float math as the first character
        if index < 0 || index as usize >= self.charset.len() {
            0
        } else {
            index as usize
        }
    }

    pub fn peek_active_character(&self) -> char {
        self.charset[self.active_character_index()]
    }

    pub fn has_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub fn peek_buffer(&self) -> &str {
        &self.buffer
    }

    /// Return the pending characters and leave the buffer empty
    pub fn read_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Point on the wheel circumference at the given angle, with zero
    /// pointing up so increasing angles walk the charset clockwise
    pub fn point_on_wheel(&self, area: &Rect, angle: f32) -> Vec2 {
        area.center() + polar_to_cartesian(Self::wheel_radius(area), angle - FRAC_PI_2)
    }

    fn wheel_radius(area: &Rect) -> f32 {
        area.shortest_axis() * WHEEL_RADIUS_RATIO
    }

    fn char_size(area: &Rect) -> f32 {
        area.shortest_axis() * WHEEL_CHAR_SIZE_RATIO
    }

    fn submit_area(area: &Rect) -> Rect {
        Rect::centered_square(area.center(), Self::char_size(area) * SUBMIT_SIZE_RATIO)
    }

    fn active_char_area(&self, area: &Rect) -> Rect {
        Rect::centered_square(
            self.point_on_wheel(area, 0.0),
            Self::char_size(area) * ACTIVE_CHAR_SIZE_RATIO,
        )
    }
}

impl Interactable for Dial {
    fn begin_interaction(&mut self, point: Vec2) {
        let Some(area) = self.viewport else { return };

        if Self::submit_area(&area).contains(point) {
            let active = self.peek_active_character();
            log::debug!("dial submit: {active}");
            self.buffer.push(active);
        } else if area.contains(point) {
            self.dragging = true;
        }
    }

    fn end_interaction(&mut self) {
        self.dragging = false;
    }

    fn move_interaction(&mut self, from: Vec2, to: Vec2) {
        if !self.dragging {
            return;
        }
        let Some(area) = self.viewport else { return };

        // The rotation imparted this frame is the angle swept by the
        // pointer around the wheel center, taken from the two positions
        // relative to that center. Tracking angles rather than distances
        // makes the wheel follow the pointer exactly at any radius.
        let center = area.center();
        let from = from - center;
        let to = to - center;
        self.rotate(to.y.atan2(to.x) - from.y.atan2(from.x));
    }
}

impl Renderable for Dial {
    fn render(&self, painter: &mut dyn Painter, _now_ms: u64) {
        let Some(area) = self.viewport else { return };

        let char_size = Self::char_size(&area);
        let submit = Self::submit_area(&area);
        let mut buf = [0u8; 4];

        // The whole charset, rotated into place
        for (index, &character) in self.charset.iter().enumerate() {
            let angle = self.rotation + self.angle_step * index as f32;
            painter.text_centered(
                character.encode_utf8(&mut buf),
                self.point_on_wheel(&area, angle),
                self.main_color,
                char_size,
            );
        }

        // Active character, enlarged at the hub
        painter.text_centered(
            self.peek_active_character().encode_utf8(&mut buf),
            area.center(),
            self.main_color,
            submit.h,
        );

        // Submit control frame: an upward-pointed pentagon around the hub
        let frame = [
            Vec2::new(submit.x, submit.y + submit.h / 4.0),
            Vec2::new(submit.x, submit.y + submit.h),
            Vec2::new(submit.x + submit.w, submit.y + submit.h),
            Vec2::new(submit.x + submit.w, submit.y + submit.h / 4.0),
            Vec2::new(submit.x + submit.w / 2.0, submit.y - submit.h / 4.0),
            Vec2::new(submit.x, submit.y + submit.h / 4.0),
        ];
        painter.polyline(&frame, self.accent_color);

        // Highlight frame around the active character on the wheel
        painter.stroke_rect(self.active_char_area(&area), self.main_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const MAIN: Color = [1.0; 4];
    const ACCENT: Color = [0.0, 1.0, 0.0, 1.0];

    fn dial(charset: &str) -> Dial {
        Dial::new(charset, MAIN, ACCENT)
    }

    #[test]
    fn test_rotation_wraps() {
        let mut dial = dial("0123456789");
        dial.set_rotation(TAU + 1.0);
        assert!((dial.rotation() - 1.0).abs() < 1e-5);

        dial.set_rotation(-FRAC_PI_2);
        assert!((dial.rotation() - 1.5 * PI).abs() < 1e-5);

        dial.rotate(PI);
        assert!((dial.rotation() - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_active_index_two_chars() {
        let mut dial = dial("AB");
        dial.set_rotation(0.0);
        assert_eq!(dial.active_character_index(), 0);
        assert_eq!(dial.peek_active_character(), 'A');

        dial.set_rotation(PI);
        assert_eq!(dial.active_character_index(), 1);
        assert_eq!(dial.peek_active_character(), 'B');
    }

    #[test]
    fn test_active_index_at_step_boundaries() {
        let charset = "0123456789";
        let mut dial = dial(charset);
        let step = TAU / charset.len() as f32;
        for expected in 0..charset.len() {
            dial.set_rotation(TAU - expected as f32 * step);
            assert_eq!(dial.active_character_index(), expected);
        }
    }

    #[test]
    fn test_read_buffer_drains() {
        let mut dial = dial("0123456789");
        dial.set_viewport(Rect::new(0.0, 0.0, 200.0, 200.0));

        // Submit control sits at the wheel center
        dial.begin_interaction(Vec2::new(100.0, 100.0));
        dial.begin_interaction(Vec2::new(100.0, 100.0));
        assert!(dial.has_pending());
        assert_eq!(dial.peek_buffer(), "00");

        assert_eq!(dial.read_buffer(), "00");
        assert!(!dial.has_pending());
        assert_eq!(dial.peek_buffer(), "");
    }

    #[test]
    fn test_drag_tracks_pointer_angle() {
        let mut dial = dial("0123456789");
        dial.set_viewport(Rect::new(0.0, 0.0, 200.0, 200.0));

        // Down inside the wheel but outside the submit control
        dial.begin_interaction(Vec2::new(10.0, 10.0));
        assert!(dial.buffer.is_empty());

        // Quarter turn around the center: straight up to straight right
        dial.move_interaction(Vec2::new(100.0, 0.0), Vec2::new(200.0, 100.0));
        assert!((dial.rotation() - FRAC_PI_2).abs() < 1e-4);

        // Releasing stops the wheel from following the pointer
        dial.end_interaction();
        dial.move_interaction(Vec2::new(200.0, 100.0), Vec2::new(100.0, 200.0));
        assert!((dial.rotation() - FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn test_no_viewport_is_inert() {
        let mut dial = dial("0123456789");
        dial.begin_interaction(Vec2::new(100.0, 100.0));
        dial.move_interaction(Vec2::new(100.0, 0.0), Vec2::new(200.0, 100.0));
        assert!(!dial.has_pending());
        assert_eq!(dial.rotation(), 0.0);
        assert!(!dial.dragging);
    }

    #[test]
    fn test_point_on_wheel_zero_is_up() {
        let dial = dial("0123456789");
        let area = Rect::new(0.0, 0.0, 200.0, 200.0);
        let top = dial.point_on_wheel(&area, 0.0);
        assert!((top.x - 100.0).abs() < 1e-3);
        // Radius is 0.35 of the shorter axis
        assert!((top.y - (100.0 - 70.0)).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_rotation_normalized(angle in -1e4f32..1e4f32) {
            let mut dial = Dial::new("0123456789", MAIN, ACCENT);
            dial.set_rotation(angle);
            let stored = dial.rotation();
            prop_assert!((0.0..TAU).contains(&stored));
            // Congruent to the input modulo a full turn
            let turns = ((angle - stored) / TAU).round();
            prop_assert!((angle - (stored + turns * TAU)).abs() < 1e-2);
        }

        #[test]
        fn prop_active_index_in_range(angle in -1e4f32..1e4f32) {
            let charset = "0123456789";
            let mut dial = Dial::new(charset, MAIN, ACCENT);
            dial.set_rotation(angle);
            prop_assert!(dial.active_character_index() < charset.len());
        }
    }
}
