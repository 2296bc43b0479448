//! Full-screen win/lose panel
//!
//! Communicates with the rest of the game through a latched restart flag:
//! any press inside the panel raises it, and the controller consumes it at
//! its own pace. Repeated presses before consumption change nothing.

use glam::Vec2;

use crate::game::element::{Interactable, Renderable};
use crate::geom::Rect;
use crate::renderer::{Color, Painter};

const WIN_MESSAGE: &str = "LOCK OPENED!";
const LOSE_MESSAGE: &str = "LOCKED OUT!";

pub struct GameOverScreen {
    success: bool,
    win_back_color: Color,
    lose_back_color: Color,
    foreground_color: Color,
    restart_requested: bool,
    viewport: Option<Rect>,
}

impl GameOverScreen {
    pub fn new(win_back_color: Color, lose_back_color: Color, foreground_color: Color) -> Self {
        Self {
            success: false,
            win_back_color,
            lose_back_color,
            foreground_color,
            restart_requested: false,
            viewport: None,
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = Some(area);
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    pub fn set_outcome(&mut self, won: bool) {
        self.success = won;
    }

    pub fn peek_restart_requested(&self) -> bool {
        self.restart_requested
    }

    /// Return the latched flag and lower it
    pub fn consume_restart_requested(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }
}

impl Interactable for GameOverScreen {
    fn begin_interaction(&mut self, _point: Vec2) {
        if self.viewport.is_none() {
            return;
        }
        self.restart_requested = true;
    }

    fn end_interaction(&mut self) {}

    fn move_interaction(&mut self, _from: Vec2, _to: Vec2) {}
}

impl Renderable for GameOverScreen {
    fn render(&self, painter: &mut dyn Painter, _now_ms: u64) {
        let Some(area) = self.viewport else { return };

        let background = if self.success {
            self.win_back_color
        } else {
            self.lose_back_color
        };
        painter.fill_rect(area, background);

        let message = if self.success { WIN_MESSAGE } else { LOSE_MESSAGE };
        painter.text_centered(message, area.center(), self.foreground_color, area.h / 6.0);
    }
}
