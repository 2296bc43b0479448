//! Game-flow controller
//!
//! Owns the four screen elements, pushes a fresh viewport rectangle into
//! each of them every frame and routes input, logic and rendering to the
//! subset matching the round status. All cross-element gameplay (merging
//! dial input into the code display, feedback colors, submissions, the
//! stage-clear freeze, restarts) lives here; the elements themselves stay
//! strangers to each other.

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::{CODE_ROW_HEIGHT, CODE_ROW_MARGIN, STAGE_CLEAR_PAUSE_MS};
use crate::game::code_display::CodeDisplay;
use crate::game::dial::Dial;
use crate::game::element::{Interactable, Lifecycle, Renderable};
use crate::game::game_over::GameOverScreen;
use crate::game::round::Round;
use crate::geom::Rect;
use crate::renderer::{Color, Painter};

pub struct LockpickGame {
    round: Round,
    code_display: CodeDisplay,
    dial: Dial,
    game_over: GameOverScreen,

    correct_color: Color,
    close_color: Color,
    wrong_color: Color,

    /// While active, input is frozen and the pre-clear screen keeps
    /// rendering so the player sees the all-green code before it goes away
    stage_clear_active: bool,
    stage_clear_start_ms: u64,

    /// Sampled once per frame at frame initialization; input routing and
    /// rendering decisions within the frame all use this one reading
    frame_now_ms: u64,

    viewport: Option<Rect>,
}

impl LockpickGame {
    pub fn new(config: &GameConfig, now_ms: u64, seed: u64) -> Self {
        let palette = &config.palette;
        Self {
            round: Round::new(
                &config.charset,
                config.code_length,
                config.stages,
                config.stage_time_ms,
                palette.wrong,
                palette.close,
                now_ms,
                seed,
            ),
            code_display: CodeDisplay::new(
                config.code_length,
                config.digit_spacing,
                palette.text,
                palette.delete,
            ),
            dial: Dial::new(&config.charset, palette.text, palette.correct),
            game_over: GameOverScreen::new(
                palette.win_background,
                palette.lose_background,
                palette.game_over_text,
            ),
            correct_color: palette.correct,
            close_color: palette.close,
            wrong_color: palette.wrong,
            stage_clear_active: false,
            stage_clear_start_ms: 0,
            frame_now_ms: now_ms,
            viewport: None,
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = Some(area);
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Recompute every element's sub-region from the current viewport and
    /// push them down. Elements only ever see rectangles set here.
    fn refresh_layout(&mut self) {
        let Some(area) = self.viewport else { return };

        let code_area = Rect::new(
            area.x + CODE_ROW_MARGIN,
            area.y + CODE_ROW_MARGIN,
            area.w - 2.0 * CODE_ROW_MARGIN,
            CODE_ROW_HEIGHT,
        );
        let dial_area = Rect::new(
            area.x,
            code_area.y + code_area.h,
            area.w,
            area.h - (CODE_ROW_MARGIN + CODE_ROW_HEIGHT),
        );

        self.code_display.set_viewport(code_area);
        self.dial.set_viewport(dial_area);
        // HUD and game over screen go full size
        self.round.set_viewport(area);
        self.game_over.set_viewport(area);
    }

    /// Freeze play for a beat so the cleared stage stays visible. The
    /// outcome shown afterwards is latched here, from the stage counter as
    /// it stands at pause start; a deadline expiring during the pause does
    /// not demote a win.
    fn begin_stage_clear(&mut self, now_ms: u64) {
        self.stage_clear_active = true;
        self.stage_clear_start_ms = now_ms;
        self.game_over.set_outcome(self.round.stages_cleared());
    }

    fn end_stage_clear(&mut self) {
        self.code_display.clear();
    }

    /// Drain the dial and merge its characters into the typed code. Once
    /// the code is full it gets feedback colors and goes to the round for
    /// scoring; a correct submission starts the stage-clear freeze.
    fn merge_pending_input(&mut self, now_ms: u64) {
        if !self.dial.has_pending() {
            return;
        }

        let mut input = String::new();
        // A full code starts over on the next character
        if !self.code_display.is_full() {
            input.push_str(self.code_display.digits());
        }
        input.push_str(&self.dial.read_buffer());
        let input: String = input.chars().take(self.round.code_length()).collect();

        if !self.round.is_full_code(&input) {
            self.code_display.set_digits(&input, None);
        } else {
            let colors = self
                .round
                .evaluate_error(&input)
                .iter()
                .map(|&error| match error {
                    0 => self.correct_color,
                    1 => self.close_color,
                    _ => self.wrong_color,
                })
                .collect();
            self.code_display.set_digits(&input, Some(colors));
        }

        if self.round.submit_code(self.code_display.digits()) {
            self.begin_stage_clear(now_ms);
        }
    }
}

impl Lifecycle for LockpickGame {
    fn on_frame_initialization(&mut self, now_ms: u64) {
        self.frame_now_ms = now_ms;

        if self.stage_clear_active
            && now_ms > self.stage_clear_start_ms + STAGE_CLEAR_PAUSE_MS
        {
            self.stage_clear_active = false;
            self.end_stage_clear();
        }

        self.refresh_layout();
    }

    fn on_pre_render(&mut self, now_ms: u64) {
        if self.round.is_round_on(now_ms) {
            self.merge_pending_input(now_ms);
        } else if self.game_over.consume_restart_requested() {
            self.game_over.set_outcome(false);
            self.code_display.clear();
            self.dial.clear_buffer();
            self.round.restart(now_ms);
        }
    }
}

impl Interactable for LockpickGame {
    fn begin_interaction(&mut self, point: Vec2) {
        if !self.interaction_allowed() || self.viewport.is_none() {
            return;
        }

        if self.round.is_round_on(self.frame_now_ms) {
            self.code_display.begin_interaction(point);
            self.dial.begin_interaction(point);
        } else {
            self.game_over.begin_interaction(point);
        }
    }

    fn end_interaction(&mut self) {
        // Never gated: a drag started before a freeze must still be
        // releasable, or the wheel would stay stuck to the pointer
        if self.round.is_round_on(self.frame_now_ms) {
            self.code_display.end_interaction();
            self.dial.end_interaction();
        } else {
            self.game_over.end_interaction();
        }
    }

    fn move_interaction(&mut self, from: Vec2, to: Vec2) {
        if !self.interaction_allowed() || self.viewport.is_none() {
            return;
        }

        if self.round.is_round_on(self.frame_now_ms) {
            self.code_display.move_interaction(from, to);
            self.dial.move_interaction(from, to);
        } else {
            self.game_over.move_interaction(from, to);
        }
    }

    fn interaction_allowed(&self) -> bool {
        !self.stage_clear_active
    }
}

impl Renderable for LockpickGame {
    fn render(&self, painter: &mut dyn Painter, now_ms: u64) {
        if self.viewport.is_none() {
            return;
        }

        // During the stage-clear freeze the gameplay screen stays up even
        // if the round just ended; the result screen waits for the freeze
        if self.stage_clear_active || self.round.is_round_on(now_ms) {
            self.dial.render(painter, now_ms);
            self.code_display.render(painter, now_ms);
            self.round.render(painter, now_ms);
        } else {
            self.game_over.render(painter, now_ms);
        }
    }
}
