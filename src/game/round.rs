//! Round progression: secret code, stage counter, countdown
//!
//! Owns the only copy of the secret code and the only source of randomness.
//! Also renders the HUD (one bar per remaining stage, one shrinking timer
//! bar), which is why it is a screen element like the rest.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::BAR_THICKNESS;
use crate::game::element::Renderable;
use crate::geom::Rect;
use crate::renderer::{Color, Painter};

/// Error distance reported for digits the player has not entered yet.
/// Relevant distances are 0 (match), 1 (close) and anything above (wrong).
const MISSING_DIGIT_ERROR: u8 = 9;

pub struct Round {
    charset: Vec<char>,
    code_length: usize,
    code: String,
    stages: u32,
    stages_left: u32,
    /// Total round time; fixed at construction, never recomputed mid-round
    solve_time_ms: u64,
    timer_start_ms: u64,
    primary_color: Color,
    accent_color: Color,
    rng: Pcg32,
    viewport: Option<Rect>,
}

impl Round {
    /// `charset` must be non-empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        charset: &str,
        code_length: usize,
        stages: u32,
        stage_time_ms: u64,
        primary_color: Color,
        accent_color: Color,
        now_ms: u64,
        seed: u64,
    ) -> Self {
        let mut round = Self {
            charset: charset.chars().collect(),
            code_length,
            code: String::new(),
            stages,
            stages_left: stages,
            solve_time_ms: stage_time_ms * stages as u64,
            timer_start_ms: now_ms,
            primary_color,
            accent_color,
            rng: Pcg32::seed_from_u64(seed),
            viewport: None,
        };
        round.restart(now_ms);
        round
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = Some(area);
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    #[cfg(test)]
    pub(crate) fn secret_code(&self) -> &str {
        &self.code
    }

    /// Reset the countdown to now, restore the stage counter and draw a
    /// fresh secret code
    pub fn restart(&mut self, now_ms: u64) {
        self.timer_start_ms = now_ms;
        self.stages_left = self.stages;
        self.generate_new_code();
        log::info!("round started: {} stages", self.stages);
    }

    /// Draw `code_length` characters uniformly from the charset
    pub fn generate_new_code(&mut self) {
        self.code = (0..self.code_length)
            .map(|_| self.charset[self.rng.random_range(0..self.charset.len())])
            .collect();
    }

    pub fn is_full_code(&self, input: &str) -> bool {
        input.chars().count() == self.code_length
    }

    /// Per-digit distance between the input and the secret code, aligned
    /// with the secret code. Missing digits get the fixed high sentinel.
    pub fn evaluate_error(&self, input: &str) -> Vec<u8> {
        let input: Vec<char> = input.chars().collect();
        self.code
            .chars()
            .enumerate()
            .map(|(slot, expected)| match input.get(slot) {
                Some(&entered) => {
                    let distance = (entered as u32).abs_diff(expected as u32);
                    u8::try_from(distance).unwrap_or(u8::MAX)
                }
                None => MISSING_DIGIT_ERROR,
            })
            .collect()
    }

    pub fn check_code(&self, input: &str) -> bool {
        self.code == input
    }

    /// Exact-match submission. A correct code with stages still left
    /// advances one stage and draws the next secret code; the stage counter
    /// never goes below zero.
    pub fn submit_code(&mut self, input: &str) -> bool {
        let matched = self.check_code(input);

        if matched && self.stages_left > 0 {
            self.stages_left -= 1;
            self.generate_new_code();
            log::info!("stage cleared, {} left", self.stages_left);
        }

        matched
    }

    /// Remaining time, normalized to [0, 1] and monotonically decreasing
    pub fn time_left(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.timer_start_ms) as f32;
        1.0 - (elapsed / self.solve_time_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_time_up(&self, now_ms: u64) -> bool {
        self.time_left(now_ms) <= 0.0
    }

    pub fn stages_cleared(&self) -> bool {
        self.stages_left < 1
    }

    pub fn is_round_over(&self, now_ms: u64) -> bool {
        self.is_time_up(now_ms) || self.stages_cleared()
    }

    pub fn is_round_on(&self, now_ms: u64) -> bool {
        !self.is_round_over(now_ms)
    }

    fn stage_area(&self, area: &Rect, sector: u32) -> Rect {
        let portion = area.w / self.stages as f32;
        Rect::new(
            area.x + sector as f32 * portion,
            area.y,
            portion - BAR_THICKNESS,
            BAR_THICKNESS,
        )
    }

    fn timer_area(&self, area: &Rect, now_ms: u64) -> Rect {
        Rect::new(
            area.x,
            area.y + area.h - BAR_THICKNESS,
            self.time_left(now_ms) * area.w,
            BAR_THICKNESS,
        )
    }

    fn render_bar(&self, painter: &mut dyn Painter, bar: Rect) {
        painter.fill_rect(bar, self.accent_color);
        painter.stroke_rect(bar, self.primary_color);
    }
}

impl Renderable for Round {
    fn render(&self, painter: &mut dyn Painter, now_ms: u64) {
        let Some(area) = self.viewport else { return };

        for sector in 0..self.stages_left {
            self.render_bar(painter, self.stage_area(&area, sector));
        }

        self.render_bar(painter, self.timer_area(&area, now_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: Color = [1.0; 4];
    const ACCENT: Color = [0.0, 1.0, 0.0, 1.0];

    fn round(seed: u64) -> Round {
        Round::new("0123456789", 4, 3, 60_000, PRIMARY, ACCENT, 0, seed)
    }

    /// A full-length input that differs from the secret in every position
    fn all_wrong(round: &Round) -> String {
        round
            .secret_code()
            .chars()
            .map(|c| if c == '0' { '5' } else { '0' })
            .collect()
    }

    #[test]
    fn test_generated_code_shape() {
        let round = round(1);
        assert_eq!(round.secret_code().len(), 4);
        assert!(round.secret_code().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_wrong_submission_keeps_stages() {
        let mut round = round(7);
        let wrong = all_wrong(&round);
        assert!(!round.submit_code(&wrong));
        assert_eq!(round.stages_left, 3);
    }

    #[test]
    fn test_correct_submission_advances() {
        let mut round = round(42);
        let secret = round.secret_code().to_string();

        assert!(round.submit_code(&secret));
        assert_eq!(round.stages_left, 2);
        assert_ne!(round.secret_code(), secret);

        // The consumed code no longer matches
        assert!(!round.submit_code(&secret));
        assert_eq!(round.stages_left, 2);
    }

    #[test]
    fn test_stage_counter_floors_at_zero() {
        let mut round = round(3);
        round.stages_left = 0;
        let secret = round.secret_code().to_string();

        assert!(round.submit_code(&secret));
        assert_eq!(round.stages_left, 0);
    }

    #[test]
    fn test_evaluate_error_exact_match() {
        let mut round = round(9);
        round.code = "1234".to_string();
        assert_eq!(round.evaluate_error("1234"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_evaluate_error_missing_digits() {
        let mut round = round(9);
        round.code = "1234".to_string();
        assert_eq!(round.evaluate_error(""), vec![9, 9, 9, 9]);
        assert_eq!(round.evaluate_error("13"), vec![0, 1, 9, 9]);
    }

    #[test]
    fn test_evaluate_error_distances() {
        let mut round = round(9);
        round.code = "5555".to_string();
        assert_eq!(round.evaluate_error("5467"), vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_time_left_decreases_and_clamps() {
        let round = round(1);
        let total = 3 * 60_000;

        assert_eq!(round.time_left(0), 1.0);
        let mut previous = 1.0;
        for now in [1_000, 90_000, total / 2, total - 1, total, total + 1] {
            let left = round.time_left(now);
            assert!(left <= previous);
            assert!(left >= 0.0);
            previous = left;
        }
        assert_eq!(round.time_left(total), 0.0);
        assert_eq!(round.time_left(total * 10), 0.0);
        assert!(round.is_time_up(total));
        assert!(!round.is_time_up(total - 1));
    }

    #[test]
    fn test_round_over_conditions() {
        let mut round = round(2);
        assert!(round.is_round_on(0));

        // Stages cleared
        round.stages_left = 0;
        assert!(round.stages_cleared());
        assert!(round.is_round_over(0));

        // Time up
        let mut round = self::round(2);
        assert!(round.is_round_over(3 * 60_000));
        round.restart(500_000);
        assert!(round.is_round_on(500_000));
        assert_eq!(round.stages_left, 3);
    }

    #[test]
    fn test_restart_rewinds_everything() {
        let mut round = round(11);
        let secret = round.secret_code().to_string();
        round.submit_code(&secret);
        assert_eq!(round.stages_left, 2);

        round.restart(10_000);
        assert_eq!(round.stages_left, 3);
        assert_eq!(round.time_left(10_000), 1.0);
    }

    #[test]
    fn test_hud_renders_stage_and_timer_bars() {
        use crate::renderer::{DrawCommand, RecordPainter};

        let mut round = round(5);
        round.set_viewport(Rect::new(0.0, 0.0, 300.0, 200.0));

        let mut painter = RecordPainter::default();
        round.render(&mut painter, 0);

        // Three stage bars plus the timer bar, each filled and outlined
        let fills = painter
            .commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(fills, 4);

        // Timer bar spans the full width at t=0
        let full_width = painter.commands.iter().any(|command| {
            matches!(command, DrawCommand::FillRect { rect, .. }
                if rect.w == 300.0 && rect.y == 190.0)
        });
        assert!(full_width);
    }
}
