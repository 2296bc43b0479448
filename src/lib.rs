//! Codewheel - a rotary-dial lockpicking minigame
//!
//! Core modules:
//! - `game`: Screen elements and the flow controller (dial, code display,
//!   round HUD, game over screen)
//! - `renderer`: WebGPU rendering pipeline and stroke-glyph text
//! - `platform`: Browser/native platform abstraction
//! - `config`: Data-driven game tuning

pub mod config;
pub mod game;
pub mod geom;
pub mod platform;
pub mod renderer;

pub use config::GameConfig;
pub use game::LockpickGame;

use glam::Vec2;
use std::f32::consts::TAU;

/// Game layout constants
pub mod consts {
    /// Wheel radius as a fraction of the shorter viewport axis
    pub const WHEEL_RADIUS_RATIO: f32 = 0.35;
    /// Wheel character glyph size as a fraction of the shorter viewport axis
    pub const WHEEL_CHAR_SIZE_RATIO: f32 = 0.125;
    /// Active-character highlight frame, relative to the wheel glyph size
    pub const ACTIVE_CHAR_SIZE_RATIO: f32 = 1.2;
    /// Submit control square, relative to the wheel glyph size
    pub const SUBMIT_SIZE_RATIO: f32 = 1.2;

    /// Thickness of the HUD stage/timer bars (pixels)
    pub const BAR_THICKNESS: f32 = 10.0;
    /// Height of the code display row (pixels)
    pub const CODE_ROW_HEIGHT: f32 = 64.0;
    /// Margin around the code display row (pixels)
    pub const CODE_ROW_MARGIN: f32 = 25.0;

    /// Freeze after a correct submission, before play resumes or ends (ms)
    pub const STAGE_CLEAR_PAUSE_MS: u64 = 1050;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid of a tiny negative can round up to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle_range() {
        for angle in [-10.0, -TAU, -1.0, 0.0, 1.0, TAU, TAU + 1.0, 100.0] {
            let wrapped = wrap_angle(angle);
            assert!(
                (0.0..TAU).contains(&wrapped),
                "wrap_angle({angle}) = {wrapped}"
            );
        }
    }

    #[test]
    fn test_wrap_angle_congruent() {
        let wrapped = wrap_angle(-std::f32::consts::FRAC_PI_2);
        assert!((wrapped - 1.5 * std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_polar_to_cartesian_axes() {
        let right = polar_to_cartesian(2.0, 0.0);
        assert!((right.x - 2.0).abs() < 1e-5 && right.y.abs() < 1e-5);

        let down = polar_to_cartesian(3.0, std::f32::consts::FRAC_PI_2);
        assert!(down.x.abs() < 1e-4 && (down.y - 3.0).abs() < 1e-5);
    }
}
