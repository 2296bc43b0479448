//! Data-driven game tuning
//!
//! Persisted separately in LocalStorage so a deployment can retune the game
//! without a rebuild. Everything here is read once at startup; there is no
//! runtime reconfiguration.

use serde::{Deserialize, Serialize};

use crate::renderer::{Color, rgb8};

/// Color assignments for every on-screen element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Wheel characters and code digits
    pub text: Color,
    /// Digits of a code that has not been fully entered
    pub neutral: Color,
    /// Feedback for a digit that is not even close
    pub wrong: Color,
    /// Feedback for a digit one step away from the target
    pub close: Color,
    /// Feedback for an exactly matching digit
    pub correct: Color,
    /// Delete control outline
    pub delete: Color,
    pub win_background: Color,
    pub lose_background: Color,
    pub game_over_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: rgb8(0, 230, 255),
            neutral: rgb8(200, 200, 200),
            wrong: rgb8(235, 64, 52),
            close: rgb8(235, 171, 52),
            correct: rgb8(82, 235, 52),
            delete: rgb8(235, 64, 52),
            win_background: rgb8(148, 213, 247),
            lose_background: rgb8(247, 148, 148),
            game_over_text: rgb8(94, 94, 94),
        }
    }
}

/// Constructor-time game parameters, immutable after startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Characters on the dial. Must be non-empty.
    pub charset: String,
    /// Digits in the secret code
    pub code_length: usize,
    /// Correct submissions required to win a round
    pub stages: u32,
    /// Time granted per stage; the round deadline is `stages` times this
    pub stage_time_ms: u64,
    /// Gap between code digit slots (pixels)
    pub digit_spacing: f32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            charset: "0123456789".to_string(),
            code_length: 4,
            stages: 3,
            stage_time_ms: 60_000,
            digit_spacing: 15.0,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "codewheel_config";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded game config from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default game config");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Game config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.charset, "0123456789");
        assert_eq!(config.code_length, 4);
        assert_eq!(config.stages, 3);
        assert_eq!(config.stage_time_ms, 60_000);
    }

    #[test]
    fn test_config_survives_json() {
        let config = GameConfig {
            charset: "ABCDEF".to_string(),
            code_length: 6,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.charset, "ABCDEF");
        assert_eq!(back.code_length, 6);
    }
}
