//! Gameplay composition: screen elements and the flow controller
//!
//! Single-threaded and frame-driven. The four screen elements never
//! reference each other; `LockpickGame` owns them all, refreshes their
//! viewport rectangles every frame and is the only coordinator between
//! them. Timing is injected as an explicit `now_ms` argument, never read
//! from an ambient clock.

pub mod code_display;
pub mod controller;
pub mod dial;
pub mod element;
pub mod game_over;
pub mod round;

pub use code_display::CodeDisplay;
pub use controller::LockpickGame;
pub use dial::Dial;
pub use element::{Interactable, Lifecycle, PointerEvent, Renderable};
pub use game_over::GameOverScreen;
pub use round::Round;
