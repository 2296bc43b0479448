//! Capability traits for game elements
//!
//! Elements opt into input, rendering and lifecycle dispatch independently
//! by implementing the matching trait. Every element stores its own viewport
//! rectangle and gets a fresh one pushed by its owner each frame, before any
//! input or render dispatch; with no rectangle set, every entry point must
//! no-op.

use glam::Vec2;

use crate::renderer::Painter;

/// A pointer event in viewport pixels, already filtered to the primary
/// button/finger by the platform shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Up,
    Move { from: Vec2, to: Vec2 },
}

/// Responds to pointer input
pub trait Interactable {
    fn begin_interaction(&mut self, point: Vec2);
    fn end_interaction(&mut self);
    fn move_interaction(&mut self, from: Vec2, to: Vec2);

    /// Gate for begin/move dispatch. End is never gated, so a drag in
    /// progress can always be released.
    fn interaction_allowed(&self) -> bool {
        true
    }
}

/// Draws into its viewport rectangle
pub trait Renderable {
    fn render(&self, painter: &mut dyn Painter, now_ms: u64);
}

/// Per-frame hooks, fired by the shell in declaration order
pub trait Lifecycle {
    /// Frame start, before any per-frame bookkeeping
    fn on_frame_start(&mut self) {}
    /// After the viewport size was refreshed for this frame
    fn on_frame_initialization(&mut self, _now_ms: u64) {}
    /// Right before the input events are drained
    fn on_pre_events(&mut self) {}
    /// Last chance to apply game logic before drawing
    fn on_pre_render(&mut self, _now_ms: u64) {}
    /// After the render target was cleared
    fn on_post_render_clear(&mut self) {}
    /// After all draw operations, before presenting
    fn on_pre_render_present(&mut self) {}
    /// After the frame was presented on screen
    fn on_post_render_present(&mut self) {}
    /// Frame end, after frame pacing
    fn on_frame_end(&mut self) {}
}
