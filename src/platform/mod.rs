//! Platform abstraction layer
//!
//! The core never reads a clock itself; the shell samples `now_ms` once per
//! frame and threads it through the lifecycle and render entry points.

/// Milliseconds from a monotonic reference point
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// Milliseconds from the Unix epoch; monotonic enough for frame timing
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
