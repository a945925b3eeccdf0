//! Shared numeric constants for the slider crate.
//!
//! These are the defaults behind [`crate::config::SliderConfig`]; a container
//! can override any of them through its `data-slider-config` attribute.

// ── Stepping ────────────────────────────────────────────────────

/// Delay after an advance/retreat before the slider accepts another step.
pub const SETTLE_MS: u32 = 300;

/// Step distance used until the first item has been measured.
pub const DEFAULT_STEP_PX: f64 = 300.0;

/// Inter-item gap assumed when the track's computed `gap` is not a number.
pub const FALLBACK_GAP_PX: f64 = 20.0;

// ── Debounce ────────────────────────────────────────────────────

/// Quiet period after the last `resize` before re-measuring.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

/// Quiet period after the last track `scroll` before refreshing controls.
pub const SCROLL_DEBOUNCE_MS: u32 = 50;

// ── Edges and drag ──────────────────────────────────────────────

/// Sub-pixel slack when deciding whether the track sits at either end.
pub const EDGE_TOLERANCE_PX: f64 = 5.0;

/// Drag distance multiplier; makes a swipe travel farther than the finger.
pub const DRAG_MULTIPLIER: f64 = 2.0;

// ── DOM ─────────────────────────────────────────────────────────

/// Attribute holding the per-container JSON config.
pub const CONFIG_ATTRIBUTE: &str = "data-slider-config";

/// Class toggled on controls when the track does not overflow.
pub const HIDDEN_CLASS: &str = "hidden";
