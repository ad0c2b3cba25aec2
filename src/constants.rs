//! Widget-wide constants.
//!
//! Centralizes the fixed thresholds, DOM identifiers and event names so the
//! gesture pipeline never hardcodes them inline.

use crate::input::EventNames;

// ============================================================================
// Gesture Thresholds
// ============================================================================

/// Minimum absolute horizontal displacement (pixels) for a drop to change panel
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Scopes on the reducer path slower than this (ms) are reported by the profiler
pub const REDUCE_WARN_MS: f64 = 2.0;

// ============================================================================
// Host Layout
// ============================================================================

/// Id of the element that receives pointer events and defines the viewport width
pub const VIEW_ELEMENT_ID: &str = "carousel";

// ============================================================================
// Event Names
// ============================================================================

/// Event names used when the host has no touch support
pub const MOUSE_EVENTS: EventNames = EventNames {
    start: "mousedown",
    move_: "mousemove",
    end: "mouseup",
};

/// Event names used on touch-capable hosts
pub const TOUCH_EVENTS: EventNames = EventNames {
    start: "touchstart",
    move_: "touchmove",
    end: "touchend",
};
