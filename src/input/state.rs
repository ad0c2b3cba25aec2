//! Gesture phase state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (first live sample after a commit)
//! Dragging -> Dragging         (further live samples, delta updated)
//! Dragging -> Idle             (commit at release)
//! ```
//!
//! A gesture whose release never arrives stays in `Dragging`.

use crate::carousel::CarouselEvent;

/// Phase of the current pointer gesture, as seen by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    /// No active gesture
    #[default]
    Idle,

    /// Live samples are arriving
    Dragging {
        /// Latest horizontal displacement from the gesture origin
        delta: f32,
    },
}

impl GesturePhase {
    /// Returns true while live samples are arriving
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Latest live displacement, if dragging
    pub fn live_delta(&self) -> Option<f32> {
        match self {
            Self::Dragging { delta } => Some(*delta),
            Self::Idle => None,
        }
    }

    /// Move to the phase that follows `event`.
    pub fn advance(&mut self, event: &CarouselEvent) {
        *self = if event.is_commit() {
            Self::Idle
        } else {
            Self::Dragging {
                delta: event.horizontal_delta(),
            }
        };
    }
}
