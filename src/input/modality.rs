//! Input modality selection.

use crate::constants::{MOUSE_EVENTS, TOUCH_EVENTS};
use serde::{Deserialize, Serialize};

/// Host event names for the three logical pointer streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventNames {
    pub start: &'static str,
    pub move_: &'static str,
    pub end: &'static str,
}

/// Logical pointer stream an event name routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerStream {
    Press,
    Move,
    Release,
}

impl EventNames {
    /// Route a host event name to its logical stream.
    ///
    /// Names belonging to another modality (or to nothing) return `None`.
    pub fn route(&self, name: &str) -> Option<PointerStream> {
        if name == self.start {
            Some(PointerStream::Press)
        } else if name == self.move_ {
            Some(PointerStream::Move)
        } else if name == self.end {
            Some(PointerStream::Release)
        } else {
            None
        }
    }
}

/// Input device family, fixed for the lifetime of a mounted carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputModality {
    #[default]
    Mouse,
    Touch,
}

impl InputModality {
    /// Touch-capable hosts get touch events, everything else mouse events.
    pub fn detect(touch_capable: bool) -> Self {
        if touch_capable { Self::Touch } else { Self::Mouse }
    }

    pub fn event_names(self) -> EventNames {
        match self {
            Self::Mouse => MOUSE_EVENTS,
            Self::Touch => TOUCH_EVENTS,
        }
    }
}
