//! Pointer input for the carousel view.
//!
//! This module turns raw, named host events into the three logical pointer
//! streams the gesture pipeline consumes (press, move, release), and tracks
//! which phase of a gesture the widget is in.
//!
//! ## Architecture
//!
//! The input modality (mouse or touch) is picked once at mount from host
//! capability detection and decides which event names are routed. After
//! normalization every event carries a horizontal page coordinate, whatever
//! device produced it.
//!
//! ## Modules
//!
//! - `modality` - Mouse/touch selection and the event names for each
//! - `source` - Raw event normalization and the press/move/release streams
//! - `state` - Gesture phase state machine (`Idle` / `Dragging`)

mod modality;
mod source;
mod state;

pub use modality::{EventNames, InputModality, PointerStream};
pub use source::{PointerEvent, PointerSource, RawPointerInput, TouchPoint};
pub use state::GesturePhase;
