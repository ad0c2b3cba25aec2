//! Pointer event source - raw host events in, logical pointer streams out.

use super::{EventNames, InputModality, PointerStream};
use crate::stream::Subject;
use std::cell::Cell;
use tracing::trace;

/// One touch contact point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub page_x: f32,
    pub page_y: f32,
}

/// Raw event payload as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPointerInput {
    Mouse { page_x: f32 },
    /// Changed touch points; empty for most `touchend` events
    Touch { touches: Vec<TouchPoint> },
}

/// Normalized pointer event shared by every modality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub page_x: f32,
}

impl PointerEvent {
    pub fn new(page_x: f32) -> Self {
        Self { page_x }
    }
}

/// The three logical pointer streams for one view element.
pub struct PointerSource {
    modality: InputModality,
    names: EventNames,
    press: Subject<PointerEvent>,
    moves: Subject<PointerEvent>,
    release: Subject<PointerEvent>,
    last_x: Cell<f32>,
}

impl PointerSource {
    pub fn new(modality: InputModality) -> Self {
        Self {
            modality,
            names: modality.event_names(),
            press: Subject::new(),
            moves: Subject::new(),
            release: Subject::new(),
            last_x: Cell::new(0.0),
        }
    }

    pub fn modality(&self) -> InputModality {
        self.modality
    }

    pub fn presses(&self) -> &Subject<PointerEvent> {
        &self.press
    }

    pub fn moves(&self) -> &Subject<PointerEvent> {
        &self.moves
    }

    pub fn releases(&self) -> &Subject<PointerEvent> {
        &self.release
    }

    /// Route a named host event to its logical stream.
    ///
    /// Returns the stream it went to, or `None` when the name does not
    /// belong to this session's modality.
    pub fn dispatch(&self, name: &str, raw: &RawPointerInput) -> Option<PointerStream> {
        let Some(stream) = self.names.route(name) else {
            trace!(name, modality = ?self.modality, "ignoring foreign pointer event");
            return None;
        };
        let event = self.normalize(raw);
        self.emit(stream, event);
        Some(stream)
    }

    /// Emit an already-normalized event on a logical stream.
    pub fn emit(&self, stream: PointerStream, event: PointerEvent) {
        self.last_x.set(event.page_x);
        match stream {
            PointerStream::Press => self.press.emit(&event),
            PointerStream::Move => self.moves.emit(&event),
            PointerStream::Release => self.release.emit(&event),
        }
    }

    fn normalize(&self, raw: &RawPointerInput) -> PointerEvent {
        match raw {
            RawPointerInput::Mouse { page_x } => PointerEvent::new(*page_x),
            RawPointerInput::Touch { touches } => match touches.first() {
                Some(touch) => PointerEvent::new(touch.page_x),
                None => PointerEvent::new(self.last_x.get()),
            },
        }
    }
}
