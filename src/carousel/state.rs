//! Carousel data model - gesture samples, drop events and the folded state.

use serde::{Deserialize, Serialize};

/// Horizontal displacement (pixels) from the start of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    pub horizontal_delta: f32,
}

impl GestureSample {
    pub fn new(horizontal_delta: f32) -> Self {
        Self { horizontal_delta }
    }
}

/// Final displacement of a completed gesture joined with the latest viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropEvent {
    pub horizontal_delta: f32,
    pub viewport_width: f32,
}

impl DropEvent {
    pub fn new(horizontal_delta: f32, viewport_width: f32) -> Self {
        Self {
            horizontal_delta,
            viewport_width,
        }
    }
}

/// Input to the reducer: a live drag sample or a commit at release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CarouselEvent {
    Live(GestureSample),
    Commit(DropEvent),
}

impl CarouselEvent {
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Commit(_))
    }

    pub fn horizontal_delta(&self) -> f32 {
        match self {
            Self::Live(sample) => sample.horizontal_delta,
            Self::Commit(drop) => drop.horizontal_delta,
        }
    }
}

/// Authoritative carousel state. Only the reducer writes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CarouselState {
    /// Offset being rendered; follows the pointer while dragging
    pub current_offset: f32,
    /// Offset the container should settle at; equal to `current_offset` today
    pub target_offset: f32,
    /// Committed panel
    pub panel_index: usize,
    /// Last known panel width; 0 until the first commit
    pub panel_width: f32,
}

impl CarouselState {
    /// State at rest on `panel_index`, offsets snapped to the panel boundary.
    pub fn resting(panel_index: usize, panel_width: f32) -> Self {
        let offset = panel_offset(panel_index, panel_width);
        Self {
            current_offset: offset,
            target_offset: offset,
            panel_index,
            panel_width,
        }
    }

    /// Offset of the committed panel boundary
    pub fn rest_offset(&self) -> f32 {
        panel_offset(self.panel_index, self.panel_width)
    }

    /// Returns true if the offsets sit exactly on the committed panel boundary
    pub fn is_at_rest(&self) -> bool {
        self.current_offset == self.rest_offset() && self.target_offset == self.rest_offset()
    }
}

/// `-(index * width)`, written as a subtraction so panel 0 yields `0.0`, not `-0.0`.
pub(crate) fn panel_offset(panel_index: usize, panel_width: f32) -> f32 {
    0.0 - panel_index as f32 * panel_width
}
