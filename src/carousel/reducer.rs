//! Carousel state reducer.
//!
//! A left fold over the merged live/commit event stream. Each event yields
//! exactly one new state, in arrival order.
//!
//! - Live sample: the container follows the pointer from the committed
//!   boundary, `offset = -(index * width) + delta`.
//! - Commit: a displacement beyond the threshold moves one panel in the
//!   opposite direction of the drag (left drag advances), clamped to the
//!   panel range; anything smaller snaps back. The commit also adopts the
//!   drop's viewport width and snaps both offsets to the boundary.

use super::state::{CarouselEvent, CarouselState, DropEvent, GestureSample, panel_offset};
use crate::constants::{REDUCE_WARN_MS, SWIPE_THRESHOLD};
use crate::profile_scope;
use tracing::warn;

/// Pure transition function for [`CarouselState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselReducer {
    panel_count: usize,
    threshold: f32,
}

impl CarouselReducer {
    pub fn new(panel_count: usize) -> Self {
        if panel_count <= 1 {
            warn!(panel_count, "carousel has no panel to move to; commits will always snap back");
        }
        Self {
            panel_count,
            threshold: SWIPE_THRESHOLD,
        }
    }

    /// Override the commit threshold (pixels).
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Panel index a drop with `delta` commits to, starting from `index`.
    pub fn target_index(&self, index: usize, delta: f32) -> usize {
        if delta.abs() <= self.threshold || self.panel_count <= 1 {
            return index;
        }
        if delta < 0.0 {
            (index + 1).min(self.panel_count - 1)
        } else {
            index.saturating_sub(1)
        }
    }

    /// Next state after `event`.
    pub fn step(&self, state: &CarouselState, event: &CarouselEvent) -> CarouselState {
        profile_scope!("carousel_reduce", REDUCE_WARN_MS);

        match event {
            CarouselEvent::Live(sample) => self.follow(state, sample),
            CarouselEvent::Commit(drop) => self.commit(state, drop),
        }
    }

    /// Apply `event` to the owned state in place.
    pub fn apply(&self, state: &mut CarouselState, event: &CarouselEvent) {
        *state = self.step(state, event);
    }

    /// Fold `events` from `initial`, yielding every intermediate state.
    pub fn reduce<I>(&self, events: I, initial: CarouselState) -> impl Iterator<Item = CarouselState>
    where
        I: IntoIterator<Item = CarouselEvent>,
    {
        let reducer = *self;
        events.into_iter().scan(initial, move |state, event| {
            reducer.apply(state, &event);
            Some(*state)
        })
    }

    fn follow(&self, state: &CarouselState, sample: &GestureSample) -> CarouselState {
        let offset = panel_offset(state.panel_index, state.panel_width) + sample.horizontal_delta;
        CarouselState {
            current_offset: offset,
            target_offset: offset,
            ..*state
        }
    }

    fn commit(&self, state: &CarouselState, drop: &DropEvent) -> CarouselState {
        let panel_index = self.target_index(state.panel_index, drop.horizontal_delta);
        CarouselState::resting(panel_index, drop.viewport_width)
    }
}
