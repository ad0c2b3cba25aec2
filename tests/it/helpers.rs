//! Test helpers for mounting carousels and scripting gestures.

use std::cell::RefCell;
use std::rc::Rc;
use swipeboard::{Carousel, CarouselConfig, CarouselState, StaticHost, TransformLog};

/// Default view width used across tests
pub const WIDTH: f32 = 300.0;

/// Mount a mouse carousel with `panels` panels on a `WIDTH`-wide view.
pub fn mount(panels: usize) -> Carousel<TransformLog> {
    mount_with(StaticHost::new("carousel", WIDTH, panels))
}

pub fn mount_with(host: StaticHost) -> Carousel<TransformLog> {
    Carousel::mount(&host, TransformLog::new(), CarouselConfig::default())
        .expect("test host has a carousel view")
}

/// Record every state the carousel emits from now on.
pub fn record_states(carousel: &Carousel<TransformLog>) -> Rc<RefCell<Vec<CarouselState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    carousel.subscribe_states(move |state| sink.borrow_mut().push(*state));
    seen
}

/// Builder for a scripted press -> moves -> release gesture.
pub struct Gesture {
    origin: f32,
    moves: Vec<f32>,
    release: bool,
}

impl Gesture {
    /// Gesture pressed at `origin`.
    pub fn at(origin: f32) -> Self {
        Self {
            origin,
            moves: Vec::new(),
            release: true,
        }
    }

    /// Move by `delta` relative to the origin.
    pub fn drag_by(mut self, delta: f32) -> Self {
        self.moves.push(self.origin + delta);
        self
    }

    /// Leave the gesture open (no release).
    pub fn abandoned(mut self) -> Self {
        self.release = false;
        self
    }

    pub fn run(&self, carousel: &Carousel<TransformLog>) {
        carousel.press(self.origin);
        for x in &self.moves {
            carousel.move_to(*x);
        }
        if self.release {
            carousel.release(self.moves.last().copied().unwrap_or(self.origin));
        }
    }
}

/// A full swipe by `delta` starting at x = 500.
pub fn swipe(carousel: &Carousel<TransformLog>, delta: f32) {
    Gesture::at(500.0).drag_by(delta / 2.0).drag_by(delta).run(carousel);
}

/// Move the carousel to `panel` with full-width left swipes.
pub fn advance_to(carousel: &Carousel<TransformLog>, panel: usize) {
    for _ in 0..panel {
        swipe(carousel, -100.0);
    }
}
