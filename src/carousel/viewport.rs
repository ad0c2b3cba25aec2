//! Viewport width observer.

use crate::stream::{LatestValue, Subject, Subscription};
use tracing::debug;

/// Tracks the carousel view width across window resizes.
///
/// The latest width is cached so joins can read it synchronously; the
/// [`Widths`] stream replays that cached value to each new subscriber before
/// forwarding resizes. The stream never errors and never completes.
pub struct ViewportWidthObserver {
    resizes: Subject<f32>,
    latest: LatestValue<f32>,
}

impl ViewportWidthObserver {
    /// Start observing with the width measured at mount.
    pub fn new(initial_width: f32) -> Self {
        Self {
            resizes: Subject::new(),
            latest: LatestValue::new(initial_width),
        }
    }

    /// Record a new measurement after a window resize.
    pub fn resize(&self, width: f32) {
        debug!(width, "viewport resized");
        self.latest.set(width);
        self.resizes.emit(&width);
    }

    /// Most recently observed width
    pub fn latest(&self) -> f32 {
        self.latest.get()
    }

    /// Handle to the cached width cell, for latest-value joins.
    pub fn latest_cell(&self) -> LatestValue<f32> {
        self.latest.clone()
    }

    /// Width stream: the current width on subscribe, then one value per resize.
    pub fn widths(&self) -> Widths {
        Widths {
            resizes: self.resizes.clone(),
            latest: self.latest.clone(),
        }
    }
}

/// Width stream handed out by [`ViewportWidthObserver::widths`].
#[derive(Clone)]
pub struct Widths {
    resizes: Subject<f32>,
    latest: LatestValue<f32>,
}

impl Widths {
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&f32) + 'static,
    {
        callback(&self.latest.get());
        self.resizes.subscribe(callback)
    }
}
