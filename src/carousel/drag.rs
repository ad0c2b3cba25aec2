//! Drag tracker - pointer events in, horizontal displacement samples out.
//!
//! ## Performance Notes
//!
//! Moves are relayed at display rate during a gesture. The tracker only
//! holds the gesture origin and two observer handles per gesture; nothing is
//! allocated per move beyond the emitted sample.

use super::GestureSample;
use crate::input::{PointerEvent, PointerSource};
use crate::stream::{CompositeSubscription, SerialSubscription, Subject, Subscription};
use std::rc::Rc;
use tracing::trace;

/// Shared stream of displacement samples for the active gesture.
///
/// Every press opens a gesture: the press x becomes the origin and each move
/// is relayed as `move.x - origin.x` until the next release. A press while a
/// gesture is still open disposes the stale gesture before the new one
/// starts. A gesture whose release never arrives keeps relaying.
pub struct DragTracker {
    samples: Subject<GestureSample>,
    active: Rc<SerialSubscription>,
    press: Subscription,
}

impl DragTracker {
    /// Start tracking gestures on `source`.
    pub fn track(source: &PointerSource) -> Self {
        let samples = Subject::new();
        let active = Rc::new(SerialSubscription::new());

        let press = {
            let moves = source.moves().clone();
            let releases = source.releases().clone();
            let samples = samples.clone();
            let active = active.clone();

            source.presses().subscribe(move |start: &PointerEvent| {
                // The stale gesture goes before the new one is wired.
                active.clear();
                trace!(origin = start.page_x, "gesture started");

                let origin = start.page_x;
                let gesture = CompositeSubscription::new();

                let out = samples.clone();
                gesture.add(moves.subscribe(move |event: &PointerEvent| {
                    let sample = GestureSample::new(event.page_x - origin);
                    trace!(delta = sample.horizontal_delta, "drag sample");
                    out.emit(&sample);
                }));

                let serial = active.clone();
                gesture.add(releases.subscribe(move |_: &PointerEvent| {
                    trace!("gesture released");
                    serial.clear();
                }));

                active.replace(gesture.into_subscription());
            })
        };

        Self {
            samples,
            active,
            press,
        }
    }

    /// The shared sample stream. Subscribing never re-runs tracking.
    pub fn samples(&self) -> &Subject<GestureSample> {
        &self.samples
    }

    /// Returns true while a gesture is open (pressed, not yet released)
    pub fn is_tracking(&self) -> bool {
        self.active.is_active()
    }

    /// Stop reacting to presses and end any open gesture.
    pub fn stop(&self) {
        self.press.unsubscribe();
        self.active.clear();
    }
}
