//! Drop resolver - one commit event per completed gesture.

use super::{DropEvent, GestureSample};
use crate::input::{PointerEvent, PointerSource};
use crate::stream::{CompositeSubscription, LatestValue, Subject};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Emits a [`DropEvent`] at the first release after a gesture's samples.
///
/// The event carries the gesture's last displacement and the latest viewport
/// width, read from the cached cell at release time. A press disarms any
/// pending displacement, so a superseded gesture can never commit, and a
/// gesture that produced no samples has nothing to commit.
pub struct DropResolver {
    drops: Subject<DropEvent>,
    links: CompositeSubscription,
}

impl DropResolver {
    pub fn resolve(
        source: &PointerSource,
        samples: &Subject<GestureSample>,
        widths: LatestValue<f32>,
    ) -> Self {
        let drops = Subject::new();
        let links = CompositeSubscription::new();
        let pending: Rc<Cell<Option<f32>>> = Rc::new(Cell::new(None));

        let p = pending.clone();
        links.add(source.presses().subscribe(move |_: &PointerEvent| p.set(None)));

        let p = pending.clone();
        links.add(samples.subscribe(move |sample: &GestureSample| {
            p.set(Some(sample.horizontal_delta))
        }));

        let out = drops.clone();
        links.add(source.releases().subscribe(move |_: &PointerEvent| {
            if let Some(delta) = pending.take() {
                let drop = DropEvent::new(delta, widths.get());
                debug!(delta = drop.horizontal_delta, width = drop.viewport_width, "gesture dropped");
                out.emit(&drop);
            }
        }));

        Self { drops, links }
    }

    pub fn drops(&self) -> &Subject<DropEvent> {
        &self.drops
    }

    /// Detach from the pointer and sample streams.
    pub fn stop(&self) {
        self.links.unsubscribe();
    }
}
