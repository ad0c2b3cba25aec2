//! Mounted carousel - the gesture pipeline wired to a host and a render sink.
//!
//! Mounting reads the host layout once (view width, panel count, touch
//! support), then builds:
//!
//! ```text
//! dispatch/press/move/release -> PointerSource -> DragTracker
//!     samples --map Live----------------------------+
//!     samples -> DropResolver --map Commit--> merge +-> scan(reducer) -> sink, states
//! resize -> ViewportWidthObserver (latest width read by DropResolver)
//! ```
//!
//! The state stream is a `scan` of the merged events through the reducer.
//! Its first observer caches each state for [`Carousel::state`] and writes
//! the sink, so later state subscribers see both already updated.

use crate::carousel::{
    CarouselEvent, CarouselReducer, CarouselState, DragTracker, DropResolver,
    ViewportWidthObserver, Widths,
};
use crate::config::CarouselConfig;
use crate::error::{CarouselError, CarouselResult};
use crate::host::Host;
use crate::input::{
    GesturePhase, InputModality, PointerEvent, PointerSource, PointerStream, RawPointerInput,
};
use crate::render::RenderSink;
use crate::stream::{CompositeSubscription, Subject, Subscription};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use tracing::{debug, info};

pub struct Carousel<S: RenderSink + 'static> {
    config: CarouselConfig,
    panel_count: usize,
    source: PointerSource,
    viewport: ViewportWidthObserver,
    tracker: DragTracker,
    resolver: DropResolver,
    state: Rc<RefCell<CarouselState>>,
    phase: Rc<Cell<GesturePhase>>,
    states: Subject<CarouselState>,
    sink: Rc<RefCell<S>>,
    links: CompositeSubscription,
}

impl<S: RenderSink + 'static> Carousel<S> {
    /// Mount on the host's view element.
    ///
    /// Fails if the config is invalid or the view element does not exist.
    pub fn mount<H>(host: &H, sink: S, config: CarouselConfig) -> CarouselResult<Self>
    where
        H: Host + ?Sized,
    {
        config.validate()?;
        let view = host
            .element_by_id(&config.view_id)
            .ok_or_else(|| CarouselError::MissingElement {
                id: config.view_id.clone(),
            })?;

        let panel_count = view.panel_count();
        let modality = InputModality::detect(host.supports_touch());
        info!(
            view = %config.view_id,
            panel_count,
            width = view.client_width,
            ?modality,
            "carousel mounted"
        );

        let source = PointerSource::new(modality);
        let viewport = ViewportWidthObserver::new(view.client_width);
        let tracker = DragTracker::track(&source);
        let resolver = DropResolver::resolve(&source, tracker.samples(), viewport.latest_cell());
        let reducer = CarouselReducer::new(panel_count).with_threshold(config.threshold);

        let live = tracker.samples().map(|sample| CarouselEvent::Live(*sample));
        let commits = resolver.drops().map(|drop| CarouselEvent::Commit(*drop));
        let events = live.merge(&commits);

        let links = CompositeSubscription::new();
        let phase = Rc::new(Cell::new(GesturePhase::Idle));
        {
            let phase = phase.clone();
            links.add(events.subscribe(move |event: &CarouselEvent| {
                let mut p = phase.get();
                p.advance(event);
                phase.set(p);
            }));
        }

        let states = events.scan(CarouselState::default(), move |state, event| {
            reducer.step(state, event)
        });
        links.add(live.upstream_link());
        links.add(commits.upstream_link());
        links.add(events.upstream_link());
        links.add(states.upstream_link());

        let state = Rc::new(RefCell::new(CarouselState::default()));
        let sink = Rc::new(RefCell::new(sink));
        {
            let state = state.clone();
            let sink = sink.clone();
            links.add(states.subscribe(move |next: &CarouselState| {
                *state.borrow_mut() = *next;
                debug!(
                    current_offset = next.current_offset,
                    target_offset = next.target_offset,
                    panel_index = next.panel_index,
                    panel_width = next.panel_width,
                    "state"
                );
                sink.borrow_mut().apply_translate_x(next.target_offset);
            }));
        }

        Ok(Self {
            config,
            panel_count,
            source,
            viewport,
            tracker,
            resolver,
            state,
            phase,
            states,
            sink,
            links,
        })
    }

    /// Feed a named raw host event. Returns the logical stream it reached,
    /// or `None` if the name is not one of this session's pointer events.
    pub fn dispatch(&self, name: &str, raw: &RawPointerInput) -> Option<PointerStream> {
        self.source.dispatch(name, raw)
    }

    pub fn press(&self, page_x: f32) {
        self.source.emit(PointerStream::Press, PointerEvent::new(page_x));
    }

    pub fn move_to(&self, page_x: f32) {
        self.source.emit(PointerStream::Move, PointerEvent::new(page_x));
    }

    pub fn release(&self, page_x: f32) {
        self.source.emit(PointerStream::Release, PointerEvent::new(page_x));
    }

    /// Report the view width measured after a window resize.
    pub fn resize(&self, width: f32) {
        self.viewport.resize(width);
    }

    /// Snapshot of the current state
    pub fn state(&self) -> CarouselState {
        *self.state.borrow()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase.get()
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn modality(&self) -> InputModality {
        self.source.modality()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns true while a pressed gesture has not been released
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Width stream of the view element.
    pub fn widths(&self) -> Widths {
        self.viewport.widths()
    }

    /// Observe every state the reducer produces from now on.
    pub fn subscribe_states<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&CarouselState) + 'static,
    {
        self.states.subscribe(callback)
    }

    /// Borrow the render sink.
    pub fn sink(&self) -> Ref<'_, S> {
        self.sink.borrow()
    }

    /// Detach from all input. State and sink stay readable.
    pub fn unmount(&self) {
        self.tracker.stop();
        self.resolver.stop();
        self.links.unsubscribe();
        debug!(view = %self.config.view_id, "carousel unmounted");
    }
}
