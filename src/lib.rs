//! Drag-driven carousel core.
//!
//! Pointer press/move/release events are turned into horizontal displacement
//! samples, each completed gesture is resolved into one commit, and a single
//! reducer folds both into [`CarouselState`]: the container follows the
//! pointer while dragging and snaps to a panel boundary on release.
//!
//! The host UI layer stays behind two seams: [`Host`] (layout read once at
//! mount) and [`RenderSink`] (one transform write per state).

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod stream;
pub mod widget;

pub use carousel::{CarouselEvent, CarouselReducer, CarouselState, DropEvent, GestureSample};
pub use config::CarouselConfig;
pub use error::{CarouselError, CarouselResult};
pub use host::{Host, StaticHost};
pub use render::{RenderSink, TransformLog};
pub use widget::Carousel;
