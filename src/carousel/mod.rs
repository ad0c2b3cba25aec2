//! Carousel gesture pipeline.
//!
//! ```text
//! PointerSource -> DragTracker --samples--> CarouselReducer -> states
//!                       |                        ^
//!                       +--> DropResolver --drops+
//!                               ^
//!             ViewportWidthObserver (latest width)
//! ```
//!
//! ## Modules
//!
//! - `state` - Gesture samples, drop events, reducer events and `CarouselState`
//! - `drag` - Press/move/release into displacement samples (switch on press)
//! - `drop` - Release into a single commit per gesture
//! - `viewport` - Width observation with a cached latest value
//! - `reducer` - The fold producing `CarouselState`

mod drag;
mod drop;
mod reducer;
mod state;
mod viewport;

pub use drag::DragTracker;
pub use drop::DropResolver;
pub use reducer::CarouselReducer;
pub use state::{CarouselEvent, CarouselState, DropEvent, GestureSample};
pub use viewport::{ViewportWidthObserver, Widths};
