//! Single-threaded push streams.
//!
//! The gesture pipeline is wired from hot, multicast [`Subject`]s. Every
//! subscriber of a subject sees the same emissions; subscribing never replays
//! or re-runs upstream work.
//!
//! ## Modules
//!
//! - `subject` - Multicast publisher plus the `map`/`filter`/`merge`/`scan` operators
//! - `subscription` - Disposable handles, including the serial (switch) holder
//! - `latest` - Cached last-observed-value cell for latest-value joins

mod latest;
mod subject;
mod subscription;

pub use latest::LatestValue;
pub use subject::Subject;
pub use subscription::{CompositeSubscription, SerialSubscription, Subscription};
