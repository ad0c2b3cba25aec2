//! Subscription handles.
//!
//! Handles are explicit: dropping a [`Subscription`] leaves the observer
//! attached, only [`Subscription::unsubscribe`] detaches it. Disposal is
//! idempotent, so a handle may be shared between the code that owns a gesture
//! and the callback that ends it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Teardown = Box<dyn FnOnce()>;

/// Disposable handle for one attached observer (or a group of them).
#[derive(Clone)]
pub struct Subscription {
    teardown: Rc<RefCell<Option<Teardown>>>,
}

impl Subscription {
    /// Create a handle that runs `teardown` exactly once on disposal.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            teardown: Rc::new(RefCell::new(Some(Box::new(teardown)))),
        }
    }

    /// A handle that is already closed.
    pub fn closed() -> Self {
        Self {
            teardown: Rc::new(RefCell::new(None)),
        }
    }

    /// Detach the observer. Later calls are no-ops.
    pub fn unsubscribe(&self) {
        // Release the borrow before running the teardown: it may re-enter.
        let teardown = self.teardown.borrow_mut().take();
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    /// Returns true once the handle has been disposed
    pub fn is_closed(&self) -> bool {
        self.teardown.borrow().is_none()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// A bag of subscriptions disposed together.
#[derive(Clone, Default)]
pub struct CompositeSubscription {
    children: Rc<RefCell<Vec<Subscription>>>,
    closed: Rc<Cell<bool>>,
}

impl CompositeSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child. Adding to a closed composite disposes the child immediately.
    pub fn add(&self, subscription: Subscription) {
        if self.closed.get() {
            subscription.unsubscribe();
            return;
        }
        self.children.borrow_mut().push(subscription);
    }

    /// Dispose every child and close the composite.
    pub fn unsubscribe(&self) {
        self.closed.set(true);
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            child.unsubscribe();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Number of children still held
    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the whole group as a single handle.
    pub fn into_subscription(self) -> Subscription {
        Subscription::new(move || self.unsubscribe())
    }
}

/// Holds at most one active subscription.
///
/// Setting a new one disposes the previous one first, which is how a newer
/// gesture supersedes a stale one.
#[derive(Default)]
pub struct SerialSubscription {
    current: RefCell<Option<Subscription>>,
}

impl SerialSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispose the active subscription, if any.
    pub fn clear(&self) {
        let previous = self.current.borrow_mut().take();
        if let Some(previous) = previous {
            previous.unsubscribe();
        }
    }

    /// Dispose the active subscription, then hold `next`.
    pub fn replace(&self, next: Subscription) {
        self.clear();
        *self.current.borrow_mut() = Some(next);
    }

    /// Returns true if a subscription is held and still open
    pub fn is_active(&self) -> bool {
        self.current
            .borrow()
            .as_ref()
            .is_some_and(|s| !s.is_closed())
    }
}
