//! Hot multicast publisher.

use super::{CompositeSubscription, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Observer<T> {
    id: u64,
    callback: Callback<T>,
}

struct Inner<T> {
    next_id: Cell<u64>,
    observers: RefCell<Vec<Observer<T>>>,
    upstream: CompositeSubscription,
}

impl<T> Inner<T> {
    fn is_attached(&self, id: u64) -> bool {
        self.observers.borrow().iter().any(|o| o.id == id)
    }

    fn detach(&self, id: u64) {
        self.observers.borrow_mut().retain(|o| o.id != id);
    }
}

/// A hot stream that forwards every emitted value to all current observers.
///
/// Cloning a subject yields another handle to the same publisher. Observers
/// may subscribe or unsubscribe from inside a callback: emission walks a
/// snapshot of the observer list, skips anyone detached mid-emission, and
/// does not deliver the in-flight value to observers attached during it.
pub struct Subject<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Subject<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                next_id: Cell::new(0),
                observers: RefCell::new(Vec::new()),
                upstream: CompositeSubscription::new(),
            }),
        }
    }

    /// Attach an observer. It stays attached until the returned handle is
    /// disposed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.observers.borrow_mut().push(Observer {
            id,
            callback: Rc::new(callback),
        });

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.detach(id);
            }
        })
    }

    /// Deliver `value` to every attached observer, in subscription order.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<(u64, Callback<T>)> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|o| (o.id, o.callback.clone()))
            .collect();

        for (id, callback) in snapshot {
            if self.inner.is_attached(id) {
                callback(value);
            }
        }
    }

    /// Number of attached observers
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Handle to the links feeding this subject from its upstream streams.
    ///
    /// Subjects built by the operators below hold one link per source;
    /// disposing the handle detaches them all. A plain subject has none.
    pub fn upstream_link(&self) -> Subscription {
        self.inner.upstream.clone().into_subscription()
    }

    /// Derived stream applying `f` to every value.
    pub fn map<U, F>(&self, f: F) -> Subject<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        let out = Subject::new();
        let downstream = out.clone();
        out.adopt(self.subscribe(move |value| downstream.emit(&f(value))));
        out
    }

    /// Derived stream forwarding only values that pass `predicate`.
    pub fn filter<F>(&self, predicate: F) -> Subject<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        let out = Subject::new();
        let downstream = out.clone();
        out.adopt(self.subscribe(move |value| {
            if predicate(value) {
                downstream.emit(value);
            }
        }));
        out
    }

    /// Interleave this stream with `other` in arrival order.
    pub fn merge(&self, other: &Subject<T>) -> Subject<T> {
        let out = Subject::new();
        let left = out.clone();
        out.adopt(self.subscribe(move |value| left.emit(value)));
        let right = out.clone();
        out.adopt(other.subscribe(move |value| right.emit(value)));
        out
    }

    /// Running fold: emits each accumulator produced by `f`, starting from
    /// `initial`. The seed itself is not emitted.
    ///
    /// The accumulator is updated before downstream observers run, so a
    /// value re-entering this stream from a callback folds onto it.
    pub fn scan<A, F>(&self, initial: A, f: F) -> Subject<A>
    where
        A: Clone + 'static,
        F: Fn(&A, &T) -> A + 'static,
    {
        let out = Subject::new();
        let downstream = out.clone();
        let acc = RefCell::new(initial);
        out.adopt(self.subscribe(move |value| {
            let next = f(&acc.borrow(), value);
            *acc.borrow_mut() = next.clone();
            downstream.emit(&next);
        }));
        out
    }

    fn adopt(&self, link: Subscription) {
        self.inner.upstream.add(link);
    }
}
