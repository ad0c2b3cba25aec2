//! Latest-value cell.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared cell holding the most recently observed value.
///
/// Reads are synchronous and never wait for the producer, which is what a
/// latest-value join needs at the moment the joining event fires.
#[derive(Debug, Default)]
pub struct LatestValue<T> {
    value: Rc<RefCell<T>>,
}

impl<T> Clone for LatestValue<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<T: Clone> LatestValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
    }
}
