use std::sync::Arc;

use parking_lot::Mutex;

/// Per-invocation interaction state shared between a dialog's handlers.
///
/// Handlers write, the dismissal handler reads a snapshot. Hosts may call
/// back from any thread, so access is locked even though a UI loop
/// serializes callbacks in practice.
pub struct Accumulator<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for Accumulator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Accumulator<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn set(&self, value: T) {
        *self.inner.lock() = value;
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<T: Clone> Accumulator<T> {
    pub fn snapshot(&self) -> T {
        self.inner.lock().clone()
    }
}
