use std::sync::{Arc, PoisonError, RwLock};

/// Value shared between a component and the event handlers it hands out.
///
/// Handlers stored in `'static` element closures hold a clone and write back
/// through it; every clone sees the same value. A poisoned lock is read
/// through, since the value is always replaced whole.
#[derive(Debug, Default)]
pub struct State<T>(Arc<RwLock<T>>);

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Replace the value with one derived from the previous value.
    pub fn replace_with(&self, f: impl FnOnce(&T) -> T) {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *guard = f(&guard);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
