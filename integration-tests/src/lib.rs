//! Shared helpers for the integration tests.
//!
//! Both helpers are thread-safe so the composed functions they are used in
//! stay `Send + Sync`.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Records every value shown to its observers.
#[derive(Debug)]
pub struct Recorder<T> {
    seen: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an observer that appends a copy of each value it sees.
    pub fn observer(&self) -> impl Fn(&T) + Send + Sync + use<T>
    where
        T: Send,
    {
        let seen = Arc::clone(&self.seen);
        move |value| seen.lock().unwrap().push(value.clone())
    }

    /// Returns the values seen so far, in order.
    #[must_use]
    pub fn seen(&self) -> Vec<T> {
        self.seen.lock().unwrap().clone()
    }
}

/// Counts how many times the functions it wraps are called.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `function` so every call increments this counter.
    pub fn counted<I, O>(&self, function: impl Fn(I) -> O) -> impl Fn(I) -> O {
        let calls = Arc::clone(&self.calls);
        move |input| {
            calls.fetch_add(1, Ordering::SeqCst);
            function(input)
        }
    }

    /// Returns the number of calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
