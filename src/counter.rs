//! Counter generator
//!
//! Three forms of the same counter:
//! - [`create_counter`]: a `move` closure owning its integer
//! - [`Counter`]: the same state as an explicit struct, also an iterator
//! - [`SharedCounter`]: an atomic counter for callers on several threads
//!
//! Every form starts at 0 and returns the post-increment value, so the
//! nth call yields n.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::trace;

/// Create a counter closure. Each call increments and returns the count.
pub fn create_counter() -> impl FnMut() -> u64 {
    let mut x: u64 = 0;
    move || {
        x += 1;
        x
    }
}

/// Counter with explicitly owned state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    /// Create a counter starting at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new value
    pub fn next_value(&mut self) -> u64 {
        self.value += 1;
        trace!(value = self.value, "counter advanced");
        self.value
    }

    /// Last value returned, or 0 before the first call
    pub fn current(&self) -> u64 {
        self.value
    }
}

impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_value())
    }
}

/// Counter safe to call from several threads at once.
///
/// Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct SharedCounter {
    value: Arc<AtomicU64>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically increment and return the new value
    pub fn next_value(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}
