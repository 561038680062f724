//! Single-invocation callback contracts.
//!
//! The two lambda-accepting functions (`copy` and the companion DSL entry)
//! guarantee their callback argument is invoked exactly once during the
//! enclosing call. Declaratively this is a [`CallableContract`] the host can
//! feed into definite-initialization analysis; at runtime the evaluation
//! harness approximates it with an [`InvocationCounter`] asserting the count
//! in debug builds.

use std::cell::Cell;

/// How often a contract permits its callback to be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrences {
    /// Invoked exactly once.
    ExactlyOnce,
}

/// A calls-in-place effect on one callback parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableContract {
    /// Zero-based index of the callback parameter.
    pub param: usize,
    /// Permitted invocation count.
    pub occurrences: Occurrences,
}

impl CallableContract {
    /// Creates an exactly-once contract for the given parameter.
    #[must_use]
    pub fn calls_exactly_once(param: usize) -> Self {
        Self {
            param,
            occurrences: Occurrences::ExactlyOnce,
        }
    }
}

/// Debug-build runtime guard for the exactly-once contract.
///
/// The enclosing call records each callback invocation and finishes the
/// counter before returning; finishing with a count other than one is a
/// contract violation.
#[derive(Debug)]
pub struct InvocationCounter {
    label: &'static str,
    count: Cell<u32>,
}

impl InvocationCounter {
    /// Creates a counter labeled with the enclosing callable's name.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            count: Cell::new(0),
        }
    }

    /// Records one callback invocation.
    pub fn record(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Returns the recorded invocation count.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Asserts the exactly-once contract in debug builds.
    ///
    /// # Panics
    /// In debug builds, panics if the callback was not invoked exactly once.
    pub fn finish(self) {
        debug_assert!(
            self.count.get() == 1,
            "callback of '{}' must be invoked exactly once, was invoked {} times",
            self.label,
            self.count.get()
        );
    }
}
