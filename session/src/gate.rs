//! Latest-request-wins gate for async auth calls.
//!
//! A view takes a [`Ticket`] before issuing a login or signup request and
//! checks it when the response lands. Starting another request or calling
//! [`RequestGate::invalidate`] (on unmount) makes older tickets stale, so late
//! responses are dropped instead of mutating the session behind the user's back.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generation marker for one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared generation counter. Clones observe the same generation.
#[derive(Clone, Debug, Default)]
pub struct RequestGate {
    generation: Arc<AtomicU64>,
}

impl RequestGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any earlier ticket.
    #[must_use]
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket.0
    }
}
