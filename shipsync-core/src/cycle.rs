//! # Processing Cycle
//!
//! A [`Cycle`] is one bounded unit of event processing, such as a single web
//! request or one batch tick. It carries the transient state that must not
//! outlive that unit: whether the downstream job was already dispatched.
//!
//! Cycles are plain values owned by whoever drives event delivery and passed
//! `&mut` through every dispatch. Nothing about them is global, so workers
//! that share one registry across threads never see each other's state.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CYCLE_ID: AtomicU64 = AtomicU64::new(1);

/// Per-cycle dispatch state.
#[derive(Debug)]
pub struct Cycle {
    id: u64,
    dispatched: bool,
}

impl Cycle {
    /// Begin a new cycle with a fresh, process-unique id.
    pub fn new() -> Self {
        Self::with_id(NEXT_CYCLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Begin a new cycle with a host-provided id (e.g. a request id).
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            dispatched: false,
        }
    }

    /// The identifier of this cycle, used for diagnostics only.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the job was already dispatched in this cycle.
    pub fn is_dispatched(&self) -> bool {
        self.dispatched
    }

    /// Record that the job has been dispatched for the rest of this cycle.
    pub fn mark_dispatched(&mut self) {
        self.dispatched = true;
    }

    /// End the current cycle and start the next one in place.
    ///
    /// Long-lived workers that reuse a `Cycle` value must call this at every
    /// cycle boundary.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Cycle {
    fn default() -> Self {
        Self::new()
    }
}
