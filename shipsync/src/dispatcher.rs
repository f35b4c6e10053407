//! # Debounced Dispatcher
//!
//! Turns any number of shipping change events within one [`Cycle`] into at
//! most one call to the [`JobScheduler`].
//!
//! Plain shipping events always qualify. Option-change events only qualify
//! when their key is a per-instance shipping option key (see
//! [`crate::option_key`]); every other option write is ignored.
//!
//! A failed `schedule()` still counts as the cycle's dispatch: the error is
//! returned unchanged and later events in the same cycle do not retry.

use crate::{event::ShippingEvent, option_key::is_shipping_option_key, scheduler::JobScheduler};
use shipsync_core::{BoxError, Cycle, Hook, HookResult};
use std::sync::Arc;

/// Schedules the shipping settings job at most once per cycle.
pub struct DebouncedDispatcher {
    scheduler: Arc<dyn JobScheduler>,
}

impl DebouncedDispatcher {
    /// Create a dispatcher around the job scheduler.
    pub fn new<S: JobScheduler>(scheduler: S) -> Self {
        Self::from_shared(Arc::new(scheduler))
    }

    /// Create a dispatcher around an already shared scheduler.
    pub fn from_shared(scheduler: Arc<dyn JobScheduler>) -> Self {
        Self { scheduler }
    }

    /// Whether `event` should trigger a dispatch.
    pub fn qualifies(event: &ShippingEvent) -> bool {
        match event.option_key() {
            Some(key) => is_shipping_option_key(key),
            None => true,
        }
    }

    /// Handle one event.
    pub fn handle(&self, event: &ShippingEvent, cycle: &mut Cycle) -> Result<(), BoxError> {
        if !Self::qualifies(event) {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        {
            if cycle.is_dispatched() {
                tracing::debug!(
                    cycle = cycle.id(),
                    kind = ?event.kind(),
                    "Shipping settings sync already scheduled in this cycle"
                );
            } else {
                tracing::debug!(
                    cycle = cycle.id(),
                    kind = ?event.kind(),
                    "Scheduling shipping settings sync"
                );
            }
        }

        self.dispatch(cycle)
    }

    /// Schedule the job unless this cycle already did.
    pub fn dispatch(&self, cycle: &mut Cycle) -> Result<(), BoxError> {
        if cycle.is_dispatched() {
            return Ok(());
        }
        let result = self.scheduler.schedule();
        cycle.mark_dispatched();
        result
    }
}

impl Hook<ShippingEvent> for DebouncedDispatcher {
    fn on_event(&self, event: &ShippingEvent, cycle: &mut Cycle) -> Result<HookResult, BoxError> {
        self.handle(event, cycle)?;
        Ok(HookResult::Next)
    }
}
