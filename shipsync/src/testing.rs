//! Testing utilities for shipsync.
//!
//! # Features
//!
//! - [`RecordingScheduler`]: a job scheduler that counts calls and can fail on demand
//! - [`StaticGate`]: a gate with switchable answers that counts how often it is read
//! - [`RecordingHook`]: a hook that records every event it receives

use crate::{gate::DispatchGate, scheduler::JobScheduler};
use shipsync_core::{BoxError, Cycle, Hook, HookResult, Message};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

// ============================================================================
// Recording Scheduler
// ============================================================================

/// A scheduler that counts `schedule()` calls.
///
/// Clones share the same counter, so keep one clone for assertions and hand
/// the other to the code under test.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = RecordingScheduler::new();
/// let mut syncer = ShippingSyncer::new(StaticGate::open(), scheduler.clone());
///
/// // ... fire events ...
///
/// assert_eq!(scheduler.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingScheduler {
    calls: Arc<AtomicUsize>,
    error: Arc<Mutex<Option<String>>>,
}

impl RecordingScheduler {
    /// Create a scheduler that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `schedule()` calls so far, failed ones included.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every following call fail with `message`.
    pub fn set_error(&self, message: impl Into<String>) {
        *self.error.lock().unwrap() = Some(message.into());
    }

    /// Make following calls succeed again.
    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl JobScheduler for RecordingScheduler {
    fn schedule(&self) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.error.lock().unwrap().as_ref() {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Static Gate
// ============================================================================

/// A gate with fixed, switchable answers.
///
/// Clones share state. [`StaticGate::reads`] counts how many times the
/// account predicate was queried, i.e. how many times the gate was evaluated.
#[derive(Clone)]
pub struct StaticGate {
    account_connected: Arc<AtomicBool>,
    sync_enabled: Arc<AtomicBool>,
    reads: Arc<AtomicUsize>,
}

impl StaticGate {
    /// Create a gate with the given answers.
    pub fn new(account_connected: bool, sync_enabled: bool) -> Self {
        Self {
            account_connected: Arc::new(AtomicBool::new(account_connected)),
            sync_enabled: Arc::new(AtomicBool::new(sync_enabled)),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Both predicates true.
    pub fn open() -> Self {
        Self::new(true, true)
    }

    /// Both predicates false.
    pub fn closed() -> Self {
        Self::new(false, false)
    }

    /// Change the answers.
    pub fn set(&self, account_connected: bool, sync_enabled: bool) {
        self.account_connected
            .store(account_connected, Ordering::SeqCst);
        self.sync_enabled.store(sync_enabled, Ordering::SeqCst);
    }

    /// Number of times the gate was evaluated.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DispatchGate for StaticGate {
    fn account_connected(&self) -> bool {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.account_connected.load(Ordering::SeqCst)
    }

    fn sync_from_local_settings_enabled(&self) -> bool {
        self.sync_enabled.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Recording Hook
// ============================================================================

/// A hook that records all events it receives.
///
/// Useful for verifying that events are delivered where they should be.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHook::<ShippingEvent>::new();
/// let registry = RegistryBuilder::new()
///     .add_action(EventKind::ShippingZoneSaved, 10, recorder.clone())
///     .build();
///
/// registry.dispatch(&ShippingEvent::ShippingZoneSaved, &mut Cycle::new())?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHook<E: Clone> {
    events: Arc<Mutex<Vec<E>>>,
    result: HookResult,
}

impl<E: Clone> RecordingHook<E> {
    /// Create a new recording hook that returns `Next`.
    pub fn new() -> Self {
        Self::with_result(HookResult::Next)
    }

    /// Create a recording hook that returns a specific result.
    pub fn with_result(result: HookResult) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<E: Clone> Default for RecordingHook<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for RecordingHook<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            result: self.result,
        }
    }
}

impl<E: Message + Clone> Hook<E> for RecordingHook<E> {
    fn on_event(&self, event: &E, _cycle: &mut Cycle) -> Result<HookResult, BoxError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_scheduler_shares_state() {
        let scheduler = RecordingScheduler::new();
        let handle = scheduler.clone();

        handle.schedule().unwrap();
        handle.set_error("down");
        assert!(handle.schedule().is_err());
        assert_eq!(scheduler.count(), 2);

        scheduler.reset();
        scheduler.clear_error();
        assert!(handle.schedule().is_ok());
        assert_eq!(scheduler.count(), 1);
    }

    #[test]
    fn test_static_gate() {
        let gate = StaticGate::closed();
        assert!(!gate.is_open());
        gate.set(true, true);
        assert!(gate.clone().is_open());
        assert_eq!(gate.reads(), 2);
    }
}
