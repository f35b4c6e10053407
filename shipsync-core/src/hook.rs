//! # Hook
//!
//! The primitive handler for event processing.
//!
//! A hook receives an event together with the [`Cycle`] it belongs to and
//! decides whether propagation to later hooks continues (`Next`) or stops
//! (`Stop`). Hooks run synchronously and to completion: delivery of the next
//! event only starts once every hook for the current one has returned.

use crate::{cycle::Cycle, error::BoxError, message::Message};
use std::sync::Arc;

/// Result of hook execution indicating whether to continue or stop propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookResult {
    /// The event was observed or partially handled; continue to the next hook.
    Next,
    /// The event was fully handled; stop propagation to subsequent hooks.
    Stop,
}

/// A handler registered for events of type `E`.
///
/// Hooks are shared between cycles (and possibly threads), so they must not
/// keep per-cycle state themselves. Anything that has to reset at a cycle
/// boundary lives in the [`Cycle`] passed to [`Hook::on_event`].
///
/// Errors are returned as-is to whoever delivered the event.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Hook<{E}>`",
    label = "missing `Hook` implementation",
    note = "Hooks must implement `on_event` for the specific event type `{E}`."
)]
pub trait Hook<E: Message>: Send + Sync + 'static {
    /// Called when an event is delivered.
    fn on_event(&self, event: &E, cycle: &mut Cycle) -> Result<HookResult, BoxError>;
}

impl<E: Message, H: Hook<E> + ?Sized> Hook<E> for Arc<H> {
    fn on_event(&self, event: &E, cycle: &mut Cycle) -> Result<HookResult, BoxError> {
        (**self).on_event(event, cycle)
    }
}

impl<E: Message, H: Hook<E> + ?Sized> Hook<E> for Box<H> {
    fn on_event(&self, event: &E, cycle: &mut Cycle) -> Result<HookResult, BoxError> {
        (**self).on_event(event, cycle)
    }
}
