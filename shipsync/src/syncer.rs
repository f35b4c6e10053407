//! # Shipping Syncer
//!
//! The service that wires the [`DebouncedDispatcher`] into a registry.
//!
//! Registration is gated: unless the account is connected *and* shipping is
//! synced from local settings, nothing is subscribed and the syncer stays
//! inert for the lifetime of the process. The gate is read exactly once; a
//! gate that closes later does not unsubscribe anything.
//!
//! ```rust,ignore
//! let mut syncer = ShippingSyncer::new(gate, move || queue.enqueue(UPDATE_SHIPPING));
//! let registry = syncer.register(RegistryBuilder::new()).build();
//!
//! // per request
//! let mut cycle = Cycle::new();
//! registry.fire("woocommerce_after_shipping_zone_object_save", None, &mut cycle)?;
//! ```

use crate::{
    config::SyncConfig, dispatcher::DebouncedDispatcher, event::ShippingEvent, gate::DispatchGate,
    registry::RegistryBuilder, scheduler::JobScheduler,
};
use shipsync_core::Hook;
use std::sync::Arc;

/// Lifecycle of a [`ShippingSyncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncerState {
    /// Not registered yet; the gate has not been read.
    Armed,
    /// The gate was closed at registration. Terminal.
    Inert,
    /// Subscribed to shipping events.
    Listening,
}

/// Subscribes the debounced dispatcher to shipping events, if the gate allows.
pub struct ShippingSyncer<G> {
    gate: G,
    dispatcher: Arc<DebouncedDispatcher>,
    config: SyncConfig,
    state: SyncerState,
}

impl<G: DispatchGate> ShippingSyncer<G> {
    /// Create a syncer with the default [`SyncConfig`].
    pub fn new<S: JobScheduler>(gate: G, scheduler: S) -> Self {
        Self::with_config(gate, scheduler, SyncConfig::default())
    }

    /// Create a syncer with an explicit configuration.
    pub fn with_config<S: JobScheduler>(gate: G, scheduler: S, config: SyncConfig) -> Self {
        Self {
            gate,
            dispatcher: Arc::new(DebouncedDispatcher::new(scheduler)),
            config,
            state: SyncerState::Armed,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SyncerState {
        self.state
    }

    /// The configuration in use.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Read the gate and, if it is open, subscribe the dispatcher to every
    /// configured event source.
    ///
    /// Only the first call reads the gate; later calls return the builder
    /// untouched.
    pub fn register(
        &mut self,
        builder: RegistryBuilder<ShippingEvent>,
    ) -> RegistryBuilder<ShippingEvent> {
        if self.state != SyncerState::Armed {
            return builder;
        }

        if !self.gate.is_open() {
            #[cfg(feature = "tracing")]
            tracing::info!("Shipping settings sync disabled; not subscribing to shipping events");
            self.state = SyncerState::Inert;
            return builder;
        }

        let priority = self.config.priority();
        let hook: Arc<dyn Hook<ShippingEvent>> = self.dispatcher.clone();
        let builder = self
            .config
            .events()
            .kinds()
            .fold(builder, |builder, kind| {
                builder.add_shared(kind, priority, Arc::clone(&hook))
            });

        #[cfg(feature = "tracing")]
        tracing::info!(
            events = self.config.events().kinds().count(),
            priority,
            "Subscribed shipping settings sync to shipping events"
        );

        self.state = SyncerState::Listening;
        builder
    }
}
