//! # shipsync - Debounced Shipping Settings Sync
//!
//! Watches the shipping configuration lifecycle events a store raises and
//! schedules one background job per processing cycle that pushes the
//! shipping settings to the advertising platform.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shipsync::{Cycle, FnGate, RegistryBuilder, ShippingSyncer};
//!
//! // Once, at start-up
//! let gate = FnGate::new(move || account.is_connected(), move || settings.sync_shipping());
//! let mut syncer = ShippingSyncer::new(gate, move || jobs.schedule(UPDATE_SHIPPING_SETTINGS));
//! let registry = syncer.register(RegistryBuilder::new()).build();
//!
//! // Per request
//! let mut cycle = Cycle::new();
//! registry.fire("woocommerce_shipping_zone_method_added", None, &mut cycle)?;
//! registry.fire("updated_option", Some("woocommerce_flat_rate_4_settings"), &mut cycle)?;
//! // -> the job was scheduled exactly once
//! ```
//!
//! ## Pieces
//!
//! - [`ShippingSyncer`]: reads the [`DispatchGate`] once and subscribes the
//!   [`DebouncedDispatcher`] to every configured [`EventKind`]
//! - [`Registry`]: delivers events to hooks by tag and priority
//! - [`option_key`]: the per-instance shipping option key matcher
//! - [`testing`]: doubles for schedulers, gates and hooks

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use shipsync_core::{BoxError, Cycle, Hook, HookResult, Message, RoutingError, SyncError};

pub mod config;
pub mod dispatcher;
pub mod event;
pub mod gate;
pub mod option_key;
pub mod registry;
pub mod scheduler;
pub mod syncer;
pub mod testing;

pub use config::{DEFAULT_PRIORITY, SyncConfig};
pub use dispatcher::DebouncedDispatcher;
pub use event::{EventKind, EventKinds, ShippingEvent};
pub use gate::{DispatchGate, FnGate};
pub use option_key::{ShippingMethod, ShippingOptionKey, is_shipping_option_key, parse_option_key};
pub use registry::{Registry, RegistryBuilder, Tagged};
pub use scheduler::JobScheduler;
pub use syncer::{ShippingSyncer, SyncerState};

/// Prelude module - common imports for shipsync.
///
/// # Usage
///
/// ```rust,ignore
/// use shipsync::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Cycle, DispatchGate, EventKind, EventKinds, Hook, HookResult, JobScheduler,
        Registry, RegistryBuilder, ShippingEvent, ShippingSyncer, SyncConfig, SyncError,
    };
}
