#![allow(dead_code)]

use shipsync::{
    EventKind, Registry, RegistryBuilder, ShippingEvent, ShippingSyncer,
    testing::{RecordingScheduler, StaticGate},
};

// ============================================================================
// Test Fixtures
// ============================================================================

pub const FLAT_RATE_KEY: &str = "woocommerce_flat_rate_3_settings";
pub const FREE_SHIPPING_KEY: &str = "woocommerce_free_shipping_7_settings";

/// Registers a syncer behind `gate` and returns the built registry.
pub fn registry_with(gate: StaticGate, scheduler: RecordingScheduler) -> Registry<ShippingEvent> {
    let mut syncer = ShippingSyncer::new(gate, scheduler);
    syncer.register(RegistryBuilder::new()).build()
}

/// One qualifying event of every kind.
pub fn all_events() -> Vec<ShippingEvent> {
    EventKind::ALL
        .into_iter()
        .map(|kind| {
            let key = kind.is_option_change().then_some(FLAT_RATE_KEY);
            ShippingEvent::from_kind(kind, key).unwrap()
        })
        .collect()
}

/// Host hook names with their first argument, one per kind.
pub fn all_hooks() -> Vec<(&'static str, Option<&'static str>)> {
    EventKind::ALL
        .into_iter()
        .map(|kind| {
            let arg = if kind.is_option_change() {
                Some(FREE_SHIPPING_KEY)
            } else {
                Some("1")
            };
            (kind.hook_name(), arg)
        })
        .collect()
}
