//! Subscription settings for [`ShippingSyncer`](crate::ShippingSyncer).

use crate::event::EventKinds;

/// Default hook priority.
///
/// Late enough that default-priority listeners have already persisted their
/// changes when the sync job is scheduled.
pub const DEFAULT_PRIORITY: i32 = 90;

/// How the syncer subscribes to shipping events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    priority: i32,
    events: EventKinds,
}

impl SyncConfig {
    /// Subscribe to every event source at [`DEFAULT_PRIORITY`].
    pub const fn new() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            events: EventKinds::all(),
        }
    }

    /// Use a different priority for every subscription.
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Only subscribe to the given event sources.
    pub const fn with_events(mut self, events: EventKinds) -> Self {
        self.events = events;
        self
    }

    /// The priority used for every subscription.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The event sources to subscribe to.
    pub fn events(&self) -> EventKinds {
        self.events
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn test_defaults() {
        let config = SyncConfig::default();
        assert_eq!(config.priority(), 90);
        assert_eq!(config.events(), EventKinds::all());
    }

    #[test]
    fn test_builder() {
        let config = SyncConfig::new()
            .with_priority(5)
            .with_events(EventKinds::OPTION_CHANGES);
        assert_eq!(config.priority(), 5);
        assert!(config.events().includes(EventKind::OptionUpdated));
        assert!(!config.events().includes(EventKind::ShippingZoneSaved));
    }
}
