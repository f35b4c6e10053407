//! Explicit hook registration, keyed by event tag.
//!
//! A [`RegistryBuilder`] collects `(tag, priority, hook)` entries at start-up;
//! [`RegistryBuilder::build`] freezes them into a [`Registry`] that delivers
//! each event to the hooks registered under its tag. Lower priorities run
//! first; equal priorities keep their registration order.

use crate::event::{EventKind, ShippingEvent};
use shipsync_core::{BoxError, Cycle, Hook, HookResult, Message, SyncError};
use std::{collections::HashMap, fmt::Debug, hash::Hash, sync::Arc};

/// Events that can be grouped by tag.
pub trait Tagged {
    /// The tag hooks are registered under.
    type Tag: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// The tag of this event.
    fn tag(&self) -> Self::Tag;
}

struct Entry<E: Message> {
    priority: i32,
    hook: Arc<dyn Hook<E>>,
}

/// An immutable set of hooks, grouped by tag.
///
/// A registry holds no per-cycle state and can be shared between threads;
/// every caller passes its own [`Cycle`].
pub struct Registry<E: Message + Tagged> {
    hooks: HashMap<E::Tag, Vec<Entry<E>>>,
}

impl<E: Message + Tagged> Registry<E> {
    /// Deliver an event to every hook registered under its tag, in order.
    ///
    /// Stops at the first hook that returns [`HookResult::Stop`] or an
    /// error. Errors are returned exactly as the hook produced them.
    pub fn dispatch(&self, event: &E, cycle: &mut Cycle) -> Result<HookResult, BoxError> {
        let tag = event.tag();
        let Some(entries) = self.hooks.get(&tag) else {
            return Ok(HookResult::Next);
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?tag, hooks = entries.len(), cycle = cycle.id(), "Delivering event");

        for entry in entries {
            match entry.hook.on_event(event, cycle)? {
                HookResult::Stop => return Ok(HookResult::Stop),
                HookResult::Next => continue,
            }
        }
        Ok(HookResult::Next)
    }

    /// Number of hooks registered under `tag`.
    pub fn hook_count(&self, tag: E::Tag) -> usize {
        self.hooks.get(&tag).map_or(0, Vec::len)
    }

    /// The tags that have at least one hook.
    pub fn tags(&self) -> impl Iterator<Item = E::Tag> + '_ {
        self.hooks.keys().copied()
    }

    /// Total number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.values().map(Vec::len).sum()
    }

    /// Whether no hooks are registered at all.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Registry<ShippingEvent> {
    /// Resolve a host hook by name and deliver it.
    ///
    /// `arg` is the hook's first argument; option hooks need the option key.
    pub fn fire(
        &self,
        hook_name: &str,
        arg: Option<&str>,
        cycle: &mut Cycle,
    ) -> Result<HookResult, SyncError> {
        let event = ShippingEvent::from_hook(hook_name, arg)?;
        Ok(self.dispatch(&event, cycle)?)
    }

    /// Whether anything is subscribed to `kind`.
    pub fn subscribes_to(&self, kind: EventKind) -> bool {
        self.hook_count(kind) > 0
    }
}

/// Builder for constructing a [`Registry`].
pub struct RegistryBuilder<E: Message + Tagged> {
    entries: Vec<(E::Tag, Entry<E>)>,
}

impl<E: Message + Tagged> Default for RegistryBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Message + Tagged> RegistryBuilder<E> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a hook for `tag` at the given priority.
    pub fn add_action<H: Hook<E>>(self, tag: E::Tag, priority: i32, hook: H) -> Self {
        self.add_shared(tag, priority, Arc::new(hook))
    }

    /// Register an already shared hook, e.g. one hook under several tags.
    pub fn add_shared(mut self, tag: E::Tag, priority: i32, hook: Arc<dyn Hook<E>>) -> Self {
        self.entries.push((tag, Entry { priority, hook }));
        self
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the registry.
    pub fn build(self) -> Registry<E> {
        let mut hooks: HashMap<E::Tag, Vec<Entry<E>>> = HashMap::new();
        for (tag, entry) in self.entries {
            hooks.entry(tag).or_default().push(entry);
        }
        for entries in hooks.values_mut() {
            // Stable: equal priorities stay in registration order.
            entries.sort_by_key(|entry| entry.priority);
        }
        Registry { hooks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHook;
    use std::sync::Mutex;

    struct OrderHook {
        id: usize,
        order: Arc<Mutex<Vec<usize>>>,
    }

    impl Hook<ShippingEvent> for OrderHook {
        fn on_event(
            &self,
            _event: &ShippingEvent,
            _cycle: &mut Cycle,
        ) -> Result<HookResult, BoxError> {
            self.order.lock().unwrap().push(self.id);
            Ok(HookResult::Next)
        }
    }

    struct FailingHook;

    impl Hook<ShippingEvent> for FailingHook {
        fn on_event(
            &self,
            _event: &ShippingEvent,
            _cycle: &mut Cycle,
        ) -> Result<HookResult, BoxError> {
            Err(std::io::Error::other("boom").into())
        }
    }

    #[test]
    fn test_priority_then_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let hook = |id| OrderHook {
            id,
            order: Arc::clone(&order),
        };

        let registry = RegistryBuilder::new()
            .add_action(EventKind::ShippingZoneSaved, 90, hook(1))
            .add_action(EventKind::ShippingZoneSaved, 10, hook(2))
            .add_action(EventKind::ShippingZoneSaved, 90, hook(3))
            .add_action(EventKind::ShippingZoneDeleted, 10, hook(4))
            .build();

        registry
            .dispatch(&ShippingEvent::ShippingZoneSaved, &mut Cycle::new())
            .unwrap();
        assert_eq!(*order.lock().unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn test_stop_propagation() {
        let first = RecordingHook::with_result(HookResult::Stop);
        let second = RecordingHook::new();

        let registry = RegistryBuilder::new()
            .add_action(EventKind::ShippingClassSaved, 10, first.clone())
            .add_action(EventKind::ShippingClassSaved, 20, second.clone())
            .build();

        let result = registry
            .dispatch(&ShippingEvent::ShippingClassSaved, &mut Cycle::new())
            .unwrap();
        assert_eq!(result, HookResult::Stop);
        assert_eq!(first.count(), 1);
        assert_eq!(second.count(), 0, "second hook should not run after Stop");
    }

    #[test]
    fn test_error_stops_and_propagates() {
        let after = RecordingHook::new();
        let registry = RegistryBuilder::new()
            .add_action(EventKind::ShippingZoneSaved, 10, FailingHook)
            .add_action(EventKind::ShippingZoneSaved, 20, after.clone())
            .build();

        let err = registry
            .dispatch(&ShippingEvent::ShippingZoneSaved, &mut Cycle::new())
            .unwrap_err();
        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(after.count(), 0);
    }

    #[test]
    fn test_unsubscribed_tag_is_ignored() {
        let hook = RecordingHook::new();
        let registry = RegistryBuilder::new()
            .add_action(EventKind::ShippingZoneSaved, 10, hook.clone())
            .build();

        let result = registry
            .dispatch(&ShippingEvent::ProductShippingClassDeleted, &mut Cycle::new())
            .unwrap();
        assert_eq!(result, HookResult::Next);
        assert_eq!(hook.count(), 0);
        assert!(!registry.subscribes_to(EventKind::ProductShippingClassDeleted));
    }

    #[test]
    fn test_fire_resolves_hook_names() {
        let hook = RecordingHook::new();
        let registry = RegistryBuilder::new()
            .add_action(EventKind::OptionUpdated, 10, hook.clone())
            .build();

        registry
            .fire("updated_option", Some("blogname"), &mut Cycle::new())
            .unwrap();
        assert_eq!(
            hook.events(),
            vec![ShippingEvent::OptionUpdated {
                key: "blogname".into()
            }]
        );

        let err = registry.fire("init", None, &mut Cycle::new()).unwrap_err();
        assert!(matches!(err, SyncError::Routing(_)));
    }

    #[test]
    fn test_inspection() {
        let hook: Arc<dyn Hook<ShippingEvent>> = Arc::new(RecordingHook::<ShippingEvent>::new());
        let builder = RegistryBuilder::new()
            .add_shared(EventKind::OptionAdded, 90, Arc::clone(&hook))
            .add_shared(EventKind::OptionUpdated, 90, hook);
        assert_eq!(builder.len(), 2);

        let registry = builder.build();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.hook_count(EventKind::OptionAdded), 1);
        assert_eq!(registry.tags().count(), 2);
        assert!(RegistryBuilder::<ShippingEvent>::new().build().is_empty());
    }
}
