//! Shipping change events and the host hook names they come from.
//!
//! Every [`ShippingEvent`] means the same thing to this crate: "shipping
//! configuration changed". The variants only exist so hosts can subscribe
//! selectively and so the two option-change sources can carry their key.

use crate::registry::Tagged;
use bitflags::bitflags;
use phf::phf_map;
use shipsync_core::{Message, RoutingError};

/// Payload-free tag of a [`ShippingEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A shipping zone was saved.
    ShippingZoneSaved,
    /// A shipping zone was deleted.
    ShippingZoneDeleted,
    /// A shipping method was added to a zone.
    ShippingZoneMethodAdded,
    /// A shipping method was removed from a zone.
    ShippingZoneMethodDeleted,
    /// A shipping method was enabled or disabled.
    ShippingZoneMethodStatusToggled,
    /// A shipping class was saved from the shipping classes screen.
    ShippingClassSaved,
    /// A product shipping class term was saved.
    ProductShippingClassSaved,
    /// A product shipping class term was deleted.
    ProductShippingClassDeleted,
    /// The free shipping method options were updated.
    FreeShippingOptionsUpdated,
    /// The flat rate method options were updated.
    FlatRateOptionsUpdated,
    /// A stored option was updated.
    OptionUpdated,
    /// A stored option was added.
    OptionAdded,
}

static HOOK_NAMES: phf::Map<&'static str, EventKind> = phf_map! {
    "woocommerce_after_shipping_zone_object_save" => EventKind::ShippingZoneSaved,
    "woocommerce_delete_shipping_zone" => EventKind::ShippingZoneDeleted,
    "woocommerce_shipping_zone_method_added" => EventKind::ShippingZoneMethodAdded,
    "woocommerce_shipping_zone_method_deleted" => EventKind::ShippingZoneMethodDeleted,
    "woocommerce_shipping_zone_method_status_toggled" => EventKind::ShippingZoneMethodStatusToggled,
    "woocommerce_shipping_classes_save_class" => EventKind::ShippingClassSaved,
    "saved_product_shipping_class" => EventKind::ProductShippingClassSaved,
    "delete_product_shipping_class" => EventKind::ProductShippingClassDeleted,
    "woocommerce_update_options_shipping_free_shipping" => EventKind::FreeShippingOptionsUpdated,
    "woocommerce_update_options_shipping_flat_rate" => EventKind::FlatRateOptionsUpdated,
    "updated_option" => EventKind::OptionUpdated,
    "added_option" => EventKind::OptionAdded,
};

impl EventKind {
    /// Every event kind, in subscription order.
    pub const ALL: [EventKind; 12] = [
        EventKind::ShippingZoneSaved,
        EventKind::ShippingZoneDeleted,
        EventKind::ShippingZoneMethodAdded,
        EventKind::ShippingZoneMethodDeleted,
        EventKind::ShippingZoneMethodStatusToggled,
        EventKind::ShippingClassSaved,
        EventKind::ProductShippingClassSaved,
        EventKind::ProductShippingClassDeleted,
        EventKind::FreeShippingOptionsUpdated,
        EventKind::FlatRateOptionsUpdated,
        EventKind::OptionUpdated,
        EventKind::OptionAdded,
    ];

    /// The host hook this kind is raised by.
    pub const fn hook_name(self) -> &'static str {
        match self {
            EventKind::ShippingZoneSaved => "woocommerce_after_shipping_zone_object_save",
            EventKind::ShippingZoneDeleted => "woocommerce_delete_shipping_zone",
            EventKind::ShippingZoneMethodAdded => "woocommerce_shipping_zone_method_added",
            EventKind::ShippingZoneMethodDeleted => "woocommerce_shipping_zone_method_deleted",
            EventKind::ShippingZoneMethodStatusToggled => {
                "woocommerce_shipping_zone_method_status_toggled"
            }
            EventKind::ShippingClassSaved => "woocommerce_shipping_classes_save_class",
            EventKind::ProductShippingClassSaved => "saved_product_shipping_class",
            EventKind::ProductShippingClassDeleted => "delete_product_shipping_class",
            EventKind::FreeShippingOptionsUpdated => {
                "woocommerce_update_options_shipping_free_shipping"
            }
            EventKind::FlatRateOptionsUpdated => "woocommerce_update_options_shipping_flat_rate",
            EventKind::OptionUpdated => "updated_option",
            EventKind::OptionAdded => "added_option",
        }
    }

    /// Resolve a host hook name.
    pub fn from_hook_name(name: &str) -> Option<EventKind> {
        HOOK_NAMES.get(name).copied()
    }

    /// Whether events of this kind carry an option key.
    pub const fn is_option_change(self) -> bool {
        matches!(self, EventKind::OptionUpdated | EventKind::OptionAdded)
    }

    /// The single-bit set for this kind.
    pub const fn flag(self) -> EventKinds {
        match self {
            EventKind::ShippingZoneSaved => EventKinds::SHIPPING_ZONE_SAVED,
            EventKind::ShippingZoneDeleted => EventKinds::SHIPPING_ZONE_DELETED,
            EventKind::ShippingZoneMethodAdded => EventKinds::SHIPPING_ZONE_METHOD_ADDED,
            EventKind::ShippingZoneMethodDeleted => EventKinds::SHIPPING_ZONE_METHOD_DELETED,
            EventKind::ShippingZoneMethodStatusToggled => {
                EventKinds::SHIPPING_ZONE_METHOD_STATUS_TOGGLED
            }
            EventKind::ShippingClassSaved => EventKinds::SHIPPING_CLASS_SAVED,
            EventKind::ProductShippingClassSaved => EventKinds::PRODUCT_SHIPPING_CLASS_SAVED,
            EventKind::ProductShippingClassDeleted => EventKinds::PRODUCT_SHIPPING_CLASS_DELETED,
            EventKind::FreeShippingOptionsUpdated => EventKinds::FREE_SHIPPING_OPTIONS_UPDATED,
            EventKind::FlatRateOptionsUpdated => EventKinds::FLAT_RATE_OPTIONS_UPDATED,
            EventKind::OptionUpdated => EventKinds::OPTION_UPDATED,
            EventKind::OptionAdded => EventKinds::OPTION_ADDED,
        }
    }
}

bitflags! {
    /// A set of [`EventKind`]s, used to choose which sources to subscribe to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventKinds: u16 {
        /// See [`EventKind::ShippingZoneSaved`].
        const SHIPPING_ZONE_SAVED = 1 << 0;
        /// See [`EventKind::ShippingZoneDeleted`].
        const SHIPPING_ZONE_DELETED = 1 << 1;
        /// See [`EventKind::ShippingZoneMethodAdded`].
        const SHIPPING_ZONE_METHOD_ADDED = 1 << 2;
        /// See [`EventKind::ShippingZoneMethodDeleted`].
        const SHIPPING_ZONE_METHOD_DELETED = 1 << 3;
        /// See [`EventKind::ShippingZoneMethodStatusToggled`].
        const SHIPPING_ZONE_METHOD_STATUS_TOGGLED = 1 << 4;
        /// See [`EventKind::ShippingClassSaved`].
        const SHIPPING_CLASS_SAVED = 1 << 5;
        /// See [`EventKind::ProductShippingClassSaved`].
        const PRODUCT_SHIPPING_CLASS_SAVED = 1 << 6;
        /// See [`EventKind::ProductShippingClassDeleted`].
        const PRODUCT_SHIPPING_CLASS_DELETED = 1 << 7;
        /// See [`EventKind::FreeShippingOptionsUpdated`].
        const FREE_SHIPPING_OPTIONS_UPDATED = 1 << 8;
        /// See [`EventKind::FlatRateOptionsUpdated`].
        const FLAT_RATE_OPTIONS_UPDATED = 1 << 9;
        /// See [`EventKind::OptionUpdated`].
        const OPTION_UPDATED = 1 << 10;
        /// See [`EventKind::OptionAdded`].
        const OPTION_ADDED = 1 << 11;

        /// Both option-change sources.
        const OPTION_CHANGES = Self::OPTION_UPDATED.bits() | Self::OPTION_ADDED.bits();
    }
}

impl EventKinds {
    /// Whether `kind` is in this set.
    pub fn includes(self, kind: EventKind) -> bool {
        self.contains(kind.flag())
    }

    /// The kinds in this set, in subscription order.
    pub fn kinds(self) -> impl Iterator<Item = EventKind> {
        EventKind::ALL
            .into_iter()
            .filter(move |kind| self.includes(*kind))
    }
}

impl From<EventKind> for EventKinds {
    fn from(kind: EventKind) -> Self {
        kind.flag()
    }
}

/// Something in the shipping configuration changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingEvent {
    /// See [`EventKind::ShippingZoneSaved`].
    ShippingZoneSaved,
    /// See [`EventKind::ShippingZoneDeleted`].
    ShippingZoneDeleted,
    /// See [`EventKind::ShippingZoneMethodAdded`].
    ShippingZoneMethodAdded,
    /// See [`EventKind::ShippingZoneMethodDeleted`].
    ShippingZoneMethodDeleted,
    /// See [`EventKind::ShippingZoneMethodStatusToggled`].
    ShippingZoneMethodStatusToggled,
    /// See [`EventKind::ShippingClassSaved`].
    ShippingClassSaved,
    /// See [`EventKind::ProductShippingClassSaved`].
    ProductShippingClassSaved,
    /// See [`EventKind::ProductShippingClassDeleted`].
    ProductShippingClassDeleted,
    /// See [`EventKind::FreeShippingOptionsUpdated`].
    FreeShippingOptionsUpdated,
    /// See [`EventKind::FlatRateOptionsUpdated`].
    FlatRateOptionsUpdated,
    /// A stored option was updated.
    OptionUpdated {
        /// The option's key.
        key: String,
    },
    /// A stored option was added.
    OptionAdded {
        /// The option's key.
        key: String,
    },
}

impl Message for ShippingEvent {}

impl ShippingEvent {
    /// Build an event from a host hook name and its first argument.
    ///
    /// Option hooks need the option key as `arg`. Other hooks ignore it,
    /// since the ids they pass along (zone id, class id) are not used here.
    pub fn from_hook(name: &str, arg: Option<&str>) -> Result<ShippingEvent, RoutingError> {
        let kind = EventKind::from_hook_name(name)
            .ok_or_else(|| RoutingError::UnknownHook(name.to_owned()))?;
        Self::from_kind(kind, arg)
    }

    /// Build an event of the given kind.
    pub fn from_kind(kind: EventKind, arg: Option<&str>) -> Result<ShippingEvent, RoutingError> {
        let event = match kind {
            EventKind::ShippingZoneSaved => ShippingEvent::ShippingZoneSaved,
            EventKind::ShippingZoneDeleted => ShippingEvent::ShippingZoneDeleted,
            EventKind::ShippingZoneMethodAdded => ShippingEvent::ShippingZoneMethodAdded,
            EventKind::ShippingZoneMethodDeleted => ShippingEvent::ShippingZoneMethodDeleted,
            EventKind::ShippingZoneMethodStatusToggled => {
                ShippingEvent::ShippingZoneMethodStatusToggled
            }
            EventKind::ShippingClassSaved => ShippingEvent::ShippingClassSaved,
            EventKind::ProductShippingClassSaved => ShippingEvent::ProductShippingClassSaved,
            EventKind::ProductShippingClassDeleted => ShippingEvent::ProductShippingClassDeleted,
            EventKind::FreeShippingOptionsUpdated => ShippingEvent::FreeShippingOptionsUpdated,
            EventKind::FlatRateOptionsUpdated => ShippingEvent::FlatRateOptionsUpdated,
            EventKind::OptionUpdated => ShippingEvent::OptionUpdated {
                key: arg
                    .ok_or(RoutingError::MissingArgument(kind.hook_name()))?
                    .to_owned(),
            },
            EventKind::OptionAdded => ShippingEvent::OptionAdded {
                key: arg
                    .ok_or(RoutingError::MissingArgument(kind.hook_name()))?
                    .to_owned(),
            },
        };
        Ok(event)
    }

    /// The tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            ShippingEvent::ShippingZoneSaved => EventKind::ShippingZoneSaved,
            ShippingEvent::ShippingZoneDeleted => EventKind::ShippingZoneDeleted,
            ShippingEvent::ShippingZoneMethodAdded => EventKind::ShippingZoneMethodAdded,
            ShippingEvent::ShippingZoneMethodDeleted => EventKind::ShippingZoneMethodDeleted,
            ShippingEvent::ShippingZoneMethodStatusToggled => {
                EventKind::ShippingZoneMethodStatusToggled
            }
            ShippingEvent::ShippingClassSaved => EventKind::ShippingClassSaved,
            ShippingEvent::ProductShippingClassSaved => EventKind::ProductShippingClassSaved,
            ShippingEvent::ProductShippingClassDeleted => EventKind::ProductShippingClassDeleted,
            ShippingEvent::FreeShippingOptionsUpdated => EventKind::FreeShippingOptionsUpdated,
            ShippingEvent::FlatRateOptionsUpdated => EventKind::FlatRateOptionsUpdated,
            ShippingEvent::OptionUpdated { .. } => EventKind::OptionUpdated,
            ShippingEvent::OptionAdded { .. } => EventKind::OptionAdded,
        }
    }

    /// The option key, for the option-change variants.
    pub fn option_key(&self) -> Option<&str> {
        match self {
            ShippingEvent::OptionUpdated { key } | ShippingEvent::OptionAdded { key } => {
                Some(key)
            }
            _ => None,
        }
    }
}

impl Tagged for ShippingEvent {
    type Tag = EventKind;

    fn tag(&self) -> EventKind {
        self.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_hook_name(kind.hook_name()), Some(kind));
        }
        assert_eq!(HOOK_NAMES.len(), EventKind::ALL.len());
    }

    #[test]
    fn test_unknown_hook_name() {
        assert_eq!(EventKind::from_hook_name("save_post"), None);
        assert_eq!(
            ShippingEvent::from_hook("save_post", None),
            Err(RoutingError::UnknownHook("save_post".into()))
        );
    }

    #[test]
    fn test_option_hooks_require_key() {
        assert_eq!(
            ShippingEvent::from_hook("updated_option", None),
            Err(RoutingError::MissingArgument("updated_option"))
        );
        let event =
            ShippingEvent::from_hook("added_option", Some("woocommerce_flat_rate_1_settings"))
                .unwrap();
        assert_eq!(event.kind(), EventKind::OptionAdded);
        assert_eq!(event.option_key(), Some("woocommerce_flat_rate_1_settings"));
    }

    #[test]
    fn test_plain_hooks_ignore_argument() {
        let event =
            ShippingEvent::from_hook("woocommerce_delete_shipping_zone", Some("42")).unwrap();
        assert_eq!(event, ShippingEvent::ShippingZoneDeleted);
        assert_eq!(event.option_key(), None);
    }

    #[test]
    fn test_kind_flags() {
        assert_eq!(EventKinds::all().kinds().count(), 12);
        assert!(EventKinds::OPTION_CHANGES.includes(EventKind::OptionAdded));
        assert!(!EventKinds::OPTION_CHANGES.includes(EventKind::ShippingZoneSaved));
        for kind in EventKind::ALL {
            assert_eq!(kind.is_option_change(), EventKinds::OPTION_CHANGES.includes(kind));
        }

        let set = EventKinds::from(EventKind::ShippingZoneSaved) | EventKind::OptionAdded.flag();
        let kinds: Vec<_> = set.kinds().collect();
        assert_eq!(kinds, vec![EventKind::ShippingZoneSaved, EventKind::OptionAdded]);
    }
}
