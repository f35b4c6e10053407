//! Matcher for per-instance shipping method option keys.
//!
//! Shipping methods store their per-zone settings under an option key built
//! from the method id and the instance id:
//!
//! ```text
//! option_key := "woocommerce_" method "_" instance "_settings"
//! method     := "flat_rate" | "free_shipping"
//! instance   := DIGIT+        (ASCII 0-9, any length)
//! ```
//!
//! Nothing else may appear before, after or in between.

/// The shipping methods whose settings are synced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    /// `flat_rate`
    FlatRate,
    /// `free_shipping`
    FreeShipping,
}

impl ShippingMethod {
    /// Every supported method.
    pub const ALL: [ShippingMethod; 2] = [ShippingMethod::FlatRate, ShippingMethod::FreeShipping];

    /// The method id as used in option keys.
    pub const fn id(self) -> &'static str {
        match self {
            ShippingMethod::FlatRate => "flat_rate",
            ShippingMethod::FreeShipping => "free_shipping",
        }
    }

    /// Look a method up by id.
    pub fn from_id(id: &str) -> Option<ShippingMethod> {
        Self::ALL.into_iter().find(|method| method.id() == id)
    }
}

/// A parsed option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingOptionKey<'a> {
    method: ShippingMethod,
    instance: &'a str,
}

impl<'a> ShippingOptionKey<'a> {
    /// The shipping method the settings belong to.
    pub fn method(&self) -> ShippingMethod {
        self.method
    }

    /// The instance id digits exactly as they appear in the key.
    pub fn instance(&self) -> &'a str {
        self.instance
    }

    /// The instance id as a number, if it fits in a `u64`.
    pub fn instance_id(&self) -> Option<u64> {
        self.instance.parse().ok()
    }
}

const PREFIX: &str = "woocommerce_";
const SUFFIX: &str = "_settings";

/// Parse a per-instance shipping option key.
///
/// Returns `None` for any key that does not follow the grammar exactly.
pub fn parse_option_key(key: &str) -> Option<ShippingOptionKey<'_>> {
    let body = key.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;

    ShippingMethod::ALL.into_iter().find_map(|method| {
        let instance = body.strip_prefix(method.id())?.strip_prefix('_')?;
        if instance.is_empty() || !instance.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(ShippingOptionKey { method, instance })
    })
}

/// Whether `key` is a per-instance shipping option key.
pub fn is_shipping_option_key(key: &str) -> bool {
    parse_option_key(key).is_some()
}
