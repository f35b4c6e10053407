//! Preconditions for subscribing to shipping events at all.

/// The two externally owned conditions that must both hold before the
/// syncer subscribes to anything.
///
/// Both are queried once, at registration time.
pub trait DispatchGate: Send + Sync {
    /// Whether the advertising platform account is connected.
    fn account_connected(&self) -> bool;

    /// Whether the merchant chose to sync shipping from local settings.
    fn sync_from_local_settings_enabled(&self) -> bool;

    /// Both conditions at once.
    fn is_open(&self) -> bool {
        self.account_connected() && self.sync_from_local_settings_enabled()
    }
}

impl<G: DispatchGate + ?Sized> DispatchGate for &G {
    fn account_connected(&self) -> bool {
        (**self).account_connected()
    }

    fn sync_from_local_settings_enabled(&self) -> bool {
        (**self).sync_from_local_settings_enabled()
    }
}

impl<G: DispatchGate + ?Sized> DispatchGate for std::sync::Arc<G> {
    fn account_connected(&self) -> bool {
        (**self).account_connected()
    }

    fn sync_from_local_settings_enabled(&self) -> bool {
        (**self).sync_from_local_settings_enabled()
    }
}

/// A gate built from two closures.
///
/// # Example
///
/// ```rust,ignore
/// let gate = FnGate::new(
///     move || accounts.is_connected(),
///     move || settings.shipping_rates_from_store(),
/// );
/// ```
pub struct FnGate<A, S> {
    account_connected: A,
    sync_enabled: S,
}

impl<A, S> FnGate<A, S>
where
    A: Fn() -> bool + Send + Sync,
    S: Fn() -> bool + Send + Sync,
{
    /// Create a gate from the account and settings predicates.
    pub fn new(account_connected: A, sync_enabled: S) -> Self {
        Self {
            account_connected,
            sync_enabled,
        }
    }
}

impl<A, S> DispatchGate for FnGate<A, S>
where
    A: Fn() -> bool + Send + Sync,
    S: Fn() -> bool + Send + Sync,
{
    fn account_connected(&self) -> bool {
        (self.account_connected)()
    }

    fn sync_from_local_settings_enabled(&self) -> bool {
        (self.sync_enabled)()
    }
}
