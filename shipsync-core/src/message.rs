//! Message trait for event types.

/// A marker trait for events delivered through the system.
///
/// Messages must be `Send + Sync + 'static` so a registry of hooks can be
/// shared between worker threads.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct ZoneSaved { zone_id: u64 }
///
/// impl Message for ZoneSaved {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "All events delivered to hooks must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl Message for () {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
