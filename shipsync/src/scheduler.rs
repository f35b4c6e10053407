//! The job-scheduling collaborator.

use shipsync_core::BoxError;

/// Enqueues the background job that pushes shipping settings upstream.
///
/// Implementations own persistence, deduplication across processes and any
/// retry policy. Errors are handed back to whoever delivered the triggering
/// event without modification.
///
/// Closures returning `Result<(), E>` are schedulers too:
///
/// ```rust,ignore
/// let scheduler = move || queue.enqueue("update_shipping_settings");
/// ```
pub trait JobScheduler: Send + Sync + 'static {
    /// Schedule the job.
    fn schedule(&self) -> Result<(), BoxError>;
}

impl<F, E> JobScheduler for F
where
    F: Fn() -> Result<(), E> + Send + Sync + 'static,
    E: Into<BoxError>,
{
    fn schedule(&self) -> Result<(), BoxError> {
        (self)().map_err(Into::into)
    }
}
