//! Error types for shipsync.
//!
//! - [`SyncError`] - Top-level error type for host-facing operations
//! - [`RoutingError`] - Errors resolving a host hook name into an event
//! - [`BoxError`] - The error currency of hooks and their collaborators

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for host-facing operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The host hook could not be turned into an event.
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    /// A hook (or a collaborator it called) failed.
    ///
    /// The inner error is the value the hook returned, untouched.
    #[error(transparent)]
    Hook(BoxError),
}

impl SyncError {
    /// Returns the hook error, if this is one.
    pub fn into_hook_error(self) -> Option<BoxError> {
        match self {
            SyncError::Hook(err) => Some(err),
            SyncError::Routing(_) => None,
        }
    }
}

impl From<BoxError> for SyncError {
    fn from(err: BoxError) -> Self {
        SyncError::Hook(err)
    }
}

/// Errors that can occur while resolving a host hook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// The hook name is not one this component subscribes to.
    #[error("unknown hook: {0}")]
    UnknownHook(String),

    /// The hook requires an argument (e.g. an option key) and none was given.
    #[error("hook `{0}` requires an argument")]
    MissingArgument(&'static str),
}
