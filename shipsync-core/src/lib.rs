//! # shipsync-core
//!
//! Core traits for the shipsync dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by hosts
//! that deliver events without needing the full `shipsync` implementation.
//!
//! # Building Blocks
//!
//! - [`Message`] - marker for anything that can be delivered as an event
//! - [`Hook`] - the primitive handler: receives an event, returns `Next` or `Stop`
//! - [`Cycle`] - per-cycle context carrying the transient dispatch state
//!
//! # Error Types
//!
//! - [`SyncError`] - Top-level error type
//! - [`RoutingError`] - Host hook-name resolution errors
//! - [`BoxError`] - Errors raised by hooks and their collaborators

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod cycle;
mod error;
mod hook;
mod message;

// Re-exports
pub use cycle::Cycle;
pub use error::{BoxError, RoutingError, SyncError};
pub use hook::{Hook, HookResult};
pub use message::Message;
