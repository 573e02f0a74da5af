use crate::{builder::BuildError, finalizer::ChainError};
use bidder_relay::RelayError;

/// A per-event failure, surfaced at the reactor's event-handling boundary.
///
/// Every variant is transient: the reactor logs it with slot and event
/// context and keeps polling, relying on the log source's at-least-once
/// redelivery for the retry. Fatal configuration problems never reach this
/// type; they abort startup as [`ConfigError`].
///
/// [`ConfigError`]: bidder_types::ConfigError
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// Building or signing the private-chain transaction failed.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// The bundle relay rejected or garbled the submission.
    #[error(transparent)]
    Relay(#[from] RelayError),
    /// A settlement-chain call or its receipt wait failed.
    #[error(transparent)]
    Chain(#[from] ChainError),
}
