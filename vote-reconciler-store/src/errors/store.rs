//! Error types for the vote store accessor.
//! Defines specific errors that can occur during remote document operations.
use thiserror::Error;

/// Represents errors that can occur within the vote store accessor.
///
/// Every store operation is an independent remote call; an error from one
/// call says nothing about the outcome of calls issued before it.
#[derive(Debug, Error)]
pub enum VoteStoreError {
    /// The store could not be reached or the request failed in flight.
    /// No store-reported status is available for these.
    #[error("store unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The referenced document does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store answered with a non-success status.
    #[error("store error ({status}): {message}")]
    Store { status: u16, message: String },
}
