//! Error types for the vote reconciler.
//! Defines specific errors that can occur while reconciling a vote intent
//! against the stored state.
use thiserror::Error;
use vote_reconciler_store::VoteStoreError;

/// Represents errors that can occur within the vote reconciler.
///
/// Store errors are surfaced immediately and never retried; steps that
/// completed before the failure are not rolled back.
#[derive(Debug, Error)]
pub enum ReconcilerError {
    /// The request was malformed and was rejected before any store access.
    #[error("invalid vote request: {0}")]
    InvalidInput(String),

    /// A store call failed; the store taxonomy is preserved for the
    /// boundary to map onto a status code.
    #[error("vote store error: {0}")]
    Store(#[from] VoteStoreError),
}
