//! Error types for the vote reconciler application.
//! Consolidates errors from the engine and the store behind one enum for
//! embedding processes that do not care which layer failed.
#[derive(Debug, thiserror::Error)]
pub enum VotingError {
    #[error("Reconciler error: {0}")]
    Reconciler(#[from] vote_reconciler_engine::ReconcilerError),
    #[error("Vote store error: {0}")]
    Store(#[from] vote_reconciler_store::VoteStoreError),
}
