//! Error types for the vote store.
//! Consolidates and re-exports error types related to store operations.
mod store;

pub use store::VoteStoreError;
