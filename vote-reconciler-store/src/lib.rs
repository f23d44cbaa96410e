//! # Vote Reconciler Store
//! This crate provides the trait and implementations for accessing the vote
//! store. It includes definitions for errors, the accessor interface, an HTTP
//! document-store backend, and an in-memory mock backend for tests.
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod mock;

pub use errors::VoteStoreError;
pub use http::HttpVoteStore;
pub use interfaces::VoteStore;
pub use mock::MockVoteStore;
