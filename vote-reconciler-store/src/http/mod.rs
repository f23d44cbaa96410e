//! HTTP document-store implementation of the vote store accessor.
//!
//! Translates the `VoteStore` contract into REST calls against a remote
//! document store. Every method is one independent request; the store
//! offers per-document atomicity and nothing beyond it.
mod vote_store;

pub use vote_store::HttpVoteStore;
