//! This module defines and re-exports the interfaces for the vote store.
//! It serves as a central point for accessing traits related to data interaction.
mod vote_store;

pub use vote_store::VoteStore;
