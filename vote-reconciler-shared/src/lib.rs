//! # Vote Reconciler Shared
//! This crate defines shared data structures and types used across the vote
//! reconciler ecosystem. It includes common definitions for vote records,
//! target items, vote status, and ballots.
pub mod types;
