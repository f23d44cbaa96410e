//! # Vote Reconciler Engine
//! This crate defines the core vote reconciliation logic: given a user's
//! vote intent, it decides which stored vote record must change and which
//! reputation deltas must be applied, over a store that offers no
//! cross-document transactions.
//! It includes the reconciler, the request/response boundary surface, and
//! error handling.
pub mod boundary;
pub mod errors;
pub mod reconciler;

pub use errors::ReconcilerError;
pub use reconciler::VoteReconciler;
