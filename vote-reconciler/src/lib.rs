//! Vote Reconciler
//!
//! This library wires the vote reconciliation engine to its HTTP document
//! store backend, including configuration management, error handling, and
//! telemetry initialization. The serving layer links against this crate
//! and drives `Dependencies::reconciler`.

pub mod config;
pub mod errors;
pub mod telemetry;

pub use config::Dependencies;
pub use errors::VotingError;
