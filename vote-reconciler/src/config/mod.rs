//! Configuration module for the vote reconciler.
//! Defines and manages application-wide settings and dependencies.
mod dependencies;

pub use dependencies::Dependencies;
