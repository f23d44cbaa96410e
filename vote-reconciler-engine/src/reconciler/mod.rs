//! This module defines the `VoteReconciler`, the engine that turns a vote
//! intent into the stored vote record change and reputation deltas that
//! keep an author's counter consistent with the current set of votes.
//!
//! The store offers no multi-document transactions, so reconciliation is
//! a sequence of independent reads and compensating writes: deleting an
//! existing vote reverses its original contribution, creating a new vote
//! applies its own. A switch is both steps, never a precomputed combined
//! delta.
use std::sync::Arc;

use tracing::debug;
use vote_reconciler_shared::types::{Ballot, VoteStatus};
use vote_reconciler_store::VoteStore;

use crate::errors::ReconcilerError;

/// `VoteReconciler` reconciles vote intents against the stored state.
///
/// It owns no storage; it owns the rule that keeps reputation consistent
/// with votes, expressed through the `VoteStore` accessor.
pub struct VoteReconciler {
    vote_store: Arc<dyn VoteStore>,
}

impl VoteReconciler {
    /// Creates a new `VoteReconciler` instance.
    ///
    /// # Arguments
    ///
    /// * `vote_store` - An `Arc` trait object implementing `VoteStore`,
    ///   providing the interface to the remote document store.
    pub fn new(vote_store: Arc<dyn VoteStore>) -> Self {
        Self { vote_store }
    }

    /// Reconciles one vote intent and returns the voter-scoped vote result.
    ///
    /// Repeating the voter's existing vote retracts it; a different
    /// direction on an existing vote switches it (delete plus recreate);
    /// otherwise a new vote record is created. Each vote-record change is
    /// followed by its own reputation adjustment on the target's author.
    ///
    /// The returned scalar is the voter's upvote count minus downvote
    /// count on the target (each side at most 1 under the uniqueness
    /// invariant), for the caller to redraw vote UI state. It is not a
    /// global item score.
    ///
    /// # Errors
    ///
    /// Returns a `ReconcilerError` if the target does not exist (before
    /// any write) or when any store call fails. Steps completed before a
    /// failure are not rolled back.
    pub async fn cast_vote(&self, ballot: &Ballot) -> Result<i64, ReconcilerError> {
        let existing = self
            .vote_store
            .find_vote(ballot.target_kind, &ballot.target_id, &ballot.voter_id)
            .await?;

        // Resolving the target up front is the existence check: a missing
        // target fails here, before any write.
        let target = self
            .vote_store
            .get_target(ballot.target_kind, &ballot.target_id)
            .await?;

        if let Some(vote) = &existing {
            self.vote_store.delete_vote(&vote.id).await?;
            let delta = reversal_delta(vote.status);
            self.apply_reputation_delta(&target.author_id, delta).await?;
            debug!(vote_id = %vote.id, delta, "reversed existing vote");
        }

        let removed = existing.map(|vote| vote.status);
        if removed != Some(ballot.status) {
            self.vote_store
                .create_vote(
                    ballot.target_kind,
                    &ballot.target_id,
                    &ballot.voter_id,
                    ballot.status,
                )
                .await?;
            // Re-resolve the author and re-read the counter; the reversal
            // step or a concurrent caller may have moved it.
            let target = self
                .vote_store
                .get_target(ballot.target_kind, &ballot.target_id)
                .await?;
            let delta = cast_delta(ballot.status);
            self.apply_reputation_delta(&target.author_id, delta).await?;
            debug!(status = ballot.status.as_str(), delta, "applied new vote");
        }

        let (upvotes, downvotes) = tokio::try_join!(
            self.vote_store.count_votes(
                ballot.target_kind,
                &ballot.target_id,
                VoteStatus::Upvoted,
                Some(&ballot.voter_id),
            ),
            self.vote_store.count_votes(
                ballot.target_kind,
                &ballot.target_id,
                VoteStatus::Downvoted,
                Some(&ballot.voter_id),
            ),
        )?;

        Ok(upvotes - downvotes)
    }

    /// Adjusts an author's reputation counter by the given delta.
    ///
    /// An explicit read-then-write pair; the store offers no atomicity
    /// across it, so a concurrent adjustment can be lost under contention.
    async fn apply_reputation_delta(
        &self,
        author_id: &str,
        delta: i64,
    ) -> Result<(), ReconcilerError> {
        let reputation = self.vote_store.get_reputation(author_id).await?;
        self.vote_store
            .set_reputation(author_id, reputation + delta)
            .await?;
        Ok(())
    }
}

/// Reputation contribution removed when an existing vote is deleted.
/// Deleting always reverses the vote's original effect.
fn reversal_delta(status: VoteStatus) -> i64 {
    match status {
        VoteStatus::Upvoted => -1,
        VoteStatus::Downvoted => 1,
    }
}

/// Reputation contribution applied when a new vote is created.
fn cast_delta(status: VoteStatus) -> i64 {
    match status {
        VoteStatus::Upvoted => 1,
        VoteStatus::Downvoted => -1,
    }
}
