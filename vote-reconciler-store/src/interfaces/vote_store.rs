//! This module defines the `VoteStore` trait, which provides an interface
//! for interacting with the underlying document store for vote records,
//! target items, and reputation counters. It abstracts the remote store
//! operations for persistence and retrieval.
use vote_reconciler_shared::types::{TargetItem, TargetKind, VoteRecord, VoteStatus};

use crate::errors::VoteStoreError;

/// A trait that defines the interface for interacting with the vote store.
///
/// Implementors of this trait provide methods for looking up, creating and
/// deleting vote records, resolving target items, and reading and writing
/// author reputation counters.
///
/// Every method is an independent remote call. The store offers no
/// cross-call atomicity and no uniqueness constraint over the
/// `(target_kind, target_id, voter_id)` triple; callers own both.
#[async_trait::async_trait]
pub trait VoteStore: Send + Sync {
    /// Looks up the current vote record for a voter on a target, if any.
    ///
    /// # Arguments
    ///
    /// * `target_kind` - The kind of the voted item.
    /// * `target_id` - The identifier of the voted item.
    /// * `voter_id` - The identifier of the voting user.
    ///
    /// # Returns
    ///
    /// The matching `VoteRecord` if one exists, or `None`.
    async fn find_vote(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        voter_id: &str,
    ) -> Result<Option<VoteRecord>, VoteStoreError>;

    /// Creates a new vote record for a voter on a target.
    ///
    /// The store assigns the record identifier.
    ///
    /// # Returns
    ///
    /// The created `VoteRecord`, or a `VoteStoreError` if the creation fails.
    async fn create_vote(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        voter_id: &str,
        status: VoteStatus,
    ) -> Result<VoteRecord, VoteStoreError>;

    /// Deletes a vote record by its store identifier.
    async fn delete_vote(&self, vote_id: &str) -> Result<(), VoteStoreError>;

    /// Resolves a target item, primarily to learn its author.
    ///
    /// # Returns
    ///
    /// The `TargetItem`, or `VoteStoreError::NotFound` if the item does not
    /// exist.
    async fn get_target(
        &self,
        target_kind: TargetKind,
        target_id: &str,
    ) -> Result<TargetItem, VoteStoreError>;

    /// Reads a user's current reputation counter.
    async fn get_reputation(&self, user_id: &str) -> Result<i64, VoteStoreError>;

    /// Writes a user's reputation counter.
    ///
    /// Paired with `get_reputation` this is an explicit read-then-write;
    /// the store offers no atomicity across the pair.
    async fn set_reputation(&self, user_id: &str, reputation: i64) -> Result<(), VoteStoreError>;

    /// Counts vote records on a target with the given status, optionally
    /// scoped to a single voter.
    ///
    /// # Arguments
    ///
    /// * `voter_id` - When present, restricts the count to that voter's
    ///   records, turning the count into an existence check.
    ///
    /// # Returns
    ///
    /// The number of matching records.
    async fn count_votes(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        status: VoteStatus,
        voter_id: Option<&str>,
    ) -> Result<i64, VoteStoreError>;
}
