//! Mock vote store for testing and local development.
//!
//! The `MockVoteStore` keeps vote records, target items, and reputation
//! counters in memory, allowing reconciler tests to run without network
//! access. Targets and reputation values can be pre-registered, and a
//! failure hook lets tests exercise partial-failure sequences.
//!
//! # Example
//!
//! ```ignore
//! use vote_reconciler_store::{MockVoteStore, VoteStore};
//! use vote_reconciler_shared::types::{TargetKind, VoteStatus};
//!
//! let store = MockVoteStore::new();
//! store.register_target(TargetKind::Question, "q1", "author-1");
//! store.seed_reputation("author-1", 10);
//!
//! let record = store
//!     .create_vote(TargetKind::Question, "q1", "u1", VoteStatus::Upvoted)
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use uuid::Uuid;
use vote_reconciler_shared::types::{TargetItem, TargetKind, VoteRecord, VoteStatus};

use crate::{VoteStore, VoteStoreError};

/// In-memory vote store that mirrors the remote store's observable
/// behavior: independent calls, per-document atomicity, no uniqueness
/// constraint over the vote triple.
pub struct MockVoteStore {
    /// Vote records keyed by generated document id.
    votes: RwLock<HashMap<String, VoteRecord>>,
    /// Target items keyed by kind and id.
    targets: RwLock<HashMap<(TargetKind, String), TargetItem>>,
    /// Reputation counters keyed by user id. Unseeded users read as 0.
    reputations: RwLock<HashMap<String, i64>>,
    /// When armed, the call after the given number of successful calls
    /// fails with the given status and message.
    fail_after: Mutex<Option<(u32, u16, String)>>,
}

impl MockVoteStore {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self {
            votes: RwLock::new(HashMap::new()),
            targets: RwLock::new(HashMap::new()),
            reputations: RwLock::new(HashMap::new()),
            fail_after: Mutex::new(None),
        }
    }

    /// Register a target item so `get_target` can resolve its author.
    pub fn register_target(&self, target_kind: TargetKind, target_id: &str, author_id: &str) {
        self.targets.write().unwrap().insert(
            (target_kind, target_id.to_string()),
            TargetItem {
                id: target_id.to_string(),
                author_id: author_id.to_string(),
            },
        );
    }

    /// Set a user's reputation counter directly.
    pub fn seed_reputation(&self, user_id: &str, reputation: i64) {
        self.reputations
            .write()
            .unwrap()
            .insert(user_id.to_string(), reputation);
    }

    /// Arm the failure hook: let `calls` store calls succeed, then fail
    /// the next one with the given status and message.
    pub fn fail_after_calls(&self, calls: u32, status: u16, message: &str) {
        *self.fail_after.lock().unwrap() = Some((calls, status, message.to_string()));
    }

    /// Number of vote records currently stored, across all targets.
    pub fn vote_count(&self) -> usize {
        self.votes.read().unwrap().len()
    }

    /// Number of vote records stored for one voter on one target.
    /// Anything above 1 is a uniqueness violation.
    pub fn records_for(&self, target_kind: TargetKind, target_id: &str, voter_id: &str) -> usize {
        self.votes
            .read()
            .unwrap()
            .values()
            .filter(|record| {
                record.target_kind == target_kind
                    && record.target_id == target_id
                    && record.voter_id == voter_id
            })
            .count()
    }

    fn take_failure(&self) -> Result<(), VoteStoreError> {
        let mut armed = self.fail_after.lock().unwrap();
        match armed.take() {
            Some((0, status, message)) => Err(VoteStoreError::Store { status, message }),
            Some((remaining, status, message)) => {
                *armed = Some((remaining - 1, status, message));
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Default for MockVoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoteStore for MockVoteStore {
    async fn find_vote(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        voter_id: &str,
    ) -> Result<Option<VoteRecord>, VoteStoreError> {
        self.take_failure()?;
        Ok(self
            .votes
            .read()
            .unwrap()
            .values()
            .find(|record| {
                record.target_kind == target_kind
                    && record.target_id == target_id
                    && record.voter_id == voter_id
            })
            .cloned())
    }

    async fn create_vote(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        voter_id: &str,
        status: VoteStatus,
    ) -> Result<VoteRecord, VoteStoreError> {
        self.take_failure()?;
        let record = VoteRecord {
            id: Uuid::new_v4().to_string(),
            target_kind,
            target_id: target_id.to_string(),
            voter_id: voter_id.to_string(),
            status,
        };
        self.votes
            .write()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn delete_vote(&self, vote_id: &str) -> Result<(), VoteStoreError> {
        self.take_failure()?;
        self.votes
            .write()
            .unwrap()
            .remove(vote_id)
            .map(|_| ())
            .ok_or_else(|| VoteStoreError::NotFound(format!("votes/{}", vote_id)))
    }

    async fn get_target(
        &self,
        target_kind: TargetKind,
        target_id: &str,
    ) -> Result<TargetItem, VoteStoreError> {
        self.take_failure()?;
        self.targets
            .read()
            .unwrap()
            .get(&(target_kind, target_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                VoteStoreError::NotFound(format!("{}/{}", target_kind.as_str(), target_id))
            })
    }

    async fn get_reputation(&self, user_id: &str) -> Result<i64, VoteStoreError> {
        self.take_failure()?;
        Ok(self
            .reputations
            .read()
            .unwrap()
            .get(user_id)
            .copied()
            .unwrap_or(0))
    }

    async fn set_reputation(&self, user_id: &str, reputation: i64) -> Result<(), VoteStoreError> {
        self.take_failure()?;
        self.reputations
            .write()
            .unwrap()
            .insert(user_id.to_string(), reputation);
        Ok(())
    }

    async fn count_votes(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        status: VoteStatus,
        voter_id: Option<&str>,
    ) -> Result<i64, VoteStoreError> {
        self.take_failure()?;
        let count = self
            .votes
            .read()
            .unwrap()
            .values()
            .filter(|record| {
                record.target_kind == target_kind
                    && record.target_id == target_id
                    && record.status == status
                    && voter_id.is_none_or(|voter| record.voter_id == voter)
            })
            .count();
        Ok(count as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find_vote() {
        let store = MockVoteStore::new();

        let created = store
            .create_vote(TargetKind::Question, "q1", "u1", VoteStatus::Upvoted)
            .await
            .unwrap();

        let found = store
            .find_vote(TargetKind::Question, "q1", "u1")
            .await
            .unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_vote_is_scoped_to_the_triple() {
        let store = MockVoteStore::new();
        store
            .create_vote(TargetKind::Question, "q1", "u1", VoteStatus::Upvoted)
            .await
            .unwrap();

        // Same target, different voter
        let other_voter = store
            .find_vote(TargetKind::Question, "q1", "u2")
            .await
            .unwrap();
        assert!(other_voter.is_none());

        // Same id, different kind
        let other_kind = store.find_vote(TargetKind::Answer, "q1", "u1").await.unwrap();
        assert!(other_kind.is_none());
    }

    #[tokio::test]
    async fn test_delete_vote_removes_the_record() {
        let store = MockVoteStore::new();
        let record = store
            .create_vote(TargetKind::Answer, "a1", "u1", VoteStatus::Downvoted)
            .await
            .unwrap();

        store.delete_vote(&record.id).await.unwrap();

        assert_eq!(store.vote_count(), 0);
        let found = store.find_vote(TargetKind::Answer, "a1", "u1").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_vote_is_not_found() {
        let store = MockVoteStore::new();
        let result = store.delete_vote("missing").await;
        assert!(matches!(result, Err(VoteStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_target_resolves_author() {
        let store = MockVoteStore::new();
        store.register_target(TargetKind::Question, "q1", "author-1");

        let target = store.get_target(TargetKind::Question, "q1").await.unwrap();
        assert_eq!(target.author_id, "author-1");
    }

    #[tokio::test]
    async fn test_get_unknown_target_is_not_found() {
        let store = MockVoteStore::new();
        let result = store.get_target(TargetKind::Question, "missing").await;
        assert!(matches!(result, Err(VoteStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_reputation_defaults_to_zero() {
        let store = MockVoteStore::new();
        assert_eq!(store.get_reputation("nobody").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_reputation_read_then_write() {
        let store = MockVoteStore::new();
        store.seed_reputation("author-1", 10);

        let reputation = store.get_reputation("author-1").await.unwrap();
        store.set_reputation("author-1", reputation + 1).await.unwrap();

        assert_eq!(store.get_reputation("author-1").await.unwrap(), 11);
    }

    #[tokio::test]
    async fn test_count_votes_voter_scoped() {
        let store = MockVoteStore::new();
        store
            .create_vote(TargetKind::Question, "q1", "u1", VoteStatus::Upvoted)
            .await
            .unwrap();
        store
            .create_vote(TargetKind::Question, "q1", "u2", VoteStatus::Upvoted)
            .await
            .unwrap();

        let scoped = store
            .count_votes(TargetKind::Question, "q1", VoteStatus::Upvoted, Some("u1"))
            .await
            .unwrap();
        assert_eq!(scoped, 1);

        let unscoped = store
            .count_votes(TargetKind::Question, "q1", VoteStatus::Upvoted, None)
            .await
            .unwrap();
        assert_eq!(unscoped, 2);

        let downvotes = store
            .count_votes(TargetKind::Question, "q1", VoteStatus::Downvoted, Some("u1"))
            .await
            .unwrap();
        assert_eq!(downvotes, 0);
    }

    #[tokio::test]
    async fn test_fail_hook_fires_once_at_the_armed_call() {
        let store = MockVoteStore::new();
        store.register_target(TargetKind::Question, "q1", "author-1");
        store.fail_after_calls(1, 503, "store offline");

        // First call passes.
        store.get_target(TargetKind::Question, "q1").await.unwrap();

        // Second call fails with the armed error.
        let result = store.get_target(TargetKind::Question, "q1").await;
        match result {
            Err(VoteStoreError::Store { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "store offline");
            }
            other => panic!("expected store error, got {:?}", other),
        }

        // Hook disarms after firing.
        store.get_target(TargetKind::Question, "q1").await.unwrap();
    }
}
