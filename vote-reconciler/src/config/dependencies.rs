use std::sync::Arc;

use dotenv::dotenv;
use vote_reconciler_engine::VoteReconciler;
use vote_reconciler_store::{HttpVoteStore, VoteStore};

use crate::errors::VotingError;

/// `Dependencies` struct holds the wired components of the vote
/// reconciler.
///
/// It includes the store accessor for the remote document store and the
/// reconciler that drives vote reconciliation through it. Collection
/// provisioning happens out of band; the store is assumed reachable and
/// correctly typed once requests flow.
pub struct Dependencies {
    pub vote_store: Arc<dyn VoteStore>,
    pub reconciler: VoteReconciler,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// Loads `.env` if present, then reads `VOTE_STORE_ENDPOINT` and
    /// `VOTE_STORE_API_KEY` from the environment and wires the HTTP
    /// store client into the reconciler.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `VotingError` if any dependency fails to initialize.
    pub async fn new() -> Result<Self, VotingError> {
        dotenv().ok();

        let endpoint =
            std::env::var("VOTE_STORE_ENDPOINT").expect("VOTE_STORE_ENDPOINT must be set");
        let api_key = std::env::var("VOTE_STORE_API_KEY").expect("VOTE_STORE_API_KEY must be set");

        let vote_store: Arc<dyn VoteStore> = Arc::new(HttpVoteStore::new(&endpoint, &api_key));
        let reconciler = VoteReconciler::new(vote_store.clone());

        Ok(Dependencies {
            vote_store,
            reconciler,
        })
    }
}
