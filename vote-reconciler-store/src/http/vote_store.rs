use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::{Deserialize, Serialize};
use vote_reconciler_shared::types::{TargetItem, TargetKind, VoteRecord, VoteStatus};

use crate::{VoteStore, VoteStoreError};

const VOTES_COLLECTION: &str = "votes";
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for a remote document store holding votes, targets, and
/// reputation counters.
///
/// Collections are provisioned out of band; this client assumes they exist
/// and are correctly typed. List responses carry a `total` field counting
/// all matches even when `limit` caps the returned page, which is what
/// `count_votes` reads.
pub struct HttpVoteStore {
    endpoint: String,
    api_key: String,
    client: ReqwestClient,
}

impl HttpVoteStore {
    /// Creates a new client against the given store endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Base URL of the document store.
    /// * `api_key` - Key sent with every request as `x-api-key`.
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        HttpVoteStore {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn documents_url(&self, collection: &str) -> String {
        format!("{}/collections/{}/documents", self.endpoint, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/collections/{}/documents/{}", self.endpoint, collection, id)
    }

    fn reputation_url(&self, user_id: &str) -> String {
        format!("{}/users/{}/reputation", self.endpoint, user_id)
    }
}

#[async_trait]
impl VoteStore for HttpVoteStore {
    async fn find_vote(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        voter_id: &str,
    ) -> Result<Option<VoteRecord>, VoteStoreError> {
        let response = self
            .client
            .get(self.documents_url(VOTES_COLLECTION))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("target_kind", target_kind.as_str()),
                ("target_id", target_id),
                ("voter_id", voter_id),
            ])
            .send()
            .await?;
        let response = ensure_success(response, VOTES_COLLECTION.to_string()).await?;
        let list: DocumentList<VoteDocument> = response.json().await?;
        Ok(list.documents.into_iter().next().map(VoteRecord::from))
    }

    async fn create_vote(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        voter_id: &str,
        status: VoteStatus,
    ) -> Result<VoteRecord, VoteStoreError> {
        let response = self
            .client
            .post(self.documents_url(VOTES_COLLECTION))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&NewVoteDocument {
                target_kind,
                target_id,
                voter_id,
                status,
            })
            .send()
            .await?;
        let response = ensure_success(response, VOTES_COLLECTION.to_string()).await?;
        let document: VoteDocument = response.json().await?;
        Ok(document.into())
    }

    async fn delete_vote(&self, vote_id: &str) -> Result<(), VoteStoreError> {
        let response = self
            .client
            .delete(self.document_url(VOTES_COLLECTION, vote_id))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        ensure_success(response, format!("{}/{}", VOTES_COLLECTION, vote_id)).await?;
        Ok(())
    }

    async fn get_target(
        &self,
        target_kind: TargetKind,
        target_id: &str,
    ) -> Result<TargetItem, VoteStoreError> {
        let collection = collection(target_kind);
        let response = self
            .client
            .get(self.document_url(collection, target_id))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let response = ensure_success(response, format!("{}/{}", collection, target_id)).await?;
        let document: TargetDocument = response.json().await?;
        Ok(TargetItem {
            id: document.id,
            author_id: document.author_id,
        })
    }

    async fn get_reputation(&self, user_id: &str) -> Result<i64, VoteStoreError> {
        let response = self
            .client
            .get(self.reputation_url(user_id))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let response = ensure_success(response, format!("users/{}", user_id)).await?;
        let document: ReputationDocument = response.json().await?;
        Ok(document.reputation)
    }

    async fn set_reputation(&self, user_id: &str, reputation: i64) -> Result<(), VoteStoreError> {
        let response = self
            .client
            .put(self.reputation_url(user_id))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&ReputationDocument { reputation })
            .send()
            .await?;
        ensure_success(response, format!("users/{}", user_id)).await?;
        Ok(())
    }

    async fn count_votes(
        &self,
        target_kind: TargetKind,
        target_id: &str,
        status: VoteStatus,
        voter_id: Option<&str>,
    ) -> Result<i64, VoteStoreError> {
        // limit=1 keeps the page small; `total` still counts every match.
        let mut query: Vec<(&str, String)> = vec![
            ("target_kind", target_kind.as_str().to_string()),
            ("target_id", target_id.to_string()),
            ("status", status.as_str().to_string()),
            ("limit", "1".to_string()),
        ];
        if let Some(voter_id) = voter_id {
            query.push(("voter_id", voter_id.to_string()));
        }

        let response = self
            .client
            .get(self.documents_url(VOTES_COLLECTION))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&query)
            .send()
            .await?;
        let response = ensure_success(response, VOTES_COLLECTION.to_string()).await?;
        let list: DocumentList<VoteDocument> = response.json().await?;
        Ok(list.total)
    }
}

/// Maps a target kind to the collection holding items of that kind.
fn collection(target_kind: TargetKind) -> &'static str {
    match target_kind {
        TargetKind::Question => "questions",
        TargetKind::Answer => "answers",
    }
}

/// Turns a non-success response into the matching `VoteStoreError`.
///
/// A 404 becomes `NotFound` with the given context; any other failure
/// keeps the store-reported status for the caller to surface.
async fn ensure_success(response: Response, context: String) -> Result<Response, VoteStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(VoteStoreError::NotFound(context));
    }
    let message = match response.json::<ErrorDocument>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("store request failed")
            .to_string(),
    };
    Err(VoteStoreError::Store {
        status: status.as_u16(),
        message,
    })
}

#[derive(Debug, Deserialize)]
struct DocumentList<T> {
    total: i64,
    documents: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct VoteDocument {
    id: String,
    target_kind: TargetKind,
    target_id: String,
    voter_id: String,
    status: VoteStatus,
}

impl From<VoteDocument> for VoteRecord {
    fn from(document: VoteDocument) -> Self {
        VoteRecord {
            id: document.id,
            target_kind: document.target_kind,
            target_id: document.target_id,
            voter_id: document.voter_id,
            status: document.status,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewVoteDocument<'a> {
    target_kind: TargetKind,
    target_id: &'a str,
    voter_id: &'a str,
    status: VoteStatus,
}

#[derive(Debug, Deserialize)]
struct TargetDocument {
    id: String,
    author_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReputationDocument {
    reputation: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorDocument {
    message: String,
}
