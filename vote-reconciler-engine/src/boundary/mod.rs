//! This module defines the typed surface the external routing layer
//! consumes: the cast-vote request and response shapes and the mapping
//! from reconciler errors to numeric status codes.
//!
//! Routing, authentication, and session resolution live outside this
//! crate; they hand over an already-authenticated request and render
//! whatever this module produces.
use serde::{Deserialize, Serialize};
use vote_reconciler_shared::types::{Ballot, TargetKind, VoteStatus};
use vote_reconciler_store::VoteStoreError;

use crate::errors::ReconcilerError;

/// A cast-vote request as received from the routing layer.
///
/// Wire field names are `votedById`, `voteStatus`, `type`, and `typeId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub voted_by_id: String,
    pub vote_status: VoteStatus,
    #[serde(rename = "type")]
    pub target_kind: TargetKind,
    pub type_id: String,
}

impl TryFrom<CastVoteRequest> for Ballot {
    type Error = ReconcilerError;

    /// Validates the request into a ballot.
    ///
    /// Blank identifiers are rejected here, before any store access.
    fn try_from(request: CastVoteRequest) -> Result<Self, Self::Error> {
        if request.voted_by_id.trim().is_empty() {
            return Err(ReconcilerError::InvalidInput(
                "votedById must not be blank".to_string(),
            ));
        }
        if request.type_id.trim().is_empty() {
            return Err(ReconcilerError::InvalidInput(
                "typeId must not be blank".to_string(),
            ));
        }
        Ok(Ballot {
            voter_id: request.voted_by_id,
            target_kind: request.target_kind,
            target_id: request.type_id,
            status: request.vote_status,
        })
    }
}

/// The successful cast-vote response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub vote_result: i64,
    pub message: String,
}

impl CastVoteResponse {
    pub fn new(vote_result: i64) -> Self {
        Self {
            vote_result,
            message: "vote handled".to_string(),
        }
    }
}

/// The failure response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl From<&ReconcilerError> for ErrorBody {
    fn from(error: &ReconcilerError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Maps a reconciler error to the numeric status the boundary returns.
///
/// The store's reported status passes through where one exists;
/// transport failures carry none and default to 500.
pub fn error_status(error: &ReconcilerError) -> u16 {
    match error {
        ReconcilerError::InvalidInput(_) => 400,
        ReconcilerError::Store(VoteStoreError::NotFound(_)) => 404,
        ReconcilerError::Store(VoteStoreError::Store { status, .. }) => *status,
        ReconcilerError::Store(VoteStoreError::Transport(_)) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json() -> &'static str {
        r#"{
            "votedById": "u1",
            "voteStatus": "upvoted",
            "type": "question",
            "typeId": "q1"
        }"#
    }

    #[test]
    fn test_request_deserializes_wire_field_names() {
        let request: CastVoteRequest = serde_json::from_str(request_json()).unwrap();

        assert_eq!(request.voted_by_id, "u1");
        assert_eq!(request.vote_status, VoteStatus::Upvoted);
        assert_eq!(request.target_kind, TargetKind::Question);
        assert_eq!(request.type_id, "q1");
    }

    #[test]
    fn test_request_rejects_unknown_vote_status() {
        let result = serde_json::from_str::<CastVoteRequest>(
            r#"{"votedById": "u1", "voteStatus": "sideways", "type": "question", "typeId": "q1"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_request_converts_to_ballot() {
        let request: CastVoteRequest = serde_json::from_str(request_json()).unwrap();

        let ballot = Ballot::try_from(request).unwrap();

        assert_eq!(ballot.voter_id, "u1");
        assert_eq!(ballot.target_kind, TargetKind::Question);
        assert_eq!(ballot.target_id, "q1");
        assert_eq!(ballot.status, VoteStatus::Upvoted);
    }

    #[test]
    fn test_blank_voter_id_is_invalid_input() {
        let request = CastVoteRequest {
            voted_by_id: "  ".to_string(),
            vote_status: VoteStatus::Upvoted,
            target_kind: TargetKind::Question,
            type_id: "q1".to_string(),
        };

        let result = Ballot::try_from(request);
        assert!(matches!(result, Err(ReconcilerError::InvalidInput(_))));
    }

    #[test]
    fn test_blank_type_id_is_invalid_input() {
        let request = CastVoteRequest {
            voted_by_id: "u1".to_string(),
            vote_status: VoteStatus::Downvoted,
            target_kind: TargetKind::Answer,
            type_id: "".to_string(),
        };

        let result = Ballot::try_from(request);
        assert!(matches!(result, Err(ReconcilerError::InvalidInput(_))));
    }

    #[test]
    fn test_response_serializes_vote_result() {
        let response = CastVoteResponse::new(-1);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["voteResult"], -1);
        assert_eq!(json["message"], "vote handled");
    }

    #[test]
    fn test_error_status_mapping() {
        let invalid = ReconcilerError::InvalidInput("blank".to_string());
        assert_eq!(error_status(&invalid), 400);

        let not_found =
            ReconcilerError::Store(VoteStoreError::NotFound("questions/q1".to_string()));
        assert_eq!(error_status(&not_found), 404);

        let store = ReconcilerError::Store(VoteStoreError::Store {
            status: 429,
            message: "rate limited".to_string(),
        });
        assert_eq!(error_status(&store), 429);
    }

    #[test]
    fn test_error_body_carries_the_message() {
        let error = ReconcilerError::InvalidInput("typeId must not be blank".to_string());
        let body = ErrorBody::from(&error);
        assert!(body.message.contains("typeId must not be blank"));
    }
}
