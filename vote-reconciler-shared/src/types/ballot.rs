use crate::types::{TargetKind, VoteStatus};
use serde::{Deserialize, Serialize};

/// Represents a user's vote intent against one target item.
///
/// A ballot carries no information about any existing vote; the
/// reconciler resolves the stored state and decides whether the intent
/// means a first vote, a switch, or a retraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ballot {
    pub voter_id: String,
    pub target_kind: TargetKind,
    pub target_id: String,
    pub status: VoteStatus,
}
