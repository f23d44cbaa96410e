use crate::types::{TargetKind, VoteStatus};
use serde::{Deserialize, Serialize};

/// Represents one user's current stance on one target item, as stored.
///
/// At most one record exists per `(target_kind, target_id, voter_id)`
/// triple at any time. A vote switch is expressed as delete plus
/// recreate, never as an in-place status update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub id: String,
    pub target_kind: TargetKind,
    pub target_id: String,
    pub voter_id: String,
    pub status: VoteStatus,
}
