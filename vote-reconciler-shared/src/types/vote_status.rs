use serde::{Deserialize, Serialize};

/// Represents the direction of a cast vote.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
    /// Indicates an upvote or positive endorsement.
    Upvoted,
    /// Indicates a downvote or negative endorsement.
    Downvoted,
}

impl VoteStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteStatus::Upvoted => "upvoted",
            VoteStatus::Downvoted => "downvoted",
        }
    }
}
