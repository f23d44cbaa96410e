use serde::{Deserialize, Serialize};

/// Represents the kind of content item a vote is attached to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A question posted by a user.
    Question,
    /// An answer posted under a question.
    Answer,
}

impl TargetKind {
    /// Returns the wire representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Question => "question",
            TargetKind::Answer => "answer",
        }
    }
}

/// Represents a votable content item resolved from the store.
///
/// The reconciler reads targets only to resolve the author whose
/// reputation a vote change must be applied to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetItem {
    pub id: String,
    pub author_id: String,
}
