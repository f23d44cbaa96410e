mod ballot;
mod target;
mod vote_record;
mod vote_status;

pub use ballot::Ballot;
pub use target::{TargetItem, TargetKind};
pub use vote_record::VoteRecord;
pub use vote_status::VoteStatus;
