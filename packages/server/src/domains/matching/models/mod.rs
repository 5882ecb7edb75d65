pub mod candidate_filter;
pub mod potential_match;

pub use candidate_filter::CandidateFilter;
pub use potential_match::{MatchStatus, PotentialMatch};

use crate::common::{RequirementId, TimeSlotId};

/// Side of a PotentialMatch that owns it for cascade-deletion purposes.
///
/// A match is owned jointly by its requirement and its time slot; deleting
/// either source removes the match while it is still pending review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOwner {
    Requirement(RequirementId),
    TimeSlot(TimeSlotId),
}

impl std::fmt::Display for MatchOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOwner::Requirement(id) => write!(f, "requirement {}", id),
            MatchOwner::TimeSlot(id) => write!(f, "time slot {}", id),
        }
    }
}
