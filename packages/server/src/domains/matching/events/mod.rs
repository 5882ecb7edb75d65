use crate::common::{RequirementId, TimeSlotId};
use crate::domains::matching::models::MatchOwner;
use crate::domains::shifts::models::ShiftRequirement;

/// Staffing domain events
///
/// Change events arrive from the document change feed with explicit
/// before/after snapshots; fact events are produced by effects and routed
/// back through the machine for observation.
#[derive(Debug, Clone)]
pub enum StaffingEvent {
    // Change events (from the change feed)
    RequirementWritten {
        id: RequirementId,
        before: Option<ShiftRequirement>,
        after: Option<ShiftRequirement>,
    },
    RequirementDeleted {
        id: RequirementId,
    },
    TimeSlotDeleted {
        id: TimeSlotId,
    },

    // Fact events (from effects)
    MatchesMaterialized {
        requirement_id: RequirementId,
        candidate_count: usize,
        created_count: usize,
    },
    NoCandidates {
        requirement_id: RequirementId,
        reason: String,
    },
    MatchesCleaned {
        owner: MatchOwner,
        deleted_count: u64,
    },
}
