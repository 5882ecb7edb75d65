use tracing::{debug, info};

use crate::domains::matching::{commands::MatchingCommand, events::StaffingEvent};
use crate::domains::matching::models::MatchOwner;
use crate::domains::shifts::models::RequirementStatus;

/// Matching state machine
///
/// Pure decision layer: maps a staffing event to at most one command.
/// Holds no state of its own - each trigger invocation is an independent
/// unit of work, and correctness under concurrent or redelivered events
/// comes from the materializer's deterministic-identity check, not from
/// anything remembered here.
pub struct MatchingMachine;

impl MatchingMachine {
    pub fn new() -> Self {
        Self
    }

    pub fn decide(&self, event: &StaffingEvent) -> Option<MatchingCommand> {
        match event {
            // Requirement written: materialize only when the document is
            // brand-new with open status, or the status flipped into open
            // on this write. Field edits while open, closes, and
            // non-open -> non-open transitions short-circuit.
            StaffingEvent::RequirementWritten { id, before, after } => {
                let Some(after) = after else {
                    // Deletes arrive on their own event; a write with no
                    // after snapshot is stale and ignored.
                    debug!(requirement_id = %id, "Write event without after snapshot, ignoring");
                    return None;
                };
                let was_open = before
                    .as_ref()
                    .is_some_and(|b| b.status == RequirementStatus::Open);
                let is_open = after.status == RequirementStatus::Open;

                if is_open && !was_open {
                    info!(requirement_id = %id, "Requirement entered open status, matching");
                    Some(MatchingCommand::MaterializeMatches {
                        requirement: after.clone(),
                    })
                } else {
                    debug!(
                        requirement_id = %id,
                        is_open,
                        was_open,
                        "Requirement write does not require matching"
                    );
                    None
                }
            }

            StaffingEvent::RequirementDeleted { id } => {
                info!(requirement_id = %id, "Requirement deleted, cleaning pending matches");
                Some(MatchingCommand::CleanupMatches {
                    owner: MatchOwner::Requirement(id.clone()),
                })
            }

            StaffingEvent::TimeSlotDeleted { id } => {
                info!(time_slot_id = %id, "Time slot deleted, cleaning pending matches");
                Some(MatchingCommand::CleanupMatches {
                    owner: MatchOwner::TimeSlot(id.clone()),
                })
            }

            // Fact events: observe and stop.
            StaffingEvent::MatchesMaterialized {
                requirement_id,
                candidate_count,
                created_count,
            } => {
                info!(
                    requirement_id = %requirement_id,
                    candidates = candidate_count,
                    created = created_count,
                    "Matching completed"
                );
                None
            }

            StaffingEvent::NoCandidates {
                requirement_id,
                reason,
            } => {
                info!(requirement_id = %requirement_id, reason = %reason, "No candidates for requirement");
                None
            }

            StaffingEvent::MatchesCleaned {
                owner,
                deleted_count,
            } => {
                if *deleted_count > 0 {
                    info!(owner = %owner, deleted = deleted_count, "Pending matches cleaned");
                } else {
                    debug!(owner = %owner, "No pending matches to clean");
                }
                None
            }
        }
    }
}

impl Default for MatchingMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::common::{ProfileId, RequirementId, TimeSlotId};
    use crate::domains::shifts::models::ShiftRequirement;

    fn requirement(status: RequirementStatus) -> ShiftRequirement {
        let now = Utc::now();
        ShiftRequirement {
            id: RequirementId::new("req1"),
            hospital_id: ProfileId::new("hosp1"),
            hospital_name: "Hospital Central".to_string(),
            dates: vec![Utc.timestamp_opt(1_700_000_000, 0).unwrap()],
            start_time: "07:00".to_string(),
            end_time: "19:00".to_string(),
            overnight: false,
            service_type: "Plantao".to_string(),
            required_specialties: vec![],
            offered_rate: 120.0,
            vacancies: 1,
            notes: String::new(),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn written(
        before: Option<ShiftRequirement>,
        after: Option<ShiftRequirement>,
    ) -> StaffingEvent {
        StaffingEvent::RequirementWritten {
            id: RequirementId::new("req1"),
            before,
            after,
        }
    }

    #[test]
    fn new_open_requirement_triggers_matching() {
        let machine = MatchingMachine::new();
        let decision = machine.decide(&written(None, Some(requirement(RequirementStatus::Open))));
        assert!(matches!(
            decision,
            Some(MatchingCommand::MaterializeMatches { .. })
        ));
    }

    #[test]
    fn new_closed_requirement_does_not_trigger() {
        let machine = MatchingMachine::new();
        let decision = machine.decide(&written(None, Some(requirement(RequirementStatus::Closed))));
        assert!(decision.is_none());
    }

    #[test]
    fn status_flip_into_open_triggers_matching() {
        let machine = MatchingMachine::new();
        let decision = machine.decide(&written(
            Some(requirement(RequirementStatus::Closed)),
            Some(requirement(RequirementStatus::Open)),
        ));
        assert!(matches!(
            decision,
            Some(MatchingCommand::MaterializeMatches { .. })
        ));
    }

    #[test]
    fn field_edit_while_open_does_not_retrigger() {
        let machine = MatchingMachine::new();
        let mut edited = requirement(RequirementStatus::Open);
        edited.notes = "urgent".to_string();
        let decision = machine.decide(&written(
            Some(requirement(RequirementStatus::Open)),
            Some(edited),
        ));
        assert!(decision.is_none());
    }

    #[test]
    fn close_transition_does_not_trigger() {
        let machine = MatchingMachine::new();
        let decision = machine.decide(&written(
            Some(requirement(RequirementStatus::Open)),
            Some(requirement(RequirementStatus::Closed)),
        ));
        assert!(decision.is_none());
    }

    #[test]
    fn requirement_delete_decides_cleanup() {
        let machine = MatchingMachine::new();
        let decision = machine.decide(&StaffingEvent::RequirementDeleted {
            id: RequirementId::new("req1"),
        });
        assert!(matches!(
            decision,
            Some(MatchingCommand::CleanupMatches {
                owner: MatchOwner::Requirement(_),
            })
        ));
    }

    #[test]
    fn time_slot_delete_decides_cleanup() {
        let machine = MatchingMachine::new();
        let decision = machine.decide(&StaffingEvent::TimeSlotDeleted {
            id: TimeSlotId::new("slot1"),
        });
        assert!(matches!(
            decision,
            Some(MatchingCommand::CleanupMatches {
                owner: MatchOwner::TimeSlot(_),
            })
        ));
    }

    #[test]
    fn fact_events_decide_nothing() {
        let machine = MatchingMachine::new();
        assert!(machine
            .decide(&StaffingEvent::NoCandidates {
                requirement_id: RequirementId::new("req1"),
                reason: "no slots".to_string(),
            })
            .is_none());
    }
}
