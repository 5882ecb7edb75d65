use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{MatchId, ProfileId, RequirementId, TimeSlotId};
use crate::domains::shifts::models::{DoctorTimeSlot, ShiftRequirement};

/// Potential match - a materialized candidate pairing of one requirement
/// (on one specific date) with one doctor time slot.
///
/// The record is an immutable snapshot of both sides taken at creation
/// time; later edits to the sources do not flow into it. Admin review
/// moves it out of `PendingReview`, after which the cascade-delete paths
/// no longer touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialMatch {
    pub id: MatchId,
    pub requirement_id: RequirementId,
    pub time_slot_id: TimeSlotId,

    // Hospital side snapshot
    pub hospital_id: ProfileId,
    pub hospital_name: String,
    pub start_time: String,
    pub end_time: String,
    pub overnight: bool,
    pub offered_rate: f64,
    #[serde(default)]
    pub required_specialties: Vec<String>,
    #[serde(default)]
    pub requirement_notes: String,
    pub vacancies: u32,

    // Doctor side snapshot
    pub doctor_id: ProfileId,
    pub doctor_name: String,
    pub slot_start_time: String,
    pub slot_end_time: String,
    pub slot_overnight: bool,
    pub desired_rate: f64,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub slot_notes: String,

    // Shared
    pub matched_date: DateTime<Utc>,
    pub service_type: String,
    pub city: String,
    pub state: String,

    pub status: MatchStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PotentialMatch {
    /// Compute the deterministic match identifier for a pairing.
    ///
    /// The id is derived purely from (requirement id, slot id, matched-date
    /// epoch seconds), so the same logical pairing always maps to the same
    /// record. This is the load-bearing idempotency mechanism: redelivered
    /// or concurrently racing trigger invocations converge on one id.
    pub fn deterministic_id(
        requirement_id: &RequirementId,
        time_slot_id: &TimeSlotId,
        matched_date: &DateTime<Utc>,
    ) -> MatchId {
        MatchId::new(format!(
            "{}_{}_{}",
            requirement_id,
            time_slot_id,
            matched_date.timestamp()
        ))
    }

    /// Build the snapshot record for a compatible (requirement, slot, date)
    /// triple, in the initial pending-review state.
    pub fn from_pair(
        requirement: &ShiftRequirement,
        slot: &DoctorTimeSlot,
        matched_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Self::deterministic_id(&requirement.id, &slot.id, &matched_date),
            requirement_id: requirement.id.clone(),
            time_slot_id: slot.id.clone(),

            hospital_id: requirement.hospital_id.clone(),
            hospital_name: requirement.hospital_name.clone(),
            start_time: requirement.start_time.clone(),
            end_time: requirement.end_time.clone(),
            overnight: requirement.overnight,
            offered_rate: requirement.offered_rate,
            required_specialties: requirement.required_specialties.clone(),
            requirement_notes: requirement.notes.clone(),
            vacancies: requirement.vacancies,

            doctor_id: slot.doctor_id.clone(),
            doctor_name: slot.doctor_name.clone(),
            slot_start_time: slot.start_time.clone(),
            slot_end_time: slot.end_time.clone(),
            slot_overnight: slot.overnight,
            desired_rate: slot.desired_rate,
            specialties: slot.specialties.clone(),
            slot_notes: slot.notes.clone(),

            matched_date,
            service_type: requirement.service_type.clone(),
            city: requirement.city.clone(),
            state: requirement.state.clone(),

            status: MatchStatus::PendingReview,

            created_at: now,
            updated_at: now,
        }
    }
}

/// Status enum for match lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Awaiting admin review; the only state the cascade-delete paths touch.
    PendingReview,
    Approved,
    Rejected,
    /// Converted into a contract.
    Contracted,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::PendingReview => write!(f, "PENDING_REVIEW"),
            MatchStatus::Approved => write!(f, "APPROVED"),
            MatchStatus::Rejected => write!(f, "REJECTED"),
            MatchStatus::Contracted => write!(f, "CONTRACTED"),
        }
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "PENDING_REVIEW" => Ok(MatchStatus::PendingReview),
            "APPROVED" => Ok(MatchStatus::Approved),
            "REJECTED" => Ok(MatchStatus::Rejected),
            "CONTRACTED" => Ok(MatchStatus::Contracted),
            _ => Err(anyhow::anyhow!("Invalid match status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deterministic_id_is_stable_across_runs() {
        let requirement_id = RequirementId::new("req1");
        let time_slot_id = TimeSlotId::new("slot1");
        let date = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let first = PotentialMatch::deterministic_id(&requirement_id, &time_slot_id, &date);
        let second = PotentialMatch::deterministic_id(&requirement_id, &time_slot_id, &date);

        assert_eq!(first.as_str(), "req1_slot1_1700000000");
        assert_eq!(first, second);
    }

    #[test]
    fn deterministic_id_varies_with_date() {
        let requirement_id = RequirementId::new("req1");
        let time_slot_id = TimeSlotId::new("slot1");
        let a = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let b = Utc.timestamp_opt(1_700_086_400, 0).unwrap();

        assert_ne!(
            PotentialMatch::deterministic_id(&requirement_id, &time_slot_id, &a),
            PotentialMatch::deterministic_id(&requirement_id, &time_slot_id, &b)
        );
    }
}
