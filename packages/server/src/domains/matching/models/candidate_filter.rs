use chrono::{DateTime, Utc};

use crate::domains::shifts::models::{DoctorTimeSlot, ShiftRequirement, SlotStatus};

/// Compatibility predicate narrowing available slots for one requirement.
///
/// This is the single source of truth for candidate selection: the
/// in-memory store evaluates `matches` directly and the Postgres store
/// pushes the same predicates into SQL. Only the finer time-of-day overlap
/// check runs later, in the materializer, against the surviving candidates.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    pub state: String,
    pub city: String,
    pub service_type: String,
    /// Ceiling on the slot's desired rate (the hospital's offered rate).
    pub max_desired_rate: f64,
    /// The slot's date must be a member of this set.
    pub dates: Vec<DateTime<Utc>>,
    /// When non-empty, the slot must offer at least one of these.
    pub required_specialties: Vec<String>,
}

impl CandidateFilter {
    /// Derive the filter from an open requirement.
    pub fn for_requirement(requirement: &ShiftRequirement) -> Self {
        Self {
            state: requirement.state.clone(),
            city: requirement.city.clone(),
            service_type: requirement.service_type.clone(),
            max_desired_rate: requirement.offered_rate,
            dates: requirement.dates.clone(),
            required_specialties: requirement.required_specialties.clone(),
        }
    }

    /// Evaluate the full predicate against one slot.
    pub fn matches(&self, slot: &DoctorTimeSlot) -> bool {
        slot.status == SlotStatus::Available
            && slot.state == self.state
            && slot.city == self.city
            && slot.service_type == self.service_type
            && slot.desired_rate <= self.max_desired_rate
            && self.dates.contains(&slot.date)
            && (self.required_specialties.is_empty()
                || slot
                    .specialties
                    .iter()
                    .any(|s| self.required_specialties.contains(s)))
    }
}
