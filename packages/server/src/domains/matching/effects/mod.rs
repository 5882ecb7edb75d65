use anyhow::Result;
use tracing::{debug, info};

use crate::domains::matching::{
    commands::MatchingCommand,
    events::StaffingEvent,
    models::{CandidateFilter, PotentialMatch},
    utils::{overlaps, to_minutes},
};
use crate::domains::shifts::models::ShiftRequirement;
use crate::kernel::batch_delete::delete_pending_matches;
use crate::kernel::ServerDeps;

/// Matching effect - executes matching commands against the store
///
/// Pipeline for materialization:
/// 1. Candidate query (equality/range/membership predicates in the store)
/// 2. Time-of-day overlap re-check per candidate
/// 3. Exact matched-date lookup
/// 4. Deterministic-id existence check (idempotency)
/// 5. Single atomic batch insert of everything staged
///
/// Candidates are processed in sequence; there is no fan-out, so the
/// per-candidate existence checks never race each other within one
/// invocation. Store errors propagate to the dispatch layer, which logs
/// the triggering document and relies on at-least-once redelivery - the
/// deterministic ids make redelivery safe.
pub struct MatchingEffect;

impl MatchingEffect {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        cmd: MatchingCommand,
        deps: &ServerDeps,
    ) -> Result<StaffingEvent> {
        match cmd {
            MatchingCommand::MaterializeMatches { requirement } => {
                materialize_matches(requirement, deps).await
            }
            MatchingCommand::CleanupMatches { owner } => {
                let deleted_count = delete_pending_matches(deps.store.as_ref(), &owner).await?;
                Ok(StaffingEvent::MatchesCleaned {
                    owner,
                    deleted_count,
                })
            }
        }
    }
}

impl Default for MatchingEffect {
    fn default() -> Self {
        Self::new()
    }
}

async fn materialize_matches(
    requirement: ShiftRequirement,
    deps: &ServerDeps,
) -> Result<StaffingEvent> {
    info!(requirement_id = %requirement.id, "Finding candidate slots for requirement");

    // 1. Candidate query - the store applies every cheap predicate so only
    //    the surviving set reaches application code.
    let filter = CandidateFilter::for_requirement(&requirement);
    let candidates = deps.store.find_available_slots(&filter).await?;

    if candidates.is_empty() {
        info!(requirement_id = %requirement.id, "No candidate slots found");
        return Ok(StaffingEvent::NoCandidates {
            requirement_id: requirement.id,
            reason: "No available slots satisfy the compatibility filter".to_string(),
        });
    }

    debug!(
        requirement_id = %requirement.id,
        candidates = candidates.len(),
        "Candidates found, checking time overlap"
    );

    let requirement_start = to_minutes(&requirement.start_time);
    let requirement_end = to_minutes(&requirement.end_time);

    let mut staged: Vec<PotentialMatch> = Vec::new();
    for slot in &candidates {
        // 2. Fine-grained temporal overlap. The candidate query narrowed by
        //    date membership only, not by time-of-day within the date.
        let slot_overlaps = overlaps(
            requirement_start,
            requirement_end,
            requirement.overnight,
            to_minutes(&slot.start_time),
            to_minutes(&slot.end_time),
            slot.overnight,
        );
        if !slot_overlaps {
            debug!(time_slot_id = %slot.id, "No time overlap, skipping");
            continue;
        }

        // 3. The matched date: the requirement date equal to the slot's.
        let Some(matched_date) = requirement.dates.iter().find(|d| **d == slot.date).copied()
        else {
            debug!(time_slot_id = %slot.id, "Slot date not in requirement date set, skipping");
            continue;
        };

        // 4. Idempotency: one record per (requirement, slot, date) triple.
        let match_id =
            PotentialMatch::deterministic_id(&requirement.id, &slot.id, &matched_date);
        if deps.store.potential_match_exists(&match_id).await? {
            debug!(match_id = %match_id, "Match already exists, skipping");
            continue;
        }

        staged.push(PotentialMatch::from_pair(&requirement, slot, matched_date));
    }

    // 5. One atomic batch per invocation; zero staged matches is success.
    let created_count = staged.len();
    if created_count > 0 {
        deps.store.insert_potential_matches(staged).await?;
    }

    info!(
        requirement_id = %requirement.id,
        candidates = candidates.len(),
        created = created_count,
        "Matching complete"
    );

    Ok(StaffingEvent::MatchesMaterialized {
        requirement_id: requirement.id,
        candidate_count: candidates.len(),
        created_count,
    })
}
