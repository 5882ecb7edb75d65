use crate::domains::matching::models::MatchOwner;
use crate::domains::shifts::models::ShiftRequirement;

/// Matching domain commands
#[derive(Debug, Clone)]
pub enum MatchingCommand {
    /// Find compatible slots for an open requirement and materialize
    /// PotentialMatch records for each (idempotent by deterministic id).
    MaterializeMatches { requirement: ShiftRequirement },

    /// Delete all still-pending matches owned by a deleted source document.
    CleanupMatches { owner: MatchOwner },
}
