// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "materialize matches") lives in domain effects that
// use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseStaffingStore)

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::common::{ContractId, MatchId, ProfileId};
use crate::domains::contracts::models::{Contract, PartyProfile};
use crate::domains::matching::models::{CandidateFilter, MatchOwner, PotentialMatch};
use crate::domains::shifts::models::DoctorTimeSlot;

// =============================================================================
// Staffing Store Trait (Infrastructure - document collections)
// =============================================================================

/// Document-store access for the staffing collections.
///
/// Production uses the Postgres-backed implementation; tests inject an
/// in-memory one. Both evaluate the same candidate predicate
/// (`CandidateFilter`), one in SQL and one in code.
#[async_trait]
pub trait BaseStaffingStore: Send + Sync {
    /// Candidate query for the compatibility filter: available slots
    /// satisfying every equality/range/membership predicate of `filter`.
    async fn find_available_slots(&self, filter: &CandidateFilter) -> Result<Vec<DoctorTimeSlot>>;

    /// Whether a match with this deterministic id already exists.
    async fn potential_match_exists(&self, id: &MatchId) -> Result<bool>;

    /// Insert a batch of match records as a single atomic write.
    ///
    /// All-or-nothing: a failure applies none of the batch. An empty batch
    /// must be a no-op. Implementations may treat an id collision as a
    /// silent skip (the ids are deterministic, so a collision is the same
    /// logical record arriving twice).
    async fn insert_potential_matches(&self, matches: Vec<PotentialMatch>) -> Result<()>;

    /// Ids of still-pending matches owned by `owner`, at most `limit`.
    /// Used by the paginated cascade-delete loop.
    async fn find_pending_match_ids(&self, owner: &MatchOwner, limit: u32) -> Result<Vec<MatchId>>;

    /// Delete match records by id, returning how many were removed.
    async fn delete_potential_matches(&self, ids: &[MatchId]) -> Result<u64>;

    // --- Contract PDF support (read-mostly) ---

    /// Load a contract document.
    async fn find_contract(&self, id: &ContractId) -> Result<Option<Contract>>;

    /// Load a party profile (hospital or doctor account document).
    async fn find_party_profile(&self, id: &ProfileId) -> Result<Option<PartyProfile>>;

    /// Write the generated PDF URL back onto the contract.
    async fn set_contract_pdf_url(&self, id: &ContractId, url: &str) -> Result<()>;
}

// =============================================================================
// Blob Storage Trait (Infrastructure)
// =============================================================================

/// Binary object storage with signed-URL access.
#[async_trait]
pub trait BaseBlobStorage: Send + Sync {
    /// Store an object at `path`, overwriting any existing object.
    async fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;

    /// Mint a signed URL for `path` valid for `ttl`.
    async fn signed_url(&self, path: &str, ttl: Duration) -> Result<String>;
}
