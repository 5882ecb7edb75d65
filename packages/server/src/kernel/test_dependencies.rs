// In-memory implementations for testing
//
// Provides store and blob-storage implementations that can be injected
// into ServerDeps for tests. The store evaluates the same
// `CandidateFilter::matches` predicate as production, so filter semantics
// cannot drift between the two.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::common::{ContractId, MatchId, ProfileId, TimeSlotId};
use crate::domains::contracts::models::{Contract, PartyProfile};
use crate::domains::matching::models::{CandidateFilter, MatchOwner, MatchStatus, PotentialMatch};
use crate::domains::shifts::models::DoctorTimeSlot;

use super::{BaseBlobStorage, BaseStaffingStore};

// =============================================================================
// In-memory staffing store
// =============================================================================

/// In-memory staffing store backed by hash maps.
#[derive(Default)]
pub struct MemoryStaffingStore {
    slots: Mutex<HashMap<TimeSlotId, DoctorTimeSlot>>,
    matches: Mutex<HashMap<MatchId, PotentialMatch>>,
    contracts: Mutex<HashMap<ContractId, Contract>>,
    profiles: Mutex<HashMap<ProfileId, PartyProfile>>,
}

impl MemoryStaffingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an availability slot.
    pub fn insert_slot(&self, slot: DoctorTimeSlot) {
        self.slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(slot.id.clone(), slot);
    }

    /// Remove a slot, simulating a deletion by its owner.
    pub fn remove_slot(&self, id: &TimeSlotId) {
        self.slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id);
    }

    /// Seed a contract.
    pub fn insert_contract(&self, contract: Contract) {
        self.contracts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(contract.id.clone(), contract);
    }

    /// Seed a party profile.
    pub fn insert_profile(&self, profile: PartyProfile) {
        self.profiles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(profile.id.clone(), profile);
    }

    /// Fetch a match by id.
    pub fn get_match(&self, id: &MatchId) -> Option<PotentialMatch> {
        self.matches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
    }

    /// All stored matches.
    pub fn all_matches(&self) -> Vec<PotentialMatch> {
        self.matches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }

    /// Total number of stored matches.
    pub fn match_count(&self) -> usize {
        self.matches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Move a match out of (or back into) pending review, as the
    /// admin-review surface would.
    pub fn set_match_status(&self, id: &MatchId, status: MatchStatus) {
        if let Some(record) = self
            .matches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(id)
        {
            record.status = status;
            record.updated_at = Utc::now();
        }
    }
}

#[async_trait]
impl BaseStaffingStore for MemoryStaffingStore {
    async fn find_available_slots(&self, filter: &CandidateFilter) -> Result<Vec<DoctorTimeSlot>> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots
            .values()
            .filter(|slot| filter.matches(slot))
            .cloned()
            .collect())
    }

    async fn potential_match_exists(&self, id: &MatchId) -> Result<bool> {
        Ok(self
            .matches
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(id))
    }

    async fn insert_potential_matches(&self, batch: Vec<PotentialMatch>) -> Result<()> {
        let mut matches = self.matches.lock().unwrap_or_else(|e| e.into_inner());
        for record in batch {
            // Deterministic ids: a collision is the same logical record.
            matches.entry(record.id.clone()).or_insert(record);
        }
        Ok(())
    }

    async fn find_pending_match_ids(&self, owner: &MatchOwner, limit: u32) -> Result<Vec<MatchId>> {
        let matches = self.matches.lock().unwrap_or_else(|e| e.into_inner());
        Ok(matches
            .values()
            .filter(|m| m.status == MatchStatus::PendingReview)
            .filter(|m| match owner {
                MatchOwner::Requirement(id) => m.requirement_id == *id,
                MatchOwner::TimeSlot(id) => m.time_slot_id == *id,
            })
            .take(limit as usize)
            .map(|m| m.id.clone())
            .collect())
    }

    async fn delete_potential_matches(&self, ids: &[MatchId]) -> Result<u64> {
        let mut matches = self.matches.lock().unwrap_or_else(|e| e.into_inner());
        let mut deleted = 0;
        for id in ids {
            if matches.remove(id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    async fn find_contract(&self, id: &ContractId) -> Result<Option<Contract>> {
        Ok(self
            .contracts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned())
    }

    async fn find_party_profile(&self, id: &ProfileId) -> Result<Option<PartyProfile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned())
    }

    async fn set_contract_pdf_url(&self, id: &ContractId, url: &str) -> Result<()> {
        if let Some(contract) = self
            .contracts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get_mut(id)
        {
            contract.pdf_url = Some(url.to_string());
            contract.updated_at = Utc::now();
        }
        Ok(())
    }
}

// =============================================================================
// In-memory blob storage
// =============================================================================

/// A stored object with its content type.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Blob storage that records puts and mints fake signed URLs.
#[derive(Default)]
pub struct MemoryBlobStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored object at `path`, if any.
    pub fn object(&self, path: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
            .cloned()
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[async_trait]
impl BaseBlobStorage for MemoryBlobStorage {
    async fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(
                path.to_string(),
                StoredObject {
                    bytes,
                    content_type: content_type.to_string(),
                },
            );
        Ok(())
    }

    async fn signed_url(&self, path: &str, ttl: Duration) -> Result<String> {
        Ok(format!("memory://{}?ttl={}", path, ttl.as_secs()))
    }
}
