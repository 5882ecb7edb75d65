//! Typed id definitions for all domain entities.
//!
//! This module defines type aliases for each document collection, providing
//! compile-time type safety for id usage throughout the application.
//!
//! # Example
//!
//! ```ignore
//! use crate::common::{MatchId, RequirementId, TimeSlotId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let requirement_id: RequirementId = RequirementId::generate();
//! let time_slot_id: TimeSlotId = TimeSlotId::generate();
//!
//! // This would be a compile error:
//! // let wrong: TimeSlotId = requirement_id;
//! ```

// Re-export the core DocId type
pub use super::id::DocId;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for ShiftRequirement documents (hospital demand).
pub struct ShiftRequirement;

/// Marker type for DoctorTimeSlot documents (doctor availability).
pub struct DoctorTimeSlot;

/// Marker type for PotentialMatch documents (materialized pairings).
pub struct PotentialMatch;

/// Marker type for Contract documents.
pub struct Contract;

/// Marker type for party profile documents (hospital/doctor accounts).
pub struct PartyProfile;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed id for ShiftRequirement documents.
pub type RequirementId = DocId<ShiftRequirement>;

/// Typed id for DoctorTimeSlot documents.
pub type TimeSlotId = DocId<DoctorTimeSlot>;

/// Typed id for PotentialMatch documents.
pub type MatchId = DocId<PotentialMatch>;

/// Typed id for Contract documents.
pub type ContractId = DocId<Contract>;

/// Typed id for party profile documents.
pub type ProfileId = DocId<PartyProfile>;
