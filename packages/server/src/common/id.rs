//! Typed document-id wrappers for compile-time type safety.
//!
//! This module provides `DocId<T>`, a typed wrapper around the opaque string
//! ids used by the document store. The wrapper prevents accidentally mixing
//! up different id types (e.g., passing a `TimeSlotId` where a
//! `RequirementId` was expected) while staying transparent on the wire:
//! a `DocId<T>` serializes as a plain string.
//!
//! Ids are strings rather than UUIDs because the matching engine derives
//! deterministic composite ids (see `PotentialMatch::deterministic_id`),
//! and upstream writers assign their own opaque ids.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::id::DocId;
//!
//! // Define entity marker types
//! pub struct Requirement;
//! pub struct TimeSlot;
//!
//! // Create type aliases
//! pub type RequirementId = DocId<Requirement>;
//! pub type TimeSlotId = DocId<TimeSlot>;
//!
//! // These are now incompatible types:
//! let requirement_id = RequirementId::generate();
//! let time_slot_id = TimeSlotId::generate();
//!
//! // This would be a compile error:
//! // let wrong: TimeSlotId = requirement_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed wrapper around a document-store string id.
///
/// The type parameter `T` represents the entity type this id belongs to.
///
/// # Type Safety
///
/// Ids with different `T` parameters are incompatible at compile time:
///
/// ```compile_fail
/// use server_core::common::id::DocId;
///
/// struct Hospital;
/// struct Doctor;
///
/// let hospital_id: DocId<Hospital> = DocId::generate();
/// let doctor_id: DocId<Doctor> = hospital_id; // Compile error!
/// ```
#[repr(transparent)]
pub struct DocId<T>(String, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> DocId<T> {
    /// Wrap an existing id value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into(), PhantomData)
    }

    /// Generate a fresh random id (UUID v4, simple format).
    ///
    /// Used when this service is the writer of a new document; documents
    /// written by upstream collaborators arrive with their ids already set.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string(), PhantomData)
    }

    /// The raw string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the raw string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// True if the wrapped id is empty (invalid as a document key).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<String> for DocId<T> {
    fn from(id: String) -> Self {
        Self(id, PhantomData)
    }
}

impl<T> From<&str> for DocId<T> {
    fn from(id: &str) -> Self {
        Self(id.to_string(), PhantomData)
    }
}

// ============================================================================
// Derived-trait implementations
//
// Manual impls because `derive` would put bounds on `T`, which is only a
// phantom marker and never constructed.
// ============================================================================

impl<T> Clone for DocId<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for DocId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocId({})", self.0)
    }
}

impl<T> Display for DocId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for DocId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for DocId<T> {}

impl<T> Hash for DocId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for DocId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for DocId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Serialize for DocId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for DocId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(String::deserialize(deserializer)?, PhantomData))
    }
}
