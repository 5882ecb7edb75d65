use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ContractId, MatchId, ProfileId, RequirementId, TimeSlotId};

/// Contract - derived from an approved match by the admin-review flow.
///
/// The matching engine never writes contracts; this model exists for the
/// on-demand PDF generator, which reads the contract and both parties'
/// profiles and writes the generated document's URL back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub potential_match_id: MatchId,
    pub requirement_id: RequirementId,
    pub time_slot_id: TimeSlotId,

    pub hospital_id: ProfileId,
    pub hospital_name: String,
    pub doctor_id: ProfileId,
    pub doctor_name: String,

    /// The contracted shift date (midnight timestamp).
    pub date: DateTime<Utc>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub overnight: bool,
    pub service_type: String,
    /// Agreed hourly rate.
    pub hourly_rate: f64,

    pub city: String,
    pub state: String,

    pub status: ContractStatus,
    /// Signed URL of the generated PDF, set by the generator.
    #[serde(default)]
    pub pdf_url: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status enum for contract lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractStatus::Active => write!(f, "ACTIVE"),
            ContractStatus::Completed => write!(f, "COMPLETED"),
            ContractStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Party profile - the account document of a hospital or doctor.
///
/// Read-only here; profile management belongs to the account surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyProfile {
    pub id: ProfileId,
    pub display_name: String,
    /// Professional/company registry number (CRM for doctors, CNPJ for
    /// hospitals).
    #[serde(default)]
    pub registry_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}
