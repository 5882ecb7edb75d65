use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ProfileId, TimeSlotId};

/// Doctor time slot - a doctor's declared availability on a single date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorTimeSlot {
    pub id: TimeSlotId,
    pub doctor_id: ProfileId,
    pub doctor_name: String,

    // When
    /// The single calendar date of availability (midnight timestamp).
    pub date: DateTime<Utc>,
    /// Start of availability, "HH:MM".
    pub start_time: String,
    /// End of availability, "HH:MM". May be <= start_time when overnight.
    pub end_time: String,
    #[serde(default)]
    pub overnight: bool,

    // What
    pub service_type: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Hourly rate floor the doctor will accept.
    pub desired_rate: f64,
    #[serde(default)]
    pub notes: String,

    // Where
    pub city: String,
    pub state: String,

    pub status: SlotStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DoctorTimeSlot {
    /// Validate identity fields at the boundary. Same policy as
    /// `ShiftRequirement::validate`.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            bail!("time slot has empty id");
        }
        if self.doctor_id.is_empty() {
            bail!("time slot {} has empty doctor_id", self.id);
        }
        Ok(())
    }
}

/// Status enum for slot lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    /// A matching candidate.
    Available,
    /// Taken by a confirmed contract.
    Booked,
    Expired,
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotStatus::Available => write!(f, "AVAILABLE"),
            SlotStatus::Booked => write!(f, "BOOKED"),
            SlotStatus::Expired => write!(f, "EXPIRED"),
        }
    }
}

impl std::str::FromStr for SlotStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AVAILABLE" => Ok(SlotStatus::Available),
            "BOOKED" => Ok(SlotStatus::Booked),
            "EXPIRED" => Ok(SlotStatus::Expired),
            _ => Err(anyhow::anyhow!("Invalid slot status: {}", s)),
        }
    }
}
