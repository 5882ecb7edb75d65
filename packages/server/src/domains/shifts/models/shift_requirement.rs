use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ProfileId, RequirementId};

/// Shift requirement - a hospital's demand for doctors on specific dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequirement {
    pub id: RequirementId,
    pub hospital_id: ProfileId,
    pub hospital_name: String,

    // When
    /// Calendar dates this requirement covers (midnight timestamps).
    pub dates: Vec<DateTime<Utc>>,
    /// Start of the shift window, "HH:MM".
    pub start_time: String,
    /// End of the shift window, "HH:MM". May be <= start_time when overnight.
    pub end_time: String,
    #[serde(default)]
    pub overnight: bool,

    // What
    pub service_type: String,
    #[serde(default)]
    pub required_specialties: Vec<String>,
    /// Hourly rate ceiling the hospital will pay.
    pub offered_rate: f64,
    #[serde(default = "default_vacancies")]
    pub vacancies: u32,
    #[serde(default)]
    pub notes: String,

    // Where
    pub city: String,
    pub state: String,

    pub status: RequirementStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_vacancies() -> u32 {
    1
}

impl ShiftRequirement {
    /// Validate identity fields at the boundary where a document enters the
    /// core. Presentation-level fields (notes, names) may be defaulted by
    /// serde; a document without ids or dates cannot be matched at all and
    /// is rejected instead.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            bail!("shift requirement has empty id");
        }
        if self.hospital_id.is_empty() {
            bail!("shift requirement {} has empty hospital_id", self.id);
        }
        if self.dates.is_empty() {
            bail!("shift requirement {} has no dates", self.id);
        }
        Ok(())
    }
}

/// Status enum for requirement lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementStatus {
    /// Participates in matching.
    Open,
    /// All vacancies taken.
    Filled,
    Closed,
}

impl std::fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequirementStatus::Open => write!(f, "OPEN"),
            RequirementStatus::Filled => write!(f, "FILLED"),
            RequirementStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

impl std::str::FromStr for RequirementStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "OPEN" => Ok(RequirementStatus::Open),
            "FILLED" => Ok(RequirementStatus::Filled),
            "CLOSED" => Ok(RequirementStatus::Closed),
            _ => Err(anyhow::anyhow!("Invalid requirement status: {}", s)),
        }
    }
}
