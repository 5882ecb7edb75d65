//! Test fixtures for creating staffing documents.

use chrono::{DateTime, TimeZone, Utc};

use server_core::common::{ContractId, MatchId, ProfileId, RequirementId, TimeSlotId};
use server_core::domains::contracts::models::{Contract, ContractStatus, PartyProfile};
use server_core::domains::matching::events::StaffingEvent;
use server_core::domains::shifts::models::{
    DoctorTimeSlot, RequirementStatus, ShiftRequirement, SlotStatus,
};

/// Midnight UTC on a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// An open daytime requirement in Campinas/SP (07:00-19:00, R$120/h).
pub fn open_requirement(id: &str, dates: Vec<DateTime<Utc>>) -> ShiftRequirement {
    let now = Utc::now();
    ShiftRequirement {
        id: RequirementId::new(id),
        hospital_id: ProfileId::new("hosp1"),
        hospital_name: "Hospital Central".to_string(),
        dates,
        start_time: "07:00".to_string(),
        end_time: "19:00".to_string(),
        overnight: false,
        service_type: "Plantao".to_string(),
        required_specialties: vec![],
        offered_rate: 120.0,
        vacancies: 1,
        notes: String::new(),
        city: "Campinas".to_string(),
        state: "SP".to_string(),
        status: RequirementStatus::Open,
        created_at: now,
        updated_at: now,
    }
}

/// An available daytime slot compatible with `open_requirement`
/// (08:00-18:00, R$100/h, same city/state/service type).
pub fn available_slot(id: &str, slot_date: DateTime<Utc>) -> DoctorTimeSlot {
    let now = Utc::now();
    DoctorTimeSlot {
        id: TimeSlotId::new(id),
        doctor_id: ProfileId::new("doc1"),
        doctor_name: "Dra. Souza".to_string(),
        date: slot_date,
        start_time: "08:00".to_string(),
        end_time: "18:00".to_string(),
        overnight: false,
        service_type: "Plantao".to_string(),
        specialties: vec![],
        desired_rate: 100.0,
        notes: String::new(),
        city: "Campinas".to_string(),
        state: "SP".to_string(),
        status: SlotStatus::Available,
        created_at: now,
        updated_at: now,
    }
}

/// A requirement write event (create when `before` is None).
pub fn requirement_written(
    before: Option<ShiftRequirement>,
    after: ShiftRequirement,
) -> StaffingEvent {
    StaffingEvent::RequirementWritten {
        id: after.id.clone(),
        before,
        after: Some(after),
    }
}

/// An active contract between the fixture hospital and doctor.
pub fn active_contract(id: &str) -> Contract {
    let now = Utc::now();
    Contract {
        id: ContractId::new(id),
        potential_match_id: MatchId::new("req1_slot1_1700000000"),
        requirement_id: RequirementId::new("req1"),
        time_slot_id: TimeSlotId::new("slot1"),
        hospital_id: ProfileId::new("hosp1"),
        hospital_name: "Hospital Central".to_string(),
        doctor_id: ProfileId::new("doc1"),
        doctor_name: "Dra. Souza".to_string(),
        date: date(2024, 3, 18),
        start_time: "07:00".to_string(),
        end_time: "19:00".to_string(),
        overnight: false,
        service_type: "Plantao".to_string(),
        hourly_rate: 110.0,
        city: "Campinas".to_string(),
        state: "SP".to_string(),
        status: ContractStatus::Active,
        pdf_url: None,
        created_at: now,
        updated_at: now,
    }
}

/// Profile documents for both contract parties.
pub fn contract_profiles() -> (PartyProfile, PartyProfile) {
    (
        PartyProfile {
            id: ProfileId::new("hosp1"),
            display_name: "Hospital Central de Campinas".to_string(),
            registry_number: Some("12.345.678/0001-90".to_string()),
            email: Some("contratos@hospitalcentral.example".to_string()),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
        },
        PartyProfile {
            id: ProfileId::new("doc1"),
            display_name: "Dra. Ana Souza".to_string(),
            registry_number: Some("CRM/SP 123456".to_string()),
            email: Some("ana.souza@example".to_string()),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
        },
    )
}
