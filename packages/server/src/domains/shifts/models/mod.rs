pub mod shift_requirement;
pub mod time_slot;

pub use shift_requirement::{RequirementStatus, ShiftRequirement};
pub use time_slot::{DoctorTimeSlot, SlotStatus};
