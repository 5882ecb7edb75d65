pub mod effects;
pub mod models;

pub use models::{Contract, ContractStatus, PartyProfile};
