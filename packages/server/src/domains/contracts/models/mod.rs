pub mod contract;

pub use contract::{Contract, ContractStatus, PartyProfile};
