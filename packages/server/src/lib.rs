// Plantao Saude - Staffing API Core
//
// This crate provides the backend for matching hospital shift requirements
// with doctor availability time slots. The matching engine is reactive:
// document change events arrive over NATS, a machine decides whether work
// is needed, and effects materialize idempotent PotentialMatch records.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
