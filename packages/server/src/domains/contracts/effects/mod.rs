pub mod pdf;

pub use pdf::{generate_contract_pdf, CallableError};
