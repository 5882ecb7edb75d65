pub mod commands;
pub mod effects;
pub mod events;
pub mod machines;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use commands::MatchingCommand;
pub use events::StaffingEvent;
pub use machines::MatchingMachine;
