pub mod time;

pub use time::{overlaps, to_minutes};
