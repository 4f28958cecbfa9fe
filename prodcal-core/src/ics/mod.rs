//! Deterministic .ics serialization of holiday intervals.

mod generate;

pub use generate::{CALENDAR_NAME, generate_ics};
