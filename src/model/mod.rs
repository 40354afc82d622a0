// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod item;
pub mod parser;

// Re-export the record types and parse entry points at the model root
pub use item::{DayOfWeek, EventRecord, Meridiem};
pub use parser::{parse_court_calendar, parse_event_block};
