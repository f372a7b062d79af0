//! Scheduling logic: round-robin generation, request building, export.

mod export;
mod request;
mod round_robin;

pub use export::{match_records_csv, write_match_records};
pub use request::ScheduleRequest;
pub use round_robin::{generate_schedule, round_count, validate};
