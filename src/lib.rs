//! Squash schedule web app: library with models, round-robin logic and the schedule store.

pub mod config;
pub mod logic;
pub mod models;
pub mod routes;
pub mod store;

pub use config::{ConfigError, ServerConfig};
pub use logic::{
    generate_schedule, match_records_csv, round_count, validate, write_match_records,
    ScheduleRequest,
};
pub use models::{
    GameMatch, MatchRecord, Participant, ParticipantId, Round, Schedule, ScheduleError, ScheduleId,
    ScheduleSummary,
};
pub use store::{ScheduleStore, StoreError};
