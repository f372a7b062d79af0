//! Data structures for squash schedules: participants, matches, rounds.

mod participant;
mod schedule;

pub use participant::{Participant, ParticipantId};
pub use schedule::{
    GameMatch, MatchRecord, Round, Schedule, ScheduleError, ScheduleId, ScheduleSummary,
};
