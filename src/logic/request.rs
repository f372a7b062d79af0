//! Building a stored schedule from a request of participant names.

use crate::logic::round_robin::generate_schedule;
use crate::models::{Participant, Schedule, ScheduleError};
use chrono::Utc;
use serde::Deserialize;

/// What a client sends to create a schedule.
#[derive(Clone, Debug, Deserialize)]
pub struct ScheduleRequest {
    /// Display name; defaults to "Round robin <date>".
    #[serde(default)]
    pub name: Option<String>,
    /// Participant display names, in seating order.
    pub participants: Vec<String>,
    #[serde(default = "default_court_count")]
    pub court_count: u32,
}

fn default_court_count() -> u32 {
    1
}

impl ScheduleRequest {
    pub fn new(participants: Vec<String>, court_count: u32) -> Self {
        Self {
            name: None,
            participants,
            court_count,
        }
    }

    /// Trimmed names as participants with fresh ids. Blank names are rejected.
    pub fn participants(&self, max_participants: usize) -> Result<Vec<Participant>, ScheduleError> {
        if self.participants.len() > max_participants {
            return Err(ScheduleError::TooManyParticipants {
                max: max_participants,
                given: self.participants.len(),
            });
        }
        self.participants
            .iter()
            .map(|name| {
                let name = name.trim();
                if name.is_empty() {
                    Err(ScheduleError::BlankParticipantName)
                } else {
                    Ok(Participant::new(name))
                }
            })
            .collect()
    }

    /// Validate, generate the rounds and wrap them into a new [`Schedule`].
    pub fn build(self, max_participants: usize) -> Result<Schedule, ScheduleError> {
        let participants = self.participants(max_participants)?;
        let rounds = generate_schedule(&participants, self.court_count)?;
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Round robin {}", Utc::now().format("%Y-%m-%d")));
        Ok(Schedule::new(name, self.court_count, participants, rounds))
    }
}
