//! Schedule, Round and GameMatch, plus the flat record rows handed to persistence.

use crate::models::participant::{Participant, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a generated schedule.
pub type ScheduleId = Uuid;

/// Errors raised before any round is generated.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ScheduleError {
    /// Court count must be at least 1.
    #[error("Court count must be at least 1 (got {0})")]
    InvalidCourtCount(u32),
    /// The same participant id was given twice.
    #[error("Participant {0} appears more than once")]
    DuplicateParticipant(ParticipantId),
    /// A participant name was empty after trimming.
    #[error("Participant names must not be blank")]
    BlankParticipantName,
    /// More participants than the server accepts in one schedule.
    #[error("At most {max} participants allowed (got {given})")]
    TooManyParticipants { max: usize, given: usize },
}

/// A single match: two distinct participants on a labelled court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub player1: Participant,
    pub player2: Participant,
    /// 1-based court label, cycles through the available courts.
    pub court: u32,
}

impl GameMatch {
    pub fn new(player1: Participant, player2: Participant, court: u32) -> Self {
        Self {
            player1,
            player2,
            court,
        }
    }

    /// Whether the given participant plays in this match.
    pub fn involves(&self, id: ParticipantId) -> bool {
        self.player1.id == id || self.player2.id == id
    }

    /// The other side of the match, if `id` plays in it.
    pub fn opponent_of(&self, id: ParticipantId) -> Option<&Participant> {
        if self.player1.id == id {
            Some(&self.player2)
        } else if self.player2.id == id {
            Some(&self.player1)
        } else {
            None
        }
    }
}

/// One round of the schedule. Nobody plays twice in the same round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round index.
    pub round_number: u32,
    pub matches: Vec<GameMatch>,
    /// Participant drawn against the bye this round (odd counts only).
    pub sitting_out: Option<Participant>,
}

impl Round {
    /// Whether the given participant plays in this round.
    pub fn involves(&self, id: ParticipantId) -> bool {
        self.matches.iter().any(|m| m.involves(id))
    }
}

/// A generated round-robin schedule as stored and served by the app.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub name: String,
    pub court_count: u32,
    /// Participants in the order they were given to the generator.
    pub participants: Vec<Participant>,
    pub rounds: Vec<Round>,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    /// Wrap generated rounds with a fresh id and creation time.
    pub fn new(
        name: impl Into<String>,
        court_count: u32,
        participants: Vec<Participant>,
        rounds: Vec<Round>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            court_count,
            participants,
            rounds,
            created_at: Utc::now(),
        }
    }

    /// Number of matches across all rounds.
    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// Matches the participant plays, in round order, paired with the round number.
    pub fn matches_for(&self, id: ParticipantId) -> Vec<(u32, &GameMatch)> {
        self.rounds
            .iter()
            .flat_map(|r| {
                r.matches
                    .iter()
                    .filter(move |m| m.involves(id))
                    .map(move |m| (r.round_number, m))
            })
            .collect()
    }

    /// One flat row per match, tagged with this schedule's id and the round number.
    pub fn records(&self) -> Vec<MatchRecord> {
        self.rounds
            .iter()
            .flat_map(|r| {
                r.matches.iter().map(move |m| MatchRecord {
                    schedule_id: self.id,
                    round_number: r.round_number,
                    court: m.court,
                    player1_id: m.player1.id,
                    player1_name: m.player1.name.clone(),
                    player2_id: m.player2.id,
                    player2_name: m.player2.name.clone(),
                })
            })
            .collect()
    }

    /// Short listing view (for the schedule index).
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            id: self.id,
            name: self.name.clone(),
            participant_count: self.participants.len(),
            round_count: self.rounds.len(),
            court_count: self.court_count,
            created_at: self.created_at,
        }
    }
}

/// A match as a persistence row.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub schedule_id: ScheduleId,
    pub round_number: u32,
    pub court: u32,
    pub player1_id: ParticipantId,
    pub player1_name: String,
    pub player2_id: ParticipantId,
    pub player2_name: String,
}

/// Listing entry for a stored schedule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub id: ScheduleId,
    pub name: String,
    pub participant_count: usize,
    pub round_count: usize,
    pub court_count: u32,
    pub created_at: DateTime<Utc>,
}
