//! Round-robin fixtures using the circle method.

use crate::models::{GameMatch, Participant, Round, ScheduleError};
use std::collections::HashSet;

/// Generate a full round-robin: everyone meets everyone else exactly once.
///
/// 1. Copy participants into a ring; odd counts get a bye slot (`None`) appended.
/// 2. Index 0 stays fixed; each round pairs index `i` with `len - 1 - i`.
/// 3. Pairs against the bye are dropped and that player sits out. Surviving pairs get
///    court `(i % court_count) + 1`, where `i` is the pairing index before dropping.
/// 4. Rotate: the last ring element moves to index 1, the rest shift up by one.
///
/// Fewer than 2 participants gives an empty schedule. Inputs are validated before any
/// round is built: `court_count` must be at least 1 and participant ids must be unique.
pub fn generate_schedule(
    participants: &[Participant],
    court_count: u32,
) -> Result<Vec<Round>, ScheduleError> {
    validate(participants, court_count)?;

    if participants.len() < 2 {
        log::debug!("{} participant(s): nothing to schedule", participants.len());
        return Ok(Vec::new());
    }

    let mut ring: Vec<Option<&Participant>> = participants.iter().map(Some).collect();
    if ring.len() % 2 == 1 {
        ring.push(None);
    }
    let n = ring.len();

    let mut rounds = Vec::with_capacity(n - 1);
    for round_number in 1..n as u32 {
        let mut matches = Vec::with_capacity(n / 2);
        let mut sitting_out = None;

        for i in 0..n / 2 {
            match (ring[i], ring[n - 1 - i]) {
                (Some(a), Some(b)) => {
                    let court = court_label(i, court_count);
                    matches.push(GameMatch::new(a.clone(), b.clone(), court));
                }
                (Some(p), None) | (None, Some(p)) => sitting_out = Some(p.clone()),
                // Only one bye slot exists.
                (None, None) => {}
            }
        }

        rounds.push(Round {
            round_number,
            matches,
            sitting_out,
        });
        ring[1..].rotate_right(1);
    }

    log::debug!(
        "Generated {} round(s) for {} participant(s) on {} court(s)",
        rounds.len(),
        participants.len(),
        court_count
    );
    Ok(rounds)
}

/// Check the preconditions of [`generate_schedule`] without generating anything.
pub fn validate(participants: &[Participant], court_count: u32) -> Result<(), ScheduleError> {
    if court_count == 0 {
        return Err(ScheduleError::InvalidCourtCount(court_count));
    }
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.id) {
            return Err(ScheduleError::DuplicateParticipant(p.id));
        }
    }
    Ok(())
}

/// Number of rounds a round-robin of `participant_count` players takes.
pub fn round_count(participant_count: usize) -> usize {
    match participant_count {
        0 | 1 => 0,
        n if n % 2 == 1 => n,
        n => n - 1,
    }
}

fn court_label(pair_index: usize, court_count: u32) -> u32 {
    (pair_index as u32 % court_count) + 1
}
