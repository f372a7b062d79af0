//! Integration tests for round-robin generation: pairings, byes, courts, validation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use squash_schedule_web::{
    generate_schedule, round_count, Participant, ParticipantId, Round, ScheduleError,
};
use std::collections::{HashMap, HashSet};

fn players(names: &[&str]) -> Vec<Participant> {
    names.iter().map(|n| Participant::new(*n)).collect()
}

fn numbered_players(n: usize) -> Vec<Participant> {
    (0..n).map(|i| Participant::new(format!("P{i}"))).collect()
}

/// (player1, player2, court) by name for each match of a round.
fn pairings(round: &Round) -> Vec<(&str, &str, u32)> {
    round
        .matches
        .iter()
        .map(|m| (m.player1.name.as_str(), m.player2.name.as_str(), m.court))
        .collect()
}

fn unordered(a: ParticipantId, b: ParticipantId) -> (ParticipantId, ParticipantId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Checks every structural property of a generated schedule.
fn assert_round_robin(participants: &[Participant], courts: u32, rounds: &[Round]) {
    let n = participants.len();
    let even = n + n % 2;
    assert_eq!(rounds.len(), even - 1, "round count for n={n}");

    let mut seen_pairs: HashMap<(ParticipantId, ParticipantId), usize> = HashMap::new();
    let mut sat_out: HashMap<ParticipantId, usize> = HashMap::new();

    for (idx, round) in rounds.iter().enumerate() {
        assert_eq!(round.round_number as usize, idx + 1);
        assert!(round.matches.len() <= even / 2);

        let mut in_round = HashSet::new();
        for m in &round.matches {
            assert_ne!(m.player1.id, m.player2.id, "self-pairing");
            assert!(in_round.insert(m.player1.id), "player twice in a round");
            assert!(in_round.insert(m.player2.id), "player twice in a round");
            assert!((1..=courts).contains(&m.court), "court {} out of range", m.court);
            *seen_pairs.entry(unordered(m.player1.id, m.player2.id)).or_default() += 1;
        }

        match &round.sitting_out {
            Some(p) => {
                assert!(n % 2 == 1, "bye with even count");
                assert!(!in_round.contains(&p.id), "sitting-out player also plays");
                assert_eq!(in_round.len(), n - 1);
                *sat_out.entry(p.id).or_default() += 1;
            }
            None => {
                assert!(n % 2 == 0, "odd count without a bye");
                assert_eq!(in_round.len(), n);
            }
        }
    }

    let ids: HashSet<_> = participants.iter().map(|p| p.id).collect();
    for (a, b) in seen_pairs.keys() {
        assert!(ids.contains(a) && ids.contains(b), "unknown participant in a match");
    }
    assert_eq!(seen_pairs.len(), n * (n - 1) / 2, "every pair must meet");
    assert!(seen_pairs.values().all(|&c| c == 1), "a pair met more than once");

    if n % 2 == 1 {
        assert_eq!(sat_out.len(), n);
        assert!(sat_out.values().all(|&c| c == 1), "everyone sits out exactly once");
    }
}

#[test]
fn two_players_play_once_on_court_one() {
    let p = players(&["A", "B"]);
    let rounds = generate_schedule(&p, 1).unwrap();
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].round_number, 1);
    assert_eq!(pairings(&rounds[0]), vec![("A", "B", 1)]);
    assert_eq!(rounds[0].sitting_out, None);
}

#[test]
fn four_players_two_courts_follow_the_circle() {
    let p = players(&["A", "B", "C", "D"]);
    let rounds = generate_schedule(&p, 2).unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(pairings(&rounds[0]), vec![("A", "D", 1), ("B", "C", 2)]);
    assert_eq!(pairings(&rounds[1]), vec![("A", "C", 1), ("D", "B", 2)]);
    assert_eq!(pairings(&rounds[2]), vec![("A", "B", 1), ("C", "D", 2)]);
    assert_round_robin(&p, 2, &rounds);
}

#[test]
fn five_players_one_court_each_sit_out_once() {
    let p = players(&["A", "B", "C", "D", "E"]);
    let rounds = generate_schedule(&p, 1).unwrap();
    assert_eq!(rounds.len(), 5);
    for round in &rounds {
        assert_eq!(round.matches.len(), 2);
        assert!(round.matches.iter().all(|m| m.court == 1));
    }
    let total: usize = rounds.iter().map(|r| r.matches.len()).sum();
    assert_eq!(total, 10);
    // The anchor is drawn against the bye first.
    assert_eq!(rounds[0].sitting_out.as_ref().map(|p| p.name.as_str()), Some("A"));
    assert_round_robin(&p, 1, &rounds);
}

#[test]
fn three_players_four_courts_keep_pairing_index_courts() {
    let p = players(&["A", "B", "C"]);
    let rounds = generate_schedule(&p, 4).unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(pairings(&rounds[0]), vec![("B", "C", 2)]);
    assert_eq!(pairings(&rounds[1]), vec![("A", "C", 1)]);
    assert_eq!(pairings(&rounds[2]), vec![("A", "B", 1)]);
    let byes: Vec<_> = rounds
        .iter()
        .map(|r| r.sitting_out.as_ref().map(|p| p.name.clone()))
        .collect();
    assert_eq!(
        byes,
        vec![Some("A".to_string()), Some("B".to_string()), Some("C".to_string())]
    );
    assert_round_robin(&p, 4, &rounds);
}

#[test]
fn fewer_than_two_players_give_no_rounds() {
    assert!(generate_schedule(&[], 1).unwrap().is_empty());
    assert!(generate_schedule(&players(&["Solo"]), 3).unwrap().is_empty());
}

#[test]
fn zero_courts_is_rejected_before_generation() {
    assert_eq!(
        generate_schedule(&players(&["A", "B"]), 0),
        Err(ScheduleError::InvalidCourtCount(0))
    );
    assert_eq!(generate_schedule(&[], 0), Err(ScheduleError::InvalidCourtCount(0)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let a = Participant::new("A");
    let again = Participant::with_id(a.id, "A again");
    let p = vec![a.clone(), Participant::new("B"), again];
    assert_eq!(
        generate_schedule(&p, 2),
        Err(ScheduleError::DuplicateParticipant(a.id))
    );
}

#[test]
fn all_sizes_and_court_counts_are_complete() {
    for n in 2..=20 {
        let p = numbered_players(n);
        for courts in 1..=n as u32 {
            let rounds = generate_schedule(&p, courts).unwrap();
            assert_round_robin(&p, courts, &rounds);
        }
    }
}

#[test]
fn courts_cycle_in_pairing_order_for_even_counts() {
    for n in (2..=16).step_by(2) {
        let p = numbered_players(n);
        for courts in 1..=4 {
            for round in generate_schedule(&p, courts).unwrap() {
                for (k, m) in round.matches.iter().enumerate() {
                    assert_eq!(m.court, (k as u32 % courts) + 1);
                }
            }
        }
    }
}

#[test]
fn courts_follow_pairing_index_when_the_bye_pair_is_dropped() {
    for n in (3..=15).step_by(2) {
        let even = n + 1;
        let p = numbered_players(n);
        for courts in 2..=4 {
            for round in generate_schedule(&p, courts).unwrap() {
                // The bye starts in the last ring slot, then sits at slot r - 1 in round r.
                let slot = if round.round_number == 1 {
                    even - 1
                } else {
                    round.round_number as usize - 1
                };
                let bye_pair = slot.min(even - 1 - slot);
                assert_eq!(round.matches.len(), even / 2 - 1);
                for (k, m) in round.matches.iter().enumerate() {
                    let pair_index = if k < bye_pair { k } else { k + 1 };
                    assert_eq!(
                        m.court,
                        (pair_index as u32 % courts) + 1,
                        "n={n} courts={courts} round={}",
                        round.round_number
                    );
                }
            }
        }
    }
}

#[test]
fn same_input_gives_same_schedule() {
    let p = numbered_players(9);
    assert_eq!(generate_schedule(&p, 3).unwrap(), generate_schedule(&p, 3).unwrap());
}

#[test]
fn shuffled_orders_still_form_a_round_robin() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [6, 7, 12, 13] {
        let mut p = numbered_players(n);
        for _ in 0..5 {
            p.shuffle(&mut rng);
            let rounds = generate_schedule(&p, 3).unwrap();
            assert_round_robin(&p, 3, &rounds);
        }
    }
}

#[test]
fn round_count_matches_generation() {
    assert_eq!(round_count(0), 0);
    assert_eq!(round_count(1), 0);
    for n in 2..=12 {
        assert_eq!(round_count(n), generate_schedule(&numbered_players(n), 2).unwrap().len());
    }
}

#[test]
fn round_count_does_not_overflow() {
    assert_eq!(round_count(usize::MAX), usize::MAX);
    assert_eq!(round_count(usize::MAX - 1), usize::MAX - 2);
}
