//! Cross-module tests for the `sequence_picker` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical challenge stream; different seeds differ |
//! | Structural | 1000+ challenges: one blank, contiguous run, all suits, 4 rank-distinct options |
//! | Evaluation | Correct iff rank matches; idempotent; IllegalState before start |
//! | Serde | Challenges round-trip through JSON; out-of-range ranks rejected |

use std::collections::HashSet;

use crate::challenge_engine::{
    catalog, generate_challenge, generate_challenge_with, Card, Challenge, ChallengeError,
    ChallengeSession, Feedback, Rank, SessionConfig, Suit, OPTION_COUNT, SEQUENCE_LEN,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Panics with context if `c` breaks any structural rule.
fn assert_well_formed(c: &Challenge) {
    let id = &c.challenge_id;

    assert_eq!(c.sequence.iter().filter(|s| s.is_none()).count(), 1, "{id}: blanks");
    assert_eq!(c.sequence[c.missing_index], None, "{id}: blank not at missing_index");

    let full: Vec<Card> = c.sequence.iter().map(|s| s.unwrap_or(c.missing_card)).collect();
    let ranks: Vec<u8> = full.iter().map(|card| card.rank.value()).collect();
    assert!(ranks[0] >= 1 && ranks[SEQUENCE_LEN - 1] <= 8, "{id}: out of range {ranks:?}");
    assert!(ranks.windows(2).all(|w| w[1] == w[0] + 1), "{id}: not a run {ranks:?}");

    let suits: HashSet<Suit> = full.iter().map(|card| card.suit).collect();
    assert_eq!(suits.len(), 4, "{id}: suits reused");

    let known: HashSet<Card> = catalog::all_cards().into_iter().collect();
    assert!(full.iter().all(|card| known.contains(card)), "{id}: card outside catalog");
    assert!(c.options.iter().all(|card| known.contains(card)), "{id}: option outside catalog");

    let option_ranks: HashSet<u8> = c.options.iter().map(|card| card.rank.value()).collect();
    assert_eq!(option_ranks.len(), OPTION_COUNT, "{id}: option ranks repeat");
    let matching = c.options.iter().filter(|card| card.same_rank(&c.missing_card)).count();
    assert_eq!(matching, 1, "{id}: expected exactly one correct option");
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_stream() {
    let mut a = ChallengeSession::new(SessionConfig::seeded(12345));
    let mut b = ChallengeSession::new(SessionConfig::seeded(12345));
    for _ in 0..20 {
        let x = a.new_challenge().unwrap().clone();
        let y = b.new_challenge().unwrap().clone();
        assert_eq!(x, y);
    }
}

#[test]
fn different_seeds_produce_varied_challenges() {
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_challenge(&SessionConfig::seeded(seed)).unwrap();
        let b = generate_challenge(&SessionConfig::seeded(seed + 500)).unwrap();
        if a.sequence == b.sequence && a.options == b.options {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical challenges ({same}/{pairs})");
}

#[test]
fn entropy_session_produces_a_valid_challenge() {
    let mut session: ChallengeSession = ChallengeSession::default();
    let c = session.new_challenge().unwrap().clone();
    assert_well_formed(&c);
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn thousands_of_challenges_hold_every_invariant() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..1000 {
            let c = generate_challenge_with(&mut rng).unwrap();
            assert_well_formed(&c);
        }
    }
}

#[test]
fn session_challenges_hold_every_invariant() {
    let mut session = ChallengeSession::new(SessionConfig::seeded(2718));
    for _ in 0..1000 {
        let c = session.new_challenge().unwrap();
        assert_well_formed(c);
    }
}

// ── evaluation ───────────────────────────────────────────────────────────────

#[test]
fn evaluate_correct_iff_rank_matches() {
    let mut session = ChallengeSession::new(SessionConfig::seeded(31415));
    for _ in 0..200 {
        let c = session.new_challenge().unwrap().clone();
        for card in catalog::all_cards() {
            let expected = if card.rank == c.missing_card.rank {
                Feedback::Correct
            } else {
                Feedback::Incorrect
            };
            assert_eq!(session.evaluate(&card).unwrap(), expected, "{} vs {card}", c.challenge_id);
        }
    }
}

#[test]
fn exactly_one_option_passes() {
    let mut session = ChallengeSession::new(SessionConfig::seeded(77));
    for _ in 0..200 {
        let c = session.new_challenge().unwrap().clone();
        let passes = c
            .options
            .iter()
            .filter(|o| session.evaluate(o).unwrap() == Feedback::Correct)
            .count();
        assert_eq!(passes, 1);
    }
}

#[test]
fn evaluate_before_first_challenge_fails() {
    let session = ChallengeSession::new(SessionConfig::seeded(1));
    let any = catalog::card_at(0).unwrap();
    assert!(matches!(session.evaluate(&any), Err(ChallengeError::IllegalState(_))));
}

// ── serde ────────────────────────────────────────────────────────────────────

#[test]
fn challenge_survives_json() {
    let c = generate_challenge(&SessionConfig::seeded(5)).unwrap();
    let text = serde_json::to_string(&c).unwrap();
    let back: Challenge = serde_json::from_str(&text).unwrap();
    assert_eq!(c, back);
}

#[test]
fn rank_rejects_out_of_range_values() {
    assert!(Rank::new(0).is_err());
    assert!(Rank::new(9).is_err());
    assert!(serde_json::from_str::<Rank>("9").is_err());
    assert_eq!(serde_json::from_str::<Rank>("8").unwrap().value(), 8);
}
