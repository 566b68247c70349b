//! Builds the 4-card ascending run and blanks one position.

use tracing::trace;

use crate::challenge_engine::{
    error::{ChallengeError, ChallengeResult},
    models::{Card, Rank, Slot, Suit, SEQUENCE_LEN},
    random::RandomSource,
};

/// Highest first rank that still fits a 4-card run inside 1..=8.
pub const MAX_BASE_RANK: u8 = Rank::MAX - (SEQUENCE_LEN as u8 - 1);

/// A run with one hole, plus the card taken out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGap {
    pub slots: [Slot; SEQUENCE_LEN],
    pub missing_card: Card,
    pub missing_index: usize,
}

/// Draw order: base rank, then one suit per position (without replacement),
/// then the blank index.
pub fn generate_sequence<S: RandomSource + ?Sized>(src: &mut S) -> ChallengeResult<SequenceGap> {
    let base_offset = src.below(MAX_BASE_RANK as usize) as u8;
    let base = Rank::new(Rank::MIN + base_offset)?;

    let mut remaining_suits: Vec<Suit> = Suit::ALL.to_vec();
    let mut run = [Card::new(base, Suit::Snow); SEQUENCE_LEN];
    for (i, card) in run.iter_mut().enumerate() {
        let rank = base.step(i as u8).ok_or_else(|| {
            ChallengeError::InternalInvariantViolation(format!("run from {base} overflows at slot {i}"))
        })?;
        let suit = remaining_suits.remove(src.below(remaining_suits.len()));
        *card = Card::new(rank, suit);
    }

    let missing_index = src.below(SEQUENCE_LEN);
    let missing_card = run[missing_index];

    let mut slots: [Slot; SEQUENCE_LEN] = run.map(Some);
    slots[missing_index] = None;

    trace!(base = base.value(), missing_index, "sequence drawn");
    Ok(SequenceGap { slots, missing_card, missing_index })
}
