//! Builds the four clickable answers: the missing card plus three
//! distractors, all of different ranks, in random order.

use std::collections::HashSet;

use tracing::{trace, warn};

use crate::challenge_engine::{
    catalog,
    error::{ChallengeError, ChallengeResult},
    models::{Card, Rank, OPTION_COUNT},
    random::{pick_uniform, shuffle_in_place, RandomSource},
};

/// Rejection-sampling cap. With 8 ranks and 4 needed this is never reached
/// unless the catalog is broken.
pub const MAX_DISTRACTOR_DRAWS: usize = 1_000;

/// Four options over the full catalog, containing `correct`, ranks pairwise distinct.
pub fn generate_options<S: RandomSource + ?Sized>(
    correct: Card,
    src: &mut S,
) -> ChallengeResult<[Card; OPTION_COUNT]> {
    generate_options_from(&catalog::all_cards(), correct, src)
}

/// Same as [`generate_options`] but drawing distractors from `pool`.
pub fn generate_options_from<S: RandomSource + ?Sized>(
    pool: &[Card],
    correct: Card,
    src: &mut S,
) -> ChallengeResult<[Card; OPTION_COUNT]> {
    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct);
    let mut used_ranks: HashSet<Rank> = HashSet::from([correct.rank]);

    let mut draws = 0;
    while options.len() < OPTION_COUNT {
        if draws == MAX_DISTRACTOR_DRAWS {
            warn!(draws, found = options.len(), "distractor sampling gave up");
            return Err(ChallengeError::InternalInvariantViolation(format!(
                "only {} distinct ranks after {draws} draws",
                used_ranks.len()
            )));
        }
        draws += 1;

        let candidate = *pick_uniform(pool, src)?;
        if used_ranks.insert(candidate.rank) {
            options.push(candidate);
        } else {
            trace!(%candidate, "rank already offered, redrawing");
        }
    }

    shuffle_in_place(&mut options, src)?;
    options.try_into().map_err(|v: Vec<Card>| {
        ChallengeError::InternalInvariantViolation(format!("expected {OPTION_COUNT} options, got {}", v.len()))
    })
}
