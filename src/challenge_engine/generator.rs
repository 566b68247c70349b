use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::challenge_engine::{
    config::SessionConfig,
    error::ChallengeResult,
    models::Challenge,
    options::generate_options,
    random::RandomSource,
    sequence::generate_sequence,
};

/// Build the RNG a config asks for: seeded if `rng_seed` is set, OS entropy otherwise.
pub fn rng_for(config: &SessionConfig) -> StdRng {
    match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Id drawn after the puzzle itself so scripted draws line up with the generators.
fn make_challenge_id<S: RandomSource + ?Sized>(src: &mut S) -> String {
    format!("SQ-{:08X}", src.next_u32())
}

/// Sequence first, then options seeded by the missing card.
pub fn generate_challenge_with<S: RandomSource + ?Sized>(src: &mut S) -> ChallengeResult<Challenge> {
    let gap = generate_sequence(src)?;
    let options = generate_options(gap.missing_card, src)?;
    let challenge = Challenge {
        challenge_id: make_challenge_id(src),
        sequence: gap.slots,
        options,
        missing_card: gap.missing_card,
        missing_index: gap.missing_index,
    };

    debug!(
        challenge_id = %challenge.challenge_id,
        base = challenge.base_rank(),
        missing_index = challenge.missing_index,
        "challenge generated"
    );
    Ok(challenge)
}

/// One-shot entry point for callers that do not need a session.
pub fn generate_challenge(config: &SessionConfig) -> ChallengeResult<Challenge> {
    let mut rng = rng_for(config);
    generate_challenge_with(&mut rng)
}
