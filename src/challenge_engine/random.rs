//! Uniform pick and Fisher-Yates shuffle over an injectable random source.
//!
//! These are the only places the engine consumes randomness, so a scripted
//! [`RandomSource`] makes every generator fully deterministic in tests.

use rand::{Rng, RngCore};

use crate::challenge_engine::error::{ChallengeError, ChallengeResult};

/// Source of uniform draws. Implemented for every [`rand::Rng`].
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn below(&mut self, len: usize) -> usize;

    /// Raw 32 bits, used for challenge ids.
    fn next_u32(&mut self) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn below(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }
}

/// One element of `items`, each with probability `1 / items.len()`.
pub fn pick_uniform<'a, T, S>(items: &'a [T], src: &mut S) -> ChallengeResult<&'a T>
where
    S: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(ChallengeError::InvalidArgument("cannot pick from an empty slice".into()));
    }
    Ok(&items[src.below(items.len())])
}

/// Uniform random permutation of `items`, in place.
pub fn shuffle_in_place<T, S>(items: &mut [T], src: &mut S) -> ChallengeResult<()>
where
    S: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(ChallengeError::InvalidArgument("cannot shuffle an empty slice".into()));
    }
    // Fisher-Yates
    for i in (1..items.len()).rev() {
        let j = src.below(i + 1);
        items.swap(i, j);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::scripted::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pick_from_single_element_returns_it() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(*pick_uniform(&[42], &mut rng).unwrap(), 42);
        }
    }

    #[test]
    fn pick_from_empty_is_invalid_argument() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        let err = pick_uniform(&empty, &mut rng).unwrap_err();
        assert!(matches!(err, ChallengeError::InvalidArgument(_)));
    }

    #[test]
    fn pick_reaches_every_element() {
        let mut rng = StdRng::seed_from_u64(9);
        let items = [0usize, 1, 2, 3, 4];
        let mut hits = [0u32; 5];
        for _ in 0..2000 {
            hits[*pick_uniform(&items, &mut rng).unwrap()] += 1;
        }
        // ~400 each; very loose bounds, this only guards against bias bugs.
        assert!(hits.iter().all(|&h| h > 250 && h < 550), "skewed picks: {hits:?}");
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(77);
        for len in 1..=10usize {
            let original: Vec<usize> = (0..len).map(|i| i % 3).collect();
            let mut shuffled = original.clone();
            shuffle_in_place(&mut shuffled, &mut rng).unwrap();
            let mut a = original.clone();
            let mut b = shuffled.clone();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "len={len}");
        }
    }

    #[test]
    fn shuffle_of_empty_is_invalid_argument() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = Vec::new();
        assert!(matches!(
            shuffle_in_place(&mut empty, &mut rng),
            Err(ChallengeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn shuffle_visits_every_permutation_of_three() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut v = [1, 2, 3];
            shuffle_in_place(&mut v, &mut rng).unwrap();
            seen.insert(v);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn scripted_shuffle_follows_fisher_yates_order() {
        // i=3 swaps with 0, i=2 with 2, i=1 with 0.
        let mut src = ScriptedSource::new(&[0, 2, 0]);
        let mut v = ['a', 'b', 'c', 'd'];
        shuffle_in_place(&mut v, &mut src).unwrap();
        assert_eq!(v, ['b', 'd', 'c', 'a']);
        assert_eq!(src.remaining(), 0);
    }
}
