//! Random selection helpers for the review set and the current card.
use super::CardHandle;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draws up to `sample_size` distinct handles from `incomplete` in random order.
///
/// Uses a partial Fisher-Yates shuffle over zero-based positions, so exactly
/// `min(sample_size, incomplete.len())` handles come back.
pub fn sample<R: Rng + ?Sized>(
    incomplete: &[CardHandle],
    sample_size: usize,
    rng: &mut R,
) -> Vec<CardHandle> {
    if sample_size == 0 || incomplete.is_empty() {
        return Vec::new();
    }
    let mut pool = incomplete.to_vec();
    let amount = sample_size.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, amount);
    picked.to_vec()
}

/// Uniformly random position in a set of `len` entries, `None` when it is empty.
pub fn pick_current<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.random_range(0..len))
    }
}
