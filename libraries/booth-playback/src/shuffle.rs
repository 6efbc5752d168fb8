//! Queue randomization
//!
//! Unbiased Fisher-Yates permutation: every ordering is equally likely.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle `items` in place
///
/// Slices shorter than two elements are left untouched. Returns whether a
/// permutation was performed.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) -> bool {
    if items.len() < 2 {
        return false;
    }
    items.shuffle(rng);
    true
}
