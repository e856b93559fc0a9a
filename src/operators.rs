//! Variation operators: crossover and mutation.
//!
//! Both operators treat tours as value types and return fresh owned tours,
//! so a parent borrowed for several children is never aliased or corrupted.
//!
//! Membership in the crossover prefix is decided by city id. Ids are unique
//! within an instance (enforced at the input boundary), so two cities with
//! coincident coordinates cannot break the permutation invariant.

use crate::error::{TspError, TspResult};
use crate::tour::Tour;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;

/// Prefix-preserving order crossover.
///
/// The child is the first `floor(n/2)` cities of `parent_a`, in order,
/// followed by every city of `parent_b` not already in that prefix, in
/// `parent_b`'s order. When both parents are permutations of the same city
/// set, the child is too.
///
/// # Errors
///
/// [`TspError::Precondition`] if the parents are empty or have different
/// lengths.
pub fn crossover(parent_a: &Tour, parent_b: &Tour) -> TspResult<Tour> {
    let n = parent_a.len();
    if n == 0 {
        return Err(TspError::Precondition(
            "crossover requires non-empty parents".into(),
        ));
    }
    if n != parent_b.len() {
        return Err(TspError::Precondition(format!(
            "parent lengths differ: {n} vs {}",
            parent_b.len()
        )));
    }

    let split = n / 2;
    let prefix = &parent_a.cities()[..split];
    let prefix_ids: HashSet<u32> = prefix.iter().map(|c| c.id).collect();

    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(prefix);
    child.extend(
        parent_b
            .cities()
            .iter()
            .filter(|c| !prefix_ids.contains(&c.id))
            .copied(),
    );

    Ok(Tour::new(child))
}

/// Single-swap mutation under a probability threshold.
///
/// With probability `probability`, swaps two distinct positions chosen
/// uniformly at random; otherwise returns the tour unchanged. Tours with
/// fewer than two cities are always returned unchanged, since no two
/// distinct positions exist.
pub fn swap_mutation<R: Rng>(tour: &Tour, probability: f64, rng: &mut R) -> Tour {
    if rng.random::<f64>() >= probability || tour.len() < 2 {
        return tour.clone();
    }
    let picks = index::sample(rng, tour.len(), 2);
    let mut cities = tour.cities().to_vec();
    cities.swap(picks.index(0), picks.index(1));
    Tour::new(cities)
}
