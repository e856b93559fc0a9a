//! Baseline tour constructors.
//!
//! Two strategies seed the population and serve as comparators: a greedy
//! nearest-neighbor walk and a uniform random shuffle. Both guarantee a
//! permutation of the input cities.

use crate::city::{distance, City};
use crate::error::{TspError, TspResult};
use crate::tour::Tour;
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds a tour greedily: starting from the city at `start_index`, repeatedly
/// visits the nearest unvisited city.
///
/// Ties are broken by the first-encountered city in input order. This
/// tie-break is deterministic and must be preserved for reproducibility.
///
/// # Errors
///
/// - [`TspError::InvalidInput`] if `cities` is empty.
/// - [`TspError::Precondition`] if `start_index` is out of bounds.
pub fn nearest_neighbor_tour(cities: &[City], start_index: usize) -> TspResult<Tour> {
    if cities.is_empty() {
        return Err(TspError::InvalidInput("city list is empty".into()));
    }
    if start_index >= cities.len() {
        return Err(TspError::Precondition(format!(
            "start index {start_index} out of bounds for {} cities",
            cities.len()
        )));
    }

    let mut unvisited = cities.to_vec();
    let mut current = unvisited.remove(start_index);
    let mut route = Vec::with_capacity(cities.len());
    route.push(current);

    while !unvisited.is_empty() {
        let mut nearest_idx = 0;
        let mut min_distance = distance(&current, &unvisited[0]);
        for (i, city) in unvisited.iter().enumerate().skip(1) {
            let d = distance(&current, city);
            if d < min_distance {
                min_distance = d;
                nearest_idx = i;
            }
        }
        current = unvisited.remove(nearest_idx);
        route.push(current);
    }

    Ok(Tour::new(route))
}

/// Builds a uniformly random permutation of the input cities.
///
/// Reproducibility is the caller's concern: pass a seeded generator to get
/// repeatable tours.
///
/// # Errors
///
/// [`TspError::InvalidInput`] if `cities` is empty.
pub fn random_tour<R: Rng>(cities: &[City], rng: &mut R) -> TspResult<Tour> {
    if cities.is_empty() {
        return Err(TspError::InvalidInput("city list is empty".into()));
    }
    let mut route = cities.to_vec();
    route.shuffle(rng);
    Ok(Tour::new(route))
}
