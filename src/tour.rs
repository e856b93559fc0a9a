//! Closed tours and their length.
//!
//! A [`Tour`] is an ordered sequence of cities forming a closed circuit: the
//! last city connects back to the first. Tours are value types — each
//! population slot owns its tour, and the variation operators return fresh
//! owned tours rather than aliasing their parents.

use crate::city::{distance, City};
use crate::error::{TspError, TspResult};

/// One candidate solution: an ordered, implicitly closed sequence of cities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<City>,
}

impl Tour {
    /// Wraps an ordered city sequence as a tour.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The cities in visiting order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city ids in visiting order, for the reporting layer.
    pub fn city_ids(&self) -> Vec<u32> {
        self.cities.iter().map(|c| c.id).collect()
    }

    /// Total length of the closed circuit: the sum of distances between
    /// consecutive cities plus the closing edge from last back to first.
    ///
    /// A single-city tour has length 0.0.
    ///
    /// # Errors
    ///
    /// [`TspError::DegenerateTour`] if the tour is empty.
    pub fn length(&self) -> TspResult<f64> {
        if self.cities.is_empty() {
            return Err(TspError::DegenerateTour(
                "cannot compute length of an empty tour".into(),
            ));
        }
        let n = self.cities.len();
        let mut total = 0.0;
        for i in 0..n {
            total += distance(&self.cities[i], &self.cities[(i + 1) % n]);
        }
        Ok(total)
    }

    /// Whether this tour visits exactly the cities in `cities`, each once.
    ///
    /// Compares by id; useful for asserting the permutation invariant.
    pub fn is_permutation_of(&self, cities: &[City]) -> bool {
        if self.cities.len() != cities.len() {
            return false;
        }
        let mut ours: Vec<u32> = self.cities.iter().map(|c| c.id).collect();
        let mut theirs: Vec<u32> = cities.iter().map(|c| c.id).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    /// Consumes the tour, returning the underlying city sequence.
    pub fn into_cities(self) -> Vec<City> {
        self.cities
    }
}
