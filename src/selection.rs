//! Tournament selection.
//!
//! Selection determines which tours become parents for crossover. A
//! tournament draws a small sample of the population and keeps the fittest
//! member, so selection pressure scales with the tournament size.

use crate::error::{TspError, TspResult};
use crate::tour::Tour;
use rand::seq::index;
use rand::Rng;

/// Selects the shortest tour among `tournament_size` distinct members drawn
/// uniformly at random from the population, without replacement.
///
/// Ties are broken by first-encountered order within the sample.
///
/// # Errors
///
/// [`TspError::Precondition`] if `tournament_size` is zero or exceeds the
/// population size.
pub fn tournament_select<'a, R: Rng>(
    population: &'a [Tour],
    tournament_size: usize,
    rng: &mut R,
) -> TspResult<&'a Tour> {
    if tournament_size == 0 {
        return Err(TspError::Precondition(
            "tournament size must be at least 1".into(),
        ));
    }
    if tournament_size > population.len() {
        return Err(TspError::Precondition(format!(
            "tournament size {tournament_size} exceeds population size {}",
            population.len()
        )));
    }

    let sample = index::sample(rng, population.len(), tournament_size);
    let mut best: Option<(&Tour, f64)> = None;
    for idx in sample {
        let candidate = &population[idx];
        let score = candidate.length()?;
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    // tournament_size >= 1, so the sample is non-empty
    Ok(best.map(|(tour, _)| tour).unwrap_or(&population[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Collinear cities make tour length a simple function of ordering.
    fn make_population() -> Vec<Tour> {
        let a = City::new(1, 0.0, 0.0);
        let b = City::new(2, 1.0, 0.0);
        let c = City::new(3, 5.0, 0.0);
        vec![
            Tour::new(vec![a, c, b]), // length 10
            Tour::new(vec![a, b, c]), // length 10
            Tour::new(vec![a, b, City::new(3, 2.0, 0.0)]),
        ]
    }

    #[test]
    fn test_full_tournament_returns_global_best() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(42);
        let lengths: Vec<f64> = pop.iter().map(|t| t.length().unwrap()).collect();
        let global_best = lengths.iter().cloned().fold(f64::INFINITY, f64::min);

        // With the tournament spanning the whole population, the winner is
        // always the global best.
        for _ in 0..100 {
            let winner = tournament_select(&pop, pop.len(), &mut rng).unwrap();
            assert_eq!(winner.length().unwrap(), global_best);
        }
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 3];
        let n = 9000;
        for _ in 0..n {
            let winner = tournament_select(&pop, 1, &mut rng).unwrap();
            let idx = pop.iter().position(|t| std::ptr::eq(t, winner)).unwrap();
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform draws, got {counts:?}");
        }
    }

    #[test]
    fn test_winner_not_worse_than_population_median() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(7);

        // Any 2-of-3 sample contains at least one tour of length <= 10,
        // so the winner can never be the strictly worst unless sampled alone.
        for _ in 0..200 {
            let winner = tournament_select(&pop, 2, &mut rng).unwrap();
            assert!(winner.length().unwrap() <= 10.0 + 1e-12);
        }
    }

    #[test]
    fn test_single_member_population() {
        let pop = make_population()[..1].to_vec();
        let mut rng = StdRng::seed_from_u64(42);
        let winner = tournament_select(&pop, 1, &mut rng).unwrap();
        assert_eq!(winner, &pop[0]);
    }

    #[test]
    fn test_tournament_size_zero_rejected() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            tournament_select(&pop, 0, &mut rng),
            Err(TspError::Precondition(_))
        ));
    }

    #[test]
    fn test_tournament_size_exceeding_population_rejected() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(42);
        let err = tournament_select(&pop, 4, &mut rng).unwrap_err();
        assert!(matches!(err, TspError::Precondition(_)));
        assert!(err.to_string().contains("tournament size 4"));
    }
}
