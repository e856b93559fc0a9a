//! Evolution loop execution.
//!
//! [`GaRunner`] drives the complete evolutionary process:
//! initialization → {selection → crossover → mutation → evaluation} per
//! epoch, for a fixed number of epochs.
//!
//! The loop is deliberately non-elitist: the incumbent best tour is never
//! copied into the next generation. The best solution ever seen is tracked
//! outside the population instead, so the reported best score can only
//! improve across a run even though any single generation may regress.

use crate::city::{validate_unique_ids, City};
use crate::config::GaConfig;
use crate::constructors::random_tour;
use crate::error::{TspError, TspResult};
use crate::operators::{crossover, swap_mutation};
use crate::selection::tournament_select;
use crate::tour::Tour;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-generation best/average/worst tour lengths.
///
/// The three sequences always have equal length, one entry per epoch run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochStats {
    /// Shortest tour length in each generation.
    pub best: Vec<f64>,
    /// Mean tour length in each generation.
    pub avg: Vec<f64>,
    /// Longest tour length in each generation.
    pub worst: Vec<f64>,
}

impl EpochStats {
    fn with_capacity(epochs: usize) -> Self {
        Self {
            best: Vec::with_capacity(epochs),
            avg: Vec::with_capacity(epochs),
            worst: Vec::with_capacity(epochs),
        }
    }
}

/// Result of a genetic-algorithm run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best tour found during the entire run.
    ///
    /// `None` when zero epochs were run.
    pub best: Option<Tour>,

    /// Length of the best tour, when one exists.
    pub best_length: Option<f64>,

    /// Number of epochs executed.
    pub epochs: usize,

    /// Per-generation statistics for the reporting layer.
    pub stats: EpochStats,
}

/// Executes the evolution loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::{City, GaConfig, GaRunner};
///
/// let cities = vec![
///     City::new(1, 0.0, 0.0),
///     City::new(2, 0.0, 1.0),
///     City::new(3, 1.0, 1.0),
///     City::new(4, 1.0, 0.0),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_epochs(20)
///     .with_tournament_size(5)
///     .with_seed(42);
/// let result = GaRunner::run(&cities, &config).unwrap();
/// assert!(result.best.is_some());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic algorithm over the given cities.
    ///
    /// All preconditions are checked eagerly at entry: the configuration
    /// must validate, the city list must be non-empty, and city ids must
    /// be unique.
    ///
    /// # Errors
    ///
    /// [`TspError::Precondition`] for an invalid configuration,
    /// [`TspError::InvalidInput`] for an empty city list or duplicate ids.
    pub fn run(cities: &[City], config: &GaConfig) -> TspResult<GaResult> {
        config.validate()?;
        if cities.is_empty() {
            return Err(TspError::InvalidInput("city list is empty".into()));
        }
        validate_unique_ids(cities)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| random_tour(cities, &mut rng))
            .collect::<TspResult<_>>()?;

        let mut best: Option<(Tour, f64)> = None;
        let mut stats = EpochStats::with_capacity(config.epochs);

        for _ in 0..config.epochs {
            // Wholesale replacement: the new population is built entirely
            // from offspring, with no slot-level identity preserved.
            let mut next_gen = Vec::with_capacity(config.population_size);
            for _ in 0..config.population_size {
                let parent_a = tournament_select(&population, config.tournament_size, &mut rng)?;
                let parent_b = tournament_select(&population, config.tournament_size, &mut rng)?;
                let child = crossover(parent_a, parent_b)?;
                next_gen.push(swap_mutation(&child, config.mutation_probability, &mut rng));
            }
            population = next_gen;

            let lengths = evaluate_population(&population, config.parallel)?;

            let mut epoch_best = f64::INFINITY;
            let mut epoch_best_idx = 0;
            let mut epoch_worst = f64::NEG_INFINITY;
            let mut sum = 0.0;
            for (i, &length) in lengths.iter().enumerate() {
                if length < epoch_best {
                    epoch_best = length;
                    epoch_best_idx = i;
                }
                epoch_worst = epoch_worst.max(length);
                sum += length;
            }

            if best.as_ref().is_none_or(|&(_, score)| epoch_best < score) {
                best = Some((population[epoch_best_idx].clone(), epoch_best));
            }

            stats.best.push(epoch_best);
            stats.avg.push(sum / lengths.len() as f64);
            stats.worst.push(epoch_worst);
        }

        let (best, best_length) = match best {
            Some((tour, length)) => (Some(tour), Some(length)),
            None => (None, None),
        };

        Ok(GaResult {
            best,
            best_length,
            epochs: config.epochs,
            stats,
        })
    }
}

/// Evaluates the length of every tour in the population.
fn evaluate_population(population: &[Tour], _parallel: bool) -> TspResult<Vec<f64>> {
    #[cfg(feature = "parallel")]
    if _parallel {
        use rayon::prelude::*;
        return population.par_iter().map(Tour::length).collect();
    }
    population.iter().map(Tour::length).collect()
}
