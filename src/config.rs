//! Run configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolution loop.

use crate::error::{TspError, TspResult};

/// Configuration for a genetic-algorithm run.
///
/// # Defaults
///
/// ```
/// use tsp_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.epochs, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_probability(0.2)
///     .with_tournament_size(5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population, fixed across generations.
    pub population_size: usize,

    /// Number of generations to run. Zero is allowed and yields no solution.
    pub epochs: usize,

    /// Probability of applying a single-swap mutation to an offspring
    /// (0.0–1.0).
    pub mutation_probability: f64,

    /// Number of distinct tours sampled per tournament.
    ///
    /// Higher values increase selection pressure. Must not exceed
    /// `population_size`.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy, making runs non-deterministic.
    pub seed: Option<u64>,

    /// Whether to evaluate tour fitness in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; ignored otherwise.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            epochs: 200,
            mutation_probability: 0.3,
            tournament_size: 7,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_epochs(mut self, n: usize) -> Self {
        self.epochs = n;
        self
    }

    /// Sets the mutation probability, clamped to 0.0–1.0.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`TspError::Precondition`] describing the first invalid parameter.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size == 0 {
            return Err(TspError::Precondition(
                "population size must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(TspError::Precondition(
                "tournament size must be at least 1".into(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(TspError::Precondition(format!(
                "tournament size {} exceeds population size {}",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(TspError::Precondition(format!(
                "mutation probability {} outside 0.0..=1.0",
                self.mutation_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.epochs, 200);
        assert!((config.mutation_probability - 0.3).abs() < 1e-10);
        assert_eq!(config.tournament_size, 7);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_epochs(10)
            .with_mutation_probability(0.8)
            .with_tournament_size(3)
            .with_seed(42)
            .with_parallel(true);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.epochs, 10);
        assert!((config.mutation_probability - 0.8).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
    }

    #[test]
    fn test_mutation_probability_clamped() {
        let config = GaConfig::default().with_mutation_probability(1.5);
        assert!((config.mutation_probability - 1.0).abs() < 1e-10);

        let config = GaConfig::default().with_mutation_probability(-0.5);
        assert!((config.mutation_probability - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_exceeds_population() {
        let config = GaConfig::default()
            .with_population_size(5)
            .with_tournament_size(6);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds population size 5"));
    }

    #[test]
    fn test_validate_zero_epochs_allowed() {
        let config = GaConfig::default().with_epochs(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range_probability() {
        // Direct construction bypasses the clamping builder.
        let config = GaConfig {
            mutation_probability: 2.0,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
