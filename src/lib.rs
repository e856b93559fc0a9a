//! Genetic-algorithm solver for the Euclidean Traveling Salesman Problem.
//!
//! Provides a population-based evolutionary optimizer over closed city
//! tours, plus the baseline constructors it is measured against:
//!
//! - **Tour constructors**: greedy nearest-neighbor and uniform random
//!   permutation baselines.
//! - **Tournament selection**: the fittest of a small sample drawn without
//!   replacement.
//! - **Variation operators**: prefix-preserving crossover and probabilistic
//!   single-swap mutation, both permutation-safe.
//! - **Evolution loop**: fixed-epoch, non-elitist generational replacement
//!   with external best-ever tracking and per-epoch best/avg/worst
//!   statistics.
//!
//! Lower scores are better: fitness is total closed-tour length.
//!
//! # Randomness
//!
//! Every randomized operation takes an explicit `&mut impl Rng`; whole runs
//! are reproducible through [`GaConfig::with_seed`]. Nothing draws from
//! ambient global state.
//!
//! # Example
//!
//! ```
//! use tsp_ga::{parse_node_coord_section, GaConfig, GaRunner};
//!
//! let cities = parse_node_coord_section(
//!     "NODE_COORD_SECTION\n1 0 0\n2 0 1\n3 1 1\n4 1 0\nEOF\n",
//! )?;
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_epochs(20)
//!     .with_tournament_size(5)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&cities, &config)?;
//! println!("best: {:?}", result.best.as_ref().map(|t| t.city_ids()));
//! # Ok::<(), tsp_ga::TspError>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod city;
mod config;
pub mod constructors;
mod error;
pub mod operators;
mod runner;
pub mod selection;
mod tour;

pub use city::{distance, parse_node_coord_section, City};
pub use config::GaConfig;
pub use constructors::{nearest_neighbor_tour, random_tour};
pub use error::{TspError, TspResult};
pub use operators::{crossover, swap_mutation};
pub use runner::{EpochStats, GaResult, GaRunner};
pub use selection::tournament_select;
pub use tour::Tour;
