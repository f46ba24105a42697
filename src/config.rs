use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ModelError;

/// Configuration for the simulated-annealing subset search.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AnnealingConfig {
    /// Iteration budget `K`. A budget of 1 performs zero acceptance
    /// iterations and returns the initial random subset's fitted model.
    pub iterations: usize,

    /// Optional seed for reproducible searches. `None` draws from
    /// entropy.
    pub seed: Option<u64>,
}

impl AnnealingConfig {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            seed: None,
        }
    }
}

/// Bounds for the exhaustive sweep over the rank parameter `n`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Smallest number of top-ranked features to try (inclusive).
    pub min_n: usize,
    /// Largest number of top-ranked features to try (inclusive).
    pub max_n: usize,
}

impl SweepConfig {
    pub fn new(min_n: usize, max_n: usize) -> Self {
        Self { min_n, max_n }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.min_n > self.max_n {
            return Err(ModelError::Config(format!(
                "min_n ({}) must not exceed max_n ({})",
                self.min_n, self.max_n
            )));
        }
        Ok(())
    }
}

/// Configuration handed to a third-party genetic optimizer.
///
/// Defaults follow the upstream population-based optimizer: 300
/// individuals, 40 generations, 10-fold internal scoring.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct GeneticConfig {
    /// Number of candidate subsets per generation.
    pub population: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Fold count for the optimizer's internal cross-validated scoring.
    pub cv_folds: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population: 300,
            generations: 40,
            cv_folds: 10,
        }
    }
}

/// Supported search strategy kinds, for driver-level selection by name.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Annealing,
    Mimn,
    Genetic,
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "annealing" => Ok(SearchKind::Annealing),
            "mimn" => Ok(SearchKind::Mimn),
            "genetic" => Ok(SearchKind::Genetic),
            _ => Err(format!(
                "Unknown search strategy: {}. Expected one of: annealing, mimn, genetic",
                s
            )),
        }
    }
}
