//! Colony engine
//!
//! Runs batches of stochastic walkers in parallel against the shared
//! pheromone field and folds their routes back into it, one generation at
//! a time.

pub mod ant;
pub mod optimizer;

pub use ant::Ant;
pub use optimizer::{AntColonyOptimization, GenerationStats};

use crate::error::ColonyError;
use serde::{Deserialize, Serialize};

/// Configuration for one optimization run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// Walkers spawned each generation.
    pub ants_per_gen: usize,
    /// Total generation count.
    pub generations: usize,
    /// Deposit normalization factor: each route spreads `q / len` over its
    /// distinct cells.
    pub q: f64,
    /// Evaporation rate rho, in [0, 1).
    pub evaporation: f64,
    /// Base seed for walker RNGs. `None` draws every walker from entropy;
    /// setting it makes runs reproducible.
    pub seed: Option<u64>,
}

impl ColonyConfig {
    pub fn new(ants_per_gen: usize, generations: usize, q: f64, evaporation: f64) -> Self {
        ColonyConfig {
            ants_per_gen,
            generations,
            q,
            evaporation,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects invalid parameters before any generation runs.
    pub fn validate(&self) -> Result<(), ColonyError> {
        if self.ants_per_gen == 0 {
            return Err(ColonyError::InvalidAntsPerGen);
        }
        if self.generations == 0 {
            return Err(ColonyError::InvalidGenerations);
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(ColonyError::InvalidQ(self.q));
        }
        if !self.evaporation.is_finite() || !(0.0..1.0).contains(&self.evaporation) {
            return Err(ColonyError::InvalidEvaporation(self.evaporation));
        }
        Ok(())
    }
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self::new(20, 10, 10.0, 0.1)
    }
}
