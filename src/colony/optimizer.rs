//! Generation orchestrator
//!
//! Owns the maze and the running best route. Each generation fans walkers
//! out over the rayon pool against a read-only maze borrow, joins them, and
//! then performs the evaporate-then-deposit update as the only writer.

use crate::colony::ant::Ant;
use crate::colony::ColonyConfig;
use crate::error::ColonyError;
use crate::maze::Maze;
use crate::pathspec::PathSpecification;
use crate::route::Route;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Per-generation aggregate, retained for progress reporting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub avg_length: f64,
    pub best_length: usize,
}

/// Shortest-route optimizer over a pheromone maze.
pub struct AntColonyOptimization {
    maze: Maze,
    config: ColonyConfig,
    stats: Vec<GenerationStats>,
}

impl AntColonyOptimization {
    /// Validates the configuration before any generation can run.
    pub fn new(maze: Maze, config: ColonyConfig) -> Result<Self, ColonyError> {
        config.validate()?;
        Ok(AntColonyOptimization {
            maze,
            config,
            stats: Vec::new(),
        })
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Statistics of every generation run so far, oldest first.
    #[inline]
    pub fn stats(&self) -> &[GenerationStats] {
        &self.stats
    }

    /// RNG for one walker. With a configured seed, (generation, index) is
    /// mixed SplitMix64-style so neighboring walkers land on unrelated
    /// streams and runs stay reproducible.
    fn walker_rng(&self, generation: usize, index: usize) -> SmallRng {
        match self.config.seed {
            Some(base) => {
                let mut z = base
                    ^ (generation as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
                    ^ (index as u64).wrapping_mul(0xD1B5_4A32_D192_ED03);
                z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
                z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
                SmallRng::seed_from_u64(z ^ (z >> 31))
            }
            None => SmallRng::from_entropy(),
        }
    }

    /// Runs one generation: parallel walks against the read-only maze, a
    /// join barrier, then evaporation followed by deposits. Walkers that
    /// exhausted their search are dropped from the aggregate; a generation
    /// with zero survivors fails.
    pub fn run_generation(
        &mut self,
        spec: &PathSpecification,
        generation: usize,
    ) -> Result<(f64, Route), ColonyError> {
        let rngs: Vec<SmallRng> = (0..self.config.ants_per_gen)
            .map(|index| self.walker_rng(generation, index))
            .collect();

        let maze = &self.maze;
        let routes: Vec<Route> = rngs
            .into_par_iter()
            .filter_map(|rng| Ant::new(maze, spec, rng).find_route().ok())
            .collect();

        // collect() joined every walker; from here on this thread is the
        // only one touching the pheromone grid.
        let shortest = match routes.iter().min_by_key(|route| route.size()) {
            Some(route) => route.clone(),
            None => return Err(ColonyError::GenerationFailed(generation)),
        };

        self.maze.evaporate(self.config.evaporation);
        self.maze.deposit_all(&routes, self.config.q);

        let avg_length =
            routes.iter().map(Route::size).sum::<usize>() as f64 / routes.len() as f64;
        info!(
            generation,
            survivors = routes.len(),
            avg_length,
            best_length = shortest.size(),
            "generation complete"
        );
        self.stats.push(GenerationStats {
            generation,
            avg_length,
            best_length: shortest.size(),
        });

        Ok((avg_length, shortest))
    }

    /// Full optimization run: resets the pheromone grid, runs every
    /// generation, and returns the 1-based index of the generation that
    /// produced the best route together with the route itself.
    pub fn find_shortest_route(
        &mut self,
        spec: &PathSpecification,
    ) -> Result<(usize, Route), ColonyError> {
        self.maze.reset();
        self.stats.clear();

        let (_, mut best) = self.run_generation(spec, 1)?;
        let mut best_generation = 1;

        for generation in 2..=self.config.generations {
            let (_, shortest) = self.run_generation(spec, generation)?;
            if shortest.shorter_than(&best) {
                best = shortest;
                best_generation = generation;
            }
        }

        info!(
            best_length = best.size(),
            best_generation, "optimization run complete"
        );
        Ok((best_generation, best))
    }
}
