//! Pherotrail Core - Ant Colony Optimization for grid mazes
//!
//! A population of stochastic walkers repeatedly crosses a grid maze,
//! steered by a shared pheromone field that short successful walks
//! reinforce and time decays, converging statistically toward short
//! routes. The crate provides the pheromone-bearing maze model, the
//! single-walker search, and the parallel generation loop that ties them
//! together, plus a deterministic BFS baseline for comparison.

pub mod baseline;
pub mod colony;
pub mod error;
pub mod geometry;
pub mod maze;
pub mod pathspec;
pub mod route;

// Re-export key types
pub use colony::{Ant, AntColonyOptimization, ColonyConfig, GenerationStats};
pub use error::ColonyError;
pub use geometry::{Coordinate, Direction};
pub use maze::Maze;
pub use pathspec::PathSpecification;
pub use route::Route;

/// Initialize tracing for the library.
pub fn setup_logging(level: Option<String>) {
    let filter = level.unwrap_or_else(|| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
