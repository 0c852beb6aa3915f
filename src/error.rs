//! Error taxonomy
//!
//! Configuration and input errors are rejected before any generation runs;
//! per-walker exhaustion is recovered at the generation boundary by
//! exclusion, with zero survivors fatal for the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("ants_per_gen must be positive")]
    InvalidAntsPerGen,

    #[error("generations must be positive")]
    InvalidGenerations,

    #[error("q must be positive and finite, got {0}")]
    InvalidQ(f64),

    #[error("evaporation rate must lie in [0, 1), got {0}")]
    InvalidEvaporation(f64),

    #[error("malformed maze: {0}")]
    MalformedMaze(String),

    #[error("malformed path specification: {0}")]
    MalformedPathSpec(String),

    /// A walker backtracked to an empty route or ran out of its step budget
    /// without reaching the goal.
    #[error("walker exhausted its search without reaching the goal")]
    SearchExhausted,

    /// No walker of a generation reached the goal.
    #[error("no walker reached the goal in generation {0}")]
    GenerationFailed(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
