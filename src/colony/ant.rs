//! Single-walker search
//!
//! One ant performs one stochastic walk from start to end, steered by the
//! pheromone field. Ants only read the maze; the pheromone update happens
//! at the generation boundary after every ant has returned.

use crate::error::ColonyError;
use crate::geometry::{Coordinate, Direction};
use crate::maze::Maze;
use crate::pathspec::PathSpecification;
use crate::route::Route;
use rand::rngs::SmallRng;
use rand::Rng;

/// Step budget per walk, as a multiple of the maze cell count. A walk that
/// burns through the budget without reaching the goal counts as exhausted.
const MAX_STEP_FACTOR: usize = 32;

/// A single search trial. Holds a read-only borrow of the maze for the
/// duration of one `find_route` call and its own private route state.
pub struct Ant<'a> {
    maze: &'a Maze,
    start: Coordinate,
    end: Coordinate,
    rng: SmallRng,
}

impl<'a> Ant<'a> {
    pub fn new(maze: &'a Maze, spec: &PathSpecification, rng: SmallRng) -> Self {
        Ant {
            maze,
            start: spec.start(),
            end: spec.end(),
            rng,
        }
    }

    /// Performs one walk through the maze.
    ///
    /// Each step draws a direction from the pheromone levels of the four
    /// neighbors (East/North/West/South), with an immediate reversal
    /// forbidden and the previous heading weighted up. Dead ends unwind the
    /// route until a cell with more than two viable directions reappears.
    ///
    /// Fails with `SearchExhausted` when backtracking empties the route or
    /// the step budget runs out.
    pub fn find_route(mut self) -> Result<Route, ColonyError> {
        let mut route = Route::new(self.start);
        let mut pos = self.start;
        let mut last: Option<Direction> = None;
        let max_steps = MAX_STEP_FACTOR * self.maze.width() * self.maze.length();
        let mut steps = 0usize;

        while pos != self.end {
            if steps >= max_steps {
                return Err(ColonyError::SearchExhausted);
            }

            let mut chances = self.maze.neighbor_pheromones(pos);

            // Never walk straight back; prefer to keep the heading, twice as
            // strongly when no neighbor is a wall or boundary.
            if let Some(dir) = last {
                chances[dir.opposite().index()] = 0.0;
                let keep = if chances.iter().all(|&c| c != 0.0) {
                    4.0
                } else {
                    2.0
                };
                chances[dir.index()] *= keep;
            }

            // Dead end: unwind until a junction with more than two open
            // directions comes back into view.
            if chances.iter().sum::<f64>() == 0.0 {
                while positive_count(&chances) <= 2 {
                    let Some(dir) = route.remove_last() else {
                        return Err(ColonyError::SearchExhausted);
                    };
                    pos = pos.subtract_direction(dir);
                    chances = self.maze.neighbor_pheromones(pos);
                }
            }

            let total: f64 = chances.iter().sum();
            if total <= 0.0 {
                return Err(ColonyError::SearchExhausted);
            }

            // Roulette-wheel selection over the normalized chances, in
            // East/North/West/South order.
            let u: f64 = self.rng.gen();
            let mut lower = 0.0;
            let mut picked = None;
            for (i, &chance) in chances.iter().enumerate() {
                let p = chance / total;
                if lower <= u && u < lower + p {
                    picked = Direction::from_index(i);
                    break;
                }
                lower += p;
            }
            // Rounding can leave the last band just short of 1.0; fall back
            // to the last viable direction.
            let chosen = match picked {
                Some(dir) => dir,
                None => last_positive(&chances).ok_or(ColonyError::SearchExhausted)?,
            };

            pos = pos.add_direction(chosen);
            route.add(chosen);
            last = Some(chosen);
            steps += 1;
        }

        Ok(route)
    }
}

fn positive_count(chances: &[f64; 4]) -> usize {
    chances.iter().filter(|&&c| c > 0.0).count()
}

fn last_positive(chances: &[f64; 4]) -> Option<Direction> {
    chances
        .iter()
        .rposition(|&c| c > 0.0)
        .and_then(Direction::from_index)
}
