//! Pheromone maze
//!
//! Owns two parallel width x length grids: passability, fixed at
//! construction, and pheromone level, mutated only by evaporation and
//! deposits. Walkers read the pheromone grid; all writes happen at the
//! generation boundary.

use crate::error::ColonyError;
use crate::geometry::{Coordinate, Direction};
use crate::route::Route;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Evaporation floor for open cells. Keeps rarely-walked cells reachable
/// instead of starving them to zero.
const PHEROMONE_FLOOR: f64 = 0.1;

/// A grid maze carrying a pheromone field.
///
/// Grids are stored flat, x-major: cell (x, y) lives at `x * length + y`.
/// Walls carry pheromone 0 and never receive deposits; open cells start
/// at 1.0.
pub struct Maze {
    width: usize,
    length: usize,
    walls: Vec<u8>,
    pheromones: Vec<f64>,
}

impl Maze {
    /// Builds a maze from a passability grid indexed `walls[x][y]`
    /// (1 = open, 0 = wall). Pheromones start as a copy of the grid.
    pub fn new(walls: Vec<Vec<u8>>, width: usize, length: usize) -> Result<Self, ColonyError> {
        if width == 0 || length == 0 {
            return Err(ColonyError::MalformedMaze(
                "maze extent must be non-zero".to_string(),
            ));
        }
        if walls.len() != width {
            return Err(ColonyError::MalformedMaze(format!(
                "expected {} columns, got {}",
                width,
                walls.len()
            )));
        }
        let mut flat = Vec::with_capacity(width * length);
        for (x, column) in walls.iter().enumerate() {
            if column.len() != length {
                return Err(ColonyError::MalformedMaze(format!(
                    "column {} has {} cells, expected {}",
                    x,
                    column.len(),
                    length
                )));
            }
            for &cell in column {
                if cell > 1 {
                    return Err(ColonyError::MalformedMaze(format!(
                        "cell value {} is not 0 or 1",
                        cell
                    )));
                }
                flat.push(cell);
            }
        }
        let pheromones = flat.iter().map(|&w| f64::from(w)).collect();
        Ok(Maze {
            width,
            length,
            walls: flat,
            pheromones,
        })
    }

    /// Reads a maze file: first line `width length`, then `length` rows of
    /// `width` 0/1 values (file row = y).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ColonyError> {
        fs::read_to_string(path)?.parse()
    }

    #[inline]
    fn idx(&self, pos: Coordinate) -> usize {
        pos.x as usize * self.length + pos.y as usize
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        pos.within(self.width, self.length)
    }

    /// Whether `pos` is an in-bounds open cell.
    #[inline]
    pub fn is_open(&self, pos: Coordinate) -> bool {
        self.in_bounds(pos) && self.walls[self.idx(pos)] == 1
    }

    /// Reinitializes the pheromone grid from passability. Called once per
    /// optimization run, not per generation.
    pub fn reset(&mut self) {
        for (level, &wall) in self.pheromones.iter_mut().zip(&self.walls) {
            *level = f64::from(wall);
        }
    }

    /// Multiplicative decay: every cell becomes `old * (1 - rho)`, clamped
    /// up to the floor when it lands strictly between 0 and the floor.
    /// Exact zeros (walls) stay zero. `rho` is validated upstream.
    pub fn evaporate(&mut self, rho: f64) {
        for level in &mut self.pheromones {
            let next = *level * (1.0 - rho);
            *level = if next > 0.0 && next < PHEROMONE_FLOOR {
                PHEROMONE_FLOOR
            } else {
                next
            };
        }
    }

    /// Rewards every cell the route visits with `q / len(route)`, counting
    /// each distinct coordinate once. A route that loops through a cell
    /// must not over-reward it.
    pub fn deposit(&mut self, route: &Route, q: f64) {
        if route.is_empty() {
            return;
        }
        let visited: HashSet<Coordinate> = route.cells().collect();
        let per_cell = q / route.size() as f64;
        for pos in visited {
            if self.in_bounds(pos) {
                let idx = self.idx(pos);
                self.pheromones[idx] += per_cell;
            }
        }
    }

    /// Deposits every route in turn. Additions commute, so order is
    /// irrelevant.
    pub fn deposit_all(&mut self, routes: &[Route], q: f64) {
        for route in routes {
            self.deposit(route, q);
        }
    }

    /// Pheromone levels of the four adjacent cells, in East/North/West/South
    /// order. Out-of-bounds neighbors contribute 0, so the result is a
    /// 4-element array for any `pos`, in-bounds or not.
    pub fn neighbor_pheromones(&self, pos: Coordinate) -> [f64; 4] {
        let mut levels = [0.0; 4];
        for dir in Direction::ALL {
            levels[dir.index()] = self.pheromone_at(pos.add_direction(dir));
        }
        levels
    }

    /// Pheromone level at `pos`, or 0 when out of bounds.
    #[inline]
    pub fn pheromone_at(&self, pos: Coordinate) -> f64 {
        if self.in_bounds(pos) {
            self.pheromones[self.idx(pos)]
        } else {
            0.0
        }
    }
}

impl FromStr for Maze {
    type Err = ColonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let header = lines
            .next()
            .ok_or_else(|| ColonyError::MalformedMaze("empty input".to_string()))?;
        let mut dims = header.split_whitespace().map(|tok| {
            tok.parse::<usize>()
                .map_err(|_| ColonyError::MalformedMaze(format!("bad dimension '{}'", tok)))
        });
        let width = dims
            .next()
            .ok_or_else(|| ColonyError::MalformedMaze("missing width".to_string()))??;
        let length = dims
            .next()
            .ok_or_else(|| ColonyError::MalformedMaze("missing length".to_string()))??;

        let mut walls = vec![Vec::with_capacity(length); width];
        for y in 0..length {
            let row = lines
                .next()
                .ok_or_else(|| ColonyError::MalformedMaze(format!("missing row {}", y)))?;
            let cells: Vec<u8> = row
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<u8>()
                        .map_err(|_| ColonyError::MalformedMaze(format!("bad cell '{}'", tok)))
                })
                .collect::<Result<_, _>>()?;
            if cells.len() != width {
                return Err(ColonyError::MalformedMaze(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    cells.len(),
                    width
                )));
            }
            for (x, cell) in cells.into_iter().enumerate() {
                walls[x].push(cell);
            }
        }
        Maze::new(walls, width, length)
    }
}

/// Maze text dump, matching the input file format: width, length, then the
/// passability grid one row per y. Diagnostics only, no pheromone state.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} ", self.width, self.length)?;
        for y in 0..self.length {
            for x in 0..self.width {
                write!(f, "{} ", self.walls[x * self.length + y])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;

    fn open_maze(width: usize, length: usize) -> Maze {
        Maze::new(vec![vec![1; length]; width], width, length).unwrap()
    }

    fn route_of(start: Coordinate, steps: &[Direction]) -> Route {
        let mut route = Route::new(start);
        for &step in steps {
            route.add(step);
        }
        route
    }

    #[test]
    fn pheromones_start_as_passability() {
        let maze = Maze::new(vec![vec![1, 0], vec![0, 1]], 2, 2).unwrap();
        assert_eq!(maze.pheromone_at(Coordinate::new(0, 0)), 1.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(0, 1)), 0.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(1, 0)), 0.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(1, 1)), 1.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(2, 0)), 0.0);
    }

    #[test]
    fn evaporation_decays_and_clamps() {
        let mut maze = open_maze(2, 2);
        maze.evaporate(0.5);
        // 1.0 * 0.5 is above the floor
        assert_eq!(maze.pheromone_at(Coordinate::new(0, 0)), 0.5);
        maze.evaporate(0.9);
        // 0.5 * 0.1 = 0.05 clamps up to the floor
        assert_eq!(maze.pheromone_at(Coordinate::new(0, 0)), 0.1);
    }

    #[test]
    fn evaporation_keeps_walls_at_zero() {
        let mut maze = Maze::new(vec![vec![1, 0]], 1, 2).unwrap();
        for _ in 0..5 {
            maze.evaporate(0.99);
            assert_eq!(maze.pheromone_at(Coordinate::new(0, 1)), 0.0);
        }
        // open cell never starves below the floor
        assert!(maze.pheromone_at(Coordinate::new(0, 0)) >= 0.1);
    }

    #[test]
    fn deposit_counts_looped_cells_once() {
        let mut maze = open_maze(3, 3);
        // E, W revisits (1, 1); 4 steps but only 3 distinct cells
        let route = route_of(
            Coordinate::new(1, 0),
            &[
                Direction::East,
                Direction::East,
                Direction::West,
                Direction::South,
            ],
        );
        maze.deposit(&route, 8.0);
        let per_cell = 8.0 / 4.0;
        assert_eq!(maze.pheromone_at(Coordinate::new(1, 1)), 1.0 + per_cell);
        assert_eq!(maze.pheromone_at(Coordinate::new(1, 2)), 1.0 + per_cell);
        assert_eq!(maze.pheromone_at(Coordinate::new(2, 1)), 1.0 + per_cell);
        // start cell was never revisited
        assert_eq!(maze.pheromone_at(Coordinate::new(1, 0)), 1.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(0, 0)), 1.0);
    }

    #[test]
    fn deposits_are_additive() {
        let route = route_of(Coordinate::new(0, 0), &[Direction::East, Direction::East]);
        let mut twice = open_maze(1, 3);
        twice.deposit(&route, 4.0);
        twice.deposit(&route, 4.0);
        let mut halves = open_maze(1, 3);
        halves.deposit_all(&[route.clone(), route.clone()], 4.0);
        for y in 0..3 {
            let pos = Coordinate::new(0, y);
            assert_eq!(twice.pheromone_at(pos), halves.pheromone_at(pos));
        }
        assert_eq!(twice.pheromone_at(Coordinate::new(0, 1)), 1.0 + 4.0);
    }

    #[test]
    fn reset_restores_initial_grid() {
        let mut maze = Maze::new(vec![vec![1, 1], vec![0, 1]], 2, 2).unwrap();
        let route = route_of(Coordinate::new(0, 0), &[Direction::East]);
        maze.evaporate(0.3);
        maze.deposit(&route, 5.0);
        maze.evaporate(0.8);
        maze.reset();
        assert_eq!(maze.pheromone_at(Coordinate::new(0, 0)), 1.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(0, 1)), 1.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(1, 0)), 0.0);
        assert_eq!(maze.pheromone_at(Coordinate::new(1, 1)), 1.0);
    }

    #[test]
    fn neighbor_order_is_east_north_west_south() {
        let maze = open_maze(3, 3);
        let levels = maze.neighbor_pheromones(Coordinate::new(1, 1));
        assert_eq!(levels, [1.0, 1.0, 1.0, 1.0]);

        // corner (0, 0): north (x-1) and west (y-1) are out of bounds
        let corner = maze.neighbor_pheromones(Coordinate::new(0, 0));
        assert_eq!(corner, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn neighbor_query_is_total() {
        let maze = open_maze(2, 2);
        // querying an out-of-bounds position still yields a 4-element answer
        let outside = maze.neighbor_pheromones(Coordinate::new(-1, 0));
        assert_eq!(outside, [0.0, 0.0, 0.0, 1.0]);
        let far = maze.neighbor_pheromones(Coordinate::new(10, 10));
        assert_eq!(far, [0.0; 4]);
    }

    #[test]
    fn parses_and_dumps_file_format() {
        let text = "3 2 \n1 0 1 \n1 1 1 \n";
        let maze: Maze = text.parse().unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.length(), 2);
        assert!(maze.is_open(Coordinate::new(0, 0)));
        assert!(!maze.is_open(Coordinate::new(1, 0)));
        assert!(maze.is_open(Coordinate::new(1, 1)));
        assert_eq!(maze.to_string(), text);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<Maze>().is_err());
        assert!("2".parse::<Maze>().is_err());
        assert!("2 2\n1 1\n1".parse::<Maze>().is_err());
        assert!("2 2\n1 1\n1 7\n".parse::<Maze>().is_err());
        assert!("2 1\n1 x\n".parse::<Maze>().is_err());
    }
}
