//! Breadth-first baseline
//!
//! Deterministic shortest-path search over the passability grid, ignoring
//! pheromones. Serves as an optimality yardstick for the stochastic colony.

use crate::geometry::{Coordinate, Direction};
use crate::maze::Maze;
use crate::pathspec::PathSpecification;
use crate::route::Route;
use std::collections::VecDeque;

/// BFS from `spec.start()` to `spec.end()`. Returns a shortest route, or
/// `None` when either endpoint is closed or the two are disconnected.
pub fn bfs_route(maze: &Maze, spec: &PathSpecification) -> Option<Route> {
    let start = spec.start();
    let end = spec.end();
    if !maze.is_open(start) || !maze.is_open(end) {
        return None;
    }

    let length = maze.length();
    let idx = |pos: Coordinate| pos.x as usize * length + pos.y as usize;

    // arrived[cell] holds the direction the frontier took into that cell
    let mut arrived: Vec<Option<Direction>> = vec![None; maze.width() * length];
    let mut visited = vec![false; maze.width() * length];
    visited[idx(start)] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if pos == end {
            return Some(reconstruct(start, end, &arrived, idx));
        }
        for dir in Direction::ALL {
            let next = pos.add_direction(dir);
            if maze.is_open(next) && !visited[idx(next)] {
                visited[idx(next)] = true;
                arrived[idx(next)] = Some(dir);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Walks `arrived` links back from the end and replays them forward.
fn reconstruct(
    start: Coordinate,
    end: Coordinate,
    arrived: &[Option<Direction>],
    idx: impl Fn(Coordinate) -> usize,
) -> Route {
    let mut steps = Vec::new();
    let mut pos = end;
    while pos != start {
        // every cell past the start carries an arrival direction
        let Some(dir) = arrived[idx(pos)] else { break };
        steps.push(dir);
        pos = pos.subtract_direction(dir);
    }
    steps.reverse();

    let mut route = Route::new(start);
    for dir in steps {
        route.add(dir);
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_manhattan_optimum_on_open_grids() {
        let maze = Maze::new(vec![vec![1; 5]; 5], 5, 5).unwrap();
        let spec = PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(4, 4));
        let route = bfs_route(&maze, &spec).unwrap();
        assert_eq!(route.size(), 8);

        let mut pos = spec.start();
        for cell in route.cells() {
            assert!(maze.is_open(cell));
            pos = cell;
        }
        assert_eq!(pos, spec.end());
    }

    #[test]
    fn routes_around_walls() {
        // wall splits the middle row except for a gap at y=2
        let maze: Maze = "3 3 \n1 1 1 \n0 0 1 \n1 1 1 \n".parse().unwrap();
        let spec = PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(0, 2));
        let route = bfs_route(&maze, &spec).unwrap();
        assert_eq!(route.size(), 6);
    }

    #[test]
    fn disconnected_cells_yield_none() {
        let maze: Maze = "3 3 \n1 1 1 \n0 0 0 \n0 1 0 \n".parse().unwrap();
        let spec = PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(1, 2));
        assert!(bfs_route(&maze, &spec).is_none());
    }

    #[test]
    fn closed_endpoints_yield_none() {
        let maze: Maze = "2 2 \n1 0 \n1 1 \n".parse().unwrap();
        let wall = Coordinate::new(1, 0);
        let open = Coordinate::new(0, 0);
        assert!(bfs_route(&maze, &PathSpecification::new(wall, open)).is_none());
        assert!(bfs_route(&maze, &PathSpecification::new(open, wall)).is_none());
    }

    #[test]
    fn start_equals_end_is_empty() {
        let maze = Maze::new(vec![vec![1; 2]; 2], 2, 2).unwrap();
        let pos = Coordinate::new(1, 1);
        let route = bfs_route(&maze, &PathSpecification::new(pos, pos)).unwrap();
        assert!(route.is_empty());
    }
}
