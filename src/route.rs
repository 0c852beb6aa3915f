//! Walker routes
//!
//! A route is an ordered direction sequence anchored at a start coordinate.
//! Walkers build one up step by step and unwind it while backtracking.

use crate::geometry::{Coordinate, Direction};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// One walk through the maze: start coordinate plus the steps taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    start: Coordinate,
    steps: Vec<Direction>,
}

impl Route {
    pub fn new(start: Coordinate) -> Self {
        Route {
            start,
            steps: Vec::new(),
        }
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// Append one step.
    #[inline]
    pub fn add(&mut self, dir: Direction) {
        self.steps.push(dir);
    }

    /// Pop the most recent step and return it. `None` on an empty route,
    /// which walkers treat as search exhaustion.
    #[inline]
    pub fn remove_last(&mut self) -> Option<Direction> {
        self.steps.pop()
    }

    /// Number of steps taken.
    #[inline]
    pub fn size(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Strictly fewer steps than `other`.
    #[inline]
    pub fn shorter_than(&self, other: &Route) -> bool {
        self.size() < other.size()
    }

    /// Replays the route from its start, yielding the coordinate reached
    /// after each step (the start cell itself only appears if revisited).
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.steps.iter().scan(self.start, |pos, &dir| {
            *pos = pos.add_direction(dir);
            Some(*pos)
        })
    }

    /// Writes the route text form (see `Display`) for external visualizers.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

/// Route text format: total step count, then one direction code per line.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size())?;
        for step in &self.steps {
            writeln!(f, "{}", step.index())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_last() {
        let mut route = Route::new(Coordinate::new(0, 0));
        assert!(route.is_empty());
        assert_eq!(route.remove_last(), None);

        route.add(Direction::East);
        route.add(Direction::South);
        assert_eq!(route.size(), 2);
        assert_eq!(route.remove_last(), Some(Direction::South));
        assert_eq!(route.size(), 1);
    }

    #[test]
    fn shorter_than_is_strict() {
        let mut a = Route::new(Coordinate::new(0, 0));
        let mut b = Route::new(Coordinate::new(0, 0));
        a.add(Direction::East);
        b.add(Direction::East);
        assert!(!a.shorter_than(&b));
        b.add(Direction::East);
        assert!(a.shorter_than(&b));
        assert!(!b.shorter_than(&a));
    }

    #[test]
    fn cells_replays_from_start() {
        let mut route = Route::new(Coordinate::new(1, 1));
        route.add(Direction::East);
        route.add(Direction::South);
        let cells: Vec<Coordinate> = route.cells().collect();
        assert_eq!(cells, vec![Coordinate::new(1, 2), Coordinate::new(2, 2)]);
    }

    #[test]
    fn text_form_lists_direction_codes() {
        let mut route = Route::new(Coordinate::new(0, 0));
        route.add(Direction::East);
        route.add(Direction::North);
        route.add(Direction::South);
        assert_eq!(route.to_string(), "3\n0\n1\n3\n");
    }
}
