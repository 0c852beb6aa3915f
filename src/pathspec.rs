//! Path specification
//!
//! The immutable (start, end) pair a shortest-route problem is defined by.

use crate::error::ColonyError;
use crate::geometry::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Start and end coordinates of one shortest-route problem. Consumed, never
/// mutated, by walkers and the optimizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpecification {
    start: Coordinate,
    end: Coordinate,
}

impl PathSpecification {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        PathSpecification { start, end }
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Reads a coordinates file: two lines of `x, y;` pairs, start first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ColonyError> {
        fs::read_to_string(path)?.parse()
    }
}

impl FromStr for PathSpecification {
    type Err = ColonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_coordinate);
        let start = coords.next().ok_or_else(|| {
            ColonyError::MalformedPathSpec("missing start coordinate".to_string())
        })??;
        let end = coords
            .next()
            .ok_or_else(|| ColonyError::MalformedPathSpec("missing end coordinate".to_string()))??;
        Ok(PathSpecification::new(start, end))
    }
}

/// Parses one `x, y;` line, tolerating commas and semicolons.
fn parse_coordinate(line: &str) -> Result<Coordinate, ColonyError> {
    let cleaned = line.replace([',', ';'], " ");
    let mut parts = cleaned.split_whitespace().map(|tok| {
        tok.parse::<i32>()
            .map_err(|_| ColonyError::MalformedPathSpec(format!("bad coordinate '{}'", line)))
    });
    match (parts.next(), parts.next()) {
        (Some(x), Some(y)) => Ok(Coordinate::new(x?, y?)),
        _ => Err(ColonyError::MalformedPathSpec(format!(
            "expected two values, got '{}'",
            line
        ))),
    }
}

impl fmt::Display for PathSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start {} end {}", self.start, self.end)
    }
}
