//! Grid geometry: positions, world bounds, and cardinal directions.

use serde::{Deserialize, Serialize};

/// Inclusive lower bound of both grid axes.
pub const GRID_MIN: i64 = -10;
/// Inclusive upper bound of both grid axes.
pub const GRID_MAX: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GridPos {
    pub x: i64,
    pub y: i64,
}

impl GridPos {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::default()
    }

    /// Offset by `(dx, dy)`, saturating at the i64 limits. A saturated
    /// coordinate is far outside the grid, so bound checks still reject it.
    pub fn translated(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    pub fn in_bounds(self) -> bool {
        self.x >= GRID_MIN && self.x <= GRID_MAX && self.y >= GRID_MIN && self.y <= GRID_MAX
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn variants() -> Vec<&'static str> {
        vec!["north", "south", "east", "west"]
    }
}
