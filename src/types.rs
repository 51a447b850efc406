//! Newtype wrappers and core value types for improved type safety.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell position on the grid.
///
/// Positions are plain coordinates with structural equality and hashing,
/// so two observations that place the agent on the same cell compare equal
/// regardless of where the values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A move the controlled agent can take.
///
/// The engine supplies the legal subset in a fixed order each turn; the
/// controller never reorders or filters it (tie-breaks depend on the
/// engine's ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stop,
}

impl Action {
    /// The displacement this action applies to a position.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::North => (0, 1),
            Action::South => (0, -1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::Stop => (0, 0),
        }
    }

    /// Apply this action to a position.
    pub fn apply(&self, position: Position) -> Position {
        let (dx, dy) = self.delta();
        Position::new(position.x + dx, position.y + dy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
            Action::Stop => "Stop",
        };
        write!(f, "{name}")
    }
}
