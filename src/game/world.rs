//! # Grid World
//!
//! The coordinate space the game is played on: a fixed rectangle of rooms
//! with boundary checks and per-position exit listings.

use crate::config;
use crate::game::{Direction, Position};
use serde::{Deserialize, Serialize};

/// The rectangular room grid.
///
/// Walking off the edge is not an error; `step` simply reports that no room
/// lies in that direction and the caller tells the player the way is blocked.
///
/// # Examples
///
/// ```
/// use labyrinth::{Direction, GridWorld, Position};
///
/// let world = GridWorld::default();
/// assert!(world.contains(Position::new(0, 0)));
/// assert!(!world.contains(Position::new(-1, 0)));
/// assert_eq!(
///     world.step(Position::new(0, 2), Direction::North),
///     None,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridWorld {
    /// Grid width in rooms
    pub width: i32,
    /// Grid height in rooms
    pub height: i32,
}

impl GridWorld {
    /// Creates a world with the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Checks whether a position lies inside the grid on both axes.
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.row < self.height
            && position.col >= 0
            && position.col < self.width
    }

    /// Computes the room one step in the given direction.
    ///
    /// Returns None when that step would leave the grid.
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let next = position + direction.to_delta();
        if self.contains(next) {
            Some(next)
        } else {
            None
        }
    }

    /// Lists the directions that lead to a room from the given position.
    ///
    /// Computed fresh on every call; the result is in display order.
    pub fn open_directions(&self, position: Position) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|direction| self.step(position, *direction).is_some())
            .collect()
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new(config::GRID_WIDTH, config::GRID_HEIGHT)
    }
}
