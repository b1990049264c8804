//! # Game Module
//!
//! Core game state management, the grid world, and the event vocabulary.
//!
//! This module contains the fundamental building blocks of Labyrinth:
//! - Grid coordinates, directions, and room identity
//! - The fixed item set scattered across the world
//! - Game events emitted by command execution
//! - The session state object coordinating all of the above

pub mod state;
pub mod world;

pub use state::*;
pub use world::*;

use crate::generation::RoomDescription;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a room coordinate in the game grid.
///
/// # Examples
///
/// ```
/// use labyrinth::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 3);
/// assert_eq!(pos.room_id(), "room_2_3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Derives the stable room identifier for this position.
    ///
    /// Every per-room cache in the game is keyed by this string.
    pub fn room_id(self) -> RoomId {
        format!("room_{}_{}", self.row, self.col)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

/// Unique identifier for a room, derived from its grid coordinates.
pub type RoomId = String;

/// Directions the player can walk in.
///
/// Movement is cardinal only; there is no diagonal travel between rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a (row, col) delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{Direction, Position};
    ///
    /// assert_eq!(Direction::North.to_delta(), Position::new(-1, 0));
    /// assert_eq!(Direction::East.to_delta(), Position::new(0, 1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(-1, 0),
            Direction::South => Position::new(1, 0),
            Direction::East => Position::new(0, 1),
            Direction::West => Position::new(0, -1),
        }
    }

    /// Parses the single-letter command token for a direction.
    ///
    /// Returns None for anything other than the four cardinal letters.
    pub fn from_token(token: &str) -> Option<Direction> {
        match token {
            "n" => Some(Direction::North),
            "s" => Some(Direction::South),
            "e" => Some(Direction::East),
            "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns the full direction name used in player-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    /// Returns all four directions in display order.
    pub fn all() -> Vec<Direction> {
        vec![
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed set of items scattered across the world.
///
/// Each item exists in at most one place at any time: some room's item list
/// or the player's inventory. Collecting and combining all of them wins the
/// game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Matches,
    Gas,
    Lamp,
}

impl Item {
    /// Returns every item in the game, in placement order.
    pub fn all() -> Vec<Item> {
        vec![Item::Matches, Item::Gas, Item::Lamp]
    }

    /// Returns the lowercase name used both for display and as the command
    /// token spelling.
    pub fn name(self) -> &'static str {
        match self {
            Item::Matches => "matches",
            Item::Gas => "gas",
            Item::Lamp => "lamp",
        }
    }

    /// Parses an item from its command token.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::Item;
    ///
    /// assert_eq!(Item::from_token("lamp"), Some(Item::Lamp));
    /// assert_eq!(Item::from_token("sword"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Item> {
        match token {
            "matches" => Some(Item::Matches),
            "gas" => Some(Item::Gas),
            "lamp" => Some(Item::Lamp),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Events produced by executing a player command.
///
/// Command execution only mutates state and reports what happened; turning
/// events into terminal text is the rendering system's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player walked into an adjacent room
    Moved { to: Position },
    /// The move was out of bounds; position is unchanged
    MoveBlocked { direction: Direction },
    /// An item moved from the current room into the inventory
    ItemPickedUp { item: Item },
    /// The inventory now holds the full item set
    AllItemsHeld,
    /// The named thing is not in the current room
    ItemNotFound { name: String },
    /// The player asked to see the inventory
    InventoryShown { items: Vec<Item> },
    /// The player asked to look at the room again
    RoomRedisplayed { description: RoomDescription },
    /// The offered combination does not win the game
    CombineRejected,
    /// The full item set was combined; the game is won
    Victory,
    /// The player quit
    Farewell,
    /// The line matched no known command
    UnknownCommand,
}
