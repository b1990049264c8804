//! # Labyrinth
//!
//! A terminal text adventure played on a 5×5 grid of rooms, where every room's
//! description is written on first visit by a local language model.
//!
//! ## Architecture Overview
//!
//! Labyrinth is a small, single-threaded game built around a few core pieces:
//!
//! - **Game State**: the session object owning the player position, room
//!   contents, inventory, and the per-room description cache
//! - **Grid World**: coordinate space, room identity, and boundary checks
//! - **Command Interpreter**: line-oriented command parsing and dispatch,
//!   producing typed game events
//! - **Generation System**: theme and modifier selection composed into prompts
//!   for the narrator
//! - **Narrator**: the prompt-in, text-out capability the game is a client of,
//!   backed by a local model server or a deterministic offline stand-in
//! - **Rendering System**: terminal output using crossterm
//!
//! The game loop is strictly synchronous: one room, one prompt, one command per
//! turn. Room descriptions are generated at most once per room and cached for
//! the lifetime of the process.

pub mod game;
pub mod generation;
pub mod input;
pub mod llm;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use llm::*;
pub use rendering::*;

/// Core error type for the Labyrinth game.
#[derive(thiserror::Error, Debug)]
pub enum LabyrinthError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Narrator request could not be sent or read
    #[error("narrator request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Narrator endpoint answered with an error status
    #[error("narrator API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Game state is invalid
    #[error("invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Labyrinth codebase.
pub type LabyrinthResult<T> = Result<T, LabyrinthError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Grid width in rooms
    pub const GRID_WIDTH: i32 = 5;

    /// Grid height in rooms
    pub const GRID_HEIGHT: i32 = 5;

    /// Starting row, the center of the grid
    pub const START_ROW: i32 = 2;

    /// Starting column, the center of the grid
    pub const START_COL: i32 = 2;

    /// Per-room chance that a still-unplaced item lands in the room being seeded
    pub const ITEM_SCATTER_CHANCE: f64 = 0.1;

    /// Default maximum tokens per generated room description
    pub const DEFAULT_MAX_TOKENS: u32 = 512;

    /// Default prompt batch size passed to the model server
    pub const DEFAULT_BATCH_SIZE: u32 = 16;

    /// Terminal width assumed when the real size cannot be queried
    pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

    /// Seconds the intro screen stays up before the game begins
    pub const INTRO_PAUSE_SECS: u64 = 5;
}
