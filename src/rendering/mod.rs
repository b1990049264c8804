//! # Rendering Module
//!
//! Terminal output: the intro banner, room and inventory listings, and the
//! command prompt, using crossterm for screen control and emphasis.

pub mod display;

pub use display::*;
