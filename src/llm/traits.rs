//! # Narrator Trait
//!
//! The narrow capability interface between the game and whatever produces
//! its prose.

use crate::LabyrinthResult;

/// A source of descriptive text.
///
/// Implementations take a complete prompt and return the generated body
/// text. The game holds no opinion about how the text is produced, only that
/// the call is synchronous.
pub trait Narrator {
    /// Generates descriptive text for the given prompt.
    fn generate(&self, prompt: &str) -> LabyrinthResult<String>;
}
