//! # Scripted Narrator
//!
//! Deterministic narrator for offline play and tests.

use crate::llm::Narrator;
use crate::LabyrinthResult;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Canned room bodies the scripted narrator hands out.
const SCENES: [&str; 4] = [
    "Dust hangs in the air, and the far wall is lost in shadow. Something \
     was kept here once, though whatever it was left only an outline on the \
     floor.",
    "Light falls in a thin band from somewhere above, picking out worn \
     flagstones and the remains of old furniture pushed against the walls.",
    "The room is quiet in a way that feels deliberate, as if it has been \
     waiting. Faded markings run along the skirting at ankle height.",
    "A draught moves through here with nowhere obvious to come from. The \
     ceiling is lower than it should be, and the corners gather dark.",
];

/// Narrator that writes the same text for the same prompt, every time.
///
/// Stands in for the model server when playing offline and gives tests a
/// collaborator with fully predictable output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedNarrator;

impl ScriptedNarrator {
    /// Creates a scripted narrator.
    pub fn new() -> Self {
        Self
    }
}

impl Narrator for ScriptedNarrator {
    fn generate(&self, prompt: &str) -> LabyrinthResult<String> {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        let scene = SCENES[(hasher.finish() as usize) % SCENES.len()];
        Ok(scene.to_string())
    }
}
