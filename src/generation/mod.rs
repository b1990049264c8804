//! # Generation Module
//!
//! Room description generation: random theme and modifier selection composed
//! into a natural-language prompt for the narrator.
//!
//! Each room is described along two axes drawn at generation time: a theme
//! ("gothic", "underwater", ...) and a single modifier word taken from one of
//! three modifier axes (mood, size, weather). The narrator turns the composed
//! prompt into the room's body text; the title is derived from the theme
//! alone.

use crate::llm::Narrator;
use crate::LabyrinthResult;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Themes a room can be built around.
pub const THEMES: [&str; 40] = [
    "mysterious",
    "spooky",
    "sombre",
    "abandoned",
    "enchanting",
    "bizarre",
    "rustic",
    "futuristic",
    "vintage",
    "tropical",
    "arctic",
    "underwater",
    "celestial",
    "royal",
    "minimalist",
    "urban",
    "industrial",
    "floral",
    "gothic",
    "fairytale",
    "western",
    "post-apocalyptic",
    "medieval",
    "Asian-inspired",
    "jungle",
    "space",
    "victorian",
    "pirate",
    "exotic",
    "farmhouse",
    "ocean",
    "desert",
    "rainforest",
    "cave",
    "nautical",
    "alpine",
    "beach",
    "magic",
    "jazz",
    "steampunk",
];

/// Mood words for the mood modifier axis.
pub const MOODS: [&str; 8] = [
    "cheerful", "mournful", "tranquil", "chaotic", "serene", "eerie", "tense", "mystical",
];

/// Size words for the size modifier axis.
pub const SIZES: [&str; 8] = [
    "spacious", "compact", "vast", "tiny", "roomy", "cramped", "immense", "cosy",
];

/// Weather words for the weather modifier axis.
pub const WEATHERS: [&str; 8] = [
    "stormy", "sunny", "rainy", "foggy", "windy", "snowy", "cloudy", "starlit",
];

/// The modifier axes a room description can draw from.
///
/// One axis is chosen per room, then one word from that axis's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierAxis {
    Mood,
    Size,
    Weather,
}

impl ModifierAxis {
    /// Returns all modifier axes.
    pub fn all() -> Vec<ModifierAxis> {
        vec![ModifierAxis::Mood, ModifierAxis::Size, ModifierAxis::Weather]
    }

    /// Returns the word list for this axis.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            ModifierAxis::Mood => &MOODS,
            ModifierAxis::Size => &SIZES,
            ModifierAxis::Weather => &WEATHERS,
        }
    }
}

/// A generated room description: a titled heading and the narrated body.
///
/// Written once per room and cached for the process lifetime; never
/// regenerated or mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDescription {
    pub title: String,
    pub body: String,
}

/// Composes the narrator prompt for a room.
///
/// # Examples
///
/// ```
/// use labyrinth::generation::compose_prompt;
///
/// assert_eq!(
///     compose_prompt("foggy", "gothic"),
///     "Describe a scene in a foggy gothic room."
/// );
/// ```
pub fn compose_prompt(modifier: &str, theme: &str) -> String {
    format!("Describe a scene in a {modifier} {theme} room.")
}

/// Builds the titled heading shown above a room's body text.
pub fn room_title(theme: &str) -> String {
    format!("A {} Room", title_case(theme))
}

/// Capitalizes each space- or hyphen-separated chunk of a theme name.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch == ' ' || ch == '-';
    }
    out
}

/// Generates a fresh room description by drawing a theme and a modifier and
/// consulting the narrator.
///
/// Callers are responsible for caching; this function always generates.
pub fn describe_room(
    rng: &mut StdRng,
    narrator: &dyn Narrator,
) -> LabyrinthResult<RoomDescription> {
    // The lists are non-empty constants, so the draws cannot fail.
    let theme = THEMES.choose(rng).copied().unwrap_or(THEMES[0]);
    let axis = *ModifierAxis::all().choose(rng).unwrap_or(&ModifierAxis::Mood);
    let modifier = axis.words().choose(rng).copied().unwrap_or(axis.words()[0]);

    let prompt = compose_prompt(modifier, theme);
    let body = narrator.generate(&prompt)?;

    Ok(RoomDescription {
        title: room_title(theme),
        body,
    })
}
