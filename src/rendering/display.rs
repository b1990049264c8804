//! # Display Management
//!
//! Terminal console for the game: clears and centers the intro screen,
//! prints rooms, items, exits, and inventory, renders game events, and reads
//! player commands from stdin.

use crate::config;
use crate::game::{Direction, GameEvent, Item};
use crate::generation::RoomDescription;
use crate::LabyrinthResult;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Title banner shown on the intro screen.
pub const BANNER: &str = r#"
 _           _                _       _   _
| |         | |              (_)     | | | |
| |     __ _| |__  _   _ _ __ _ _ __ | |_| |__
| |    / _` | '_ \| | | | '__| | '_ \| __| '_ \
| |___| (_| | |_) | |_| | |  | | | | | |_| | | |
\_____/\__,_|_.__/ \__, |_|  |_|_| |_|\__|_| |_|
                    __/ |
                   |___/
"#;

/// First intro line under the banner.
pub const SUBTITLE: &str = "An AI generated text-based adventure game.";

/// Second intro line under the banner.
pub const SUBTITLE_GENERATING: &str = "Your game is now generating...";

/// Pads a line with leading spaces so it sits centered in the given width.
///
/// Lines wider than the terminal are left untouched.
pub fn center_line(line: &str, width: usize) -> String {
    let length = line.chars().count();
    if length >= width {
        return line.to_string();
    }
    let padding = (width - length) / 2;
    format!("{}{}", " ".repeat(padding), line)
}

/// Terminal console the game talks to the player through.
pub struct Console;

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Creates a new console.
    pub fn new() -> Self {
        Self
    }

    /// Current terminal width in columns, with a fixed fallback when the
    /// size cannot be queried (e.g. output is piped).
    fn width(&self) -> usize {
        terminal::size()
            .map(|(cols, _rows)| cols as usize)
            .unwrap_or(config::FALLBACK_TERMINAL_WIDTH)
    }

    /// Clears the screen and moves the cursor home.
    pub fn clear(&self) -> LabyrinthResult<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Prints multi-line text centered to the terminal width.
    pub fn print_centered(&self, text: &str) {
        let width = self.width();
        for line in text.lines() {
            println!("{}", center_line(line, width));
        }
    }

    /// Shows the intro screen: banner and subtitles, held briefly, then
    /// cleared away before the first room prints.
    pub fn show_intro(&self) -> LabyrinthResult<()> {
        self.clear()?;
        self.print_centered(BANNER);
        self.print_centered(SUBTITLE);
        self.print_centered(SUBTITLE_GENERATING);
        io::stdout().flush()?;
        thread::sleep(Duration::from_secs(config::INTRO_PAUSE_SECS));
        self.clear()?;
        Ok(())
    }

    /// Prints a room's titled heading and body.
    pub fn print_room(&self, description: &RoomDescription) {
        println!("\n{}", description.title.as_str().bold());
        println!("{}", description.body);
    }

    /// Lists the items lying in the room, if any.
    pub fn print_room_items(&self, items: &[Item]) {
        if items.is_empty() {
            return;
        }
        let names: Vec<String> = items
            .iter()
            .map(|item| item.to_string().bold().to_string())
            .collect();
        println!("\nYou see {} in the room.", names.join(", "));
    }

    /// Lists the directions that lead out of the room.
    pub fn print_directions(&self, directions: &[Direction]) {
        let names: Vec<&str> = directions.iter().map(|direction| direction.name()).collect();
        println!("\nPossible directions: {}", names.join(", "));
    }

    fn print_inventory(&self, items: &[Item]) {
        println!("\nInventory:");
        if items.is_empty() {
            println!("No items in the inventory.");
        } else {
            for item in items {
                println!("- {}", item.to_string().bold());
            }
        }
    }

    /// Renders one game event as player-facing text.
    pub fn render_event(&self, event: &GameEvent) {
        match event {
            // Movement shows up as the next room printing, not as a message.
            GameEvent::Moved { .. } => {}
            GameEvent::MoveBlocked { direction } => {
                println!("You cannot go {} from here.", direction.name());
            }
            GameEvent::ItemPickedUp { item } => {
                println!("\nYou have picked up {}!", item.to_string().bold());
            }
            GameEvent::AllItemsHeld => {
                println!(
                    "\nYou have all the items! Now, {} them to win the game.",
                    "combine".bold()
                );
            }
            GameEvent::ItemNotFound { name } => {
                println!("\nCannot find {name} in the room.");
            }
            GameEvent::InventoryShown { items } => {
                self.print_inventory(items);
            }
            GameEvent::RoomRedisplayed { description } => {
                self.print_room(description);
            }
            GameEvent::CombineRejected => {
                println!("You cannot combine these items.");
            }
            GameEvent::Victory => {
                println!("\nCongratulations, you've won!");
            }
            GameEvent::Farewell => {
                println!("\nYou have left your adventure.");
            }
            GameEvent::UnknownCommand => {
                println!("Unknown command");
            }
        }
    }

    /// Prints the command prompt and reads one line from stdin.
    ///
    /// Returns None once stdin is closed.
    pub fn prompt(&self) -> LabyrinthResult<Option<String>> {
        print!(">");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
