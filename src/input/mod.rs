//! # Input Module
//!
//! Line-oriented command parsing.
//!
//! Parsing is exact-token matching on the lowercased, whitespace-split line.
//! Command words never match by prefix, so `go` does not trigger the `g`
//! pickup alias and `grab` is simply unknown. Pickup forms take their item
//! as the last token, so `get the lamp` still reads naturally.

use crate::game::Direction;

/// A parsed player command, ready to execute against the game state.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Walk one room in a direction
    Move(Direction),
    /// Pick up the named thing from the current room
    PickUp(String),
    /// Show the inventory
    ShowInventory,
    /// Reprint the current room's description
    Look,
    /// Offer a set of item names as the winning combination
    Combine(Vec<String>),
    /// Leave the game
    Quit,
    /// The line matched nothing the game understands
    Unknown,
}

/// Parses one input line into a command.
///
/// # Examples
///
/// ```
/// use labyrinth::{parse_command, Command, Direction};
///
/// assert_eq!(parse_command("n"), Command::Move(Direction::North));
/// assert_eq!(parse_command("get lamp"), Command::PickUp("lamp".to_string()));
/// assert_eq!(parse_command("go"), Command::Unknown);
/// ```
pub fn parse_command(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Command::Unknown,
        [token] => {
            if let Some(direction) = Direction::from_token(token) {
                return Command::Move(direction);
            }
            match *token {
                "i" | "inv" | "inventory" => Command::ShowInventory,
                "l" | "look" => Command::Look,
                "q" | "quit" | "exit" => Command::Quit,
                "combine" | "c" => Command::Combine(Vec::new()),
                _ => Command::Unknown,
            }
        }
        ["pick", "up", rest @ ..] if !rest.is_empty() => {
            Command::PickUp(rest[rest.len() - 1].to_string())
        }
        ["get" | "g", rest @ ..] if !rest.is_empty() => {
            Command::PickUp(rest[rest.len() - 1].to_string())
        }
        ["combine" | "c", rest @ ..] => {
            Command::Combine(rest.iter().map(|token| token.to_string()).collect())
        }
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_letters_move() {
        assert_eq!(parse_command("n"), Command::Move(Direction::North));
        assert_eq!(parse_command("s"), Command::Move(Direction::South));
        assert_eq!(parse_command("e"), Command::Move(Direction::East));
        assert_eq!(parse_command("w"), Command::Move(Direction::West));
    }

    #[test]
    fn test_input_is_case_and_whitespace_insensitive() {
        assert_eq!(parse_command("  N "), Command::Move(Direction::North));
        assert_eq!(
            parse_command("Get LAMP"),
            Command::PickUp("lamp".to_string())
        );
    }

    #[test]
    fn test_pickup_forms_take_the_last_token() {
        assert_eq!(
            parse_command("pick up lamp"),
            Command::PickUp("lamp".to_string())
        );
        assert_eq!(
            parse_command("get the lamp"),
            Command::PickUp("lamp".to_string())
        );
        assert_eq!(parse_command("g gas"), Command::PickUp("gas".to_string()));
    }

    #[test]
    fn test_pickup_needs_an_item() {
        assert_eq!(parse_command("pick up"), Command::Unknown);
        assert_eq!(parse_command("get"), Command::Unknown);
        assert_eq!(parse_command("g"), Command::Unknown);
    }

    #[test]
    fn test_go_is_not_a_pickup() {
        // Exact-token matching: `go` shares a first letter with `g` and
        // nothing else.
        assert_eq!(parse_command("go"), Command::Unknown);
        assert_eq!(parse_command("grab lamp"), Command::Unknown);
    }

    #[test]
    fn test_inventory_aliases() {
        assert_eq!(parse_command("i"), Command::ShowInventory);
        assert_eq!(parse_command("inv"), Command::ShowInventory);
        assert_eq!(parse_command("inventory"), Command::ShowInventory);
    }

    #[test]
    fn test_look_aliases() {
        assert_eq!(parse_command("l"), Command::Look);
        assert_eq!(parse_command("look"), Command::Look);
    }

    #[test]
    fn test_combine_collects_the_remaining_tokens() {
        assert_eq!(
            parse_command("combine gas matches lamp"),
            Command::Combine(vec![
                "gas".to_string(),
                "matches".to_string(),
                "lamp".to_string()
            ])
        );
        assert_eq!(
            parse_command("c lamp gas"),
            Command::Combine(vec!["lamp".to_string(), "gas".to_string()])
        );
        assert_eq!(parse_command("combine"), Command::Combine(Vec::new()));
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn test_everything_else_is_unknown() {
        assert_eq!(parse_command(""), Command::Unknown);
        assert_eq!(parse_command("dance"), Command::Unknown);
        assert_eq!(parse_command("north"), Command::Unknown);
        assert_eq!(parse_command("ne"), Command::Unknown);
    }
}
