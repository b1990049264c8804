//! # Game State Module
//!
//! Central session state and command execution.
//!
//! This module contains the main GameState struct that owns the player
//! position, the room item lists, the inventory, and the per-room description
//! cache. Commands execute against it and report what happened as game
//! events; turning those events into terminal text belongs to the rendering
//! system.

use crate::config;
use crate::game::{Direction, GameEvent, GridWorld, Item, Position, RoomId};
use crate::generation::{self, RoomDescription};
use crate::input::Command;
use crate::llm::Narrator;
use crate::{LabyrinthError, LabyrinthResult};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Central game state for one play session.
///
/// Created at startup, lives for the process duration, discarded on exit.
/// There is no persistence across runs.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The room grid the session is played on
    pub world: GridWorld,
    /// Current player position
    pub position: Position,
    /// Room the player was in at the end of the previous turn, used to
    /// suppress reprinting a description the player is already looking at
    pub last_room: Option<RoomId>,
    /// Items the player carries, in pickup order
    pub inventory: Vec<Item>,
    /// Items currently lying in each room
    pub room_items: HashMap<RoomId, Vec<Item>>,
    /// Cached room descriptions; each entry is written at most once
    pub descriptions: HashMap<RoomId, RoomDescription>,
    /// Whether the session is still running, won, or quit
    pub completion_state: CompletionState,
    /// Play statistics for the session
    pub statistics: GameStatistics,
    /// Seed the session RNG was created from
    pub rng_seed: u64,
    rng: StdRng,
}

/// Session completion state; the game loop runs while this is `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionState {
    /// The game is still in progress
    Playing,
    /// The full item set was combined
    Won,
    /// The player left the game
    Quit,
}

/// Play statistics tracked across a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Number of successful room-to-room moves
    pub steps_taken: u64,
    /// Number of items picked up
    pub items_collected: u32,
    /// Number of room descriptions generated
    pub rooms_described: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self {
            steps_taken: 0,
            items_collected: 0,
            rooms_described: 0,
        }
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Moved { .. } => {
                self.steps_taken += 1;
            }
            GameEvent::ItemPickedUp { .. } => {
                self.items_collected += 1;
            }
            _ => {}
        }
    }
}

impl Default for GameStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new session on the default grid, with items scattered.
    ///
    /// The same seed reproduces the same item layout and room theming.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{CompletionState, GameState, Position};
    ///
    /// let state = GameState::new(12345);
    /// assert_eq!(state.position, Position::new(2, 2));
    /// assert!(state.inventory.is_empty());
    /// assert_eq!(state.completion_state, CompletionState::Playing);
    /// ```
    pub fn new(seed: u64) -> Self {
        let world = GridWorld::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let room_items = Self::scatter_items(&world, &mut rng);

        Self {
            world,
            position: Position::new(config::START_ROW, config::START_COL),
            last_room: None,
            inventory: Vec::new(),
            room_items,
            descriptions: HashMap::new(),
            completion_state: CompletionState::Playing,
            statistics: GameStatistics::new(),
            rng_seed: seed,
            rng,
        }
    }

    /// Scatters the item set across the grid, visiting every room once in
    /// row-major order.
    ///
    /// Each still-unplaced item gets an independent draw per room and lands
    /// there when the draw is under the scatter chance. The scatter is
    /// best-effort: an item can finish the pass unplaced and simply not exist
    /// in that session. That looseness is part of the game's character and is
    /// deliberately kept.
    fn scatter_items(world: &GridWorld, rng: &mut StdRng) -> HashMap<RoomId, Vec<Item>> {
        let mut room_items: HashMap<RoomId, Vec<Item>> = HashMap::new();
        let mut placed: HashSet<Item> = HashSet::new();

        for row in 0..world.height {
            for col in 0..world.width {
                let room = Position::new(row, col).room_id();
                let items = room_items.entry(room).or_default();
                for item in Item::all() {
                    if !placed.contains(&item) && rng.gen::<f64>() < config::ITEM_SCATTER_CHANCE {
                        items.push(item);
                        placed.insert(item);
                    }
                }
            }
        }

        debug!("scattered {} of {} items", placed.len(), Item::all().len());
        room_items
    }

    /// Derives the identifier of the room the player is standing in.
    pub fn current_room_id(&self) -> RoomId {
        self.position.room_id()
    }

    /// Returns the items lying in the player's current room.
    pub fn items_in_current_room(&self) -> &[Item] {
        self.room_items
            .get(&self.current_room_id())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lists the directions that lead out of the current room.
    pub fn open_directions(&self) -> Vec<Direction> {
        self.world.open_directions(self.position)
    }

    /// Whether the game loop should keep running.
    pub fn is_playing(&self) -> bool {
        self.completion_state == CompletionState::Playing
    }

    /// Returns the current room's description, generating it on first visit.
    ///
    /// The narrator is consulted at most once per room; revisits reuse the
    /// cached pair unchanged.
    pub fn describe_current_room(
        &mut self,
        narrator: &dyn Narrator,
    ) -> LabyrinthResult<RoomDescription> {
        let room = self.current_room_id();
        if !self.descriptions.contains_key(&room) {
            let description = generation::describe_room(&mut self.rng, narrator)?;
            debug!("generated description for {room}: {}", description.title);
            self.statistics.rooms_described += 1;
            self.descriptions.insert(room.clone(), description);
        }
        Ok(self.descriptions[&room].clone())
    }

    /// Executes one parsed command and reports what happened.
    ///
    /// Rejected commands are not errors; they come back as informational
    /// events with the player-facing reason. The description cache is never
    /// touched from here.
    pub fn execute(&mut self, command: Command) -> LabyrinthResult<Vec<GameEvent>> {
        let events = match command {
            Command::Move(direction) => self.try_move(direction),
            Command::PickUp(name) => self.pick_up(&name),
            Command::ShowInventory => vec![GameEvent::InventoryShown {
                items: self.inventory.clone(),
            }],
            Command::Look => self.look()?,
            Command::Combine(names) => self.combine(&names),
            Command::Quit => {
                self.completion_state = CompletionState::Quit;
                vec![GameEvent::Farewell]
            }
            Command::Unknown => vec![GameEvent::UnknownCommand],
        };

        for event in &events {
            self.statistics.update_from_event(event);
        }
        Ok(events)
    }

    fn try_move(&mut self, direction: Direction) -> Vec<GameEvent> {
        match self.world.step(self.position, direction) {
            Some(next) => {
                self.position = next;
                vec![GameEvent::Moved { to: next }]
            }
            None => vec![GameEvent::MoveBlocked { direction }],
        }
    }

    fn pick_up(&mut self, name: &str) -> Vec<GameEvent> {
        let not_found = || {
            vec![GameEvent::ItemNotFound {
                name: name.to_string(),
            }]
        };

        let Some(item) = Item::from_token(name) else {
            return not_found();
        };
        let room = self.current_room_id();
        let Some(items) = self.room_items.get_mut(&room) else {
            return not_found();
        };
        let Some(index) = items.iter().position(|&present| present == item) else {
            return not_found();
        };

        items.remove(index);
        self.inventory.push(item);

        let mut events = vec![GameEvent::ItemPickedUp { item }];
        if self.inventory.len() == Item::all().len() {
            events.push(GameEvent::AllItemsHeld);
        }
        events
    }

    fn look(&self) -> LabyrinthResult<Vec<GameEvent>> {
        let room = self.current_room_id();
        let description = self
            .descriptions
            .get(&room)
            .cloned()
            .ok_or_else(|| LabyrinthError::InvalidState(format!("no description cached for {room}")))?;
        Ok(vec![GameEvent::RoomRedisplayed { description }])
    }

    /// Wins iff the offered tokens, the inventory, and the full item set are
    /// all equal as sets. Ordering is irrelevant and duplicates collapse.
    fn combine(&mut self, names: &[String]) -> Vec<GameEvent> {
        let mut offered: HashSet<Item> = HashSet::new();
        for name in names {
            match Item::from_token(name) {
                Some(item) => {
                    offered.insert(item);
                }
                None => return vec![GameEvent::CombineRejected],
            }
        }

        let held: HashSet<Item> = self.inventory.iter().copied().collect();
        let all: HashSet<Item> = Item::all().into_iter().collect();
        if offered == held && offered == all {
            self.completion_state = CompletionState::Won;
            vec![GameEvent::Victory]
        } else {
            vec![GameEvent::CombineRejected]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ScriptedNarrator;
    use std::cell::Cell;

    /// Narrator that counts how often it is consulted.
    struct CountingNarrator {
        calls: Cell<usize>,
    }

    impl CountingNarrator {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl Narrator for CountingNarrator {
        fn generate(&self, _prompt: &str) -> LabyrinthResult<String> {
            self.calls.set(self.calls.get() + 1);
            Ok("A bare test chamber.".to_string())
        }
    }

    /// Session with the random scatter emptied out, so tests can stage item
    /// layouts by hand.
    fn empty_session(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        for items in state.room_items.values_mut() {
            items.clear();
        }
        state
    }

    fn occurrences(state: &GameState, item: Item) -> usize {
        let in_rooms: usize = state
            .room_items
            .values()
            .map(|items| items.iter().filter(|&&present| present == item).count())
            .sum();
        let in_inventory = state
            .inventory
            .iter()
            .filter(|&&held| held == item)
            .count();
        in_rooms + in_inventory
    }

    #[test]
    fn test_new_session_starts_at_center_with_empty_inventory() {
        let state = GameState::new(7);
        assert_eq!(state.position, Position::new(2, 2));
        assert!(state.inventory.is_empty());
        assert!(state.last_room.is_none());
        assert!(state.is_playing());
    }

    #[test]
    fn test_scatter_places_each_item_at_most_once() {
        for seed in 0..200 {
            let state = GameState::new(seed);
            for item in Item::all() {
                assert!(
                    occurrences(&state, item) <= 1,
                    "seed {seed} placed {item} more than once"
                );
            }
        }
    }

    #[test]
    fn test_scatter_is_reproducible_per_seed() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(a.room_items, b.room_items);
    }

    #[test]
    fn test_move_updates_position_and_statistics() {
        let mut state = GameState::new(1);
        let events = state.execute(Command::Move(Direction::North)).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::Moved {
                to: Position::new(1, 2)
            }]
        );
        assert_eq!(state.statistics.steps_taken, 1);
    }

    #[test]
    fn test_blocked_move_leaves_position_alone() {
        let mut state = GameState::new(1);
        state.position = Position::new(0, 2);
        let events = state.execute(Command::Move(Direction::North)).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::MoveBlocked {
                direction: Direction::North
            }]
        );
        assert_eq!(state.position, Position::new(0, 2));
        assert_eq!(state.statistics.steps_taken, 0);
    }

    #[test]
    fn test_pickup_moves_item_exactly_once() {
        let mut state = empty_session(1);
        let room = state.current_room_id();
        state.room_items.get_mut(&room).unwrap().push(Item::Lamp);

        let events = state.execute(Command::PickUp("lamp".to_string())).unwrap();
        assert_eq!(events, vec![GameEvent::ItemPickedUp { item: Item::Lamp }]);
        assert_eq!(state.inventory, vec![Item::Lamp]);
        assert_eq!(occurrences(&state, Item::Lamp), 1);

        // The lamp is gone from the room now
        let events = state.execute(Command::PickUp("lamp".to_string())).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::ItemNotFound {
                name: "lamp".to_string()
            }]
        );
        assert_eq!(state.inventory, vec![Item::Lamp]);
    }

    #[test]
    fn test_pickup_of_nonsense_names_the_request() {
        let mut state = GameState::new(1);
        let events = state.execute(Command::PickUp("sword".to_string())).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::ItemNotFound {
                name: "sword".to_string()
            }]
        );
    }

    #[test]
    fn test_collecting_everything_announces_the_win_path() {
        let mut state = empty_session(1);
        let room = state.current_room_id();
        state
            .room_items
            .get_mut(&room)
            .unwrap()
            .extend(Item::all());

        for item in [Item::Matches, Item::Gas] {
            let events = state.execute(Command::PickUp(item.name().to_string())).unwrap();
            assert_eq!(events, vec![GameEvent::ItemPickedUp { item }]);
        }
        let events = state.execute(Command::PickUp("lamp".to_string())).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::ItemPickedUp { item: Item::Lamp },
                GameEvent::AllItemsHeld
            ]
        );
        assert_eq!(state.statistics.items_collected, 3);
    }

    #[test]
    fn test_combine_requires_the_full_set() {
        let mut state = empty_session(1);
        state.inventory = vec![Item::Matches, Item::Gas];

        let names = vec!["matches".to_string(), "gas".to_string()];
        let events = state.execute(Command::Combine(names)).unwrap();
        assert_eq!(events, vec![GameEvent::CombineRejected]);
        assert!(state.is_playing());
    }

    #[test]
    fn test_combine_ignores_token_order() {
        let mut state = empty_session(1);
        state.inventory = vec![Item::Matches, Item::Gas, Item::Lamp];

        let names = vec![
            "lamp".to_string(),
            "gas".to_string(),
            "matches".to_string(),
        ];
        let events = state.execute(Command::Combine(names)).unwrap();
        assert_eq!(events, vec![GameEvent::Victory]);
        assert_eq!(state.completion_state, CompletionState::Won);
    }

    #[test]
    fn test_combine_rejects_unknown_tokens() {
        let mut state = empty_session(1);
        state.inventory = vec![Item::Matches, Item::Gas, Item::Lamp];

        let names = vec!["lamp".to_string(), "gas".to_string(), "rope".to_string()];
        let events = state.execute(Command::Combine(names)).unwrap();
        assert_eq!(events, vec![GameEvent::CombineRejected]);
        assert!(state.is_playing());
    }

    #[test]
    fn test_quit_ends_the_session() {
        let mut state = GameState::new(1);
        let events = state.execute(Command::Quit).unwrap();
        assert_eq!(events, vec![GameEvent::Farewell]);
        assert_eq!(state.completion_state, CompletionState::Quit);
    }

    #[test]
    fn test_descriptions_generate_once_per_room() {
        let mut state = GameState::new(1);
        let narrator = CountingNarrator::new();

        let first = state.describe_current_room(&narrator).unwrap();
        let second = state.describe_current_room(&narrator).unwrap();
        assert_eq!(first, second);
        assert_eq!(narrator.calls.get(), 1);

        // Leaving and coming back still reuses the cache
        state.execute(Command::Move(Direction::North)).unwrap();
        state.describe_current_room(&narrator).unwrap();
        state.execute(Command::Move(Direction::South)).unwrap();
        state.describe_current_room(&narrator).unwrap();
        assert_eq!(narrator.calls.get(), 2);
        assert_eq!(state.statistics.rooms_described, 2);
    }

    #[test]
    fn test_look_replays_the_cached_description() {
        let mut state = GameState::new(1);
        let narrator = ScriptedNarrator::new();
        let description = state.describe_current_room(&narrator).unwrap();

        let events = state.execute(Command::Look).unwrap();
        assert_eq!(events, vec![GameEvent::RoomRedisplayed { description }]);
    }

    #[test]
    fn test_unknown_command_changes_nothing() {
        let mut state = GameState::new(1);
        let before = state.clone();
        let events = state.execute(Command::Unknown).unwrap();
        assert_eq!(events, vec![GameEvent::UnknownCommand]);
        assert_eq!(state.position, before.position);
        assert_eq!(state.inventory, before.inventory);
        assert_eq!(state.room_items, before.room_items);
    }
}
