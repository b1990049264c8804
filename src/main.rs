//! # Labyrinth Main Entry Point
//!
//! Parses the command line, wires up logging and the narrator, and runs the
//! turn loop until the player wins or quits.

use clap::Parser;
use labyrinth::{
    config, parse_command, Console, GameState, LabyrinthResult, Narrator, NarratorConfig,
    OllamaNarrator, ScriptedNarrator,
};
use log::{info, LevelFilter};

/// Command line arguments for Labyrinth.
#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(about = "A terminal text adventure where every room is narrated by a local language model")]
#[command(version)]
struct Args {
    /// Random seed for item placement and room theming
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the local model server
    #[arg(long, default_value = "http://localhost:11434")]
    endpoint: String,

    /// Model to request from the server
    #[arg(long, default_value = "llama3")]
    model: String,

    /// Maximum tokens per room description
    #[arg(long, default_value_t = config::DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Prompt batch size passed to the model server
    #[arg(long, default_value_t = config::DEFAULT_BATCH_SIZE)]
    batch_size: u32,

    /// Log narrator prompts and replies at debug level
    #[arg(long)]
    verbose_narrator: bool,

    /// Play without a model server, using canned room text
    #[arg(long)]
    offline: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> LabyrinthResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Labyrinth v{}", labyrinth::VERSION);

    let narrator: Box<dyn Narrator> = if args.offline {
        info!("Running offline with the scripted narrator");
        Box::new(ScriptedNarrator::new())
    } else {
        Box::new(OllamaNarrator::new(NarratorConfig {
            endpoint: args.endpoint.clone(),
            model: args.model.clone(),
            max_tokens: args.max_tokens,
            batch_size: args.batch_size,
            verbose: args.verbose_narrator,
        }))
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {seed}");

    let mut state = GameState::new(seed);
    let console = Console::new();
    console.show_intro()?;

    run_game_loop(&mut state, narrator.as_ref(), &console)
}

/// Initializes the logging system based on the requested level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Runs one turn per iteration until the session leaves the playing state.
fn run_game_loop(
    state: &mut GameState,
    narrator: &dyn Narrator,
    console: &Console,
) -> LabyrinthResult<()> {
    loop {
        let room = state.current_room_id();
        let description = state.describe_current_room(narrator)?;

        if state.last_room.as_deref() != Some(room.as_str()) {
            console.print_room(&description);
        }
        console.print_room_items(state.items_in_current_room());
        console.print_directions(&state.open_directions());

        let Some(line) = console.prompt()? else {
            info!("stdin closed, leaving the game");
            break;
        };

        let events = state.execute(parse_command(&line))?;
        for event in &events {
            console.render_event(event);
        }

        state.last_room = Some(room);
        if !state.is_playing() {
            break;
        }
    }

    info!(
        "Session over: {} steps, {} items collected, {} rooms described",
        state.statistics.steps_taken,
        state.statistics.items_collected,
        state.statistics.rooms_described
    );
    Ok(())
}
