use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use tick_snake::config::{
    CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS,
    FRAME_INTERVAL_MS, GameConfig, HIGH_SCORE_KEY, MAX_GRID_SIDE, MIN_GRID_SIDE,
};
use tick_snake::error::Result;
use tick_snake::game::GameState;
use tick_snake::grid::GridSize;
use tick_snake::input::{GameInput, InputHandler};
use tick_snake::logger;
use tick_snake::score::{JsonScoreStore, ScoreStore, scores_path};
use tick_snake::session::Session;
use tick_snake::terminal_runtime::{TerminalFrontend, TerminalSession, restore_terminal};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, value_parser = grid_side_parser())]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, value_parser = grid_side_parser())]
    height: u16,

    /// Milliseconds between snake moves.
    #[arg(long = "speed-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    speed_ms: u64,

    /// Seed for fruit placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file (defaults to the platform data directory).
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Log file (defaults to the platform cache directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn grid_side_parser() -> clap::builder::RangedI64ValueParser<u16> {
    clap::value_parser!(u16).range(i64::from(MIN_GRID_SIDE)..=i64::from(MAX_GRID_SIDE))
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logger::default_log_path);
    if let Err(error) = logger::init(&log_path, cli.log_level.into()) {
        eprintln!("Logging disabled: {error}");
    }

    let store = open_store(cli.scores_file.clone().unwrap_or_else(scores_path));

    install_panic_hook();
    run(&cli, store)
}

/// Loads the score file before raw mode so a broken file can be reported.
fn open_store(path: PathBuf) -> JsonScoreStore {
    match JsonScoreStore::open(&path) {
        Ok(store) => store,
        Err(error) => {
            eprintln!("Warning: {error}; starting with a high score of 0");
            log::warn!("ignoring unreadable score file: {error}");
            JsonScoreStore::empty(path)
        }
    }
}

fn run(cli: &Cli, store: JsonScoreStore) -> Result<()> {
    let grid = GridSize {
        width: cli.width,
        height: cli.height,
        cell_size: CELL_SIZE,
    };
    let config =
        GameConfig::for_grid(grid).with_tick_interval(Duration::from_millis(cli.speed_ms));
    let high_score = store.get(HIGH_SCORE_KEY);

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, high_score, seed),
        None => GameState::new(config, high_score),
    };
    let mut session = Session::new(state, store);
    let mut frontend = TerminalFrontend::new(TerminalSession::enter()?, high_score);
    let mut input = InputHandler::new();

    log::info!(
        "starting {}x{} board, tick {} ms, high score {high_score}",
        grid.width,
        grid.height,
        cli.speed_ms
    );

    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let clock = Instant::now();
    loop {
        if let Some(game_input) = input.poll_input(frame_interval)? {
            if game_input == GameInput::Quit {
                break;
            }

            // The game-over notice is modal: the key that closes it does nothing else.
            if !frontend.dismiss_notice() {
                session.handle_input(game_input, clock.elapsed());
            }
        }

        session.frame(clock.elapsed(), &mut frontend)?;
    }

    log::info!("exiting, high score {}", session.state().high_score);
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
