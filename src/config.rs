use std::time::Duration;

use ratatui::style::Color;

use crate::grid::{Cell, GridSize};

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 15;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Smallest board side accepted on the command line.
pub const MIN_GRID_SIDE: u16 = 5;

/// Largest board side accepted on the command line.
pub const MAX_GRID_SIDE: u16 = 64;

/// Nominal pixel size of one cell.
pub const CELL_SIZE: u16 = 30;

/// Cell every run starts from.
pub const DEFAULT_START_CELL: Cell = Cell::new(9, 9);

/// Time between snake updates in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 700;

/// Delay between the fatal frame and the game-over notification.
pub const GAME_OVER_NOTICE_DELAY_MS: u64 = 50;

/// Display frame length; also the input poll timeout.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Store key holding the high score.
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Checkerboard colors for the play field.
pub const FIELD_LIGHT: Color = Color::Rgb(0x82, 0xe8, 0x5d);
pub const FIELD_DARK: Color = Color::Rgb(0x66, 0xb5, 0x49);

pub const SNAKE_HEAD: Color = Color::Rgb(0x1b, 0x5e, 0x20);
pub const SNAKE_BODY: Color = Color::Rgb(0x2e, 0x7d, 0x32);
pub const FRUIT: Color = Color::Red;

/// Two terminal columns per cell keep cells roughly square.
pub const GLYPH_CELL: &str = "██";
pub const GLYPH_FRUIT: &str = "●●";
pub const GLYPH_HEAD: &str = "▓▓";

/// Tunables for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub start: Cell,
    pub tick_interval: Duration,
    pub game_over_notice_delay: Duration,
}

impl GameConfig {
    /// Builds a config for `grid`, falling back to the grid centre when the
    /// default start cell does not fit.
    #[must_use]
    pub fn for_grid(grid: GridSize) -> Self {
        let start = if grid.in_bounds(DEFAULT_START_CELL) {
            DEFAULT_START_CELL
        } else {
            grid.center()
        };

        Self {
            grid,
            start,
            ..Self::default()
        }
    }

    /// Replaces the tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
                cell_size: CELL_SIZE,
            },
            start: DEFAULT_START_CELL,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            game_over_notice_delay: Duration::from_millis(GAME_OVER_NOTICE_DELAY_MS),
        }
    }
}
