use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, HIGH_SCORE_KEY};
use crate::food::spawn_fruit;
use crate::grid::{Cell, GridSize};
use crate::input::{Direction, direction_change_is_valid};
use crate::score::ScoreStore;
use crate::snake::Snake;

/// Lifecycle of one play session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// What ended the last run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    Moved,
    Ate,
}

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub fruit: Cell,
    pub grid: GridSize,
    pub status: GameStatus,
    pub direction: Option<Direction>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Cell,
    pub direction: Option<Direction>,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub collision: Option<Collision>,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates an idle state with an entropy-seeded fruit spawner.
    #[must_use]
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self::with_rng(config, high_score, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, high_score: u32, seed: u64) -> Self {
        Self::with_rng(config, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, high_score: u32, mut rng: StdRng) -> Self {
        let snake = Snake::new(config.start);
        let fruit = spawn_fruit(&mut rng, config.grid, &snake);

        Self {
            snake,
            fruit,
            direction: None,
            score: 0,
            high_score,
            status: GameStatus::Idle,
            collision: None,
            config,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.config.grid
    }

    /// Puts snake, direction, score and collision back to their run-start
    /// values. The fruit is left where it is.
    pub fn reset_run(&mut self) {
        self.snake = Snake::new(self.config.start);
        self.direction = None;
        self.score = 0;
        self.collision = None;
    }

    /// Moves the fruit to a random cell the snake does not cover.
    pub fn respawn_fruit(&mut self) {
        self.fruit = spawn_fruit(&mut self.rng, self.config.grid, &self.snake);
    }

    /// Changes direction unless it would turn the snake back onto itself.
    ///
    /// Returns whether the change was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        self.direction = Some(direction);
        true
    }

    /// Advances the snake one cell and handles fruit capture.
    ///
    /// When the grown snake covers every cell there is nowhere to respawn, so
    /// the fruit stays put and the full snake stops growing.
    ///
    /// Bounds and self-intersection are left to [`GameState::check_collision`].
    pub fn step(&mut self, store: &mut dyn ScoreStore) -> StepOutcome {
        let new_head = self.snake.head().offset(self.direction);
        self.snake.push_head(new_head);

        if new_head != self.fruit || self.snake.len() > self.config.grid.total_cells() {
            self.snake.pop_tail();
            return StepOutcome::Moved;
        }

        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        store.set(HIGH_SCORE_KEY, self.high_score);

        if self.snake.len() >= self.config.grid.total_cells() {
            log::warn!("board is full, fruit left under the snake");
        } else {
            self.respawn_fruit();
        }

        StepOutcome::Ate
    }

    /// Ends the run when the head left the board or hit the body.
    ///
    /// Returns true only on the call that performed the transition; once the
    /// game is over this is a no-op.
    pub fn check_collision(&mut self) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }

        let Some(collision) = detect_collision(&self.snake, self.config.grid) else {
            return false;
        };

        self.collision = Some(collision);
        self.status = GameStatus::GameOver;
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            fruit: self.fruit,
            grid: self.config.grid,
            status: self.status,
            direction: self.direction,
        }
    }
}

/// Classifies the snake's head position against walls and its own body.
#[must_use]
pub fn detect_collision(snake: &Snake, grid: GridSize) -> Option<Collision> {
    if !grid.in_bounds(snake.head()) {
        return Some(Collision::Wall);
    }

    if snake.head_overlaps_body() {
        return Some(Collision::SelfHit);
    }

    None
}
