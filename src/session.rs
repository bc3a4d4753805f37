use std::time::Duration;

use crate::error::Result;
use crate::game::{GameState, GameStatus, Snapshot, StepOutcome};
use crate::input::GameInput;
use crate::scheduler::{Frame, TickScheduler};
use crate::score::ScoreStore;

/// Output side of the game: drawing, score display and the end-of-run notice.
pub trait Frontend {
    /// Draws one frame from a read-only view of the state.
    fn render(&mut self, snapshot: Snapshot<'_>) -> Result<()>;

    /// Updates the score display. Called once per logic tick.
    fn show_scores(&mut self, score: u32, high_score: u32);

    /// Surfaces the end-of-run message.
    fn notify_game_over(&mut self, score: u32, high_score: u32);
}

/// Owns the game state and drives its lifecycle.
///
/// Inputs request transitions through [`Session::handle_input`]; the host
/// calls [`Session::frame`] once per display frame.
pub struct Session<S: ScoreStore> {
    state: GameState,
    store: S,
    scheduler: TickScheduler,
    pending_notice: Option<Duration>,
}

impl<S: ScoreStore> Session<S> {
    #[must_use]
    pub fn new(state: GameState, store: S) -> Self {
        let scheduler = TickScheduler::new(state.config().tick_interval);

        Self {
            state,
            store,
            scheduler,
            pending_notice: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for tests and tooling that need to stage a position.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Returns true while the game-over notice is waiting for its delay.
    #[must_use]
    pub fn notice_pending(&self) -> bool {
        self.pending_notice.is_some()
    }

    /// Applies one input event at host time `now`.
    pub fn handle_input(&mut self, input: GameInput, now: Duration) {
        match input {
            GameInput::Direction(direction) => {
                if self.state.status != GameStatus::Running {
                    self.start_run(now);
                }

                if !self.state.steer(direction) {
                    log::trace!("ignored reversal towards {direction:?}");
                }
            }
            GameInput::Pause => self.pause(),
            GameInput::Restart => self.restart(now),
            GameInput::Quit => {}
        }
    }

    /// Runs one display frame: renders, and on a due tick advances the game.
    pub fn frame(&mut self, now: Duration, frontend: &mut impl Frontend) -> Result<()> {
        match self.scheduler.frame(now) {
            Frame::Tick => self.tick(now, frontend)?,
            Frame::RenderOnly | Frame::Stopped => frontend.render(self.state.snapshot())?,
        }

        if self.pending_notice.is_some_and(|due| now >= due) {
            self.pending_notice = None;
            frontend.notify_game_over(self.state.score, self.state.high_score);
        }

        Ok(())
    }

    /// Starts a run from the keyboard. The fruit keeps its preview position.
    fn start_run(&mut self, now: Duration) {
        log::info!("starting run from {:?}", self.state.status);

        self.state.reset_run();
        self.enter_running(now);
    }

    /// Suspends a running game. There is no resume; only a new run re-enters
    /// `Running`.
    fn pause(&mut self) {
        if self.state.status != GameStatus::Running {
            return;
        }

        self.scheduler.cancel();
        self.state.status = GameStatus::Paused;
        log::info!("paused at score {}", self.state.score);
    }

    /// Starts a new run from any state, relocating the fruit.
    fn restart(&mut self, now: Duration) {
        log::info!("restarting from {:?}", self.state.status);

        self.scheduler.cancel();
        self.state.reset_run();
        self.state.respawn_fruit();
        self.enter_running(now);
    }

    fn enter_running(&mut self, now: Duration) {
        self.state.status = GameStatus::Running;
        self.pending_notice = None;
        let handle = self.scheduler.start(now);
        log::debug!("loop {handle:?} started");
    }

    fn tick(&mut self, now: Duration, frontend: &mut impl Frontend) -> Result<()> {
        frontend.render(self.state.snapshot())?;

        let outcome = self.state.step(&mut self.store);
        if outcome == StepOutcome::Ate {
            log::debug!(
                "fruit eaten, score {} high {}",
                self.state.score,
                self.state.high_score
            );
        }

        if self.state.check_collision() {
            self.finish(now, frontend)?;
        }

        frontend.show_scores(self.state.score, self.state.high_score);
        Ok(())
    }

    fn finish(&mut self, now: Duration, frontend: &mut impl Frontend) -> Result<()> {
        self.scheduler.cancel();
        frontend.render(self.state.snapshot())?;
        self.pending_notice = Some(now + self.state.config().game_over_notice_delay);

        let head = self.state.snake.head();
        log::info!(
            "game over ({:?}) at {:?} px, score {} high {}",
            self.state.collision,
            self.state.grid().pixel_origin(head),
            self.state.score,
            self.state.high_score
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::GameConfig;
    use crate::error::Result;
    use crate::game::{GameState, GameStatus, Snapshot};
    use crate::grid::Cell;
    use crate::input::{Direction, GameInput};
    use crate::score::MemoryScoreStore;

    use super::{Frontend, Session};

    #[derive(Default)]
    struct CountingFrontend {
        renders: usize,
        score_updates: usize,
        notices: usize,
    }

    impl Frontend for CountingFrontend {
        fn render(&mut self, _snapshot: Snapshot<'_>) -> Result<()> {
            self.renders += 1;
            Ok(())
        }

        fn show_scores(&mut self, _score: u32, _high_score: u32) {
            self.score_updates += 1;
        }

        fn notify_game_over(&mut self, _score: u32, _high_score: u32) {
            self.notices += 1;
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn session() -> Session<MemoryScoreStore> {
        let state = GameState::new_with_seed(GameConfig::default(), 0, 9);
        Session::new(state, MemoryScoreStore::new())
    }

    #[test]
    fn idle_frames_render_without_ticking() {
        let mut session = session();
        let mut frontend = CountingFrontend::default();

        session.frame(ms(0), &mut frontend).expect("frame should render");
        session.frame(ms(800), &mut frontend).expect("frame should render");

        assert_eq!(frontend.renders, 2);
        assert_eq!(frontend.score_updates, 0);
        assert_eq!(session.status(), GameStatus::Idle);
    }

    #[test]
    fn pause_is_ignored_unless_running() {
        let mut session = session();

        session.handle_input(GameInput::Pause, ms(0));
        assert_eq!(session.status(), GameStatus::Idle);

        session.handle_input(GameInput::Direction(Direction::Up), ms(0));
        session.handle_input(GameInput::Pause, ms(10));
        assert_eq!(session.status(), GameStatus::Paused);
        assert!(!session.scheduler().is_running());

        session.handle_input(GameInput::Pause, ms(20));
        assert_eq!(session.status(), GameStatus::Paused);
    }

    #[test]
    fn paused_state_is_frozen() {
        let mut session = session();
        let mut frontend = CountingFrontend::default();

        session.handle_input(GameInput::Direction(Direction::Up), ms(0));
        session.frame(ms(0), &mut frontend).expect("frame should render");
        let head = session.state().snake.head();

        session.handle_input(GameInput::Pause, ms(5));
        for step in 1..10 {
            session
                .frame(ms(step * 700), &mut frontend)
                .expect("frame should render");
        }

        assert_eq!(session.state().snake.head(), head);
        assert_eq!(frontend.score_updates, 1);
    }

    #[test]
    fn game_over_notice_waits_for_its_delay() {
        let mut session = session();
        let mut frontend = CountingFrontend::default();
        session.handle_input(GameInput::Direction(Direction::Up), ms(0));
        session.state_mut().snake = crate::snake::Snake::new(Cell::new(9, 0));

        session.frame(ms(0), &mut frontend).expect("frame should render");
        assert_eq!(session.status(), GameStatus::GameOver);
        assert!(session.notice_pending());
        assert_eq!(frontend.notices, 0);

        session.frame(ms(16), &mut frontend).expect("frame should render");
        assert_eq!(frontend.notices, 0);

        session.frame(ms(64), &mut frontend).expect("frame should render");
        assert_eq!(frontend.notices, 1);
        assert!(!session.notice_pending());
    }
}
