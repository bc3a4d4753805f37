use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::Result;
use crate::game::Snapshot;
use crate::renderer;
use crate::session::Frontend;
use crate::ui::hud::ScoreBoard;
use crate::ui::menu::GameOverNotice;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Leaves raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// [`Frontend`] drawing to the terminal with ratatui.
///
/// Holds the score line values between ticks and the modal game-over notice
/// until a key dismisses it.
pub struct TerminalFrontend {
    session: TerminalSession,
    scores: ScoreBoard,
    notice: Option<GameOverNotice>,
}

impl TerminalFrontend {
    #[must_use]
    pub fn new(session: TerminalSession, high_score: u32) -> Self {
        Self {
            session,
            scores: ScoreBoard {
                score: 0,
                high_score,
            },
            notice: None,
        }
    }

    /// Closes the game-over notice. Returns whether one was open.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }
}

impl Frontend for TerminalFrontend {
    fn render(&mut self, snapshot: Snapshot<'_>) -> Result<()> {
        let scores = self.scores;
        let notice = self.notice;

        self.session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, snapshot, scores, notice))?;
        Ok(())
    }

    fn show_scores(&mut self, score: u32, high_score: u32) {
        self.scores = ScoreBoard { score, high_score };
    }

    fn notify_game_over(&mut self, score: u32, high_score: u32) {
        self.notice = Some(GameOverNotice { score, high_score });
    }
}
