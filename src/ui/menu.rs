use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

/// End-of-run message shown until the player presses a key.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverNotice {
    pub score: u32,
    pub high_score: u32,
}

impl GameOverNotice {
    #[must_use]
    pub fn message(self) -> String {
        format!(
            "Game Over! Your score: {}. High Score: {}",
            self.score, self.high_score
        )
    }
}

/// Draws the idle prompt over the preview board.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(area, 28, 5);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("SNAKE").style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from("Press an arrow key"),
        Line::from("to start"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

/// Draws the pause screen. Pause has no resume, so only restart is offered.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(area, 24, 5);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from("[R] Restart"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the modal game-over notice.
pub fn render_game_over_notice(frame: &mut Frame<'_>, area: Rect, notice: GameOverNotice) {
    let message = notice.message();
    let width = u16::try_from(message.len() + 4).unwrap_or(u16::MAX);
    let popup = centered_rect(area, width, 5);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from("Press a game key to close").style(Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Returns a `width` x `height` rectangle centred in `area`, clipped to it.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
