use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Values shown on the score line. Refreshed once per logic tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ScoreBoard {
    pub score: u32,
    pub high_score: u32,
}

/// Renders the score line, score on the left and high score on the right.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, board: ScoreBoard) {
    let line = score_line(board, usize::from(area.width));
    frame.render_widget(Paragraph::new(line), area);
}

fn score_line(board: ScoreBoard, width: usize) -> Line<'static> {
    let left = format!("Score: {}", board.score);
    let right = format!("High Score: {}", board.high_score);
    let gap = width
        .saturating_sub(left.width() + right.width())
        .max(1);

    Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, Style::default().fg(Color::Yellow)),
    ])
}
