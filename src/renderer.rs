use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    FIELD_DARK, FIELD_LIGHT, FRUIT, GLYPH_CELL, GLYPH_FRUIT, GLYPH_HEAD, SNAKE_BODY, SNAKE_HEAD,
};
use crate::game::{GameStatus, Snapshot};
use crate::grid::{Cell, GridSize};
use crate::ui::hud::{ScoreBoard, render_hud};
use crate::ui::menu::{
    GameOverNotice, render_game_over_notice, render_pause_menu, render_start_menu,
};

/// Terminal columns used by one grid cell.
const COLUMNS_PER_CELL: u16 = 2;

/// Renders the full game frame from a read-only snapshot.
pub fn render(
    frame: &mut Frame<'_>,
    snapshot: Snapshot<'_>,
    scores: ScoreBoard,
    notice: Option<GameOverNotice>,
) {
    let area = frame.area();
    let board = board_rect(area, snapshot.grid);
    let play_area = board;
    let hud_area = Rect {
        y: board.bottom(),
        height: 1,
        ..board
    }
    .intersection(area);

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(Color::White));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_field(frame, inner, snapshot.grid);
    render_fruit(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);
    render_hud(frame, hud_area, scores);

    match snapshot.status {
        GameStatus::Idle => render_start_menu(frame, play_area),
        GameStatus::Paused => render_pause_menu(frame, play_area),
        GameStatus::Running | GameStatus::GameOver => {}
    }

    if let Some(notice) = notice {
        render_game_over_notice(frame, area, notice);
    }
}

/// Returns the bordered board rectangle, centred horizontally and clipped to
/// `area`. One row is left below it for the score line.
fn board_rect(area: Rect, grid: GridSize) -> Rect {
    let width = (grid.width * COLUMNS_PER_CELL + 2).min(area.width);
    let height = (grid.height + 2).min(area.height.saturating_sub(1));
    let free_rows = area.height.saturating_sub(height + 1);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + free_rows / 2,
        width,
        height,
    }
}

fn render_field(frame: &mut Frame<'_>, inner: Rect, grid: GridSize) {
    let buffer = frame.buffer_mut();
    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let Some((column, row)) = cell_to_terminal(inner, grid, Cell::new(x, y)) else {
                continue;
            };

            buffer.set_string(column, row, "  ", Style::new().bg(field_color(x, y)));
        }
    }
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, snapshot: Snapshot<'_>) {
    let Some((x, y)) = cell_to_terminal(inner, snapshot.grid, snapshot.fruit) else {
        return;
    };

    let style = Style::new()
        .fg(FRUIT)
        .bg(field_color(snapshot.fruit.x, snapshot.fruit.y));
    frame.buffer_mut().set_string(x, y, GLYPH_FRUIT, style);
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: Snapshot<'_>) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when segments overlap on the fatal frame.
    for (index, segment) in snapshot.snake.segments().enumerate().rev() {
        let Some((x, y)) = cell_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_HEAD,
                Style::new()
                    .fg(SNAKE_HEAD)
                    .bg(SNAKE_BODY)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(SNAKE_BODY));
        }
    }
}

fn field_color(x: i32, y: i32) -> Color {
    if (x + y) % 2 == 0 {
        FIELD_LIGHT
    } else {
        FIELD_DARK
    }
}

fn cell_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()? * COLUMNS_PER_CELL;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x + 1 >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::GameConfig;
    use crate::game::GameState;
    use crate::grid::{Cell, GridSize};
    use crate::ui::hud::ScoreBoard;

    use super::{board_rect, cell_to_terminal, render};

    const GRID: GridSize = GridSize {
        width: 15,
        height: 15,
        cell_size: 30,
    };

    #[test]
    fn cells_map_to_two_columns_each() {
        let inner = Rect::new(1, 1, 30, 15);

        assert_eq!(cell_to_terminal(inner, GRID, Cell::new(0, 0)), Some((1, 1)));
        assert_eq!(cell_to_terminal(inner, GRID, Cell::new(14, 14)), Some((29, 15)));
        assert_eq!(cell_to_terminal(inner, GRID, Cell::new(15, 0)), None);
        assert_eq!(cell_to_terminal(inner, GRID, Cell::new(-1, 0)), None);
    }

    #[test]
    fn board_is_centred_with_room_for_the_score_line() {
        let board = board_rect(Rect::new(0, 0, 80, 24), GRID);

        assert_eq!(board, Rect::new(24, 3, 32, 17));
    }

    #[test]
    fn idle_frame_shows_start_prompt() {
        let state = GameState::new_with_seed(GameConfig::default(), 0, 1);
        let mut terminal =
            Terminal::new(TestBackend::new(60, 24)).expect("test terminal should build");

        terminal
            .draw(|frame| render(frame, state.snapshot(), ScoreBoard::default(), None))
            .expect("draw should succeed");

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Press an arrow key"));
        assert!(content.contains("High Score: 0"));
    }
}
