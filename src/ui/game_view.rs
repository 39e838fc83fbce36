use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::messages;
use crate::game::{Board, Cell, GameEngine, GameStatus, Player, COLS, ROWS};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, engine.status(), message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            (messages::turn(player), player_color(player))
        }
        GameStatus::Won(player) => (messages::won(player), player_color(player)),
        GameStatus::Tied => (messages::TIE.to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

/// Full columns (and every column once the game is over) are dimmed.
fn column_label_style(col: usize, selected_column: usize, legal: &[usize]) -> Style {
    let base = if legal.contains(&col) {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if col == selected_column {
        base.fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell.owner() {
        Some(player) => Span::styled(" ● ", Style::default().fg(player_color(player))),
        None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let board: &Board = engine.board();
    let legal = engine.legal_columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    col_line.extend((0..COLS).map(|col| {
        Span::styled(
            format!(" {} ", col + 1),
            column_label_style(col, selected_column, &legal),
        )
    }));
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        row_spans.extend((0..COLS).map(|col| cell_span(board.get(row, col))));

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Outcome announcements take the winner's colour; everything else is a
/// neutral notice.
fn message_color(status: GameStatus) -> Color {
    match status {
        GameStatus::Won(player) => player_color(player),
        GameStatus::Tied => Color::White,
        GameStatus::InProgress => Color::Cyan,
    }
}

fn render_message(
    frame: &mut Frame,
    status: GameStatus,
    message: &Option<String>,
    area: Rect,
) {
    let style = Style::default()
        .fg(message_color(status))
        .add_modifier(Modifier::BOLD);
    let widget = Paragraph::new(message.clone().unwrap_or_default())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/1-7: Drop  |  N: New Game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_column_label_is_dimmed() {
        let mut engine = GameEngine::new();
        for _ in 0..ROWS {
            engine.drop_piece(0).unwrap();
        }
        let legal = engine.legal_columns();

        assert_eq!(
            column_label_style(0, 3, &legal).fg,
            Some(Color::DarkGray)
        );
        assert_eq!(column_label_style(1, 3, &legal).fg, None);
        assert_eq!(column_label_style(3, 3, &legal).fg, Some(Color::Cyan));
    }

    #[test]
    fn test_cell_span_uses_owner_color() {
        assert_eq!(cell_span(Cell::Player1).style.fg, Some(Color::Red));
        assert_eq!(cell_span(Cell::Player2).style.fg, Some(Color::Yellow));
        assert_eq!(cell_span(Cell::Empty).style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_message_color_follows_status() {
        assert_eq!(message_color(GameStatus::Won(Player::Two)), Color::Yellow);
        assert_eq!(message_color(GameStatus::Tied), Color::White);
        assert_eq!(message_color(GameStatus::InProgress), Color::Cyan);
    }
}
