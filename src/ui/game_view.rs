use crate::game::{Cell, GameSession, GameState, GameStatus, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::app::GameScreen;

pub fn render(frame: &mut Frame, game: &GameScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Scoreboard
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_scoreboard(frame, &game.session, chunks[0]);
    render_header(frame, &game.session, chunks[1]);
    render_board(frame, game.session.state(), game.selected_column, chunks[2]);
    render_message(frame, game.message.as_deref(), chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_scoreboard(frame: &mut Frame, session: &GameSession, area: Rect) {
    let scores = session.scores();
    let mut spans = Vec::new();
    for player in [Player::Red, Player::Yellow] {
        if !spans.is_empty() {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(
            format!("{}: {}", session.player_name(player), scores.get(player)),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let scoreboard = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(scoreboard, area);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let state = session.state();
    let (status, color) = match state.status() {
        GameStatus::Won(winner) => (
            format!("🎉 {} Wins! 🎉", session.player_name(winner)),
            player_color(winner),
        ),
        GameStatus::InProgress => {
            let current = state.current_player();
            (
                format!("Your turn: {}", session.player_name(current)),
                player_color(current),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Raise To Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, state: &GameState, selected_column: usize, area: Rect) {
    let board = state.board();
    let run = state.winning_run().unwrap_or_default();

    let mut lines = Vec::with_capacity(ROWS + 2);
    lines.push(cursor_line(selected_column));
    for row in 0..ROWS {
        let spans: Vec<Span> = (0..COLS)
            .map(|col| cell_span(board.get(row, col), run.contains(&(row, col))))
            .collect();
        lines.push(Line::from(spans));
    }
    lines.push(column_labels(selected_column));

    let title = if run.is_empty() { "Board" } else { "Four in a row!" };
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title),
    );
    frame.render_widget(board_widget, area);
}

fn cell_span(cell: Cell, in_winning_run: bool) -> Span<'static> {
    match Player::from_cell(cell) {
        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Some(player) if in_winning_run => Span::styled(
            " ◉ ",
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Some(player) => Span::styled(" ● ", Style::default().fg(player_color(player))),
    }
}

fn cursor_line(selected_column: usize) -> Line<'static> {
    let spans: Vec<Span> = (0..COLS)
        .map(|col| {
            if col == selected_column {
                Span::styled(" ▼ ", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("   ")
            }
        })
        .collect();
    Line::from(spans)
}

fn column_labels(selected_column: usize) -> Line<'static> {
    let spans: Vec<Span> = (0..COLS)
        .map(|col| {
            let label = format!(" {} ", col + 1);
            if col == selected_column {
                Span::styled(label, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                Span::styled(label, Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans)
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let line = message
        .map(|text| Line::styled(text, Style::default().fg(Color::Yellow)))
        .unwrap_or_default();
    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(
        "←/→: Move  |  Enter/1-7: Drop  |  R: Restart  |  B: Back  |  Q: Quit",
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
