use crate::config::PlayersConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::StartScreen;

pub fn render(frame: &mut Frame, start: &StartScreen, players: &PlayersConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(3), // Player 1
            Constraint::Length(3), // Player 2
            Constraint::Min(0),
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("RAISE TO FOUR!")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("ENTER YOUR NAMES:")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    let placeholders = [&players.first_placeholder, &players.second_placeholder];
    let colors = [Color::Red, Color::Yellow];
    for i in 0..2 {
        render_input(
            frame,
            &start.names[i],
            placeholders[i],
            colors[i],
            start.focus == i,
            chunks[2 + i],
        );
    }

    let controls = Paragraph::new("Tab: Switch  |  Enter: Start Game  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[5]);
}

fn render_input(
    frame: &mut Frame,
    value: &str,
    placeholder: &str,
    color: Color,
    focused: bool,
    area: Rect,
) {
    let text = if value.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else if focused {
        Line::from(vec![Span::raw(value), Span::styled("_", Style::default().fg(color))])
    } else {
        Line::from(value)
    };

    let border = if focused {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(input, area);
}
