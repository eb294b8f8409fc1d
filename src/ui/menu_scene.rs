//! Game-select menu.

use crate::games::GameKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the menu with each game's stored best.
pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize, bests: &[String]) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Pick a game",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let is_selected = i == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let best = bests.get(i).map(String::as_str).unwrap_or("-");
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{}{}. {:<10}", prefix, i + 1, kind.name()), name_style),
                    Span::styled("Best: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(best.to_string(), Style::default().fg(Color::Cyan)),
                ]),
                Line::from(Span::styled(
                    format!("     {}", kind.tagline()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    frame.render_widget(
        Paragraph::new("[↑/↓] Navigate  [Enter/1-3] Play  [Q/Esc] Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[2],
    );
}
