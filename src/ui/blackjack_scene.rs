//! Blackjack table rendering.

use super::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_with_log,
    render_status_bar, GameResultType,
};
use crate::core::{GameSession, HighScore};
use crate::games::blackjack::{BlackjackGame, BlackjackPhase, Card, Hand};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FELT: Color = Color::Rgb(10, 70, 35);

pub const RULES: &[&str] = &[
    "Get closer to 21 than the dealer without going over.",
    "Number cards count their value, faces count 10,",
    "aces count 11 or 1, whichever keeps you under 22.",
    "Deal with Space/Enter/D, then Hit (H) or Stand (S).",
    "The dealer draws until reaching 17 or more.",
    "Two-card 21 is blackjack and settles at once.",
    "Wins build a streak. The best streak is your record.",
    "R clears the table and the tallies.",
];

/// Render the Blackjack game scene.
pub fn render_blackjack_scene(frame: &mut Frame, area: Rect, session: &GameSession<BlackjackGame>) {
    let game = session.game();
    let layout = create_game_layout(frame, area, " Blackjack ", Color::LightYellow);

    render_table(frame, layout.content, game);

    if let Some(outcome) = game.outcome {
        let result_type = if outcome.is_win() {
            GameResultType::Win
        } else if outcome.is_loss() {
            GameResultType::Loss
        } else {
            GameResultType::Draw
        };
        render_game_over_banner(
            frame,
            layout.content,
            result_type,
            outcome.message(),
            &format!("{} vs {}", game.player.total(), game.dealer.total()),
            "[Space] Next hand",
        );
    }

    render_status_bar_content(frame, layout.status_bar, game);

    let stats = vec![
        info_line("Streak", game.streak.to_string()),
        info_line("Best", session.best().describe()),
        info_line(
            "W/L/P",
            format!("{}/{}/{}", game.wins, game.losses, game.pushes),
        ),
        info_line("Rounds", game.rounds.to_string()),
        info_line("Deck", format!("{} left", game.deck.len())),
    ];
    render_info_with_log(frame, layout.info_panel, stats, session.log());
}

fn render_table(frame: &mut Frame, area: Rect, game: &BlackjackGame) {
    if area.height < 10 || area.width < 20 {
        return;
    }
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(FELT)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(area);

    let dealer_total = if game.hole_card_hidden() {
        "?".to_string()
    } else {
        game.dealer.total().to_string()
    };
    render_hand_label(frame, rows[0], "Dealer", &dealer_total, &game.dealer);
    render_cards(frame, rows[1], &game.dealer, game.hole_card_hidden());

    render_hand_label(
        frame,
        rows[3],
        "You",
        &game.player.total().to_string(),
        &game.player,
    );
    render_cards(frame, rows[4], &game.player, false);
}

fn render_hand_label(frame: &mut Frame, area: Rect, who: &str, total: &str, hand: &Hand) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", who),
            Style::default()
                .fg(Color::White)
                .bg(FELT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})", total),
            Style::default().fg(Color::Yellow).bg(FELT),
        ),
    ];
    if hand.is_soft() && total != "?" {
        spans.push(Span::styled(" soft", Style::default().fg(Color::Gray).bg(FELT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Three text rows drawing `hand` as small boxed cards.
fn card_rows(hand: &Hand, hide_second: bool) -> [Vec<Span<'static>>; 3] {
    let edge = Style::default().fg(Color::Gray).bg(FELT);
    let mut top = vec![Span::styled(" ", edge)];
    let mut mid = vec![Span::styled(" ", edge)];
    let mut bot = vec![Span::styled(" ", edge)];

    for (i, card) in hand.cards().iter().enumerate() {
        top.push(Span::styled("┌───┐ ", edge));
        if hide_second && i == 1 {
            mid.push(Span::styled("│░░░│ ", edge));
        } else {
            mid.push(Span::styled("│", edge));
            mid.push(card_face(card));
            mid.push(Span::styled("│ ", edge));
        }
        bot.push(Span::styled("└───┘ ", edge));
    }
    [top, mid, bot]
}

fn card_face(card: &Card) -> Span<'static> {
    let color = if card.suit.is_red() {
        Color::Red
    } else {
        Color::Black
    };
    Span::styled(
        format!("{:<3}", card.label()),
        Style::default()
            .fg(color)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_cards(frame: &mut Frame, area: Rect, hand: &Hand, hide_second: bool) {
    if hand.is_empty() {
        return;
    }
    let lines: Vec<Line> = card_rows(hand, hide_second)
        .into_iter()
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &BlackjackGame) {
    match game.phase {
        BlackjackPhase::Betting => render_status_bar(
            frame,
            area,
            "Place your bet",
            Color::LightYellow,
            &[("[Space]", "Deal"), ("[R]", "Reset"), ("[Q]", "Menu")],
        ),
        BlackjackPhase::PlayerTurn => render_status_bar(
            frame,
            area,
            "Your move",
            Color::Green,
            &[("[H]", "Hit"), ("[S]", "Stand"), ("[Q]", "Menu")],
        ),
        BlackjackPhase::DealerTurn => render_status_bar(
            frame,
            area,
            "Dealer draws...",
            Color::Yellow,
            &[("[Q]", "Menu")],
        ),
        BlackjackPhase::RoundOver => render_status_bar(
            frame,
            area,
            "Round over",
            Color::Cyan,
            &[("[Space]", "Next hand"), ("[R]", "Reset"), ("[Q]", "Menu")],
        ),
    }
}
