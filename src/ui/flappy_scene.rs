//! UI rendering for Flappy.
//!
//! The 288×512 world is sampled once per terminal cell, so the scene scales
//! with the window.

use super::game_common::{
    create_game_layout, info_line, render_center_prompt, render_game_over_banner,
    render_info_with_log, render_status_bar, GameResultType,
};
use crate::core::constants::{FLAPPY_GROUND_Y, FLAPPY_HEIGHT, FLAPPY_WIDTH};
use crate::core::{GameSession, HighScore};
use crate::games::flappy::FlappyGame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SKY: Color = Color::Rgb(20, 24, 48);
const GROUND: Color = Color::Rgb(150, 110, 50);
const PIPE: Color = Color::Green;
const BIRD: Color = Color::Yellow;

/// Wing up, level, down.
const WING_GLYPHS: [&str; 3] = ["▀", "■", "▄"];

pub const RULES: &[&str] = &[
    "Space, Up or a click makes the bird flap. The first flap starts.",
    "Gravity pulls the bird down between flaps.",
    "Fly through the gaps. Each pipe cleared scores one point.",
    "Touching a pipe or the ground ends the flight.",
    "Beat the record and you can sign it with a name (10 chars max).",
    "After a crash press R or click to fly again. Q leaves.",
];

/// What occupies one sampled point of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe,
    Ground,
    Bird,
}

fn sample(game: &FlappyGame, wx: f64, wy: f64) -> Cell {
    let bird = &game.bird;
    if wx >= bird.x && wx < bird.x + bird.width && wy >= bird.y && wy < bird.y + bird.height {
        return Cell::Bird;
    }
    if wy >= FLAPPY_GROUND_Y {
        return Cell::Ground;
    }
    let in_pipe = game.pipes.iter().any(|pipe| {
        wx >= pipe.x && wx < pipe.right() && (wy < pipe.top_height || wy >= pipe.bottom_y)
    });
    if in_pipe {
        Cell::Pipe
    } else {
        Cell::Sky
    }
}

/// Sample the world at the center of each terminal cell.
fn cell_grid(game: &FlappyGame, width: u16, height: u16) -> Vec<Vec<Cell>> {
    (0..height)
        .map(|row| {
            let wy = (row as f64 + 0.5) / height as f64 * FLAPPY_HEIGHT;
            (0..width)
                .map(|col| {
                    let wx = (col as f64 + 0.5) / width as f64 * FLAPPY_WIDTH;
                    sample(game, wx, wy)
                })
                .collect()
        })
        .collect()
}

/// Render the Flappy game scene.
pub fn render_flappy_scene(frame: &mut Frame, area: Rect, session: &GameSession<FlappyGame>) {
    let game = session.game();
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan);

    render_play_area(frame, layout.content, game);

    if let Some(name) = &game.name_entry {
        render_name_entry(frame, layout.content, game.score, name);
    } else if game.game_over {
        render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Loss,
            "CRASH!",
            &format!("You passed {} pipes", game.score),
            "[R/Click] Fly again  [Q] Menu",
        );
    } else if !game.started {
        render_center_prompt(
            frame,
            layout.content,
            "[ Space / Click to flap ]",
            Color::White,
        );
    }

    render_status_bar_content(frame, layout.status_bar, game);

    let stats = vec![
        info_line("Score", game.score.to_string()),
        info_line("Best", session.best().describe()),
        info_line("Pipes", game.pipes.len().to_string()),
        info_line("Velocity", format!("{:+.1}", game.bird.vel)),
    ];
    render_info_with_log(frame, layout.info_panel, stats, session.log());
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let wing = WING_GLYPHS[game.bird.frame_index % WING_GLYPHS.len()];
    let lines: Vec<Line> = cell_grid(game, area.width, area.height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Sky => Span::styled(" ", Style::default().bg(SKY)),
                    Cell::Pipe => Span::styled("█", Style::default().fg(PIPE).bg(SKY)),
                    Cell::Ground => Span::styled("▓", Style::default().fg(GROUND)),
                    Cell::Bird => Span::styled(
                        wing,
                        Style::default()
                            .fg(BIRD)
                            .bg(SKY)
                            .add_modifier(Modifier::BOLD),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);

    let score = game.score.to_string();
    let x = area.x + area.width.saturating_sub(score.len() as u16) / 2;
    frame.render_widget(
        Paragraph::new(Span::styled(
            score.clone(),
            Style::default()
                .fg(Color::White)
                .bg(SKY)
                .add_modifier(Modifier::BOLD),
        )),
        Rect::new(x, area.y, (score.len() as u16).min(area.width), 1),
    );
}

/// Modal prompting for the record holder's name.
fn render_name_entry(frame: &mut Frame, area: Rect, score: u32, name: &str) {
    let width = 34.min(area.width);
    let height = 6.min(area.height);
    let modal = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" New Record! ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} pipes. Enter your name:", score),
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled(
                format!("> {}", name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Save  [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if game.is_entering_name() {
        render_status_bar(
            frame,
            area,
            "Sign your record",
            Color::Yellow,
            &[("[Type]", "Name"), ("[Enter]", "Save")],
        );
    } else if game.game_over {
        render_status_bar(
            frame,
            area,
            &format!("Crashed after {} pipes", game.score),
            Color::Red,
            &[("[R/Click]", "Restart"), ("[Q]", "Menu")],
        );
    } else if !game.started {
        render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Up/Click]", "Flap"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space/Up/Click]", "Flap"), ("[Esc]", "Menu")],
        );
    }
}
