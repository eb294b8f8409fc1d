//! Snake game UI rendering.
//!
//! Uses half-block pixel rendering. Each game cell maps to a colored pixel;
//! pairs of vertical pixels are packed into one terminal row using the `▀`
//! (upper half block) character with fg=top, bg=bottom colors.

use super::game_common::{
    create_game_layout, game_layout, info_line, render_center_prompt, render_game_over_banner,
    render_info_with_log, render_status_bar, GameResultType,
};
use crate::core::{GameSession, HighScore};
use crate::games::snake::SnakeGame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀

// ── Snake gradient colors ────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

const RESTART_LABEL: &str = "[ Restart ]";

pub const RULES: &[&str] = &[
    "Steer with the arrow keys. The first arrow starts the run.",
    "Each food eaten adds one segment and one point.",
    "Leaving the grid or biting your own body ends the run.",
    "You cannot turn straight back on yourself.",
    "After a crash press P to play again, or click Restart",
    "to return to the start prompt. Q leaves for the menu.",
];

/// Clickable restart button, centered in the play area. Only drawn after a
/// crash.
pub fn restart_button_rect(area: Rect) -> Rect {
    let content = game_layout(area).content;
    if content.height < 3 {
        return Rect::new(content.x, content.y, 0, 0);
    }
    let width = (RESTART_LABEL.len() as u16).min(content.width);
    Rect::new(
        content.x + (content.width - width) / 2,
        content.y + content.height / 2 + 1,
        width,
        1,
    )
}

/// Render the Snake game scene.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, session: &GameSession<SnakeGame>) {
    let game = session.game();
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen);

    render_play_field(frame, layout.content, game);

    if game.game_over {
        render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Loss,
            "GAME OVER",
            &format!("{} food eaten", game.score),
            "[P] Play again  [Q] Menu",
        );
        render_restart_button(frame, restart_button_rect(area));
    } else if !game.started {
        render_center_prompt(
            frame,
            layout.content,
            "[ Press an arrow key to start ]",
            Color::White,
        );
    }

    render_status_bar_content(frame, layout.status_bar, game);

    let stats = vec![
        info_line("Score", game.score.to_string()),
        info_line("Best", session.best().describe()),
        info_line("Length", game.snake.len().to_string()),
        info_line("Grid", format!("{}x{}", game.grid_width, game.grid_height)),
        info_line("Speed", format!("{}ms", game.move_gate.delay_ms())),
    ];
    render_info_with_log(frame, layout.info_panel, stats, session.log());
}

/// Calculate interpolated RGB color for a snake body segment.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Build the pixel grid in game coordinates. Cells outside the grid (a head
/// that just left it) are skipped.
fn pixel_grid(game: &SnakeGame) -> Vec<Vec<Option<Color>>> {
    let grid_w = game.grid_width as usize;
    let grid_h = game.grid_height as usize;
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid_w]; grid_h];

    if game.in_bounds(game.food) {
        let pulse = ((game.tick_count % 20) as f64 / 20.0 * std::f64::consts::PI * 2.0).sin();
        let food_g = (80.0 + pulse * 30.0) as u8;
        let food_b = (40.0 + pulse * 20.0) as u8;
        pixels[game.food.y as usize][game.food.x as usize] = Some(Color::Rgb(255, food_g, food_b));
    }

    let snake_len = game.snake.len();
    for (i, seg) in game.snake.iter().enumerate() {
        if !game.in_bounds(*seg) {
            continue;
        }
        pixels[seg.y as usize][seg.x as usize] = Some(if i == 0 {
            HEAD_COLOR
        } else {
            body_color(i, snake_len)
        });
    }
    pixels
}

/// Render the play field using half-block pixel rendering.
fn render_play_field(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid_w = game.grid_width as usize;
    let grid_h = game.grid_height as usize;
    let border_color = Color::Rgb(80, 80, 80);
    let pixels = pixel_grid(game);

    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;

    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;

    // ── Top border with score ───────────────────────────────────
    {
        let score_val = game.score.to_string();
        let label = "Score: ";
        let score_full_len = label.len() + score_val.len();
        let pad_before = inner_w.saturating_sub(score_full_len + 1);
        let pad_after = inner_w.saturating_sub(pad_before + score_full_len);

        let mut spans: Vec<Span> = vec![Span::styled(
            BORDER_TL.to_string(),
            Style::default().fg(border_color),
        )];
        if pad_before > 0 {
            let s: String = std::iter::repeat(BORDER_H).take(pad_before).collect();
            spans.push(Span::styled(s, Style::default().fg(border_color)));
        }
        spans.push(Span::styled(label, Style::default().fg(border_color)));
        spans.push(Span::styled(score_val, Style::default().fg(Color::White)));
        if pad_after > 0 {
            let s: String = std::iter::repeat(BORDER_H).take(pad_after).collect();
            spans.push(Span::styled(s, Style::default().fg(border_color)));
        }
        spans.push(Span::styled(
            BORDER_TR.to_string(),
            Style::default().fg(border_color),
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off, render_w, 1),
        );
    }

    // ── Game content rows ───────────────────────────────────────
    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= area.y + area.height {
            break;
        }

        let top_gy = term_row * 2;
        let bot_gy = term_row * 2 + 1;
        let top_row = pixels.get(top_gy).unwrap_or(&empty_row);
        let bot_row = pixels.get(bot_gy).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(border_color),
        )];

        // Batch consecutive cells with the same style
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(Span::styled(
            BORDER_V.to_string(),
            Style::default().fg(border_color),
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let mut s = String::new();
        s.push(BORDER_BL);
        for _ in 0..inner_w {
            s.push(BORDER_H);
        }
        s.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Span::styled(s, Style::default().fg(border_color))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_restart_button(frame: &mut Frame, rect: Rect) {
    if rect.width == 0 {
        return;
    }
    let button = Paragraph::new(Span::styled(
        RESTART_LABEL,
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(button, rect);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if game.game_over {
        render_status_bar(
            frame,
            area,
            "The snake has crashed",
            Color::Red,
            &[("[P]", "Play again"), ("[Click]", "Restart"), ("[Q]", "Menu")],
        );
    } else if !game.started {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[Arrows]", "Start"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Move"), ("[Esc]", "Menu")],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pixel_grid_skips_out_of_bounds_head() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut game = SnakeGame::new(&mut rng);
        game.food = Position::new(0, 0);
        game.snake.push_front(Position::new(30, 12));

        let pixels = pixel_grid(&game);
        assert_eq!(pixels.len(), 25);
        assert_eq!(pixels[12][5], Some(body_color(1, game.snake.len())));
        assert!(pixels[0][0].is_some());
    }

    #[test]
    fn test_restart_button_inside_content() {
        let area = Rect::new(0, 0, 100, 40);
        let button = restart_button_rect(area);
        let content = game_layout(area).content;
        assert_eq!(button.width, RESTART_LABEL.len() as u16);
        assert!(button.x >= content.x && button.x + button.width <= content.x + content.width);
        assert!(button.y > content.y && button.y < content.y + content.height);
    }
}
