//! Input handling: terminal events to intents.
//!
//! Keeps the dispatch in one priority chain. The rules panel first, then the
//! menu or the active game.

use crate::app::Screen;
use crate::games::blackjack::BlackjackInput;
use crate::games::flappy::FlappyInput;
use crate::games::snake::SnakeInput;
use crate::games::{ActiveGame, GameKind};
use crate::ui::game_common::rules_hotspot_rect;
use crate::ui::snake_scene::restart_button_rect;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// What an event asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quit,
    ToMenu,
    ToggleRules,
    MenuUp,
    MenuDown,
    MenuSelect,
    Launch(GameKind),
    Blackjack(BlackjackInput),
    Snake(SnakeInput),
    Flappy(FlappyInput),
}

/// Resolve a terminal event against the current screen. `area` is the full
/// terminal area the last frame was drawn into.
pub fn map_event(event: &Event, screen: &Screen, show_rules: bool, area: Rect) -> Option<Intent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key, screen, show_rules),
        Event::Mouse(mouse) => map_mouse(*mouse, screen, show_rules, area),
        _ => None,
    }
}

fn map_key(key: KeyEvent, screen: &Screen, show_rules: bool) -> Option<Intent> {
    let game = match screen {
        Screen::Menu => return map_menu_key(key),
        Screen::Playing(game) => game,
    };

    if show_rules {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Esc => Some(Intent::ToggleRules),
            _ => None,
        };
    }

    if game.wants_text() {
        return map_name_entry_key(key);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Intent::ToMenu),
        KeyCode::Char('?') => return Some(Intent::ToggleRules),
        _ => {}
    }

    match game {
        ActiveGame::Blackjack(_) => map_blackjack_key(key).map(Intent::Blackjack),
        ActiveGame::Snake(_) => map_snake_key(key).map(Intent::Snake),
        ActiveGame::Flappy(_) => map_flappy_key(key).map(Intent::Flappy),
    }
}

fn map_menu_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::MenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::MenuDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::MenuSelect),
        KeyCode::Char('1') => Some(Intent::Launch(GameKind::Blackjack)),
        KeyCode::Char('2') => Some(Intent::Launch(GameKind::Snake)),
        KeyCode::Char('3') => Some(Intent::Launch(GameKind::Flappy)),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
        _ => None,
    }
}

fn map_blackjack_key(key: KeyEvent) -> Option<BlackjackInput> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(BlackjackInput::Deal)
        }
        KeyCode::Char('h') | KeyCode::Char('H') => Some(BlackjackInput::Hit),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(BlackjackInput::Stand),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BlackjackInput::Restart),
        _ => None,
    }
}

fn map_snake_key(key: KeyEvent) -> Option<SnakeInput> {
    match key.code {
        KeyCode::Up => Some(SnakeInput::Up),
        KeyCode::Down => Some(SnakeInput::Down),
        KeyCode::Left => Some(SnakeInput::Left),
        KeyCode::Right => Some(SnakeInput::Right),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SnakeInput::Restart),
        _ => None,
    }
}

fn map_flappy_key(key: KeyEvent) -> Option<FlappyInput> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(FlappyInput::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(FlappyInput::Restart),
        _ => None,
    }
}

/// Letters belong to the name prompt. Only Esc leaves.
fn map_name_entry_key(key: KeyEvent) -> Option<Intent> {
    let input = match key.code {
        KeyCode::Esc => return Some(Intent::ToMenu),
        KeyCode::Char(c) => FlappyInput::Char(c),
        KeyCode::Backspace => FlappyInput::Backspace,
        KeyCode::Enter => FlappyInput::Confirm,
        _ => return None,
    };
    Some(Intent::Flappy(input))
}

fn map_mouse(mouse: MouseEvent, screen: &Screen, show_rules: bool, area: Rect) -> Option<Intent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let Screen::Playing(game) = screen else {
        return None;
    };

    if contains(rules_hotspot_rect(area), mouse.column, mouse.row) {
        return Some(Intent::ToggleRules);
    }
    if show_rules {
        return None;
    }

    match game {
        ActiveGame::Snake(session) => {
            let over = session.game().game_over;
            (over && contains(restart_button_rect(area), mouse.column, mouse.row))
                .then_some(Intent::Snake(SnakeInput::RestartButton))
        }
        ActiveGame::Flappy(session) => {
            let game = session.game();
            if game.is_entering_name() {
                None
            } else if game.game_over {
                Some(Intent::Flappy(FlappyInput::Restart))
            } else {
                Some(Intent::Flappy(FlappyInput::Jump))
            }
        }
        ActiveGame::Blackjack(_) => None,
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
