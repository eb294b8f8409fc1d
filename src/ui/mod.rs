pub mod blackjack_scene;
pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod snake_scene;

use crate::app::{App, Screen};
use crate::games::ActiveGame;
use game_common::render_rules_overlay;
use ratatui::Frame;

/// Draw the whole screen for the current application state.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.size();

    let game = match &app.screen {
        Screen::Menu => {
            menu_scene::render_menu(frame, area, app.menu_index, &app.menu_bests);
            return;
        }
        Screen::Playing(game) => game,
    };

    let rules = match game {
        ActiveGame::Blackjack(session) => {
            blackjack_scene::render_blackjack_scene(frame, area, session);
            blackjack_scene::RULES
        }
        ActiveGame::Snake(session) => {
            snake_scene::render_snake_scene(frame, area, session);
            snake_scene::RULES
        }
        ActiveGame::Flappy(session) => {
            flappy_scene::render_flappy_scene(frame, area, session);
            flappy_scene::RULES
        }
    };

    if app.show_rules {
        render_rules_overlay(frame, area, game.kind().name(), rules);
    }
}
