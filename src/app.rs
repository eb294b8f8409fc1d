//! Application state: the menu, the active game and the rules overlay.

use crate::games::{ActiveGame, GameKind};
use crate::input::{map_event, Intent};
use crossterm::event::Event;
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Top-level screen.
#[derive(Debug)]
pub enum Screen {
    Menu,
    Playing(ActiveGame),
}

#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    /// Highlighted entry in `GameKind::ALL`.
    pub menu_index: usize,
    pub show_rules: bool,
    /// Stored best for each game, refreshed whenever the menu opens.
    pub menu_bests: Vec<String>,
    pub should_quit: bool,
    data_dir: PathBuf,
    seed: Option<u64>,
}

impl App {
    pub fn new(data_dir: PathBuf, seed: Option<u64>) -> Self {
        let mut app = Self {
            screen: Screen::Menu,
            menu_index: 0,
            show_rules: false,
            menu_bests: Vec::new(),
            should_quit: false,
            data_dir,
            seed,
        };
        app.refresh_bests();
        app
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn launch(&mut self, kind: GameKind) {
        if let Some(i) = GameKind::ALL.iter().position(|k| *k == kind) {
            self.menu_index = i;
        }
        self.show_rules = false;
        self.screen = Screen::Playing(ActiveGame::launch(kind, &self.data_dir, self.seed));
    }

    pub fn back_to_menu(&mut self) {
        self.show_rules = false;
        self.screen = Screen::Menu;
        self.refresh_bests();
    }

    fn refresh_bests(&mut self) {
        self.menu_bests = GameKind::ALL
            .iter()
            .map(|kind| kind.best_description(&self.data_dir))
            .collect();
    }

    /// Handle one terminal event. `area` is the terminal size.
    pub fn handle_event(&mut self, event: &Event, area: Rect) {
        if let Some(intent) = map_event(event, &self.screen, self.show_rules, area) {
            self.apply(intent);
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Quit => self.should_quit = true,
            Intent::ToMenu => self.back_to_menu(),
            Intent::ToggleRules => self.show_rules = !self.show_rules,
            Intent::MenuUp => self.menu_index = self.menu_index.saturating_sub(1),
            Intent::MenuDown => {
                if self.menu_index + 1 < GameKind::ALL.len() {
                    self.menu_index += 1;
                }
            }
            Intent::MenuSelect => self.launch(GameKind::ALL[self.menu_index]),
            Intent::Launch(kind) => self.launch(kind),
            Intent::Blackjack(input) => {
                if let Screen::Playing(ActiveGame::Blackjack(session)) = &mut self.screen {
                    session.input(input);
                }
            }
            Intent::Snake(input) => {
                if let Screen::Playing(ActiveGame::Snake(session)) = &mut self.screen {
                    session.input(input);
                }
            }
            Intent::Flappy(input) => {
                if let Screen::Playing(ActiveGame::Flappy(session)) = &mut self.screen {
                    session.input(input);
                }
            }
        }
    }

    /// Advance the active game. Time stands still while the rules are open.
    pub fn frame(&mut self, now: Instant) {
        if let Screen::Playing(game) = &mut self.screen {
            if self.show_rules {
                game.pause_clock();
            } else {
                game.frame(now);
            }
        }
    }
}
