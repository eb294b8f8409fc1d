//! Integration test: every screen draws without panicking on small and
//! large terminals.

use arcade::app::App;
use arcade::games::GameKind;
use arcade::input::Intent;
use arcade::ui::draw_ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw_ui(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn app() -> App {
    let dir = std::env::temp_dir().join(format!("arcade-ui-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    App::new(dir, Some(99))
}

#[test]
fn test_menu_lists_games() {
    let app = app();
    let screen = draw(&app, 80, 24);
    for kind in GameKind::ALL {
        assert!(screen.contains(kind.name()));
    }
}

#[test]
fn test_game_screens_draw_at_any_size() {
    for kind in GameKind::ALL {
        let mut app = app();
        app.launch(kind);
        let t0 = Instant::now();
        for i in 0..30 {
            app.frame(t0 + Duration::from_millis(16 * i));
        }
        for (w, h) in [(120, 40), (80, 24), (30, 10), (4, 2)] {
            draw(&app, w, h);
        }
        let screen = draw(&app, 100, 30);
        assert!(screen.contains(kind.name()));
        assert!(screen.contains("Rules"));
    }
}

#[test]
fn test_rules_overlay_and_game_over_screens() {
    let mut app = app();
    app.launch(GameKind::Snake);
    app.apply(Intent::ToggleRules);
    assert!(draw(&app, 100, 30).contains("Snake Rules"));
    app.apply(Intent::ToggleRules);

    app.apply(Intent::Snake(arcade::games::snake::SnakeInput::Up));
    let t0 = Instant::now();
    for i in 0..40 {
        app.frame(t0 + Duration::from_millis(120 * i));
    }
    assert!(draw(&app, 100, 30).contains("GAME OVER"));
}
