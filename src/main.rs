use arcade::config::HELP_TEXT;
use arcade::core::constants::FRAME_INTERVAL_MS;
use arcade::ui::draw_ui;
use arcade::utils::terminal::restore_terminal;
use arcade::utils::{build_info, persistence};
use arcade::{parse_args, App, CliCommand};
use crossterm::event::{self, EnableMouseCapture};
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            println!("{}", HELP_TEXT);
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'arcade --help' for usage.");
            std::process::exit(1);
        }
    };

    let data_dir = match persistence::data_dir(config.data_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Could not open data directory: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(data_dir, config.seed);
    if let Some(kind) = config.game {
        app.launch(kind);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal, even when the loop failed
    let restored = restore_terminal(&mut terminal);

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    result.and(restored)
}

/// Main loop: advance, draw, then wait up to one frame for input.
fn run(terminal: &mut Term, app: &mut App) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

    while !app.should_quit {
        app.frame(Instant::now());
        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(frame_interval)? {
            let ev = event::read()?;
            let size = terminal.size()?;
            app.handle_event(&ev, size);
        }
    }
    Ok(())
}
