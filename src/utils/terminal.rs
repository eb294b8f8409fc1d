//! Terminal teardown.

use crossterm::event::DisableMouseCapture;
use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};

/// Put the terminal back the way the shell expects it.
///
/// Every step runs even if an earlier one failed; the first error is returned.
pub fn restore_terminal<W: Write>(terminal: &mut Terminal<CrosstermBackend<W>>) -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let mouse = terminal.backend_mut().execute(DisableMouseCapture).map(|_| ());
    let screen = terminal.backend_mut().execute(LeaveAlternateScreen).map(|_| ());
    let cursor = terminal.show_cursor();
    first_error([raw_mode, mouse, screen, cursor])
}

/// Collapse already-evaluated step results, keeping the first error.
pub fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let result = first_error([
            Ok(()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "mouse")),
            Err(io::Error::new(io::ErrorKind::Other, "screen")),
            Ok(()),
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "mouse");
    }

    #[test]
    fn test_all_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_later_steps_still_run_after_failure() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, fail: bool| {
            ran.push(name);
            if fail {
                Err(io::Error::new(io::ErrorKind::Other, name))
            } else {
                Ok(())
            }
        };
        let result = first_error([
            step("raw", false),
            step("mouse", true),
            step("screen", false),
            step("cursor", false),
        ]);
        assert_eq!(result.unwrap_err().to_string(), "mouse");
        assert_eq!(ran, vec!["raw", "mouse", "screen", "cursor"]);
    }
}
