//! Command-line configuration.

use crate::games::GameKind;
use std::path::PathBuf;

/// Runtime settings gathered from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Skip the menu and start this game.
    pub game: Option<GameKind>,
    /// Overrides `ARCADE_DATA_DIR` and `~/.arcade/`.
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// What `main` should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(Config),
    Version,
    Help,
}

pub const HELP_TEXT: &str = "\
Arcade - Terminal Arcade Games

Usage: arcade [game] [options]

Games:
  blackjack        Beat the dealer to 21
  snake            Eat, grow, don't bite yourself
  flappy           Thread the bird through the pipes

Options:
  --data-dir PATH  Where record files live (default ~/.arcade)
  --seed N         Fixed random seed
  --version        Show version information
  --help           Show this help message";

/// Parse arguments, program name excluded.
pub fn parse_args<I>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--data-dir" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--data-dir needs a path".to_string())?;
                config.data_dir = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed needs a number".to_string())?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                config.seed = Some(seed);
            }
            other => match GameKind::from_arg(other) {
                Some(kind) if config.game.is_none() => config.game = Some(kind),
                Some(_) => return Err(format!("Only one game at a time: {}", other)),
                None => return Err(format!("Unknown command: {}", other)),
            },
        }
    }

    Ok(CliCommand::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_opens_menu() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(Config::default())));
    }

    #[test]
    fn test_game_and_options() {
        let cmd = parse(&["snake", "--seed", "42", "--data-dir", "/tmp/arcade"]).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Run(Config {
                game: Some(GameKind::Snake),
                data_dir: Some(PathBuf::from("/tmp/arcade")),
                seed: Some(42),
            })
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["flappy", "--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_errors() {
        assert!(parse(&["pong"]).unwrap_err().contains("pong"));
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--seed", "abc"]).unwrap_err().contains("abc"));
        assert!(parse(&["--data-dir"]).is_err());
        assert!(parse(&["snake", "flappy"]).is_err());
    }
}
