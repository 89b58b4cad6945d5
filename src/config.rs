//! Driver configuration.
//!
//! A [`DriverConfig`] can come from defaults, a JSON file, command-line
//! flags, or a mix: flags override the file, the file overrides defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::DeckPolicy;
use crate::error::LandfallError;

/// Configuration for a batch of simulated games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Number of independent games to play.
    pub num_games: usize,
    /// Fewest turns a game may run.
    pub min_turns: usize,
    /// Most turns a game may run (inclusive).
    pub max_turns: usize,
    /// Number of parallel threads (1 = sequential).
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// What happens to cards after they are drawn.
    pub deck_policy: DeckPolicy,
    /// Suppress per-game progress output.
    #[serde(skip)]
    pub quiet: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            num_games: 10_000,
            min_turns: 50,
            max_turns: 150,
            threads: 4,
            seed: 0,
            deck_policy: DeckPolicy::Exhaust,
            quiet: false,
        }
    }
}

impl DriverConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LandfallError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LandfallError> {
        let data = fs::read_to_string(path).map_err(|source| LandfallError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        DriverConfig::from_json_str(&data)
    }

    /// Checks that the config describes a runnable batch.
    pub fn validate(&self) -> Result<(), LandfallError> {
        if self.num_games == 0 {
            return Err(LandfallError::Zero("games"));
        }
        if self.threads == 0 {
            return Err(LandfallError::Zero("threads"));
        }
        if self.min_turns > self.max_turns {
            return Err(LandfallError::InvalidTurnRange {
                min: self.min_turns,
                max: self.max_turns,
            });
        }
        Ok(())
    }
}

/// Everything the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config: DriverConfig,
    /// Where to write the JSON report, if anywhere.
    pub output: Option<PathBuf>,
    pub help: bool,
}

/// Parses command-line arguments (without the program name).
///
/// `--config FILE` is applied first regardless of its position so that the
/// other flags always override it.
pub fn parse_args(args: &[String]) -> Result<CliOptions, LandfallError> {
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args
                .get(i + 1)
                .ok_or_else(|| LandfallError::MissingValue("--config".to_string()))?;
            DriverConfig::load(Path::new(path))?
        }
        None => DriverConfig::default(),
    };
    let mut output = None;
    let mut help = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let flag = arg.as_str();
        match flag {
            "--games" => config.num_games = value(flag, iter.next())?,
            "--min-turns" => config.min_turns = value(flag, iter.next())?,
            "--max-turns" => config.max_turns = value(flag, iter.next())?,
            "--turns" => {
                let turns = value(flag, iter.next())?;
                config.min_turns = turns;
                config.max_turns = turns;
            }
            "--threads" => config.threads = value(flag, iter.next())?,
            "--seed" => config.seed = value(flag, iter.next())?,
            "--recycle" => config.deck_policy = DeckPolicy::Recycle,
            "--config" => {
                iter.next();
            }
            "--output" => {
                let path = iter
                    .next()
                    .ok_or_else(|| LandfallError::MissingValue(flag.to_string()))?;
                output = Some(PathBuf::from(path));
            }
            "--quiet" => config.quiet = true,
            "--help" | "-h" => help = true,
            other => return Err(LandfallError::UnknownArgument(other.to_string())),
        }
    }

    if !help {
        config.validate()?;
    }
    Ok(CliOptions { config, output, help })
}

/// Parses the value following `flag`.
fn value<T: FromStr>(flag: &str, raw: Option<&String>) -> Result<T, LandfallError> {
    let raw = raw.ok_or_else(|| LandfallError::MissingValue(flag.to_string()))?;
    raw.parse().map_err(|_| LandfallError::InvalidValue {
        flag: flag.to_string(),
        value: raw.clone(),
    })
}

/// Returns the usage text for the `landfall` binary.
pub fn usage() -> &'static str {
    "Usage: landfall [OPTIONS]

Options:
  --games N        Number of games to play (default: 10000)
  --min-turns N    Fewest turns per game (default: 50)
  --max-turns N    Most turns per game (default: 150)
  --turns N        Play exactly N turns per game
  --threads N      Number of parallel threads (default: 4)
  --seed N         Random seed, 0 for entropy (default: 0)
  --recycle        Return drawn cards to the bottom of the deck
  --config FILE    Load options from a JSON file
  --output FILE    Write a JSON report to FILE
  --quiet          Suppress progress and the table on stdout
  --help           Show this help"
}
