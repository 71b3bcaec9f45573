//! Game configuration: defaults, then environment, then command-line flags.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `BLOCKFALL_WIDTH` | `--width` | 10 |
//! | `BLOCKFALL_HEIGHT` | `--height` | 20 |
//! | `BLOCKFALL_SEED` | `--seed` | random |
//! | `BLOCKFALL_RANDOMIZER` | `--randomizer` | `uniform` |
//! | `BLOCKFALL_LOG_PATH` | `--log` | off |
//!
//! Bad environment values are ignored; bad flags are errors.

use std::fmt;
use std::ops::RangeInclusive;

use anyhow::{anyhow, bail, Result};

use crate::core::{BagSource, GameState, ShapeSource, UniformSource};
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Accepted board widths; the I piece needs four columns.
pub const WIDTH_RANGE: RangeInclusive<usize> = 4..=64;
/// Accepted board heights.
pub const HEIGHT_RANGE: RangeInclusive<usize> = 4..=64;

pub const USAGE: &str = "\
usage: blockfall [--width N] [--height N] [--seed N] [--randomizer uniform|bag] [--log PATH]

keys: left/right/h/l/a/d move, up/k/w rotate, down/j/s soft drop,
      r restart after game over, q/esc quit";

/// How the next piece is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Independent uniform draws
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds
    Bag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Some(Randomizer::Uniform),
            "bag" | "7bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }

    /// Build a piece source; `None` seeds from the operating system.
    pub fn source(&self, seed: Option<u64>) -> Box<dyn ShapeSource + Send> {
        match (self, seed) {
            (Randomizer::Uniform, Some(seed)) => Box::new(UniformSource::from_seed(seed)),
            (Randomizer::Uniform, None) => Box::new(UniformSource::from_entropy()),
            (Randomizer::Bag, Some(seed)) => Box::new(BagSource::from_seed(seed)),
            (Randomizer::Bag, None) => Box::new(BagSource::from_entropy()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub randomizer: Randomizer,
    /// Append JSON-lines game events here when set
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: None,
            randomizer: Randomizer::Uniform,
            log_path: None,
        }
    }
}

/// One-line description, e.g. `10x20 bag seed 7`.
impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.randomizer.as_str())?;
        match self.seed {
            Some(seed) => write!(f, " seed {}", seed),
            None => write!(f, " random seed"),
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(GameConfig),
    Help,
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let width = lookup("BLOCKFALL_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .filter(|w| WIDTH_RANGE.contains(w))
            .unwrap_or(defaults.width);
        let height = lookup("BLOCKFALL_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|h| HEIGHT_RANGE.contains(h))
            .unwrap_or(defaults.height);
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());
        let randomizer = lookup("BLOCKFALL_RANDOMIZER")
            .and_then(|s| Randomizer::from_str(s.trim()))
            .unwrap_or(defaults.randomizer);
        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            width,
            height,
            seed,
            randomizer,
            log_path,
        }
    }

    /// Check dimensions are playable and drawable.
    pub fn validate(&self) -> Result<()> {
        if !WIDTH_RANGE.contains(&self.width) {
            bail!(
                "width {} out of range {}..={}",
                self.width,
                WIDTH_RANGE.start(),
                WIDTH_RANGE.end()
            );
        }
        if !HEIGHT_RANGE.contains(&self.height) {
            bail!(
                "height {} out of range {}..={}",
                self.height,
                HEIGHT_RANGE.start(),
                HEIGHT_RANGE.end()
            );
        }
        Ok(())
    }

    /// Fresh engine for this configuration
    pub fn new_game(&self) -> GameState {
        GameState::new(self.width, self.height, self.randomizer.source(self.seed))
    }
}

/// Apply command-line flags on top of `base`.
pub fn parse_args(base: GameConfig, args: &[String]) -> Result<CliCommand> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "-h" | "--help") {
            return Ok(CliCommand::Help);
        }

        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("missing value for {}", flag))?;
        match flag {
            "--width" => config.width = parse_number(flag, value)?,
            "--height" => config.height = parse_number(flag, value)?,
            "--seed" => config.seed = Some(parse_number(flag, value)?),
            "--randomizer" => {
                config.randomizer = Randomizer::from_str(value)
                    .ok_or_else(|| anyhow!("unknown randomizer: {}", value))?;
            }
            "--log" => config.log_path = Some(value.clone()),
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    config.validate()?;
    Ok(CliCommand::Run(config))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}
