//! Command-line and environment configuration.
//!
//! | Flag           | Env                | Default            |
//! |----------------|--------------------|--------------------|
//! | `--difficulty` | `SNAKE_DIFFICULTY` | `normal`           |
//! | `--width`      | `SNAKE_WIDTH`      | from terminal size |
//! | `--height`     | `SNAKE_HEIGHT`     | from terminal size |
//! | `--seed`       | `SNAKE_SEED`       | from the clock     |
//! | `--log-file`   | `SNAKE_LOG_FILE`   | logging disabled   |

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::types::{Difficulty, GridSize, MIN_GRID_COLS, MIN_GRID_ROWS};

#[derive(Debug, Parser)]
#[command(name = "tui-snake")]
#[command(version, about = "Terminal snake with three difficulty levels")]
pub struct Cli {
    /// Level highlighted on the menu
    #[arg(long, value_enum, default_value_t = DifficultyArg::Normal, env = "SNAKE_DIFFICULTY")]
    pub difficulty: DifficultyArg,

    /// Grid width in cells (requires --height)
    #[arg(long, env = "SNAKE_WIDTH")]
    pub width: Option<u16>,

    /// Grid height in cells (requires --width)
    #[arg(long, env = "SNAKE_HEIGHT")]
    pub height: Option<u16>,

    /// Seed for food placement
    #[arg(long, env = "SNAKE_SEED")]
    pub seed: Option<u32>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "SNAKE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    /// 120 ms per step
    Easy,
    /// 75 ms per step
    Normal,
    /// 45 ms per step
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Validated run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub difficulty: Difficulty,
    /// Fixed grid; `None` follows the terminal size.
    pub grid: Option<GridSize>,
    pub seed: Option<u32>,
    pub log_file: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let grid = match (cli.width, cli.height) {
            (None, None) => None,
            (Some(cols), Some(rows)) => match GridSize::new(cols, rows) {
                Some(grid) => Some(grid),
                None => bail!(
                    "grid {cols}x{rows} is out of range (minimum {MIN_GRID_COLS}x{MIN_GRID_ROWS})"
                ),
            },
            _ => bail!("--width and --height must be given together"),
        };

        Ok(Self {
            difficulty: cli.difficulty.into(),
            grid,
            seed: cli.seed,
            log_file: cli.log_file,
        })
    }
}
