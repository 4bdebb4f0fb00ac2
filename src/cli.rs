//! Command-line interface for strictly_board.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_board::Mark;

/// Strictly Board - a persistent tic-tac-toe board
#[derive(Parser, Debug)]
#[command(name = "strictly_board")]
#[command(about = "Inspect and edit a saved tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $STRICTLY_BOARD_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved board (overrides the config file)
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the saved board
    Show,

    /// Put a mark on a cell and save
    Set {
        /// Column (0-2)
        x: usize,
        /// Row (0-2)
        y: usize,
        /// Mark to place (X, O or empty)
        mark: Mark,
    },

    /// Empty a cell and save
    Clear {
        /// Column (0-2)
        x: usize,
        /// Row (0-2)
        y: usize,
    },

    /// Empty every cell and save
    Reset,

    /// Print the marks along one line
    Line {
        /// Which line to read
        #[arg(value_enum)]
        kind: LineKind,
        /// Row or column number (required for rows and columns)
        index: Option<usize>,
    },
}

/// Line selector for the `line` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A row, top to bottom numbering
    Row,
    /// A column, left to right numbering
    Column,
    /// Top-left to bottom-right
    Main,
    /// Top-right to bottom-left
    Anti,
}
