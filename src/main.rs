//! Strictly Board - command-line front end
//!
//! Loads the saved board, applies one command, and saves it back.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, LineKind};
use strictly_board::{Board, BoardConfig, DiskStore, Slice};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a config file.
const CONFIG_ENV: &str = "STRICTLY_BOARD_CONFIG";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?;
    let mut store = config.store();
    run(cli.command, &mut store)
}

/// Picks the config file from the CLI, then the environment, then defaults.
#[instrument(skip(cli))]
fn resolve_config(cli: &Cli) -> Result<BoardConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(Into::into));

    let config = match path {
        Some(path) => BoardConfig::from_file(path)?,
        None => {
            debug!("No config file, using defaults");
            BoardConfig::default()
        }
    };

    Ok(match &cli.storage_dir {
        Some(dir) => config.with_storage_dir(dir),
        None => config,
    })
}

/// Executes one command against the store.
#[instrument(skip(store), fields(root = %store.root().display()))]
fn run(command: Command, store: &mut DiskStore) -> Result<()> {
    let mut board = Board::load(&*store);
    let before = board.clone();

    match command {
        Command::Show => {
            println!("{}", board);
            return Ok(());
        }
        Command::Line { kind, index } => {
            let slice = select_line(&board, kind, index)?;
            let marks = slice.marks()?;
            let symbols: Vec<String> = marks.iter().map(|m| m.to_string()).collect();
            println!("{}", symbols.join(" "));
            return Ok(());
        }
        Command::Set { x, y, mark } => board.set_space(x, y, mark)?,
        Command::Clear { x, y } => board.clear_space(x, y)?,
        Command::Reset => board.reset(),
    }

    if board == before {
        debug!("Board unchanged, nothing to save");
    } else {
        board.save(store)?;
        info!("Board updated");
    }
    println!("{}", board);
    Ok(())
}

fn select_line(board: &Board, kind: LineKind, index: Option<usize>) -> Result<Slice<'_>> {
    Ok(match (kind, index) {
        (LineKind::Row, Some(i)) => board.row(i),
        (LineKind::Column, Some(i)) => board.column(i),
        (LineKind::Row | LineKind::Column, None) => {
            bail!("An index is required for rows and columns")
        }
        (LineKind::Main, None) => board.main_diagonal(),
        (LineKind::Anti, None) => board.anti_diagonal(),
        (LineKind::Main | LineKind::Anti, Some(_)) => {
            bail!("Diagonals do not take an index")
        }
    })
}
