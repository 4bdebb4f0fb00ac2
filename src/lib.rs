//! Strictly Board library - a persistent tic-tac-toe board
//!
//! Holds nine labeled cells, validates coordinates, slices out rows,
//! columns and diagonals for external win checkers, and round-trips the
//! board through a pluggable key-value store.
//!
//! # Architecture
//!
//! - **Games**: the [`Board`], its [`Mark`]s and line [`Slice`]s
//! - **Storage**: the [`KeyValueStore`] contract with memory and disk backends
//! - **Config**: TOML configuration for the command-line front end
//!
//! # Example
//!
//! ```
//! use strictly_board::{Board, Mark, MemoryStore};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut store = MemoryStore::new();
//!
//! let mut board = Board::load(&store);
//! board.set_space(1, 1, Mark::X)?;
//! board.save(&mut store)?;
//!
//! let board = Board::load(&store);
//! assert_eq!(board.get_space(1, 1)?, Mark::X);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod storage;

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Axis, BOARD_FORMAT, BOARD_FORMAT_VERSION, BOARD_KEY, BOARD_SIZE, Board, BoardError, LoadError,
    Mark, Slice, SliceKind,
};

// Crate-level exports - Storage backends
pub use storage::{DiskStore, KeyValueStore, MemoryStore, StorageError};
