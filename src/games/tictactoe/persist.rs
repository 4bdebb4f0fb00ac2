//! Saving and restoring boards through a [`KeyValueStore`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::types::{Board, CELL_COUNT, Mark};
use crate::storage::{KeyValueStore, StorageError};

/// Key the board is stored under.
pub const BOARD_KEY: &str = "tic-tac-toe";

/// Tag every saved board carries.
pub const BOARD_FORMAT: &str = "strictly_board/tic-tac-toe";

/// Current layout of saved boards.
pub const BOARD_FORMAT_VERSION: u32 = 1;

/// Why a persisted board could not be restored.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The store could not be read.
    #[display("{}", _0)]
    Storage(StorageError),
    /// The bytes are not a well-formed saved board.
    #[display("Malformed board data: {}", _0)]
    #[from(ignore)]
    Decode(#[error(not(source))] String),
    /// The payload is tagged as something other than a board.
    #[display("Not a saved board (format '{}')", _0)]
    #[from(ignore)]
    WrongFormat(#[error(not(source))] String),
    /// The payload was written by an unknown layout version.
    #[display("Unsupported board format version {}", _0)]
    #[from(ignore)]
    UnsupportedVersion(#[error(not(source))] u32),
}

/// On-disk envelope.
///
/// The fixed-size `cells` array means a payload with any other cell count
/// fails to decode.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SavedBoard {
    format: String,
    version: u32,
    cells: [Mark; CELL_COUNT],
}

impl SavedBoard {
    fn encode(board: &Board) -> Result<Vec<u8>, StorageError> {
        let saved = SavedBoard {
            format: BOARD_FORMAT.to_string(),
            version: BOARD_FORMAT_VERSION,
            cells: *board.cells(),
        };
        serde_json::to_vec(&saved)
            .map_err(|e| StorageError::new(format!("Failed to encode board: {}", e)))
    }

    fn decode(bytes: &[u8]) -> Result<Board, LoadError> {
        let saved: SavedBoard =
            serde_json::from_slice(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
        if saved.format != BOARD_FORMAT {
            return Err(LoadError::WrongFormat(saved.format));
        }
        if saved.version != BOARD_FORMAT_VERSION {
            return Err(LoadError::UnsupportedVersion(saved.version));
        }
        Ok(Board::from_cells(saved.cells))
    }
}

impl Board {
    /// Restores the saved board, reporting why a stored value was rejected.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the store fails or the stored bytes do not
    /// decode to exactly one board.
    #[instrument(skip(store))]
    pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Board>, LoadError> {
        if !store.exists(BOARD_KEY)? {
            debug!("No saved board");
            return Ok(None);
        }
        let bytes = store.get(BOARD_KEY)?;
        let board = SavedBoard::decode(&bytes)?;
        info!("Saved board restored");
        Ok(Some(board))
    }

    /// Restores the saved board, or starts a fresh one.
    ///
    /// Never fails: a missing, unreadable or corrupt save yields an empty
    /// board and the reason is logged.
    #[instrument(skip(store))]
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Board {
        match Self::try_load(store) {
            Ok(Some(board)) => board,
            Ok(None) => Board::new(),
            Err(e) => {
                warn!(error = %e, "Discarding saved board, starting fresh");
                Board::new()
            }
        }
    }

    /// Writes the board to the store, replacing any earlier save.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store rejects the write.
    #[instrument(skip(self, store))]
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        let bytes = SavedBoard::encode(self)?;
        store.put(BOARD_KEY, &bytes)?;
        info!(len = bytes.len(), "Board saved");
        Ok(())
    }
}
