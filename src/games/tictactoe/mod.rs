mod error;
mod persist;
mod slice;
mod types;

pub use error::{Axis, BoardError};
pub use persist::{BOARD_FORMAT, BOARD_FORMAT_VERSION, BOARD_KEY, LoadError};
pub use slice::{Slice, SliceKind};
pub use types::{BOARD_SIZE, Board, Mark};
