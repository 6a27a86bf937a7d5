pub mod board;
pub mod serialization;
pub mod types;

pub use board::{Board, BOARD_SIZE, CELL_COUNT};
pub use types::{Cell, PlayerId, Position};
