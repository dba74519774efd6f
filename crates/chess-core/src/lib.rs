//! Chess primitives shared by the puzzle engine.
//!
//! Boards are parsed from the placement field of a FEN for display. Anything
//! that needs real chess rules (whose turn it is) goes through shakmaty.

pub mod board;
pub mod position;
pub mod puzzle;

pub use board::{parse_board, square_name, Board, BoardError, Cell};
pub use position::{side_to_move, PositionError};
pub use puzzle::Puzzle;
pub use shakmaty::{Color, Role, Square};
