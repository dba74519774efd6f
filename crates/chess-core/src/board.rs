//! Piece-placement parsing for puzzle display.
//!
//! Only the first FEN field is read here. Everything after it (side to move,
//! castling, clocks) is optional and ignored; see [`crate::position`] for turn
//! detection.

use shakmaty::{Color, File, Piece, Rank, Role, Square};
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Position string is empty")]
    Empty,

    #[error("Expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("Rank {rank} describes {files} files")]
    RankWidth { rank: usize, files: usize },

    #[error("Unknown piece '{0}'")]
    UnknownPiece(char),
}

/// An occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub color: Color,
    pub role: Role,
    pub square: Square,
}

impl Cell {
    pub fn piece(&self) -> Piece {
        Piece {
            color: self.color,
            role: self.role,
        }
    }
}

/// 8x8 grid. Rank 0 is the top rank of the notation (rank 8), file 0 is the a-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    ranks: [[Option<Cell>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            ranks: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn ranks(&self) -> &[[Option<Cell>; BOARD_SIZE]; BOARD_SIZE] {
        &self.ranks
    }

    /// Cell at grid coordinates, `None` when empty or out of range.
    pub fn cell(&self, rank: usize, file: usize) -> Option<&Cell> {
        self.ranks.get(rank)?.get(file)?.as_ref()
    }

    /// Occupied cells, top rank first.
    pub fn pieces(&self) -> impl Iterator<Item = &Cell> {
        self.ranks.iter().flatten().filter_map(Option::as_ref)
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }
}

/// Parse the piece-placement field of a FEN-like string into a [`Board`].
///
/// Trailing fields may be missing or malformed. Chess legality is not checked.
pub fn parse_board(position: &str) -> Result<Board, BoardError> {
    let placement = position.split_whitespace().next().ok_or(BoardError::Empty)?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(BoardError::RankCount(rows.len()));
    }

    let mut board = Board::empty();
    for (rank, row) in rows.iter().enumerate() {
        let mut file = 0usize;
        for ch in row.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as usize;
                continue;
            }

            let piece = Piece::from_char(ch).ok_or(BoardError::UnknownPiece(ch))?;
            if file >= BOARD_SIZE {
                return Err(BoardError::RankWidth {
                    rank,
                    files: file + 1,
                });
            }
            board.ranks[rank][file] = Some(Cell {
                color: piece.color,
                role: piece.role,
                square: square_at(rank, file),
            });
            file += 1;
        }

        if file != BOARD_SIZE {
            return Err(BoardError::RankWidth { rank, files: file });
        }
    }

    Ok(board)
}

/// Square for grid coordinates (rank 0 = 8th rank).
///
/// # Panics
///
/// Panics if `rank` or `file` is not below 8.
pub fn square_at(rank: usize, file: usize) -> Square {
    assert!(rank < BOARD_SIZE && file < BOARD_SIZE, "({rank}, {file}) is off the board");
    Square::from_coords(
        File::new(file as u32),
        Rank::new((BOARD_SIZE - 1 - rank) as u32),
    )
}

/// Algebraic name for grid coordinates: `(0, 0)` is "a8", `(7, 7)` is "h1".
pub fn square_name(rank: usize, file: usize) -> String {
    square_at(rank, file).to_string()
}
