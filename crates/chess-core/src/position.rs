//! Side-to-move detection, delegated to shakmaty.

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Position};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("Illegal position '{fen}': {reason}")]
    IllegalPosition { fen: String, reason: String },
}

/// Parse a full position with shakmaty's rules and report whose turn it is.
///
/// Fails for anything shakmaty would reject, including positions that are
/// structurally fine but illegal (no kings, side not to move in check, ...).
pub fn side_to_move(position: &str) -> Result<Color, PositionError> {
    let fen: Fen = position
        .trim()
        .parse()
        .map_err(|e: shakmaty::fen::ParseFenError| PositionError::InvalidFen {
            fen: position.to_string(),
            reason: e.to_string(),
        })?;

    let pos: Chess = fen
        .into_position(CastlingMode::Standard)
        .map_err(|e| PositionError::IllegalPosition {
            fen: position.to_string(),
            reason: e.to_string(),
        })?;

    Ok(pos.turn())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(side_to_move(fen), Ok(Color::White));
    }

    #[test]
    fn test_black_to_move() {
        let fen = "r1bBk2r/pppn1ppp/8/3n4/1b1P4/8/PP1QPPPP/R3KBNR b KQkq - 2 8";
        assert_eq!(side_to_move(fen), Ok(Color::Black));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(matches!(
            side_to_move("not a position"),
            Err(PositionError::InvalidFen { .. })
        ));
    }

    #[test]
    fn test_kingless_board_is_rejected() {
        assert!(side_to_move("8/8/8/8/8/8/8/8 b - - 0 1").is_err());
    }
}
