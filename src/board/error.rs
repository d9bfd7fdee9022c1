//! Error types for chess board operations.

use std::fmt;

use super::Color;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six space-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank describes a number of squares other than eight
    BadRankLength { rank: usize, squares: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Full-move number is not a positive integer
    InvalidFullmoveNumber { found: String },
    /// A side does not have exactly one king
    InvalidKingCount { color: Color, count: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN piece placement must have 8 ranks, found {found}")
            }
            FenError::BadRankLength { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid half-move clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid full-move number '{found}'")
            }
            FenError::InvalidKingCount { color, count } => {
                write!(f, "{color} must have exactly one king, found {count}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
    /// 0x88 index with an off-board bit set
    OffBoard { index: u8 },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::OffBoard { index } => {
                write!(f, "Index {index:#04x} is off the board")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_field_count() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_rank_length() {
        let err = FenError::BadRankLength { rank: 3, squares: 9 };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('9'));
    }

    #[test]
    fn test_fen_error_king_count() {
        let err = FenError::InvalidKingCount {
            color: Color::Black,
            count: 0,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_off_board() {
        let err = SquareError::OffBoard { index: 0x88 };
        assert!(err.to_string().contains("0x88"));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
