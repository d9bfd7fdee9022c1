//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_core::board::{Color, Piece, PositionBuilder, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .side_to_move(Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
//! ```

use super::error::FenError;
use super::{CastlingRights, Color, ColoredPiece, Piece, Position, Square};

/// A fluent builder for [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, ColoredPiece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, white to move, no rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Start from an existing position, dropping its history.
    #[must_use]
    pub fn from_position(position: &Position) -> Self {
        PositionBuilder {
            pieces: position.pieces().collect(),
            side_to_move: position.side_to_move(),
            castling_rights: position.castling_rights(),
            en_passant_target: position.en_passant_target(),
            halfmove_clock: position.halfmove_clock(),
            fullmove_number: position.fullmove_number(),
        }
    }

    /// The standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_position(&Position::new())
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, ColoredPiece::new(color, piece)));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, kingside: bool) -> Self {
        self.castling_rights.set(color, kingside);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant_target = target;
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    ///
    /// Applies the same checks as FEN loading: each side needs exactly one
    /// king and the full-move number must be at least one.
    pub fn build(self) -> Result<Position, FenError> {
        if self.fullmove_number == 0 {
            return Err(FenError::InvalidFullmoveNumber {
                found: self.fullmove_number.to_string(),
            });
        }

        let mut position = Position::empty();
        for (square, piece) in self.pieces {
            position.set_piece(square, piece);
        }
        for color in [Color::White, Color::Black] {
            let count = position.king_count(color);
            if count != 1 {
                return Err(FenError::InvalidKingCount { color, count });
            }
        }

        position.side_to_move = self.side_to_move;
        position.castling_rights = self.castling_rights;
        position.en_passant_target = self.en_passant_target;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number;
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build().unwrap();
        assert_eq!(built, Position::new());
    }

    #[test]
    fn test_two_kings() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .build()
            .unwrap();
        assert_eq!(position.pieces().count(), 2);
        assert_eq!(position.king_square(Color::Black), Some(sq("e8")));
    }

    #[test]
    fn test_missing_king_is_rejected() {
        let err = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidKingCount {
                color: Color::Black,
                count: 0
            }
        );
    }

    #[test]
    fn test_replacing_a_piece() {
        let position = PositionBuilder::starting_position()
            .piece(sq("d1"), Color::White, Piece::Rook)
            .clear(sq("a1"))
            .build()
            .unwrap();
        assert_eq!(
            position.piece_at(sq("d1")),
            Some(ColoredPiece::new(Color::White, Piece::Rook))
        );
        assert_eq!(position.piece_at(sq("a1")), None);
    }

    #[test]
    fn test_castling_and_clocks() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::King)
            .castle(Color::White, true)
            .side_to_move(Color::Black)
            .halfmove_clock(7)
            .fullmove_number(30)
            .build()
            .unwrap();
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K2R b K - 7 30");
    }

    #[test]
    fn test_zero_fullmove_rejected() {
        let result = PositionBuilder::starting_position().fullmove_number(0).build();
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
    }
}
