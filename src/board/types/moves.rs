//! Move type and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{ColoredPiece, Piece};
use super::square::Square;

/// A move as a plain value.
///
/// A move carries everything needed to replay it later: it does not point into
/// any board slot, so it stays valid after the board has changed. `captured`
/// includes the pawn removed by an en passant capture.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) piece: ColoredPiece,
    pub(crate) captured: Option<ColoredPiece>,
    pub(crate) promotion: Option<Piece>,
}

/// Moves produced by the generator, in generation order.
pub type MoveList = Vec<Move>;

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(
        from: Square,
        to: Square,
        piece: ColoredPiece,
        captured: Option<ColoredPiece>,
        promotion: Option<Piece>,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            promotion,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece that moves
    #[inline]
    #[must_use]
    pub const fn piece(self) -> ColoredPiece {
        self.piece
    }

    /// The piece this move removes from the board, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<ColoredPiece> {
        self.captured
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if a king moves two files
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.piece.piece, Piece::King) && self.from.file().abs_diff(self.to.file()) == 2
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.piece.piece, Piece::Pawn) && self.from.rank().abs_diff(self.to.rank()) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
