//! Attack and check detection by ray casting over the 0x88 board.

use super::{Color, ColoredPiece, Piece, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [33, 31, 18, 14, -14, -18, -31, -33];
pub(crate) const KING_OFFSETS: [i8; 8] = [17, 16, 15, 1, -1, -15, -16, -17];
pub(crate) const BISHOP_DIRECTIONS: [i8; 4] = [17, 15, -15, -17];
pub(crate) const ROOK_DIRECTIONS: [i8; 4] = [16, 1, -1, -16];
pub(crate) const QUEEN_DIRECTIONS: [i8; 8] = KING_OFFSETS;

impl Position {
    /// Returns true if any piece of `attacker` attacks `square`.
    ///
    /// Occupancy of `square` itself does not matter.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let push = attacker.pawn_push();
        let pawn = ColoredPiece::new(attacker, Piece::Pawn);
        if [push - 1, push + 1]
            .iter()
            .any(|&d| square.offset(-d).and_then(|sq| self.piece_at(sq)) == Some(pawn))
        {
            return true;
        }

        if self.hits_by_offset(square, &KNIGHT_OFFSETS, ColoredPiece::new(attacker, Piece::Knight))
            || self.hits_by_offset(square, &KING_OFFSETS, ColoredPiece::new(attacker, Piece::King))
        {
            return true;
        }

        self.hits_by_ray(square, &BISHOP_DIRECTIONS, attacker, Piece::Bishop)
            || self.hits_by_ray(square, &ROOK_DIRECTIONS, attacker, Piece::Rook)
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    fn hits_by_offset(&self, square: Square, offsets: &[i8], attacker: ColoredPiece) -> bool {
        offsets
            .iter()
            .filter_map(|&d| square.offset(d))
            .any(|sq| self.piece_at(sq) == Some(attacker))
    }

    /// Walk each ray until the first occupied square; a hit is an enemy
    /// `slider` or queen.
    fn hits_by_ray(&self, square: Square, directions: &[i8], attacker: Color, slider: Piece) -> bool {
        directions.iter().any(|&d| {
            let mut current = square;
            while let Some(next) = current.offset(d) {
                if let Some(piece) = self.piece_at(next) {
                    return piece.color == attacker
                        && (piece.piece == slider || piece.piece == Piece::Queen);
                }
                current = next;
            }
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position_attacks() {
        let position = Position::new();
        // Pawn and knight cover the third rank
        assert!(position.is_square_attacked(sq("e3"), Color::White));
        assert!(position.is_square_attacked(sq("a3"), Color::White));
        assert!(!position.is_square_attacked(sq("e4"), Color::White));
        assert!(position.is_square_attacked(sq("f6"), Color::Black));
        assert!(!position.is_square_attacked(sq("e5"), Color::Black));
    }

    #[test]
    fn test_pawn_attacks_are_directional() {
        let position = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        assert!(position.is_square_attacked(sq("d5"), Color::White));
        assert!(position.is_square_attacked(sq("f5"), Color::White));
        assert!(!position.is_square_attacked(sq("d3"), Color::White));
        assert!(!position.is_square_attacked(sq("e5"), Color::White));
    }

    #[test]
    fn test_rays_stop_at_blockers() {
        let position = Position::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1");
        assert!(position.is_square_attacked(sq("c4"), Color::Black));
        assert!(position.is_square_attacked(sq("d4"), Color::Black));
        assert!(!position.is_square_attacked(sq("e4"), Color::Black));
        assert!(!position.is_in_check(Color::White));
    }

    #[test]
    fn test_queen_attacks_both_ways() {
        let position = Position::from_fen("4k3/8/8/3q4/8/8/K7/8 w - - 0 1");
        assert!(position.is_square_attacked(sq("a2"), Color::Black));
        assert!(position.is_square_attacked(sq("d1"), Color::Black));
        assert!(position.is_in_check(Color::White));
    }

    #[test]
    fn test_bishop_does_not_attack_straight() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/b3K3 w - - 0 1");
        assert!(!position.is_in_check(Color::White));
        assert!(position.is_square_attacked(sq("e5"), Color::Black));
    }

    #[test]
    fn test_bishop_is_not_check_after_italian_development() {
        let position =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/2B1P3/8/PPPP1PPP/RNBQK1NR b KQkq - 1 2");
        assert!(!position.is_in_check(Color::Black));
        assert!(!position.is_in_check(Color::White));
    }
}
