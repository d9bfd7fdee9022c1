use log::trace;

use super::{Color, ColoredPiece, Move, Piece, Position, Square};

/// Rook home squares and the right each one guards.
const ROOK_HOMES: [(u8, u8, Color, bool); 4] = [
    (0, 0, Color::White, false),
    (0, 7, Color::White, true),
    (7, 0, Color::Black, false),
    (7, 7, Color::Black, true),
];

impl Position {
    /// Apply a move and report whether it was legal.
    ///
    /// The full prior state is pushed onto the history first. If the move
    /// leaves the mover's own king in check it is undone again and `false` is
    /// returned, leaving the position exactly as it was. A move that does not
    /// fit the current board is refused without touching anything: wrong piece
    /// on `from`, wrong side to move, a different occupant on `to`, castling
    /// the board does not allow, or en passant with no enemy pawn to take.
    pub fn make_move(&mut self, m: Move) -> bool {
        if !self.fits_board(m) {
            trace!("refusing {m}: does not fit {}", self.to_fen());
            return false;
        }

        let color = m.piece.color;
        self.push_snapshot();

        let en_passant_victim = if m.piece.piece == Piece::Pawn && m.is_capture() {
            self.en_passant_victim(m.from, m.to, color)
        } else {
            None
        };

        self.clear_square(m.from);
        let placed = m
            .promotion
            .map_or(m.piece, |promo| ColoredPiece::new(color, promo));
        self.set_piece(m.to, placed);

        if let Some(victim_sq) = en_passant_victim {
            self.clear_square(victim_sq);
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            m.from.offset(color.pawn_push())
        } else {
            None
        };

        if m.piece.piece == Piece::King {
            self.castling_rights.remove_color(color);
            if m.is_castling() {
                self.move_castling_rook(color, m.to.file() == 6);
            }
        }

        for (rank, file, owner, kingside) in ROOK_HOMES {
            let home = Square::new(rank, file);
            if home == Some(m.from) || home == Some(m.to) {
                self.castling_rights.remove(owner, kingside);
            }
        }

        if m.piece.piece == Piece::Pawn || m.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = color.opponent();

        if self.is_in_check(color) {
            trace!("rejecting {m}: leaves the {color} king in check");
            self.pop_snapshot();
            return false;
        }
        true
    }

    /// Revert the most recent move.
    ///
    /// Returns `false` (and changes nothing) when there is no move to undo.
    pub fn undo_move(&mut self) -> bool {
        self.pop_snapshot()
    }

    /// Hand-built moves are checked against the board before anything
    /// changes: the mover and its piece, the promotion, castling
    /// preconditions, and what actually stands on the captured square.
    fn fits_board(&self, m: Move) -> bool {
        let color = m.piece.color;
        if color != self.side_to_move || self.piece_at(m.from) != Some(m.piece) {
            return false;
        }

        let is_pawn = m.piece.piece == Piece::Pawn;
        let promotes = is_pawn && m.to.rank() == color.pawn_promotion_rank();
        match m.promotion {
            Some(Piece::Pawn | Piece::King) => return false,
            Some(_) if !promotes => return false,
            None if promotes => return false,
            _ => {}
        }

        if m.is_castling() {
            let home = Square::new(color.back_rank(), 4);
            return home == Some(m.from)
                && m.to.rank() == m.from.rank()
                && m.captured.is_none()
                && self.castling_allowed(color, m.to.file() == 6);
        }

        let diagonal = m.from.file() != m.to.file();
        match self.piece_at(m.to) {
            Some(occupant) => {
                occupant.color != color && m.captured == Some(occupant) && (!is_pawn || diagonal)
            }
            None if is_pawn && diagonal => {
                m.captured == Some(ColoredPiece::new(color.opponent(), Piece::Pawn))
                    && self.en_passant_victim(m.from, m.to, color).is_some()
            }
            None => m.captured.is_none(),
        }
    }

    fn move_castling_rook(&mut self, color: Color, kingside: bool) {
        let rank = color.back_rank();
        let (rook_from, rook_to) = if kingside { (7, 5) } else { (0, 3) };
        if let (Some(from), Some(to)) = (Square::new(rank, rook_from), Square::new(rank, rook_to)) {
            debug_assert_eq!(
                self.piece_at(from),
                Some(ColoredPiece::new(color, Piece::Rook)),
                "castling without a rook on {from}"
            );
            self.clear_square(from);
            self.set_piece(to, ColoredPiece::new(color, Piece::Rook));
        }
    }
}
