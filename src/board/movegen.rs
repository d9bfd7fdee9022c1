//! Pseudo-legal move generation and the legality filter built on `make_move`.

use super::attacks::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::{Color, ColoredPiece, Move, MoveList, Piece, Position, Square, PROMOTION_PIECES};

/// Game-end state as seen by the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl Position {
    /// Generate pseudo-legal moves for the side to move.
    ///
    /// Moves follow each piece's movement and capture pattern but may leave the
    /// mover's king in check; `make_move` rejects those. The list is rebuilt on
    /// every call and its order is stable: squares are visited from a1 to h8.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::with_capacity(64);
        let color = self.side_to_move;
        for from in Square::all() {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            match piece.piece {
                Piece::Pawn => self.generate_pawn_moves(from, piece, &mut moves),
                Piece::Knight => self.generate_step_moves(from, piece, &KNIGHT_OFFSETS, &mut moves),
                Piece::Bishop => self.generate_sliding_moves(from, piece, &BISHOP_DIRECTIONS, &mut moves),
                Piece::Rook => self.generate_sliding_moves(from, piece, &ROOK_DIRECTIONS, &mut moves),
                Piece::Queen => self.generate_sliding_moves(from, piece, &QUEEN_DIRECTIONS, &mut moves),
                Piece::King => {
                    self.generate_step_moves(from, piece, &KING_OFFSETS, &mut moves);
                    self.generate_castling_moves(from, piece, &mut moves);
                }
            }
        }
        moves
    }

    /// Moves for the side to move that do not leave its own king in check.
    ///
    /// Each pseudo-legal move is attempted and undone; the position is
    /// unchanged afterwards.
    pub fn legal_moves(&mut self) -> MoveList {
        let pseudo_moves = self.generate_moves();
        self.filter_legal(pseudo_moves)
    }

    /// Legal moves of the piece standing on `from` (empty if it is not the
    /// mover's piece).
    pub fn legal_moves_from(&mut self, from: Square) -> MoveList {
        let pseudo_moves = self
            .generate_moves()
            .into_iter()
            .filter(|m| m.from() == from)
            .collect();
        self.filter_legal(pseudo_moves)
    }

    fn filter_legal(&mut self, moves: MoveList) -> MoveList {
        moves
            .into_iter()
            .filter(|&m| {
                let legal = self.make_move(m);
                if legal {
                    self.undo_move();
                }
                legal
            })
            .collect()
    }

    /// Returns true if the side to move has at least one legal move.
    pub fn has_legal_move(&mut self) -> bool {
        for m in self.generate_moves() {
            if self.make_move(m) {
                self.undo_move();
                return true;
            }
        }
        false
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    /// Check, checkmate and stalemate state for the side to move.
    ///
    /// Fifty-move and repetition draws are not detected.
    pub fn status(&mut self) -> GameStatus {
        let in_check = self.is_in_check(self.side_to_move);
        match (in_check, self.has_legal_move()) {
            (true, false) => GameStatus::Checkmate {
                winner: self.side_to_move.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for m in self.generate_moves() {
            if !self.make_move(m) {
                continue;
            }
            nodes += if depth == 1 { 1 } else { self.perft(depth - 1) };
            self.undo_move();
        }
        nodes
    }

    fn push_pawn_move(&self, m: Move, moves: &mut MoveList) {
        if m.to().rank() == m.piece().color.pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(Move { promotion: Some(promo), ..m });
            }
        } else {
            moves.push(m);
        }
    }

    fn generate_pawn_moves(&self, from: Square, pawn: ColoredPiece, moves: &mut MoveList) {
        let color = pawn.color;
        let push = color.pawn_push();

        if let Some(one) = from.offset(push).filter(|&sq| self.is_empty(sq)) {
            self.push_pawn_move(Move::new(from, one, pawn, None, None), moves);
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(push).filter(|&sq| self.is_empty(sq)) {
                    moves.push(Move::new(from, two, pawn, None, None));
                }
            }
        }

        for side in [-1, 1] {
            let Some(target) = from.offset(push + side) else {
                continue;
            };
            match self.piece_at(target) {
                Some(victim) if victim.color != color => {
                    self.push_pawn_move(Move::new(from, target, pawn, Some(victim), None), moves);
                }
                None if self.en_passant_victim(from, target, color).is_some() => {
                    let captured = ColoredPiece::new(color.opponent(), Piece::Pawn);
                    moves.push(Move::new(from, target, pawn, Some(captured), None));
                }
                _ => {}
            }
        }
    }

    /// One step per offset: knights and the king.
    fn generate_step_moves(&self, from: Square, piece: ColoredPiece, offsets: &[i8], moves: &mut MoveList) {
        for to in offsets.iter().filter_map(|&d| from.offset(d)) {
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to, piece, None, None)),
                Some(victim) if victim.color != piece.color => {
                    moves.push(Move::new(from, to, piece, Some(victim), None));
                }
                Some(_) => {}
            }
        }
    }

    fn generate_sliding_moves(
        &self,
        from: Square,
        piece: ColoredPiece,
        directions: &[i8],
        moves: &mut MoveList,
    ) {
        for &d in directions {
            let mut current = from;
            while let Some(to) = current.offset(d) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, piece, None, None)),
                    Some(victim) => {
                        if victim.color != piece.color {
                            moves.push(Move::new(from, to, piece, Some(victim), None));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    fn generate_castling_moves(&self, from: Square, king: ColoredPiece, moves: &mut MoveList) {
        if Square::new(king.color.back_rank(), 4) != Some(from) {
            return;
        }
        for (kingside, dest) in [(true, 6), (false, 2)] {
            if !self.castling_allowed(king.color, kingside) {
                continue;
            }
            if let Some(to) = Square::new(king.color.back_rank(), dest) {
                moves.push(Move::new(from, to, king, None, None));
            }
        }
    }

    /// Castling needs the right, the king and rook on their home squares, an
    /// empty path between them, and the king's origin and transit squares
    /// unattacked. The destination square is left to `make_move`'s self-check
    /// test.
    pub(crate) fn castling_allowed(&self, color: Color, kingside: bool) -> bool {
        let back_rank = color.back_rank();
        let on_rank = |file: u8| Square::new(back_rank, file);
        let (rook_file, between, transit): (u8, &[u8], u8) = if kingside {
            (7, &[5, 6], 5)
        } else {
            (0, &[1, 2, 3], 3)
        };
        let (Some(king_sq), Some(transit_sq)) = (on_rank(4), on_rank(transit)) else {
            return false;
        };

        let in_place = self.castling_rights.has(color, kingside)
            && self.piece_at(king_sq) == Some(ColoredPiece::new(color, Piece::King))
            && on_rank(rook_file).and_then(|sq| self.piece_at(sq))
                == Some(ColoredPiece::new(color, Piece::Rook));
        let path_clear = between
            .iter()
            .all(|&file| on_rank(file).is_some_and(|sq| self.is_empty(sq)));
        if !in_place || !path_clear {
            return false;
        }

        let enemy = color.opponent();
        !self.is_square_attacked(king_sq, enemy) && !self.is_square_attacked(transit_sq, enemy)
    }

    /// Square of the pawn that an en passant capture from `from` to `to`
    /// removes, if such a capture is available to `color`.
    ///
    /// `to` must be the empty en passant target one diagonal step ahead of
    /// `from`, with an enemy pawn standing beside `from` on the target's file.
    pub(crate) fn en_passant_victim(&self, from: Square, to: Square, color: Color) -> Option<Square> {
        let push = color.pawn_push();
        let diagonal = [push - 1, push + 1].iter().any(|&d| from.offset(d) == Some(to));
        if !diagonal || self.en_passant_target != Some(to) || !self.is_empty(to) {
            return None;
        }
        let victim = Square::new(from.rank(), to.file())?;
        (self.piece_at(victim) == Some(ColoredPiece::new(color.opponent(), Piece::Pawn)))
            .then_some(victim)
    }
}
