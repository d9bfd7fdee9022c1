use super::state::{Position, Slots};
use super::{CastlingRights, Color, Square};

/// Full copy of a position's state, pushed before every applied move.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    board: Slots,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Position {
    pub(crate) fn push_snapshot(&mut self) {
        self.history.push(Snapshot {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });
    }

    /// Restore the most recent snapshot; `false` if there is none.
    pub(crate) fn pop_snapshot(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.board = snapshot.board;
        self.side_to_move = snapshot.side_to_move;
        self.castling_rights = snapshot.castling_rights;
        self.en_passant_target = snapshot.en_passant_target;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
        true
    }
}
