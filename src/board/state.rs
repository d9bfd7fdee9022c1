use std::fmt;

use super::history::Snapshot;
use super::{CastlingRights, Color, ColoredPiece, Piece, Square, BOARD_SLOTS};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// 128 slots, of which the 64 with `index & 0x88 == 0` hold pieces.
pub(crate) type Slots = [Option<ColoredPiece>; BOARD_SLOTS];

/// A chess position together with the undo history of the moves that led to it.
///
/// The position is the only thing that mutates board state; search and callers
/// go through `make_move` / `undo_move`.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) board: Slots,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<Snapshot>,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            for (rank, color, kind) in [
                (0, Color::White, piece),
                (1, Color::White, Piece::Pawn),
                (6, Color::Black, Piece::Pawn),
                (7, Color::Black, piece),
            ] {
                if let Some(sq) = Square::new(rank, file) {
                    position.set_piece(sq, ColoredPiece::new(color, kind));
                }
            }
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            board: [None; BOARD_SLOTS],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.board[sq.slot()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: ColoredPiece) {
        self.board[sq.slot()] = Some(piece);
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.board[sq.slot()] = None;
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.slot()].is_none()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Locate a king by linear scan.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(color, Piece::King);
        self.pieces()
            .find_map(|(sq, piece)| (piece == king).then_some(sq))
    }

    pub(crate) fn king_count(&self, color: Color) -> usize {
        let king = ColoredPiece::new(color, Piece::King);
        self.pieces().filter(|(_, piece)| *piece == king).count()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Two positions are equal when they describe the same game state; the undo
/// history is not compared.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8u8 {
                let ch = Square::new(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', ColoredPiece::to_fen_char);
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
