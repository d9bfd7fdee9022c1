//! Chess board representation and game logic.
//!
//! Uses a 0x88 mailbox: 128 slots where `index & 0x88 != 0` marks the
//! off-board half, which makes edge detection a single mask. Supports full
//! chess rules including castling, en passant, and all four promotions.
//!
//! # Example
//! ```
//! use chess_core::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod history;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use movegen::GameStatus;
pub use state::{Position, START_FEN};
pub use types::{CastlingRights, Color, ColoredPiece, Move, MoveList, Piece, Square, BOARD_SLOTS};

pub use search::{find_best_move, SearchConfig, SearchResult, SearchStats, MATE_SCORE};

pub(crate) use types::PROMOTION_PIECES;
