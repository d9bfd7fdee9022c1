//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds, colors and board contents
//! - `Square` - 0x88 board index
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{Color, ColoredPiece, Piece};
pub use square::{Square, BOARD_SLOTS};

pub(crate) use piece::PROMOTION_PIECES;
