//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    find_best_move, Color, FenError, GameStatus, Move, MoveParseError, Piece, Position,
    PositionBuilder, SearchConfig, Square,
};
