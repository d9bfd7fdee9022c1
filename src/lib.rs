//! Chess rules engine on a 0x88 board with a fixed-depth alpha-beta search.
//!
//! ```
//! use chess_core::{find_best_move, Position, SearchConfig};
//!
//! let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
//! let result = find_best_move(&position, &SearchConfig::with_depth(2)).unwrap();
//! assert_eq!(result.best_move.to_string(), "e1e8");
//! ```

pub mod board;

pub use board::{
    find_best_move, Color, FenError, Move, Piece, Position, SearchConfig, SearchResult, Square,
};
