//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! - Material-only evaluation at the leaves, white-positive
//! - Checkmate and stalemate detected when a node has no legal move
//! - Root move chosen by strictly greatest score, first one wins ties
//! - Optional root-split search across threads with identical results

mod constants;
mod params;
mod simple;
mod smp;

use std::ops::AddAssign;

use simple::SearchContext;

use super::{Move, Position};
pub use constants::MATE_SCORE;
pub use params::SearchConfig;

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Beta cutoffs taken
    pub cutoffs: u64,
    /// Pseudo-legal moves that turned out illegal
    pub rejected: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
        self.rejected += other.rejected;
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: SearchStats) {
        self.merge(&other);
    }
}

/// Outcome of [`find_best_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub best_move: Move,
    /// Score from the perspective of the side to move at the root
    pub score: i32,
    pub stats: SearchStats,
}

/// Search `position` and return the best move with its score.
///
/// Returns `None` when the side to move has no legal move. The position
/// itself is never modified; workers search clones of it.
#[must_use]
pub fn find_best_move(position: &Position, config: &SearchConfig) -> Option<SearchResult> {
    if config.threads > 1 {
        smp::search_parallel(position, config.depth, config.threads)
    } else {
        let mut local = position.clone();
        SearchContext::new(&mut local).search_root(config.depth)
    }
}

impl Position {
    /// Minimax value of this position searched `depth` plies deep.
    ///
    /// The result is white-positive. `maximizing` should be true when white
    /// is to move. Pruning happens once `beta <= alpha`. The position is
    /// restored before returning.
    pub fn search(&mut self, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
        SearchContext::new(self).alpha_beta(depth, alpha, beta, maximizing)
    }

    /// Best move for the side to move at the given depth.
    ///
    /// Each root move is scored by a `depth - 1` search and compared from the
    /// mover's perspective; ties keep the earlier move in generation order.
    /// A depth of zero searches one ply.
    pub fn best_move(&mut self, depth: u32) -> Option<Move> {
        SearchContext::new(self)
            .search_root(depth)
            .map(|result| result.best_move)
    }
}
