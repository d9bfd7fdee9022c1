//! Serial fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from white's point of view: white maximizes and black
//! minimizes. Only the root converts to the side to move.

use log::{debug, trace};

use super::constants::{MATE_SCORE, SCORE_INFINITY};
use super::{SearchResult, SearchStats};
use crate::board::{Color, Move, Position};

/// Search context borrowing the position it explores.
///
/// Every move tried is undone before the next one, so the position is left
/// exactly as it was handed in.
pub(crate) struct SearchContext<'a> {
    pub position: &'a mut Position,
    pub stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub fn new(position: &'a mut Position) -> Self {
        SearchContext {
            position,
            stats: SearchStats::default(),
        }
    }

    /// Minimax value of the current position, white-positive.
    ///
    /// With no legal move the result is a mate score against the side to move
    /// when it is in check, or zero for stalemate. Those are reported even at
    /// the top of a subtree since the move loop finds them before recursing.
    pub fn alpha_beta(&mut self, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 {
            return self.position.evaluate();
        }

        let mover = self.position.side_to_move();
        let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        let mut any_legal = false;

        for m in self.position.generate_moves() {
            if !self.position.make_move(m) {
                self.stats.rejected += 1;
                continue;
            }
            any_legal = true;
            let score = self.alpha_beta(depth - 1, alpha, beta, !maximizing);
            let undone = self.position.undo_move();
            debug_assert!(undone, "history lost while unwinding {m}");

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if !any_legal {
            return terminal_score(self.position, mover);
        }
        best
    }

    /// Score one root move from the root side's perspective.
    ///
    /// Returns `None` when the move is illegal.
    pub fn score_root_move(&mut self, m: Move, depth: u32) -> Option<i32> {
        let root = self.position.side_to_move();
        if !self.position.make_move(m) {
            self.stats.rejected += 1;
            return None;
        }
        let raw = self.alpha_beta(
            depth - 1,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            root != Color::White,
        );
        self.position.undo_move();
        let score = raw * root.sign();
        trace!("root {m} scored {score} at depth {depth}");
        Some(score)
    }

    /// Try every root move in generation order and keep the first one with
    /// the strictly greatest score.
    pub fn search_root(&mut self, depth: u32) -> Option<SearchResult> {
        let depth = depth.max(1);
        let history = self.position.history_len();
        let mut best: Option<(Move, i32)> = None;

        for m in self.position.generate_moves() {
            let Some(score) = self.score_root_move(m, depth) else {
                continue;
            };
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((m, score));
            }
        }
        debug_assert_eq!(self.position.history_len(), history);

        let (best_move, score) = best?;
        debug!(
            "best move {best_move} score {score} depth {depth} nodes {} cutoffs {}",
            self.stats.nodes, self.stats.cutoffs
        );
        Some(SearchResult {
            best_move,
            score,
            stats: self.stats,
        })
    }
}

/// Mate against `mover` when in check, otherwise stalemate.
fn terminal_score(position: &Position, mover: Color) -> i32 {
    if position.is_in_check(mover) {
        -MATE_SCORE * mover.sign()
    } else {
        0
    }
}
