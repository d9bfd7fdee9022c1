//! Root-split parallel search.
//!
//! The legal root moves are handed out to scoped worker threads, each of
//! which owns a private clone of the position. Scores are gathered under a
//! mutex and the winner is chosen in root-move order afterwards, so the
//! outcome matches the serial search whatever the thread timing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::debug;
use parking_lot::Mutex;

use super::simple::SearchContext;
use super::{SearchResult, SearchStats};
use crate::board::{Move, Position};

/// Result from a single root move
#[derive(Debug, Clone, Copy)]
struct WorkerResult {
    index: usize,
    score: i32,
    stats: SearchStats,
}

pub(crate) fn search_parallel(position: &Position, depth: u32, threads: usize) -> Option<SearchResult> {
    let depth = depth.max(1);
    let root_moves: Vec<Move> = position.clone().legal_moves();
    if root_moves.is_empty() {
        return None;
    }

    let next = AtomicUsize::new(0);
    let results = Mutex::new(Vec::with_capacity(root_moves.len()));
    let workers = threads.clamp(1, root_moves.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                let mut local = position.clone();
                loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(&m) = root_moves.get(index) else {
                        break;
                    };
                    let mut ctx = SearchContext::new(&mut local);
                    if let Some(score) = ctx.score_root_move(m, depth) {
                        results.lock().push(WorkerResult {
                            index,
                            score,
                            stats: ctx.stats,
                        });
                    }
                }
            });
        }
    });

    let mut results = results.into_inner();
    results.sort_by_key(|r| r.index);

    let mut stats = SearchStats::default();
    let mut best: Option<WorkerResult> = None;
    for result in results {
        stats.merge(&result.stats);
        if best.map_or(true, |top| result.score > top.score) {
            best = Some(result);
        }
    }

    let best = best?;
    let best_move = root_moves[best.index];
    debug!(
        "best move {best_move} score {} depth {depth} threads {workers} nodes {}",
        best.score, stats.nodes
    );
    Some(SearchResult {
        best_move,
        score: best.score,
        stats,
    })
}
