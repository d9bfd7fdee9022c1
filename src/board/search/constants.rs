//! Score bounds used by the alpha-beta search.

/// Score of a checkmate, signed against the mated side (white-positive).
pub const MATE_SCORE: i32 = 1_000_000;

/// Window bound strictly outside every reachable score.
pub(crate) const SCORE_INFINITY: i32 = MATE_SCORE + 1;
