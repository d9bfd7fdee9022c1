/// Knobs for [`find_best_move`](super::find_best_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Plies searched below the root. Zero is treated as one.
    pub depth: u32,
    /// Worker threads splitting the root moves. One means a serial search.
    pub threads: usize,
}

impl SearchConfig {
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        SearchConfig { depth, threads: 1 }
    }

    #[must_use]
    pub const fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            threads: 1,
        }
    }
}
