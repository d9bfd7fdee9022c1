//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts against published reference values
//! - `make_unmake.rs` - Make/undo correctness over random games
//! - `edge_cases.rs` - Special positions and edge cases
//! - `search.rs` - Alpha-beta agreement with plain minimax, mates
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod make_unmake;
