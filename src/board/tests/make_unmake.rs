//! Make/undo tests over random games.

use crate::board::{Position, START_FEN};
use rand::prelude::*;

/// Play random legal moves, recording every FEN, then undo back to the start.
fn random_walk(seed: u64, plies: usize) {
    let mut position = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut fens = vec![position.to_fen()];

    for _ in 0..plies {
        let moves = position.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        assert!(position.make_move(mv), "legal move {mv} rejected");
        fens.push(position.to_fen());
    }
    assert_eq!(position.history_len(), fens.len() - 1);

    while position.history_len() > 0 {
        fens.pop();
        assert!(position.undo_move());
        assert_eq!(Some(&position.to_fen()), fens.last());
    }
    assert_eq!(position.to_fen(), START_FEN);
}

#[test]
fn test_random_games_unwind() {
    for seed in 0..16 {
        random_walk(seed, 60);
    }
}

#[test]
fn test_rejected_moves_do_not_grow_history() {
    let mut position = Position::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let before = position.history_len();
        let legal_count = position
            .generate_moves()
            .into_iter()
            .filter(|&m| position.clone().make_move(m))
            .count();
        assert_eq!(legal_count, position.legal_moves().len());
        assert_eq!(position.history_len(), before);

        let Some(&mv) = position.legal_moves().choose(&mut rng) else {
            break;
        };
        position.make_move(mv);
    }
}

#[test]
fn test_side_alternates() {
    let mut position = Position::new();
    for uci in ["e2e4", "e7e5", "g1f3", "b8c6"] {
        let mover = position.side_to_move();
        position.make_move_uci(uci).unwrap();
        assert_eq!(position.side_to_move(), mover.opponent());
    }
    assert_eq!(position.fullmove_number(), 3);
}

#[test]
fn test_en_passant_target_only_after_double_push() {
    let mut position = Position::new();
    position.make_move_uci("e2e3").unwrap();
    assert_eq!(position.en_passant_target(), None);
    position.make_move_uci("d7d5").unwrap();
    assert_eq!(position.en_passant_target(), Some("d6".parse().unwrap()));
    position.make_move_uci("g1f3").unwrap();
    assert_eq!(position.en_passant_target(), None);
}
