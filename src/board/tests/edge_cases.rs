//! Edge case tests for special chess positions and moves.

use crate::board::{Color, ColoredPiece, GameStatus, Move, Piece, Position, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn has_move(moves: &[Move], uci: &str) -> bool {
    moves.iter().any(|m| m.to_string() == uci)
}

#[test]
fn test_stalemate_position() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!position.is_checkmate());
    assert!(position.is_stalemate());
    assert!(position.legal_moves().is_empty());
    assert_eq!(position.status(), GameStatus::Stalemate);
}

#[test]
fn test_back_rank_mate() {
    let mut position = Position::from_fen("4R1k1/5ppp/8/8/8/8/8/7K b - - 0 1");
    assert_eq!(
        position.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert!(position.status().is_over());
}

#[test]
fn test_underpromotions_all_available() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<Piece> = position
        .legal_moves_from(sq("a7"))
        .iter()
        .filter_map(|m| m.promotion())
        .collect();
    assert_eq!(
        promotions,
        vec![Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight]
    );
}

#[test]
fn test_capture_promotion() {
    let mut position = Position::from_fen("1r5k/P7/8/8/8/8/8/K7 w - - 0 1");
    let moves = position.legal_moves();
    assert!(has_move(&moves, "a7b8q"));
    assert!(has_move(&moves, "a7a8n"));

    position.make_move_uci("a7b8r").unwrap();
    assert_eq!(
        position.piece_at(sq("b8")),
        Some(ColoredPiece::new(Color::White, Piece::Rook))
    );
    assert_eq!(position.evaluate(), 500);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Taking en passant clears both pawns off the fifth rank
    let mut position = Position::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
    assert!(has_move(&position.generate_moves(), "b5c6"));
    assert!(!has_move(&position.legal_moves(), "b5c6"));
}

#[test]
fn test_en_passant_expires() {
    let mut position =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    assert!(has_move(&position.legal_moves(), "e5d6"));
    position.make_move_uci("g1f3").unwrap();
    position.make_move_uci("g8f6").unwrap();
    assert!(!has_move(&position.legal_moves(), "e5d6"));
}

#[test]
fn test_double_check_only_king_moves() {
    // Rook on e8 and bishop on b4 both check the king on e1
    let mut position = Position::from_fen("4r2k/8/8/8/1b6/8/8/4K1N1 w - - 0 1");
    let moves = position.legal_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.piece().piece == Piece::King));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let mut position = Position::from_fen("3r3k/8/8/8/8/8/3q4/4K3 w - - 0 1");
    assert!(!has_move(&position.legal_moves(), "e1d2"));
}

#[test]
fn test_castling_needs_rook_on_home_square() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1");
    let moves = position.legal_moves();
    assert!(has_move(&moves, "e1g1"));
    assert!(!has_move(&moves, "e1c1"));
}

#[test]
fn test_captured_rook_loses_right() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1");
    position.make_move_uci("g2a8").unwrap();
    assert_eq!(position.castling_rights().to_fen(), "KQk");
    assert!(!has_move(&position.legal_moves(), "e8c8"));
}

#[test]
fn test_queenside_castling_allows_attacked_b_file() {
    // The rook passes b1 under attack; only the king's path matters
    let mut position = Position::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(has_move(&position.legal_moves(), "e1c1"));
}

#[test]
fn test_lone_kings_have_moves() {
    let mut position = Position::from_fen("8/8/8/4k3/8/8/8/K7 w - - 0 1");
    assert_eq!(position.legal_moves().len(), 3);
    assert_eq!(position.status(), GameStatus::Ongoing);
}
