//! Table-driven rule checks loaded from `tests/data/positions.json`.

use serde::Deserialize;

use chess_core::board::{GameStatus, Position};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ExpectedStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Deserialize)]
struct Play {
    moves: Vec<String>,
    fen: String,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    fen: String,
    legal_moves: usize,
    in_check: bool,
    evaluation: i32,
    status: ExpectedStatus,
    play: Option<Play>,
}

fn load() -> Vec<Scenario> {
    let raw = include_str!("data/positions.json");
    serde_json::from_str(raw).expect("positions.json is malformed")
}

fn status_matches(actual: GameStatus, expected: &ExpectedStatus) -> bool {
    matches!(
        (actual, expected),
        (GameStatus::Ongoing, ExpectedStatus::Ongoing)
            | (GameStatus::Check, ExpectedStatus::Check)
            | (GameStatus::Checkmate { .. }, ExpectedStatus::Checkmate)
            | (GameStatus::Stalemate, ExpectedStatus::Stalemate)
    )
}

#[test]
fn scenarios_hold() {
    let scenarios = load();
    assert!(!scenarios.is_empty());

    for scenario in scenarios {
        let mut position = Position::try_from_fen(&scenario.fen)
            .unwrap_or_else(|e| panic!("{}: {e}", scenario.name));
        assert_eq!(position.to_fen(), scenario.fen, "{}", scenario.name);
        assert_eq!(
            position.legal_moves().len(),
            scenario.legal_moves,
            "{}",
            scenario.name
        );
        assert_eq!(
            position.is_in_check(position.side_to_move()),
            scenario.in_check,
            "{}",
            scenario.name
        );
        assert_eq!(position.evaluate(), scenario.evaluation, "{}", scenario.name);
        let status = position.status();
        assert!(
            status_matches(status, &scenario.status),
            "{}: got {status:?}",
            scenario.name
        );

        if let Some(play) = &scenario.play {
            for uci in &play.moves {
                position
                    .make_move_uci(uci)
                    .unwrap_or_else(|e| panic!("{}: {uci}: {e}", scenario.name));
            }
            assert_eq!(position.to_fen(), play.fen, "{}", scenario.name);

            for _ in &play.moves {
                assert!(position.undo_move());
            }
            assert_eq!(position.to_fen(), scenario.fen, "{}", scenario.name);
        }
    }
}
