//! Play coordinate moves from a position and report the resulting state.
//!
//! usage: position_status [--fen "<fen>"] [--depth N] <move1> <move2> ...

use std::env;
use std::process::ExitCode;

use chess_core::board::{find_best_move, GameStatus, Position, SearchConfig};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut position = Position::new();
    let mut depth = None;
    let mut moves = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fen" => {
                let Some(fen) = iter.next() else {
                    eprintln!("--fen needs a value");
                    return ExitCode::FAILURE;
                };
                if let Err(e) = position.load_fen(fen) {
                    eprintln!("bad FEN: {e}");
                    return ExitCode::FAILURE;
                }
            }
            "--depth" => match iter.next().and_then(|d| d.parse::<u32>().ok()) {
                Some(d) => depth = Some(d),
                None => {
                    eprintln!("--depth needs a number");
                    return ExitCode::FAILURE;
                }
            },
            mv => moves.push(mv),
        }
    }

    for mv in moves {
        if let Err(e) = position.make_move_uci(mv) {
            eprintln!("{mv}: {e}");
            return ExitCode::FAILURE;
        }
    }

    println!("{position}");
    println!("fen: {}", position.to_fen());
    println!("side_to_move: {}", position.side_to_move());
    let status = match position.status() {
        GameStatus::Ongoing => "ongoing".to_string(),
        GameStatus::Check => "check".to_string(),
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Stalemate => "stalemate".to_string(),
    };
    println!("status: {status}");
    println!("evaluation: {}", position.evaluate());

    let legal_moves = position.legal_moves();
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }

    if let Some(depth) = depth {
        match find_best_move(&position, &SearchConfig::with_depth(depth)) {
            Some(result) => println!(
                "best_move: {} score {} nodes {}",
                result.best_move, result.score, result.stats.nodes
            ),
            None => println!("best_move: none"),
        }
    }
    ExitCode::SUCCESS
}
