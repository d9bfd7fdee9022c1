use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{CastlingRights, Color, ColoredPiece, Move, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. Returns an error if the FEN string is
    /// invalid; nothing is defaulted.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as usize;
                    continue;
                }
                let piece = ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let sq = u8::try_from(file)
                    .ok()
                    .and_then(|f| Square::new(rank, f))
                    .ok_or(FenError::BadRankLength {
                        rank: rank_idx,
                        squares: file + 1,
                    })?;
                position.set_piece(sq, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank_idx,
                    squares: file,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights =
            CastlingRights::from_fen(parts[2]).map_err(|c| FenError::InvalidCastling { char: c })?;

        position.en_passant_target = match parts[3] {
            "-" => None,
            field => Some(field.parse().map_err(|_| FenError::InvalidEnPassant {
                found: field.to_string(),
            })?),
        };

        position.halfmove_clock =
            parse_counter(parts[4]).ok_or_else(|| FenError::InvalidHalfmoveClock {
                found: parts[4].to_string(),
            })?;
        position.fullmove_number = parse_counter(parts[5])
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;

        for color in [Color::White, Color::Black] {
            let count = position.king_count(color);
            if count != 1 {
                return Err(FenError::InvalidKingCount { color, count });
            }
        }

        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace this position (and its history) with the one described by `fen`.
    ///
    /// On error the current position is left untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Self::try_from_fen(fen)?;
        Ok(())
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match Square::new(rank, file).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if !notation.is_ascii() || notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves_from(from)
            .into_iter()
            .find(|m| m.to() == to && m.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a move and make it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Position;
    ///
    /// let mut position = Position::new();
    /// position.make_move_uci("e2e4").unwrap();
    /// position.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        if self.make_move(mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
        }
    }
}

/// Clock fields are plain decimal digits; `u32::from_str` alone would also
/// take a leading `+`.
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
