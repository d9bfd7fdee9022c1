//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN order of the four rights
const FEN_ORDER: [(char, Color, bool); 4] = [
    ('K', Color::White, true),
    ('Q', Color::White, false),
    ('k', Color::Black, true),
    ('q', Color::Black, false),
];

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse the FEN castling field (`KQkq`, any subset, or `-`).
    ///
    /// Returns the first offending character on failure.
    pub(crate) fn from_fen(field: &str) -> Result<Self, char> {
        let mut rights = CastlingRights::none();
        for c in field.chars() {
            match FEN_ORDER.iter().find(|(letter, _, _)| *letter == c) {
                Some(&(_, color, kingside)) => rights.set(color, kingside),
                None if c == '-' => {}
                None => return Err(c),
            }
        }
        Ok(rights)
    }

    /// Render the FEN castling field.
    #[must_use]
    pub fn to_fen(self) -> String {
        let field: String = FEN_ORDER
            .iter()
            .filter(|(_, color, kingside)| self.has(*color, *kingside))
            .map(|(letter, _, _)| *letter)
            .collect();
        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_field() {
        assert_eq!(CastlingRights::all().to_fen(), "KQkq");
        assert_eq!(CastlingRights::none().to_fen(), "-");

        let rights = CastlingRights::from_fen("Kq").unwrap();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
        assert_eq!(rights.to_fen(), "Kq");
    }

    #[test]
    fn test_fen_field_rejects_unknown_letter() {
        assert_eq!(CastlingRights::from_fen("KQx"), Err('x'));
    }

    #[test]
    fn test_remove_color() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::White);
        assert_eq!(rights.to_fen(), "kq");
    }
}
