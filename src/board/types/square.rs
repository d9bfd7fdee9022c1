//! 0x88 square type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of slots in a 0x88 board array.
pub const BOARD_SLOTS: usize = 128;

/// Bits that mark an index as lying off the 8x8 board.
pub(crate) const OFF_BOARD: u8 = 0x88;

/// A square on the chess board, stored as a 0x88 index (`rank * 16 + file`).
///
/// Rank 0 is white's back rank, so `a1 = 0x00` and `h8 = 0x77`. Only the 64
/// indices with `index & 0x88 == 0` are valid squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file (both 0-7).
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 16 + file))
        } else {
            None
        }
    }

    /// Create a square from a raw 0x88 index, rejecting off-board indices.
    #[must_use]
    pub const fn from_index(idx: u8) -> Option<Self> {
        if idx & OFF_BOARD == 0 {
            Some(Square(idx))
        } else {
            None
        }
    }

    /// The raw 0x88 index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }

    /// Rank 0-7, where 0 is rank 1.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// File 0-7, where 0 is file a.
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// Step by a 0x88 offset, returning `None` when the target leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if target < 0 || (target as u8) & OFF_BOARD != 0 {
            None
        } else {
            Some(Square(target as u8))
        }
    }

    /// All 64 on-board squares, a1 first and h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SLOTS as u8).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file() + b'a') as char,
            (self.rank() + b'1') as char
        )
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Square::from_index(idx).ok_or(SquareError::OffBoard { index: idx })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'1',
            _ => return Err(invalid()),
        };
        Square::new(rank, file).ok_or_else(invalid)
    }
}
