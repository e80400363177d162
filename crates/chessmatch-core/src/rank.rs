//! Chess board ranks (rows 1–8).

use std::fmt;

/// A rank (row) on the chess board, from Rank1 (White's back rank) to Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks in index order.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        match index {
            0 => Some(Rank::Rank1),
            1 => Some(Rank::Rank2),
            2 => Some(Rank::Rank3),
            3 => Some(Rank::Rank4),
            4 => Some(Rank::Rank5),
            5 => Some(Rank::Rank6),
            6 => Some(Rank::Rank7),
            7 => Some(Rank::Rank8),
            _ => None,
        }
    }

    /// Create a rank from the number a player reads on the board (1..=8).
    #[inline]
    pub const fn from_number(number: u8) -> Option<Rank> {
        match number {
            1..=8 => Rank::from_index(number - 1),
            _ => None,
        }
    }

    /// Return the rank number as printed on the board (1..=8).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Return the internal grid row: Rank8 is row 0, Rank1 is row 7.
    #[inline]
    pub const fn row(self) -> u8 {
        8 - self.number()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
