//! Player colors.

use std::fmt;
use std::ops::Not;

/// The side a piece belongs to: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance.
    ///
    /// Row 0 is Black's back rank, so White advances toward decreasing rows.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Internal row of this side's back rank.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Internal row on which this side's pawns may capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> u8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn index_values() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "WHITE");
        assert_eq!(format!("{}", Color::Black), "BLACK");
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
        assert_eq!(Color::White.en_passant_row(), 3);
        assert_eq!(Color::Black.en_passant_row(), 4);
        // A pawn promotes on the opponent's back row.
        assert_eq!(Color::Black.back_row(), 0);
        assert_eq!(Color::White.back_row(), 7);
    }
}
