//! Internal board coordinates.
//!
//! A [`Square`] is a zero-indexed `(row, col)` pair packed into a `u8`.
//! Row 0 is the topmost rank as the board is drawn (rank 8, Black's home
//! rank), column 0 is file a.

use std::fmt;

use crate::file::File;
use crate::position::ChessPosition;
use crate::rank::Rank;

/// A square on the board, encoded as `row * 8 + col`.
///
/// Every value of this type is on the board; off-board probes go through
/// [`Square::from_coords`] or [`Square::offset`], which return `None`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Number of rows (and columns) on the board.
    pub const SIDE: i8 = 8;

    /// Create a square from a row and column, returning `None` if either is
    /// outside `0..8`.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if Square::exists(row, col) {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Return `true` if `(row, col)` lies on the board.
    #[inline]
    pub const fn exists(row: i8, col: i8) -> bool {
        row >= 0 && row < Square::SIDE && col >= 0 && col < Square::SIDE
    }

    /// Create the square at a typed file and rank. Both are bounded to
    /// `0..8`, so this cannot fail.
    #[inline]
    pub const fn from_file_rank(file: File, rank: Rank) -> Square {
        Square(rank.row() * 8 + file.index() as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// Return the column (0 = file a, 7 = file h).
    #[inline]
    pub const fn col(self) -> i8 {
        (self.0 % 8) as i8
    }

    /// Return the square `(dr, dc)` away, or `None` if that falls off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::from_coords(self.row() + dr, self.col() + dc)
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(7 - self.0 / 8) as usize]
    }

    /// Return the algebraic position a player would name this square by.
    #[inline]
    pub const fn position(self) -> ChessPosition {
        ChessPosition::new(self.file(), self.rank())
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        s.parse::<ChessPosition>().ok().map(ChessPosition::to_square)
    }

    /// Iterate over all 64 squares in index order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named square constants
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A7: Square = Square(8);
    pub const B7: Square = Square(9);
    pub const C7: Square = Square(10);
    pub const D7: Square = Square(11);
    pub const E7: Square = Square(12);
    pub const F7: Square = Square(13);
    pub const G7: Square = Square(14);
    pub const H7: Square = Square(15);
    pub const A6: Square = Square(16);
    pub const B6: Square = Square(17);
    pub const C6: Square = Square(18);
    pub const D6: Square = Square(19);
    pub const E6: Square = Square(20);
    pub const F6: Square = Square(21);
    pub const G6: Square = Square(22);
    pub const H6: Square = Square(23);
    pub const A5: Square = Square(24);
    pub const B5: Square = Square(25);
    pub const C5: Square = Square(26);
    pub const D5: Square = Square(27);
    pub const E5: Square = Square(28);
    pub const F5: Square = Square(29);
    pub const G5: Square = Square(30);
    pub const H5: Square = Square(31);
    pub const A4: Square = Square(32);
    pub const B4: Square = Square(33);
    pub const C4: Square = Square(34);
    pub const D4: Square = Square(35);
    pub const E4: Square = Square(36);
    pub const F4: Square = Square(37);
    pub const G4: Square = Square(38);
    pub const H4: Square = Square(39);
    pub const A3: Square = Square(40);
    pub const B3: Square = Square(41);
    pub const C3: Square = Square(42);
    pub const D3: Square = Square(43);
    pub const E3: Square = Square(44);
    pub const F3: Square = Square(45);
    pub const G3: Square = Square(46);
    pub const H3: Square = Square(47);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
