//! The set of squares a piece can reach, one bit per square.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::square::Square;

/// A 64-bit set of squares, bit `n` standing for the square with index `n`.
///
/// This is the 8x8 boolean "possible moves" matrix in packed form;
/// [`MoveMask::to_grid`] unpacks it for display.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveMask(u64);

impl MoveMask {
    /// No squares set.
    pub const EMPTY: MoveMask = MoveMask(0);

    /// Create a mask from raw bits.
    #[inline]
    pub const fn new(bits: u64) -> MoveMask {
        MoveMask(bits)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Return `true` if no square is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if at least one square is set.
    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Count the set squares.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the mask.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    /// Add `sq` to the mask.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Remove `sq` from the mask.
    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// Return a mask holding only `sq`.
    #[inline]
    pub const fn single(sq: Square) -> MoveMask {
        MoveMask(1u64 << sq.index())
    }

    /// Iterate over the set squares in index order.
    #[inline]
    pub fn iter(self) -> MoveMaskIter {
        MoveMaskIter(self.0)
    }

    /// Unpack into a `[row][col]` grid.
    pub fn to_grid(self) -> [[bool; 8]; 8] {
        let mut grid = [[false; 8]; 8];
        for sq in self.iter() {
            grid[sq.row() as usize][sq.col() as usize] = true;
        }
        grid
    }
}

/// Iterator over the squares of a [`MoveMask`].
pub struct MoveMaskIter(u64);

impl Iterator for MoveMaskIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }
}

impl IntoIterator for MoveMask {
    type Item = Square;
    type IntoIter = MoveMaskIter;

    fn into_iter(self) -> MoveMaskIter {
        self.iter()
    }
}

impl FromIterator<Square> for MoveMask {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> MoveMask {
        let mut mask = MoveMask::EMPTY;
        for sq in iter {
            mask.insert(sq);
        }
        mask
    }
}

impl BitOr for MoveMask {
    type Output = MoveMask;

    #[inline]
    fn bitor(self, rhs: MoveMask) -> MoveMask {
        MoveMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: MoveMask) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for MoveMask {
    type Output = MoveMask;

    #[inline]
    fn bitand(self, rhs: MoveMask) -> MoveMask {
        MoveMask(self.0 & rhs.0)
    }
}

impl fmt::Debug for MoveMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MoveMask(")?;
        for (row, cells) in self.to_grid().iter().enumerate() {
            write!(f, "  {} ", 8 - row)?;
            for &set in cells {
                write!(f, "{}", if set { 'x' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::MoveMask;
    use crate::square::Square;

    #[test]
    fn insert_contains_remove() {
        let mut mask = MoveMask::EMPTY;
        assert!(mask.is_empty());
        mask.insert(Square::E4);
        assert!(mask.contains(Square::E4));
        assert!(!mask.contains(Square::E5));
        assert!(mask.any());
        mask.remove(Square::E4);
        assert!(mask.is_empty());
    }

    #[test]
    fn iter_in_index_order() {
        let mask: MoveMask = [Square::H1, Square::A8, Square::E4].into_iter().collect();
        let squares: Vec<_> = mask.iter().collect();
        assert_eq!(squares, vec![Square::A8, Square::E4, Square::H1]);
        assert_eq!(mask.count(), 3);
    }

    #[test]
    fn grid_uses_rows_and_cols() {
        let grid = MoveMask::single(Square::C2).to_grid();
        assert!(grid[6][2]);
        let set: usize = grid.iter().flatten().filter(|&&b| b).count();
        assert_eq!(set, 1);
    }

    #[test]
    fn bit_ops() {
        let a = MoveMask::single(Square::A1);
        let b = MoveMask::single(Square::B2);
        assert_eq!((a | b).count(), 2);
        assert!((a & b).is_empty());
    }
}
