//! Algebraic coordinates as a player names them (`a1` .. `h8`).

use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;
use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

/// A board coordinate in player terms: a file letter and a rank number.
///
/// Converts to the internal grid as `row = 8 - rank`, `col = file - 'a'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPosition {
    file: File,
    rank: Rank,
}

impl ChessPosition {
    /// Create a position from a typed file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> ChessPosition {
        ChessPosition { file, rank }
    }

    /// Create a position from a column letter and a row number.
    ///
    /// # Errors
    ///
    /// Returns [`ChessError::InvalidPosition`] if the column is outside
    /// `a..=h` or the row is outside `1..=8`.
    pub fn from_parts(column: char, row: u8) -> Result<ChessPosition, ChessError> {
        match (File::from_char(column), Rank::from_number(row)) {
            (Some(file), Some(rank)) => Ok(ChessPosition::new(file, rank)),
            _ => Err(ChessError::InvalidPosition {
                input: format!("{column}{row}"),
            }),
        }
    }

    /// Return the file.
    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    /// Return the rank.
    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Convert to the internal grid coordinate.
    #[inline]
    pub const fn to_square(self) -> Square {
        Square::from_file_rank(self.file, self.rank)
    }

    /// Convert from the internal grid coordinate.
    #[inline]
    pub const fn from_square(sq: Square) -> ChessPosition {
        sq.position()
    }
}

impl FromStr for ChessPosition {
    type Err = ChessError;

    /// Parse text such as `"e2"`; surrounding whitespace is ignored and the
    /// file letter may be either case.
    fn from_str(s: &str) -> Result<ChessPosition, ChessError> {
        let trimmed = s.trim();
        let invalid = || ChessError::InvalidPosition {
            input: trimmed.to_string(),
        };

        let mut chars = trimmed.chars();
        let column = chars.next().ok_or_else(invalid)?;
        let row: u8 = chars.as_str().parse().map_err(|_| invalid())?;

        ChessPosition::from_parts(column, row).map_err(|_| invalid())
    }
}

impl From<ChessPosition> for Square {
    fn from(pos: ChessPosition) -> Square {
        pos.to_square()
    }
}

impl From<Square> for ChessPosition {
    fn from(sq: Square) -> ChessPosition {
        sq.position()
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}
