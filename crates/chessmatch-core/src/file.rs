//! Chess board files (columns a–h).

use std::fmt;

/// A file (column) on the chess board, from FileA to FileH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files in index order.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the index (0..7), which is also the internal column.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index (0 = FileA, 7 = FileH).
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        match index {
            0 => Some(File::FileA),
            1 => Some(File::FileB),
            2 => Some(File::FileC),
            3 => Some(File::FileD),
            4 => Some(File::FileE),
            5 => Some(File::FileF),
            6 => Some(File::FileG),
            7 => Some(File::FileH),
            _ => None,
        }
    }

    /// Parse a file letter (`a`–`h`, case-insensitive).
    #[inline]
    pub fn from_char(c: char) -> Option<File> {
        let c = c.to_ascii_lowercase();
        if !('a'..='h').contains(&c) {
            return None;
        }
        File::from_index(c as u8 - b'a')
    }

    /// Return the lowercase file letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
