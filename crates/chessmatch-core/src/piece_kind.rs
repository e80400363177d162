//! Chess piece kinds.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may be promoted to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the display letter for this piece kind (uppercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Parse a promotion choice: one of `B`, `N`, `R`, `Q` (case-insensitive).
    #[inline]
    pub fn from_promotion_letter(c: char) -> Option<PieceKind> {
        PieceKind::from_letter(c).filter(|kind| kind.is_promotion_target())
    }

    /// Return `true` if a pawn may be promoted to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Bishop | PieceKind::Knight | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn index_values() {
        assert_eq!(PieceKind::Pawn.index(), 0);
        assert_eq!(PieceKind::Knight.index(), 1);
        assert_eq!(PieceKind::Bishop.index(), 2);
        assert_eq!(PieceKind::Rook.index(), 3);
        assert_eq!(PieceKind::Queen.index(), 4);
        assert_eq!(PieceKind::King.index(), 5);
    }

    #[test]
    fn letter_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.letter();
            assert_eq!(PieceKind::from_letter(c), Some(kind));
            assert_eq!(PieceKind::from_letter(c.to_ascii_lowercase()), Some(kind));
        }
    }

    #[test]
    fn from_letter_invalid() {
        assert_eq!(PieceKind::from_letter('x'), None);
        assert_eq!(PieceKind::from_letter('1'), None);
    }

    #[test]
    fn promotion_letters() {
        assert_eq!(PieceKind::from_promotion_letter('Q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_promotion_letter('n'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_promotion_letter('K'), None);
        assert_eq!(PieceKind::from_promotion_letter('P'), None);
        assert_eq!(PieceKind::from_promotion_letter('z'), None);
        for kind in PieceKind::PROMOTIONS {
            assert!(kind.is_promotion_target());
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Pawn), "P");
        assert_eq!(format!("{}", PieceKind::King), "K");
    }
}
