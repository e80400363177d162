//! Colored chess piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece as seen on a board snapshot or in the captured list.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the color (bit 3: 0 = White, 1 = Black).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return the board letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(self) -> char {
        let base = self.kind().letter();
        match self.color() {
            Color::White => base,
            Color::Black => base.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    /// Writes the uppercase kind letter; color is conveyed separately.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind().letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind().letter())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind, "kind mismatch for {color:?} {kind:?}");
                assert_eq!(piece.color(), color, "color mismatch for {color:?} {kind:?}");
            }
        }
    }

    #[test]
    fn letter_case_follows_color() {
        assert_eq!(Piece::WHITE_KNIGHT.letter(), 'N');
        assert_eq!(Piece::BLACK_KNIGHT.letter(), 'n');
        assert_eq!(Piece::BLACK_PAWN.letter(), 'p');
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Piece::BLACK_QUEEN), "Q");
        assert_eq!(format!("{:?}", Piece::BLACK_QUEEN), "BQ");
        assert_eq!(format!("{:?}", Piece::WHITE_KING), "WK");
    }
}
