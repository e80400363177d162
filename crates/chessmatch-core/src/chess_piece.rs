//! Live pieces: a colored piece plus where it stands and how often it moved.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::movegen;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Stable identity of a piece for the lifetime of a match.
///
/// Pieces are never destroyed, only moved between the board and the
/// captured list, so an id stays valid after its piece is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessPiece {
    piece: Piece,
    square: Option<Square>,
    move_count: u32,
}

impl ChessPiece {
    pub(crate) const fn new(piece: Piece) -> ChessPiece {
        ChessPiece {
            piece,
            square: None,
            move_count: 0,
        }
    }

    /// The colored piece.
    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.piece.kind()
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color()
    }

    /// The square the piece stands on, `None` once captured.
    #[inline]
    pub const fn square(&self) -> Option<Square> {
        self.square
    }

    /// How many times the piece has been relocated.
    #[inline]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn set_square(&mut self, square: Option<Square>) {
        self.square = square;
    }

    pub(crate) fn set_move_count(&mut self, move_count: u32) {
        self.move_count = move_count;
    }

    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrease_move_count(&mut self) {
        debug_assert!(self.move_count > 0, "move counter underflow");
        self.move_count = self.move_count.saturating_sub(1);
    }

    /// Every square this piece could move to, ignoring whether the move
    /// would leave its own king attacked.
    ///
    /// `en_passant` is the piece currently vulnerable to en passant capture.
    pub fn possible_moves(&self, board: &Board, en_passant: Option<PieceId>) -> MoveMask {
        movegen::possible_moves(board, self, en_passant)
    }

    /// Return `true` if `target` is in [`ChessPiece::possible_moves`].
    pub fn possible_move(
        &self,
        board: &Board,
        en_passant: Option<PieceId>,
        target: Square,
    ) -> bool {
        self.possible_moves(board, en_passant).contains(target)
    }

    /// Return `true` if [`ChessPiece::possible_moves`] is not empty.
    pub fn has_any_move(&self, board: &Board, en_passant: Option<PieceId>) -> bool {
        self.possible_moves(board, en_passant).any()
    }
}
