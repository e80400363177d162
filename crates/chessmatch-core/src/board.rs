//! Grid storage: which piece stands on which square.
//!
//! The board owns every piece created during a match. Cells hold
//! [`PieceId`]s into that arena; captured pieces stay in the arena with no
//! square. No chess rules live here, only storage and the invariant that a
//! piece's stored square equals the cell holding it.

use std::fmt;

use crate::chess_piece::{ChessPiece, PieceId};
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// The 8x8 grid plus the pieces that have ever stood on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceId>; Square::COUNT],
    pieces: Vec<ChessPiece>,
}

impl Board {
    /// Return an empty board with no pieces.
    pub fn new() -> Board {
        Board {
            cells: [None; Square::COUNT],
            pieces: Vec::with_capacity(32),
        }
    }

    /// Register a new, unplaced piece and return its id.
    pub(crate) fn add_piece(&mut self, piece: Piece) -> PieceId {
        self.pieces.push(ChessPiece::new(piece));
        PieceId(self.pieces.len() - 1)
    }

    /// Put a piece on `sq` and record `sq` as its square.
    ///
    /// The cell must be empty and the piece must not already be placed;
    /// callers guarantee both.
    pub(crate) fn place_piece(&mut self, id: PieceId, sq: Square) {
        debug_assert!(
            self.cells[sq.index()].is_none(),
            "placing {id} on occupied square {sq}"
        );
        debug_assert!(
            self.pieces[id.0].square().is_none(),
            "placing {id} which already stands on the board"
        );
        self.cells[sq.index()] = Some(id);
        self.pieces[id.0].set_square(Some(sq));
    }

    /// Clear `sq` and return its previous occupant, if any.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<PieceId> {
        let id = self.cells[sq.index()].take()?;
        self.pieces[id.0].set_square(None);
        Some(id)
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece(&self, sq: Square) -> Option<&ChessPiece> {
        self.piece_id(sq).map(|id| &self.pieces[id.0])
    }

    /// Return the id of the piece on `sq`, if any.
    #[inline]
    pub fn piece_id(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.index()]
    }

    /// Look a piece up by id, whether on the board or captured.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board.
    #[inline]
    pub fn get(&self, id: PieceId) -> &ChessPiece {
        &self.pieces[id.0]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: PieceId) -> &mut ChessPiece {
        &mut self.pieces[id.0]
    }

    /// Return `true` if `(row, col)` lies on the board.
    #[inline]
    pub const fn position_exists(row: i8, col: i8) -> bool {
        Square::exists(row, col)
    }

    /// Return `true` if `sq` is occupied.
    #[inline]
    pub fn there_is_a_piece(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Return `true` if `sq` holds a piece of the color opposing `color`.
    #[inline]
    pub fn is_opponent_piece(&self, sq: Square, color: Color) -> bool {
        self.piece(sq).is_some_and(|p| p.color() != color)
    }

    /// Return a `[row][col]` snapshot of the colored pieces, for rendering.
    pub fn snapshot(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for sq in Square::all() {
            grid[sq.row() as usize][sq.col() as usize] = self.piece(sq).map(ChessPiece::piece);
        }
        grid
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.pretty())
    }
}

/// Wrapper for printing a board as an 8x8 letter grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.snapshot().iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('-', Piece::letter);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
