//! Fluent builder for setting up a match from explicit placements.
//!
//! # Example
//! ```
//! use chessmatch_core::{Color, MatchBuilder, PieceKind, Square};
//!
//! let chess_match = MatchBuilder::new()
//!     .piece(Square::E1, Color::White, PieceKind::King)
//!     .piece(Square::E8, Color::Black, PieceKind::King)
//!     .piece(Square::A2, Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(chess_match.on_board_pieces().count(), 3);
//! ```

use crate::chess_match::{ChessMatch, starting_layout};
use crate::color::Color;
use crate::error::ChessError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// One piece to put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    square: Square,
    piece: Piece,
    move_count: u32,
}

/// A fluent builder for [`ChessMatch`] positions.
#[derive(Debug, Clone)]
pub struct MatchBuilder {
    placements: Vec<Placement>,
    side_to_move: Color,
    turn: u32,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    /// An empty board, White to move, turn 1.
    #[must_use]
    pub fn new() -> Self {
        MatchBuilder {
            placements: Vec::new(),
            side_to_move: Color::White,
            turn: 1,
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        starting_layout().fold(Self::new(), |builder, (sq, piece)| {
            builder.piece(sq, piece.color(), piece.kind())
        })
    }

    /// Place an unmoved piece.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.moved_piece(square, color, kind, 0)
    }

    /// Place a piece that has already moved `move_count` times, which
    /// rules out castling with it and pawn double steps.
    #[must_use]
    pub fn moved_piece(
        mut self,
        square: Square,
        color: Color,
        kind: PieceKind,
        move_count: u32,
    ) -> Self {
        self.placements.push(Placement {
            square,
            piece: Piece::new(kind, color),
            move_count,
        });
        self
    }

    /// Remove whatever was placed on `square`.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.placements.retain(|p| p.square != square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    /// Validate the placements and build the match.
    ///
    /// The check flag is computed for the side to move. The checkmate flag
    /// starts cleared: it is only ever raised by a move.
    ///
    /// # Errors
    ///
    /// [`ChessError::SquareOccupied`] if two pieces share a square,
    /// [`ChessError::MissingKing`] or [`ChessError::DuplicateKing`] unless
    /// each side has exactly one king.
    pub fn build(self) -> Result<ChessMatch, ChessError> {
        let mut seen = [false; Square::COUNT];
        for p in &self.placements {
            if std::mem::replace(&mut seen[p.square.index()], true) {
                return Err(ChessError::SquareOccupied { square: p.square });
            }
        }

        for color in Color::ALL {
            let kings = self
                .placements
                .iter()
                .filter(|p| p.piece == Piece::new(PieceKind::King, color))
                .count();
            match kings {
                0 => return Err(ChessError::MissingKing { color }),
                1 => {}
                _ => return Err(ChessError::DuplicateKing { color }),
            }
        }

        let mut chess_match = ChessMatch::empty(self.side_to_move, self.turn);
        for p in &self.placements {
            let id = chess_match.place_new_piece(p.square, p.piece);
            chess_match.board.get_mut(id).set_move_count(p.move_count);
        }
        let check = chess_match.test_check(self.side_to_move);
        chess_match.set_check(check);
        Ok(chess_match)
    }
}
