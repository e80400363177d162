//! Move execution via commit/revert.
//!
//! [`ChessMatch::commit`] applies a move in place and returns a
//! [`MoveRecord`] describing everything it touched. [`ChessMatch::revert`]
//! replays that record backwards. Real moves, self-check tests and
//! checkmate probes all go through this pair, and every speculative commit
//! is reverted before anything else observes the board.

use tracing::trace;

use crate::chess_match::ChessMatch;
use crate::chess_piece::PieceId;
use crate::movegen::{KING_SIDE_ROOK_DISTANCE, QUEEN_SIDE_ROOK_DISTANCE};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A piece taken off the board by a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Capture {
    id: PieceId,
    /// Where the piece stood: the target square, or the square behind it
    /// for en passant.
    square: Square,
    /// Position the piece held in the on-board list.
    on_board_index: usize,
}

/// The rook relocation of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RookShift {
    id: PieceId,
    from: Square,
    to: Square,
}

/// Everything needed to undo one commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a committed move must be reverted or kept deliberately"]
pub(crate) struct MoveRecord {
    source: Square,
    target: Square,
    mover: PieceId,
    capture: Option<Capture>,
    castle: Option<RookShift>,
}

impl MoveRecord {
    #[inline]
    pub(crate) fn source(&self) -> Square {
        self.source
    }

    #[inline]
    pub(crate) fn target(&self) -> Square {
        self.target
    }

    #[inline]
    pub(crate) fn mover(&self) -> PieceId {
        self.mover
    }

    /// The captured piece, if the move took one.
    #[inline]
    pub(crate) fn captured(&self) -> Option<PieceId> {
        self.capture.map(|c| c.id)
    }

    /// Return `true` if the move was a castle.
    #[inline]
    pub(crate) fn is_castle(&self) -> bool {
        self.castle.is_some()
    }
}

impl ChessMatch {
    /// Move the piece on `source` to `target`, applying capture, castling
    /// and en passant side effects.
    ///
    /// # Panics
    ///
    /// Panics if `source` is empty. Callers only commit squares taken from a
    /// piece's own move mask.
    pub(crate) fn commit(&mut self, source: Square, target: Square) -> MoveRecord {
        let mover = self
            .board
            .remove_piece(source)
            .expect("commit requires a piece on the source square");
        self.board.get_mut(mover).increase_move_count();
        let moving = *self.board.get(mover);

        let mut capture = self
            .board
            .remove_piece(target)
            .map(|id| self.take_captured(id, target));

        let mut castle = None;
        let dc = target.col() - source.col();
        if moving.kind() == PieceKind::King && dc.abs() == 2 {
            let side = dc.signum();
            let distance = if side > 0 {
                KING_SIDE_ROOK_DISTANCE
            } else {
                QUEEN_SIDE_ROOK_DISTANCE
            };
            if let (Some(rook_from), Some(rook_to)) =
                (source.offset(0, side * distance), source.offset(0, side))
            {
                if let Some(rook) = self.board.remove_piece(rook_from) {
                    self.board.place_piece(rook, rook_to);
                    self.board.get_mut(rook).increase_move_count();
                    castle = Some(RookShift {
                        id: rook,
                        from: rook_from,
                        to: rook_to,
                    });
                }
            }
        }

        if moving.kind() == PieceKind::Pawn && dc != 0 && capture.is_none() {
            let behind = target.offset(-moving.color().pawn_direction(), 0);
            if let Some(behind) = behind {
                capture = self
                    .board
                    .remove_piece(behind)
                    .map(|id| self.take_captured(id, behind));
            }
        }

        self.board.place_piece(mover, target);
        trace!(%source, %target, capture = capture.is_some(), "commit");

        MoveRecord {
            source,
            target,
            mover,
            capture,
            castle,
        }
    }

    /// Undo a commit exactly: squares, move counters and both piece lists.
    pub(crate) fn revert(&mut self, record: MoveRecord) {
        let mover = self
            .board
            .remove_piece(record.target)
            .expect("revert requires the mover on the target square");
        debug_assert_eq!(mover, record.mover);
        self.board.place_piece(mover, record.source);
        self.board.get_mut(mover).decrease_move_count();

        if let Some(shift) = record.castle {
            let rook = self.board.remove_piece(shift.to);
            debug_assert_eq!(rook, Some(shift.id));
            self.board.place_piece(shift.id, shift.from);
            self.board.get_mut(shift.id).decrease_move_count();
        }

        if let Some(capture) = record.capture {
            self.board.place_piece(capture.id, capture.square);
            let last = self.captured.pop();
            debug_assert_eq!(last, Some(capture.id));
            self.on_board.insert(capture.on_board_index, capture.id);
        }

        trace!(source = %record.source, target = %record.target, "revert");
    }

    /// Move `id` from the on-board list to the captured list.
    fn take_captured(&mut self, id: PieceId, square: Square) -> Capture {
        let on_board_index = self
            .on_board
            .iter()
            .position(|&p| p == id)
            .expect("a piece on the board is in the on-board list");
        self.on_board.remove(on_board_index);
        self.captured.push(id);
        Capture {
            id,
            square,
            on_board_index,
        }
    }
}
