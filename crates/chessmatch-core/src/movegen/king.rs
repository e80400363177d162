//! King movement, including castling candidates.

use crate::board::Board;
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::gen_steps;

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Column distance from the king to its king-side rook.
pub(crate) const KING_SIDE_ROOK_DISTANCE: i8 = 3;

/// Column distance from the king to its queen-side rook.
pub(crate) const QUEEN_SIDE_ROOK_DISTANCE: i8 = 4;

/// King targets: the adjacent squares plus any castling destination.
///
/// A castling destination (two columns toward a rook) is marked when the
/// king has never moved, an unmoved rook of the same color sits at the
/// expected square and every square strictly between them is empty.
/// Whether the king crosses an attacked square is checked by the match.
pub(super) fn gen_king(board: &Board, from: Square, color: Color, move_count: u32) -> MoveMask {
    let mut mask = gen_steps(board, from, color, &KING_OFFSETS);

    if move_count == 0 {
        for side in [1, -1] {
            let distance = if side > 0 {
                KING_SIDE_ROOK_DISTANCE
            } else {
                QUEEN_SIDE_ROOK_DISTANCE
            };
            if !can_castle(board, from, color, side, distance) {
                continue;
            }
            if let Some(dest) = from.offset(0, 2 * side) {
                mask.insert(dest);
            }
        }
    }

    mask
}

/// Check the rook and the empty run between king and rook for one side.
fn can_castle(board: &Board, from: Square, color: Color, side: i8, distance: i8) -> bool {
    let rook_ready = from
        .offset(0, side * distance)
        .and_then(|sq| board.piece(sq))
        .is_some_and(|rook| {
            rook.kind() == PieceKind::Rook && rook.color() == color && rook.move_count() == 0
        });

    rook_ready
        && (1..distance).all(|step| {
            from.offset(0, side * step)
                .is_some_and(|sq| !board.there_is_a_piece(sq))
        })
}
