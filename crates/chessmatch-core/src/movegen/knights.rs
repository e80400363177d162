//! Knight movement.

use crate::board::Board;
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::square::Square;

use super::gen_steps;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Knight targets: the eight L-shaped jumps that land on the board and are
/// empty or hold an opponent piece.
pub(super) fn gen_knight(board: &Board, from: Square, color: Color) -> MoveMask {
    gen_steps(board, from, color, &KNIGHT_OFFSETS)
}
