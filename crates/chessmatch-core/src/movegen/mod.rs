//! Pseudo-legal move generation, one module per movement pattern.
//!
//! A generated mask marks every square a piece could reach given the
//! current occupancy. Whether the move would leave the mover's own king
//! attacked is decided by the match, not here.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_piece::{ChessPiece, PieceId};
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(crate) use self::king::{KING_SIDE_ROOK_DISTANCE, QUEEN_SIDE_ROOK_DISTANCE};

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// Generate the move mask of `piece`. A captured piece has no moves.
pub(crate) fn possible_moves(
    board: &Board,
    piece: &ChessPiece,
    en_passant: Option<PieceId>,
) -> MoveMask {
    let Some(from) = piece.square() else {
        return MoveMask::EMPTY;
    };
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, color, piece.move_count(), en_passant),
        PieceKind::Knight => gen_knight(board, from, color),
        PieceKind::Bishop => gen_slider(board, from, color, &BISHOP_DIRECTIONS),
        PieceKind::Rook => gen_slider(board, from, color, &ROOK_DIRECTIONS),
        PieceKind::Queen => gen_slider(board, from, color, &QUEEN_DIRECTIONS),
        PieceKind::King => gen_king(board, from, color, piece.move_count()),
    }
}

/// A square is a landing square if it is empty or holds an opponent piece.
#[inline]
fn can_land(board: &Board, sq: Square, color: Color) -> bool {
    !board.there_is_a_piece(sq) || board.is_opponent_piece(sq, color)
}

/// Single-step moves over a fixed offset table (knight and king patterns).
fn gen_steps(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> MoveMask {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&sq| can_land(board, sq, color))
        .collect()
}
