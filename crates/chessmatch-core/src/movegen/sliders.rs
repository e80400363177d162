//! Ray movement for rooks, bishops and queens.

use crate::board::Board;
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::square::Square;

/// Orthogonal directions as `(row, col)` steps.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal directions as `(row, col)` steps.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Union of rook and bishop directions.
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walk each ray outward until it leaves the board or meets a piece.
///
/// Empty squares are marked. The blocking square is marked only when it
/// holds an opponent piece.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> MoveMask {
    let mut mask = MoveMask::EMPTY;
    for &(dr, dc) in directions {
        let mut cursor = from.offset(dr, dc);
        while let Some(sq) = cursor {
            if board.there_is_a_piece(sq) {
                if board.is_opponent_piece(sq, color) {
                    mask.insert(sq);
                }
                break;
            }
            mask.insert(sq);
            cursor = sq.offset(dr, dc);
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::tests::board_with;
    use crate::piece::Piece;

    #[test]
    fn rook_open_board() {
        let board = board_with(&[(Square::D4, Piece::WHITE_ROOK)]);
        let mask = gen_slider(&board, Square::D4, Color::White, &ROOK_DIRECTIONS);
        assert_eq!(mask.count(), 14);
        assert!(mask.contains(Square::D8));
        assert!(mask.contains(Square::A4));
        assert!(!mask.contains(Square::E5));
    }

    #[test]
    fn ray_stops_at_friend_and_captures_enemy() {
        let board = board_with(&[
            (Square::D4, Piece::WHITE_ROOK),
            (Square::D6, Piece::WHITE_PAWN),
            (Square::F4, Piece::BLACK_KNIGHT),
        ]);
        let mask = gen_slider(&board, Square::D4, Color::White, &ROOK_DIRECTIONS);
        assert!(mask.contains(Square::D5));
        assert!(!mask.contains(Square::D6), "friendly blocker is never marked");
        assert!(!mask.contains(Square::D7));
        assert!(mask.contains(Square::E4));
        assert!(mask.contains(Square::F4), "enemy blocker is capturable");
        assert!(!mask.contains(Square::G4));
    }

    #[test]
    fn bishop_corner() {
        let board = board_with(&[(Square::A1, Piece::BLACK_BISHOP)]);
        let mask = gen_slider(&board, Square::A1, Color::Black, &BISHOP_DIRECTIONS);
        assert_eq!(mask.count(), 7);
        assert!(mask.contains(Square::H8));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board = board_with(&[
            (Square::E4, Piece::WHITE_QUEEN),
            (Square::E6, Piece::BLACK_PAWN),
            (Square::C2, Piece::WHITE_PAWN),
        ]);
        let queen = gen_slider(&board, Square::E4, Color::White, &QUEEN_DIRECTIONS);
        let rook = gen_slider(&board, Square::E4, Color::White, &ROOK_DIRECTIONS);
        let bishop = gen_slider(&board, Square::E4, Color::White, &BISHOP_DIRECTIONS);
        assert_eq!(queen, rook | bishop);
    }
}
