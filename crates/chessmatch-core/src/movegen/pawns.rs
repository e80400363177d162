//! Pawn movement: single and double advances, diagonal captures, en passant.

use crate::board::Board;
use crate::chess_piece::PieceId;
use crate::color::Color;
use crate::move_mask::MoveMask;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Pawn targets for a pawn of `color` on `from`.
///
/// `en_passant` is the opponent piece currently vulnerable to en passant;
/// a pawn beside it on the capturing row may take the square behind it.
pub(super) fn gen_pawn(
    board: &Board,
    from: Square,
    color: Color,
    move_count: u32,
    en_passant: Option<PieceId>,
) -> MoveMask {
    let mut mask = MoveMask::EMPTY;
    let dir = color.pawn_direction();

    // Advances
    let one = from.offset(dir, 0).filter(|&sq| !board.there_is_a_piece(sq));
    if let Some(one) = one {
        mask.insert(one);
        let two = from.offset(2 * dir, 0).filter(|&sq| !board.there_is_a_piece(sq));
        if let (0, Some(two)) = (move_count, two) {
            mask.insert(two);
        }
    }

    // Captures
    for side in [-1, 1] {
        if let Some(diag) = from.offset(dir, side) {
            if board.is_opponent_piece(diag, color) {
                mask.insert(diag);
            }
        }
    }

    // En passant
    if from.row() == color.en_passant_row() as i8 {
        for side in [-1, 1] {
            let Some(beside) = from.offset(0, side) else {
                continue;
            };
            let vulnerable = board.piece_id(beside).is_some_and(|id| Some(id) == en_passant)
                && board.piece(beside).is_some_and(|p| {
                    p.kind() == PieceKind::Pawn && p.color() != color
                });
            if !vulnerable {
                continue;
            }
            if let Some(behind) = beside.offset(dir, 0) {
                mask.insert(behind);
            }
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
    fn white_first_move_single_and_double() {
        let board = board_with(&[(Square::E2, Piece::WHITE_PAWN)]);
        let mask = gen_pawn(&board, Square::E2, Color::White, 0, None);
        assert!(mask.contains(Square::E3));
        assert!(mask.contains(Square::E4));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn black_moves_down_the_board() {
        let board = board_with(&[(Square::D7, Piece::BLACK_PAWN)]);
        let mask = gen_pawn(&board, Square::D7, Color::Black, 0, None);
        assert!(mask.contains(Square::D6));
        assert!(mask.contains(Square::D5));
    }

    #[test]
    fn no_double_step_after_moving() {
        let board = board_with(&[(Square::E3, Piece::WHITE_PAWN)]);
        let mask = gen_pawn(&board, Square::E3, Color::White, 1, None);
        assert_eq!(mask.count(), 1);
        assert!(mask.contains(Square::E4));
    }

    #[test]
    fn blocked_single_step_blocks_double() {
        let board = board_with(&[
            (Square::E2, Piece::WHITE_PAWN),
            (Square::E3, Piece::BLACK_KNIGHT),
        ]);
        let mask = gen_pawn(&board, Square::E2, Color::White, 0, None);
        assert!(mask.is_empty());
    }

    #[test]
    fn blocked_double_step_only() {
        let board = board_with(&[
            (Square::E2, Piece::WHITE_PAWN),
            (Square::E4, Piece::BLACK_KNIGHT),
        ]);
        let mask = gen_pawn(&board, Square::E2, Color::White, 0, None);
        assert!(mask.contains(Square::E3));
        assert!(!mask.contains(Square::E4));
    }

    #[test]
    fn diagonal_captures_only_opponents() {
        let board = board_with(&[
            (Square::D4, Piece::WHITE_PAWN),
            (Square::C5, Piece::BLACK_PAWN),
            (Square::E5, Piece::WHITE_KNIGHT),
            (Square::D5, Piece::BLACK_ROOK),
        ]);
        let mask = gen_pawn(&board, Square::D4, Color::White, 1, None);
        assert!(mask.contains(Square::C5));
        assert!(!mask.contains(Square::E5));
        assert!(!mask.contains(Square::D5), "pawns never capture straight ahead");
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn en_passant_needs_the_tracked_pawn() {
        let mut board = Board::new();
        let white = board.add_piece(Piece::WHITE_PAWN);
        board.place_piece(white, Square::E5);
        let black = board.add_piece(Piece::BLACK_PAWN);
        board.place_piece(black, Square::D5);
        let other = board.add_piece(Piece::BLACK_PAWN);
        board.place_piece(other, Square::F5);

        let mask = gen_pawn(&board, Square::E5, Color::White, 2, Some(black));
        assert!(mask.contains(Square::D6));
        assert!(!mask.contains(Square::F6), "f5 pawn is not the vulnerable one");

        let mask = gen_pawn(&board, Square::E5, Color::White, 2, None);
        assert!(!mask.contains(Square::D6));
    }

    #[test]
    fn black_en_passant_row() {
        let mut board = Board::new();
        let black = board.add_piece(Piece::BLACK_PAWN);
        board.place_piece(black, Square::C4);
        let white = board.add_piece(Piece::WHITE_PAWN);
        board.place_piece(white, Square::D4);

        let mask = gen_pawn(&board, Square::C4, Color::Black, 2, Some(white));
        assert!(mask.contains(Square::D3));
        assert!(mask.contains(Square::C3));
    }
}
