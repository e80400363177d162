//! The match orchestrator: turn state, move validation, check and checkmate.

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_piece::{ChessPiece, PieceId};
use crate::color::Color;
use crate::error::ChessError;
use crate::make_move::MoveRecord;
use crate::move_mask::MoveMask;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back rank layout from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 32 pieces of the standard starting position.
pub(crate) fn starting_layout() -> impl Iterator<Item = (Square, Piece)> {
    BACK_RANK.into_iter().enumerate().flat_map(|(col, kind)| {
        let col = col as i8;
        [
            (7, Piece::new(kind, Color::White)),
            (6, Piece::WHITE_PAWN),
            (0, Piece::new(kind, Color::Black)),
            (1, Piece::BLACK_PAWN),
        ]
        .into_iter()
        .filter_map(move |(row, piece)| Square::from_coords(row, col).map(|sq| (sq, piece)))
    })
}

/// A chess match in progress or finished.
///
/// Owns the board and every piece. All mutation goes through
/// [`ChessMatch::perform_move`] and the promotion calls; every failing
/// call leaves the match exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMatch {
    pub(crate) board: Board,
    turn: u32,
    current_player: Color,
    check: bool,
    checkmate: bool,
    en_passant_vulnerable: Option<PieceId>,
    promoted: Option<PieceId>,
    pub(crate) on_board: Vec<PieceId>,
    pub(crate) captured: Vec<PieceId>,
}

impl ChessMatch {
    /// Start a match from the standard position: White to move, turn 1.
    pub fn new() -> ChessMatch {
        let mut chess_match = ChessMatch::empty(Color::White, 1);
        for (sq, piece) in starting_layout() {
            chess_match.place_new_piece(sq, piece);
        }
        chess_match
    }

    /// A match with no pieces; positions are filled in by the caller.
    pub(crate) fn empty(current_player: Color, turn: u32) -> ChessMatch {
        ChessMatch {
            board: Board::new(),
            turn,
            current_player,
            check: false,
            checkmate: false,
            en_passant_vulnerable: None,
            promoted: None,
            on_board: Vec::with_capacity(32),
            captured: Vec::new(),
        }
    }

    pub(crate) fn place_new_piece(&mut self, sq: Square, piece: Piece) -> PieceId {
        let id = self.board.add_piece(piece);
        self.board.place_piece(id, sq);
        self.on_board.push(id);
        id
    }

    pub(crate) fn set_check(&mut self, check: bool) {
        self.check = check;
    }

    // ── Observables ─────────────────────────────────────────────────────────

    /// Turn number, starting at 1 and advancing after every completed move.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side to move, or the winner once the match is over.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Return `true` if the side to move is in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// Return `true` once a move has checkmated the side to reply. The match
    /// is over from then on.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// The side that delivered checkmate, if the match is over.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.checkmate.then_some(self.current_player)
    }

    /// The board, for read-only inspection.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A `[row][col]` snapshot of the colored pieces, row 0 being rank 8.
    pub fn pieces(&self) -> [[Option<Piece>; 8]; 8] {
        self.board.snapshot()
    }

    /// Captured pieces in capture order.
    pub fn captured_pieces(&self) -> Vec<Piece> {
        self.captured
            .iter()
            .map(|&id| self.board.get(id).piece())
            .collect()
    }

    /// Captured pieces of one color, in capture order.
    pub fn captured_pieces_of(&self, color: Color) -> Vec<Piece> {
        self.captured_pieces()
            .into_iter()
            .filter(|p| p.color() == color)
            .collect()
    }

    /// Pieces still on the board.
    pub fn on_board_pieces(&self) -> impl Iterator<Item = &ChessPiece> + '_ {
        self.on_board.iter().map(|&id| self.board.get(id))
    }

    /// Square of the pawn that may currently be captured en passant.
    pub fn en_passant_vulnerable(&self) -> Option<Square> {
        self.en_passant_vulnerable
            .and_then(|id| self.board.get(id).square())
    }

    /// Square of the piece awaiting a promotion choice.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.promoted.and_then(|id| self.board.get(id).square())
    }

    // ── Moves ───────────────────────────────────────────────────────────────

    /// The pseudo-legal move mask of the piece on `source`.
    ///
    /// The mask is not filtered for self-check; see
    /// [`ChessMatch::legal_moves`] for that.
    ///
    /// # Errors
    ///
    /// [`ChessError::NoPieceAtSource`], [`ChessError::WrongPlayersPiece`] or
    /// [`ChessError::NoLegalMoves`] for an unusable source square, and
    /// [`ChessError::MatchOver`] after checkmate.
    pub fn possible_moves(&self, source: impl Into<Square>) -> Result<MoveMask, ChessError> {
        self.validate_source_position(source.into())
    }

    /// The move mask of the piece on `source` with every move that would
    /// leave its own king attacked removed.
    ///
    /// # Errors
    ///
    /// Same as [`ChessMatch::possible_moves`].
    pub fn legal_moves(&mut self, source: impl Into<Square>) -> Result<MoveMask, ChessError> {
        let source = source.into();
        let mask = self.validate_source_position(source)?;
        let mover = self.current_player;

        let mut legal = MoveMask::EMPTY;
        for target in mask {
            let record = self.commit(source, target);
            let illegal = self.test_check(mover) || self.test_illegal_castling(&record);
            self.revert(record);
            if !illegal {
                legal.insert(target);
            }
        }
        Ok(legal)
    }

    /// Move the piece on `source` to `target` and return the piece it
    /// captured, if any.
    ///
    /// A pawn reaching the far rank becomes a Queen at once;
    /// [`ChessMatch::resolve_promotion`] may change that choice before the
    /// next move.
    ///
    /// # Errors
    ///
    /// The source errors of [`ChessMatch::possible_moves`],
    /// [`ChessError::IllegalTarget`] when `target` is outside the mask and
    /// [`ChessError::SelfCheck`] when the move would leave the mover's king
    /// attacked or castle across an attacked square. The match is
    /// unchanged after any error.
    pub fn perform_move(
        &mut self,
        source: impl Into<Square>,
        target: impl Into<Square>,
    ) -> Result<Option<Piece>, ChessError> {
        let source = source.into();
        let target = target.into();
        let mask = self.validate_source_position(source)?;
        if !mask.contains(target) {
            return Err(ChessError::IllegalTarget {
                from: source,
                to: target,
            });
        }

        let mover = self.current_player;
        let record = self.commit(source, target);
        if self.test_check(mover) || self.test_illegal_castling(&record) {
            self.revert(record);
            debug!(%source, %target, "rejected: leaves own king in check");
            return Err(ChessError::SelfCheck);
        }

        let captured = record.captured().map(|id| self.board.get(id).piece());
        let moved = record.mover();
        let moved_kind = self.board.get(moved).kind();
        debug!(%source, %target, ?captured, "move committed");

        // The privilege lasts for the opponent's next move only.
        let double_step = (target.row() - source.row()).abs() == 2;
        self.en_passant_vulnerable =
            (moved_kind == PieceKind::Pawn && double_step).then_some(moved);

        self.promoted = None;
        if moved_kind == PieceKind::Pawn && target.row() == (!mover).back_row() as i8 {
            self.promoted = Some(self.swap_promoted(moved, PieceKind::Queen));
        }

        self.classify_reply(mover);
        Ok(captured)
    }

    /// Evaluate check and checkmate for the side answering `mover`'s move,
    /// then pass the turn unless the match is over.
    ///
    /// Expects the turn state as it was when `mover` moved.
    fn classify_reply(&mut self, mover: Color) {
        let opponent = !mover;
        self.check = self.test_check(opponent);
        self.checkmate = self.test_checkmate(opponent);

        if self.checkmate {
            info!(winner = %mover, turn = self.turn, "checkmate");
            return;
        }
        if self.check {
            info!(player = %opponent, "check");
        }
        self.next_turn();
    }

    // ── Promotion ───────────────────────────────────────────────────────────

    /// Replace the pending-promotion piece according to a letter among
    /// `B`, `N`, `R`, `Q` (either case) and return the resulting kind.
    ///
    /// Any other letter leaves the piece as it is and returns its kind.
    ///
    /// # Errors
    ///
    /// [`ChessError::NoPendingPromotion`] if no piece awaits promotion.
    pub fn resolve_promotion(&mut self, letter: char) -> Result<PieceKind, ChessError> {
        match PieceKind::from_promotion_letter(letter) {
            Some(kind) => self.promote(kind),
            None => self.promoted_kind(),
        }
    }

    /// Replace the pending-promotion piece with a fresh piece of `kind`.
    ///
    /// Kinds a pawn cannot promote to leave the piece unchanged. Check,
    /// checkmate and the turn are settled again for the new piece, so a
    /// choice can deliver mate or undo one.
    ///
    /// # Errors
    ///
    /// [`ChessError::NoPendingPromotion`] if no piece awaits promotion.
    pub fn promote(&mut self, kind: PieceKind) -> Result<PieceKind, ChessError> {
        let current = self.promoted.ok_or(ChessError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return self.promoted_kind();
        }
        let mover = self.board.get(current).color();
        let replacement = self.swap_promoted(current, kind);
        self.promoted = Some(replacement);

        // Rewind to the turn state of the promoting move.
        if !self.checkmate {
            self.turn -= 1;
            self.current_player = mover;
        }
        self.classify_reply(mover);
        info!(%kind, "promotion resolved");
        Ok(kind)
    }

    fn promoted_kind(&self) -> Result<PieceKind, ChessError> {
        self.promoted
            .map(|id| self.board.get(id).kind())
            .ok_or(ChessError::NoPendingPromotion)
    }

    /// Put a new unmoved piece of `kind` where `old` stands, taking its
    /// place in the on-board list.
    fn swap_promoted(&mut self, old: PieceId, kind: PieceKind) -> PieceId {
        let square = self
            .board
            .get(old)
            .square()
            .expect("the promoted piece stands on the board");
        let color = self.board.get(old).color();

        self.board.remove_piece(square);
        let replacement = self.board.add_piece(Piece::new(kind, color));
        self.board.place_piece(replacement, square);

        if let Some(slot) = self.on_board.iter_mut().find(|id| **id == old) {
            *slot = replacement;
        }
        replacement
    }

    // ── Rules ───────────────────────────────────────────────────────────────

    /// Run the source checks and return the piece's move mask.
    fn validate_source_position(&self, source: Square) -> Result<MoveMask, ChessError> {
        if self.checkmate {
            return Err(ChessError::MatchOver);
        }
        let piece = self
            .board
            .piece(source)
            .ok_or(ChessError::NoPieceAtSource { square: source })?;
        if piece.color() != self.current_player {
            return Err(ChessError::WrongPlayersPiece { square: source });
        }
        let mask = piece.possible_moves(&self.board, self.en_passant_vulnerable);
        if mask.is_empty() {
            return Err(ChessError::NoLegalMoves { square: source });
        }
        Ok(mask)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = !self.current_player;
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king on the board, which the setup rules out.
    fn king_square(&self, color: Color) -> Square {
        self.on_board_pieces()
            .find(|p| p.kind() == PieceKind::King && p.color() == color)
            .and_then(ChessPiece::square)
            .expect("each side keeps its king on the board")
    }

    /// Return `true` if any on-board piece of `by` has `sq` in its mask.
    pub(crate) fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.on_board_pieces()
            .filter(|p| p.color() == by)
            .any(|p| p.possible_move(&self.board, self.en_passant_vulnerable, sq))
    }

    /// Return `true` if `color`'s king is attacked.
    pub(crate) fn test_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), !color)
    }

    /// After a committed castle, return `true` if the square the king
    /// passed over is attacked.
    fn test_illegal_castling(&self, record: &MoveRecord) -> bool {
        if !record.is_castle() {
            return false;
        }
        let color = self.board.get(record.mover()).color();
        let step = (record.target().col() - record.source().col()).signum();
        record
            .source()
            .offset(0, step)
            .is_some_and(|transit| self.is_square_attacked(transit, !color))
    }

    /// Return `true` if `color` is in check and no move of any of its
    /// pieces is accepted by the same rules as [`ChessMatch::perform_move`].
    pub(crate) fn test_checkmate(&mut self, color: Color) -> bool {
        if !self.test_check(color) {
            return false;
        }

        let defenders: Vec<PieceId> = self
            .on_board
            .iter()
            .copied()
            .filter(|&id| self.board.get(id).color() == color)
            .collect();

        for id in defenders {
            let piece = *self.board.get(id);
            let Some(source) = piece.square() else {
                continue;
            };
            for target in piece.possible_moves(&self.board, self.en_passant_vulnerable) {
                let record = self.commit(source, target);
                let illegal = self.test_check(color) || self.test_illegal_castling(&record);
                self.revert(record);
                if !illegal {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}
