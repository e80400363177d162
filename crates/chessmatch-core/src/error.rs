//! Error types for move validation, promotion and position setup.

use crate::color::Color;
use crate::square::Square;

/// Errors surfaced by the match to its caller.
///
/// Every variant is recoverable: none of them leaves a partial mutation
/// behind, so the caller reports the message and asks again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The text does not name a square between a1 and h8.
    #[error("invalid position \"{input}\": valid positions are from a1 to h8")]
    InvalidPosition {
        /// The rejected input.
        input: String,
    },

    /// The source square is empty.
    #[error("there is no piece on source position {square}")]
    NoPieceAtSource {
        /// The empty source square.
        square: Square,
    },

    /// The piece on the source square belongs to the other player.
    #[error("the piece on {square} doesn't belong to the current player")]
    WrongPlayersPiece {
        /// The source square.
        square: Square,
    },

    /// The chosen piece has no reachable square.
    #[error("there are no possible moves for the piece on {square}")]
    NoLegalMoves {
        /// The source square.
        square: Square,
    },

    /// The target square is not in the source piece's move mask.
    #[error("the piece on {from} can't move to {to}")]
    IllegalTarget {
        /// The source square.
        from: Square,
        /// The rejected target square.
        to: Square,
    },

    /// The move would leave the mover's own king attacked.
    #[error("you can't put yourself in check")]
    SelfCheck,

    /// A promotion choice was given while no pawn awaits promotion.
    #[error("there is no piece to be promoted")]
    NoPendingPromotion,

    /// The match has ended in checkmate.
    #[error("the match is over")]
    MatchOver,

    /// A position was set up without a king for one side.
    #[error("no {color} king on the board")]
    MissingKing {
        /// The side without a king.
        color: Color,
    },

    /// A position was set up with more than one king for one side.
    #[error("more than one {color} king on the board")]
    DuplicateKing {
        /// The side with several kings.
        color: Color,
    },

    /// Two pieces were placed on the same square.
    #[error("square {square} is already occupied")]
    SquareOccupied {
        /// The doubly-used square.
        square: Square,
    },
}
