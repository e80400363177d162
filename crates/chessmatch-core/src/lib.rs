//! Chess rules engine: board storage, per-piece move generation, and the
//! match orchestrator that validates moves and detects check and checkmate.

mod board;
mod builder;
mod chess_match;
mod chess_piece;
mod color;
mod error;
mod file;
mod make_move;
mod move_mask;
mod movegen;
mod piece;
mod piece_kind;
mod position;
mod rank;
mod square;

pub use board::{Board, PrettyBoard};
pub use builder::MatchBuilder;
pub use chess_match::ChessMatch;
pub use chess_piece::{ChessPiece, PieceId};
pub use color::Color;
pub use error::ChessError;
pub use file::File;
pub use move_mask::{MoveMask, MoveMaskIter};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::ChessPosition;
pub use rank::Rank;
pub use square::Square;
