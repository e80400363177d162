//! Parsing of the lines typed at the prompts.

use chessmatch_core::{ChessPosition, PieceKind};

use crate::error::ConsoleError;

/// One line of player input at a coordinate prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A coordinate such as `e2`.
    Position(ChessPosition),
    /// `quit` or `exit`: leave the match.
    Quit,
}

/// Parse a single line typed at the `Source:` or `Target:` prompt.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidInput`] for anything that is neither a
/// coordinate from `a1` to `h8` nor a quit command.
pub fn parse_line(line: &str) -> Result<Input, ConsoleError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return Ok(Input::Quit);
    }
    trimmed
        .parse()
        .map(Input::Position)
        .map_err(|_| ConsoleError::InvalidInput {
            input: trimmed.to_string(),
        })
}

/// Parse the answer to the promotion prompt: a single `B`, `N`, `R` or `Q`
/// in either case.
pub fn parse_promotion(line: &str) -> Option<PieceKind> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_promotion_letter(c),
        _ => None,
    }
}
