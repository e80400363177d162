//! The interactive prompt loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use chessmatch_core::{ChessMatch, ChessPosition, Color};

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::input::{Input, parse_line, parse_promotion};
use crate::render::Renderer;

const PROMOTION_PROMPT: &str = "Enter piece for promotion (B/N/R/Q): ";

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The match ended in checkmate.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The player typed `quit` or input ran out.
    Quit,
}

/// Whether the loop keeps going after a turn.
enum Flow {
    Continue,
    Quit,
}

/// A match played over a line-based reader and writer.
pub struct ConsoleGame<R, W> {
    chess_match: ChessMatch,
    config: ConsoleConfig,
    renderer: Renderer,
    input: R,
    output: W,
    /// Error text shown under the next redraw.
    message: Option<String>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Start a new match from the standard position.
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Self::with_match(ChessMatch::new(), config, input, output)
    }

    /// Continue an existing match.
    pub fn with_match(chess_match: ChessMatch, config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            chess_match,
            config,
            renderer: Renderer::new(config.color),
            input,
            output,
            message: None,
        }
    }

    pub fn chess_match(&self) -> &ChessMatch {
        &self.chess_match
    }

    /// Consume the game and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the prompt loop until checkmate, `quit` or end of input.
    ///
    /// Rejected input and rejected moves are reported on the next redraw
    /// and the loop continues.
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures end the loop with an error.
    pub fn run(&mut self) -> Result<Outcome, ConsoleError> {
        loop {
            self.redraw()?;
            if let Some(winner) = self.chess_match.winner() {
                info!(%winner, turn = self.chess_match.turn(), "match over");
                return Ok(Outcome::Checkmate { winner });
            }
            if let Some(message) = self.message.take() {
                writeln!(self.output, "{message}")?;
            }

            match self.play_turn() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    info!(turn = self.chess_match.turn(), "player quit");
                    return Ok(Outcome::Quit);
                }
                Err(err @ ConsoleError::Io { .. }) => return Err(err),
                Err(err) => {
                    warn!(error = %err, "input rejected");
                    self.message = Some(err.to_string());
                }
            }
        }
    }

    fn redraw(&mut self) -> Result<(), ConsoleError> {
        if self.config.clear_screen {
            self.renderer.clear_screen(&mut self.output)?;
        }
        self.renderer.match_view(&mut self.output, &self.chess_match)?;
        Ok(())
    }

    /// Read a source and a target, then apply the move.
    fn play_turn(&mut self) -> Result<Flow, ConsoleError> {
        let Some(source) = self.prompt_position("Source")? else {
            return Ok(Flow::Quit);
        };
        let moves = self.chess_match.possible_moves(source)?;

        if self.config.show_hints {
            if self.config.clear_screen {
                self.renderer.clear_screen(&mut self.output)?;
            }
            self.renderer
                .hints(&mut self.output, &self.chess_match, source.to_square(), moves)?;
        }

        let Some(target) = self.prompt_position("Target")? else {
            return Ok(Flow::Quit);
        };
        let captured = self.chess_match.perform_move(source, target)?;
        debug!(%source, %target, captured = ?captured, "move applied");

        if self.chess_match.pending_promotion().is_some() {
            return self.choose_promotion();
        }
        Ok(Flow::Continue)
    }

    /// Ask for a coordinate. `None` means the player wants to leave.
    fn prompt_position(&mut self, label: &str) -> Result<Option<ChessPosition>, ConsoleError> {
        writeln!(self.output)?;
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        match parse_line(&line)? {
            Input::Position(pos) => Ok(Some(pos)),
            Input::Quit => Ok(None),
        }
    }

    /// Ask for the promotion piece until a valid letter arrives. The pawn
    /// is already a Queen, so end of input keeps that choice.
    fn choose_promotion(&mut self) -> Result<Flow, ConsoleError> {
        loop {
            write!(self.output, "{PROMOTION_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            match parse_promotion(&line) {
                Some(kind) => {
                    self.chess_match.promote(kind)?;
                    return Ok(Flow::Continue);
                }
                None => writeln!(self.output, "Invalid value: {}", line.trim())?,
            }
        }
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{ConsoleGame, Outcome};
    use crate::config::ConsoleConfig;
    use chessmatch_core::{ChessMatch, Color, MatchBuilder, Piece, PieceKind, Square};

    fn play(chess_match: ChessMatch, script: &str) -> (Outcome, ChessMatch, String) {
        let mut game = ConsoleGame::with_match(
            chess_match,
            ConsoleConfig::plain(),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        let outcome = game.run().unwrap();
        let m = game.chess_match().clone();
        let text = String::from_utf8(game.into_output()).unwrap();
        (outcome, m, text)
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, m, text) = play(ChessMatch::new(), "");
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(m, ChessMatch::new());
        assert!(text.contains("Turn: 1"));
        assert!(text.contains("Source: "));
    }

    #[test]
    fn quit_command() {
        let (outcome, m, _) = play(ChessMatch::new(), "e2\nquit\n");
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(m.turn(), 1);
    }

    #[test]
    fn moves_are_applied() {
        let (outcome, m, text) = play(ChessMatch::new(), "e2\ne4\ne7\ne5\n");
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(m.turn(), 3);
        assert_eq!(m.board().piece(Square::E5).unwrap().piece(), Piece::BLACK_PAWN);
        assert!(text.contains("Moves for e2: 2"));
        assert!(text.contains("Waiting for player BLACK to make a move."));
        assert!(text.contains("Target: "));
    }

    #[test]
    fn errors_are_reported_and_the_loop_continues() {
        let (_, m, text) = play(ChessMatch::new(), "z9\ne7\ne4\ne2\ne5\ne2\ne4\n");
        assert!(text.contains("Error reading ChessPosition. Valid positions are from a1 to h8"));
        assert!(text.contains("the piece on e7 doesn't belong to the current player"));
        assert!(text.contains("there is no piece on source position e4"));
        assert!(text.contains("can't move to e5"));
        assert_eq!(m.turn(), 2);
    }

    #[test]
    fn checkmate_ends_the_session() {
        let (outcome, m, text) = play(ChessMatch::new(), "f2\nf3\ne7\ne5\ng2\ng4\nd8\nh4\n");
        assert_eq!(outcome, Outcome::Checkmate { winner: Color::Black });
        assert!(m.is_checkmate());
        assert!(text.contains("CHECKMATE!\nWinner: BLACK"));
    }

    #[test]
    fn promotion_prompt() {
        let start = MatchBuilder::new()
            .piece(Square::E1, Color::White, PieceKind::King)
            .piece(Square::A8, Color::Black, PieceKind::King)
            .moved_piece(Square::G7, Color::White, PieceKind::Pawn, 4)
            .build()
            .unwrap();
        let (_, m, text) = play(start, "g7\ng8\nK\nn\n");
        assert!(text.contains("Enter piece for promotion (B/N/R/Q): "));
        assert!(text.contains("Invalid value: K"));
        assert_eq!(m.board().piece(Square::G8).unwrap().piece(), Piece::WHITE_KNIGHT);
        assert_eq!(m.current_player(), Color::Black);
    }

    #[test]
    fn mating_promotion_choice_ends_the_session() {
        let start = MatchBuilder::new()
            .piece(Square::E1, Color::White, PieceKind::King)
            .moved_piece(Square::F7, Color::White, PieceKind::Pawn, 5)
            .piece(Square::H7, Color::Black, PieceKind::King)
            .piece(Square::G8, Color::Black, PieceKind::Bishop)
            .piece(Square::H8, Color::Black, PieceKind::Rook)
            .moved_piece(Square::G6, Color::Black, PieceKind::Pawn, 1)
            .piece(Square::G7, Color::Black, PieceKind::Pawn)
            .moved_piece(Square::H6, Color::Black, PieceKind::Pawn, 1)
            .build()
            .unwrap();
        let (outcome, m, text) = play(start, "f7\nf8\nN\n");
        assert_eq!(outcome, Outcome::Checkmate { winner: Color::White });
        assert_eq!(m.board().piece(Square::F8).unwrap().piece(), Piece::WHITE_KNIGHT);
        assert!(text.contains("CHECKMATE!\nWinner: WHITE"));
    }
}
