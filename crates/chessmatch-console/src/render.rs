//! ANSI rendering of the board and the match status.
//!
//! Everything writes to an `impl Write` so tests can render into a
//! `Vec<u8>`.

use std::io::{self, Write};

use chessmatch_core::{ChessMatch, Color, MoveMask, Piece, Square};

const RESET: &str = "\x1b[0m";
const YELLOW: &str = "\x1b[33m";
const WHITE: &str = "\x1b[37m";
const BLUE_BACKGROUND: &str = "\x1b[44m";
const CLEAR: &str = "\x1b[H\x1b[2J";

/// Draws boards and status lines, with or without ANSI colors.
///
/// With colors on, every piece is shown by its uppercase letter and the
/// side is told apart by color. Without colors, Black's letters are
/// lowercase and highlighted empty squares show `*`.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Move the cursor home and wipe the terminal.
    pub fn clear_screen(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{CLEAR}")?;
        out.flush()
    }

    /// Draw the grid with rank labels and a file footer, putting a blue
    /// background behind every square in `highlights`.
    pub fn board(
        &self,
        out: &mut impl Write,
        pieces: &[[Option<Piece>; 8]; 8],
        highlights: MoveMask,
    ) -> io::Result<()> {
        let grid = highlights.to_grid();
        for (row, cells) in pieces.iter().enumerate() {
            write!(out, "{} ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                self.square(out, *cell, grid[row][col])?;
                write!(out, " ")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "  a b c d e f g h")
    }

    fn square(&self, out: &mut impl Write, cell: Option<Piece>, highlighted: bool) -> io::Result<()> {
        if !self.color {
            let c = match cell {
                Some(piece) => piece.letter(),
                None if highlighted => '*',
                None => '-',
            };
            return write!(out, "{c}");
        }

        if highlighted {
            write!(out, "{BLUE_BACKGROUND}")?;
        }
        match cell {
            None => write!(out, "-{RESET}"),
            Some(piece) => write!(out, "{}{piece}{RESET}", self.side_color(piece.color())),
        }
    }

    fn side_color(&self, color: Color) -> &'static str {
        match color {
            Color::White => WHITE,
            Color::Black => YELLOW,
        }
    }

    /// List captured pieces grouped by the side that lost them.
    pub fn captured(&self, out: &mut impl Write, chess_match: &ChessMatch) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Captured pieces: ")?;
        for (label, color) in [("White", Color::White), ("Black", Color::Black)] {
            let letters: Vec<String> = chess_match
                .captured_pieces_of(color)
                .into_iter()
                .map(|p| {
                    if self.color {
                        p.to_string()
                    } else {
                        p.letter().to_string()
                    }
                })
                .collect();
            let list = format!("[{}]", letters.join(", "));
            if self.color {
                writeln!(out, "{label}: {}{list}{RESET}", self.side_color(color))?;
            } else {
                writeln!(out, "{label}: {list}")?;
            }
        }
        Ok(())
    }

    /// Draw the board, the captured pieces and the turn status.
    pub fn match_view(&self, out: &mut impl Write, chess_match: &ChessMatch) -> io::Result<()> {
        self.board(out, &chess_match.pieces(), MoveMask::EMPTY)?;
        self.captured(out, chess_match)?;
        writeln!(out)?;
        writeln!(out, "Turn: {}", chess_match.turn())?;
        match chess_match.winner() {
            Some(winner) => {
                writeln!(out, "CHECKMATE!")?;
                writeln!(out, "Winner: {winner}")?;
            }
            None => {
                writeln!(
                    out,
                    "Waiting for player {} to make a move.",
                    chess_match.current_player()
                )?;
                if chess_match.is_check() {
                    writeln!(out, "CHECK!")?;
                }
            }
        }
        Ok(())
    }

    /// Draw the board with the moves of the piece on `source` highlighted.
    pub fn hints(
        &self,
        out: &mut impl Write,
        chess_match: &ChessMatch,
        source: Square,
        moves: MoveMask,
    ) -> io::Result<()> {
        self.board(out, &chess_match.pieces(), moves)?;
        writeln!(out)?;
        writeln!(out, "Moves for {source}: {}", moves.count())
    }
}
