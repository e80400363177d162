//! Line-based console shell for chessmatch.
//!
//! Draws the board with ANSI colors, reads one coordinate per line and
//! feeds the moves to [`chessmatch_core::ChessMatch`].

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;

pub use config::ConsoleConfig;
pub use error::ConsoleError;
pub use game::{ConsoleGame, Outcome};
pub use input::{Input, parse_line, parse_promotion};
pub use render::Renderer;
