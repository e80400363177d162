//! Console shell errors.

use chessmatch_core::ChessError;

/// Errors that can occur while running the console shell.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The engine rejected a query or a move.
    #[error(transparent)]
    Chess(#[from] ChessError),

    /// A line could not be read as a coordinate.
    #[error("Error reading ChessPosition. Valid positions are from a1 to h8")]
    InvalidInput {
        /// The offending line, trimmed.
        input: String,
    },

    /// An I/O error occurred on the terminal.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
