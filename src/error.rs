use thiserror::Error;

use crate::position::Pos;

/// Errors that can be returned by the core engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A position component fell outside `0..=14`.
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: i32, col: i32 },

    /// `Rack::push`/`Rack::add` would grow the rack past 7 tiles.
    #[error("rack can not hold more than 7 tiles")]
    RackOverflow,

    /// Attempt to remove a tile (or blank) from a rack or pool that does not hold it.
    #[error("tile '{0}' is not available")]
    TileNotAvailable(char),

    /// `Move::get_tile` was called with a position the move does not cover.
    #[error("no tile at position ({}, {})", .0.row, .0.col)]
    NoTileAtPosition(Pos),

    /// A trie edge for `letter` already exists at the node being extended.
    #[error("duplicate edge for letter '{0}'")]
    DuplicateEdge(char),

    /// `Lexicon::get_node` walked off the end of the trie.
    #[error("path not found for word fragment \"{0}\"")]
    PathNotFound(String),

    /// Reading a plain word list from disk failed.
    #[error("word list \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Deserializing a bincoded lexicon blob failed.
    #[cfg(feature = "bincode")]
    #[error("lexicon blob could not be deserialized")]
    LexiconDeserializeError,

    /// `Board::with_state_from_strings` / `Rules`-grid parsing got the wrong
    /// number of rows.
    #[error("invalid number of rows {0} (expected 15)")]
    InvalidRowCount(usize),

    /// A row passed to the board did not have exactly 15 characters.
    #[error("invalid row length {0} (expected 15)")]
    InvalidRowLength(usize),
}
