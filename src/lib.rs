//! A Scrabble-style move generator and scorer.
//!
//! Given a [`Board`] with some tiles already placed, a [`Rack`] of up to
//! seven tiles, and a [`Lexicon`] of legal words, [`Generator`] enumerates
//! every legal play and [`Board::calc_score`] computes what each play is
//! worth under a [`Rules`] table.
//!
//! ## Basic usage
//! ```
//! use scrabble_solver::{best_move, Board, Generator, Lexicon, Rack, Rules};
//!
//! let board = Board::new();
//! let lexicon = Lexicon::build_from_list(["cat", "cats", "at", "car"]);
//! let rules = Rules::english();
//! let rack = Rack::from_str("CAT")?;
//!
//! let gen = Generator::new(&board, &lexicon);
//! let mut scratch = board.clone();
//! let winner = best_move(&gen, &mut scratch, &rack, &rules);
//! assert!(!winner.is_empty());
//! # Ok::<(), scrabble_solver::Error>(())
//! ```
mod board;
mod error;
mod mv;
mod position;
mod rack;
mod rules;
mod trie;

pub mod generator;

pub use board::Board;
pub use error::Error;
pub use generator::Generator;
pub use mv::{Move, Orientation};
pub use position::{Pos, N};
pub use rack::{Rack, CAPACITY};
pub use rules::{BonusSquares, Rules};
pub use trie::{Lexicon, Node};

/// Run `generator` to exhaustion and return its highest-scoring move, or the
/// pass move if nothing else is legal.
///
/// ## Examples
/// ```
/// use scrabble_solver::{best_move, Board, Generator, Lexicon, Rack, Rules};
/// let board = Board::new();
/// let lexicon = Lexicon::build_from_list(["zzz"]); // no legal plays for this rack
/// let rules = Rules::english();
/// let rack = Rack::from_str("QJX").unwrap();
/// let gen = Generator::new(&board, &lexicon);
/// let mut scratch = board.clone();
/// assert!(best_move(&gen, &mut scratch, &rack, &rules).is_empty());
/// ```
pub fn best_move(generator: &Generator<'_>, board: &mut Board, rack: &Rack, rules: &Rules) -> Move {
    generator
        .calc_all_moves(rack)
        .max_by_key(|m| board.calc_score(m, rules))
        .unwrap_or_else(Move::new)
}
