//! The rules table: tile values, tile counts, and premium-square layout.
//!
//! This models the external "rules table" collaborator from the
//! specification: a process-wide, immutable configuration normally loaded
//! once at startup from a structured file and then passed by read-only
//! handle into the scorer and move generator. Loading it from disk is a
//! collaborator's job; this module only owns the shape of the data and the
//! standard English distribution.
use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::{Pos, N};

const QUARTERS: usize = 1 + N / 2;

/// One quadrant of the standard 15x15 premium-square layout, read top-left
/// to the center. Mirrored into all four quadrants by [`expand_quarter`].
const QUARTER_BOARD: [&str; QUARTERS] = [
    "tw -- -- dl -- -- -- tw",
    "-- dw -- -- -- tl -- --",
    "-- -- dw -- -- -- dl --",
    "dl -- -- dw -- -- -- dl",
    "-- -- -- -- dw -- -- --",
    "-- tl -- -- -- tl -- --",
    "-- -- dl -- -- -- dl --",
    "tw -- -- dl -- -- -- dw",
];

fn expand_quarter() -> (
    HashSet<Pos>,
    HashSet<Pos>,
    HashSet<Pos>,
    HashSet<Pos>,
) {
    let mut dl = HashSet::new();
    let mut tl = HashSet::new();
    let mut dw = HashSet::new();
    let mut tw = HashSet::new();
    for (i, row) in QUARTER_BOARD.iter().enumerate() {
        for (j, code) in row.split(' ').enumerate() {
            let positions = [
                Pos::new(i as i32, j as i32),
                Pos::new((N - 1 - i) as i32, j as i32),
                Pos::new(i as i32, (N - 1 - j) as i32),
                Pos::new((N - 1 - i) as i32, (N - 1 - j) as i32),
            ];
            let set = match code {
                "dl" => Some(&mut dl),
                "tl" => Some(&mut tl),
                "dw" => Some(&mut dw),
                "tw" => Some(&mut tw),
                _ => None,
            };
            if let Some(set) = set {
                for &pos in &positions {
                    set.insert(pos);
                }
            }
        }
    }
    (dl, tl, dw, tw)
}

/// Standard English tile point values, `A..Z`.
const EN_TILE_VALUE: &[(char, u32)] = &[
    ('A', 1), ('B', 3), ('C', 3), ('D', 2), ('E', 1), ('F', 4), ('G', 2),
    ('H', 4), ('I', 1), ('J', 8), ('K', 5), ('L', 1), ('M', 3), ('N', 1),
    ('O', 1), ('P', 3), ('Q', 10), ('R', 1), ('S', 1), ('T', 1), ('U', 1),
    ('V', 4), ('W', 4), ('X', 8), ('Y', 4), ('Z', 10),
];

/// Standard English tile distribution, `A..Z` plus `' '` (blanks).
const EN_TILE_COUNT: &[(char, u32)] = &[
    ('A', 9), ('B', 2), ('C', 2), ('D', 4), ('E', 12), ('F', 2), ('G', 3),
    ('H', 2), ('I', 9), ('J', 1), ('K', 1), ('L', 4), ('M', 2), ('N', 6),
    ('O', 8), ('P', 2), ('Q', 1), ('R', 6), ('S', 4), ('T', 6), ('U', 4),
    ('V', 2), ('W', 2), ('X', 1), ('Y', 2), ('Z', 1), (' ', 2),
];

/// A set of board positions, used for the four premium-square families.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusSquares {
    #[cfg_attr(feature = "serde", serde(rename = "doubleLetter"))]
    pub double_letter: HashSet<Pos>,
    #[cfg_attr(feature = "serde", serde(rename = "tripleLetter"))]
    pub triple_letter: HashSet<Pos>,
    #[cfg_attr(feature = "serde", serde(rename = "doubleWord"))]
    pub double_word: HashSet<Pos>,
    #[cfg_attr(feature = "serde", serde(rename = "tripleWord"))]
    pub triple_word: HashSet<Pos>,
}

/// Process-wide configuration: per-letter point values, tile-count
/// distribution, and the four premium-square sets.
///
/// ## Examples
/// ```
/// use scrabble_solver::Rules;
/// let rules = Rules::english();
/// assert_eq!(rules.letter_value('Q'), 10);
/// assert_eq!(rules.letter_value('q'), 0); // blanks never score
/// assert_eq!(rules.tile_pool().len(), 100);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    pub tile_value: HashMap<char, u32>,
    pub tile_count: HashMap<char, u32>,
    pub bonus_squares: BonusSquares,
}

impl Rules {
    /// The standard English Scrabble rules table: point values, the
    /// 100-tile distribution, and the standard premium-square layout.
    pub fn english() -> Rules {
        let (double_letter, triple_letter, double_word, triple_word) = expand_quarter();
        Rules {
            tile_value: EN_TILE_VALUE.iter().copied().collect(),
            tile_count: EN_TILE_COUNT.iter().copied().collect(),
            bonus_squares: BonusSquares {
                double_letter,
                triple_letter,
                double_word,
                triple_word,
            },
        }
    }

    /// Point value of `tile`. Lowercase (blank) tiles and unknown
    /// characters are worth 0, per a missing-key lookup.
    pub fn letter_value(&self, tile: char) -> u32 {
        *self.tile_value.get(&tile).unwrap_or(&0)
    }

    /// The bag of tiles built by repeating each letter by its count.
    pub fn tile_pool(&self) -> Vec<char> {
        let mut pool: Vec<(char, u32)> = self.tile_count.iter().map(|(&c, &n)| (c, n)).collect();
        pool.sort_by_key(|&(c, _)| c);
        pool.into_iter()
            .flat_map(|(c, n)| std::iter::repeat(c).take(n as usize))
            .collect()
    }
}
