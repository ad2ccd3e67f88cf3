//! Board coordinates.
use std::convert::TryFrom;
use std::fmt;
use std::ops::Add;

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board dimension: a standard Scrabble board is 15x15 squares.
pub const N: usize = 15;

/// A square on the board, `0 <= row, col <= 14`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position without checking bounds.
    pub const fn new(row: i32, col: i32) -> Pos {
        Pos { row, col }
    }

    /// `true` if both components lie in `0..=14`.
    pub fn in_bounds(&self) -> bool {
        (0..N as i32).contains(&self.row) && (0..N as i32).contains(&self.col)
    }

    /// Swap row and column.
    pub fn transpose(&self) -> Pos {
        Pos::new(self.col, self.row)
    }

    /// Row-major flat index into a `N*N` array, valid only `in_bounds`.
    pub fn flat_index(&self) -> usize {
        self.row as usize * N + self.col as usize
    }
}

impl TryFrom<(i32, i32)> for Pos {
    type Error = Error;
    fn try_from((row, col): (i32, i32)) -> Result<Self, Error> {
        let pos = Pos::new(row, col);
        if pos.in_bounds() {
            Ok(pos)
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Pos {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;
        let mut t = s.serialize_tuple(2)?;
        t.serialize_element(&self.row)?;
        t.serialize_element(&self.col)?;
        t.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Pos {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let (row, col) = <(i32, i32)>::deserialize(d)?;
        Ok(Pos::new(row, col))
    }
}
