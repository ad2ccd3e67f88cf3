//! The 15x15 grid of placed tiles, plus word enumeration and scoring.
use std::fmt;

use crate::error::Error;
use crate::mv::{Move, Orientation};
use crate::position::{Pos, N};
use crate::rules::Rules;

/// The board's state: a 15x15 grid of cells, `' '` meaning empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[char; N]; N],
}

impl Default for Board {
    fn default() -> Board {
        Board {
            cells: [[' '; N]; N],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|&c| if c == ' ' { '.' } else { c }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn axis_step(o: Orientation) -> Pos {
    match o {
        Orientation::Across => Pos::new(0, 1),
        Orientation::Down => Pos::new(1, 0),
    }
}

fn perpendicular(o: Orientation) -> Orientation {
    match o {
        Orientation::Across => Orientation::Down,
        Orientation::Down => Orientation::Across,
    }
}

impl Board {
    /// A new empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Parse a board from 15 rows of 15 characters each.
    /// ## Errors
    /// If `rows` does not have exactly 15 rows of 15 characters each.
    /// ## Examples
    /// ```
    /// use scrabble_solver::Board;
    /// let rows = [
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "       CAT     ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    /// ];
    /// let board = Board::with_state_from_strings(&rows)?;
    /// assert_eq!(board.get(scrabble_solver::Pos::new(7, 7)), 'C');
    /// # Ok::<(), scrabble_solver::Error>(())
    /// ```
    pub fn with_state_from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut board = Board::new();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != N {
                return Err(Error::InvalidRowLength(chars.len()));
            }
            for (j, &c) in chars.iter().enumerate() {
                board.cells[i][j] = c;
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Pos) -> char {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Pos, tile: char) {
        self.cells[pos.row as usize][pos.col as usize] = tile;
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.get(pos) != ' '
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == ' ')
    }

    /// Write every tile of `m` into its cell. Callers are responsible for
    /// having validated the move; this does not check legality.
    pub fn apply(&mut self, m: &Move) {
        for &(tile, pos) in m.tiles() {
            self.set(pos, tile);
        }
    }

    /// Clear every cell `m` covers.
    pub fn unapply(&mut self, m: &Move) {
        for &(_, pos) in m.tiles() {
            self.set(pos, ' ');
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[' '; N]; N];
    }

    /// An independent copy of this board.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    /// A board with every cell's row/col swapped.
    pub fn transpose(&self) -> Board {
        let mut out = Board::new();
        for row in 0..N {
            for col in 0..N {
                out.cells[col][row] = self.cells[row][col];
            }
        }
        out
    }

    /// Walk from one square past `start`, stepping by `step` each time,
    /// until out of bounds or `stop(tile, pos)` returns true for the
    /// candidate cell (that cell is not included in the result).
    pub fn traverse(
        &self,
        start: Pos,
        step: Pos,
        stop: impl Fn(char, Pos) -> bool,
    ) -> Vec<(char, Pos)> {
        let mut result = Vec::new();
        let mut pos = start + step;
        while pos.in_bounds() {
            let tile = self.get(pos);
            if stop(tile, pos) {
                break;
            }
            result.push((tile, pos));
            pos = pos + step;
        }
        result
    }

    /// The full run through `pos` along `orientation`'s axis: everything
    /// behind `pos` (in reading order), then `pos` itself, then everything
    /// ahead, stopping on `stop`.
    pub fn traverse_axis(
        &self,
        pos: Pos,
        orientation: Orientation,
        stop: impl Fn(char, Pos) -> bool + Copy,
    ) -> Vec<(char, Pos)> {
        let step = axis_step(orientation);
        let back_step = Pos::new(-step.row, -step.col);
        let mut behind = self.traverse(pos, back_step, stop);
        behind.reverse();
        let mut run = behind;
        run.push((self.get(pos), pos));
        run.extend(self.traverse(pos, step, stop));
        run
    }

    /// [`Board::traverse_axis`] specialized to stop at the first empty cell.
    pub fn traverse_axis_until_empty(&self, pos: Pos, orientation: Orientation) -> Vec<(char, Pos)> {
        self.traverse_axis(pos, orientation, |tile, _| tile == ' ')
    }

    /// The words formed by virtually applying `m`: the primary word along
    /// `m`'s own axis, plus every cross word (length >= 2) formed by a
    /// newly placed tile. Leaves the board unchanged. Returns nothing for
    /// the empty (pass) move.
    pub fn get_words_formed(&mut self, m: &Move) -> Vec<Move> {
        if m.is_empty() {
            return Vec::new();
        }
        let placed = m.all_positions();
        self.apply(m);

        let stop = |tile: char, pos: Pos| tile == ' ' && !placed.contains(&pos);
        let orientation = m.orientation();

        let mut words = Vec::new();
        let anchor = m.tiles()[0].1;
        words.push(run_to_move(self.traverse_axis(anchor, orientation, stop)));

        let cross_orientation = perpendicular(orientation);
        for &(_, pos) in m.tiles() {
            let run = self.traverse_axis(pos, cross_orientation, stop);
            if run.len() >= 2 {
                words.push(run_to_move(run));
            }
        }

        self.unapply(m);
        words
    }

    /// The score `m` would earn if played now, under `rules`. Newly placed
    /// tiles get premium-square bonuses; tiles already on the board do not.
    /// Placing exactly 7 tiles earns the +50 bingo bonus.
    pub fn calc_score(&mut self, m: &Move, rules: &Rules) -> u32 {
        if m.is_empty() {
            return 0;
        }
        let placed = m.all_positions();
        let mut total = 0u32;
        for word in self.get_words_formed(m) {
            let mut word_mul = 1u32;
            let mut score = 0u32;
            for &(tile, pos) in word.tiles() {
                let mut letter_mul = 1u32;
                if placed.contains(&pos) {
                    let bonus = &rules.bonus_squares;
                    if bonus.double_letter.contains(&pos) {
                        letter_mul = 2;
                    } else if bonus.triple_letter.contains(&pos) {
                        letter_mul = 3;
                    }
                    if bonus.double_word.contains(&pos) {
                        word_mul *= 2;
                    } else if bonus.triple_word.contains(&pos) {
                        word_mul *= 3;
                    }
                }
                score += rules.letter_value(tile) * letter_mul;
            }
            total += score * word_mul;
        }
        if m.len() == 7 {
            total += 50;
        }
        total
    }
}

fn run_to_move(run: Vec<(char, Pos)>) -> Move {
    let mut m = Move::new();
    for (tile, pos) in run {
        m.add(tile, pos);
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_rows() -> Vec<String> {
        vec![" ".repeat(N); N]
    }

    #[test]
    fn test_apply_unapply_roundtrip() {
        let mut board = Board::new();
        let m = Move::anchored_to_moves("CAT", Pos::new(7, 7), 0, true);
        board.apply(&m);
        assert_eq!(board.get(Pos::new(7, 7)), 'C');
        board.unapply(&m);
        assert!(board.is_empty());
    }

    #[test]
    fn test_copy_and_transpose_involutive() {
        let mut rows = empty_rows();
        rows[7] = "       CAT     ".to_string();
        let board = Board::with_state_from_strings(&rows).unwrap();
        assert_eq!(board.copy(), board);
        assert_eq!(board.transpose().transpose(), board);
    }

    #[test]
    fn test_traverse_does_not_wrap() {
        let board = Board::new();
        let run = board.traverse(Pos::new(0, 0), Pos::new(0, -1), |_, _| false);
        assert!(run.is_empty());
        let run = board.traverse(Pos::new(0, 0), Pos::new(-1, 0), |_, _| false);
        assert!(run.is_empty());
    }

    #[test]
    fn test_traverse_axis_until_empty() {
        let mut rows = empty_rows();
        rows[7] = "       CAT     ".to_string();
        let board = Board::with_state_from_strings(&rows).unwrap();
        let run = board.traverse_axis_until_empty(Pos::new(7, 8), Orientation::Across);
        let word: String = run.iter().map(|&(c, _)| c).collect();
        assert_eq!(word, "CAT");
    }

    #[test]
    fn test_get_words_formed_opening_bingo() {
        let mut board = Board::new();
        let m = Move::anchored_to_moves("BANANA", Pos::new(7, 7), 0, true);
        let before = board.copy();
        let words = board.get_words_formed(&m);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].get_word(), "BANANA");
        assert_eq!(board, before); // board restored
    }

    #[test]
    fn test_get_words_formed_cross_word() {
        let mut rows = empty_rows();
        rows[7] = "       CAT     ".to_string();
        let mut board = Board::with_state_from_strings(&rows).unwrap();
        let mut m = Move::new();
        m.add('S', Pos::new(7, 10));
        let words = board.get_words_formed(&m);
        // only the primary word CATS; no cross word (S alone is length 1)
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].get_word(), "CATS");
    }

    #[test]
    fn test_get_words_formed_pass_yields_nothing() {
        let mut board = Board::new();
        let m = Move::new();
        assert!(board.get_words_formed(&m).is_empty());
    }

    #[test]
    fn test_get_words_formed_idempotent() {
        let mut rows = empty_rows();
        rows[7] = "       CAT     ".to_string();
        let mut board = Board::with_state_from_strings(&rows).unwrap();
        let mut m = Move::new();
        m.add('S', Pos::new(7, 10));
        let before = board.copy();
        let first: Vec<String> = board.get_words_formed(&m).iter().map(Move::get_word).collect();
        let second: Vec<String> = board.get_words_formed(&m).iter().map(Move::get_word).collect();
        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_calc_score_opening_banana() {
        let mut board = Board::new();
        let rules = Rules::english();
        let m = Move::anchored_to_moves("BANANA", Pos::new(7, 7), 0, true);
        // B=3 A=1 N=1 A=1 N=1 A=1 = 8, doubled by the center DW square = 16
        assert_eq!(board.calc_score(&m, &rules), 16);
    }

    #[test]
    fn test_calc_score_bingo_bonus() {
        let mut board = Board::new();
        let rules = Rules::english();
        let m = Move::anchored_to_moves("WAFTING", Pos::new(7, 7), 0, true);
        assert_eq!(m.len(), 7);
        let with_bonus = board.calc_score(&m, &rules);

        let m6 = Move::anchored_to_moves("WAFTIN", Pos::new(7, 7), 0, true);
        let without_bonus = board.calc_score(&m6, &rules);
        assert!(with_bonus >= without_bonus + 50);
    }

    #[test]
    fn test_calc_score_pass_is_zero() {
        let mut board = Board::new();
        let rules = Rules::english();
        assert_eq!(board.calc_score(&Move::new(), &rules), 0);
    }

    #[test]
    fn test_calc_score_blank_scores_zero() {
        let mut board = Board::new();
        let rules = Rules::english();
        let mut m = Move::new();
        m.add('c', Pos::new(7, 7)); // blank used as 'c', lowercase
        m.add('A', Pos::new(7, 8));
        m.add('T', Pos::new(7, 9));
        // 'c' contributes 0, but sits on the center DW square
        assert_eq!(board.calc_score(&m, &rules), (0 + 1 + 1) * 2);
    }
}
