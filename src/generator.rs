//! Anchor/cross-check precomputation and the left-part/right-part search
//! that together enumerate every legal move for a rack.
use std::collections::{HashMap, HashSet};

use crate::board::Board;
use crate::mv::{Move, Orientation};
use crate::position::{Pos, N};
use crate::rack::Rack;
use crate::trie::{Lexicon, Node};

/// Per-cell allowed-letter sets. A cell absent from the map has no
/// perpendicular neighbor and so allows any letter.
type CrossChecks = HashMap<Pos, HashSet<char>>;

/// Enumerates legal moves for a board and lexicon.
///
/// Borrows both for the duration of a call to [`Generator::calc_all_moves`];
/// the board is temporarily mutated during cross-check computation but is
/// always restored before the call returns.
pub struct Generator<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
}

impl<'a> Generator<'a> {
    pub fn new(board: &'a Board, lexicon: &'a Lexicon) -> Generator<'a> {
        Generator { board, lexicon }
    }

    /// Every legal move for `rack`: across moves, then down moves, then the
    /// empty pass move, always last.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Generator, Lexicon, Rack};
    /// let board = Board::new();
    /// let lexicon = Lexicon::build_from_list(["cat", "cats", "at"]);
    /// let rack = Rack::from_str("CAT")?;
    /// let gen = Generator::new(&board, &lexicon);
    /// let moves: Vec<_> = gen.calc_all_moves(&rack).collect();
    /// assert!(moves.last().unwrap().is_empty()); // pass is always last
    /// # Ok::<(), scrabble_solver::Error>(())
    /// ```
    pub fn calc_all_moves(&self, rack: &Rack) -> impl Iterator<Item = Move> {
        let mut moves = self.calc_moves_one_axis(self.board.copy(), rack);
        let transposed = self.board.transpose();
        let down = self.calc_moves_one_axis(transposed, rack);
        moves.extend(down.into_iter().map(|m| m.transpose()));
        moves.push(Move::new());
        moves.into_iter()
    }

    /// Run the across-axis search on `board` (the caller pre-transposes for
    /// the down pass and transposes the results back).
    fn calc_moves_one_axis(&self, mut board: Board, rack: &Rack) -> Vec<Move> {
        let anchors = find_anchors(&board);
        let cross = self.compute_cross_checks(&mut board);
        let mut out = Vec::new();
        let mut ordered_anchors: Vec<Pos> = anchors.iter().copied().collect();
        ordered_anchors.sort_by_key(|p| (p.row, p.col));
        let mut rack = rack.clone();

        for anchor in ordered_anchors {
            let limit = left_limit(&board, &anchors, anchor);
            if limit > 0 {
                let mut prefix = String::new();
                self.left_part(
                    &board,
                    &mut rack,
                    &cross,
                    anchor,
                    &mut prefix,
                    self.lexicon.root(),
                    limit,
                    &mut out,
                );
            } else if let Some((prefix_len, node)) = self.fixed_prefix_node(&board, anchor) {
                let mut placed = Move::new();
                self.right_part(
                    &board,
                    &mut rack,
                    &cross,
                    prefix_len,
                    prefix_len,
                    node,
                    anchor,
                    &mut placed,
                    &mut out,
                );
            }
        }
        out
    }

    /// For an anchor with no free prefix cells, read the contiguous run of
    /// existing tiles to its left and look it up in the trie.
    fn fixed_prefix_node(&self, board: &Board, anchor: Pos) -> Option<(usize, &'a Node)> {
        let mut chars = Vec::new();
        let mut pos = Pos::new(anchor.row, anchor.col - 1);
        while pos.in_bounds() && board.get(pos) != ' ' {
            chars.push(board.get(pos));
            pos = Pos::new(pos.row, pos.col - 1);
        }
        if chars.is_empty() {
            return Some((0, self.lexicon.root()));
        }
        chars.reverse();
        let fixed: String = chars.into_iter().collect();
        self.lexicon.get_node(&fixed).ok().map(|node| (fixed.chars().count(), node))
    }

    /// Enumerate every rack-derived prefix up to `limit` letters long and run
    /// [`Generator::right_part`] from each one, with `rack` still missing
    /// exactly the letters that prefix spent. Extending `right_part`'s own
    /// collect-then-replay would let it reuse a tile the prefix already
    /// placed, so the two walks share one recursion instead.
    #[allow(clippy::too_many_arguments)]
    fn left_part(
        &self,
        board: &Board,
        rack: &mut Rack,
        cross: &CrossChecks,
        anchor: Pos,
        prefix: &mut String,
        node: &'a Node,
        limit: usize,
        out: &mut Vec<Move>,
    ) {
        let anchor_index = prefix.chars().count();
        let mut placed = if anchor_index > 0 {
            place_prefix(prefix, anchor, anchor_index)
        } else {
            Move::new()
        };
        self.right_part(
            board,
            rack,
            cross,
            anchor_index,
            anchor_index,
            node,
            anchor,
            &mut placed,
            out,
        );

        if anchor_index >= limit {
            return;
        }
        for (edge, child) in node.edges() {
            if rack.contains(edge) {
                rack.remove(edge).expect("just checked contains");
                prefix.push(edge);
                self.left_part(board, rack, cross, anchor, prefix, child, limit, out);
                prefix.pop();
                rack.push(edge).expect("just removed one slot");
            }
            if rack.has_blank() {
                rack.remove(' ').expect("just checked has_blank");
                prefix.push(edge.to_ascii_lowercase());
                self.left_part(board, rack, cross, anchor, prefix, child, limit, out);
                prefix.pop();
                rack.push(' ').expect("just removed one slot");
            }
        }
    }

    /// Extend rightward from `pos`, yielding a completed move into `out`
    /// every time the trie reaches a terminal node beyond the anchor.
    #[allow(clippy::too_many_arguments)]
    fn right_part(
        &self,
        board: &Board,
        rack: &mut Rack,
        cross: &CrossChecks,
        anchor_index: usize,
        depth: usize,
        node: &'a Node,
        pos: Pos,
        placed: &mut Move,
        out: &mut Vec<Move>,
    ) {
        if !pos.in_bounds() {
            if depth != anchor_index && node.is_terminal() {
                out.push(placed.clone());
            }
            return;
        }

        let cell = board.get(pos);
        if cell == ' ' {
            if depth != anchor_index && node.is_terminal() {
                out.push(placed.clone());
            }
            if placed.len() >= 7 {
                return;
            }
            let allowed = cross.get(&pos);
            for (edge, child) in node.edges() {
                if let Some(set) = allowed {
                    if !set.contains(&edge) {
                        continue;
                    }
                }
                if rack.contains(edge) {
                    rack.remove(edge).expect("just checked contains");
                    placed.add(edge, pos);
                    self.right_part(
                        board,
                        rack,
                        cross,
                        anchor_index,
                        depth + 1,
                        child,
                        pos + Pos::new(0, 1),
                        placed,
                        out,
                    );
                    placed.remove(pos);
                    rack.push(edge).expect("just removed one slot");
                }
                if rack.has_blank() {
                    rack.remove(' ').expect("just checked has_blank");
                    placed.add(edge.to_ascii_lowercase(), pos);
                    self.right_part(
                        board,
                        rack,
                        cross,
                        anchor_index,
                        depth + 1,
                        child,
                        pos + Pos::new(0, 1),
                        placed,
                        out,
                    );
                    placed.remove(pos);
                    rack.push(' ').expect("just removed one slot");
                }
            }
        } else if let Some(child) = node.child(cell) {
            self.right_part(
                board,
                rack,
                cross,
                anchor_index,
                depth + 1,
                child,
                pos + Pos::new(0, 1),
                placed,
                out,
            );
        }
    }

    /// Cross-check sets for every empty cell with a vertical neighbor.
    /// Writes each candidate letter into the board and reads it back out,
    /// restoring the cell before moving to the next letter.
    fn compute_cross_checks(&self, board: &mut Board) -> CrossChecks {
        let mut checks = HashMap::new();
        for row in 0..N as i32 {
            for col in 0..N as i32 {
                let pos = Pos::new(row, col);
                if board.get(pos) != ' ' {
                    continue;
                }
                let above = Pos::new(row - 1, col);
                let below = Pos::new(row + 1, col);
                let has_vertical_neighbor = (above.in_bounds() && board.get(above) != ' ')
                    || (below.in_bounds() && board.get(below) != ' ');
                if !has_vertical_neighbor {
                    continue;
                }
                let mut allowed = HashSet::new();
                for letter in 'A'..='Z' {
                    board.set(pos, letter);
                    let run = board.traverse_axis_until_empty(pos, Orientation::Down);
                    board.set(pos, ' ');
                    if run.len() > 1 {
                        let word: String = run.iter().map(|&(c, _)| c).collect();
                        if self.lexicon.is_word(&word) {
                            allowed.insert(letter);
                        }
                    }
                }
                checks.insert(pos, allowed);
            }
        }
        checks
    }
}

/// Every empty cell adjacent to an occupied one. On an empty board the sole
/// anchor is the center square.
fn find_anchors(board: &Board) -> HashSet<Pos> {
    if board.is_empty() {
        let mut anchors = HashSet::new();
        anchors.insert(Pos::new((N / 2) as i32, (N / 2) as i32));
        return anchors;
    }
    let mut anchors = HashSet::new();
    for row in 0..N as i32 {
        for col in 0..N as i32 {
            let pos = Pos::new(row, col);
            if board.get(pos) != ' ' {
                continue;
            }
            let neighbors = [
                Pos::new(row - 1, col),
                Pos::new(row + 1, col),
                Pos::new(row, col - 1),
                Pos::new(row, col + 1),
            ];
            if neighbors.iter().any(|&n| n.in_bounds() && board.get(n) != ' ') {
                anchors.insert(pos);
            }
        }
    }
    anchors
}

/// Consecutive empty, non-anchor cells immediately left of `anchor`, capped
/// at one less than a full rack.
fn left_limit(board: &Board, anchors: &HashSet<Pos>, anchor: Pos) -> usize {
    let mut limit = 0;
    let mut pos = Pos::new(anchor.row, anchor.col - 1);
    while pos.in_bounds() && board.get(pos) == ' ' && !anchors.contains(&pos) {
        limit += 1;
        pos = Pos::new(pos.row, pos.col - 1);
    }
    limit.min(crate::rack::CAPACITY - 1)
}

/// Place `prefix` (already correctly cased) so its last letter sits one
/// cell left of `anchor`, without re-normalizing case the way
/// [`Move::anchored_to_moves`] does.
fn place_prefix(prefix: &str, anchor: Pos, anchor_index: usize) -> Move {
    let mut m = Move::new();
    let start_col = anchor.col - anchor_index as i32;
    for (i, tile) in prefix.chars().enumerate() {
        m.add(tile, Pos::new(anchor.row, start_col + i as i32));
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_lexicon() -> Lexicon {
        Lexicon::build_from_list(["cat", "cats", "car", "at", "as", "sat", "tan", "tea"])
    }

    #[test]
    fn test_empty_board_only_anchor_is_center() {
        let board = Board::new();
        let anchors = find_anchors(&board);
        assert_eq!(anchors, [Pos::new(7, 7)].into_iter().collect());
    }

    #[test]
    fn test_opening_move_crosses_center() {
        let board = Board::new();
        let lexicon = small_lexicon();
        let rack = Rack::from_str("CAT").unwrap();
        let gen = Generator::new(&board, &lexicon);
        let moves: Vec<_> = gen.calc_all_moves(&rack).filter(|m| !m.is_empty()).collect();
        assert!(!moves.is_empty());
        for m in &moves {
            assert!(m.all_positions().contains(&Pos::new(7, 7)));
        }
    }

    #[test]
    fn test_pass_is_last_and_unique() {
        let board = Board::new();
        let lexicon = small_lexicon();
        let rack = Rack::from_str("CAT").unwrap();
        let gen = Generator::new(&board, &lexicon);
        let moves: Vec<_> = gen.calc_all_moves(&rack).collect();
        assert!(moves.last().unwrap().is_empty());
        assert_eq!(moves.iter().filter(|m| m.is_empty()).count(), 1);
    }

    #[test]
    fn test_moves_never_overlap_existing_tiles() {
        let mut rows = vec![" ".repeat(N); N];
        rows[7] = "       CAT     ".to_string();
        let board = Board::with_state_from_strings(&rows).unwrap();
        let lexicon = small_lexicon();
        let rack = Rack::from_str("S").unwrap();
        let gen = Generator::new(&board, &lexicon);
        for m in gen.calc_all_moves(&rack).filter(|m| !m.is_empty()) {
            for pos in m.all_positions() {
                assert_eq!(board.get(pos), ' ');
            }
        }
    }

    #[test]
    fn test_cross_word_scenario_extends_cats() {
        let mut rows = vec![" ".repeat(N); N];
        rows[7] = "       CAT     ".to_string();
        let board = Board::with_state_from_strings(&rows).unwrap();
        let lexicon = small_lexicon();
        let rack = Rack::from_str("S").unwrap();
        let gen = Generator::new(&board, &lexicon);
        let words: Vec<String> = gen
            .calc_all_moves(&rack)
            .filter(|m| !m.is_empty())
            .map(|m| m.get_word())
            .collect();
        assert!(words.contains(&"CATS".to_string()));
    }

    #[test]
    fn test_moves_respect_rack_as_sub_multiset() {
        let board = Board::new();
        let lexicon = small_lexicon();
        let rack = Rack::from_str("CAT").unwrap();
        let gen = Generator::new(&board, &lexicon);
        for m in gen.calc_all_moves(&rack).filter(|m| !m.is_empty()) {
            let mut available: Vec<char> = rack.as_slice().to_vec();
            for &(tile, _) in m.tiles() {
                let letter = if tile.is_ascii_lowercase() { ' ' } else { tile };
                let idx = available.iter().position(|&c| c == letter);
                assert!(idx.is_some(), "move used a tile not in the rack");
                available.remove(idx.unwrap());
            }
        }
    }

    #[test]
    fn test_single_letter_rack_never_doubles_its_own_tile() {
        let board = Board::new();
        let lexicon = Lexicon::build_from_list(["aa"]);
        let rack = Rack::from_str("A").unwrap();
        let gen = Generator::new(&board, &lexicon);
        for m in gen.calc_all_moves(&rack).filter(|m| !m.is_empty()) {
            assert_eq!(m.len(), 1, "a one-tile rack can not produce a two-tile move");
        }
    }

    #[test]
    fn test_board_restored_after_generation() {
        let mut rows = vec![" ".repeat(N); N];
        rows[7] = "       CAT     ".to_string();
        let board = Board::with_state_from_strings(&rows).unwrap();
        let before = board.copy();
        let lexicon = small_lexicon();
        let rack = Rack::from_str("S").unwrap();
        let gen = Generator::new(&board, &lexicon);
        let _: Vec<_> = gen.calc_all_moves(&rack).collect();
        assert_eq!(board, before);
    }
}
