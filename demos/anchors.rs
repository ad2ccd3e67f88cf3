use anyhow::Result;
use scrabble_solver::{Board, Pos, N};

const TEST_STATE: &[&str] = &[
    "               ",
    "               ",
    "            z  ",
    "            if ",
    "         dental",
    "          v ex ",
    "       h  e    ",
    "      hedonic  ",
    "    r  d  l    ",
    "    o  o  y    ",
    "    brent      ",
    "    o  i  v    ",
    " gaits s  e    ",
    "    i  munged  ",
    "    c     a    ",
];

/// A cell is an anchor if it's empty and horizontally or vertically
/// adjacent to an occupied cell.
fn is_anchor(board: &Board, pos: Pos) -> bool {
    if board.get(pos) != ' ' {
        return false;
    }
    [
        Pos::new(pos.row - 1, pos.col),
        Pos::new(pos.row + 1, pos.col),
        Pos::new(pos.row, pos.col - 1),
        Pos::new(pos.row, pos.col + 1),
    ]
    .iter()
    .any(|&n| n.in_bounds() && board.get(n) != ' ')
}

fn run() -> Result<()> {
    let board = Board::with_state_from_strings(TEST_STATE)?;
    println!("Anchor squares (marked '+'):");
    for row in 0..N as i32 {
        let mut line = String::new();
        for col in 0..N as i32 {
            let pos = Pos::new(row, col);
            let tile = board.get(pos);
            line.push(if tile != ' ' {
                tile
            } else if is_anchor(&board, pos) {
                '+'
            } else {
                '.'
            });
        }
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
