use std::time::Instant;

use anyhow::Result;
use scrabble_solver::{best_move, Board, Generator, Lexicon, Rack, Rules};

const STATE: &[&str] = &[
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "       CARTS   ",
    "          A    ",
    "          N    ",
    "          D    ",
    "               ",
    "               ",
    "               ",
    "               ",
];

fn run() -> Result<()> {
    let wordfile = "wordlists/words.txt";
    let lexicon = Lexicon::from_file(wordfile)?;
    let board = Board::with_state_from_strings(STATE)?;
    let rules = Rules::english();
    let rack = Rack::from_str("BMEKQEV")?;

    let now = Instant::now();
    let gen = Generator::new(&board, &lexicon);
    let mut scratch = board.clone();
    let winner = best_move(&gen, &mut scratch, &rack, &rules);
    let dt = now.elapsed().as_secs_f32();

    println!("best move took {:.3} s", dt);
    println!("{} ({} points)", winner, scratch.calc_score(&winner, &rules));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
