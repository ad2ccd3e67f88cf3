use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Board, Generator, Lexicon, Rack};

const WORDS: &[&str] = &[
    "cat", "cats", "car", "cart", "care", "dog", "dogs", "do", "done", "tan",
    "tent", "tend", "ten", "tea", "teas", "tease", "east", "eats", "sat",
    "sate", "sane", "sand", "land", "lane", "line", "lint", "mint", "mine",
];

fn mid_game_board() -> Board {
    let mut rows: Vec<String> = vec![" ".repeat(15); 15];
    rows[7] = "       CARTS   ".to_string();
    rows[6] = "        A      ".to_string();
    rows[8] = "        N      ".to_string();
    Board::with_state_from_strings(&rows).unwrap()
}

fn bench_calc_all_moves(c: &mut Criterion) {
    let board = mid_game_board();
    let lexicon = Lexicon::build_from_list(WORDS);
    let rack = Rack::from_str("SANDLIE").unwrap();
    c.bench_function("generator.calc_all_moves", |b| {
        b.iter(|| {
            let gen = Generator::new(&board, &lexicon);
            gen.calc_all_moves(&rack).count()
        })
    });
}

fn bench_calc_score(c: &mut Criterion) {
    let mut board = mid_game_board();
    let lexicon = Lexicon::build_from_list(WORDS);
    let rules = scrabble_solver::Rules::english();
    let rack = Rack::from_str("SANDLIE").unwrap();
    let gen = Generator::new(&board, &lexicon);
    let moves: Vec<_> = gen.calc_all_moves(&rack).collect();
    c.bench_function("board.calc_score over all moves", |b| {
        b.iter(|| {
            moves
                .iter()
                .map(|m| board.calc_score(m, &rules))
                .max()
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_calc_all_moves, bench_calc_score);
criterion_main!(benches);
