use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictactoe::{minimax, perf_count, Board};

const MIDDLE: &str = "X--/-O-/--X";
const ENDGAME: &str = "XO-/-XO/X--";

fn perft(c: &mut Criterion) {
    c.bench_function("perft depth 4", |b| {
        let board = Board::initial_state();
        b.iter(|| perf_count(board, black_box(4)))
    });
    c.bench_function("perft full game", |b| {
        let board = Board::initial_state();
        b.iter(|| perf_count(board, black_box(9)))
    });
}

fn search(c: &mut Criterion) {
    c.bench_function("minimax opening", |b| {
        let board = Board::initial_state();
        b.iter(|| minimax(black_box(&board)))
    });
    c.bench_function("minimax middle game", |b| {
        let board: Board = MIDDLE.parse().unwrap();
        b.iter(|| minimax(black_box(&board)))
    });
    c.bench_function("minimax endgame", |b| {
        let board: Board = ENDGAME.parse().unwrap();
        b.iter(|| minimax(black_box(&board)))
    });
}

criterion_group!(benches, perft, search);
criterion_main!(benches);
