use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{select_move, Board, Mark, Phase, TicTacToeGameState};

fn bench_select_move_empty_board(rng: &mut SessionRng) {
    let board = Board::new();
    black_box(select_move(black_box(&board), rng));
}

fn bench_select_move_random_fallback(rng: &mut SessionRng) {
    let board = Board::from_cells([
        Mark::X, Mark::Empty, Mark::Empty,
        Mark::Empty, Mark::O, Mark::Empty,
        Mark::Empty, Mark::Empty, Mark::X,
    ]);
    black_box(select_move(black_box(&board), rng));
}

fn bench_full_game(human_rng: &mut SessionRng, bot_rng: &mut SessionRng) {
    let mut state = TicTacToeGameState::new();
    while !state.status().is_over() {
        let free = common::games::tictactoe::get_available_moves(state.board());
        let pick = free[human_rng.random_range(0..free.len())];
        if let Ok(Phase::OpponentThinking) = state.place_human_mark(pick) {
            if state.apply_opponent_move(bot_rng).is_err() {
                break;
            }
        }
    }
    black_box(state.status());
}

fn bot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot");

    let mut rng = SessionRng::new(1);
    group.bench_function("select_move_empty", |b| {
        b.iter(|| bench_select_move_empty_board(&mut rng))
    });

    group.bench_function("select_move_random_fallback", |b| {
        b.iter(|| bench_select_move_random_fallback(&mut rng))
    });

    let mut human_rng = SessionRng::new(2);
    let mut bot_rng = SessionRng::new(3);
    group.bench_function("full_game", |b| {
        b.iter(|| bench_full_game(&mut human_rng, &mut bot_rng))
    });

    group.finish();
}

criterion_group!(benches, bot_bench);
criterion_main!(benches);
