criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scoring_subtract_minimax,
        scoring_subtract_memoize,
        scoring_subtract_prune,
        suggesting_tictactoe_prune,
        suggesting_tictactoe_memoize,
        suggesting_tippy_myopic,
}

fn scoring_subtract_minimax(c: &mut criterion::Criterion) {
    let game = SubtractSquare::new(Player::P1, 30);
    c.bench_function("score Subtract-a-Square 30 (minimax)", |b| {
        b.iter(|| Minimax::create(SearchParams::default()).score(&game))
    });
}

fn scoring_subtract_memoize(c: &mut criterion::Criterion) {
    let game = SubtractSquare::new(Player::P1, 30);
    c.bench_function("score Subtract-a-Square 30 (memoize)", |b| {
        b.iter(|| Memoize::<SubtractSquare>::create(SearchParams::default()).score(&game))
    });
}

fn scoring_subtract_prune(c: &mut criterion::Criterion) {
    let game = SubtractSquare::new(Player::P1, 30);
    c.bench_function("score Subtract-a-Square 30 (prune)", |b| {
        b.iter(|| Prune::create(SearchParams::default()).score(&game))
    });
}

fn suggesting_tictactoe_prune(c: &mut criterion::Criterion) {
    let game = TicTacToe::new(Player::P1);
    c.bench_function("suggest opening Tic-Tac-Toe move (prune)", |b| {
        b.iter(|| Prune::create(SearchParams::default()).suggest_move(&game))
    });
}

fn suggesting_tictactoe_memoize(c: &mut criterion::Criterion) {
    let game = TicTacToe::new(Player::P1);
    c.bench_function("suggest opening Tic-Tac-Toe move (memoize)", |b| {
        b.iter(|| Memoize::<TicTacToe>::create(SearchParams::default()).suggest_move(&game))
    });
}

fn suggesting_tippy_myopic(c: &mut criterion::Criterion) {
    let game = Tippy::new(Player::P1, 4);
    c.bench_function("suggest opening 4x4 Tippy move (myopic, 2 plies)", |b| {
        b.iter(|| {
            Myopic::create(MyopicParams {
                limit: 2,
                seed: Some(0),
            })
            .suggest_move(&game)
        })
    });
}

use minimax::game::subtract::SubtractSquare;
use minimax::game::tictactoe::TicTacToe;
use minimax::game::tippy::Tippy;
use minimax::game::Player;
use minimax::strategies::{Memoize, Minimax, Myopic, MyopicParams, Prune, Scorer, SearchParams, Strategy};
