use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use shobu::board::Board;
use shobu::searcher::alpha_beta::SearchContext;
use shobu::searcher::TimeControl;
use shobu::shobu_position;
use shobu::shobu_search::search_best_move;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Alpha-Beta");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("win in one", |b| b.iter(find_win_in_one));
    group.bench_function("opening depth 2 sequential", |b| {
        b.iter(|| search_opening(2, false))
    });
    group.bench_function("opening depth 2 parallel", |b| {
        b.iter(|| search_opening(2, true))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn find_win_in_one() {
    let board = shobu_position! {
        wwww wwww
        .... ....
        .... ....
        bbbb bbbb
        wwww w...
        .... b...
        .... ....
        bbbb ....
    };
    let mut context = SearchContext::new(3);
    let outcome = search_best_move(&mut context, &board, &TimeControl::unlimited()).unwrap();
    assert_eq!(outcome.best_move.to_string(), "0a1 1a3 n1");
}

fn search_opening(depth: u8, parallel: bool) {
    let board = Board::starting_position();
    let mut context = SearchContext::with_parallel(depth, parallel);
    search_best_move(&mut context, &board, &TimeControl::unlimited()).unwrap();
}
