//! Criterion benches for the A* solver on seeded scrambles of the 8- and
//! 15-puzzle. Scrambles are random walks from the goal so the depth stays
//! bounded and runs are comparable between commits.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use npuzzle::{Board, Move, Solver};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn scramble(size: usize, steps: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::goal(size).unwrap();
    let mut last: Option<Move> = None;
    for _ in 0..steps {
        let options: Vec<Move> = Move::ALL
            .into_iter()
            .filter(|m| Some(m.opposite()) != last && board.slide(*m).is_some())
            .collect();
        let movement = *options.choose(&mut rng).unwrap();
        board = board.slide(movement).unwrap();
        last = Some(movement);
    }
    board
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &(size, steps) in &[(3usize, 20usize), (4, 24)] {
        let board = scramble(size, steps, 42);
        group.bench_function(format!("{size}x{size}_walk_{steps}"), |b| {
            b.iter(|| Solver::new(black_box(&board)).unwrap().moves())
        });
    }

    let unsolvable = scramble(3, 12, 7).twin();
    group.bench_function("3x3_unsolvable", |b| {
        b.iter(|| Solver::new(black_box(&unsolvable)).unwrap().is_solvable())
    });
    group.finish();
}

fn bench_heuristics(c: &mut Criterion) {
    let boards: Vec<Board> = (0..256).map(|seed| scramble(4, 40, seed)).collect();
    c.bench_function("manhattan_fresh_4x4", |b| {
        b.iter_batched(
            || boards.clone(),
            |boards| boards.iter().map(|board| board.manhattan()).sum::<u32>(),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("neighbors_4x4", |b| {
        b.iter(|| boards.iter().map(|board| board.neighbors().count()).sum::<usize>())
    });
}

criterion_group!(benches, bench_solve, bench_heuristics);
criterion_main!(benches);
