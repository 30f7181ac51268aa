//! Benchmarks for knight's tour search.
//!
//! # Benchmarks
//!
//! - **`solve`**: full search from a corner on boards that Warnsdorff's rule
//!   solves without backtracking.
//! - **`exhaust_4x4`**: a board with no knight's tour, so the search must
//!   backtrack through its whole ordered tree.
//! - **`rank_candidates`**: cost of ranking a single cell.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use knight_tour_core::{Cell, MoveProfile};
use knight_tour_solver::{Board, TourSolver, ranker};

fn bench_solve(c: &mut Criterion) {
    let solver = TourSolver::knight();

    for size in [5_usize, 8, 16, 32] {
        c.bench_with_input(BenchmarkId::new("solve", size), &size, |b, &size| {
            b.iter(|| {
                let search = solver.solve(size, Cell::new(0, 0)).unwrap();
                hint::black_box(search)
            });
        });
    }
}

fn bench_exhaust(c: &mut Criterion) {
    let solver = TourSolver::knight();

    c.bench_function("exhaust_4x4", |b| {
        b.iter(|| {
            let search = solver.solve(4, hint::black_box(Cell::new(0, 0))).unwrap();
            hint::black_box(search)
        });
    });
}

fn bench_rank_candidates(c: &mut Criterion) {
    let board = Board::new(8);
    let profile = MoveProfile::knight();

    for (param, cell) in [("corner", Cell::new(0, 0)), ("center", Cell::new(3, 3))] {
        c.bench_with_input(
            BenchmarkId::new("rank_candidates", param),
            &cell,
            |b, &cell| {
                b.iter(|| {
                    let candidates = ranker::rank_candidates(&board, &profile, cell);
                    hint::black_box(candidates)
                });
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_exhaust, bench_rank_candidates);
criterion_main!(benches);
