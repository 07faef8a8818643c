use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cnfsolve::dpll::{self, DpllStats};
use cnfsolve::heuristic::Naive;
use cnfsolve::solver::Solver;
use cnfsolve::sudoku;
use cnfsolve::walksat::{self, WalksatParams, WalksatStats};

// A random 3-CNF instance over `variables` variables and `clauses` clauses,
// at roughly the 4.2 clause/variable ratio known to produce hard instances
// for both DPLL and WalkSAT.
fn random_3cnf(variables: u32, clauses: u32, rng: &mut impl Rng) -> Vec<Vec<i32>> {
    (0..clauses)
        .map(|_| {
            (0..3)
                .map(|_| {
                    let var = rng.gen_range(1..=variables) as i32;
                    if rng.gen_bool(0.5) {
                        var
                    } else {
                        -var
                    }
                })
                .collect()
        })
        .collect()
}

fn dpll_random_3cnf(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let clauses = random_3cnf(75, 320, &mut rng);

    c.bench_function("dpll_naive_random_3cnf_75v", |b| {
        b.iter(|| {
            let mut solver = Solver::new(clauses.clone());
            let mut heuristic = Naive;
            let mut stats = DpllStats::default();
            black_box(dpll::solve(&mut solver, &mut heuristic, &mut stats));
        });
    });
}

fn walksat_random_3cnf(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let clauses = random_3cnf(50, 210, &mut rng);
    let solver = Solver::new(clauses);

    c.bench_function("walksat_random_3cnf_50v", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            let mut stats = WalksatStats::default();
            black_box(walksat::solve(
                &solver,
                WalksatParams {
                    max_tries: 10,
                    max_flips: 2_000,
                },
                &mut rng,
                &mut stats,
            ));
        });
    });
}

const BUNDLED_PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn dpll_sudoku(c: &mut Criterion) {
    let clauses = sudoku::encode(BUNDLED_PUZZLE).expect("bundled puzzle is well-formed");

    c.bench_function("dpll_naive_bundled_sudoku", |b| {
        b.iter(|| {
            let mut solver = Solver::new(clauses.clone());
            let mut heuristic = Naive;
            let mut stats = DpllStats::default();
            black_box(dpll::solve(&mut solver, &mut heuristic, &mut stats));
        });
    });
}

criterion_group!(benches, dpll_random_3cnf, walksat_random_3cnf, dpll_sudoku);
criterion_main!(benches);
