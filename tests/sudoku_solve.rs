use cnfsolve::dpll::{self, DpllResult, DpllStats};
use cnfsolve::heuristic::Naive;
use cnfsolve::solver::Solver;
use cnfsolve::sudoku;

// A published puzzle with a unique solution (Wikipedia's canonical example).
const PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

#[test]
fn scenario_6_valid_sudoku_solves_and_verifies() {
    let clauses = sudoku::encode(PUZZLE).expect("puzzle has 81 cells");

    let mut solver = Solver::new(clauses);
    let mut heuristic = Naive;
    let mut stats = DpllStats::default();
    let result = dpll::solve(&mut solver, &mut heuristic, &mut stats);

    assert_eq!(result, DpllResult::Sat);

    let grid = sudoku::decode(&solver.assignment);
    assert!(sudoku::verify(&grid), "decoded grid must be a valid Sudoku solution");

    // The given clues must survive into the solved grid.
    for (i, ch) in PUZZLE.chars().enumerate() {
        if let Some(digit) = ch.to_digit(10) {
            let row = i / 9;
            let col = i % 9;
            assert_eq!(grid[row][col] as u32, digit);
        }
    }
}

#[test]
fn emitted_dimacs_round_trips_through_the_reader() {
    let dimacs_text = sudoku::to_dimacs(PUZZLE).expect("puzzle has 81 cells");
    let clauses = cnfsolve::dimacs::read_file({
        let path = std::env::temp_dir().join("cnfsolve_test_fixture.cnf");
        std::fs::write(&path, &dimacs_text).unwrap();
        path
    })
    .unwrap();

    let mut solver = Solver::new(clauses);
    let mut heuristic = Naive;
    let mut stats = DpllStats::default();
    let result = dpll::solve(&mut solver, &mut heuristic, &mut stats);

    assert_eq!(result, DpllResult::Sat);
    assert!(sudoku::verify(&sudoku::decode(&solver.assignment)));
}
