use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use cnfsolve::dpll::{self, DpllResult, DpllStats};
use cnfsolve::error::SolverError;
use cnfsolve::heuristic::{Naive, Random};
use cnfsolve::solver::Solver;
use cnfsolve::sudoku;
use cnfsolve::walksat::{self, WalksatParams, WalksatStats};
use cnfsolve::{dimacs, error};

const DEFAULT_SEED: u64 = 0xC0FFEE;

#[derive(Parser, Debug)]
#[command(name = "cnfsolve")]
struct Cli {
    cnf_file: PathBuf,

    // 1 = DPLL (naive split), 2 = DPLL (random split), 3 = WalkSAT. clap
    // rejects anything outside 1..=3 before run() ever sees it.
    #[arg(short = 'S', long = "strategy", value_parser = clap::value_parser!(i32).range(1..=3), default_value_t = 1)]
    strategy: i32,

    // Seed for the PRNG used by the random split and WalkSAT.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(long, default_value_t = 50)]
    max_tries: u32,

    #[arg(long, default_value_t = 10_000)]
    max_flips: u32,

    #[arg(long)]
    json: bool,

    // Write the CNF file as a Sudoku-encoded DIMACS fixture instead of
    // solving. The input is read as an 81-character one-line puzzle, not a
    // CNF file.
    #[arg(long, value_name = "PATH")]
    emit_dimacs: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonReport {
    satisfiable: bool,
    strategy: i32,
    splits: Option<u64>,
    flips: Option<u64>,
    elapsed_seconds: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = cli.emit_dimacs.clone() {
        return match emit_dimacs(&cli.cnf_file, &path) {
            Ok(()) => ExitCode::from(0),
            Err(err) => {
                eprintln!("{err}");
                ExitCode::from(2)
            }
        };
    }

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

fn emit_dimacs(puzzle_path: &PathBuf, out_path: &PathBuf) -> error::Result<()> {
    let raw = std::fs::read_to_string(puzzle_path).map_err(|source| SolverError::Io {
        path: puzzle_path.clone(),
        source,
    })?;
    let dimacs = sudoku::to_dimacs(raw.trim())?;
    std::fs::write(out_path, dimacs).map_err(|source| SolverError::Io {
        path: out_path.clone(),
        source,
    })
}

fn run(cli: &Cli) -> error::Result<u8> {
    let clauses = dimacs::read_file(&cli.cnf_file)?;
    let solver = Solver::new(clauses);
    let variables = solver.variables();
    let started = std::time::Instant::now();

    log::info!("solving {} with strategy {}", cli.cnf_file.display(), cli.strategy);

    let (satisfiable, grid, splits, flips) = match cli.strategy {
        1 => {
            let mut solver = solver;
            let mut heuristic = Naive;
            let mut stats = DpllStats::default();
            let result = dpll::solve(&mut solver, &mut heuristic, &mut stats);
            let sat = result == DpllResult::Sat;
            let grid = sudoku_grid(sat, &variables, &solver);
            (sat, grid, Some(stats.splits), None)
        }
        2 => {
            let mut solver = solver;
            let rng = StdRng::seed_from_u64(cli.seed);
            let mut heuristic = Random::new(rng);
            let mut stats = DpllStats::default();
            let result = dpll::solve(&mut solver, &mut heuristic, &mut stats);
            let sat = result == DpllResult::Sat;
            let grid = sudoku_grid(sat, &variables, &solver);
            (sat, grid, Some(stats.splits), None)
        }
        3 => {
            let mut rng = StdRng::seed_from_u64(cli.seed);
            let params = WalksatParams {
                max_tries: cli.max_tries,
                max_flips: cli.max_flips,
            };
            let mut stats = WalksatStats::default();
            let (result, assignment) = walksat::solve(&solver, params, &mut rng, &mut stats);
            let sat = result == walksat::WalksatResult::Sat;
            let grid = if sat && sudoku::looks_like_sudoku(&variables) {
                Some(sudoku::render(&sudoku::decode(&assignment)))
            } else {
                None
            };
            (sat, grid, None, Some(stats.flips))
        }
        _ => unreachable!("clap's range(1..=3) already rejected anything else"),
    };

    log::info!(
        "result: {} (splits={:?}, flips={:?}, elapsed={:.3}s)",
        if satisfiable { "SAT" } else { "UNSAT" },
        splits,
        flips,
        started.elapsed().as_secs_f64()
    );

    if cli.json {
        let report = JsonReport {
            satisfiable,
            strategy: cli.strategy,
            splits,
            flips,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        };
        println!("{}", serde_json::to_string(&report).expect("JsonReport always serializes"));
    } else {
        println!("{}", if satisfiable { "Satisfied" } else { "Unsatisfied" });
        if let Some(grid) = grid {
            println!("{grid}");
        }
    }

    Ok(if satisfiable { 0 } else { 1 })
}

fn sudoku_grid(satisfiable: bool, variables: &[u32], solver: &Solver) -> Option<String> {
    if satisfiable && sudoku::looks_like_sudoku(variables) {
        Some(sudoku::render(&sudoku::decode(&solver.assignment)))
    } else {
        None
    }
}
