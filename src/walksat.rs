use rand::Rng;

use crate::assignment::Assignment;
use crate::clause_store::ClauseStore;
use crate::occurrence_index::OccurrenceIndex;
use crate::solver::Solver;

// Unlike DPLL, an exhausted budget is never reported as UNSAT: it is a
// genuine "not found", since the search is incomplete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalksatResult {
    Sat,
    NotFound,
}

#[derive(Clone, Copy, Debug)]
pub struct WalksatParams {
    pub max_tries: u32,
    pub max_flips: u32,
}

impl Default for WalksatParams {
    fn default() -> Self {
        WalksatParams {
            max_tries: 50,
            max_flips: 10_000,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WalksatStats {
    pub tries: u64,
    pub flips: u64,
}

fn delta_sat(literal: i32, store: &ClauseStore, index: &OccurrenceIndex, assignment: &Assignment) -> i64 {
    let mut delta = 0i64;
    for &id in index.occurrences(literal) {
        if !store.is_live(id) {
            continue;
        }
        let clause = store.get(id).expect("live id must have a clause");
        let true_count = clause.iter().filter(|&&l| assignment.value_of_literal(l)).count();
        if true_count == 0 {
            delta += 1;
        } else if true_count == 1 && assignment.value_of_literal(literal) {
            delta -= 1;
        }
    }
    delta
}

fn flip_score(var: u32, store: &ClauseStore, index: &OccurrenceIndex, assignment: &Assignment) -> i64 {
    delta_sat(var as i32, store, index, assignment) + delta_sat(-(var as i32), store, index, assignment)
}

fn flip(assignment: &mut Assignment, var: u32) {
    let current = assignment.value_of(var).unwrap_or(false);
    assignment.assign(var, !current);
}

fn is_satisfied(clause: &[i32], assignment: &Assignment) -> bool {
    clause.iter().any(|&lit| assignment.value_of_literal(lit))
}

fn unsatisfied_clauses(store: &ClauseStore, assignment: &Assignment) -> Vec<u32> {
    store
        .live_ids()
        .filter(|&id| !is_satisfied(store.get(id).unwrap(), assignment))
        .collect()
}

/*
Seeds (or soft-resets) a full assignment over every variable in the formula.
A fresh seed biases each variable 10% true / 90% false; a soft reset keeps
each existing value with probability soft and otherwise resamples, matching
the reference solver's _guess_assignment.
*/
fn guess_assignment(variables: &[u32], assignment: &mut Assignment, soft: Option<f64>, rng: &mut impl Rng) {
    for &var in variables {
        if let Some(soft) = soft {
            if assignment.is_assigned(var) && rng.gen_range(0.0..1.0) < soft {
                continue;
            }
        }
        assignment.assign(var, rng.gen_range(0.0..1.0) < 0.1);
    }
}

// Picks the variable with the best flip score among candidates, breaking
// ties uniformly at random, matching _flip_best_literal and _random_walk.
fn best_scoring(
    candidates: &[u32],
    store: &ClauseStore,
    index: &OccurrenceIndex,
    assignment: &Assignment,
    rng: &mut impl Rng,
) -> u32 {
    let mut best_score = i64::MIN;
    let mut ties = Vec::new();
    for &var in candidates {
        let score = flip_score(var, store, index, assignment);
        if score > best_score {
            best_score = score;
            ties.clear();
            ties.push(var);
        } else if score == best_score {
            ties.push(var);
        }
    }
    ties[rng.gen_range(0..ties.len())]
}

/*
Runs WalkSAT over the formula in solver.store. Never mutates the store or
occurrence index, only the fresh per-try Assignment it builds and returns
on success.
*/
pub fn solve(
    solver: &Solver,
    params: WalksatParams,
    rng: &mut impl Rng,
    stats: &mut WalksatStats,
) -> (WalksatResult, Assignment) {
    let variables = solver.variables();
    let mut assignment = Assignment::new();

    for _try in 0..params.max_tries {
        stats.tries += 1;
        guess_assignment(&variables, &mut assignment, Some(0.7), rng);

        for flip_index in 0..params.max_flips {
            stats.flips += 1;
            let unsat = unsatisfied_clauses(&solver.store, &assignment);
            if unsat.is_empty() {
                return (WalksatResult::Sat, assignment);
            }

            let progress = flip_index as f64 / params.max_flips as f64;
            let p_walk = progress * 0.7 + (1.0 - progress) * 0.9;
            let p_best = progress * 0.9 + (1.0 - progress) * 0.95;
            let u: f64 = rng.gen_range(0.0..1.0);

            let var = if u <= p_walk {
                let clause_id = unsat[rng.gen_range(0..unsat.len())];
                let mut vars: Vec<u32> = solver
                    .store
                    .get(clause_id)
                    .unwrap()
                    .iter()
                    .map(|&lit| lit.unsigned_abs())
                    .collect();
                vars.sort_unstable();
                vars.dedup();
                best_scoring(&vars, &solver.store, &solver.index, &assignment, rng)
            } else if u <= p_best {
                best_scoring(&variables, &solver.store, &solver.index, &assignment, rng)
            } else {
                variables[rng.gen_range(0..variables.len())]
            };

            flip(&mut assignment, var);
        }
    }

    (WalksatResult::NotFound, assignment)
}
