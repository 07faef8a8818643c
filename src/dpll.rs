use crate::heuristic::Heuristic;
use crate::propagator::{propagate, PropagateResult};
use crate::solver::Solver;
use crate::trail::Edit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DpllResult {
    Sat,
    Unsat,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DpllStats {
    pub splits: u64,
}

// Root is the level at which the initial (pre-decision) propagation runs;
// every other level corresponds to one heuristic-chosen split.
enum Level {
    Root,
    Decision {
        var: u32,
        first_phase: bool,
        tried_second: bool,
    },
}

/*
Runs DPLL to completion on solver using heuristic to pick splits.

This is the recursive state machine of the distilled algorithm (propagate,
decide, recurse, backtrack-and-flip) rewritten over an explicit stack of
decision levels instead of native recursion, so a pathological formula
cannot exhaust the call stack. levels.len() always equals
solver.trail.depth(): every level owns exactly one trail frame, pushed when
the level is entered and undone when it is abandoned.
*/
pub fn solve(solver: &mut Solver, heuristic: &mut dyn Heuristic, stats: &mut DpllStats) -> DpllResult {
    solver.trail.push_frame();
    let mut levels = vec![Level::Root];

    loop {
        match propagate(&mut solver.store, &mut solver.index, &mut solver.trail, &mut solver.assignment) {
            PropagateResult::Sat => {
                log::trace!("dpll: sat at depth {}", levels.len());
                return DpllResult::Sat;
            }
            PropagateResult::Undecided => {
                let (lit, phase) = heuristic
                    .choose(&solver.store, &solver.index)
                    .expect("propagate left live clauses but the heuristic found no variable to split on");
                let var = lit.unsigned_abs();
                log::trace!("dpll: decide var {} = {}", var, phase);
                decide(solver, var, phase);
                levels.push(Level::Decision {
                    var,
                    first_phase: phase,
                    tried_second: false,
                });
            }
            PropagateResult::Conflict => loop {
                solver.trail.undo_top(&mut solver.store, &mut solver.index, &mut solver.assignment);
                match levels.pop() {
                    None => unreachable!("the root level is never abandoned without returning"),
                    Some(Level::Root) => {
                        log::trace!("dpll: unsat");
                        return DpllResult::Unsat;
                    }
                    Some(Level::Decision { var, first_phase, tried_second: false }) => {
                        stats.splits += 1;
                        log::trace!("dpll: backtrack var {}, trying {}", var, !first_phase);
                        decide(solver, var, !first_phase);
                        levels.push(Level::Decision {
                            var,
                            first_phase,
                            tried_second: true,
                        });
                        break;
                    }
                    Some(Level::Decision { tried_second: true, .. }) => continue,
                }
            },
        }
    }
}

fn decide(solver: &mut Solver, var: u32, phase: bool) {
    solver.trail.push_frame();
    solver.assignment.assign(var, phase);
    solver.trail.record(Edit::AssignmentAdded { var });
    let literal = if phase { var as i32 } else { -(var as i32) };
    crate::propagator::assign_literal(
        &mut solver.store,
        &mut solver.index,
        &mut solver.trail,
        &solver.assignment,
        literal,
    );
}
