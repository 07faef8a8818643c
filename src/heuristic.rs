use rand::Rng;

use crate::clause_store::ClauseStore;
use crate::occurrence_index::OccurrenceIndex;

/*
A branching heuristic picks the next variable to decide on and which phase
(true/false) to try first. Implementations must be pure: they may read the
store and index but never mutate them.

choose returns the signed literal to try first, or None if no variable
remains to branch on.
*/
pub trait Heuristic {
    fn choose(&mut self, store: &ClauseStore, index: &OccurrenceIndex) -> Option<(i32, bool)>;
}

// candidate pool every heuristic below draws from, in ascending order.
fn live_literals(store: &ClauseStore, index: &OccurrenceIndex) -> Vec<i32> {
    let mut literals: Vec<i32> = index
        .literals()
        .filter(|&lit| index.live_occurrence_count(lit, store) > 0)
        .collect();
    literals.sort_unstable();
    literals
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Naive;

impl Heuristic for Naive {
    fn choose(&mut self, store: &ClauseStore, index: &OccurrenceIndex) -> Option<(i32, bool)> {
        live_literals(store, index).into_iter().next().map(|lit| (lit, true))
    }
}

pub struct Random<R: Rng> {
    rng: R,
}

impl<R: Rng> Random<R> {
    pub fn new(rng: R) -> Self {
        Random { rng }
    }
}

impl<R: Rng> Heuristic for Random<R> {
    fn choose(&mut self, store: &ClauseStore, index: &OccurrenceIndex) -> Option<(i32, bool)> {
        let literals = live_literals(store, index);
        if literals.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..literals.len());
        Some((literals[pick], true))
    }
}

/*
Picks the literal with the largest total (live) occurrence count. Phase is
true iff the variable's positive occurrences do not exceed its negative
ones. Ties broken by ascending variable id.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOccurrence;

impl Heuristic for MaxOccurrence {
    fn choose(&mut self, store: &ClauseStore, index: &OccurrenceIndex) -> Option<(i32, bool)> {
        let literals = live_literals(store, index);
        let var = literals
            .iter()
            .map(|&lit| lit.unsigned_abs())
            .max_by_key(|&var| {
                let pos = index.live_occurrence_count(var as i32, store);
                let neg = index.live_occurrence_count(-(var as i32), store);
                // max_by_key keeps the last maximum, so reverse the key to
                // favour the smallest var on a tie.
                (pos + neg, std::cmp::Reverse(var))
            })?;

        let pos = index.live_occurrence_count(var as i32, store);
        let neg = index.live_occurrence_count(-(var as i32), store);
        let phase = pos <= neg;
        Some((var as i32, phase))
    }
}

/*
Jeroslow-Wang: J(l) = sum over live clauses containing l of 2^(-|c|). Picks
the variable maximising J(v) + J(-v), phase true iff J(v) >= J(-v). Ties
broken by ascending variable id.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct JeroslowWang;

impl JeroslowWang {
    fn score(literal: i32, store: &ClauseStore, index: &OccurrenceIndex) -> f64 {
        index
            .occurrences(literal)
            .iter()
            .filter_map(|&id| store.get(id))
            .map(|clause| 2f64.powi(-(clause.len() as i32)))
            .sum()
    }
}

impl Heuristic for JeroslowWang {
    fn choose(&mut self, store: &ClauseStore, index: &OccurrenceIndex) -> Option<(i32, bool)> {
        let literals = live_literals(store, index);
        let mut vars: Vec<u32> = literals.iter().map(|&lit| lit.unsigned_abs()).collect();
        vars.sort_unstable();
        vars.dedup();

        let mut best: Option<(u32, f64, f64, f64)> = None;
        for var in vars {
            let pos = Self::score(var as i32, store, index);
            let neg = Self::score(-(var as i32), store, index);
            let total = pos + neg;
            match &best {
                Some((_, _, _, best_total)) if *best_total >= total => {}
                _ => best = Some((var, pos, neg, total)),
            }
        }

        best.map(|(var, pos, neg, _)| (var as i32, pos >= neg))
    }
}
