use crate::assignment::Assignment;
use crate::clause_store::ClauseStore;
use crate::occurrence_index::OccurrenceIndex;
use crate::trail::Trail;

// Owns a clause store, its occurrence index, the undo trail, and the
// current assignment for a single solve. No sharing across concurrent
// solves: every call to new starts from a fresh value.
pub struct Solver {
    pub store: ClauseStore,
    pub index: OccurrenceIndex,
    pub trail: Trail,
    pub assignment: Assignment,
}

impl Solver {
    pub fn new(clauses: Vec<Vec<i32>>) -> Self {
        let store = ClauseStore::load(clauses);
        let index = OccurrenceIndex::build(&store);
        Solver {
            store,
            index,
            trail: Trail::new(),
            assignment: Assignment::new(),
        }
    }

    pub fn variables(&self) -> Vec<u32> {
        let mut vars: Vec<u32> = self
            .index
            .literals()
            .map(|lit| lit.unsigned_abs())
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }
}
