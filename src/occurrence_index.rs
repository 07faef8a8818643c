use multimap::MultiMap;

use crate::clause_store::ClauseStore;
use crate::trail::{Edit, Trail};

/*
Maps each signed literal to the clause ids whose current literal set
contains it. Built once from a clause store and kept incrementally in sync
by detach calls made while assigning literals.

Entries may go stale: when a clause is deleted, only the two literals the
propagator is actively handling are detached from the index. Consumers must
check ClauseStore::is_live when walking an occurrence list.
*/
#[derive(Clone, Debug, Default)]
pub struct OccurrenceIndex {
    table: MultiMap<i32, u32>,
}

impl OccurrenceIndex {
    pub fn build(store: &ClauseStore) -> Self {
        let mut table = MultiMap::new();
        for (id, literals) in store.iter() {
            for &literal in literals {
                table.insert(literal, id);
            }
        }
        OccurrenceIndex { table }
    }

    pub fn occurrences(&self, literal: i32) -> &[u32] {
        self.table
            .get_vec(&literal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn live_occurrence_count(&self, literal: i32, store: &ClauseStore) -> usize {
        self.occurrences(literal)
            .iter()
            .filter(|&&id| store.is_live(id))
            .count()
    }

    // Unspecified order; heuristics that need a deterministic tie-break sort it themselves.
    pub fn literals(&self) -> impl Iterator<Item = i32> + '_ {
        self.table.keys().copied()
    }

    pub fn detach(&mut self, literal: i32, id: u32, trail: &mut Trail) {
        if let Some(ids) = self.table.get_vec_mut(&literal) {
            ids.retain(|&existing| existing != id);
        }
        trail.record(Edit::OccurrenceRemoved { id, literal });
    }

    pub(crate) fn restore(&mut self, literal: i32, id: u32) {
        self.table.insert(literal, id);
    }
}
