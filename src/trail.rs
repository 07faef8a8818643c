use crate::assignment::Assignment;
use crate::clause_store::ClauseStore;
use crate::occurrence_index::OccurrenceIndex;

// A single reversible edit made to the clause store, occurrence index, or
// assignment during propagation or a decision.
#[derive(Clone, Debug)]
pub enum Edit {
    ClauseRemoved { id: u32, literals: Vec<i32> },
    LiteralRemoved { id: u32, literal: i32 },
    AssignmentAdded { var: u32 },
    OccurrenceRemoved { id: u32, literal: i32 },
}

pub type TrailFrame = Vec<Edit>;

/*
Stack of stacks of reversible edits. Each decision pushes a new frame;
propagation appends to the current top frame.
*/
#[derive(Default)]
pub struct Trail {
    frames: Vec<TrailFrame>,
}

impl Trail {
    pub fn new() -> Self {
        Trail { frames: Vec::new() }
    }

    #[cfg(test)]
    pub fn new_with_open_frame() -> Self {
        let mut trail = Self::new();
        trail.push_frame();
        trail
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Vec::new());
    }

    pub fn record(&mut self, edit: Edit) {
        self.frames
            .last_mut()
            .expect("record called with no open trail frame")
            .push(edit);
    }

    /*
    Pops the top frame and undoes its edits in reverse (LIFO) order,
    restoring the store, index, and assignment to the state they were in
    when the frame was pushed.
    */
    pub fn undo_top(
        &mut self,
        store: &mut ClauseStore,
        index: &mut OccurrenceIndex,
        assignment: &mut Assignment,
    ) {
        let frame = self
            .frames
            .pop()
            .expect("undo_top called with no open trail frame");

        for edit in frame.into_iter().rev() {
            match edit {
                Edit::ClauseRemoved { id, literals } => store.restore_clause(id, literals),
                Edit::LiteralRemoved { id, literal } => store.restore_literal(id, literal),
                Edit::AssignmentAdded { var } => assignment.unassign(var),
                Edit::OccurrenceRemoved { id, literal } => index.restore(literal, id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_restores_clause_then_literal_in_lifo_order() {
        let mut store = ClauseStore::load(vec![vec![1, 2, 3]]);
        let mut index = OccurrenceIndex::build(&store);
        let mut assignment = Assignment::new();
        let mut trail = Trail::new();

        trail.push_frame();
        store.delete_literal(0, 2, &mut trail);
        store.delete_clause(0, &mut trail);

        assert!(store.get(0).is_none());

        trail.undo_top(&mut store, &mut index, &mut assignment);

        assert_eq!(store.get(0), Some(&vec![1, 2, 3][..]));
    }

    #[test]
    fn undo_assignment_removes_the_variable() {
        let mut store = ClauseStore::load(vec![vec![1]]);
        let mut index = OccurrenceIndex::build(&store);
        let mut assignment = Assignment::new();
        let mut trail = Trail::new();

        trail.push_frame();
        assignment.assign(1, true);
        trail.record(Edit::AssignmentAdded { var: 1 });

        trail.undo_top(&mut store, &mut index, &mut assignment);

        assert_eq!(assignment.value_of(1), None);
    }
}
