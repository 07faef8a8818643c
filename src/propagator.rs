use crate::assignment::Assignment;
use crate::clause_store::ClauseStore;
use crate::occurrence_index::OccurrenceIndex;
use crate::trail::{Edit, Trail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagateResult {
    Sat,
    Conflict,
    Undecided,
}

/*
Simplifies the residual formula after literal has been assigned. The caller
must already have recorded AssignmentAdded(var(literal)) and set
assignment[var(literal)] before calling this. For every clause containing
literal or -literal (snapshotted before mutation), the clause is either
deleted (it is satisfied) or shrunk (the false literal is removed), and the
occurrence entry is detached either way.
*/
pub fn assign_literal(
    store: &mut ClauseStore,
    index: &mut OccurrenceIndex,
    trail: &mut Trail,
    assignment: &Assignment,
    literal: i32,
) {
    let value = assignment.value_of_literal(literal);

    // clauses containing -literal: satisfied when literal is false.
    let negated = index.occurrences(-literal).to_vec();
    for id in negated {
        index.detach(-literal, id, trail);
        if !store.is_live(id) {
            continue;
        }
        if !value {
            store.delete_clause(id, trail);
        } else {
            store.delete_literal(id, -literal, trail);
        }
    }

    // clauses containing literal itself: satisfied when literal is true.
    let positive = index.occurrences(literal).to_vec();
    for id in positive {
        index.detach(literal, id, trail);
        if !store.is_live(id) {
            continue;
        }
        if value {
            store.delete_clause(id, trail);
        } else {
            store.delete_literal(id, literal, trail);
        }
    }
}

/*
Runs unit propagation to a fixed point on the current trail frame,
repeatedly assigning the literal of any unit clause (lowest clause id
first) until the formula is satisfied, a conflict is found, or no unit
clauses remain.
*/
pub fn propagate(
    store: &mut ClauseStore,
    index: &mut OccurrenceIndex,
    trail: &mut Trail,
    assignment: &mut Assignment,
) -> PropagateResult {
    loop {
        if store.is_empty() {
            return PropagateResult::Sat;
        }
        if store.first_empty().is_some() {
            return PropagateResult::Conflict;
        }

        match store.first_unit() {
            None => return PropagateResult::Undecided,
            Some((_, literal)) => {
                let var = literal.unsigned_abs();
                assignment.assign(var, literal > 0);
                trail.record(Edit::AssignmentAdded { var });
                assign_literal(store, index, trail, assignment, literal);
            }
        }
    }
}
