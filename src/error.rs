use std::path::PathBuf;

use thiserror::Error;

// Invariant violations inside the solver (a corrupt trail, an unknown edit
// kind) are bugs, not recoverable conditions, and are reported with
// panic!/unreachable! instead of this type.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed DIMACS input: {reason}")]
    MalformedDimacs {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("sudoku puzzle must have exactly 81 cells, got {found}")]
    MalformedSudoku { found: usize },
}

pub type Result<T> = std::result::Result<T, SolverError>;
