use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SolverError};

/*
Parses a DIMACS CNF file into its clause list. c-lines are comments; an
optional "p cnf <vars> <clauses>" header is advisory and not otherwise
validated. Clauses are whitespace-separated nonzero signed integers
terminated by 0; a clause may span multiple lines and multiple clauses may
share one line.
*/
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i32>>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| SolverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(BufReader::new(file), path)
}

fn parse<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Vec<i32>>> {
    let mut clauses = Vec::new();
    let mut current = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SolverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut tokens = line.split_whitespace().peekable();

        match tokens.peek() {
            None => continue,
            Some(&"c") => continue,
            Some(&"p") => continue,
            _ => {}
        }

        for token in tokens {
            let value: i32 = token.parse().map_err(|_| SolverError::MalformedDimacs {
                path: path.to_path_buf(),
                line: line_no + 1,
                reason: format!("expected an integer, found '{token}'"),
            })?;

            if value == 0 {
                clauses.push(std::mem::take(&mut current));
            } else {
                current.push(value);
            }
        }
    }

    if !current.is_empty() {
        return Err(SolverError::MalformedDimacs {
            path: path.to_path_buf(),
            line: 0,
            reason: "clause not terminated by 0 before end of file".to_string(),
        });
    }

    Ok(clauses)
}
