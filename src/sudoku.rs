use crate::assignment::Assignment;
use crate::error::{Result, SolverError};

pub type Grid = [[u8; 9]; 9];

// Variable id for (row, column, digit), all in 1..=9: the three-digit
// integer 100*row + 10*col + digit.
fn variable(row: u8, col: u8, digit: u8) -> i32 {
    100 * row as i32 + 10 * col as i32 + digit as i32
}

fn decode_variable(var: u32) -> (u8, u8, u8) {
    let row = (var / 100) as u8;
    let col = (var / 10 % 10) as u8;
    let digit = (var % 10) as u8;
    (row, col, digit)
}

/*
True if every variable id fits the 100*row + 10*col + digit scheme (r, c, d
all in 1..=9). This is the heuristic the CLI uses to decide whether a
solved formula's assignment should be rendered as a Sudoku grid.
*/
pub fn looks_like_sudoku(variables: &[u32]) -> bool {
    !variables.is_empty()
        && variables.iter().all(|&var| {
            let (row, col, digit) = decode_variable(var);
            (1..=9).contains(&row) && (1..=9).contains(&col) && (1..=9).contains(&digit)
        })
}

fn block_cells(block_row: u8, block_col: u8) -> Vec<(u8, u8)> {
    let mut cells = Vec::with_capacity(9);
    for dr in 0..3 {
        for dc in 0..3 {
            cells.push((3 * (block_row - 1) + 1 + dr, 3 * (block_col - 1) + 1 + dc));
        }
    }
    cells
}

/*
Clauses expressing: every cell holds at least one digit, no cell holds two
digits, and each digit appears at most once per row, column, and 3x3 block.
Generated in code rather than read from a fixed rules file, since the rule
set is a pure function of the 9x9 grid shape.
*/
pub fn rules() -> Vec<Vec<i32>> {
    let mut clauses = Vec::new();

    for row in 1..=9 {
        for col in 1..=9 {
            clauses.push((1..=9).map(|d| variable(row, col, d)).collect());
            for d1 in 1..=9 {
                for d2 in (d1 + 1)..=9 {
                    clauses.push(vec![-variable(row, col, d1), -variable(row, col, d2)]);
                }
            }
        }
    }

    for digit in 1..=9 {
        for row in 1..=9 {
            for c1 in 1..=9 {
                for c2 in (c1 + 1)..=9 {
                    clauses.push(vec![-variable(row, c1, digit), -variable(row, c2, digit)]);
                }
            }
        }
        for col in 1..=9 {
            for r1 in 1..=9 {
                for r2 in (r1 + 1)..=9 {
                    clauses.push(vec![-variable(r1, col, digit), -variable(r2, col, digit)]);
                }
            }
        }
        for block_row in 1..=3 {
            for block_col in 1..=3 {
                let cells = block_cells(block_row, block_col);
                for i in 0..cells.len() {
                    for j in (i + 1)..cells.len() {
                        let (r1, c1) = cells[i];
                        let (r2, c2) = cells[j];
                        clauses.push(vec![-variable(r1, c1, digit), -variable(r2, c2, digit)]);
                    }
                }
            }
        }
    }

    clauses
}

// Encodes an 81-character one-line puzzle ('.' or '0' for empty, '1'-'9'
// for filled; cell i is row i/9+1, column i%9+1) into a fact clause per
// filled cell plus the full rule set.
pub fn encode(raw: &str) -> Result<Vec<Vec<i32>>> {
    let cells: Vec<char> = raw.trim().chars().collect();
    if cells.len() != 81 {
        return Err(SolverError::MalformedSudoku { found: cells.len() });
    }

    let mut clauses = Vec::new();
    for (i, &ch) in cells.iter().enumerate() {
        if let Some(digit) = ch.to_digit(10).filter(|&d| (1..=9).contains(&d)) {
            let row = (i / 9 + 1) as u8;
            let col = (i % 9 + 1) as u8;
            clauses.push(vec![variable(row, col, digit as u8)]);
        }
    }
    clauses.extend(rules());
    Ok(clauses)
}

pub fn decode(assignment: &Assignment) -> Grid {
    let mut grid = [[0u8; 9]; 9];
    for (var, value) in assignment.iter() {
        if !value {
            continue;
        }
        let (row, col, digit) = decode_variable(var);
        if (1..=9).contains(&row) && (1..=9).contains(&col) && (1..=9).contains(&digit) {
            grid[(row - 1) as usize][(col - 1) as usize] = digit;
        }
    }
    grid
}

pub fn render(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|&cell| if cell == 0 { ".".to_string() } else { cell.to_string() })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Checks that every row, column, and 3x3 block holds each digit 1-9
// exactly once. A grid with any empty cell is never valid.
pub fn verify(grid: &Grid) -> bool {
    let is_permutation_of_1_to_9 = |mut digits: Vec<u8>| {
        digits.sort_unstable();
        digits == (1..=9).collect::<Vec<u8>>()
    };

    for row in grid.iter() {
        if !is_permutation_of_1_to_9(row.to_vec()) {
            return false;
        }
    }

    for col in 0..9 {
        let column: Vec<u8> = (0..9).map(|row| grid[row][col]).collect();
        if !is_permutation_of_1_to_9(column) {
            return false;
        }
    }

    for block_row in 0..3 {
        for block_col in 0..3 {
            let mut block = Vec::with_capacity(9);
            for dr in 0..3 {
                for dc in 0..3 {
                    block.push(grid[block_row * 3 + dr][block_col * 3 + dc]);
                }
            }
            if !is_permutation_of_1_to_9(block) {
                return false;
            }
        }
    }

    true
}

pub fn to_dimacs(raw: &str) -> Result<String> {
    let clauses = encode(raw)?;
    let variable_count = 999;
    let mut out = String::new();
    out.push_str("c Sudoku puzzle encoded as DIMACS CNF.\n");
    out.push_str("c\n");
    out.push_str(&format!("p cnf {} {}\n", variable_count, clauses.len()));
    for clause in &clauses {
        let literals: Vec<String> = clause.iter().map(i32::to_string).collect();
        out.push_str(&literals.join(" "));
        out.push_str(" 0\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "\
534678912\
672195348\
198342567\
859761423\
426853791\
713924856\
961537284\
287419635\
345286179";

    #[test]
    fn rules_cover_every_cell_has_at_least_one_digit() {
        let clauses = rules();
        let has_at_least_one = clauses.iter().any(|c| c == &vec![111, 112, 113, 114, 115, 116, 117, 118, 119]);
        assert!(has_at_least_one);
    }

    #[test]
    fn encode_adds_one_fact_clause_per_filled_cell() {
        let mut raw = ".".repeat(81);
        raw.replace_range(0..1, "5");
        let clauses = encode(&raw).unwrap();
        assert!(clauses.contains(&vec![111 + 4]));
    }

    #[test]
    fn encode_rejects_the_wrong_length() {
        let err = encode("123").unwrap_err();
        assert!(matches!(err, SolverError::MalformedSudoku { found: 3 }));
    }

    #[test]
    fn decode_then_verify_round_trips_a_solved_board() {
        let mut assignment = Assignment::new();
        for (i, ch) in SOLVED.chars().enumerate() {
            let row = (i / 9 + 1) as u8;
            let col = (i % 9 + 1) as u8;
            let digit = ch.to_digit(10).unwrap() as u8;
            assignment.assign(variable(row, col, digit) as u32, true);
        }

        let grid = decode(&assignment);
        assert!(verify(&grid));
    }

    fn solved_grid() -> Grid {
        let mut grid = [[0u8; 9]; 9];
        for (i, ch) in SOLVED.chars().enumerate() {
            grid[i / 9][i % 9] = ch.to_digit(10).unwrap() as u8;
        }
        grid
    }

    #[test]
    fn verify_rejects_a_board_with_a_duplicate() {
        let mut grid = solved_grid();
        assert!(verify(&grid));
        grid[0][1] = grid[0][0];
        assert!(!verify(&grid));
    }

    #[test]
    fn looks_like_sudoku_recognises_the_variable_scheme() {
        assert!(looks_like_sudoku(&[111, 529, 999]));
        assert!(!looks_like_sudoku(&[1, 2, 3]));
    }

    #[test]
    fn render_marks_unassigned_cells_with_a_dot() {
        let grid = [[0u8; 9]; 9];
        let rendered = render(&grid);
        assert_eq!(rendered.lines().next().unwrap(), ".|.|.|.|.|.|.|.|.");
    }
}
