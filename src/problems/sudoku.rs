//! Sudoku as a binary CSP: 81 cell variables, digit domains, and pairwise
//! must-differ edges for every row, column and 3x3 box.

use std::collections::HashMap;
use std::fmt;

use im::HashSet;

use crate::{
    error::Result,
    solver::{
        constraint::all_different_edges,
        csp::{Assignment, Csp, Domains},
    },
};

pub const GRID_WIDTH: u8 = 9;
pub const BOX_WIDTH: u8 = 3;

/// One cell of the grid, identified by 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}{}", self.row, self.col)
    }
}

/// A 9x9 grid of digits; `0` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid(pub [[u8; 9]; 9]);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected 9 rows of 9 digits, found {0} rows")]
    WrongRowCount(usize),
    #[error("row {0} has {1} cells, expected 9")]
    WrongRowWidth(usize, usize),
    #[error("cell at row {0}, column {1} is not a digit")]
    NotADigit(usize, usize),
}

/// Parses the puzzle text format: nine whitespace-separated rows of nine
/// digits each, `0` for an empty cell.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let rows: Vec<&str> = text.split_whitespace().collect();
    if rows.len() != GRID_WIDTH as usize {
        return Err(GridError::WrongRowCount(rows.len()));
    }

    let mut grid = [[0u8; 9]; 9];
    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().collect();
        if cells.len() != GRID_WIDTH as usize {
            return Err(GridError::WrongRowWidth(r + 1, cells.len()));
        }
        for (c, ch) in cells.iter().enumerate() {
            let digit = ch.to_digit(10).ok_or(GridError::NotADigit(r + 1, c + 1))?;
            grid[r][c] = digit as u8;
        }
    }
    Ok(Grid(grid))
}

/// Builds the CSP for a grid: a pre-filled cell gets a singleton domain, an
/// empty one gets `1..=9`, and every row, column and box group contributes
/// its pairwise must-differ edges.
pub fn build_csp(grid: &Grid) -> Result<Csp<Cell, u8>> {
    let mut variables = Vec::new();
    let mut domains: Domains<Cell, u8> = HashMap::new();
    for row in 1..=GRID_WIDTH {
        for col in 1..=GRID_WIDTH {
            let cell = Cell { row, col };
            let given = grid.0[row as usize - 1][col as usize - 1];
            let domain: HashSet<u8> = if given == 0 {
                (1..=GRID_WIDTH).collect()
            } else {
                HashSet::unit(given)
            };
            variables.push(cell);
            domains.insert(cell, domain);
        }
    }

    let mut edges = Vec::new();
    for row in 1..=GRID_WIDTH {
        let group: Vec<Cell> = (1..=GRID_WIDTH).map(|col| Cell { row, col }).collect();
        edges.extend(all_different_edges(&group));
    }
    for col in 1..=GRID_WIDTH {
        let group: Vec<Cell> = (1..=GRID_WIDTH).map(|row| Cell { row, col }).collect();
        edges.extend(all_different_edges(&group));
    }
    for box_row in 0..BOX_WIDTH {
        for box_col in 0..BOX_WIDTH {
            let mut group = Vec::new();
            for r in 0..BOX_WIDTH {
                for c in 0..BOX_WIDTH {
                    group.push(Cell {
                        row: box_row * BOX_WIDTH + r + 1,
                        col: box_col * BOX_WIDTH + c + 1,
                    });
                }
            }
            edges.extend(all_different_edges(&group));
        }
    }

    Csp::new(variables, domains, edges)
}

/// Formats a complete assignment as a grid with box separators.
pub fn render_solution(solution: &Assignment<Cell, u8>) -> String {
    let mut out = String::new();
    for row in 1..=GRID_WIDTH {
        for col in 1..=GRID_WIDTH {
            out.push_str(&solution[&Cell { row, col }].to_string());
            out.push(' ');
            if col == 3 || col == 6 {
                out.push_str("| ");
            }
        }
        out.push('\n');
        if row == 3 || row == 6 {
            out.push_str("------+-------+------\n");
        }
    }
    out
}

/// Formats the per-cell domains in row-major order, one grid row per line.
pub fn render_domains(domains: &Domains<Cell, u8>) -> String {
    let mut lines = Vec::new();
    for row in 1..=GRID_WIDTH {
        let mut row_cells = Vec::new();
        for col in 1..=GRID_WIDTH {
            let cell = Cell { row, col };
            let mut values: Vec<u8> = domains[&cell].iter().copied().collect();
            values.sort_unstable();
            let rendered: Vec<String> = values.iter().map(u8::to_string).collect();
            row_cells.push(format!("{cell}:{{{}}}", rendered.join(",")));
        }
        lines.push(row_cells.join(" "));
    }
    lines.join("\n")
}
