//! Rectangular character grid shared by the chess and hoppers puzzles.
//!
//! Both puzzles are loaded from the same text format: a header line with the
//! number of rows and columns, followed by one line per row holding
//! whitespace-separated single-character cells.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{PuzzleError, Result};

/// The empty cell, shared by every board puzzle
pub const EMPTY: char = '.';

/// Position on the grid (row 0 is the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Position {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// Cell halfway between two positions
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid cells in row-major order. Dimensions belong to each board value, so
/// two loaded puzzles never share geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Board {
    /// Parse a board, accepting only cells for which `valid_cell` holds.
    pub fn parse(text: &str, valid_cell: impl Fn(char) -> bool) -> Result<Self> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (header_line, header) = lines
            .by_ref()
            .find(|(_, l)| !l.trim().is_empty())
            .ok_or_else(|| PuzzleError::parse(1, "missing dimensions header"))?;
        let dims: Vec<&str> = header.split_whitespace().collect();
        let (rows, cols) = match dims.as_slice() {
            [r, c] => (
                parse_dimension(r, header_line)?,
                parse_dimension(c, header_line)?,
            ),
            _ => {
                return Err(PuzzleError::parse(
                    header_line,
                    format!("expected \"rows cols\", found {:?}", header.trim()),
                ))
            }
        };

        if rows.checked_mul(cols).is_none() {
            return Err(PuzzleError::parse(
                header_line,
                format!("board of {} x {} cells is too large", rows, cols),
            ));
        }

        let mut cells = Vec::new();
        let mut rows_read = 0;
        for (line_no, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            if rows_read == rows {
                return Err(PuzzleError::parse(
                    line_no,
                    format!("more than {} rows", rows),
                ));
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != cols {
                return Err(PuzzleError::parse(
                    line_no,
                    format!("expected {} cells, found {}", cols, tokens.len()),
                ));
            }
            for token in tokens {
                let mut chars = token.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(c), None) if valid_cell(c) => c,
                    _ => {
                        return Err(PuzzleError::parse(
                            line_no,
                            format!("invalid cell {:?}", token),
                        ))
                    }
                };
                cells.push(cell);
            }
            rows_read += 1;
        }

        if rows_read != rows {
            return Err(PuzzleError::parse(
                header_line,
                format!("expected {} rows, found {}", rows, rows_read),
            ));
        }

        Ok(Self { rows, cols, cells })
    }

    /// Read and parse a board file.
    pub fn from_file(path: &Path, valid_cell: impl Fn(char) -> bool) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, valid_cell)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get the cell at a position (bounds-checked)
    pub fn get(&self, pos: Position) -> Option<char> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Position::new(r as i32, c as i32)))
    }

    pub fn count(&self, pred: impl Fn(char) -> bool) -> usize {
        self.cells.iter().filter(|&&c| pred(c)).count()
    }

    /// Copy of this board with the cell at `from` moved onto `to` and each
    /// of `cleared` emptied. Positions must be on the board.
    pub fn with_move(&self, from: Position, to: Position, cleared: &[Position]) -> Board {
        let mut next = self.clone();
        if let (Some(f), Some(t)) = (self.index(from), self.index(to)) {
            next.cells[t] = self.cells[f];
            next.cells[f] = EMPTY;
            for &pos in cleared {
                if let Some(i) = self.index(pos) {
                    next.cells[i] = EMPTY;
                }
            }
        }
        next
    }
}

/// Dimensions must fit a `Position` coordinate.
fn parse_dimension(token: &str, line: usize) -> Result<usize> {
    match token.parse::<i32>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(PuzzleError::parse(
            line,
            format!("invalid dimension {:?}", token),
        )),
    }
}

impl fmt::Display for Board {
    /// Framed grid with column numbers on top and row numbers down the side.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..self.cols).map(|c| c.to_string()).collect();
        writeln!(f, "   {}", header.join(" "))?;
        writeln!(f, "  {}", "-".repeat(2 * self.cols))?;
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}| {}", r, cells.join(" "))?;
        }
        Ok(())
    }
}
