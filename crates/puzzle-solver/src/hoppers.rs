//! Hoppers: frogs jump over green frogs, removing them, until only red
//! frogs remain.
//!
//! Jumps always land on an empty cell two "hops" away:
//!
//! - diagonally, over the adjacent diagonal cell, from any cell;
//! - orthogonally, four cells away over the cell two away, only from cells
//!   on even rows (odd rows are offset and have no orthogonal neighbours).

use std::fmt;
use std::path::Path;

use smallvec::SmallVec;

use crate::board::{Board, Position, EMPTY};
use crate::error::Result;
use crate::model::BoardPuzzle;
use crate::solver::Configuration;

pub const GREEN: char = 'G';
pub const RED: char = 'R';
/// A cell frogs can never occupy
pub const BLOCKED: char = '*';

/// Landing offsets: N, S, W, E
const ORTHOGONAL: [(i32, i32); 4] = [(-4, 0), (4, 0), (0, -4), (0, 4)];
/// Landing offsets: NW, NE, SW, SE
const DIAGONAL: [(i32, i32); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

fn is_frog(c: char) -> bool {
    c == GREEN || c == RED
}

fn is_cell(c: char) -> bool {
    c == EMPTY || c == BLOCKED || is_frog(c)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoppersConfig {
    board: Board,
}

impl HoppersConfig {
    /// Parse a board; cells must be one of `* . G R`.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self {
            board: Board::parse(text, is_cell)?,
        })
    }

    pub fn green_frogs(&self) -> usize {
        self.board.count(|c| c == GREEN)
    }

    /// Landing cells for the frog at `from`, in generation order
    pub fn jumps(&self, from: Position) -> SmallVec<[Position; 8]> {
        let mut landings = SmallVec::new();
        if !self.board.get(from).map_or(false, is_frog) {
            return landings;
        }

        let orthogonal: &[(i32, i32)] = if from.row % 2 == 0 {
            &ORTHOGONAL
        } else {
            &[]
        };
        for &(d_row, d_col) in orthogonal.iter().chain(DIAGONAL.iter()) {
            let to = from.offset(d_row, d_col);
            if self.board.get(to) == Some(EMPTY)
                && self.board.get(from.midpoint(to)) == Some(GREEN)
            {
                landings.push(to);
            }
        }
        landings
    }

    fn jump(&self, from: Position, to: Position) -> Self {
        Self {
            board: self.board.with_move(from, to, &[from.midpoint(to)]),
        }
    }
}

impl Configuration for HoppersConfig {
    fn is_solution(&self) -> bool {
        self.green_frogs() == 0
    }

    fn successors(&self) -> Vec<Self> {
        let mut successors = Vec::new();
        for from in self.board.positions() {
            for to in self.jumps(from) {
                successors.push(self.jump(from, to));
            }
        }
        successors
    }
}

impl BoardPuzzle for HoppersConfig {
    const PIECE: &'static str = "frog";
    const MOVED: &'static str = "Jumped";
    const MOVE: &'static str = "jump";

    fn from_file(path: &Path) -> Result<Self> {
        Ok(Self {
            board: Board::from_file(path, is_cell)?,
        })
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn is_piece(&self, pos: Position) -> bool {
        self.board.get(pos).map_or(false, is_frog)
    }

    fn try_move(&self, from: Position, to: Position) -> Option<Self> {
        if self.jumps(from).contains(&to) {
            Some(self.jump(from, to))
        } else {
            None
        }
    }
}

impl fmt::Display for HoppersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
