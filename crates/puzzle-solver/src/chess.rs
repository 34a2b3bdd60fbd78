//! Solitaire chess: every move captures, and the puzzle is solved when a
//! single piece is left on the board.

use std::fmt;
use std::path::Path;

use smallvec::SmallVec;

use crate::board::{Board, Position, EMPTY};
use crate::error::Result;
use crate::model::BoardPuzzle;
use crate::solver::Configuration;

/// Chess piece - matches the letters used in puzzle files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Bishop,
    King,
    Knight,
    Pawn,
    Queen,
    Rook,
}

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];
const QUEEN: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];
const KNIGHT: [(i32, i32); 8] = [
    (-1, -2),
    (-2, -1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (1, 2),
    (2, 1),
];
const KING: [(i32, i32); 8] = [
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];
/// Pawns only capture toward row 0
const PAWN: [(i32, i32); 2] = [(-1, -1), (-1, 1)];

impl Piece {
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'B' => Some(Piece::Bishop),
            'K' => Some(Piece::King),
            'N' => Some(Piece::Knight),
            'P' => Some(Piece::Pawn),
            'Q' => Some(Piece::Queen),
            'R' => Some(Piece::Rook),
            _ => None,
        }
    }

    /// Move directions, in the order successors are generated
    fn directions(self) -> &'static [(i32, i32)] {
        match self {
            Piece::Bishop => &DIAGONAL,
            Piece::King => &KING,
            Piece::Knight => &KNIGHT,
            Piece::Pawn => &PAWN,
            Piece::Queen => &QUEEN,
            Piece::Rook => &ORTHOGONAL,
        }
    }

    /// Whether the piece slides along its directions or takes one step
    fn slides(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen | Piece::Rook)
    }
}

fn is_piece(c: char) -> bool {
    Piece::from_char(c).is_some()
}

fn is_cell(c: char) -> bool {
    c == EMPTY || is_piece(c)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChessConfig {
    board: Board,
}

impl ChessConfig {
    /// Parse a board; cells must be `.` or one of `B K N P Q R`.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self {
            board: Board::parse(text, is_cell)?,
        })
    }

    pub fn pieces(&self) -> usize {
        self.board.count(is_piece)
    }

    /// Squares the piece at `from` can capture on, in generation order
    pub fn captures(&self, from: Position) -> SmallVec<[Position; 8]> {
        let mut targets = SmallVec::new();
        let piece = match self.board.get(from).and_then(Piece::from_char) {
            Some(p) => p,
            None => return targets,
        };

        for &(d_row, d_col) in piece.directions() {
            let mut at = from.offset(d_row, d_col);
            while let Some(cell) = self.board.get(at) {
                if is_piece(cell) {
                    targets.push(at);
                    break;
                }
                if !piece.slides() {
                    break;
                }
                at = at.offset(d_row, d_col);
            }
        }
        targets
    }
}

impl Configuration for ChessConfig {
    fn is_solution(&self) -> bool {
        self.pieces() == 1
    }

    fn successors(&self) -> Vec<Self> {
        let mut successors = Vec::new();
        for from in self.board.positions() {
            for to in self.captures(from) {
                successors.push(Self {
                    board: self.board.with_move(from, to, &[]),
                });
            }
        }
        successors
    }
}

impl BoardPuzzle for ChessConfig {
    const PIECE: &'static str = "piece";
    const MOVED: &'static str = "Captured";
    const MOVE: &'static str = "capture";

    fn from_file(path: &Path) -> Result<Self> {
        Ok(Self {
            board: Board::from_file(path, is_cell)?,
        })
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn is_piece(&self, pos: Position) -> bool {
        self.board.get(pos).map_or(false, is_piece)
    }

    fn try_move(&self, from: Position, to: Position) -> Option<Self> {
        if !self.captures(from).contains(&to) {
            return None;
        }
        Some(Self {
            board: self.board.with_move(from, to, &[]),
        })
    }
}

impl fmt::Display for ChessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    fn board(text: &str) -> ChessConfig {
        ChessConfig::parse(text).unwrap()
    }

    #[test]
    fn test_rook_captures_first_piece_on_each_ray() {
        let config = board("3 3\nN . .\nR . B\nP . .\n");
        let targets = config.captures(Position::new(1, 0));
        assert_eq!(
            targets.as_slice(),
            &[
                Position::new(0, 0),
                Position::new(2, 0),
                Position::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_bishop_blocked_ray() {
        let config = board("3 3\nB . .\n. P .\n. . Q\n");
        // P shields Q from the bishop
        assert_eq!(
            config.captures(Position::new(0, 0)).as_slice(),
            &[Position::new(1, 1)]
        );
    }

    #[test]
    fn test_pawn_captures_upward_only() {
        let config = board("3 3\nN . N\n. P .\nN . N\n");
        assert_eq!(
            config.captures(Position::new(1, 1)).as_slice(),
            &[Position::new(0, 0), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_knight_and_king_steps() {
        let config = board("3 3\nK . B\n. . .\n. N .\n");
        assert_eq!(
            config.captures(Position::new(2, 1)).as_slice(),
            &[Position::new(0, 0), Position::new(0, 2)]
        );
        // king does not slide
        assert!(config.captures(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_successors_do_not_mutate_parent() {
        let config = board("1 3\nR . Q\n");
        let successors = config.successors();
        assert_eq!(successors.len(), 2);
        assert_eq!(config.pieces(), 2);
        assert!(successors.iter().all(|s| s.pieces() == 1));
    }

    #[test]
    fn test_solve_small_board() {
        let config = board("3 3\nQ . .\n. N .\n. . B\n");
        let result = solve(&config);

        assert_eq!(result.steps(), Some(2));
        assert!(result.path.last().map_or(false, |c| c.is_solution()));
        for pair in result.path.windows(2) {
            assert!(pair[0].successors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_try_move() {
        let config = board("2 2\nK .\n. N\n");
        let moved = config
            .try_move(Position::new(0, 0), Position::new(1, 1))
            .unwrap();
        assert_eq!(moved, board("2 2\n. .\n. K\n"));
        assert!(config
            .try_move(Position::new(1, 1), Position::new(0, 0))
            .is_none());
    }

    #[test]
    fn test_rejects_unknown_pieces() {
        assert!(ChessConfig::parse("1 2\nX .\n").is_err());
    }

    #[test]
    fn test_sample_board_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/chess/chess-1.txt");
        let config = ChessConfig::from_file(&path).unwrap();
        assert_eq!(solve(&config).steps(), Some(3));

        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/chess/chess-2.txt");
        let config = ChessConfig::from_file(&path).unwrap();
        assert_eq!(config, board("3 3\nQ . .\n. N .\n. . B\n"));
        assert_eq!(solve(&config).steps(), Some(2));
    }
}
