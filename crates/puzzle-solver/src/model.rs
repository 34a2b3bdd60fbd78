//! Interactive session over a board puzzle.
//!
//! A [`Model`] holds the configuration being played and turns user actions
//! (load, reset, hint, cell selection) into [`Event`]s. Front-ends decide
//! what to do with each event; the model never prints.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::board::{Board, Position, EMPTY};
use crate::error::Result;
use crate::solver::{solve, Configuration};

/// A puzzle played on a [`Board`] by moving one piece from cell to cell.
pub trait BoardPuzzle: Configuration + fmt::Display {
    /// What occupies a cell, for messages ("piece", "frog")
    const PIECE: &'static str;
    /// Past tense of a move, for messages ("Captured")
    const MOVED: &'static str;
    /// Infinitive of a move, for messages ("capture")
    const MOVE: &'static str;

    fn from_file(path: &Path) -> Result<Self>;

    fn board(&self) -> &Board;

    /// Whether the cell holds something that can be picked up.
    fn is_piece(&self, pos: Position) -> bool;

    /// The configuration after moving the piece at `from` onto `to`, if
    /// that is a legal move.
    fn try_move(&self, from: Position, to: Position) -> Option<Self>;
}

/// Outcome of a model operation, rendered as the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Loaded(String),
    LoadFailed(String),
    Reset,
    NextStep,
    NoSolution,
    AlreadySolved,
    Selected(Position),
    NoPiece {
        piece: &'static str,
        at: Position,
    },
    InvalidSelection(Position),
    Moved {
        verb: &'static str,
        from: Position,
        to: Position,
    },
    IllegalMove {
        verb: &'static str,
        from: Position,
        to: Position,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Loaded(name) => write!(f, "Loaded: {}", name),
            Event::LoadFailed(name) => write!(f, "Failed to load: {}", name),
            Event::Reset => write!(f, "Puzzle reset!"),
            Event::NextStep => write!(f, "Next step!"),
            Event::NoSolution => write!(f, "No solution!"),
            Event::AlreadySolved => write!(f, "Already solved!"),
            Event::Selected(at) => write!(f, "Selected {}", at),
            Event::NoPiece { piece, at } => write!(f, "No {} at {}", piece, at),
            Event::InvalidSelection(at) => write!(f, "Invalid selection {}", at),
            Event::Moved { verb, from, to } => write!(f, "{} from {} to {}", verb, from, to),
            Event::IllegalMove { verb, from, to } => {
                write!(f, "Can't {} from {} to {}", verb, from, to)
            }
        }
    }
}

pub struct Model<P> {
    current: P,
    path: PathBuf,
    selection: Option<Position>,
}

impl<P: BoardPuzzle> Model<P> {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let current = P::from_file(&path)?;
        info!("loaded {}", path.display());
        Ok(Self {
            current,
            path,
            selection: None,
        })
    }

    pub fn current(&self) -> &P {
        &self.current
    }

    /// Path of the last successfully loaded puzzle file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The piece picked by a first selection, awaiting its destination
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Replace the puzzle with one read from `path`. On failure the current
    /// puzzle is kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Event {
        let path = path.as_ref();
        match P::from_file(path) {
            Ok(config) => {
                info!("loaded {}", path.display());
                self.current = config;
                self.path = path.to_path_buf();
                self.selection = None;
                Event::Loaded(file_name(path))
            }
            Err(e) => {
                warn!("{}", e);
                Event::LoadFailed(file_name(path))
            }
        }
    }

    /// Reload the last successfully loaded file.
    pub fn reset(&mut self) -> Event {
        let path = self.path.clone();
        match self.load(&path) {
            Event::Loaded(_) => Event::Reset,
            failed => failed,
        }
    }

    /// Advance one move along a shortest solution.
    pub fn hint(&mut self) -> Event {
        if self.current.is_solution() {
            return Event::AlreadySolved;
        }
        let result = solve(&self.current);
        debug!(
            "hint search: total={} unique={}",
            result.total_configs, result.unique_configs
        );
        match result.next_step() {
            Some(next) => {
                self.current = next.clone();
                self.selection = None;
                Event::NextStep
            }
            None => Event::NoSolution,
        }
    }

    /// First call picks up a piece; the second tries to move it to `pos`.
    /// The pending selection is cleared by the second call either way.
    pub fn select(&mut self, pos: Position) -> Event {
        match self.selection.take() {
            None => self.pick(pos),
            Some(from) => match self.current.try_move(from, pos) {
                Some(next) => {
                    self.current = next;
                    Event::Moved {
                        verb: P::MOVED,
                        from,
                        to: pos,
                    }
                }
                None => Event::IllegalMove {
                    verb: P::MOVE,
                    from,
                    to: pos,
                },
            },
        }
    }

    fn pick(&mut self, pos: Position) -> Event {
        if self.current.is_solution() {
            return Event::AlreadySolved;
        }
        if self.current.is_piece(pos) {
            self.selection = Some(pos);
            return Event::Selected(pos);
        }
        match self.current.board().get(pos) {
            Some(EMPTY) => Event::NoPiece {
                piece: P::PIECE,
                at: pos,
            },
            _ => Event::InvalidSelection(pos),
        }
    }
}

impl<P: BoardPuzzle> fmt::Display for Model<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current.board())
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
