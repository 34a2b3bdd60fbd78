//! Shortest-path solver for single-player puzzles.
//!
//! Every puzzle is reduced to the same problem: from a start configuration,
//! find the fewest legal moves to a solved configuration. The breadth-first
//! [`solve`] works against the [`Configuration`] trait; the clock, strings,
//! chess and hoppers puzzles implement it, and the board puzzles can also be
//! played interactively through [`Model`] and [`Ptui`].

pub mod board;
pub mod chess;
pub mod clock;
pub mod error;
pub mod hoppers;
pub mod model;
pub mod ptui;
pub mod solver;
pub mod strings;

// Re-export main types
pub use board::{Board, Position};
pub use chess::ChessConfig;
pub use clock::ClockConfig;
pub use error::{PuzzleError, Result};
pub use hoppers::HoppersConfig;
pub use model::{BoardPuzzle, Event, Model};
pub use ptui::Ptui;
pub use solver::{solve, Configuration, SolverResult};
pub use strings::StringsConfig;
