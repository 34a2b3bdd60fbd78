//! Plain-text front-end for board puzzles.
//!
//! Reads one command per line and prints the resulting status message and
//! board after every action:
//!
//! ```text
//! h(int)              -- hint next move
//! l(oad) filename     -- load new puzzle file
//! s(elect) r c        -- select cell at r, c
//! q(uit)              -- quit the game
//! r(eset)             -- reset the current game
//! ```

use std::io::{self, BufRead, Write};

use crate::board::Position;
use crate::model::{file_name, BoardPuzzle, Event, Model};

const HELP: &str = "\
h(int)              -- hint next move
l(oad) filename     -- load new puzzle file
s(elect) r c        -- select cell at r, c
q(uit)              -- quit the game
r(eset)             -- reset the current game
";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hint,
    Load(String),
    Select(Position),
    Quit,
    Reset,
    Help,
}

impl Command {
    /// Commands are recognised by their first letter, so `hint`, `h` and
    /// `hello` all ask for a hint. Missing or malformed arguments fall back
    /// to [`Command::Help`].
    pub fn parse(line: &str) -> Command {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = words.first() else {
            return Command::Help;
        };
        match first.chars().next() {
            Some('q') => Command::Quit,
            Some('h') => Command::Hint,
            Some('r') => Command::Reset,
            Some('l') => match words.get(1) {
                Some(file) => Command::Load(file.to_string()),
                None => Command::Help,
            },
            Some('s') => {
                let coords = words.get(1..3).and_then(|args| {
                    Some((args[0].parse::<i32>().ok()?, args[1].parse::<i32>().ok()?))
                });
                match coords {
                    Some((row, col)) => Command::Select(Position::new(row, col)),
                    None => Command::Help,
                }
            }
            _ => Command::Help,
        }
    }
}

pub struct Ptui<P> {
    model: Model<P>,
}

impl<P: BoardPuzzle> Ptui<P> {
    pub fn new(model: Model<P>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Model<P> {
        &self.model
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", Event::Loaded(file_name(self.model.path())))?;
        writeln!(out, "{}", self.model)?;
        write!(out, "{}", HELP)?;

        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            let event = match Command::parse(&line) {
                Command::Quit => break,
                Command::Help => {
                    write!(out, "{}", HELP)?;
                    continue;
                }
                Command::Hint => self.model.hint(),
                Command::Load(file) => self.model.load(file),
                Command::Select(pos) => self.model.select(pos),
                Command::Reset => self.model.reset(),
            };
            writeln!(out, "{}", event)?;
            writeln!(out, "{}", self.model)?;
        }
        Ok(())
    }
}
