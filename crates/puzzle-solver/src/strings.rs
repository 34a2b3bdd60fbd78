//! Strings puzzle: rotate single letters through the alphabet until the
//! current word matches the target.

use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::solver::Configuration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringsConfig {
    current: Vec<u8>,
    target: Vec<u8>,
}

impl StringsConfig {
    /// Both words must be uppercase ASCII letters. Words of different
    /// lengths are accepted; they can never match.
    pub fn new(current: &str, target: &str) -> Result<Self> {
        Ok(Self {
            current: letters(current)?,
            target: letters(target)?,
        })
    }

    pub fn current(&self) -> &str {
        as_str(&self.current)
    }

    pub fn target(&self) -> &str {
        as_str(&self.target)
    }

    fn with_letter(&self, index: usize, letter: u8) -> Self {
        let mut next = self.clone();
        next.current[index] = letter;
        next
    }
}

fn letters(word: &str) -> Result<Vec<u8>> {
    match word.bytes().find(|b| !b.is_ascii_uppercase()) {
        Some(_) => Err(PuzzleError::InvalidArgument(format!(
            "{:?} must contain only letters A-Z",
            word
        ))),
        None => Ok(word.as_bytes().to_vec()),
    }
}

fn as_str(bytes: &[u8]) -> &str {
    // Only A-Z is ever stored
    std::str::from_utf8(bytes).unwrap_or_default()
}

fn next_letter(letter: u8) -> u8 {
    if letter == b'Z' {
        b'A'
    } else {
        letter + 1
    }
}

fn prev_letter(letter: u8) -> u8 {
    if letter == b'A' {
        b'Z'
    } else {
        letter - 1
    }
}

impl Configuration for StringsConfig {
    fn is_solution(&self) -> bool {
        self.current == self.target
    }

    fn successors(&self) -> Vec<Self> {
        let mut successors = Vec::with_capacity(self.current.len() * 2);
        for (i, &letter) in self.current.iter().enumerate() {
            successors.push(self.with_letter(i, next_letter(letter)));
            successors.push(self.with_letter(i, prev_letter(letter)));
        }
        successors
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start: {}, End: {}", self.current(), self.target())
    }
}
