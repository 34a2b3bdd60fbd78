//! Clock puzzle: turn the hand one hour at a time until it shows the target.

use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::solver::Configuration;

/// A clock face numbered `1..=hours` with the hand at `current`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockConfig {
    hours: u32,
    current: u32,
    end: u32,
}

impl ClockConfig {
    pub fn new(hours: u32, current: u32, end: u32) -> Result<Self> {
        if hours == 0 {
            return Err(PuzzleError::InvalidArgument(
                "a clock needs at least one hour".to_string(),
            ));
        }
        for (name, value) in [("start", current), ("end", end)] {
            if value == 0 || value > hours {
                return Err(PuzzleError::InvalidArgument(format!(
                    "{} hour {} is not on a {}-hour clock",
                    name, value, hours
                )));
            }
        }
        Ok(Self {
            hours,
            current,
            end,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    fn at(&self, current: u32) -> Self {
        Self { current, ..*self }
    }

    fn back(&self) -> u32 {
        if self.current == 1 {
            self.hours
        } else {
            self.current - 1
        }
    }

    fn forward(&self) -> u32 {
        if self.current == self.hours {
            1
        } else {
            self.current + 1
        }
    }
}

impl Configuration for ClockConfig {
    fn is_solution(&self) -> bool {
        self.current == self.end
    }

    fn successors(&self) -> Vec<Self> {
        vec![self.at(self.back()), self.at(self.forward())]
    }
}

impl fmt::Display for ClockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hours: {} Start: {} End: {}",
            self.hours, self.current, self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_wraps_both_ways() {
        let clock = ClockConfig::new(12, 12, 5).unwrap();
        let hands: Vec<u32> = clock.successors().iter().map(|c| c.current()).collect();
        assert_eq!(hands, vec![11, 1]);

        let clock = ClockConfig::new(12, 1, 5).unwrap();
        let hands: Vec<u32> = clock.successors().iter().map(|c| c.current()).collect();
        assert_eq!(hands, vec![12, 2]);
    }

    #[test]
    fn test_rejects_hours_off_the_face() {
        assert!(ClockConfig::new(0, 1, 1).is_err());
        assert!(ClockConfig::new(12, 0, 3).is_err());
        assert!(ClockConfig::new(12, 3, 13).is_err());
    }

    #[test]
    fn test_solve_goes_the_short_way() {
        let result = solve(&ClockConfig::new(12, 2, 11).unwrap());
        let hands: Vec<u32> = result.path.iter().map(|c| c.current()).collect();
        assert_eq!(hands, vec![2, 1, 12, 11]);
    }

    #[test]
    fn test_solve_already_there() {
        let result = solve(&ClockConfig::new(5, 3, 3).unwrap());
        assert_eq!(result.path.len(), 1);
        assert_eq!(result.total_configs, 1);
    }

    #[test]
    fn test_solve_halfway_round() {
        let result = solve(&ClockConfig::new(12, 12, 6).unwrap());
        assert_eq!(result.steps(), Some(6));
        // The backward arc is generated first, so it wins the tie
        let hands: Vec<u32> = result.path.iter().map(|c| c.current()).collect();
        assert_eq!(hands, vec![12, 11, 10, 9, 8, 7, 6]);
    }

    #[test]
    fn test_display() {
        let clock = ClockConfig::new(12, 4, 9).unwrap();
        assert_eq!(clock.to_string(), "Hours: 12 Start: 4 End: 9");
    }
}
