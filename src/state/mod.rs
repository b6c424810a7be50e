// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, owned by one run).
//!
//! This module contains everything that changes while a program executes:
//! - position, direction pointer and codel chooser
//! - the step phase and the obstruction/retry bookkeeping
//! - the program stack
//! - run statistics
//!
//! One `ExecutionState` belongs to exactly one interpreter. Several states
//! may run against the same [`ProgramMemo`](crate::memo::ProgramMemo).

pub mod stack;
pub mod statistics;

pub use stack::{ArithmeticFault, Stack};
pub use statistics::{Counters, Statistics};

use crate::geometry::{Chooser, Direction, Position};

/// Consecutive obstructions after which the program halts.
pub const MAX_OBSTRUCTIONS: u8 = 8;

/// Which half of a hop the next step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Next step jumps to the current block's exit codel.
    #[default]
    WithinRegion,
    /// Next step tries to cross out of the block.
    AtBoundary,
}

/// What the next obstruction will change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPreference {
    #[default]
    ToggleChooser,
    RotateDirection,
}

/// Result of recording one obstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retry {
    /// Try again with the adjusted DP/CC. Carries the obstruction count.
    Again(u8),
    /// Eighth consecutive obstruction: the program is finished.
    Exhausted,
}

/// Mutable interpreter state.
#[derive(Debug, Clone, Default)]
pub struct ExecutionState {
    pub position: Position,
    pub dp: Direction,
    pub cc: Chooser,
    pub phase: Phase,
    pub retry: RetryPreference,
    pub obstructions: u8,
    pub stack: Stack,
    pub statistics: Statistics,
}

impl ExecutionState {
    /// Initial state: codel (0,0), DP right, CC left, empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful crossing onto `next`.
    pub fn crossed(&mut self, next: Position) {
        self.position = next;
        self.obstructions = 0;
        self.retry = RetryPreference::ToggleChooser;
        self.phase = Phase::WithinRegion;
        self.statistics.increment_counter(Counters::Crossings);
    }

    /// Record a failed crossing and pick the next DP/CC to try.
    ///
    /// Alternates between toggling the CC and rotating the DP clockwise,
    /// starting with whichever the retry preference says.
    pub fn obstructed(&mut self) -> Retry {
        self.statistics.increment_counter(Counters::Obstructions);
        self.obstructions += 1;
        self.phase = Phase::WithinRegion;
        if self.obstructions >= MAX_OBSTRUCTIONS {
            return Retry::Exhausted;
        }
        match self.retry {
            RetryPreference::ToggleChooser => {
                self.cc = self.cc.toggle();
                self.retry = RetryPreference::RotateDirection;
            }
            RetryPreference::RotateDirection => {
                self.dp = self.dp.rotate(1);
                self.retry = RetryPreference::ToggleChooser;
            }
        }
        Retry::Again(self.obstructions)
    }

    /// Rotate the DP clockwise `steps` times (`pointer`).
    pub fn rotate_dp(&mut self, steps: i64) {
        self.dp = self.dp.rotate(steps);
    }

    /// Toggle the CC `|times|` times (`switch`).
    pub fn switch_cc(&mut self, times: i64) {
        if times.unsigned_abs() % 2 == 1 {
            self.cc = self.cc.toggle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = ExecutionState::new();
        assert_eq!(s.position, Position::new(0, 0));
        assert_eq!(s.dp, Direction::Right);
        assert_eq!(s.cc, Chooser::Left);
        assert_eq!(s.phase, Phase::WithinRegion);
        assert_eq!(s.obstructions, 0);
        assert!(s.stack.is_empty());
    }

    #[test]
    fn test_retry_sequence_visits_all_eight_pairs() {
        let mut s = ExecutionState::new();
        let mut seen = vec![(s.dp, s.cc)];
        for n in 1..MAX_OBSTRUCTIONS {
            assert_eq!(s.obstructed(), Retry::Again(n));
            seen.push((s.dp, s.cc));
        }
        assert_eq!(s.obstructed(), Retry::Exhausted);
        seen.sort_by_key(|(dp, cc)| (dp.index(), cc.index()));
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_retry_order() {
        let mut s = ExecutionState::new();
        s.obstructed();
        assert_eq!((s.dp, s.cc), (Direction::Right, Chooser::Right));
        s.obstructed();
        assert_eq!((s.dp, s.cc), (Direction::Down, Chooser::Right));
        s.obstructed();
        assert_eq!((s.dp, s.cc), (Direction::Down, Chooser::Left));
    }

    #[test]
    fn test_crossing_resets_retry() {
        let mut s = ExecutionState::new();
        s.obstructed();
        s.obstructed();
        s.obstructed();
        s.crossed(Position::new(4, 0));
        assert_eq!(s.obstructions, 0);
        assert_eq!(s.retry, RetryPreference::ToggleChooser);
        assert_eq!(s.position, Position::new(4, 0));
        assert_eq!(s.statistics.get(Counters::Crossings), 1);
        assert_eq!(s.statistics.get(Counters::Obstructions), 3);
    }

    #[test]
    fn test_switch_parity() {
        let mut s = ExecutionState::new();
        s.switch_cc(2);
        assert_eq!(s.cc, Chooser::Left);
        s.switch_cc(-3);
        assert_eq!(s.cc, Chooser::Right);
        s.switch_cc(i64::MIN);
        assert_eq!(s.cc, Chooser::Right);
    }
}
