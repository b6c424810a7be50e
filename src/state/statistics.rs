// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Per-run counters, stored in the execution state and incremented by the
//! interpreter as it steps.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Successful moves from one block into the next.
    Crossings,
    /// Failed crossing attempts.
    Obstructions,
    /// Crossings that passed through white.
    WhiteSlides,
    /// Crossings that fired an instruction.
    Instructions,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{:?}={}", counter, self.get(counter))?;
        }
        Ok(())
    }
}
