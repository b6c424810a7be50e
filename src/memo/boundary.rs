// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exit codels of a color block.
//!
//! For each (DP, CC) pair the exit codel is found by a two-step extremal
//! search:
//!
//! 1. the codels furthest along the DP;
//! 2. among those, the one furthest towards the CC, where CC left/right is
//!    taken while facing the DP.
//!
//! | DP | CC left | CC right |
//! |----|---------|----------|
//! | right | max x, then min y | max x, then max y |
//! | down | max y, then max x | max y, then min x |
//! | left | min x, then max y | min x, then min y |
//! | up | min y, then min x | min y, then max x |
//!
//! Both steps are the same operation, "maximise the projection onto a unit
//! vector", so each table entry is the codel with the lexicographically
//! largest `(dp · p, cc · p)`. Two distinct codels never tie: the two axes
//! are orthogonal.

use crate::geometry::{Chooser, Direction, Position};
use strum::{EnumCount, IntoEnumIterator};

/// Projection of `pos` onto the unit vector of `direction`.
fn project(pos: Position, direction: Direction) -> i64 {
    let (dx, dy) = direction.delta();
    dx as i64 * pos.x as i64 + dy as i64 * pos.y as i64
}

/// Ranking key of a codel for one (DP, CC) table entry; larger is better.
pub fn exit_rank(pos: Position, dp: Direction, cc: Chooser) -> (i64, i64) {
    (project(pos, dp), project(pos, cc.absolute(dp)))
}

/// The eight exit codels of one region, indexed `[dp][cc]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryTable {
    exits: [[Position; Chooser::COUNT]; Direction::COUNT],
}

impl BoundaryTable {
    /// Table for a region whose only codel so far is `first`.
    pub fn new(first: Position) -> Self {
        Self {
            exits: [[first; Chooser::COUNT]; Direction::COUNT],
        }
    }

    /// Fold one more codel of the region into the running extremes.
    ///
    /// The table is final once every codel of the region has been offered.
    pub fn update(&mut self, pos: Position) {
        for dp in Direction::iter() {
            for cc in Chooser::iter() {
                let slot = &mut self.exits[dp.index()][cc.index()];
                if exit_rank(pos, dp, cc) > exit_rank(*slot, dp, cc) {
                    *slot = pos;
                }
            }
        }
    }

    /// The exit codel for the given DP and CC.
    pub fn exit(&self, dp: Direction, cc: Chooser) -> Position {
        self.exits[dp.index()][cc.index()]
    }
}
