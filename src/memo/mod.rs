// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! Everything the interpreter needs to know about the program image,
//! computed once before execution starts:
//! - Grid: canonical color of every codel
//! - Regions: color block labels and sizes (union-find discovery)
//! - BoundaryTable: the eight exit codels of each color block
//!
//! A [`ProgramMemo`] is never mutated after construction, so any number of
//! interpreters may run against one instance at the same time.

pub mod boundary;
pub mod grid;
pub mod regions;
pub mod union_find;

pub use boundary::BoundaryTable;
pub use grid::Grid;
pub use regions::{Region, RegionId, Regions};
pub use union_find::UnionFind;

use crate::geometry::{Color, Position};

/// A loaded program: its grid and color blocks.
#[derive(Debug, Clone)]
pub struct ProgramMemo {
    grid: Grid,
    regions: Regions,
}

impl ProgramMemo {
    /// Discover the color blocks of `grid`.
    pub fn new(grid: Grid) -> Self {
        let regions = Regions::discover(&grid);
        Self { grid, regions }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Color of the codel at `pos`, `None` off the grid.
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.grid.color_at(pos)
    }

    /// Color block containing `pos`; `None` for white, black and off-grid codels.
    pub fn region_at(&self, pos: Position) -> Option<&Region> {
        if !self.grid.contains(pos) {
            return None;
        }
        self.regions
            .label(self.grid.index(pos))
            .map(|id| self.regions.get(id))
    }

    /// Label of the color block containing `pos`.
    pub fn region_id_at(&self, pos: Position) -> Option<RegionId> {
        if !self.grid.contains(pos) {
            return None;
        }
        self.regions.label(self.grid.index(pos))
    }
}
