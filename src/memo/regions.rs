// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color block discovery.
//!
//! Two-pass connected-component labeling in raster order:
//!
//! - **Pass 1** unions every chromatic codel with its up and left neighbours
//!   of exactly the same color. Only already-visited neighbours are looked
//!   at; connectivity in the other two directions is picked up transitively
//!   when the later codel does its own look-back.
//! - **Pass 2** resolves each codel's root, hands out labels in order of
//!   first appearance, and folds the codel into its region's
//!   [`BoundaryTable`].
//!
//! White and black codels are never labeled.

use super::boundary::BoundaryTable;
use super::grid::Grid;
use super::union_find::UnionFind;
use crate::geometry::{Chooser, Color, Direction, Position};
use std::fmt;

/// Label of a color block, in order of discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(usize);

impl RegionId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One color block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    color: Color,
    size: usize,
    boundary: BoundaryTable,
}

impl Region {
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of codels in the block; this is what `push` pushes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Exit codel for the given DP and CC.
    pub fn exit(&self, dp: Direction, cc: Chooser) -> Position {
        self.boundary.exit(dp, cc)
    }

    pub fn boundary(&self) -> &BoundaryTable {
        &self.boundary
    }
}

/// All color blocks of a grid plus the per-codel label map.
#[derive(Debug, Clone)]
pub struct Regions {
    regions: Vec<Region>,
    labels: Vec<Option<RegionId>>,
}

impl Regions {
    /// Label every chromatic codel of `grid`.
    pub fn discover(grid: &Grid) -> Self {
        let mut uf = UnionFind::new(grid.len());

        // Pass 1
        for (pos, color) in grid.codels() {
            if color.is_background() {
                continue;
            }
            let here = grid.index(pos);
            for dir in [Direction::Up, Direction::Left] {
                if let Some(neighbour) = pos.step(dir) {
                    if grid.color_at(neighbour) == Some(color) {
                        uf.union(grid.index(neighbour), here);
                    }
                }
            }
        }

        // Pass 2
        let mut labels = vec![None; grid.len()];
        let mut root_labels: Vec<Option<RegionId>> = vec![None; grid.len()];
        let mut regions: Vec<Region> = Vec::new();
        for (pos, color) in grid.codels() {
            if color.is_background() {
                continue;
            }
            let here = grid.index(pos);
            let root = uf.find(here);
            let id = match root_labels[root] {
                Some(id) => {
                    regions[id.0].boundary.update(pos);
                    id
                }
                None => {
                    let id = RegionId(regions.len());
                    root_labels[root] = Some(id);
                    regions.push(Region {
                        color,
                        size: uf.set_size(root),
                        boundary: BoundaryTable::new(pos),
                    });
                    id
                }
            };
            labels[here] = Some(id);
        }

        tracing::debug!(
            regions = regions.len(),
            codels = grid.len(),
            "color block discovery complete"
        );

        Self { regions, labels }
    }

    /// Number of color blocks.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: RegionId) -> &Region {
        &self.regions[id.0]
    }

    /// Label of the codel at the given flat index; `None` for background
    /// codels and off-grid indices.
    pub(crate) fn label(&self, index: usize) -> Option<RegionId> {
        self.labels.get(index).copied().flatten()
    }

    /// Iterate over `(id, region)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (RegionId(i), r))
    }
}
