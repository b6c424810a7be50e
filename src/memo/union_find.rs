// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Disjoint-set forest over a flat arena of codel indices.
//!
//! `find` is iterative with full path compression, so very large single-color
//! regions cannot blow the call stack. `union` attaches the smaller tree under
//! the larger and accumulates the set size at the surviving root.

/// Union-find with per-root set sizes.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Root of the set containing `i`, compressing the path on the way.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`; returns the new root.
    ///
    /// On equal sizes the root of `a` survives.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }
        let (root, child) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        root
    }

    /// Size of the set containing `i`.
    pub fn set_size(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.size[root]
    }
}
