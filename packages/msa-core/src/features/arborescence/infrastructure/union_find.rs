//! Union-Find (Disjoint Set Union) Data Structure
//!
//! Tracks which original vertices have been folded into the same contracted
//! cycle by the Gabow solver:
//! - Path compression on every `root` lookup
//! - Union by size: the smaller tree is linked under the larger one
//!
//! Each entry is a single signed link: a negative value marks a root and
//! stores the negated component size, a non-negative value is a parent index.
//! The structure only ever merges; there is no split or undo.
//!
//! # References
//! - Tarjan, R. E. "Efficiency of a Good But Not Linear Set Union Algorithm" (1975)

use super::super::domain::VertexId;

/// Disjoint set over `0..len` with size-encoded roots
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent if >= 0, negated component size if < 0
    link: Vec<isize>,

    /// Number of disjoint sets
    set_count: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            link: vec![-1; n],
            set_count: n,
        }
    }

    /// Representative of the set containing `v`, compressing the path to it
    ///
    /// Complexity: O(α(n)) amortized
    pub fn root(&mut self, v: VertexId) -> VertexId {
        let parent = self.link[v];
        if parent < 0 {
            return v;
        }
        let root = self.root(parent as usize);
        self.link[v] = root as isize;
        root
    }

    /// Merge the sets of `u` and `v`
    ///
    /// Returns `false` without effect if they already share a set.
    pub fn unite(&mut self, u: VertexId, v: VertexId) -> bool {
        let mut u = self.root(u);
        let mut v = self.root(v);
        if u == v {
            return false;
        }

        // link[] of a root is the negated size: larger set has the smaller value
        if self.link[u] > self.link[v] {
            std::mem::swap(&mut u, &mut v);
        }
        self.link[u] += self.link[v];
        self.link[v] = u as isize;
        self.set_count -= 1;
        true
    }

    /// Whether `u` and `v` are in the same set
    #[inline]
    pub fn same(&mut self, u: VertexId, v: VertexId) -> bool {
        self.root(u) == self.root(v)
    }

    /// Size of the set containing `v`
    #[inline]
    pub fn size(&mut self, v: VertexId) -> usize {
        let root = self.root(v);
        (-self.link[root]) as usize
    }

    /// Number of disjoint sets
    #[inline]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.link.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.link.is_empty()
    }
}
