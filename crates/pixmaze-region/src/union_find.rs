//! Disjoint-set forest
//!
//! An index arena of parent links and set sizes. `find` compresses paths,
//! `union` links the smaller tree under the larger one, so both run in
//! near-constant amortized time. Sets only ever merge.

/// Disjoint-set (union-find) structure over the elements `0..len`
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    /// Size of the tree rooted at each index (meaningful for roots only)
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if the universe has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Find the representative of `x`, compressing the path behind it.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let root = self.root(x);
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Find the representative of `x` without modifying the forest.
    ///
    /// O(1) after [`DisjointSet::flatten`], O(log n) otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
    pub fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `true` if two sets were merged, `false` if `a` and `b`
    /// already shared a set (in which case nothing changes).
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.count -= 1;
        true
    }

    /// Check whether `a` and `b` share a set.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&self, x: usize) -> usize {
        self.size[self.root(x)]
    }

    /// Point every element directly at its representative.
    pub fn flatten(&mut self) {
        for x in 0..self.parent.len() {
            self.find(x);
        }
    }
}
