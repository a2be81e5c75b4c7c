//! Union-find (disjoint set) over flat indices
//!
//! Used by the labeler to merge foreground elements into regions. Unions are
//! asymmetric: the root of the first argument is always redirected to the
//! root of the second. `find` compresses paths iteratively, so chain length
//! never turns into stack depth.

/// Disjoint set over `0..len`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Create a set where every element is its own root
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the set has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Whether `i` is the root of its set
    #[inline]
    pub fn is_root(&self, i: usize) -> bool {
        self.parent[i] == i
    }

    /// Root of the set containing `i`.
    ///
    /// Every node visited on the way is rewritten to point directly at the
    /// root.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
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

    /// Merge the sets containing `i` and `j`; the root of `i` is redirected
    /// to the root of `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn union(&mut self, i: usize, j: usize) {
        let ri = self.find(i);
        let rj = self.find(j);
        self.parent[ri] = rj;
    }

    /// Flatten the chain from `i` to its root
    #[inline]
    pub fn compress(&mut self, i: usize) {
        self.find(i);
    }

    /// Parent pointers
    pub fn parents(&self) -> &[usize] {
        &self.parent
    }

    /// Consume the set, returning the parent pointers
    pub fn into_parents(self) -> Vec<usize> {
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_roots() {
        let ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert!((0..4).all(|i| ds.is_root(i)));
        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn test_union_is_asymmetric() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1);
        assert_eq!(ds.parents(), &[1, 1, 2]);
        ds.union(2, 0);
        // root(2) = 2 is redirected to root(0) = 1
        assert_eq!(ds.parents(), &[1, 1, 1]);
    }

    #[test]
    fn test_find_compresses_whole_path() {
        let mut ds = DisjointSet::new(5);
        // chain 0 -> 1 -> 2 -> 3 -> 4
        for i in 0..4 {
            ds.union(i, i + 1);
        }
        assert_eq!(ds.parents(), &[1, 2, 3, 4, 4]);
        assert_eq!(ds.find(0), 4);
        assert_eq!(ds.parents(), &[4, 4, 4, 4, 4]);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1);
        let before = ds.clone();
        ds.union(1, 0);
        assert_eq!(ds, before);
    }

    #[test]
    fn test_compress() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1);
        ds.union(1, 2);
        ds.union(2, 3);
        for i in 0..4 {
            ds.compress(i);
        }
        assert_eq!(ds.into_parents(), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 1_000_000;
        let mut ds = DisjointSet::new(n);
        for i in 0..n - 1 {
            ds.union(i, i + 1);
        }
        assert_eq!(ds.find(0), n - 1);
    }
}
