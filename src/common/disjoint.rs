/// Union-find over `0..len` with union by size.
///
/// Every element starts as the root of its own singleton set. Following
/// parent links from any element terminates at a root whose parent is
/// itself, and the size recorded at a root equals the number of elements
/// in its tree.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Returns the root of the set containing `element`.
    pub fn find(&self, mut element: usize) -> usize {
        while self.parent[element] != element {
            element = self.parent[element];
        }
        element
    }

    /// Returns `true` if both elements are in the same set.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merges the sets containing `a` and `b`, attaching the smaller tree
    /// under the root of the larger. Returns `false` if they already were
    /// the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let a = self.find(a);
        let b = self.find(b);

        if a == b {
            return false;
        }

        let (small, large) = if self.size[a] < self.size[b] {
            (a, b)
        } else {
            (b, a)
        };

        self.parent[small] = large;
        self.size[large] += self.size[small];

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let sets = DisjointSets::new(3);

        assert_eq!(sets.find(0), 0);
        assert_eq!(sets.find(2), 2);
        assert!(!sets.connected(0, 2));
    }

    #[test]
    fn union_merges() {
        let mut sets = DisjointSets::new(4);

        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.connected(0, 2));

        assert!(sets.union(1, 3));
        assert!(sets.connected(0, 2));
        assert!(sets.connected(0, 3));
    }

    #[test]
    fn union_same_set() {
        let mut sets = DisjointSets::new(3);

        assert!(sets.union(0, 1));
        assert!(!sets.union(1, 0));
    }

    #[test]
    fn smaller_tree_attached_under_larger() {
        let mut sets = DisjointSets::new(5);

        sets.union(0, 1);
        sets.union(0, 2);
        let large = sets.find(0);

        // Merging a singleton into the three-element set must keep the
        // larger tree's root.
        sets.union(3, 0);
        assert_eq!(sets.find(3), large);
    }

    #[test]
    fn roots_are_fixed_points() {
        let mut sets = DisjointSets::new(6);

        sets.union(0, 1);
        sets.union(2, 1);
        sets.union(4, 5);

        for element in 0..6 {
            let root = sets.find(element);
            assert_eq!(sets.find(root), root);
        }
    }
}
