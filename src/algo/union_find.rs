/*!
Disjoint-set forest over the node ids `1..=n`.

Used by [`Kruskal`](super::Kruskal) to detect whether an edge would close a cycle and by
[`Connectivity`](super::Connectivity) to count components. Both operations run in amortized
near-constant time thanks to path compression and union by rank.
*/

use super::*;

/// Union-find structure with path compression and union by rank.
///
/// Slot `0` exists to allow indexing by node id, but is never counted as a set.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets `{1}, ..., {n}`
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..=n).collect(),
            rank: vec![0; n as usize + 1],
            sets: n,
        }
    }

    /// Returns the number of nodes covered by the structure
    pub fn number_of_nodes(&self) -> NumNodes {
        (self.parent.len() - 1) as NumNodes
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.sets
    }

    /// Returns the representative of the set containing `node`.
    /// Compresses the path from `node` to its representative.
    /// ** Panics if `node > n` **
    pub fn find(&mut self, node: Node) -> Node {
        let mut root = node;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = node;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`.
    /// Returns *false* if both already were in the same set, ie. an edge `{u, v}` would close a cycle.
    /// ** Panics if `u > n` or `v > n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let mut ru = self.find(u);
        let mut rv = self.find(v);
        if ru == rv {
            return false;
        }

        if self.rank[ru as usize] < self.rank[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }

        self.parent[rv as usize] = ru;
        if self.rank[ru as usize] == self.rank[rv as usize] {
            self.rank[ru as usize] = self.rank[ru as usize].saturating_add(1);
        }

        self.sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    /// ** Panics if `u > n` or `v > n` **
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn union_reports_cycles() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.number_of_sets(), 5);

        assert!(uf.union(1, 2));
        assert!(uf.union(3, 4));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 4));
        assert!(!uf.union(5, 5));

        assert_eq!(uf.number_of_sets(), 2);
        assert!(uf.same_set(1, 4));
        assert!(!uf.same_set(1, 5));
        assert_eq!(uf.find(5), 5);
    }

    #[test]
    fn matches_naive_labeling() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 10, 50, 200] {
            let mut uf = UnionFind::new(n);
            let mut labels: Vec<Node> = (0..=n).collect();

            for _ in 0..(2 * n) {
                let u = rng.random_range(1..=n);
                let v = rng.random_range(1..=n);

                let (lu, lv) = (labels[u as usize], labels[v as usize]);
                assert_eq!(uf.union(u, v), lu != lv);

                if lu != lv {
                    labels.iter_mut().filter(|l| **l == lv).for_each(|l| *l = lu);
                }
            }

            for u in 1..=n {
                for v in 1..=n {
                    assert_eq!(
                        uf.same_set(u, v),
                        labels[u as usize] == labels[v as usize]
                    );
                }
            }

            let mut distinct = labels[1..].to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            assert_eq!(uf.number_of_sets() as usize, distinct.len());
        }
    }

    #[test]
    fn empty_structure() {
        let uf = UnionFind::new(0);
        assert_eq!(uf.number_of_nodes(), 0);
        assert_eq!(uf.number_of_sets(), 0);
    }
}
