//! Directed graphs backed by an adjacency matrix.

mod weighted_matrix;
pub use self::weighted_matrix::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddVertex,
        AddEdge((usize, usize, i64)),
        RemoveEdge((usize, usize)),
    }

    /// A random script of mutations.
    ///
    /// Indices may run one past the current vertex count and weights may be negative or zero,
    /// so rejected mutations are exercised as well.
    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }

        pub fn apply(&self) -> WeightedDigraph {
            let mut g = WeightedDigraph::new();
            for op in self.iter() {
                match op {
                    Op::AddVertex => {
                        g.add_vertex();
                    }
                    Op::AddEdge((src, snk, weight)) => {
                        g.add_edge(VertexId::new(*src), VertexId::new(*snk), *weight);
                    }
                    Op::RemoveEdge((src, snk)) => {
                        g.remove_edge(VertexId::new(*src), VertexId::new(*snk));
                    }
                }
            }
            g
        }
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut vertex_size = 0usize;
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .map(|_| match u8::arbitrary(g) % 4 {
                    0 => {
                        vertex_size += 1;
                        Op::AddVertex
                    }
                    1 | 2 => {
                        let src = usize::arbitrary(g) % (vertex_size + 1);
                        let snk = usize::arbitrary(g) % (vertex_size + 1);
                        let weight = i64::from(i8::arbitrary(g));
                        Op::AddEdge((src, snk, weight))
                    }
                    3 => {
                        let src = usize::arbitrary(g) % (vertex_size + 1);
                        let snk = usize::arbitrary(g) % (vertex_size + 1);
                        Op::RemoveEdge((src, snk))
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.ops = me.ops[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }

    /// The same graph as a `petgraph` digraph, for use as an oracle.
    pub fn to_petgraph(g: &WeightedDigraph) -> petgraph::graph::DiGraph<(), Weight> {
        let mut res = petgraph::graph::DiGraph::new();
        let nodes: Vec<_> = g.get_vertices().iter().map(|_| res.add_node(())).collect();
        for e in g.get_edges() {
            res.add_edge(nodes[e.source.to_raw()], nodes[e.sink.to_raw()], e.weight);
        }
        res
    }

    /// The sample graph used throughout the tests.
    pub fn sample_edges() -> Vec<(usize, usize, i64)> {
        vec![
            (0, 1, 10),
            (4, 0, 12),
            (1, 4, 15),
            (4, 3, 3),
            (3, 1, 5),
            (2, 1, 23),
            (3, 2, 7),
        ]
    }
}
