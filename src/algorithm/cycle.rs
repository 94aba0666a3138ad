use crate::{algorithm::ConnectedComponents, graph::*};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

pub trait HasCycle {
    fn has_cycle(&self) -> bool;
}

impl HasCycle for WeightedDigraph {
    /// Every vertex takes a turn as the origin of a BFS that looks for an edge leading back to it.
    ///
    /// O(|V| (|V| + |E|)) on top of the O(|V|) cost of scanning a matrix row.
    fn has_cycle(&self) -> bool {
        self.iter_vertices().any(|v| reaches_back(self, &v))
    }
}

fn reaches_back<G>(graph: &G, origin: &G::Vertex) -> bool
where
    G: QueryableGraph,
{
    let mut queue = VecDeque::new();
    let mut discovered: HashSet<G::Vertex, RandomState> = HashSet::with_hasher(RandomState::new());
    queue.push_back(origin.clone());
    discovered.insert(origin.clone());
    while let Some(cur) = queue.pop_front() {
        for next in graph.successors(&cur) {
            if &next == origin {
                return true;
            }
            if discovered.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    false
}

impl HasCycle for LabeledGraph {
    /// Removing an edge that lies on a cycle leaves the number of components unchanged,
    /// while removing a bridge adds one.
    ///
    /// Works on a copy: each vertex of degree above one has its edges removed one at a time,
    /// and the components are recounted after every removal.
    fn has_cycle(&self) -> bool {
        let mut scratch = self.copy_graph();
        let mut expected = scratch.count_connected_components();
        for v in self.get_vertices() {
            if scratch.degree(&v) <= 1 {
                continue;
            }
            loop {
                let u = match scratch.neighbors(&v).first() {
                    Some(u) => u.to_string(),
                    None => break,
                };
                scratch.remove_edge(&u, &v);
                if scratch.count_connected_components() == expected {
                    return true;
                }
                expected += 1;
            }
        }
        false
    }
}
