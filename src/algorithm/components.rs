use crate::{algorithm::Traversal, graph::*};
use ahash::RandomState;
use std::collections::HashSet;

/// Connected components of undirected graphs.
pub trait ConnectedComponents
where
    Self: QueryableGraph + Sized,
{
    /// Partitions the vertices into components.
    ///
    /// Components come in the order of their first vertex, each listed in BFS order from it.
    fn get_connected_components(&self) -> Vec<Vec<Self::Vertex>> {
        let mut assigned: HashSet<Self::Vertex, RandomState> =
            HashSet::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        let mut res = vec![];
        for v in self.iter_vertices() {
            if assigned.contains(&v) {
                continue;
            }
            let component = self.bfs(&v, None);
            assigned.extend(component.iter().cloned());
            res.push(component);
        }
        res
    }

    fn count_connected_components(&self) -> usize {
        self.get_connected_components().len()
    }
}

impl ConnectedComponents for LabeledGraph {}
