use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

/// Single-source shortest paths over non-negative weights.
pub trait ShortestPaths
where
    Self: WeightedGraph<Vertex = VertexId> + Sized,
{
    /// Distances from `source` to every vertex, indexed by vertex.
    ///
    /// Unreachable vertices are at `Distance::Infinite`.
    /// Returns `None` if `source` is not in the graph.
    ///
    /// A vertex is settled the first time it leaves the queue and is never queued again.
    /// A pending vertex is only requeued when a strictly shorter candidate shows up.
    fn dijkstra(&self, source: &VertexId) -> Option<Vec<Distance>> {
        if !self.contains_vertex(source) {
            return None;
        }
        let mut distances = vec![Distance::Infinite; self.vertex_size()];
        let mut queue: KeyedPriorityQueue<VertexId, Reverse<Weight>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        queue.push(*source, Reverse(0));
        while let Some((vert, Reverse(dist))) = queue.pop() {
            match distances.get_mut(vert.to_raw()) {
                Some(slot) => *slot = Distance::Finite(dist),
                None => continue,
            }
            for next in self.successors(&vert) {
                let settled = distances
                    .get(next.to_raw())
                    .map_or(true, Distance::is_finite);
                if settled {
                    continue;
                }
                let candidate = match self.weight(&vert, &next) {
                    Some(w) => dist.saturating_add(w),
                    None => continue,
                };
                match queue.get_priority(&next) {
                    Some(Reverse(known)) if *known <= candidate => {}
                    _ => {
                        queue.push(next, Reverse(candidate));
                    }
                }
            }
        }
        Some(distances)
    }
}

impl<G> ShortestPaths for G where G: WeightedGraph<Vertex = VertexId> {}
