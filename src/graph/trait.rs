use crate::graph::*;
use std::{fmt::Debug, hash::Hash};

/// Read-only view of a graph, enough for traversal-style algorithms.
pub trait QueryableGraph {
    type Vertex: Clone + Eq + Ord + Hash + Debug + 'static;

    fn vertex_size(&self) -> usize;
    /// Vertices in creation order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    fn edge_size(&self) -> usize;
    /// Whether one can step from `source` to `sink` over a single edge.
    fn contains_edge(&self, source: &Self::Vertex, sink: &Self::Vertex) -> bool;
    /// Vertices one step away from `v`, in ascending order.
    ///
    /// Empty if `v` is not in the graph.
    fn successors(&self, v: &Self::Vertex) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;
}

/// Graphs whose edges carry a weight.
pub trait WeightedGraph: QueryableGraph {
    fn weight(&self, source: &Self::Vertex, sink: &Self::Vertex) -> Option<Weight>;
}
