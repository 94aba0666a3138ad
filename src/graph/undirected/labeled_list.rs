use crate::{graph::*, GraphError, GraphResult};
use ahash::RandomState;
use bimap::BiHashMap;
use log::{debug, trace};
use std::{
    cmp::Reverse,
    collections::{BTreeMap, BinaryHeap},
};

/// An undirected, unweighted graph whose vertices are string labels.
///
/// Each label is bound to a `VertexId` drawn from a monotonic factory,
/// so iterating the adjacency map visits vertices in creation order.
/// Neighbor sequences keep insertion order.
///
/// Invariants:
/// * `u` is a neighbor of `v` iff `v` is a neighbor of `u`;
/// * no vertex is its own neighbor;
/// * every neighbor is a vertex of the graph.
#[derive(Clone)]
pub struct LabeledGraph {
    vid_factory: VertexIdFactory,
    labels: BiHashMap<VertexId, String, RandomState, RandomState>,
    adjacency: BTreeMap<VertexId, Vec<VertexId>>,
}

impl Default for LabeledGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LabeledGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "LabeledGraph {{")?;
        for (vid, neighbors) in self.adjacency.iter() {
            writeln!(f, "{:?} {:?}:", vid, self.label(*vid))?;
            for n in neighbors {
                writeln!(f, "  -- {:?} {:?}", n, self.label(*n))?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl PartialEq for LabeledGraph {
    /// Equal when both graphs hold the same labels in the same order
    /// and every vertex has the same neighbor sequence.
    fn eq(&self, other: &Self) -> bool {
        self.adjacency.len() == other.adjacency.len()
            && self
                .iter_labels()
                .zip(other.iter_labels())
                .all(|(mine, theirs)| {
                    mine == theirs && self.neighbors(mine) == other.neighbors(theirs)
                })
    }
}

impl Eq for LabeledGraph {}

impl LabeledGraph {
    pub fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            labels: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a graph by adding each pair as an edge, creating vertices on demand.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut res = Self::new();
        for (u, v) in edges {
            res.add_edge(u.as_ref(), v.as_ref());
        }
        res
    }

    /// Adds a vertex unless it already exists.
    ///
    /// Any string is a label, the empty one included.
    pub fn add_vertex(&mut self, v: &str) {
        if let Err(e) = self.try_add_vertex(v) {
            debug!("add_vertex ignored: {}", e);
        }
    }

    pub fn try_add_vertex(&mut self, v: &str) -> GraphResult<()> {
        if self.labels.contains_right(v) {
            return Err(GraphError::DuplicateVertex(v.to_owned()));
        }
        let vid = self.vid_factory.one_more();
        self.labels.insert(vid, v.to_owned());
        self.adjacency.insert(vid, vec![]);
        trace!("added vertex {} as {:?}", v, vid);
        Ok(())
    }

    /// Connects `u` and `v`, creating either of them if missing.
    ///
    /// Does nothing for a self-loop or an edge that already exists.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        if let Err(e) = self.try_add_edge(u, v) {
            debug!("add_edge ignored: {}", e);
        }
    }

    pub fn try_add_edge(&mut self, u: &str, v: &str) -> GraphResult<()> {
        if u == v {
            return Err(GraphError::SelfLoop(u.to_owned()));
        }
        if self.contains_edge_by_label(u, v) {
            return Err(GraphError::DuplicateEdge(u.to_owned(), v.to_owned()));
        }
        let uid = self.ensure_vertex(u);
        let vid = self.ensure_vertex(v);
        self.link(uid, vid);
        trace!("added edge {} -- {}", u, v);
        Ok(())
    }

    /// Disconnects `u` and `v` if both exist and are adjacent.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if let Err(e) = self.try_remove_edge(u, v) {
            debug!("remove_edge ignored: {}", e);
        }
    }

    pub fn try_remove_edge(&mut self, u: &str, v: &str) -> GraphResult<()> {
        let uid = self.existing_id(u)?;
        let vid = self.existing_id(v)?;
        if !self.unlink(uid, vid) {
            return Err(GraphError::MissingEdge(u.to_owned(), v.to_owned()));
        }
        trace!("removed edge {} -- {}", u, v);
        Ok(())
    }

    /// Removes `v` together with every edge touching it.
    pub fn remove_vertex(&mut self, v: &str) {
        if let Err(e) = self.try_remove_vertex(v) {
            debug!("remove_vertex ignored: {}", e);
        }
    }

    pub fn try_remove_vertex(&mut self, v: &str) -> GraphResult<()> {
        let vid = self.existing_id(v)?;
        self.remove_vertex_by_id(vid);
        trace!("removed vertex {}", v);
        Ok(())
    }

    /// Labels in creation order.
    pub fn get_vertices(&self) -> Vec<String> {
        self.iter_labels().map(str::to_owned).collect()
    }

    /// Every edge exactly once.
    ///
    /// Walks a disposable copy: after the pairs of a vertex are emitted,
    /// the vertex is deleted from the copy so its edges are not seen again from the other end.
    pub fn get_edges(&self) -> Vec<LabeledEdge> {
        let mut scratch = self.copy_graph();
        let mut res = vec![];
        for vid in self.adjacency.keys() {
            if let (Some(a), Some(neighbors)) = (self.label(*vid), scratch.adjacency.get(vid)) {
                for n in neighbors {
                    if let Some(b) = self.label(*n) {
                        res.push(LabeledEdge::new(a, b));
                    }
                }
            }
            scratch.remove_vertex_by_id(*vid);
        }
        res
    }

    /// Neighbors of `v` in the order their edges were added.
    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        self.labels
            .get_by_right(v)
            .and_then(|vid| self.adjacency.get(vid))
            .map(|ns| ns.iter().filter_map(|n| self.label(*n)).collect())
            .unwrap_or_default()
    }

    pub fn degree(&self, v: &str) -> usize {
        self.labels
            .get_by_right(v)
            .and_then(|vid| self.adjacency.get(vid))
            .map_or(0, |ns| ns.len())
    }

    /// A deep copy sharing no storage with `self`.
    pub fn copy_graph(&self) -> Self {
        self.clone()
    }

    pub(crate) fn iter_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().filter_map(|vid| self.label(*vid))
    }

    fn label(&self, vid: VertexId) -> Option<&str> {
        self.labels.get_by_left(&vid).map(String::as_str)
    }

    fn existing_id(&self, v: &str) -> GraphResult<VertexId> {
        self.labels
            .get_by_right(v)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(v.to_owned()))
    }

    fn ensure_vertex(&mut self, v: &str) -> VertexId {
        if let Some(vid) = self.labels.get_by_right(v) {
            return *vid;
        }
        let vid = self.vid_factory.one_more();
        self.labels.insert(vid, v.to_owned());
        self.adjacency.insert(vid, vec![]);
        trace!("added vertex {} as {:?}", v, vid);
        vid
    }

    fn contains_edge_by_label(&self, u: &str, v: &str) -> bool {
        match (self.labels.get_by_right(u), self.labels.get_by_right(v)) {
            (Some(uid), Some(vid)) => self
                .adjacency
                .get(uid)
                .map_or(false, |ns| ns.contains(vid)),
            _ => false,
        }
    }

    fn link(&mut self, a: VertexId, b: VertexId) {
        if let Some(ns) = self.adjacency.get_mut(&a) {
            ns.push(b);
        }
        if let Some(ns) = self.adjacency.get_mut(&b) {
            ns.push(a);
        }
    }

    /// Returns whether there was an edge to remove.
    fn unlink(&mut self, a: VertexId, b: VertexId) -> bool {
        let removed_from_a = Self::remove_neighbor(&mut self.adjacency, a, b);
        let removed_from_b = Self::remove_neighbor(&mut self.adjacency, b, a);
        debug_assert_eq!(removed_from_a, removed_from_b);
        removed_from_a
    }

    fn remove_neighbor(
        adjacency: &mut BTreeMap<VertexId, Vec<VertexId>>,
        of: VertexId,
        neighbor: VertexId,
    ) -> bool {
        match adjacency.get_mut(&of) {
            Some(ns) => match ns.iter().position(|x| *x == neighbor) {
                Some(idx) => {
                    ns.remove(idx);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    fn remove_vertex_by_id(&mut self, vid: VertexId) {
        while let Some(n) = self.adjacency.get(&vid).and_then(|ns| ns.first()).copied() {
            self.unlink(vid, n);
        }
        self.adjacency.remove(&vid);
        self.labels.remove_by_left(&vid);
    }
}

impl<S: AsRef<str>> FromIterator<(S, S)> for LabeledGraph {
    fn from_iter<T: IntoIterator<Item = (S, S)>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}

impl QueryableGraph for LabeledGraph {
    type Vertex = String;

    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.iter_labels().map(str::to_owned))
    }

    fn contains_vertex(&self, v: &String) -> bool {
        self.labels.contains_right(v.as_str())
    }

    fn edge_size(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    fn contains_edge(&self, source: &String, sink: &String) -> bool {
        self.contains_edge_by_label(source, sink)
    }

    fn successors(&self, v: &String) -> Box<dyn Iterator<Item = String> + '_> {
        let mut heap: BinaryHeap<Reverse<&str>> = self.neighbors(v).into_iter().map(Reverse).collect();
        Box::new(std::iter::from_fn(move || {
            heap.pop().map(|Reverse(x)| x.to_owned())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::undirected::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn add_vertex_ignores_duplicates() {
        let mut g = LabeledGraph::new();
        for v in ["A", "B", "C", "D", "E"] {
            g.add_vertex(v);
        }
        g.add_vertex("A");
        assert_eq!(g.get_vertices(), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(
            g.try_add_vertex("A"),
            Err(GraphError::DuplicateVertex("A".to_string()))
        );
    }

    #[test]
    fn empty_label_is_an_ordinary_vertex() {
        let mut g = LabeledGraph::new();
        g.add_vertex("");
        g.add_edge("", "A");
        assert_eq!(g.get_vertices(), vec!["", "A"]);
        assert_eq!(g.get_edges(), vec![LabeledEdge::new("", "A")]);
        assert_eq!(g.neighbors(""), vec!["A"]);
        assert_eq!(
            g.try_add_vertex(""),
            Err(GraphError::DuplicateVertex(String::new()))
        );
        g.remove_vertex("");
        assert_eq!(g.get_vertices(), vec!["A"]);
        assert_eq!(g.degree("A"), 0);
    }

    #[test]
    fn add_edge_keeps_insertion_order() {
        let mut g = LabeledGraph::new();
        for v in ["A", "B", "C", "D", "E"] {
            g.add_vertex(v);
        }
        for (u, v) in [
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("C", "E"),
            ("D", "E"),
            ("B", "C"),
        ] {
            g.add_edge(u, v);
        }
        assert_eq!(g.neighbors("A"), vec!["B", "C"]);
        assert_eq!(g.neighbors("B"), vec!["A", "C", "D"]);
        assert_eq!(g.neighbors("C"), vec!["A", "B", "D", "E"]);
        assert_eq!(g.neighbors("D"), vec!["B", "C", "E"]);
        assert_eq!(g.neighbors("E"), vec!["C", "D"]);
        assert_eq!(g.edge_size(), 7);
    }

    #[test]
    fn add_edge_creates_missing_endpoints() {
        let mut g = LabeledGraph::new();
        g.add_edge("X", "Y");
        g.add_edge("Y", "Y");
        assert_eq!(g.get_vertices(), vec!["X", "Y"]);
        assert_eq!(
            g.try_add_edge("Y", "X"),
            Err(GraphError::DuplicateEdge("Y".to_string(), "X".to_string()))
        );
        assert_eq!(g.try_add_edge("Y", "Y"), Err(GraphError::SelfLoop("Y".to_string())));
    }

    #[test]
    fn remove_edge_and_vertex() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut g = sample_graph();
        g.remove_vertex("DOES NOT EXIST");
        g.remove_edge("A", "B");
        g.remove_edge("X", "B");
        assert_eq!(g.neighbors("A"), vec!["C"]);
        assert_eq!(g.neighbors("B"), vec!["C", "D"]);
        assert_eq!(
            g.try_remove_edge("A", "B"),
            Err(GraphError::MissingEdge("A".to_string(), "B".to_string()))
        );

        g.remove_vertex("D");
        assert_eq!(g.get_vertices(), vec!["A", "B", "C", "E"]);
        assert_eq!(g.neighbors("B"), vec!["C"]);
        assert_eq!(g.neighbors("C"), vec!["A", "B", "E"]);
        assert_eq!(g.neighbors("E"), vec!["C"]);
        assert_eq!(
            g.try_remove_vertex("D"),
            Err(GraphError::UnknownVertex("D".to_string()))
        );
    }

    #[test]
    fn re_added_vertex_moves_to_the_end() {
        let mut g = sample_graph();
        g.remove_vertex("A");
        g.add_vertex("A");
        assert_eq!(g.get_vertices(), vec!["B", "C", "D", "E", "A"]);
        assert_eq!(g.degree("A"), 0);
    }

    #[test]
    fn get_edges_reports_each_edge_once() {
        let g = LabeledGraph::from_edges([
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("C", "E"),
        ]);
        let trial: Vec<_> = g.get_edges().into_iter().map(|e| (e.a, e.b)).collect();
        let oracle: Vec<(String, String)> = [
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("C", "E"),
        ]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
        assert_eq!(trial, oracle);
        assert_eq!(LabeledGraph::new().get_edges(), vec![]);
        assert_eq!(LabeledGraph::new().get_vertices(), Vec::<String>::new());
    }

    #[test]
    fn copy_does_not_alias() {
        let g = sample_graph();
        let mut copy = g.copy_graph();
        assert_eq!(copy, g);
        copy.remove_vertex("C");
        copy.add_edge("A", "Z");
        assert_ne!(copy, g);
        assert_eq!(g.neighbors("C"), vec!["A", "B", "D", "E"]);
        assert_eq!(g.neighbors("A"), vec!["B", "C"]);
        assert!(!g.contains_vertex(&"Z".to_string()));
    }

    #[test]
    fn successors_ascend() {
        let mut g = LabeledGraph::new();
        for n in ["5", "2", "8"] {
            g.add_edge("0", n);
        }
        assert_eq!(g.neighbors("0"), vec!["5", "2", "8"]);
        assert_eq!(
            g.successors(&"0".to_string()).collect::<Vec<_>>(),
            vec!["2", "5", "8"]
        );
    }

    #[quickcheck]
    fn adjacency_is_symmetric(ops: Ops) {
        let g = ops.apply();
        for v in g.get_vertices() {
            let neighbors = g.neighbors(&v);
            assert!(!neighbors.contains(&v.as_str()));
            for n in neighbors.iter() {
                assert!(g.contains_vertex(&n.to_string()));
                assert!(g.neighbors(n).contains(&v.as_str()));
                assert_eq!(neighbors.iter().filter(|x| *x == n).count(), 1);
            }
        }
        assert_eq!(g.get_edges().len(), g.edge_size());
    }

    #[quickcheck]
    fn copies_compare_equal(ops: Ops) {
        let g = ops.apply();
        assert_eq!(g.copy_graph(), g);
    }
}
