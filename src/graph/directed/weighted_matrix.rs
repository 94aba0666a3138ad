use crate::{graph::*, GraphError, GraphResult};
use log::{debug, trace};

/// A directed graph with non-negative integer weights, stored as a dense adjacency matrix.
///
/// Cell `[i][j]` holds the weight of the edge from `i` to `j`; `0` means there is no edge.
/// Consequently an edge written with weight `0` cannot be told apart from a missing one.
///
/// | Operation         | Complexity      |
/// | ----------------- | --------------- |
/// | `add_vertex`      | O(\|V\|)        |
/// | `add_edge`        | O(1)            |
/// | `remove_edge`     | O(1)            |
/// | `contains_edge`   | O(1)            |
/// | `successors`      | O(\|V\|)        |
/// | `get_edges`       | O(\|V\|^2)      |
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WeightedDigraph {
    matrix: Vec<Vec<Weight>>,
}

impl std::fmt::Debug for WeightedDigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WeightedDigraph {{")?;
        for e in self.get_edges() {
            writeln!(f, "  {:?} -> {:?} by {}", e.source, e.sink, e.weight)?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl WeightedDigraph {
    pub fn new() -> Self {
        Self { matrix: vec![] }
    }

    /// Builds a graph from `(source, sink, weight)` triples.
    ///
    /// The vertex count is one past the largest index mentioned, so an empty list
    /// still yields the single vertex `0`.
    /// Triples are then added one by one, so invalid ones are skipped as `add_edge` would.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let vertex_size = edges
            .iter()
            .map(|(src, snk, _)| usize::max(*src, *snk))
            .max()
            .unwrap_or(0)
            + 1;
        let mut res = Self::new();
        for _ in 0..vertex_size {
            res.add_vertex();
        }
        for (src, snk, weight) in edges {
            res.add_edge(VertexId::new(src), VertexId::new(snk), weight);
        }
        res
    }

    /// Appends a vertex without any edges and returns the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        let vertex_size = self.matrix.len() + 1;
        for row in self.matrix.iter_mut() {
            row.push(0);
        }
        self.matrix.push(vec![0; vertex_size]);
        trace!("added vertex {}", vertex_size - 1);
        vertex_size
    }

    /// Adds or overwrites the edge from `source` to `sink`.
    ///
    /// Does nothing on a negative weight, a self-loop or an unknown vertex.
    pub fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: i64) {
        if let Err(e) = self.try_add_edge(source, sink, weight) {
            debug!("add_edge ignored: {}", e);
        }
    }

    /// `add_edge` with the default weight.
    pub fn add_unit_edge(&mut self, source: VertexId, sink: VertexId) {
        self.add_edge(source, sink, DEFAULT_WEIGHT);
    }

    pub fn try_add_edge(&mut self, source: VertexId, sink: VertexId, weight: i64) -> GraphResult<()> {
        let weight = Weight::try_from(weight).map_err(|_| GraphError::NegativeWeight(weight))?;
        self.check_pair(source, sink)?;
        if weight == 0 {
            debug!(
                "edge {} -> {} written with weight 0 reads back as no edge",
                source, sink
            );
        }
        self.matrix[source.to_raw()][sink.to_raw()] = weight;
        trace!("set edge {} -> {} to {}", source, sink, weight);
        Ok(())
    }

    /// Removes the edge from `source` to `sink`, if any.
    pub fn remove_edge(&mut self, source: VertexId, sink: VertexId) {
        if let Err(e) = self.try_remove_edge(source, sink) {
            debug!("remove_edge ignored: {}", e);
        }
    }

    /// Clears the cell from `source` to `sink`.
    ///
    /// Clearing a cell that holds no edge is not an error.
    pub fn try_remove_edge(&mut self, source: VertexId, sink: VertexId) -> GraphResult<()> {
        self.check_pair(source, sink)?;
        self.matrix[source.to_raw()][sink.to_raw()] = 0;
        trace!("cleared edge {} -> {}", source, sink);
        Ok(())
    }

    pub fn get_vertices(&self) -> Vec<VertexId> {
        self.iter_vertices().collect()
    }

    /// Every edge, rows first and columns second.
    pub fn get_edges(&self) -> Vec<WeightedEdge> {
        self.iter_edges().collect()
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.matrix.iter().enumerate().flat_map(|(src, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, w)| **w != 0)
                .map(move |(snk, w)| WeightedEdge {
                    source: VertexId::new(src),
                    sink: VertexId::new(snk),
                    weight: *w,
                })
        })
    }

    /// Weight of the edge from `source` to `sink`, or `None` if there is none.
    pub fn weight(&self, source: VertexId, sink: VertexId) -> Option<Weight> {
        self.matrix
            .get(source.to_raw())
            .and_then(|row| row.get(sink.to_raw()))
            .copied()
            .filter(|w| *w != 0)
    }

    pub(crate) fn row(&self, v: VertexId) -> Option<&[Weight]> {
        self.matrix.get(v.to_raw()).map(|row| row.as_slice())
    }

    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if v.to_raw() < self.matrix.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                size: self.matrix.len(),
            })
        }
    }

    fn check_pair(&self, source: VertexId, sink: VertexId) -> GraphResult<()> {
        if source == sink {
            return Err(GraphError::SelfLoop(source.to_string()));
        }
        self.check_vertex(source)?;
        self.check_vertex(sink)
    }
}

impl FromIterator<(usize, usize, i64)> for WeightedDigraph {
    fn from_iter<T: IntoIterator<Item = (usize, usize, i64)>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}

impl QueryableGraph for WeightedDigraph {
    type Vertex = VertexId;

    fn vertex_size(&self) -> usize {
        self.matrix.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.matrix.len()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.matrix.len()
    }

    fn edge_size(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|w| **w != 0).count())
            .sum()
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.weight(*source, *sink).is_some()
    }

    fn successors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.row(*v) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| **w != 0)
                    .map(|(snk, _)| VertexId::new(snk)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl WeightedGraph for WeightedDigraph {
    fn weight(&self, source: &VertexId, sink: &VertexId) -> Option<Weight> {
        WeightedDigraph::weight(self, *source, *sink)
    }
}
