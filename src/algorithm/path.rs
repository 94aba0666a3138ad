use crate::graph::*;

pub trait ValidPath
where
    Self: QueryableGraph,
{
    /// Whether `path` can be walked edge by edge.
    ///
    /// The empty path is always valid; a single vertex is valid iff it is in the graph.
    fn is_valid_path(&self, path: &[Self::Vertex]) -> bool {
        match path {
            [] => true,
            [v] => self.contains_vertex(v),
            _ => path
                .windows(2)
                .all(|pair| self.contains_edge(&pair[0], &pair[1])),
        }
    }
}

impl<G: QueryableGraph> ValidPath for G {}
