use super::VertexId;

/// Weight stored in a matrix cell. `0` stands for "no edge".
pub type Weight = u64;

/// Weight given to edges added without an explicit one.
pub const DEFAULT_WEIGHT: i64 = 1;

/// A directed edge of a `WeightedDigraph`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: Weight,
}

impl From<WeightedEdge> for (usize, usize, Weight) {
    fn from(e: WeightedEdge) -> Self {
        (e.source.to_raw(), e.sink.to_raw(), e.weight)
    }
}

/// An undirected edge of a `LabeledGraph`, reported once per pair.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct LabeledEdge {
    pub a: String,
    pub b: String,
}

impl LabeledEdge {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// Length of a shortest path.
///
/// `Finite` orders before `Infinite`, so comparisons work as expected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(x) => Some(*x),
            Distance::Infinite => None,
        }
    }
}

impl From<Weight> for Distance {
    fn from(x: Weight) -> Self {
        Distance::Finite(x)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(x) => write!(f, "{}", x),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
