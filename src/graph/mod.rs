//! The two graph engines and the traits they share.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod render;
pub use self::render::*;

pub mod directed;
pub use self::directed::WeightedDigraph;
pub mod undirected;
pub use self::undirected::LabeledGraph;
