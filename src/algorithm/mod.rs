//! Graph algorithms
mod traversal;
pub use self::traversal::*;
mod path;
pub use self::path::*;
mod components;
pub use self::components::*;
mod dijkstra;
pub use self::dijkstra::*;
mod cycle;
pub use self::cycle::*;
