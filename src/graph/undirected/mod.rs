//! Undirected graphs backed by adjacency lists.

mod labeled_list;
pub use self::labeled_list::*;

#[cfg(test)]
pub use self::tests::*;
