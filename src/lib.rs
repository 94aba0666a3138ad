//! Two small in-memory graph engines and the algorithms over them.
//!
//! # `WeightedDigraph`
//!
//! A directed graph with non-negative integer weights, stored as a dense adjacency matrix.
//! Vertices are contiguous `VertexId`'s assigned at creation time.
//! They are never renamed or removed; only edges come and go.
//!
//! # `LabeledGraph`
//!
//! An undirected, unweighted graph whose vertices are string labels, stored as adjacency lists.
//! Neighbor sequences keep insertion order and the graph stays symmetric.
//!
//! # Permissive mutation
//!
//! Mutators given invalid input leave the graph untouched and report nothing.
//! Each of them has a `try_*` twin returning a [GraphError] for callers that care why.
//!
//! # Algorithms
//!
//! Traversals, path validation, connected components and Dijkstra live in [algorithm]
//! as traits with blanket implementations over [graph::QueryableGraph].

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
