//! `cg-graph`: directed payload graph and shortest-path search.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`store`] | `Graph<N, E>`, `Node`, `Edge`                                 |
//! | [`path`]  | `shortest_distance`, `shortest_distance_between` (Dijkstra)   |
//! | [`error`] | `GraphError`, `GraphResult<T>`                                |
//!
//! The graph knows nothing about POIs or roads: node and edge payloads are
//! type parameters, instantiated by `cg-city`.

pub mod error;
pub mod path;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use path::{shortest_distance, shortest_distance_between};
pub use store::{Edge, Graph, Node};
