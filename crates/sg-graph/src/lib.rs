//! sg-graph: the sparse directed graph container.
//!
//! Provides:
//! - `SparseGraph`, a directed graph without self-loops or parallel edges
//! - `VertexId` / `EdgeId` handles bound to the graph instance that minted them
//! - optional per-vertex and per-edge labels
//! - DOT-style rendering
//! - `SharedGraph`, a lock-guarded wrapper for use across threads
//!
//! # Example
//!
//! ```
//! use sg_graph::SparseGraph;
//!
//! let mut graph: SparseGraph<&str, u32> = SparseGraph::new();
//! let a = graph.insert_vertex("A");
//! let b = graph.insert_vertex("B");
//! let ab = graph.insert_edge(a, b, 1).unwrap();
//!
//! assert_eq!(graph.outgoing(a).unwrap(), &[ab]);
//! assert!(graph.insert_edge(a, a, 2).is_err());
//! assert_eq!(
//!     graph.render(),
//!     "digraph {\n  \"A\";\n  \"B\";\n  \"A\" -> \"B\" [label=\"1\"];\n}"
//! );
//! ```

pub mod error;
pub mod graph;
pub mod handle;
mod render;
pub mod shared;
mod slots;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::SparseGraph;
pub use handle::{EdgeId, VertexId};
pub use shared::SharedGraph;
