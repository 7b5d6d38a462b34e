//! Vertex and edge handles.
//!
//! A handle is a `Copy` token naming one slot in one container. It records the
//! container that minted it and the slot generation at the time, so the
//! container can reject handles from other instances and handles to removed
//! entities.

use core::fmt;
use sg_core::{GraphId, Id};

/// Handle to a vertex of a [`SparseGraph`](crate::SparseGraph).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId {
    pub(crate) graph: GraphId,
    pub(crate) slot: Id,
    pub(crate) generation: u32,
}

/// Handle to an edge of a [`SparseGraph`](crate::SparseGraph).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    pub(crate) graph: GraphId,
    pub(crate) slot: Id,
    pub(crate) generation: u32,
}

impl VertexId {
    /// The graph that minted this handle.
    pub fn graph(self) -> GraphId {
        self.graph
    }

    pub fn slot(self) -> Id {
        self.slot
    }
}

impl EdgeId {
    /// The graph that minted this handle.
    pub fn graph(self) -> GraphId {
        self.graph
    }

    pub fn slot(self) -> Id {
        self.slot
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({}, {}#{})", self.graph, self.slot, self.generation)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}#{}@{}", self.slot, self.generation, self.graph)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}, {}#{})", self.graph, self.slot, self.generation)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}#{}@{}", self.slot, self.generation, self.graph)
    }
}
