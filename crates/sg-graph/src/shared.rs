//! Thread-shareable wrapper around [`SparseGraph`].
//!
//! The container itself is single-threaded. `SharedGraph` puts one
//! `RwLock` around it: any number of readers or one writer at a time.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::error::{GraphError, GraphResult};
use crate::graph::SparseGraph;
use crate::handle::{EdgeId, VertexId};

/// Cloneable, lock-guarded handle to one graph.
///
/// Clones share the same graph, so handles minted through any clone are
/// accepted by all of them.
pub struct SharedGraph<V, E, L = ()> {
    inner: Arc<RwLock<SparseGraph<V, E, L>>>,
}

impl<V, E, L> Clone for SharedGraph<V, E, L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, E, L> Default for SharedGraph<V, E, L> {
    fn default() -> Self {
        Self::new(SparseGraph::new())
    }
}

impl<V, E, L> From<SparseGraph<V, E, L>> for SharedGraph<V, E, L> {
    fn from(graph: SparseGraph<V, E, L>) -> Self {
        Self::new(graph)
    }
}

impl<V, E, L> SharedGraph<V, E, L> {
    pub fn new(graph: SparseGraph<V, E, L>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Run `f` under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&SparseGraph<V, E, L>) -> R) -> GraphResult<R> {
        let guard = self.inner.read().map_err(|_| GraphError::Poisoned)?;
        Ok(f(&guard))
    }

    /// Run `f` under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut SparseGraph<V, E, L>) -> R) -> GraphResult<R> {
        let mut guard = self.inner.write().map_err(|_| GraphError::Poisoned)?;
        Ok(f(&mut guard))
    }

    pub fn insert_vertex(&self, value: V) -> GraphResult<VertexId> {
        self.write(|g| g.insert_vertex(value))
    }

    pub fn insert_edge(&self, from: VertexId, to: VertexId, value: E) -> GraphResult<EdgeId> {
        self.write(|g| g.insert_edge(from, to, value))?
    }

    pub fn remove_vertex(&self, vertex: VertexId) -> GraphResult<V> {
        self.write(|g| g.remove_vertex(vertex))?
    }

    pub fn remove_edge(&self, edge: EdgeId) -> GraphResult<E> {
        self.write(|g| g.remove_edge(edge))?
    }

    pub fn label_vertex(&self, vertex: VertexId, label: impl Into<Option<L>>) -> GraphResult<()> {
        self.write(|g| g.label_vertex(vertex, label))?
    }

    pub fn label_edge(&self, edge: EdgeId, label: impl Into<Option<L>>) -> GraphResult<()> {
        self.write(|g| g.label_edge(edge, label))?
    }

    pub fn clear_labels(&self) -> GraphResult<()> {
        self.write(|g| g.clear_labels())
    }

    /// Snapshot of the live vertices in insertion order.
    pub fn vertices(&self) -> GraphResult<Vec<VertexId>> {
        self.read(|g| g.vertices().to_vec())
    }

    /// Snapshot of the live edges in insertion order.
    pub fn edges(&self) -> GraphResult<Vec<EdgeId>> {
        self.read(|g| g.edges().to_vec())
    }

    /// Take the graph back out if this is the last clone.
    pub fn try_unwrap(self) -> Result<SparseGraph<V, E, L>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner().map_err(|poisoned| Self::new(poisoned.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<V: fmt::Display, E: fmt::Display, L> SharedGraph<V, E, L> {
    pub fn render(&self) -> GraphResult<String> {
        self.read(|g| g.render())
    }
}

impl<V: fmt::Debug, E: fmt::Debug, L: fmt::Debug> fmt::Debug for SharedGraph<V, E, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedGraph").field("inner", &self.inner).finish()
    }
}
