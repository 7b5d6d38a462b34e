//! Handle validation and structural consistency checks.

use std::collections::HashSet;

use sg_core::{GraphId, SgError, SgResult};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeEntry, SparseGraph, VertexEntry};
use crate::handle::{EdgeId, VertexId};

impl<V, E, L> SparseGraph<V, E, L> {
    /// Check that `vertex` was minted by this graph and is still live.
    pub(crate) fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        self.vertex_entry(vertex).map(|_| ())
    }

    /// Check that `edge` was minted by this graph and is still live.
    pub(crate) fn check_edge(&self, edge: EdgeId) -> GraphResult<()> {
        self.edge_entry(edge).map(|_| ())
    }

    pub(crate) fn vertex_entry(&self, vertex: VertexId) -> GraphResult<&VertexEntry<V, L>> {
        self.check_vertex_owner(vertex)?;
        let graph = self.id;
        self.vertices
            .get(vertex.slot, vertex.generation)
            .ok_or_else(|| stale_vertex(graph, vertex))
    }

    pub(crate) fn vertex_entry_mut(
        &mut self,
        vertex: VertexId,
    ) -> GraphResult<&mut VertexEntry<V, L>> {
        self.check_vertex_owner(vertex)?;
        let graph = self.id;
        self.vertices
            .get_mut(vertex.slot, vertex.generation)
            .ok_or_else(|| stale_vertex(graph, vertex))
    }

    pub(crate) fn edge_entry(&self, edge: EdgeId) -> GraphResult<&EdgeEntry<E, L>> {
        self.check_edge_owner(edge)?;
        let graph = self.id;
        self.edges
            .get(edge.slot, edge.generation)
            .ok_or_else(|| stale_edge(graph, edge))
    }

    pub(crate) fn edge_entry_mut(&mut self, edge: EdgeId) -> GraphResult<&mut EdgeEntry<E, L>> {
        self.check_edge_owner(edge)?;
        let graph = self.id;
        self.edges
            .get_mut(edge.slot, edge.generation)
            .ok_or_else(|| stale_edge(graph, edge))
    }

    fn check_vertex_owner(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex.graph == self.id {
            return Ok(());
        }
        debug!(graph = %self.id, %vertex, owner = %vertex.graph, "rejected foreign vertex");
        Err(GraphError::ForeignVertex {
            vertex,
            owner: vertex.graph,
            graph: self.id,
        })
    }

    fn check_edge_owner(&self, edge: EdgeId) -> GraphResult<()> {
        if edge.graph == self.id {
            return Ok(());
        }
        debug!(graph = %self.id, %edge, owner = %edge.graph, "rejected foreign edge");
        Err(GraphError::ForeignEdge {
            edge,
            owner: edge.graph,
            graph: self.id,
        })
    }

    /// True if `vertex` belongs to this graph and has not been removed.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.graph == self.id && self.vertices.get(vertex.slot, vertex.generation).is_some()
    }

    /// True if `edge` belongs to this graph and has not been removed.
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.graph == self.id && self.edges.get(edge.slot, edge.generation).is_some()
    }

    /// Verify the incidence structure.
    ///
    /// Every live edge must appear exactly once in the edge sequence, in its
    /// from-vertex's outgoing list and in its to-vertex's incoming list, and
    /// nowhere else. Also checks the no-self-loop and no-parallel-edge rules.
    pub fn check_invariants(&self) -> SgResult<()> {
        if self.vertex_order.len() != self.vertices.len() {
            return Err(SgError::invariant(format!(
                "vertex sequence has {} entries but {} vertices are stored",
                self.vertex_order.len(),
                self.vertices.len()
            )));
        }
        if self.edge_order.len() != self.edges.len() {
            return Err(SgError::invariant(format!(
                "edge sequence has {} entries but {} edges are stored",
                self.edge_order.len(),
                self.edges.len()
            )));
        }

        let mut seen_edges: HashSet<EdgeId> = HashSet::new();
        let mut pairs: HashSet<(VertexId, VertexId)> = HashSet::new();
        for &edge in &self.edge_order {
            if !seen_edges.insert(edge) {
                return Err(SgError::invariant(format!("edge {edge} listed twice")));
            }
            let entry = self
                .edge_entry(edge)
                .map_err(|err| SgError::invariant(err.to_string()))?;
            if entry.from == entry.to {
                return Err(SgError::invariant(format!("edge {edge} is a self-loop")));
            }
            if !pairs.insert((entry.from, entry.to)) {
                return Err(SgError::invariant(format!(
                    "parallel edge {} -> {}",
                    entry.from, entry.to
                )));
            }
        }

        let mut seen_vertices: HashSet<VertexId> = HashSet::new();
        let mut outgoing_total = 0;
        let mut incoming_total = 0;
        for &vertex in &self.vertex_order {
            if !seen_vertices.insert(vertex) {
                return Err(SgError::invariant(format!("vertex {vertex} listed twice")));
            }
            let entry = self
                .vertex_entry(vertex)
                .map_err(|err| SgError::invariant(err.to_string()))?;

            for &edge in &entry.outgoing {
                let edge_entry = self
                    .edge_entry(edge)
                    .map_err(|err| SgError::invariant(err.to_string()))?;
                if edge_entry.from != vertex {
                    return Err(SgError::invariant(format!(
                        "edge {edge} in outgoing list of {vertex} but starts at {}",
                        edge_entry.from
                    )));
                }
            }
            for &edge in &entry.incoming {
                let edge_entry = self
                    .edge_entry(edge)
                    .map_err(|err| SgError::invariant(err.to_string()))?;
                if edge_entry.to != vertex {
                    return Err(SgError::invariant(format!(
                        "edge {edge} in incoming list of {vertex} but ends at {}",
                        edge_entry.to
                    )));
                }
            }
            outgoing_total += entry.outgoing.len();
            incoming_total += entry.incoming.len();
        }

        // Each edge sits in one outgoing and one incoming list.
        if outgoing_total != self.edge_order.len() || incoming_total != self.edge_order.len() {
            return Err(SgError::invariant(format!(
                "{} edges but {outgoing_total} outgoing and {incoming_total} incoming entries",
                self.edge_order.len()
            )));
        }

        Ok(())
    }
}

fn stale_vertex(graph: GraphId, vertex: VertexId) -> GraphError {
    debug!(%graph, %vertex, "rejected stale vertex");
    GraphError::StaleVertex { vertex }
}

fn stale_edge(graph: GraphId, edge: EdgeId) -> GraphError {
    debug!(%graph, %edge, "rejected stale edge");
    GraphError::StaleEdge { edge }
}
