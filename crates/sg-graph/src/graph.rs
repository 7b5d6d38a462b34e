//! Core graph container.

use sg_core::GraphId;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::handle::{EdgeId, VertexId};
use crate::slots::Slots;

/// Stored state of one vertex.
#[derive(Debug)]
pub(crate) struct VertexEntry<V, L> {
    pub(crate) value: V,
    pub(crate) label: Option<L>,
    /// Edges leaving this vertex, in insertion order.
    pub(crate) outgoing: Vec<EdgeId>,
    /// Edges arriving at this vertex, in insertion order.
    pub(crate) incoming: Vec<EdgeId>,
}

/// Stored state of one edge.
#[derive(Debug)]
pub(crate) struct EdgeEntry<E, L> {
    pub(crate) value: E,
    pub(crate) label: Option<L>,
    pub(crate) from: VertexId,
    pub(crate) to: VertexId,
}

/// A directed graph for sparse data.
///
/// Vertices hold a `V`, edges hold an `E`, and both can carry an optional
/// label of type `L`. Entities are addressed through [`VertexId`] and
/// [`EdgeId`] handles that are only accepted by the instance that created them.
///
/// The graph allows at most one edge per ordered vertex pair and no
/// self-loops. Vertices, edges and each vertex's incidence lists iterate in
/// insertion order.
///
/// Not `Clone`: a copy would share this instance's identity and accept its
/// handles.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `insert_vertex` | O(1) amortized |
/// | `insert_edge` | O(out-degree) duplicate scan |
/// | `remove_vertex` | O(n) order compaction |
/// | `remove_edge` | O(m + out-degree + in-degree) |
/// | labels | O(1) |
/// | `render` | O(n + m) |
#[derive(Debug)]
pub struct SparseGraph<V, E, L = ()> {
    pub(crate) id: GraphId,
    pub(crate) vertices: Slots<VertexEntry<V, L>>,
    pub(crate) edges: Slots<EdgeEntry<E, L>>,
    pub(crate) vertex_order: Vec<VertexId>,
    pub(crate) edge_order: Vec<EdgeId>,
}

impl<V, E, L> Default for SparseGraph<V, E, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, L> SparseGraph<V, E, L> {
    /// Create an empty graph with a fresh identity.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            id: GraphId::next(),
            vertices: Slots::with_capacity(vertices),
            edges: Slots::with_capacity(edges),
            vertex_order: Vec::with_capacity(vertices),
            edge_order: Vec::with_capacity(edges),
        }
    }

    /// Identity of this instance; every handle it mints carries it.
    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_order.is_empty()
    }

    /// Insert a vertex holding `value`.
    ///
    /// # Panics
    /// Panics if the vertex arena has no slot left to hand out (more than
    /// `u32::MAX - 1` slots ever minted).
    pub fn insert_vertex(&mut self, value: V) -> VertexId {
        let (slot, generation) = self.vertices.insert(VertexEntry {
            value,
            label: None,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        let vertex = VertexId {
            graph: self.id,
            slot,
            generation,
        };
        self.vertex_order.push(vertex);
        debug!(graph = %self.id, %vertex, "inserted vertex");
        vertex
    }

    /// Insert a directed edge `from -> to` holding `value`.
    ///
    /// Fails if either handle is invalid, if `from == to`, or if an edge
    /// `from -> to` already exists. The reverse edge `to -> from` is allowed.
    ///
    /// # Panics
    /// Panics if the edge arena has no slot left to hand out.
    pub fn insert_edge(&mut self, from: VertexId, to: VertexId, value: E) -> GraphResult<EdgeId> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if from == to {
            debug!(graph = %self.id, vertex = %from, "rejected self-loop");
            return Err(GraphError::SelfLoop { vertex: from });
        }
        if let Some(existing) = self.scan_outgoing(from, to) {
            debug!(graph = %self.id, %from, %to, "rejected duplicate edge");
            return Err(GraphError::DuplicateEdge { from, to, existing });
        }

        let (slot, generation) = self.edges.insert(EdgeEntry {
            value,
            label: None,
            from,
            to,
        });
        let edge = EdgeId {
            graph: self.id,
            slot,
            generation,
        };
        self.edge_order.push(edge);
        self.vertex_entry_mut(from)?.outgoing.push(edge);
        self.vertex_entry_mut(to)?.incoming.push(edge);
        debug!(graph = %self.id, %edge, %from, %to, "inserted edge");
        Ok(edge)
    }

    /// Remove an isolated vertex and return its value.
    ///
    /// Fails if the vertex still has incoming or outgoing edges; remove those
    /// first. The handle is invalid afterwards.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> GraphResult<V> {
        let entry = self.vertex_entry(vertex)?;
        let (outgoing, incoming) = (entry.outgoing.len(), entry.incoming.len());
        if outgoing > 0 || incoming > 0 {
            debug!(
                graph = %self.id,
                %vertex,
                outgoing,
                incoming,
                "rejected removal of connected vertex"
            );
            return Err(GraphError::VertexHasEdges {
                vertex,
                outgoing,
                incoming,
            });
        }

        let entry = self
            .vertices
            .remove(vertex.slot, vertex.generation)
            .ok_or(GraphError::StaleVertex { vertex })?;
        if let Some(pos) = self.vertex_order.iter().position(|&v| v == vertex) {
            self.vertex_order.remove(pos);
        }
        debug!(graph = %self.id, %vertex, "removed vertex");
        Ok(entry.value)
    }

    /// Remove an edge and return its value.
    ///
    /// The edge is detached from the edge sequence and from both endpoints'
    /// incidence lists. The handle is invalid afterwards.
    pub fn remove_edge(&mut self, edge: EdgeId) -> GraphResult<E> {
        self.check_edge(edge)?;
        let entry = self
            .edges
            .remove(edge.slot, edge.generation)
            .ok_or(GraphError::StaleEdge { edge })?;

        if let Some(pos) = self.edge_order.iter().position(|&e| e == edge) {
            self.edge_order.remove(pos);
        }
        if let Some(from) = self.vertices.get_mut(entry.from.slot, entry.from.generation) {
            from.outgoing.retain(|&e| e != edge);
        }
        if let Some(to) = self.vertices.get_mut(entry.to.slot, entry.to.generation) {
            to.incoming.retain(|&e| e != edge);
        }
        debug!(graph = %self.id, %edge, "removed edge");
        Ok(entry.value)
    }

    /// Live vertices in insertion order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertex_order
    }

    /// Live edges in insertion order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edge_order
    }

    /// Edges leaving `vertex`, in insertion order.
    pub fn outgoing(&self, vertex: VertexId) -> GraphResult<&[EdgeId]> {
        Ok(&self.vertex_entry(vertex)?.outgoing)
    }

    /// Edges arriving at `vertex`, in insertion order.
    pub fn incoming(&self, vertex: VertexId) -> GraphResult<&[EdgeId]> {
        Ok(&self.vertex_entry(vertex)?.incoming)
    }

    /// Start vertex of `edge`.
    pub fn from(&self, edge: EdgeId) -> GraphResult<VertexId> {
        Ok(self.edge_entry(edge)?.from)
    }

    /// End vertex of `edge`.
    pub fn to(&self, edge: EdgeId) -> GraphResult<VertexId> {
        Ok(self.edge_entry(edge)?.to)
    }

    /// The edge `from -> to`, if there is one.
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> GraphResult<Option<EdgeId>> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.scan_outgoing(from, to))
    }

    pub fn vertex(&self, vertex: VertexId) -> GraphResult<&V> {
        Ok(&self.vertex_entry(vertex)?.value)
    }

    pub fn vertex_mut(&mut self, vertex: VertexId) -> GraphResult<&mut V> {
        Ok(&mut self.vertex_entry_mut(vertex)?.value)
    }

    pub fn edge(&self, edge: EdgeId) -> GraphResult<&E> {
        Ok(&self.edge_entry(edge)?.value)
    }

    pub fn edge_mut(&mut self, edge: EdgeId) -> GraphResult<&mut E> {
        Ok(&mut self.edge_entry_mut(edge)?.value)
    }

    /// Attach a label to `vertex`, replacing any previous one.
    ///
    /// Accepts either a bare `L` or an `Option<L>`; `None` is rejected with
    /// [`GraphError::NullLabel`] and leaves the current label untouched.
    pub fn label_vertex(
        &mut self,
        vertex: VertexId,
        label: impl Into<Option<L>>,
    ) -> GraphResult<()> {
        let graph = self.id;
        let entry = self.vertex_entry_mut(vertex)?;
        let Some(label) = label.into() else {
            debug!(%graph, %vertex, "rejected null vertex label");
            return Err(GraphError::NullLabel);
        };
        entry.label = Some(label);
        Ok(())
    }

    /// Attach a label to `edge`, replacing any previous one.
    ///
    /// `None` is rejected with [`GraphError::NullLabel`].
    pub fn label_edge(&mut self, edge: EdgeId, label: impl Into<Option<L>>) -> GraphResult<()> {
        let graph = self.id;
        let entry = self.edge_entry_mut(edge)?;
        let Some(label) = label.into() else {
            debug!(%graph, %edge, "rejected null edge label");
            return Err(GraphError::NullLabel);
        };
        entry.label = Some(label);
        Ok(())
    }

    /// Current label of `vertex`; `Ok(None)` if it has none.
    pub fn vertex_label(&self, vertex: VertexId) -> GraphResult<Option<&L>> {
        Ok(self.vertex_entry(vertex)?.label.as_ref())
    }

    /// Current label of `edge`; `Ok(None)` if it has none.
    pub fn edge_label(&self, edge: EdgeId) -> GraphResult<Option<&L>> {
        Ok(self.edge_entry(edge)?.label.as_ref())
    }

    /// Drop the labels of every vertex and edge.
    pub fn clear_labels(&mut self) {
        for entry in self.vertices.values_mut() {
            entry.label = None;
        }
        for entry in self.edges.values_mut() {
            entry.label = None;
        }
    }

    /// Linear scan of `from`'s outgoing list for an edge ending at `to`.
    fn scan_outgoing(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let entry = self.vertices.get(from.slot, from.generation)?;
        entry.outgoing.iter().copied().find(|e| {
            self.edges
                .get(e.slot, e.generation)
                .is_some_and(|edge| edge.to == to)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> (SparseGraph<&'static str, &'static str>, [VertexId; 4]) {
        let mut g = SparseGraph::new();
        let peter = g.insert_vertex("Peter");
        let andy = g.insert_vertex("Andy");
        let vincent = g.insert_vertex("Vincent");
        let tom = g.insert_vertex("Tom");
        (g, [peter, andy, vincent, tom])
    }

    #[test]
    fn vertices_keep_insertion_order() {
        let (g, ids) = people();
        assert_eq!(g.vertices(), &ids);
        let values: Vec<_> = g.vertices().iter().map(|&v| *g.vertex(v).unwrap()).collect();
        assert_eq!(values, ["Peter", "Andy", "Vincent", "Tom"]);
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn edge_endpoints() {
        let (mut g, [peter, andy, vincent, tom]) = people();
        let e1 = g.insert_edge(peter, andy, "1").unwrap();
        let e2 = g.insert_edge(vincent, tom, "2").unwrap();
        let e3 = g.insert_edge(tom, vincent, "3").unwrap();

        assert_eq!(g.edges(), &[e1, e2, e3]);
        assert_eq!(g.from(e1).unwrap(), peter);
        assert_eq!(g.to(e1).unwrap(), andy);
        assert_eq!(g.from(e3).unwrap(), tom);
        assert_eq!(g.to(e3).unwrap(), vincent);
        assert_eq!(*g.edge(e2).unwrap(), "2");
    }

    #[test]
    fn self_loop_rejected() {
        let (mut g, [peter, ..]) = people();
        let err = g.insert_edge(peter, peter, "x").unwrap_err();
        assert_eq!(err, GraphError::SelfLoop { vertex: peter });
        assert_eq!(g.edge_count(), 0);
        assert!(g.outgoing(peter).unwrap().is_empty());
    }

    #[test]
    fn duplicate_edge_rejected_but_reverse_allowed() {
        let (mut g, [peter, andy, ..]) = people();
        let e1 = g.insert_edge(peter, andy, "1").unwrap();
        let err = g.insert_edge(peter, andy, "again").unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateEdge {
                from: peter,
                to: andy,
                existing: e1
            }
        );
        assert!(g.insert_edge(andy, peter, "back").is_ok());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn vertex_with_edges_cannot_be_removed() {
        let (mut g, [peter, andy, vincent, _]) = people();
        g.insert_edge(peter, andy, "1").unwrap();

        let err = g.remove_vertex(andy).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexHasEdges {
                vertex: andy,
                outgoing: 0,
                incoming: 1
            }
        );
        assert!(g.vertices().contains(&andy));

        assert_eq!(g.remove_vertex(vincent).unwrap(), "Vincent");
        assert!(!g.vertices().contains(&vincent));
    }

    #[test]
    fn remove_edge_purges_incidence_lists() {
        let (mut g, [peter, andy, vincent, _]) = people();
        let e1 = g.insert_edge(peter, andy, "1").unwrap();
        let e2 = g.insert_edge(peter, vincent, "2").unwrap();

        assert_eq!(g.remove_edge(e1).unwrap(), "1");
        assert_eq!(g.edges(), &[e2]);
        assert_eq!(g.outgoing(peter).unwrap(), &[e2]);
        assert!(g.incoming(andy).unwrap().is_empty());

        assert_eq!(g.remove_vertex(andy).unwrap(), "Andy");
    }

    #[test]
    fn find_edge_scans_outgoing() {
        let (mut g, [peter, andy, vincent, _]) = people();
        let e1 = g.insert_edge(peter, andy, "1").unwrap();
        assert_eq!(g.find_edge(peter, andy).unwrap(), Some(e1));
        assert_eq!(g.find_edge(andy, peter).unwrap(), None);
        assert_eq!(g.find_edge(peter, vincent).unwrap(), None);
    }

    #[test]
    fn values_are_mutable_through_handles() {
        let (mut g, [peter, andy, ..]) = people();
        let e = g.insert_edge(peter, andy, "1").unwrap();
        *g.vertex_mut(peter).unwrap() = "Pete";
        *g.edge_mut(e).unwrap() = "one";
        assert_eq!(*g.vertex(peter).unwrap(), "Pete");
        assert_eq!(*g.edge(e).unwrap(), "one");
    }

    #[test]
    fn labels_set_get_clear() {
        let mut g: SparseGraph<&str, &str, u32> = SparseGraph::new();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        let e = g.insert_edge(a, b, "ab").unwrap();

        assert_eq!(g.vertex_label(a).unwrap(), None);
        assert_eq!(g.label_vertex(a, None::<u32>), Err(GraphError::NullLabel));
        assert_eq!(g.label_edge(e, None::<u32>), Err(GraphError::NullLabel));

        g.label_vertex(a, 7_u32).unwrap();
        g.label_vertex(a, Some(8_u32)).unwrap();
        g.label_edge(e, 9_u32).unwrap();
        assert_eq!(g.vertex_label(a).unwrap(), Some(&8));
        assert_eq!(g.edge_label(e).unwrap(), Some(&9));

        // A rejected label keeps the previous one.
        assert!(g.label_vertex(a, None::<u32>).is_err());
        assert_eq!(g.vertex_label(a).unwrap(), Some(&8));

        g.clear_labels();
        assert_eq!(g.vertex_label(a).unwrap(), None);
        assert_eq!(g.vertex_label(b).unwrap(), None);
        assert_eq!(g.edge_label(e).unwrap(), None);
    }

    #[test]
    fn empty_graph() {
        let g: SparseGraph<i32, i32> = SparseGraph::default();
        assert!(g.is_empty());
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }
}
