//! Graph-specific error types.

use sg_core::{GraphId, SgError};
use thiserror::Error;

use crate::handle::{EdgeId, VertexId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by container operations.
///
/// Apart from `Poisoned`, every variant is an invalid-argument condition: the
/// caller passed something the container refuses, and the container is left
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex handle was minted by a different graph.
    #[error("vertex {vertex} belongs to graph {owner}, not {graph}")]
    ForeignVertex {
        vertex: VertexId,
        owner: GraphId,
        graph: GraphId,
    },

    /// The edge handle was minted by a different graph.
    #[error("edge {edge} belongs to graph {owner}, not {graph}")]
    ForeignEdge {
        edge: EdgeId,
        owner: GraphId,
        graph: GraphId,
    },

    /// The vertex has been removed.
    #[error("vertex {vertex} has been removed")]
    StaleVertex { vertex: VertexId },

    /// The edge has been removed.
    #[error("edge {edge} has been removed")]
    StaleEdge { edge: EdgeId },

    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop { vertex: VertexId },

    /// An edge with the same direction already joins the two vertices.
    #[error("edge {from} -> {to} already exists as {existing}")]
    DuplicateEdge {
        from: VertexId,
        to: VertexId,
        existing: EdgeId,
    },

    #[error("vertex {vertex} still has {outgoing} outgoing and {incoming} incoming edges")]
    VertexHasEdges {
        vertex: VertexId,
        outgoing: usize,
        incoming: usize,
    },

    #[error("absent label is not allowed")]
    NullLabel,

    /// A `SharedGraph` lock was poisoned by a panicking holder.
    #[error("graph lock poisoned")]
    Poisoned,
}

impl GraphError {
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, GraphError::Poisoned)
    }
}

impl From<GraphError> for SgError {
    fn from(err: GraphError) -> Self {
        if err.is_invalid_argument() {
            SgError::invalid_arg(err.to_string())
        } else {
            SgError::invariant(err.to_string())
        }
    }
}
