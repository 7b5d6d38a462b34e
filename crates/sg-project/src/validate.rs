//! Document validation logic.

use crate::schema::GraphDoc;
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Self-loop on vertex {id}")]
    SelfLoop { id: String },

    #[error("Duplicate edge: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(doc: &GraphDoc) -> Result<(), ValidationError> {
    if doc.version == 0 || doc.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: doc.version,
        });
    }

    let mut vertex_ids = HashSet::new();
    for vertex in &doc.vertices {
        if !vertex_ids.insert(vertex.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: vertex.id.clone(),
                context: "vertices".to_string(),
            });
        }
    }

    let mut pairs = HashSet::new();
    for (index, edge) in doc.edges.iter().enumerate() {
        for (id, end) in [(&edge.from, "from"), (&edge.to, "to")] {
            if !vertex_ids.contains(id.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: id.clone(),
                    context: format!("edges[{index}].{end}"),
                });
            }
        }
        if edge.from == edge.to {
            return Err(ValidationError::SelfLoop {
                id: edge.from.clone(),
            });
        }
        if !pairs.insert((edge.from.as_str(), edge.to.as_str())) {
            return Err(ValidationError::DuplicateEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
    }

    Ok(())
}
