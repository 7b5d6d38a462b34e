//! Graph document schema definitions.

use serde::{Deserialize, Serialize};

/// A graph described in a file.
///
/// Vertex ids are keys local to the document; edges refer to them. Vertices
/// and edges are inserted in the order they appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphDoc {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vertices: Vec<VertexDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VertexDef {
    pub id: String,
    /// Rendered text; the id is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl VertexDef {
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
