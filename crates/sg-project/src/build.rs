//! Construct a graph container from a validated document.

use std::collections::HashMap;

use sg_core::SgError;
use sg_graph::{SparseGraph, VertexId};
use tracing::debug;

use crate::ProjectResult;
use crate::schema::GraphDoc;
use crate::validate::validate_document;

/// Graph type produced from documents: string values and string labels.
pub type DocGraph = SparseGraph<String, String, String>;

/// A graph built from a document, with the document's vertex ids resolved.
#[derive(Debug)]
pub struct BuiltGraph {
    pub name: String,
    pub graph: DocGraph,
    /// Document vertex ids in document order.
    pub ids: Vec<(String, VertexId)>,
    index: HashMap<String, VertexId>,
}

impl BuiltGraph {
    /// Handle for a document vertex id.
    pub fn vertex(&self, id: &str) -> Option<VertexId> {
        self.index.get(id).copied()
    }
}

pub fn build_graph(doc: &GraphDoc) -> ProjectResult<BuiltGraph> {
    validate_document(doc)?;

    let mut graph = DocGraph::with_capacity(doc.vertices.len(), doc.edges.len());
    let mut ids = Vec::with_capacity(doc.vertices.len());
    let mut index = HashMap::with_capacity(doc.vertices.len());

    for def in &doc.vertices {
        let vertex = graph.insert_vertex(def.display_value().to_string());
        if let Some(label) = &def.label {
            graph
                .label_vertex(vertex, label.clone())
                .map_err(SgError::from)?;
        }
        ids.push((def.id.clone(), vertex));
        index.insert(def.id.clone(), vertex);
    }

    for (i, def) in doc.edges.iter().enumerate() {
        let (Some(&from), Some(&to)) = (index.get(&def.from), index.get(&def.to)) else {
            let what = format!("edges[{i}] refers to an unknown vertex");
            return Err(SgError::invariant(what).into());
        };
        let edge = graph
            .insert_edge(from, to, def.value.clone())
            .map_err(SgError::from)?;
        if let Some(label) = &def.label {
            graph.label_edge(edge, label.clone()).map_err(SgError::from)?;
        }
    }

    debug!(
        name = %doc.name,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built graph from document"
    );

    Ok(BuiltGraph {
        name: doc.name.clone(),
        graph,
        ids,
        index,
    })
}

#[cfg(test)]
mod tests {
    use crate::ProjectError;
    use crate::schema::{EdgeDef, VertexDef};
    use super::*;

    fn people_doc() -> GraphDoc {
        let vertex = |id: &str, value: &str| VertexDef {
            id: id.to_string(),
            value: Some(value.to_string()),
            label: None,
        };
        GraphDoc {
            version: 1,
            name: "people".to_string(),
            vertices: vec![
                vertex("p", "Peter"),
                vertex("a", "Andy"),
                vertex("v", "Vincent"),
                vertex("t", "Tom"),
            ],
            edges: vec![
                EdgeDef {
                    from: "p".to_string(),
                    to: "a".to_string(),
                    value: "1".to_string(),
                    label: Some("first".to_string()),
                },
                EdgeDef {
                    from: "v".to_string(),
                    to: "t".to_string(),
                    value: "2".to_string(),
                    label: None,
                },
            ],
        }
    }

    #[test]
    fn builds_in_document_order() {
        let built = build_graph(&people_doc()).unwrap();
        assert_eq!(
            built.graph.render(),
            "digraph {\n  \"Peter\";\n  \"Andy\";\n  \"Vincent\";\n  \"Tom\";\n  \"Peter\" -> \"Andy\" [label=\"1\"];\n  \"Vincent\" -> \"Tom\" [label=\"2\"];\n}"
        );
        let ids: Vec<&str> = built.ids.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["p", "a", "v", "t"]);
    }

    #[test]
    fn labels_are_attached() {
        let built = build_graph(&people_doc()).unwrap();
        let p = built.vertex("p").unwrap();
        let first = built.graph.outgoing(p).unwrap()[0];
        assert_eq!(
            built.graph.edge_label(first).unwrap().map(String::as_str),
            Some("first")
        );
        assert_eq!(built.graph.vertex_label(p).unwrap(), None);
        assert!(built.vertex("nobody").is_none());
    }

    #[test]
    fn invalid_document_is_not_built() {
        let mut doc = people_doc();
        doc.edges[1].to = "v".to_string();
        assert!(matches!(build_graph(&doc), Err(ProjectError::Validation(_))));
    }
}
