//! sg-project: graph description documents.
//!
//! A document lists vertices and edges by string id. Loading parses and
//! validates it; `build_graph` turns it into a `SparseGraph`.

pub mod build;
pub mod schema;
pub mod validate;

pub use build::{BuiltGraph, DocGraph, build_graph};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_document};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] sg_core::SgError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ProjectResult<GraphDoc> {
    let doc: GraphDoc = serde_yaml::from_str(content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn from_json_str(content: &str) -> ProjectResult<GraphDoc> {
    let doc: GraphDoc = serde_json::from_str(content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn load_yaml(path: &Path) -> ProjectResult<GraphDoc> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn load_json(path: &Path) -> ProjectResult<GraphDoc> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Load a document, choosing the format from the file extension.
///
/// `.json` is read as JSON; anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<GraphDoc> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_json(path)
    } else {
        load_yaml(path)
    }
}
