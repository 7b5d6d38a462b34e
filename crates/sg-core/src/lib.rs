//! sg-core: stable foundation for sparsegraph.
//!
//! Contains:
//! - ids (compact slot ids and per-instance graph ids)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SgError, SgResult};
pub use ids::*;
