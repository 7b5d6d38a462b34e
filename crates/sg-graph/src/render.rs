//! DOT-style text rendering.

use core::fmt;

use crate::graph::SparseGraph;

impl<V: fmt::Display, E: fmt::Display, L> SparseGraph<V, E, L> {
    /// Render the graph as `digraph { ... }` text.
    ///
    /// One line per vertex, then one line per edge, both in insertion order.
    /// The edge bracket carries the edge value, not its label. There is no
    /// trailing newline after the closing brace.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<V: fmt::Display, E: fmt::Display, L> fmt::Display for SparseGraph<V, E, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        for &vertex in &self.vertex_order {
            let entry = self.vertex_entry(vertex).map_err(|_| fmt::Error)?;
            writeln!(f, "  \"{}\";", entry.value)?;
        }
        for &edge in &self.edge_order {
            let entry = self.edge_entry(edge).map_err(|_| fmt::Error)?;
            let from = self.vertex_entry(entry.from).map_err(|_| fmt::Error)?;
            let to = self.vertex_entry(entry.to).map_err(|_| fmt::Error)?;
            writeln!(
                f,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                from.value, to.value, entry.value
            )?;
        }
        write!(f, "}}")
    }
}
