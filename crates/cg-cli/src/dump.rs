//! Adjacency dump of a loaded graph.

use std::io::{self, Write};

use cg_city::CityGraph;

/// Write every node in position order followed by its outgoing roads,
/// most recently added first.
///
/// ```text
/// Node 1:
///   -> Node 2 (weight: 111000.00)
/// Node 2:
///   (no outgoing edges)
/// ```
pub fn write_graph<W: Write>(graph: &CityGraph, out: &mut W) -> io::Result<()> {
    for node in graph.nodes() {
        writeln!(out, "Node {}:", node.id())?;
        if node.out_degree() == 0 {
            writeln!(out, "  (no outgoing edges)")?;
            continue;
        }
        for edge in node.edges() {
            writeln!(out, "  -> Node {} (weight: {:.2})", edge.to(), edge.weight())?;
        }
    }
    Ok(())
}
