//! Single-source, single-target Dijkstra over a [`Graph`].
//!
//! # Cost units
//!
//! Edge weights are `f32` metres.  Costs are accumulated in `f64` so long
//! multi-hop paths do not compound single-precision rounding.  Only the
//! distance is returned; no caller needs the path itself.
//!
//! # Scratch memory
//!
//! The distance table, settled flags and heap are allocated per call and
//! sized to the current node count, so no state is shared between queries.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use cg_core::{NodeId, NodePos};

use crate::{Graph, GraphError, GraphResult};

// ── Heap entry ────────────────────────────────────────────────────────────────

/// `(tentative distance, position)` pair stored in the search frontier.
#[derive(Copy, Clone, Debug, PartialEq)]
struct HeapItem {
    dist: f64,
    pos:  NodePos,
}

impl Eq for HeapItem {}

impl Ord for HeapItem {
    // Distances are never NaN here (sums of finite non-negative weights), so
    // `total_cmp` agrees with the numeric order.  Position breaks ties.
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Shortest accumulated edge weight from `source` to `target`.
///
/// Returns `None` if `target` is unreachable or either position is out of
/// range.  `source == target` is `Some(0.0)`.
pub fn shortest_distance<N, E>(graph: &Graph<N, E>, source: NodePos, target: NodePos) -> Option<f64> {
    let n = graph.node_count();
    if source.index() >= n || target.index() >= n {
        return None;
    }

    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // settled[v] = v has been popped once; later pops of v are stale.
    let mut settled = vec![false; n];
    dist[source.index()] = 0.0;

    // Min-heap: Reverse turns BinaryHeap (max) into a min-heap.  A node may
    // sit in the heap several times with different tentative distances.
    let mut heap: BinaryHeap<Reverse<HeapItem>> = BinaryHeap::with_capacity(n);
    heap.push(Reverse(HeapItem { dist: 0.0, pos: source }));

    let mut settled_count = 0usize;
    while let Some(Reverse(HeapItem { pos: u, .. })) = heap.pop() {
        if settled[u.index()] {
            continue;
        }
        settled[u.index()] = true;
        settled_count += 1;
        if u == target {
            break;
        }

        let Some(node) = graph.node_at(u) else {
            continue;
        };
        for edge in node.edges() {
            let Some(v) = graph.position_of(edge.to()) else {
                continue;
            };
            if settled[v.index()] {
                continue;
            }
            let alt = dist[u.index()] + f64::from(edge.weight());
            if alt < dist[v.index()] {
                dist[v.index()] = alt;
                heap.push(Reverse(HeapItem { dist: alt, pos: v }));
            }
        }
    }

    let result = dist[target.index()];
    debug!(%source, %target, settled = settled_count, distance = result, "dijkstra finished");
    result.is_finite().then_some(result)
}

/// [`shortest_distance`] addressed by node identifier.
///
/// Unknown identifiers are an error; an unreachable target is `Ok(None)`.
pub fn shortest_distance_between<N, E>(
    graph: &Graph<N, E>,
    from: NodeId,
    to: NodeId,
) -> GraphResult<Option<f64>> {
    let source = graph.position_of(from).ok_or(GraphError::NodeNotFound(from))?;
    let target = graph.position_of(to).ok_or(GraphError::NodeNotFound(to))?;
    Ok(shortest_distance(graph, source, target))
}
