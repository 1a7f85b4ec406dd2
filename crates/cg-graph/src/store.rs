//! Directed graph container with owned node and edge payloads.
//!
//! # Data layout
//!
//! Nodes live in one `Vec` in insertion order.  A node's position in that
//! `Vec` is its [`NodePos`]; the caller-assigned [`NodeId`] is resolved to a
//! position through a hash index.  Each node owns its outgoing edges, and an
//! edge refers to its target by `NodeId`, never by reference, so removing a
//! node cannot leave a dangling pointer behind.
//!
//! ```text
//! nodes[pos] = Node { id, data: N, edges: [Edge { to, weight, data: E }, ..] }
//! index[id]  = pos
//! ```
//!
//! Outgoing edges are enumerated most-recent-first (new edges go to the head
//! of the list).  Nothing downstream may rely on that order.

use rustc_hash::FxHashMap;

use cg_core::{LoadConfig, NodeId, NodePos};

use crate::{GraphError, GraphResult};

/// Node slots reserved by [`Graph::new`]; the same default a dataset load
/// starts from.
pub const DEFAULT_NODE_CAPACITY: usize = LoadConfig::DEFAULT_NODE_CAPACITY;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed arc owned by its source node.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    to:     NodeId,
    weight: f32,
    data:   E,
}

impl<E> Edge<E> {
    /// Identifier of the target node.
    #[inline]
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Non-negative edge cost (road length in metres for the city graph).
    #[inline]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    #[inline]
    pub fn data(&self) -> &E {
        &self.data
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A graph node: identifier, owned payload, owned outgoing edges.
#[derive(Debug, Clone)]
pub struct Node<N, E> {
    id:    NodeId,
    data:  N,
    edges: Vec<Edge<E>>,
}

impl<N, E> Node<N, E> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn data(&self) -> &N {
        &self.data
    }

    /// Outgoing edges, most recently added first.
    #[inline]
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = &Edge<E>> + ExactSizeIterator + '_ {
        self.edges.iter().rev()
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    fn edge_to(&self, to: NodeId) -> Option<&Edge<E>> {
        self.edges.iter().find(|e| e.to == to)
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Growable directed graph keyed by caller-assigned [`NodeId`]s.
///
/// The graph owns every node, edge and payload; dropping it releases all of
/// them, which is also how a half-built graph is discarded after a failed
/// load.
///
/// # Example
///
/// ```
/// use cg_core::NodeId;
/// use cg_graph::Graph;
///
/// let mut g: Graph<&str, ()> = Graph::new();
/// g.add_node(NodeId(1), "a").unwrap();
/// g.add_node(NodeId(2), "b").unwrap();
/// g.add_edge(NodeId(1), NodeId(2), 1_200.0, ()).unwrap();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1); // one-way only
/// assert!(g.edge(NodeId(2), NodeId(1)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes:      Vec<Node<N, E>>,
    index:      FxHashMap<NodeId, NodePos>,
    edge_count: usize,
}

impl<N, E> Graph<N, E> {
    /// Empty graph with [`DEFAULT_NODE_CAPACITY`] node slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_NODE_CAPACITY)
    }

    /// Empty graph with room for `capacity` nodes before the first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes:      Vec::with_capacity(capacity),
            index:      FxHashMap::default(),
            edge_count: 0,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Position of the node with identifier `id`.
    #[inline]
    pub fn position_of(&self, id: NodeId) -> Option<NodePos> {
        self.index.get(&id).copied()
    }

    /// Node with identifier `id`.
    pub fn node(&self, id: NodeId) -> Option<&Node<N, E>> {
        self.position_of(id).map(|pos| &self.nodes[pos.index()])
    }

    /// Node at dense position `pos`.
    #[inline]
    pub fn node_at(&self, pos: NodePos) -> Option<&Node<N, E>> {
        self.nodes.get(pos.index())
    }

    /// All nodes in position order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node<N, E>> + '_ {
        self.nodes.iter()
    }

    /// The edge `from -> to`, if present.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&Edge<E>> {
        self.node(from).and_then(|n| n.edge_to(to))
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Append a node and return its position.
    ///
    /// Fails without touching the graph if `id` is already present; the
    /// rejected payload is dropped with the error path.
    pub fn add_node(&mut self, id: NodeId, data: N) -> GraphResult<NodePos> {
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }

        // Grow by doubling so repeated appends stay amortised O(1).
        if self.nodes.len() == self.nodes.capacity() {
            let extra = self.nodes.capacity().max(1);
            self.nodes.reserve_exact(extra);
        }

        let pos = NodePos(self.nodes.len() as u32);
        self.nodes.push(Node { id, data, edges: Vec::new() });
        self.index.insert(id, pos);
        Ok(pos)
    }

    /// Add a **directed** edge `from -> to`.
    ///
    /// Fails if either endpoint is missing, the edge already exists, or the
    /// weight is negative or not finite.  The graph is unchanged on failure.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f32, data: E) -> GraphResult<()> {
        let from_pos = self.position_of(from).ok_or(GraphError::NodeNotFound(from))?;
        if !self.index.contains_key(&to) {
            return Err(GraphError::NodeNotFound(to));
        }

        let source = &mut self.nodes[from_pos.index()];
        if source.edge_to(to).is_some() {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }

        source.edges.push(Edge { to, weight, data });
        self.edge_count += 1;
        Ok(())
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Remove the edge `from -> to`.  Returns `false` if it did not exist.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        let Some(pos) = self.position_of(from) else {
            return false;
        };
        let edges = &mut self.nodes[pos.index()].edges;
        match edges.iter().position(|e| e.to == to) {
            Some(i) => {
                edges.remove(i);
                self.edge_count -= 1;
                true
            }
            None => false,
        }
    }

    /// Remove node `id` together with its outgoing edges, its payload, and
    /// every edge that points at it.  Remaining nodes keep their relative
    /// order; positions after the removed slot shift down by one.
    ///
    /// Returns `false` if the node did not exist.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(pos) = self.index.remove(&id) else {
            return false;
        };

        let removed = self.nodes.remove(pos.index());
        self.edge_count -= removed.edges.len();

        for node in &mut self.nodes {
            let before = node.edges.len();
            node.edges.retain(|e| e.to != id);
            self.edge_count -= before - node.edges.len();
        }

        for (i, node) in self.nodes.iter().enumerate().skip(pos.index()) {
            self.index.insert(node.id, NodePos(i as u32));
        }
        true
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
