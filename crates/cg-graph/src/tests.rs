//! Unit tests for cg-graph.
//!
//! All tests use hand-built graphs with string node payloads and unit edge
//! payloads.

#[cfg(test)]
mod helpers {
    use cg_core::NodeId;
    use crate::Graph;

    pub type TestGraph = Graph<&'static str, ()>;

    /// Build a small directed network for testing.
    ///
    /// Ids: 10, 20, 30, 40, 50 (deliberately not positions).
    ///
    /// Edges (weight):
    ///   10→20 (10)  20→30 (10)  30→50 (10)
    ///   10→40 (50)  40→50 (10)
    ///
    /// Shortest 10→50 is 10→20→30→50 = 30; 10→40→50 = 60.
    pub fn grid() -> TestGraph {
        let mut g = Graph::new();
        for (id, name) in [(10, "a"), (20, "b"), (30, "c"), (40, "d"), (50, "e")] {
            g.add_node(NodeId(id), name).unwrap();
        }
        for (from, to, w) in [(10, 20, 10.0), (20, 30, 10.0), (30, 50, 10.0), (10, 40, 50.0), (40, 50, 10.0)] {
            g.add_edge(NodeId(from), NodeId(to), w, ()).unwrap();
        }
        g
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use cg_core::{LoadConfig, NodeId, NodePos};
    use crate::{Graph, GraphError};
    use crate::store::DEFAULT_NODE_CAPACITY;

    #[test]
    fn empty_graph() {
        let g: Graph<(), ()> = Graph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
        assert!(g.capacity() >= DEFAULT_NODE_CAPACITY);
        assert!(g.node(NodeId(1)).is_none());
    }

    #[test]
    fn default_capacity_matches_load_config() {
        assert_eq!(DEFAULT_NODE_CAPACITY, LoadConfig::default().initial_node_capacity);
        let g: Graph<(), ()> = Graph::default();
        assert!(g.capacity() >= LoadConfig::DEFAULT_NODE_CAPACITY);
    }

    #[test]
    fn nodes_retrievable_by_id() {
        let g = super::helpers::grid();
        for (id, name) in [(10, "a"), (20, "b"), (30, "c"), (40, "d"), (50, "e")] {
            let node = g.node(NodeId(id)).expect("inserted node");
            assert_eq!(node.id(), NodeId(id));
            assert_eq!(*node.data(), name);
        }
        assert_eq!(g.position_of(NodeId(30)), Some(NodePos(2)));
        assert_eq!(g.node_at(NodePos(4)).map(|n| n.id()), Some(NodeId(50)));
        assert!(g.node_at(NodePos(5)).is_none());
    }

    #[test]
    fn duplicate_node_rejected_without_mutation() {
        let mut g = super::helpers::grid();
        let err = g.add_node(NodeId(20), "imposter").unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode(NodeId(20)));
        assert_eq!(g.node_count(), 5);
        assert_eq!(*g.node(NodeId(20)).unwrap().data(), "b");
    }

    #[test]
    fn negative_ids_are_keys_not_indices() {
        let mut g: Graph<(), ()> = Graph::new();
        assert_eq!(g.add_node(NodeId(-5), ()).unwrap(), NodePos(0));
        assert_eq!(g.add_node(NodeId(1_000_000), ()).unwrap(), NodePos(1));
        assert_eq!(g.position_of(NodeId(-5)), Some(NodePos(0)));
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut g: Graph<i32, ()> = Graph::with_capacity(2);
        for i in 0..250 {
            g.add_node(NodeId(i), i).unwrap();
        }
        assert_eq!(g.node_count(), 250);
        assert!(g.capacity() >= 250);
        let ids: Vec<i32> = g.nodes().map(|n| n.id().0).collect();
        assert_eq!(ids, (0..250).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_edge_rejected() {
        let mut g = super::helpers::grid();
        let err = g.add_edge(NodeId(10), NodeId(20), 1.0, ()).unwrap_err();
        assert_eq!(err, GraphError::DuplicateEdge { from: NodeId(10), to: NodeId(20) });
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.edge(NodeId(10), NodeId(20)).unwrap().weight(), 10.0);
    }

    #[test]
    fn reverse_edge_is_distinct() {
        let mut g = super::helpers::grid();
        assert!(g.edge(NodeId(20), NodeId(10)).is_none());
        g.add_edge(NodeId(20), NodeId(10), 7.0, ()).unwrap();
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.edge(NodeId(20), NodeId(10)).unwrap().weight(), 7.0);
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut g = super::helpers::grid();
        assert_eq!(
            g.add_edge(NodeId(99), NodeId(10), 1.0, ()),
            Err(GraphError::NodeNotFound(NodeId(99)))
        );
        assert_eq!(
            g.add_edge(NodeId(10), NodeId(99), 1.0, ()),
            Err(GraphError::NodeNotFound(NodeId(99)))
        );
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn invalid_weight_rejected() {
        let mut g = super::helpers::grid();
        for w in [-1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                g.add_edge(NodeId(50), NodeId(10), w, ()),
                Err(GraphError::InvalidWeight { .. })
            ));
        }
        assert!(g.add_edge(NodeId(50), NodeId(10), 0.0, ()).is_ok());
    }

    #[test]
    fn self_loop_allowed_once() {
        let mut g = super::helpers::grid();
        g.add_edge(NodeId(10), NodeId(10), 3.0, ()).unwrap();
        assert!(g.add_edge(NodeId(10), NodeId(10), 3.0, ()).is_err());
    }

    #[test]
    fn edges_enumerate_most_recent_first() {
        let g = super::helpers::grid();
        let node = g.node(NodeId(10)).unwrap();
        let targets: Vec<NodeId> = node.edges().map(|e| e.to()).collect();
        assert_eq!(targets, vec![NodeId(40), NodeId(20)]);
        assert_eq!(node.out_degree(), 2);
    }

    #[test]
    fn remove_edge() {
        let mut g = super::helpers::grid();
        assert!(g.remove_edge(NodeId(10), NodeId(20)));
        assert!(!g.remove_edge(NodeId(10), NodeId(20)));
        assert!(!g.remove_edge(NodeId(99), NodeId(20)));
        assert_eq!(g.edge_count(), 4);
        assert!(g.edge(NodeId(10), NodeId(20)).is_none());
        // Re-insertion is allowed after removal.
        g.add_edge(NodeId(10), NodeId(20), 1.0, ()).unwrap();
    }

    #[test]
    fn remove_node_compacts_and_drops_incident_edges() {
        let mut g = super::helpers::grid();
        assert!(g.remove_node(NodeId(20)));
        assert!(!g.remove_node(NodeId(20)));

        assert_eq!(g.node_count(), 4);
        // 10→20 and 20→30 are gone.
        assert_eq!(g.edge_count(), 3);
        assert!(g.node(NodeId(20)).is_none());

        let order: Vec<NodeId> = g.nodes().map(|n| n.id()).collect();
        assert_eq!(order, vec![NodeId(10), NodeId(30), NodeId(40), NodeId(50)]);
        assert_eq!(g.position_of(NodeId(30)), Some(NodePos(1)));
        assert_eq!(g.position_of(NodeId(50)), Some(NodePos(3)));
        assert_eq!(g.node(NodeId(10)).unwrap().out_degree(), 1);
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use cg_core::{NodeId, NodePos};
    use crate::{Graph, GraphError, shortest_distance, shortest_distance_between};

    #[test]
    fn self_distance_is_zero() {
        let g = super::helpers::grid();
        for pos in 0..5 {
            assert_eq!(shortest_distance(&g, NodePos(pos), NodePos(pos)), Some(0.0));
        }
    }

    #[test]
    fn shortest_path_correct() {
        let g = super::helpers::grid();
        assert_eq!(shortest_distance_between(&g, NodeId(10), NodeId(50)), Ok(Some(30.0)));
        assert_eq!(shortest_distance_between(&g, NodeId(10), NodeId(40)), Ok(Some(50.0)));
    }

    #[test]
    fn directed_edges_block_return() {
        let g = super::helpers::grid();
        assert_eq!(shortest_distance_between(&g, NodeId(50), NodeId(10)), Ok(None));
    }

    #[test]
    fn disconnected_is_unreachable() {
        let mut g: Graph<(), ()> = Graph::new();
        g.add_node(NodeId(1), ()).unwrap();
        g.add_node(NodeId(2), ()).unwrap();
        assert_eq!(shortest_distance(&g, NodePos(0), NodePos(1)), None);
    }

    #[test]
    fn zero_weight_edges_are_free() {
        let mut g: Graph<(), ()> = Graph::new();
        for id in 1..=3 {
            g.add_node(NodeId(id), ()).unwrap();
        }
        g.add_edge(NodeId(1), NodeId(2), 0.0, ()).unwrap();
        g.add_edge(NodeId(2), NodeId(3), 0.0, ()).unwrap();
        assert_eq!(shortest_distance_between(&g, NodeId(1), NodeId(3)), Ok(Some(0.0)));
    }

    #[test]
    fn later_cheaper_relaxation_wins() {
        // 1→3 directly costs 100; 1→2→3 costs 2.  Node 3 is pushed twice and
        // the stale entry must be ignored.
        let mut g: Graph<(), ()> = Graph::new();
        for id in 1..=3 {
            g.add_node(NodeId(id), ()).unwrap();
        }
        g.add_edge(NodeId(1), NodeId(3), 100.0, ()).unwrap();
        g.add_edge(NodeId(1), NodeId(2), 1.0, ()).unwrap();
        g.add_edge(NodeId(2), NodeId(3), 1.0, ()).unwrap();
        assert_eq!(shortest_distance_between(&g, NodeId(1), NodeId(3)), Ok(Some(2.0)));
    }

    #[test]
    fn accumulates_in_double_precision() {
        // 1000 hops of 0.1 m: an f32 accumulator drifts by centimetres.
        let mut g: Graph<(), ()> = Graph::new();
        for id in 0..=1000 {
            g.add_node(NodeId(id), ()).unwrap();
        }
        for id in 0..1000 {
            g.add_edge(NodeId(id), NodeId(id + 1), 0.1, ()).unwrap();
        }
        let d = shortest_distance_between(&g, NodeId(0), NodeId(1000)).unwrap().unwrap();
        let expected = 1000.0 * f64::from(0.1f32);
        assert!((d - expected).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn distances_never_negative() {
        let g = super::helpers::grid();
        for s in 0..5 {
            for t in 0..5 {
                if let Some(d) = shortest_distance(&g, NodePos(s), NodePos(t)) {
                    assert!(d >= 0.0);
                }
            }
        }
    }

    #[test]
    fn out_of_range_positions() {
        let g = super::helpers::grid();
        assert_eq!(shortest_distance(&g, NodePos(0), NodePos(99)), None);
        assert_eq!(shortest_distance(&g, NodePos(99), NodePos(0)), None);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let g = super::helpers::grid();
        assert_eq!(
            shortest_distance_between(&g, NodeId(10), NodeId(7)),
            Err(GraphError::NodeNotFound(NodeId(7)))
        );
    }

    #[test]
    fn still_correct_after_node_removal() {
        let mut g = super::helpers::grid();
        g.remove_node(NodeId(20));
        assert_eq!(shortest_distance_between(&g, NodeId(10), NodeId(50)), Ok(Some(60.0)));
    }
}
