//! Network validation logic.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use tk_core::{EdgeId, TankId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, TankNode};

/// Validate references, self loops, duplicate edges and routes.
pub(crate) fn validate_structure(tanks: &[TankNode], edges: &[Edge]) -> GraphResult<()> {
    let mut seen: HashMap<(TankId, TankId), EdgeId> = HashMap::new();

    for edge in edges {
        for tank in [edge.from, edge.to] {
            if tank.slot() >= tanks.len() {
                return Err(GraphError::InvalidTankRef {
                    edge: edge.id,
                    tank,
                });
            }
        }

        if edge.from == edge.to {
            return Err(GraphError::SelfLoop {
                edge: edge.id,
                tank: edge.from,
            });
        }

        if let Some(&first) = seen.get(&(edge.from, edge.to)) {
            return Err(GraphError::DuplicateEdge {
                first,
                second: edge.id,
            });
        }
        seen.insert((edge.from, edge.to), edge.id);

        if edge.route.len() < 2 {
            return Err(GraphError::DegenerateRoute {
                edge: edge.id,
                points: edge.route.len(),
            });
        }
    }

    Ok(())
}

/// Liquid only flows downstream: reject any cycle.
pub(crate) fn validate_acyclic(tanks: &[TankNode], edges: &[Edge]) -> GraphResult<()> {
    let mut graph: DiGraph<TankId, EdgeId> = DiGraph::with_capacity(tanks.len(), edges.len());
    let nodes: Vec<NodeIndex> = tanks.iter().map(|t| graph.add_node(t.id)).collect();
    for edge in edges {
        graph.add_edge(nodes[edge.from.slot()], nodes[edge.to.slot()], edge.id);
    }

    toposort(&graph, None).map(|_| ()).map_err(|cycle| GraphError::Cycle {
        tank: graph[cycle.node_id()],
    })
}
