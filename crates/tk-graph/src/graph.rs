//! Core network data structures.

use tk_core::{EdgeId, TankId};

use crate::geometry::{Point, Rect};

/// A tank in the network: identity, label and where it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TankNode {
    pub id: TankId,
    pub name: String,
    pub rect: Rect,
}

/// A directed flow edge: liquid moves from `from` to `to` through a pipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub name: String,
    pub from: TankId,
    pub to: TankId,
    /// Pipe polyline, outlet of `from` first.
    pub route: Vec<Point>,
}

/// A validated, immutable tank network.
///
/// Tanks and edges are stored in vectors indexed by their IDs. Edge order is
/// declaration order, which is also the order flow is evaluated each tick.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) tanks: Vec<TankNode>,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for tank->outgoing edges: tank i's edges are in
    /// out_edges[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,

    /// Flat list of outgoing edge IDs, grouped by source tank in declaration order.
    pub(crate) out_edges: Vec<EdgeId>,
}

impl Network {
    /// Return all tanks.
    pub fn tanks(&self) -> &[TankNode] {
        &self.tanks
    }

    /// Return all edges in evaluation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a tank by ID (returns None if ID out of bounds).
    pub fn tank(&self, id: TankId) -> Option<&TankNode> {
        self.tanks.get(id.slot())
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// Edges leaving a tank, in declaration order.
    pub fn outgoing(&self, tank: TankId) -> &[EdgeId] {
        let idx = tank.slot();
        if idx >= self.tanks.len() {
            return &[];
        }
        &self.out_edges[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Number of edges leaving a tank.
    pub fn out_degree(&self, tank: TankId) -> usize {
        self.outgoing(tank).len()
    }
}

#[cfg(test)]
mod tests {
    use crate::NetworkBuilder;
    use crate::geometry::Rect;

    #[test]
    fn outgoing_groups_by_source() {
        let mut b = NetworkBuilder::new();
        let t1 = b.add_tank("T1", Rect::at(0.0, 0.0));
        let t2 = b.add_tank("T2", Rect::at(200.0, 200.0));
        let t3 = b.add_tank("T3", Rect::at(400.0, 400.0));
        let t4 = b.add_tank("T4", Rect::at(600.0, 400.0));
        let e12 = b.add_edge("12", t1, t2);
        let e23 = b.add_edge("23", t2, t3);
        let e24 = b.add_edge("24", t2, t4);
        let net = b.build().unwrap();

        assert_eq!(net.outgoing(t1), &[e12]);
        assert_eq!(net.outgoing(t2), &[e23, e24]);
        assert_eq!(net.out_degree(t3), 0);
        assert_eq!(net.out_degree(t4), 0);
    }
}
