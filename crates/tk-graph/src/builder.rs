//! Incremental network builder.

use tk_core::{EdgeId, TankId};

use crate::error::GraphResult;
use crate::geometry::{Point, Rect, elbow_route};
use crate::graph::{Edge, Network, TankNode};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_tank` and `add_edge` to build up the network,
/// then call `build()` to validate and freeze it into an immutable `Network`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    tanks: Vec<TankNode>,
    edges: Vec<Edge>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tank and return its ID.
    pub fn add_tank(&mut self, name: impl Into<String>, rect: Rect) -> TankId {
        let id = TankId::from_index(self.tanks.len() as u32);
        self.tanks.push(TankNode {
            id,
            name: name.into(),
            rect,
        });
        id
    }

    /// Add an edge whose pipe is routed automatically from the source outlet
    /// to the destination inlet.
    ///
    /// Unknown tanks are accepted here and rejected by `build()`.
    pub fn add_edge(&mut self, name: impl Into<String>, from: TankId, to: TankId) -> EdgeId {
        let route = match (self.tanks.get(from.slot()), self.tanks.get(to.slot())) {
            (Some(a), Some(b)) => elbow_route(a.rect.outlet(), b.rect.inlet()),
            _ => Vec::new(),
        };
        self.push_edge(name.into(), from, to, route)
    }

    /// Add an edge with an explicit pipe route.
    pub fn add_edge_routed(
        &mut self,
        name: impl Into<String>,
        from: TankId,
        to: TankId,
        route: Vec<Point>,
    ) -> EdgeId {
        self.push_edge(name.into(), from, to, route)
    }

    fn push_edge(&mut self, name: String, from: TankId, to: TankId, route: Vec<Point>) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            name,
            from,
            to,
            route,
        });
        id
    }

    /// Validate and build the immutable network.
    pub fn build(self) -> GraphResult<Network> {
        validate::validate_structure(&self.tanks, &self.edges)?;
        validate::validate_acyclic(&self.tanks, &self.edges)?;

        let (out_offsets, out_edges) = Self::build_adjacency(&self.tanks, &self.edges);

        Ok(Network {
            tanks: self.tanks,
            edges: self.edges,
            out_offsets,
            out_edges,
        })
    }

    fn build_adjacency(tanks: &[TankNode], edges: &[Edge]) -> (Vec<usize>, Vec<EdgeId>) {
        let mut per_tank: Vec<Vec<EdgeId>> = vec![Vec::new(); tanks.len()];
        for edge in edges {
            per_tank[edge.from.slot()].push(edge.id);
        }

        let mut offsets = Vec::with_capacity(tanks.len() + 1);
        let mut flat = Vec::with_capacity(edges.len());
        offsets.push(0);
        for list in per_tank {
            flat.extend(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
