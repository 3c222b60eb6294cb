//! Runtime compilation of a `NetworkDef` into a `SimController`.

use std::collections::HashMap;
use std::time::Duration;

use tk_core::{EdgeId, TankId};
use tk_graph::{NetworkBuilder, Point, Rect};
use tk_project::schema::{NetworkDef, SceneDef};
use tk_project::validate_network;
use tk_sim::{SimController, SimOptions, Tank};

use crate::error::{AppError, AppResult};

/// Runtime representation of a compiled network.
#[derive(Debug, Clone)]
pub struct NetworkRuntime {
    pub name: String,
    pub scene: SceneDef,
    pub controller: SimController,
    pub tank_id_map: HashMap<String, TankId>,
    pub edge_id_map: HashMap<String, EdgeId>,
}

impl NetworkRuntime {
    pub fn tank_id(&self, id: &str) -> AppResult<TankId> {
        self.tank_id_map
            .get(id)
            .copied()
            .ok_or_else(|| AppError::TankNotFound(id.to_string()))
    }

    pub fn edge_id(&self, id: &str) -> AppResult<EdgeId> {
        self.edge_id_map
            .get(id)
            .copied()
            .ok_or_else(|| AppError::EdgeNotFound(id.to_string()))
    }
}

/// Compile a network definition into a ready-to-run controller.
///
/// The controller starts stopped, with each tank at its `initial_volume` and
/// each edge at its configured multiplier.
pub fn compile_network(def: &NetworkDef) -> AppResult<NetworkRuntime> {
    validate_network(def)?;

    let mut builder = NetworkBuilder::new();
    let mut tank_id_map = HashMap::new();
    let mut tanks = Vec::with_capacity(def.tanks.len());

    for tank in &def.tanks {
        let r = tank.rect;
        let id = builder.add_tank(&tank.name, Rect::new(r.x, r.y, r.width, r.height));
        tank_id_map.insert(tank.id.clone(), id);
        tanks.push(Tank::new(tank.capacity, tank.initial_volume));
    }

    let mut edge_id_map = HashMap::new();
    for edge in &def.edges {
        let from = *tank_id_map
            .get(&edge.from)
            .ok_or_else(|| AppError::Compile(format!("Tank not found: {}", edge.from)))?;
        let to = *tank_id_map
            .get(&edge.to)
            .ok_or_else(|| AppError::Compile(format!("Tank not found: {}", edge.to)))?;

        let id = match &edge.route {
            Some(route) => {
                let points = route.iter().copied().map(Point::from).collect();
                builder.add_edge_routed(edge.label(), from, to, points)
            }
            None => builder.add_edge(edge.label(), from, to),
        };
        edge_id_map.insert(edge.id.clone(), id);
    }

    let network = builder.build()?;

    let options = SimOptions {
        base_rate: def.base_rate,
        tick_period: Duration::from_millis(def.tick_period_ms),
        ..SimOptions::default()
    };
    let mut controller = SimController::new(network, tanks, options)?;

    for edge in &def.edges {
        if let Some(&id) = edge_id_map.get(&edge.id) {
            controller.set_multiplier(id, edge.multiplier)?;
        }
    }

    tracing::info!(
        network = %def.name,
        tanks = def.tanks.len(),
        edges = def.edges.len(),
        "network compiled"
    );

    Ok(NetworkRuntime {
        name: def.name.clone(),
        scene: def.scene,
        controller,
        tank_id_map,
        edge_id_map,
    })
}
