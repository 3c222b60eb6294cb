//! Network definition validation.

use std::collections::{HashMap, HashSet};

use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use tk_core::{MULTIPLIER_MAX, MULTIPLIER_MIN};

use crate::schema::{EdgeDef, LATEST_VERSION, NetworkDef, TankDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Edge {id} connects tank {tank} to itself")]
    SelfLoop { id: String, tank: String },

    #[error("Edges {first} and {second} both connect {from} to {to}")]
    DuplicateEdge {
        first: String,
        second: String,
        from: String,
        to: String,
    },

    #[error("Flow edges in '{network}' form a cycle")]
    Cycle { network: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network(network: &NetworkDef) -> Result<(), ValidationError> {
    if network.version == 0 || network.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: network.version,
        });
    }

    if network.tick_period_ms == 0 {
        return Err(ValidationError::InvalidValue {
            field: "tick_period_ms".to_string(),
            value: network.tick_period_ms.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if !network.base_rate.is_finite() || network.base_rate <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "base_rate".to_string(),
            value: network.base_rate.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    let mut tank_ids = HashSet::new();
    for tank in &network.tanks {
        if !tank_ids.insert(tank.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: tank.id.clone(),
                context: format!("network '{}' tanks", network.name),
            });
        }
        validate_tank(tank)?;
    }

    let mut edge_ids = HashSet::new();
    let mut pairs: HashMap<(&str, &str), &str> = HashMap::new();
    for edge in &network.edges {
        if !edge_ids.insert(edge.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: edge.id.clone(),
                context: format!("network '{}' edges", network.name),
            });
        }
        validate_edge(edge, &tank_ids)?;

        if let Some(first) = pairs.insert((edge.from.as_str(), edge.to.as_str()), &edge.id) {
            return Err(ValidationError::DuplicateEdge {
                first: first.to_string(),
                second: edge.id.clone(),
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
    }

    let graph: DiGraphMap<&str, ()> = pairs.keys().map(|&(from, to)| (from, to, ())).collect();
    if is_cyclic_directed(&graph) {
        return Err(ValidationError::Cycle {
            network: network.name.clone(),
        });
    }

    Ok(())
}

fn validate_tank(tank: &TankDef) -> Result<(), ValidationError> {
    if !tank.capacity.is_finite() || tank.capacity <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("tank '{}' capacity", tank.id),
            value: tank.capacity.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    if !tank.initial_volume.is_finite()
        || tank.initial_volume < 0.0
        || tank.initial_volume > tank.capacity
    {
        return Err(ValidationError::InvalidValue {
            field: format!("tank '{}' initial_volume", tank.id),
            value: tank.initial_volume.to_string(),
            reason: format!("must be within [0, {}]", tank.capacity),
        });
    }

    let r = &tank.rect;
    if !(r.width > 0.0 && r.height > 0.0 && r.x.is_finite() && r.y.is_finite()) {
        return Err(ValidationError::InvalidValue {
            field: format!("tank '{}' rect", tank.id),
            value: format!("{}x{} at ({}, {})", r.width, r.height, r.x, r.y),
            reason: "must have positive size and finite position".to_string(),
        });
    }

    Ok(())
}

fn validate_edge(edge: &EdgeDef, tank_ids: &HashSet<&str>) -> Result<(), ValidationError> {
    for (end, id) in [("from", &edge.from), ("to", &edge.to)] {
        if !tank_ids.contains(id.as_str()) {
            return Err(ValidationError::MissingReference {
                id: id.clone(),
                context: format!("edge '{}' {}", edge.id, end),
            });
        }
    }

    if edge.from == edge.to {
        return Err(ValidationError::SelfLoop {
            id: edge.id.clone(),
            tank: edge.from.clone(),
        });
    }

    if !(MULTIPLIER_MIN..=MULTIPLIER_MAX).contains(&edge.multiplier) {
        return Err(ValidationError::InvalidValue {
            field: format!("edge '{}' multiplier", edge.id),
            value: edge.multiplier.to_string(),
            reason: format!("must be within [{MULTIPLIER_MIN}, {MULTIPLIER_MAX}]"),
        });
    }

    if let Some(route) = &edge.route {
        if route.len() < 2 {
            return Err(ValidationError::InvalidValue {
                field: format!("edge '{}' route", edge.id),
                value: format!("{} point(s)", route.len()),
                reason: "needs at least 2 points".to_string(),
            });
        }
    }

    Ok(())
}
