//! Built-in networks.

use crate::schema::{EdgeDef, LATEST_VERSION, NetworkDef, RectDef, SceneDef, TankDef};
use tk_core::{DEFAULT_BASE_RATE, DEFAULT_CAPACITY, DEFAULT_TICK_PERIOD_MS};

pub const PRESET_NAMES: [&str; 2] = ["cascade", "branching"];

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<NetworkDef> {
    match name {
        "cascade" => Some(cascade()),
        "branching" => Some(branching()),
        _ => None,
    }
}

/// Four tanks stepping down a diagonal, each draining into the next.
pub fn cascade() -> NetworkDef {
    NetworkDef {
        version: LATEST_VERSION,
        name: "Cascade".to_string(),
        tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        base_rate: DEFAULT_BASE_RATE,
        scene: SceneDef::default(),
        tanks: vec![
            tank(1, 50.0, 50.0, DEFAULT_CAPACITY),
            tank(2, 300.0, 200.0, 0.0),
            tank(3, 550.0, 350.0, 0.0),
            tank(4, 800.0, 500.0, 0.0),
        ],
        edges: vec![
            EdgeDef::new("e12", "t1", "t2"),
            EdgeDef::new("e23", "t2", "t3"),
            EdgeDef::new("e34", "t3", "t4"),
        ],
    }
}

/// Tank 2 splits its outflow between tanks 3 and 4.
pub fn branching() -> NetworkDef {
    NetworkDef {
        version: LATEST_VERSION,
        name: "Branching".to_string(),
        tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        base_rate: DEFAULT_BASE_RATE,
        scene: SceneDef::default(),
        tanks: vec![
            tank(1, 50.0, 50.0, DEFAULT_CAPACITY),
            tank(2, 300.0, 200.0, 0.0),
            tank(3, 550.0, 420.0, 0.0),
            tank(4, 800.0, 420.0, 0.0),
        ],
        edges: vec![
            EdgeDef::new("e12", "t1", "t2"),
            EdgeDef::new("e23", "t2", "t3"),
            EdgeDef::new("e24", "t2", "t4"),
        ],
    }
}

fn tank(n: u32, x: f32, y: f32, initial_volume: f64) -> TankDef {
    TankDef {
        id: format!("t{n}"),
        name: format!("Tank {n}"),
        capacity: DEFAULT_CAPACITY,
        initial_volume,
        rect: RectDef::at(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        for name in PRESET_NAMES {
            assert!(preset(name).is_some());
        }
        assert!(preset("spiral").is_none());
    }

    #[test]
    fn cascade_starts_with_first_tank_full() {
        let net = cascade();
        assert_eq!(net.tanks[0].initial_volume, 100.0);
        assert!(net.tanks[1..].iter().all(|t| t.initial_volume == 0.0));
        assert_eq!(net.edges.len(), 3);
    }
}
