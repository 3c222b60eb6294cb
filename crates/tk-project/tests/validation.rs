use tk_project::schema::*;
use tk_project::{ValidationError, branching, cascade, validate_network};

fn expect_err(network: &NetworkDef) -> ValidationError {
    validate_network(network).expect_err("network should be rejected")
}

#[test]
fn unsupported_version() {
    let mut net = cascade();
    net.version = LATEST_VERSION + 1;
    assert!(matches!(
        expect_err(&net),
        ValidationError::UnsupportedVersion { .. }
    ));
}

#[test]
fn zero_tick_period() {
    let mut net = cascade();
    net.tick_period_ms = 0;
    assert!(matches!(expect_err(&net), ValidationError::InvalidValue { field, .. } if field == "tick_period_ms"));
}

#[test]
fn non_positive_base_rate() {
    let mut net = cascade();
    net.base_rate = -0.8;
    assert!(matches!(expect_err(&net), ValidationError::InvalidValue { field, .. } if field == "base_rate"));
}

#[test]
fn duplicate_tank_id() {
    let mut net = cascade();
    net.tanks[2].id = "t1".to_string();
    assert!(matches!(expect_err(&net), ValidationError::DuplicateId { id, .. } if id == "t1"));
}

#[test]
fn duplicate_edge_id() {
    let mut net = cascade();
    net.edges[1].id = "e12".to_string();
    assert!(matches!(expect_err(&net), ValidationError::DuplicateId { id, .. } if id == "e12"));
}

#[test]
fn non_positive_capacity() {
    let mut net = cascade();
    net.tanks[3].capacity = 0.0;
    assert!(matches!(expect_err(&net), ValidationError::InvalidValue { .. }));
}

#[test]
fn initial_volume_above_capacity() {
    let mut net = cascade();
    net.tanks[0].initial_volume = 100.5;
    assert!(matches!(expect_err(&net), ValidationError::InvalidValue { field, .. } if field.contains("initial_volume")));
}

#[test]
fn missing_tank_reference() {
    let mut net = cascade();
    net.edges[2].to = "t9".to_string();
    assert!(matches!(expect_err(&net), ValidationError::MissingReference { id, .. } if id == "t9"));
}

#[test]
fn self_loop() {
    let mut net = cascade();
    net.edges[0].to = "t1".to_string();
    assert!(matches!(expect_err(&net), ValidationError::SelfLoop { .. }));
}

#[test]
fn duplicate_pair() {
    let mut net = branching();
    net.edges[2].to = "t3".to_string();
    assert!(matches!(
        expect_err(&net),
        ValidationError::DuplicateEdge { first, second, .. } if first == "e23" && second == "e24"
    ));
}

#[test]
fn multiplier_out_of_range() {
    let mut net = cascade();
    net.edges[0].multiplier = 2.5;
    assert!(matches!(expect_err(&net), ValidationError::InvalidValue { .. }));
    net.edges[0].multiplier = 0.05;
    assert!(matches!(expect_err(&net), ValidationError::InvalidValue { .. }));
}

#[test]
fn route_with_single_point() {
    let mut net = cascade();
    net.edges[0].route = Some(vec![[0.0, 0.0]]);
    assert!(matches!(expect_err(&net), ValidationError::InvalidValue { field, .. } if field.contains("route")));
}

#[test]
fn cycle() {
    let mut net = cascade();
    net.edges.push(EdgeDef::new("e41", "t4", "t1"));
    assert!(matches!(expect_err(&net), ValidationError::Cycle { .. }));
}

#[test]
fn isolated_tank_is_allowed() {
    let mut net = cascade();
    net.tanks.push(TankDef {
        id: "spare".to_string(),
        name: "Spare".to_string(),
        capacity: 50.0,
        initial_volume: 50.0,
        rect: RectDef::at(800.0, 50.0),
    });
    validate_network(&net).unwrap();
}
