use std::time::Duration;

use tk_app::{AppError, Session, SessionSource};
use tk_sim::{Command, RunState};

#[test]
fn cascade_preset_runs_first_tick() {
    let mut session = Session::from_preset("cascade").unwrap();
    session.apply(Command::Start).unwrap();
    assert_eq!(session.frame(Duration::from_millis(20)), 1);

    let snap = session.snapshot();
    assert_eq!(snap.state, RunState::Running);
    assert!((snap.tanks[0].volume - 99.2).abs() < 1e-9);
    assert!(snap.pipes[0].flowing);
    assert!((snap.total_volume - 100.0).abs() < 1e-9);
}

#[test]
fn branching_preset_splits_after_tank_two_fills() {
    let mut session = Session::from_preset("branching").unwrap();
    session.empty("t1").unwrap();
    session.fill("t2").unwrap();
    session.apply(Command::Step).unwrap();

    let snap = session.snapshot();
    assert!((snap.tanks[1].volume - 99.2).abs() < 1e-9);
    assert!((snap.tanks[2].volume - 0.4).abs() < 1e-9);
    assert!((snap.tanks[3].volume - 0.4).abs() < 1e-9);
    assert!(!snap.pipes[0].flowing);
}

#[test]
fn reset_clears_history_and_restores_definition_volumes() {
    let mut session = Session::from_preset("cascade").unwrap();
    session.apply(Command::Start).unwrap();
    for _ in 0..20 {
        session.frame(Duration::from_millis(20));
    }
    assert!(session.history().len() > 1);

    session.apply(Command::Reset).unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.state, RunState::Stopped);
    assert_eq!(snap.ticks, 0);
    assert_eq!(snap.tanks[0].volume, 100.0);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn saved_definition_reopens_with_multipliers() {
    let mut session = Session::from_preset("branching").unwrap();
    session.set_multiplier("e24", 1.9).unwrap();
    session.apply(Command::Start).unwrap();
    session.frame(Duration::from_millis(200));

    let path = std::env::temp_dir().join("tk_app_session_saved.yaml");
    session.save_definition(&path).unwrap();

    let reopened = Session::open(&path).unwrap();
    assert_eq!(reopened.source(), &SessionSource::File(path.clone()));
    assert_eq!(reopened.name(), "Branching");
    let snap = reopened.snapshot();
    assert_eq!(snap.pipes[2].multiplier, 1.9);
    // Volumes come from the definition, not from the running session.
    assert_eq!(snap.tanks[0].volume, 100.0);
    assert_eq!(snap.ticks, 0);
}

#[test]
fn opening_a_bad_file_reports_path() {
    let path = std::env::temp_dir().join("tk_app_session_bad.yaml");
    std::fs::write(&path, "version: 1\nname: Bad\ntanks:\n  - id: a\n    name: A\n    capacity: -1\n    rect: { x: 0, y: 0 }\n").unwrap();
    match Session::open(&path) {
        Err(AppError::Load { path: p, message }) => {
            assert_eq!(p, path);
            assert!(message.contains("capacity"));
        }
        other => panic!("expected load error, got {other:?}"),
    }
}
