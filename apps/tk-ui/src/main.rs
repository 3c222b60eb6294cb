#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod render;
mod views;

use std::path::PathBuf;

use app::TankflowApp;
use tk_app::{AppResult, Session};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let (session, status) = initial_session(std::env::args_os().nth(1).map(PathBuf::from))
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1320.0, 860.0])
            .with_title("Tankflow"),
        ..Default::default()
    };

    eframe::run_native(
        "Tankflow",
        options,
        Box::new(|cc| Ok(Box::new(TankflowApp::new(cc, session, status)))),
    )
}

/// Open the network named on the command line, falling back to the cascade preset.
///
/// A file that fails to load is reported through the returned status message.
fn initial_session(path: Option<PathBuf>) -> AppResult<(Session, Option<String>)> {
    let mut status = None;
    if let Some(path) = path {
        match Session::open(&path) {
            Ok(session) => return Ok((session, None)),
            Err(e) => {
                tracing::error!(error = %e, "falling back to cascade preset");
                status = Some(e.to_string());
            }
        }
    }

    let session = Session::from_preset("cascade")?;
    Ok((session, status))
}
