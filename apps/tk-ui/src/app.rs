use std::path::PathBuf;
use std::time::Instant;

use egui_file_dialog::FileDialog;
use tk_app::{Session, SessionSource};
use tk_project::PRESET_NAMES;
use tk_sim::Command;

use crate::views::{ControlPanel, NetworkView, TrendView};

pub struct TankflowApp {
    session: Session,
    status: Option<String>,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    last_frame: Instant,
    control_panel: ControlPanel,
    network_view: NetworkView,
    trend_view: TrendView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    Open,
    Save,
}

impl TankflowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session, status: Option<String>) -> Self {
        Self {
            session,
            status,
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            last_frame: Instant::now(),
            control_panel: ControlPanel,
            network_view: NetworkView::default(),
            trend_view: TrendView,
        }
    }

    fn replace_session(&mut self, session: Session) {
        tracing::info!(network = session.name(), "network loaded");
        self.session = session;
        self.last_frame = Instant::now();
        self.status = None;
    }

    fn open_file(&mut self, path: PathBuf) {
        match Session::open(&path) {
            Ok(session) => self.replace_session(session),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "open failed");
                self.status = Some(e.to_string());
            }
        }
    }

    fn save_file(&mut self, path: PathBuf) {
        match self.session.save_definition(&path) {
            Ok(()) => self.status = Some(format!("Saved {}", path.display())),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "save failed");
                self.status = Some(e.to_string());
            }
        }
    }

    fn load_preset(&mut self, name: &str) {
        match Session::from_preset(name) {
            Ok(session) => self.replace_session(session),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn apply_commands(&mut self, commands: Vec<Command>) {
        for command in commands {
            if let Err(e) = self.session.apply(command) {
                tracing::warn!(?command, error = %e, "command rejected");
                self.status = Some(e.to_string());
            }
        }
    }

    fn source_label(&self) -> String {
        match self.session.source() {
            SessionSource::Preset(name) => format!("preset: {name}"),
            SessionSource::File(path) => path.display().to_string(),
        }
    }
}

impl eframe::App for TankflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.frame(now.duration_since(self.last_frame));
        self.last_frame = now;

        let mut preset_choice = None;
        let title = format!("{} ({})", self.session.name(), self.source_label());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::Open);
                    self.file_dialog.select_file();
                }
                if ui.button("Save as").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::Save);
                    self.file_dialog.save_file();
                }

                ui.separator();
                ui.menu_button("Presets", |ui| {
                    for name in PRESET_NAMES {
                        if ui.button(name).clicked() {
                            preset_choice = Some(name);
                            ui.close_menu();
                        }
                    }
                });

                ui.separator();
                ui.label(title);
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.colored_label(egui::Color32::YELLOW, status);
                }
            });
        });

        if let Some(name) = preset_choice {
            self.load_preset(name);
        }

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            match self.file_dialog_action.take() {
                Some(FileDialogAction::Open) => self.open_file(path.to_path_buf()),
                Some(FileDialogAction::Save) => self.save_file(path.to_path_buf()),
                None => {}
            }
        }

        let snapshot = self.session.snapshot();

        let commands = egui::SidePanel::left("controls")
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| self.control_panel.show(ui, &snapshot))
                    .inner
            })
            .inner;

        egui::TopBottomPanel::bottom("trend")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| {
                self.trend_view.show(ui, self.session.history(), &snapshot);
            });

        let scene = self.session.definition().scene;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.network_view.show(ui, scene, &snapshot);
        });

        self.apply_commands(commands);

        if let Some(wait) = self.session.controller().time_until_tick() {
            ctx.request_repaint_after(wait);
        }
    }
}
