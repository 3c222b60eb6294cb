use tk_project::schema::SceneDef;
use tk_sim::SimSnapshot;

use crate::render::{self, ScreenTransform};

/// Scene canvas. Draws the latest snapshot scaled to the available area.
#[derive(Default)]
pub struct NetworkView {
    show_pipe_labels: bool,
}

impl NetworkView {
    pub fn show(&mut self, ui: &mut egui::Ui, scene: SceneDef, snapshot: &SimSnapshot) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_pipe_labels, "Pipe labels");
            let alarms: Vec<&str> = snapshot.alarms().map(|t| t.label.as_str()).collect();
            if !alarms.is_empty() {
                ui.colored_label(render::ALARM, format!("Full: {}", alarms.join(", ")));
            }
        });

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let screen = response.rect;
        painter.rect_filled(screen, 0.0, render::BACKGROUND);

        let xf = ScreenTransform::fit(scene, screen);
        render::draw_snapshot(&painter, snapshot, &xf);

        if self.show_pipe_labels {
            for pipe in &snapshot.pipes {
                painter.text(
                    xf.point(pipe.label_anchor) + egui::vec2(8.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    format!("{} x{:.2}", pipe.label, pipe.multiplier),
                    egui::FontId::proportional(12.0),
                    egui::Color32::LIGHT_GRAY,
                );
            }
        }
    }
}
