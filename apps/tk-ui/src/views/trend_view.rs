use egui_plot::{Legend, Line, Plot, PlotPoints};
use tk_app::VolumeHistory;
use tk_sim::SimSnapshot;

#[derive(Default)]
pub struct TrendView;

impl TrendView {
    pub fn show(&mut self, ui: &mut egui::Ui, history: &VolumeHistory, snapshot: &SimSnapshot) {
        if history.len() < 2 {
            ui.label("Start the simulation or fill a tank to plot volumes.");
            return;
        }

        let lines: Vec<Line> = snapshot
            .tanks
            .iter()
            .enumerate()
            .map(|(i, tank)| {
                let points: PlotPoints = history.series(i).into();
                Line::new(points).name(&tank.label)
            })
            .collect();

        Plot::new("volume_trend")
            .legend(Legend::default())
            .x_axis_label("Tick")
            .y_axis_label("Volume")
            .include_y(0.0)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });
    }
}
