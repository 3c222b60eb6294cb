use tk_core::percent_from_multiplier;
use tk_sim::{Command, RunState, SimSnapshot};

const SLIDER_RANGE: std::ops::RangeInclusive<i32> = 10..=200;

/// Run controls, per-tank fill/empty buttons and per-pipe rate sliders.
///
/// Emits commands; the caller applies them after the frame is laid out.
#[derive(Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &SimSnapshot) -> Vec<Command> {
        let mut commands = Vec::new();

        ui.heading("Simulation");
        ui.horizontal(|ui| {
            let label = match snapshot.state {
                RunState::Running => "Stop",
                RunState::Stopped => "Start",
            };
            if ui.button(label).clicked() {
                commands.push(Command::Toggle);
            }
            if ui
                .add_enabled(!snapshot.state.is_running(), egui::Button::new("Step"))
                .clicked()
            {
                commands.push(Command::Step);
            }
            if ui.button("Reset").clicked() {
                commands.push(Command::Reset);
            }
        });
        ui.label(format!("Ticks: {}", snapshot.ticks));
        ui.label(format!("Total volume: {:.2}", snapshot.total_volume));

        ui.separator();
        ui.heading("Tanks");
        egui::Grid::new("tank_controls")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                for tank in &snapshot.tanks {
                    ui.label(&tank.label);
                    let readout = format!("{:5.1}%", tank.fraction * 100.0);
                    if tank.full {
                        ui.colored_label(crate::render::ALARM, readout);
                    } else {
                        ui.label(readout);
                    }
                    if ui.button("Fill").clicked() {
                        commands.push(Command::Fill(tank.id));
                    }
                    if ui.button("Empty").clicked() {
                        commands.push(Command::Empty(tank.id));
                    }
                    ui.end_row();
                }
            });

        ui.separator();
        ui.heading("Flow rates");
        for pipe in &snapshot.pipes {
            let mut percent = percent_from_multiplier(pipe.multiplier);
            let slider = egui::Slider::new(&mut percent, SLIDER_RANGE)
                .suffix("%")
                .text(&pipe.label);
            if ui.add(slider).changed() {
                commands.push(Command::SetMultiplierPercent(pipe.edge, percent));
            }
        }

        commands
    }
}
