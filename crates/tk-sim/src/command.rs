//! User commands addressed by tank or edge id.
//!
//! Widgets emit `Command` values instead of mutating the controller from
//! inside callbacks; the frame loop applies them in order.

use tk_core::{EdgeId, Real, TankId};

use crate::controller::SimController;
use crate::error::SimResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Toggle,
    Start,
    Stop,
    /// Apply one tick even while stopped.
    Step,
    Reset,
    Fill(TankId),
    Empty(TankId),
    SetMultiplier(EdgeId, Real),
    /// Slider position in percent (10..=200).
    SetMultiplierPercent(EdgeId, i32),
}

impl SimController {
    /// Dispatch a command.
    pub fn apply(&mut self, command: Command) -> SimResult<()> {
        match command {
            Command::Toggle => {
                self.toggle();
            }
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Step => self.step(),
            Command::Reset => self.reset(),
            Command::Fill(tank) => self.fill(tank)?,
            Command::Empty(tank) => self.empty(tank)?,
            Command::SetMultiplier(edge, value) => {
                self.set_multiplier(edge, value)?;
            }
            Command::SetMultiplierPercent(edge, percent) => {
                self.set_multiplier_percent(edge, percent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RunState, SimError, SimOptions, Tank};
    use tk_graph::{NetworkBuilder, Rect};

    fn pair() -> SimController {
        let mut b = NetworkBuilder::new();
        let t1 = b.add_tank("T1", Rect::at(0.0, 0.0));
        let t2 = b.add_tank("T2", Rect::at(250.0, 200.0));
        b.add_edge("pipe", t1, t2);
        let tanks = vec![Tank::new(100.0, 40.0), Tank::new(100.0, 20.0)];
        SimController::new(b.build().unwrap(), tanks, SimOptions::default()).unwrap()
    }

    #[test]
    fn dispatch_targets_the_addressed_tank() {
        let mut sim = pair();
        sim.apply(Command::Fill(TankId::from_index(1))).unwrap();
        sim.apply(Command::Empty(TankId::from_index(0))).unwrap();
        assert_eq!(sim.tanks()[0].volume(), 0.0);
        assert_eq!(sim.tanks()[1].volume(), 100.0);
    }

    #[test]
    fn slider_percent_maps_to_multiplier() {
        let mut sim = pair();
        let edge = EdgeId::from_index(0);
        sim.apply(Command::SetMultiplierPercent(edge, 150)).unwrap();
        assert_eq!(sim.edges()[0].multiplier, 1.5);
        sim.apply(Command::SetMultiplier(edge, 7.0)).unwrap();
        assert_eq!(sim.edges()[0].multiplier, 2.0);
    }

    #[test]
    fn step_command_ticks_while_stopped() {
        let mut sim = pair();
        sim.apply(Command::Step).unwrap();
        assert_eq!(sim.state(), RunState::Stopped);
        assert_eq!(sim.tick_count(), 1);
        assert!(sim.pipes()[0].is_flowing());
    }

    #[test]
    fn unknown_ids_leave_state_untouched() {
        let mut sim = pair();
        assert_eq!(
            sim.apply(Command::Empty(TankId::from_index(5))),
            Err(SimError::UnknownTank {
                tank: TankId::from_index(5)
            })
        );
        assert!(matches!(
            sim.apply(Command::SetMultiplierPercent(EdgeId::from_index(3), 50)),
            Err(SimError::UnknownEdge { .. })
        ));
        assert_eq!(sim.tanks()[0].volume(), 40.0);
        assert_eq!(sim.edges()[0].multiplier, 1.0);
    }

    #[test]
    fn toggle_round_trips_run_state() {
        let mut sim = pair();
        sim.apply(Command::Toggle).unwrap();
        assert_eq!(sim.state(), RunState::Running);
        sim.apply(Command::Stop).unwrap();
        sim.apply(Command::Stop).unwrap();
        assert_eq!(sim.state(), RunState::Stopped);
    }
}
