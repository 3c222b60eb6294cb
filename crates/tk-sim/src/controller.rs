//! Simulation controller: run state, the per-tick flow update, and manual overrides.

use std::time::Duration;

use tk_core::{
    DEFAULT_BASE_RATE, DEFAULT_TICK_PERIOD_MS, EdgeId, MULTIPLIER_DEFAULT, Real, TankId,
    clamp_multiplier, ensure_positive, multiplier_from_percent,
};
use tk_graph::Network;

use crate::clock::TickClock;
use crate::error::{SimError, SimResult};
use crate::pipe::Pipe;
use crate::tank::Tank;

/// Whether ticks are being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }
}

/// Options for a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimOptions {
    /// Liquid moved along an edge per tick at multiplier 1.0
    pub base_rate: Real,
    /// Wall-clock time between ticks
    pub tick_period: Duration,
    /// Most ticks a single `advance` may apply
    pub max_ticks_per_advance: u32,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            tick_period: Duration::from_millis(DEFAULT_TICK_PERIOD_MS),
            max_ticks_per_advance: TickClock::DEFAULT_MAX_CATCH_UP,
        }
    }
}

/// Runtime state of one network edge.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub id: EdgeId,
    pub from: TankId,
    pub to: TankId,
    pub multiplier: Real,
    /// Number of edges sharing `from`; each receives an equal share.
    pub fan_out: usize,
}

/// Owns the tanks, pipes and edges of one network and advances them.
#[derive(Debug, Clone)]
pub struct SimController {
    network: Network,
    tanks: Vec<Tank>,
    pipes: Vec<Pipe>,
    edges: Vec<FlowEdge>,
    initial_volumes: Vec<Real>,
    state: RunState,
    clock: TickClock,
    options: SimOptions,
    ticks: u64,
}

impl SimController {
    /// Build a controller for `network` with one `Tank` per network tank.
    ///
    /// The tanks' volumes at this point are what `reset` restores.
    pub fn new(network: Network, tanks: Vec<Tank>, options: SimOptions) -> SimResult<Self> {
        if tanks.len() != network.tanks().len() {
            return Err(SimError::InvalidArg {
                what: "one tank state is required per network tank",
            });
        }
        ensure_positive(options.base_rate, "base_rate")?;

        let clock = TickClock::new(options.tick_period)?
            .with_max_catch_up(options.max_ticks_per_advance);

        let pipes = network
            .edges()
            .iter()
            .map(|e| Pipe::new(e.route.clone()))
            .collect();
        let edges = network
            .edges()
            .iter()
            .map(|e| FlowEdge {
                id: e.id,
                from: e.from,
                to: e.to,
                multiplier: MULTIPLIER_DEFAULT,
                fan_out: network.out_degree(e.from).max(1),
            })
            .collect();
        let initial_volumes = tanks.iter().map(Tank::volume).collect();

        Ok(Self {
            network,
            tanks,
            pipes,
            edges,
            initial_volumes,
            state: RunState::Stopped,
            clock,
            options,
            ticks: 0,
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn options(&self) -> &SimOptions {
        &self.options
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Ticks applied since construction or the last reset.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn tank(&self, id: TankId) -> SimResult<&Tank> {
        self.tanks
            .get(id.slot())
            .ok_or(SimError::UnknownTank { tank: id })
    }

    pub fn pipe(&self, id: EdgeId) -> SimResult<&Pipe> {
        self.pipes
            .get(id.slot())
            .ok_or(SimError::UnknownEdge { edge: id })
    }

    pub fn edge(&self, id: EdgeId) -> SimResult<&FlowEdge> {
        self.edges
            .get(id.slot())
            .ok_or(SimError::UnknownEdge { edge: id })
    }

    fn tank_mut(&mut self, id: TankId) -> SimResult<&mut Tank> {
        self.tanks
            .get_mut(id.slot())
            .ok_or(SimError::UnknownTank { tank: id })
    }

    fn edge_mut(&mut self, id: EdgeId) -> SimResult<&mut FlowEdge> {
        self.edges
            .get_mut(id.slot())
            .ok_or(SimError::UnknownEdge { edge: id })
    }

    /// Sum of all tank volumes. Never grows across ticks.
    pub fn total_volume(&self) -> Real {
        self.tanks.iter().map(Tank::volume).sum()
    }

    pub fn start(&mut self) {
        if !self.is_running() {
            self.clock.reset();
            self.state = RunState::Running;
            tracing::info!(ticks = self.ticks, "simulation started");
        }
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            self.state = RunState::Stopped;
            self.clock.reset();
            tracing::info!(ticks = self.ticks, "simulation stopped");
        }
    }

    /// Flip between running and stopped; returns the new state.
    pub fn toggle(&mut self) -> RunState {
        match self.state {
            RunState::Running => self.stop(),
            RunState::Stopped => self.start(),
        }
        self.state
    }

    /// Apply one tick if running. Returns whether a tick was applied.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step();
        true
    }

    /// Feed wall-clock time; applies every tick that has come due while running.
    ///
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.clock.feed(elapsed);
        for _ in 0..due {
            self.step();
        }
        due
    }

    /// Time until the next tick is due while running.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.is_running().then(|| self.clock.time_until_tick())
    }

    /// Apply exactly one flow update, regardless of run state.
    ///
    /// Edges are evaluated in declaration order. A source's emptiness is
    /// checked once, when its first outgoing edge is reached, so all edges
    /// fanning out of one tank share the same guard within a tick. Each edge
    /// requests `base_rate * multiplier / fan_out`. The full request leaves
    /// the source; whatever the destination has no room for is discarded.
    pub fn step(&mut self) {
        let mut source_open: Vec<Option<bool>> = vec![None; self.tanks.len()];

        for edge in &self.edges {
            let src = edge.from.slot();
            let dst = edge.to.slot();

            let open = *source_open[src].get_or_insert_with(|| !self.tanks[src].is_empty());
            let flowing = open && !self.tanks[dst].is_full();

            if flowing {
                let request = self.options.base_rate * edge.multiplier / edge.fan_out as Real;
                let moved = self.tanks[src].remove(request);
                self.tanks[dst].add(moved);
            }

            self.pipes[edge.id.slot()].set_flowing(flowing);
        }

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, "flow step applied");
    }

    /// Set a tank to capacity, bypassing flow guards.
    pub fn fill(&mut self, tank: TankId) -> SimResult<()> {
        self.tank_mut(tank)?.fill();
        tracing::debug!(%tank, "tank filled");
        Ok(())
    }

    /// Set a tank to zero, bypassing flow guards.
    pub fn empty(&mut self, tank: TankId) -> SimResult<()> {
        self.tank_mut(tank)?.drain();
        tracing::debug!(%tank, "tank emptied");
        Ok(())
    }

    /// Set an edge's flow multiplier, clamped to `[0.1, 2.0]`. Returns the applied value.
    pub fn set_multiplier(&mut self, edge: EdgeId, multiplier: Real) -> SimResult<Real> {
        let applied = clamp_multiplier(multiplier);
        self.edge_mut(edge)?.multiplier = applied;
        tracing::debug!(%edge, multiplier = applied, "flow multiplier set");
        Ok(applied)
    }

    /// Set an edge's multiplier from an integer slider position (10..=200).
    pub fn set_multiplier_percent(&mut self, edge: EdgeId, percent: i32) -> SimResult<Real> {
        self.set_multiplier(edge, multiplier_from_percent(percent))
    }

    /// Stop, restore construction-time volumes and clear pipe flags.
    ///
    /// Multipliers are user settings and are kept.
    pub fn reset(&mut self) {
        self.stop();
        for (tank, &volume) in self.tanks.iter_mut().zip(&self.initial_volumes) {
            tank.set_volume(volume);
        }
        for pipe in &mut self.pipes {
            pipe.set_flowing(false);
        }
        self.ticks = 0;
        tracing::info!("simulation reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tk_graph::{NetworkBuilder, Rect};

    fn chain(volumes: &[Real]) -> SimController {
        let mut b = NetworkBuilder::new();
        let ids: Vec<TankId> = volumes
            .iter()
            .enumerate()
            .map(|(i, _)| b.add_tank(format!("T{}", i + 1), Rect::at(i as f32 * 250.0, 0.0)))
            .collect();
        for pair in ids.windows(2) {
            b.add_edge("pipe", pair[0], pair[1]);
        }
        let tanks = volumes.iter().map(|&v| Tank::new(100.0, v)).collect();
        SimController::new(b.build().unwrap(), tanks, SimOptions::default()).unwrap()
    }

    #[test]
    fn tank_count_must_match_network() {
        let mut b = NetworkBuilder::new();
        b.add_tank("T1", Rect::at(0.0, 0.0));
        let net = b.build().unwrap();
        let err = SimController::new(net, vec![], SimOptions::default()).unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }

    #[test]
    fn non_positive_base_rate_is_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_tank("T1", Rect::at(0.0, 0.0));
        let opts = SimOptions {
            base_rate: 0.0,
            ..SimOptions::default()
        };
        let err = SimController::new(b.build().unwrap(), vec![Tank::default()], opts).unwrap_err();
        assert!(matches!(
            err,
            SimError::Core(tk_core::TkError::NotPositive { what: "base_rate", .. })
        ));
    }

    #[test]
    fn toggle_flips_state() {
        let mut sim = chain(&[100.0, 0.0]);
        assert_eq!(sim.state(), RunState::Stopped);
        assert_eq!(sim.toggle(), RunState::Running);
        assert_eq!(sim.toggle(), RunState::Stopped);
    }

    #[test]
    fn tick_while_stopped_is_noop() {
        let mut sim = chain(&[100.0, 0.0]);
        let before: Vec<Real> = sim.tanks().iter().map(Tank::volume).collect();
        assert!(!sim.tick());
        assert_eq!(sim.advance(Duration::from_secs(1)), 0);
        let after: Vec<Real> = sim.tanks().iter().map(Tank::volume).collect();
        assert_eq!(before, after);
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn advance_runs_due_ticks() {
        let mut sim = chain(&[100.0, 0.0]);
        sim.start();
        assert_eq!(sim.advance(Duration::from_millis(45)), 2);
        assert_eq!(sim.tick_count(), 2);
        assert!((sim.tanks()[1].volume() - 1.6).abs() < 1e-9);
        assert_eq!(sim.time_until_tick(), Some(Duration::from_millis(15)));
    }

    #[test]
    fn overflow_into_nearly_full_tank_is_discarded() {
        let mut sim = chain(&[50.0, 99.5]);
        sim.step();
        assert_eq!(sim.tanks()[1].volume(), 100.0);
        assert!((sim.tanks()[0].volume() - 49.2).abs() < 1e-9);
        assert!((sim.total_volume() - 149.2).abs() < 1e-9);
        assert!(sim.pipes()[0].is_flowing());
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut sim = chain(&[0.0, 0.0]);
        assert_eq!(
            sim.fill(TankId::from_index(9)),
            Err(SimError::UnknownTank {
                tank: TankId::from_index(9)
            })
        );
        assert!(matches!(
            sim.set_multiplier(EdgeId::from_index(4), 1.0),
            Err(SimError::UnknownEdge { .. })
        ));
    }

    #[test]
    fn reset_restores_initial_volumes_and_keeps_multipliers() {
        let mut sim = chain(&[100.0, 0.0]);
        sim.set_multiplier(EdgeId::from_index(0), 1.5).unwrap();
        sim.start();
        for _ in 0..10 {
            sim.tick();
        }
        sim.reset();
        assert_eq!(sim.state(), RunState::Stopped);
        assert_eq!(sim.tanks()[0].volume(), 100.0);
        assert_eq!(sim.tanks()[1].volume(), 0.0);
        assert!(!sim.pipes()[0].is_flowing());
        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.edges()[0].multiplier, 1.5);
    }
}
