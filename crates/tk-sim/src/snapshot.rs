//! Read-only view of simulation state for renderers.

use tk_core::{EdgeId, Real, TankId};
use tk_graph::{Point, Rect};

use crate::controller::{RunState, SimController};

#[derive(Debug, Clone, PartialEq)]
pub struct TankView {
    pub id: TankId,
    pub label: String,
    pub rect: Rect,
    pub volume: Real,
    pub capacity: Real,
    pub fraction: Real,
    /// Alarm indicator.
    pub full: bool,
    pub empty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipeView {
    pub edge: EdgeId,
    pub label: String,
    pub from: TankId,
    pub to: TankId,
    pub points: Vec<Point>,
    /// Halfway along the pipe, where its label goes.
    pub label_anchor: Point,
    pub thickness: f32,
    pub flowing: bool,
    pub multiplier: Real,
}

/// Everything a frame needs to draw, detached from the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSnapshot {
    pub state: RunState,
    pub ticks: u64,
    pub total_volume: Real,
    pub tanks: Vec<TankView>,
    pub pipes: Vec<PipeView>,
}

impl SimSnapshot {
    pub fn tank(&self, id: TankId) -> Option<&TankView> {
        self.tanks.get(id.slot())
    }

    pub fn pipe(&self, id: EdgeId) -> Option<&PipeView> {
        self.pipes.get(id.slot())
    }

    /// Tanks currently raising the full alarm.
    pub fn alarms(&self) -> impl Iterator<Item = &TankView> {
        self.tanks.iter().filter(|t| t.full)
    }
}

impl SimController {
    pub fn snapshot(&self) -> SimSnapshot {
        let network = self.network();

        let tanks = network
            .tanks()
            .iter()
            .zip(self.tanks())
            .map(|(node, tank)| TankView {
                id: node.id,
                label: node.name.clone(),
                rect: node.rect,
                volume: tank.volume(),
                capacity: tank.capacity(),
                fraction: tank.fill_fraction(),
                full: tank.is_full(),
                empty: tank.is_empty(),
            })
            .collect();

        let pipes = network
            .edges()
            .iter()
            .zip(self.pipes())
            .zip(self.edges())
            .map(|((edge, pipe), flow)| PipeView {
                edge: edge.id,
                label: edge.name.clone(),
                from: edge.from,
                to: edge.to,
                points: pipe.points().to_vec(),
                label_anchor: pipe.midpoint(),
                thickness: pipe.thickness(),
                flowing: pipe.is_flowing(),
                multiplier: flow.multiplier,
            })
            .collect();

        SimSnapshot {
            state: self.state(),
            ticks: self.tick_count(),
            total_volume: self.total_volume(),
            tanks,
            pipes,
        }
    }
}
