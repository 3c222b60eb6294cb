//! Rolling record of tank volumes for trend plots.

use std::collections::VecDeque;

use tk_sim::SimSnapshot;

/// Volumes of every tank at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySample {
    pub tick: u64,
    pub volumes: Vec<f64>,
}

/// Bounded history, sampled every `every` ticks. Oldest samples are dropped first.
#[derive(Debug, Clone)]
pub struct VolumeHistory {
    samples: VecDeque<HistorySample>,
    capacity: usize,
    every: u64,
}

impl Default for VolumeHistory {
    fn default() -> Self {
        // 20 s of history at one sample every 5 ticks of 20 ms.
        Self::new(200, 5)
    }
}

impl VolumeHistory {
    pub fn new(capacity: usize, every: u64) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            every: every.max(1),
        }
    }

    /// Record the snapshot unless a sample from the same `every`-tick window exists.
    pub fn record(&mut self, snapshot: &SimSnapshot) -> bool {
        let window = snapshot.ticks / self.every;
        if self
            .samples
            .back()
            .is_some_and(|s| s.tick / self.every == window)
        {
            return false;
        }
        self.push(HistorySample {
            tick: snapshot.ticks,
            volumes: snapshot.tanks.iter().map(|t| t.volume).collect(),
        });
        true
    }

    /// Record the snapshot even inside an already sampled window, unless the
    /// volumes are unchanged since the last sample.
    ///
    /// Used for manual fill/empty, which change volumes without a tick.
    pub fn record_override(&mut self, snapshot: &SimSnapshot) -> bool {
        let volumes: Vec<f64> = snapshot.tanks.iter().map(|t| t.volume).collect();
        if self.samples.back().is_some_and(|s| s.volumes == volumes) {
            return false;
        }
        self.push(HistorySample {
            tick: snapshot.ticks,
            volumes,
        });
        true
    }

    fn push(&mut self, sample: HistorySample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `[tick, volume]` pairs for one tank, oldest first.
    pub fn series(&self, tank_index: usize) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .filter_map(|s| s.volumes.get(tank_index).map(|&v| [s.tick as f64, v]))
            .collect()
    }
}
