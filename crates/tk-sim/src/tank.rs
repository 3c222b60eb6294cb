//! Liquid storage with clamped transfers.

use tk_core::{DEFAULT_CAPACITY, LEVEL_EPSILON, Real, non_negative};

/// A tank holding between zero and `capacity` units of liquid.
///
/// Fill fraction and the full (alarm) flag are derived from the volume on
/// every read, so any way of changing the volume keeps them consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    capacity: Real,
    volume: Real,
}

impl Default for Tank {
    fn default() -> Self {
        Self::empty(DEFAULT_CAPACITY)
    }
}

impl Tank {
    /// Create a tank with the given capacity and initial volume.
    ///
    /// A non-positive or non-finite capacity falls back to the default; the
    /// volume is clamped into range.
    pub fn new(capacity: Real, volume: Real) -> Self {
        let capacity = if capacity.is_finite() && capacity > 0.0 {
            capacity
        } else {
            DEFAULT_CAPACITY
        };
        let mut tank = Self {
            capacity,
            volume: 0.0,
        };
        tank.set_volume(volume);
        tank
    }

    pub fn empty(capacity: Real) -> Self {
        Self::new(capacity, 0.0)
    }

    pub fn full(capacity: Real) -> Self {
        Self::new(capacity, capacity)
    }

    pub fn capacity(&self) -> Real {
        self.capacity
    }

    pub fn volume(&self) -> Real {
        self.volume
    }

    /// Room left before the tank is at capacity.
    pub fn free_space(&self) -> Real {
        self.capacity - self.volume
    }

    /// Volume as a fraction of capacity, in `[0, 1]`.
    pub fn fill_fraction(&self) -> Real {
        self.volume / self.capacity
    }

    /// Add up to `amount`, limited by free space. Returns what was added.
    pub fn add(&mut self, amount: Real) -> Real {
        let added = non_negative(amount).min(self.free_space());
        self.volume += added;
        added
    }

    /// Remove up to `amount`, limited by current volume. Returns what was removed.
    pub fn remove(&mut self, amount: Real) -> Real {
        let removed = non_negative(amount).min(self.volume);
        self.volume -= removed;
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.volume <= LEVEL_EPSILON
    }

    /// Full within `LEVEL_EPSILON`; drives the alarm indicator.
    pub fn is_full(&self) -> bool {
        self.volume >= self.capacity - LEVEL_EPSILON
    }

    /// Set the volume to exactly `capacity`.
    pub fn fill(&mut self) {
        self.volume = self.capacity;
    }

    /// Set the volume to exactly zero.
    pub fn drain(&mut self) {
        self.volume = 0.0;
    }

    /// Overwrite the volume, clamped into `[0, capacity]`.
    pub fn set_volume(&mut self, volume: Real) {
        self.volume = non_negative(volume).min(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_clamps_to_free_space() {
        let mut tank = Tank::new(100.0, 99.5);
        let added = tank.add(2.0);
        assert!((added - 0.5).abs() < 1e-12);
        assert_eq!(tank.volume(), 100.0);
        assert!(tank.is_full());
    }

    #[test]
    fn remove_clamps_to_volume() {
        let mut tank = Tank::new(100.0, 0.3);
        let removed = tank.remove(0.8);
        assert!((removed - 0.3).abs() < 1e-12);
        assert_eq!(tank.volume(), 0.0);
        assert!(tank.is_empty());
    }

    #[test]
    fn negative_and_nan_amounts_are_ignored() {
        let mut tank = Tank::new(100.0, 50.0);
        assert_eq!(tank.add(-5.0), 0.0);
        assert_eq!(tank.remove(f64::NAN), 0.0);
        assert_eq!(tank.volume(), 50.0);
    }

    #[test]
    fn level_thresholds_use_epsilon_band() {
        assert!(Tank::new(100.0, 0.1).is_empty());
        assert!(!Tank::new(100.0, 0.11).is_empty());
        assert!(Tank::new(100.0, 99.95).is_full());
        assert!(!Tank::new(100.0, 99.85).is_full());
    }

    #[test]
    fn fill_and_drain_are_exact() {
        let mut tank = Tank::new(100.0, 37.3);
        tank.fill();
        assert_eq!(tank.volume(), 100.0);
        assert_eq!(tank.fill_fraction(), 1.0);
        tank.drain();
        assert_eq!(tank.volume(), 0.0);
        assert_eq!(tank.fill_fraction(), 0.0);
    }

    #[test]
    fn derived_state_follows_direct_writes() {
        let mut tank = Tank::default();
        tank.set_volume(100.0);
        assert!(tank.is_full());
        tank.set_volume(40.0);
        assert!(!tank.is_full());
        assert!((tank.fill_fraction() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn construction_clamps_inputs() {
        let tank = Tank::new(-3.0, 500.0);
        assert_eq!(tank.capacity(), DEFAULT_CAPACITY);
        assert_eq!(tank.volume(), DEFAULT_CAPACITY);
    }
}
