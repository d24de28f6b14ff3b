//! Fixed-timestep frame clock.

use bevy_ecs::prelude::Resource;

/// Default simulation rate in ticks per second.
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Accumulates wall-time and converts it into discrete update ticks.
///
/// Each call to [`FrameClock::accumulate`] banks the elapsed frame delta and
/// returns how many fixed steps fit in the bank; the remainder carries over,
/// so a lagging render pass is caught up with several back-to-back ticks
/// rather than a longer step. Animation and movement are measured in ticks,
/// never wall-clock.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrameClock {
    /// Seconds per simulation tick.
    pub step: f32,
    /// Banked wall-time not yet consumed by a tick.
    pub accumulator: f32,
    /// Total ticks issued since creation.
    pub ticks: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}

impl FrameClock {
    /// Create a clock running at `tick_rate` ticks per second.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Bank `dt` seconds and return the number of whole ticks now due.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            self.ticks += 1;
            due += 1;
        }
        due
    }
}
