//! Movement integrator component.
//!
//! [`Motion`] accumulates a per-entity movement vector from input events and
//! is consumed once per tick by the
//! [`movement`](crate::systems::movement::movement) system. The vector
//! persists until explicitly reversed: on key-release the caller applies the
//! negated delta it applied on key-press, which models "move while held"
//! without any timers.

use bevy_ecs::prelude::Component;
use glam::Vec2;

const DEFAULT_SPEED: f32 = 5.0;

/// Accumulated movement vector plus the per-entity speed scale.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Pending translation applied every tick until reversed.
    pub vector: Vec2,
    /// World units moved per tick for a unit input delta.
    pub speed: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl Motion {
    /// Create a motion integrator with the given speed and no pending vector.
    pub fn new(speed: f32) -> Self {
        Self {
            vector: Vec2::ZERO,
            speed,
        }
    }

    /// Accumulate a signed unit delta, scaled by the entity's speed.
    ///
    /// Additive: repeated calls within a tick compound. Callers issue exactly
    /// one request per input edge and negate it on release.
    pub fn apply_vector(&mut self, x: f32, y: f32) {
        self.vector += Vec2::new(x * self.speed, y * self.speed);
    }
}
