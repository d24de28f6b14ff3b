//! Movement integration system.
//!
//! Snapshots every collider's previous-tick bounds, then translates each
//! entity with a non-zero [`Motion`](crate::components::motion::Motion)
//! vector and flags its sprite for redraw. The vector itself is left
//! untouched: it persists until the input layer reverses it on key-release,
//! which is how "move while held" works without timers.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::motion::Motion;
use crate::components::sprite::Sprite;

/// Apply pending movement vectors to entity bounds, once per tick.
pub fn movement(mut query: Query<(&mut BoxCollider, Option<&Motion>, Option<&mut Sprite>)>) {
    for (mut collider, motion, sprite) in query.iter_mut() {
        // Snapshot for motion detection and index resync, movers or not.
        let current = collider.rect;
        collider.last_rect = current;

        let Some(motion) = motion else { continue };
        if motion.vector == Vec2::ZERO {
            continue;
        }

        collider.rect = current.translated(motion.vector);
        if let Some(mut sprite) = sprite {
            sprite.dirty = true;
        }
    }
}
