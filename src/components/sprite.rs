//! Renderer-facing sprite state.

use bevy_ecs::prelude::Component;

use super::animation::SliceId;

/// The visible spritesheet slice of an entity plus the redraw flag.
///
/// `dirty` is raised by the animation and movement systems whenever the
/// visible state changes; the renderer reads it to decide repaint regions
/// and clears it afterwards (see [`crate::game::Stage::drain_dirty`]).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Index of the spritesheet slice currently shown.
    pub slice: SliceId,
    /// Pending visible-state change, cleared by the consumer.
    pub dirty: bool,
}

impl Sprite {
    pub fn new(slice: SliceId) -> Self {
        Self {
            slice,
            dirty: false,
        }
    }
}
