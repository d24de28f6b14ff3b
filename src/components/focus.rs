//! Marker for the boundary-clamped focus entity.

use bevy_ecs::prelude::Component;

/// Marks the entity the stage is focused on (normally the player).
///
/// The focus entity is hard-clamped into
/// [`WorldBounds`](crate::resources::worldbounds::WorldBounds) after
/// collision resolution, and its center is reported by
/// [`Stage::focus_point`](crate::game::Stage::focus_point).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Focus;
