//! World boundary rectangle.

use bevy_ecs::prelude::Resource;

use crate::components::boxcollider::Rect;

/// The hard boundary the focus entity is clamped into.
///
/// Clamping is a min/max constraint applied after collision resolution, not
/// a collision itself (see
/// [`clamp_focus_to_bounds`](crate::systems::collision::clamp_focus_to_bounds)).
#[derive(Resource, Debug, Clone, Copy)]
pub struct WorldBounds(pub Rect);
