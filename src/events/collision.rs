//! Collision event type and a logging observer.
//!
//! The collision resolver emits [`CollisionEvent`] whenever a moved entity
//! is corrected against a solid neighbor. Observers can subscribe to this
//! event to react in a decoupled manner (damage, sound, despawn, etc.).
//!
//! The default observer, [`log_collisions`], reports the participants by
//! their [`Group`] labels. Use it as a reference or replace it with your own
//! game-specific logic.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::group::Group;

/// Event fired when a moved entity is resolved against a solid collider.
///
/// `mover` is the entity whose position was corrected; `blocker` is the
/// solid entity it ran into.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub mover: Entity,
    pub blocker: Entity,
}

/// Global observer that logs every resolved collision by entity label.
pub fn log_collisions(trigger: On<CollisionEvent>, groups: Query<&Group>) {
    let event = trigger.event();
    let label = |entity: Entity| {
        groups
            .get(entity)
            .map(|g| g.name().to_string())
            .unwrap_or_else(|_| format!("{entity:?}"))
    };
    log::info!("{} colliding with {}", label(event.mover), label(event.blocker));
}
