//! Spatial-index resynchronization and collision resolution.
//!
//! For every entity that moved this tick, [`resolve_collisions`] relocates
//! its index entry to the post-movement bounds, queries the index for
//! intersecting neighbors, and corrects the mover's position against the
//! first solid neighbor by the shallower penetration axis. A
//! [`CollisionEvent`](crate::events::collision::CollisionEvent) is triggered
//! for each resolved contact.
//!
//! Known limitation: only one solid collider is resolved per entity per
//! tick, in the order the index returns them (unspecified). Simultaneous
//! overlap with several solids can leave residual penetration, which
//! resolves over the following ticks.
//!
//! [`clamp_focus_to_bounds`] runs afterwards and hard-clamps the focus
//! entity into the world boundary; clamping is a min/max constraint, not a
//! collision.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::{BoxCollider, Rect};
use crate::components::focus::Focus;
use crate::events::collision::CollisionEvent;
use crate::resources::spatialindex::{IndexError, SpatialIndex};
use crate::resources::worldbounds::WorldBounds;

/// Correction translating a mover out of a blocker, along the axis of
/// shallower penetration.
///
/// The impact depth on each axis is taken from the cardinal direction
/// between centers: a zero cardinal component yields no correction axis,
/// and equal depths on both axes yield no correction at all (left for the
/// next tick).
pub fn impact_correction(mover: &Rect, blocker: &Rect) -> Option<Vec2> {
    let cardinal = mover.center() - blocker.center();

    let horizontal = if cardinal.x < 0.0 {
        Some(blocker.left() - mover.right())
    } else if cardinal.x > 0.0 {
        Some(blocker.right() - mover.left())
    } else {
        None
    };
    let vertical = if cardinal.y < 0.0 {
        Some(blocker.top() - mover.bottom())
    } else if cardinal.y > 0.0 {
        Some(blocker.bottom() - mover.top())
    } else {
        None
    };

    match (horizontal, vertical) {
        (None, None) => None,
        (Some(h), None) => Some(Vec2::new(h, 0.0)),
        (None, Some(v)) => Some(Vec2::new(0.0, v)),
        (Some(h), Some(v)) if h.abs() < v.abs() => Some(Vec2::new(h, 0.0)),
        (Some(h), Some(v)) if v.abs() < h.abs() => Some(Vec2::new(0.0, v)),
        _ => None,
    }
}

fn log_index_drift(context: &str, err: &IndexError) {
    log::error!("spatial index drift during {context}: {err}");
    debug_assert!(false, "spatial index drift during {context}: {err}");
}

/// Resync moved entities in the spatial index and resolve solid contacts.
pub fn resolve_collisions(
    mut index: ResMut<SpatialIndex>,
    mut colliders: Query<(Entity, &mut BoxCollider)>,
    mut commands: Commands,
) {
    let movers: Vec<(Entity, Rect, Rect)> = colliders
        .iter()
        .filter(|(_, collider)| collider.is_moving())
        .map(|(entity, collider)| (entity, collider.last_rect, collider.rect))
        .collect();

    for (entity, last_rect, rect) in movers {
        // Relocate the index entry to the post-movement bounds. A previous
        // resolution pass may have synced this position already (the bounds
        // stay "moving" until the next tick snapshots them); skip the
        // relocation then instead of removing at stale bounds.
        if index.bounds_of(entity) != Some(rect) {
            if let Err(err) = index.remove(entity, last_rect) {
                log_index_drift("resync remove", &err);
                continue;
            }
            if let Err(err) = index.insert(entity, rect) {
                log_index_drift("resync insert", &err);
                continue;
            }
        }

        let hits = index.query(&rect);
        for other in hits {
            if other == entity {
                continue;
            }
            let Ok((_, other_collider)) = colliders.get(other) else {
                continue;
            };
            if !other_collider.solid {
                continue;
            }
            let blocker_rect = other_collider.rect;

            // Take the mover out of the index so the correction math never
            // sees its own entry.
            if let Err(err) = index.remove(entity, rect) {
                log_index_drift("resolve remove", &err);
                break;
            }
            let corrected = match impact_correction(&rect, &blocker_rect) {
                Some(correction) => rect.translated(correction),
                None => rect,
            };
            if let Ok((_, mut collider)) = colliders.get_mut(entity) {
                collider.rect = corrected;
            }
            if let Err(err) = index.insert(entity, corrected) {
                log_index_drift("resolve insert", &err);
            }
            commands.trigger(CollisionEvent {
                mover: entity,
                blocker: other,
            });
            break;
        }
    }
}

/// Hard-clamp the focus entity into the world boundary.
///
/// Runs after collision resolution; reindexes the entity when its bounds
/// were adjusted.
pub fn clamp_focus_to_bounds(
    mut index: ResMut<SpatialIndex>,
    bounds: Res<WorldBounds>,
    mut query: Query<(Entity, &mut BoxCollider), With<Focus>>,
) {
    let world = bounds.0;
    for (entity, mut collider) in query.iter_mut() {
        let before = collider.rect;
        let mut delta = Vec2::ZERO;

        if before.left() < world.left() {
            delta.x = world.left() - before.left();
        } else if before.right() > world.right() {
            delta.x = world.right() - before.right();
        }
        if before.top() < world.top() {
            delta.y = world.top() - before.top();
        } else if before.bottom() > world.bottom() {
            delta.y = world.bottom() - before.bottom();
        }

        if delta == Vec2::ZERO {
            continue;
        }

        let clamped = before.translated(delta);
        collider.rect = clamped;
        if let Err(err) = index.remove(entity, before) {
            log_index_drift("clamp remove", &err);
            continue;
        }
        if let Err(err) = index.insert(entity, clamped) {
            log_index_drift("clamp insert", &err);
        }
    }
}
