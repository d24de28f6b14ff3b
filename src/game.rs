//! Stage orchestration: world assembly and the fixed-timestep update loop.
//!
//! A [`Stage`] owns the ECS [`World`] and the update [`Schedule`] and is the
//! surface external collaborators talk to:
//!
//! - the **scene loader** spawns entities through [`Stage::spawn_actor`] /
//!   [`Stage::spawn_prop`] and picks the player with [`Stage::set_focus`];
//! - the **input mapper** injects key edges through [`Stage::send_action`];
//! - the **tick source** feeds elapsed wall-time into [`Stage::advance`],
//!   which converts it into zero or more fixed update ticks;
//! - the **renderer** consumes changed slices through [`Stage::drain_dirty`]
//!   and centers its viewport on [`Stage::focus_point`].
//!
//! Each tick runs the systems in a fixed order: action messages → movement
//! integration → index resync + collision resolution → focus boundary clamp
//! → animation advance.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::components::animation::{AnimationClip, AnimationPlayer, SliceId};
use crate::components::boxcollider::{BoxCollider, Rect};
use crate::components::focus::Focus;
use crate::components::group::Group;
use crate::components::motion::Motion;
use crate::components::sprite::Sprite;
use crate::events::action::{ActionMessage, MoveAction};
use crate::events::collision::log_collisions;
use crate::resources::frameclock::FrameClock;
use crate::resources::gameconfig::GameConfig;
use crate::resources::spatialindex::{IndexError, SpatialIndex};
use crate::resources::worldbounds::WorldBounds;
use crate::systems::animation::animation;
use crate::systems::collision::{clamp_focus_to_bounds, resolve_collisions};
use crate::systems::control::{action_controller, update_action_messages};
use crate::systems::movement::movement;

/// The game world plus its per-tick update schedule.
pub struct Stage {
    pub world: World,
    schedule: Schedule,
}

impl Stage {
    /// Build an empty stage from configuration: resources, the collision
    /// observer, and the tick schedule.
    pub fn new(config: &GameConfig) -> Self {
        let bounds = Rect::new(
            0.0,
            0.0,
            config.world_width as f32,
            config.world_height as f32,
        );

        let mut world = World::new();
        world.insert_resource(SpatialIndex::new(bounds));
        world.insert_resource(WorldBounds(bounds));
        world.insert_resource(FrameClock::new(config.tick_rate));
        world.init_resource::<Messages<ActionMessage>>();

        world.spawn(Observer::new(log_collisions));
        // Ensure the observer is registered before any system triggers events.
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(action_controller);
        schedule.add_systems(movement.after(action_controller));
        schedule.add_systems(resolve_collisions.after(movement));
        schedule.add_systems(clamp_focus_to_bounds.after(resolve_collisions));
        schedule.add_systems(animation.after(clamp_focus_to_bounds));
        schedule.add_systems(update_action_messages.after(action_controller));

        Self { world, schedule }
    }

    /// Spawn a movable, animated actor and seed it into the spatial index.
    pub fn spawn_actor(
        &mut self,
        name: &str,
        rect: Rect,
        speed: f32,
        clips: FxHashMap<String, AnimationClip>,
        initial_slice: SliceId,
    ) -> Result<Entity, IndexError> {
        let entity = self
            .world
            .spawn((
                Group::new(name),
                BoxCollider::new(rect),
                Motion::new(speed),
                AnimationPlayer::new(clips),
                Sprite::new(initial_slice),
            ))
            .id();
        self.world
            .resource_mut::<SpatialIndex>()
            .insert(entity, rect)?;
        Ok(entity)
    }

    /// Spawn a static prop or tile and seed it into the spatial index.
    pub fn spawn_prop(
        &mut self,
        name: &str,
        rect: Rect,
        solid: bool,
        slice: SliceId,
    ) -> Result<Entity, IndexError> {
        let collider = if solid {
            BoxCollider::solid(rect)
        } else {
            BoxCollider::new(rect)
        };
        let entity = self
            .world
            .spawn((Group::new(name), collider, Sprite::new(slice)))
            .id();
        self.world
            .resource_mut::<SpatialIndex>()
            .insert(entity, rect)?;
        Ok(entity)
    }

    /// Mark an entity as the stage focus (boundary-clamped, viewport anchor).
    pub fn set_focus(&mut self, entity: Entity) {
        self.world.entity_mut(entity).insert(Focus);
    }

    /// Inject one input edge for a controlled entity.
    pub fn send_action(&mut self, entity: Entity, action: MoveAction, pressed: bool) {
        self.world
            .resource_mut::<Messages<ActionMessage>>()
            .write(ActionMessage {
                entity,
                action,
                pressed,
            });
    }

    /// Run exactly one update tick, ignoring the frame clock.
    pub fn tick(&mut self) {
        self.schedule.run(&mut self.world);
    }

    /// Bank elapsed wall-time and run every update tick now due.
    ///
    /// Returns the number of ticks run; zero when not enough time has
    /// accumulated for a full fixed step.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let due = self.world.resource_mut::<FrameClock>().accumulate(dt);
        for _ in 0..due {
            self.schedule.run(&mut self.world);
        }
        due
    }

    /// Total update ticks run since the stage was created.
    pub fn ticks(&self) -> u64 {
        self.world.resource::<FrameClock>().ticks
    }

    /// Where the stage is currently focused: the focus entity's center, or
    /// the middle of the world boundary when no focus is set.
    pub fn focus_point(&mut self) -> Vec2 {
        let mut query = self.world.query_filtered::<&BoxCollider, With<Focus>>();
        if let Some(collider) = query.iter(&self.world).next() {
            return collider.rect.center();
        }
        self.world.resource::<WorldBounds>().0.center()
    }

    /// Renderer surface: return all sprites whose visible state changed and
    /// clear their redraw flags.
    pub fn drain_dirty(&mut self) -> Vec<(Entity, SliceId)> {
        let mut out = Vec::new();
        let mut query = self.world.query::<(Entity, &mut Sprite)>();
        for (entity, mut sprite) in query.iter_mut(&mut self.world) {
            if sprite.dirty {
                sprite.dirty = false;
                out.push((entity, sprite.slice));
            }
        }
        out
    }
}
