//! Engine tick integration tests for movement, collision, clamping, and
//! animation systems running through real schedules.

use bevy_ecs::prelude::*;

use driftengine::components::animation::{AnimationClip, AnimationPlayer};
use driftengine::components::boxcollider::{BoxCollider, Rect};
use driftengine::components::focus::Focus;
use driftengine::components::motion::Motion;
use driftengine::components::sprite::Sprite;
use driftengine::events::action::ActionMessage;
use driftengine::resources::spatialindex::SpatialIndex;
use driftengine::resources::worldbounds::WorldBounds;
use driftengine::systems::animation::animation;
use driftengine::systems::collision::{clamp_focus_to_bounds, resolve_collisions};
use driftengine::systems::movement::movement;

fn make_world() -> World {
    let mut world = World::new();
    let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    world.insert_resource(SpatialIndex::new(bounds));
    world.insert_resource(WorldBounds(bounds));
    world.init_resource::<Messages<ActionMessage>>();
    world
}

fn spawn_indexed(world: &mut World, rect: Rect, solid: bool) -> Entity {
    let collider = if solid {
        BoxCollider::solid(rect)
    } else {
        BoxCollider::new(rect)
    };
    let entity = world.spawn(collider).id();
    world
        .resource_mut::<SpatialIndex>()
        .insert(entity, rect)
        .unwrap();
    entity
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(resolve_collisions);
    schedule.run(world);
}

fn tick_clamp(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(clamp_focus_to_bounds);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

#[test]
fn movement_translates_by_the_pending_vector() {
    let mut world = make_world();
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let entity = world.spawn((BoxCollider::new(rect), Motion::new(5.0))).id();
    world.get_mut::<Motion>(entity).unwrap().apply_vector(1.0, 0.0);

    tick_movement(&mut world);

    let collider = world.get::<BoxCollider>(entity).unwrap();
    assert_eq!(collider.rect, Rect::new(5.0, 0.0, 15.0, 10.0));
    assert_eq!(collider.last_rect, rect);
    assert!(collider.is_moving());
}

#[test]
fn movement_vector_persists_until_reversed() {
    let mut world = make_world();
    let entity = world
        .spawn((
            BoxCollider::new(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Motion::new(2.0),
        ))
        .id();
    world.get_mut::<Motion>(entity).unwrap().apply_vector(1.0, 0.0);

    tick_movement(&mut world);
    tick_movement(&mut world);

    // two ticks of movement from the single press
    let collider = world.get::<BoxCollider>(entity).unwrap();
    assert_eq!(collider.rect.left(), 4.0);

    world.get_mut::<Motion>(entity).unwrap().apply_vector(-1.0, 0.0);
    tick_movement(&mut world);
    let collider = world.get::<BoxCollider>(entity).unwrap();
    assert_eq!(collider.rect.left(), 4.0);
    assert!(!collider.is_moving());
}

#[test]
fn movement_marks_sprite_dirty() {
    let mut world = make_world();
    let entity = world
        .spawn((
            BoxCollider::new(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Motion::new(1.0),
            Sprite::new(0),
        ))
        .id();
    world.get_mut::<Motion>(entity).unwrap().apply_vector(0.0, 1.0);

    tick_movement(&mut world);

    assert!(world.get::<Sprite>(entity).unwrap().dirty);
}

#[test]
fn mover_is_corrected_flush_against_a_solid() {
    // The worked example: a 10x10 mover at (10,10) steps 5 right into a
    // solid at (23,10)..(33,20); the shallow horizontal overlap of 2 pushes
    // it back flush to the solid's left edge.
    let mut world = make_world();
    let mover_rect = Rect::new(10.0, 10.0, 20.0, 20.0);
    let mover = world
        .spawn((BoxCollider::new(mover_rect), Motion::new(5.0)))
        .id();
    world
        .resource_mut::<SpatialIndex>()
        .insert(mover, mover_rect)
        .unwrap();
    let wall = spawn_indexed(&mut world, Rect::new(23.0, 10.0, 33.0, 20.0), true);

    world.get_mut::<Motion>(mover).unwrap().apply_vector(1.0, 0.0);
    tick_movement(&mut world);
    tick_collision(&mut world);

    let corrected = world.get::<BoxCollider>(mover).unwrap().rect;
    assert_eq!(corrected, Rect::new(13.0, 10.0, 23.0, 20.0));

    // the index tracks the corrected bounds, and the wall never moved
    let index = world.resource::<SpatialIndex>();
    assert_eq!(index.bounds_of(mover), Some(corrected));
    assert_eq!(
        index.bounds_of(wall),
        Some(Rect::new(23.0, 10.0, 33.0, 20.0))
    );
}

#[test]
fn resolution_is_idempotent_once_separated() {
    let mut world = make_world();
    let mover_rect = Rect::new(10.0, 10.0, 20.0, 20.0);
    let mover = world
        .spawn((BoxCollider::new(mover_rect), Motion::new(5.0)))
        .id();
    world
        .resource_mut::<SpatialIndex>()
        .insert(mover, mover_rect)
        .unwrap();
    spawn_indexed(&mut world, Rect::new(23.0, 10.0, 33.0, 20.0), true);

    world.get_mut::<Motion>(mover).unwrap().apply_vector(1.0, 0.0);
    tick_movement(&mut world);
    tick_collision(&mut world);
    let after_first = world.get::<BoxCollider>(mover).unwrap().rect;

    // a second pass with no intervening movement changes nothing
    tick_collision(&mut world);
    let after_second = world.get::<BoxCollider>(mover).unwrap().rect;
    assert_eq!(after_first, after_second);
    assert_eq!(
        world.resource::<SpatialIndex>().bounds_of(mover),
        Some(after_second)
    );
}

#[test]
fn non_solid_neighbors_do_not_block() {
    let mut world = make_world();
    let mover_rect = Rect::new(10.0, 10.0, 20.0, 20.0);
    let mover = world
        .spawn((BoxCollider::new(mover_rect), Motion::new(5.0)))
        .id();
    world
        .resource_mut::<SpatialIndex>()
        .insert(mover, mover_rect)
        .unwrap();
    spawn_indexed(&mut world, Rect::new(23.0, 10.0, 33.0, 20.0), false);

    world.get_mut::<Motion>(mover).unwrap().apply_vector(1.0, 0.0);
    tick_movement(&mut world);
    tick_collision(&mut world);

    // overlap is allowed; the index still follows the mover
    let rect = world.get::<BoxCollider>(mover).unwrap().rect;
    assert_eq!(rect, Rect::new(15.0, 10.0, 25.0, 20.0));
    assert_eq!(world.resource::<SpatialIndex>().bounds_of(mover), Some(rect));
}

#[test]
fn stationary_entities_are_left_alone() {
    let mut world = make_world();
    let a = spawn_indexed(&mut world, Rect::new(10.0, 10.0, 20.0, 20.0), true);
    let b = spawn_indexed(&mut world, Rect::new(15.0, 10.0, 25.0, 20.0), true);

    // overlapping solids, but neither moved this tick
    tick_collision(&mut world);

    assert_eq!(
        world.get::<BoxCollider>(a).unwrap().rect,
        Rect::new(10.0, 10.0, 20.0, 20.0)
    );
    assert_eq!(
        world.get::<BoxCollider>(b).unwrap().rect,
        Rect::new(15.0, 10.0, 25.0, 20.0)
    );
}

#[test]
fn focus_entity_is_clamped_into_world_bounds() {
    let mut world = make_world();
    let rect = Rect::new(-8.0, 990.0, 24.0, 1022.0);
    let entity = world.spawn((BoxCollider::new(rect), Focus)).id();
    world
        .resource_mut::<SpatialIndex>()
        .insert(entity, rect)
        .unwrap();

    tick_clamp(&mut world);

    let clamped = world.get::<BoxCollider>(entity).unwrap().rect;
    assert_eq!(clamped, Rect::new(0.0, 968.0, 32.0, 1000.0));
    assert_eq!(
        world.resource::<SpatialIndex>().bounds_of(entity),
        Some(clamped)
    );
}

#[test]
fn non_focus_entities_may_leave_the_bounds() {
    let mut world = make_world();
    let rect = Rect::new(-50.0, -50.0, -40.0, -40.0);
    let entity = world.spawn(BoxCollider::new(rect)).id();
    world
        .resource_mut::<SpatialIndex>()
        .insert(entity, rect)
        .unwrap();

    tick_clamp(&mut world);

    assert_eq!(world.get::<BoxCollider>(entity).unwrap().rect, rect);
}

#[test]
fn animation_advances_and_syncs_the_sprite() {
    let mut world = make_world();
    let clip = AnimationClip::new(vec![4, 5, 6], vec![2, 2, 2]).unwrap();
    let mut player = AnimationPlayer::new([("walking_down".to_string(), clip)]);
    player.start("walking_down").unwrap();
    let entity = world.spawn((player, Sprite::new(4))).id();

    // the start edge alone must surface the second slice
    tick_animation(&mut world);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(sprite.dirty);
    assert_eq!(sprite.slice, 5);
    assert!(!world.get::<AnimationPlayer>(entity).unwrap().dirty);

    // renderer consumes the flag
    world.get_mut::<Sprite>(entity).unwrap().dirty = false;

    // next threshold crossing brings the third slice
    tick_animation(&mut world);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(sprite.dirty);
    assert_eq!(sprite.slice, 6);
}

#[test]
fn idle_player_keeps_sprite_clean() {
    let mut world = make_world();
    let clip = AnimationClip::new(vec![4, 5, 6], vec![1, 1, 1]).unwrap();
    let player = AnimationPlayer::new([("walking_down".to_string(), clip)]);
    let entity = world.spawn((player, Sprite::new(4))).id();

    for _ in 0..5 {
        tick_animation(&mut world);
    }
    assert!(!world.get::<Sprite>(entity).unwrap().dirty);
    assert_eq!(world.get::<Sprite>(entity).unwrap().slice, 4);
}

#[test]
fn corrected_mover_can_slide_along_a_wall() {
    // Moving diagonally against a wall on the right: the horizontal
    // penetration resolves, the vertical component keeps sliding.
    let mut world = make_world();
    let mover_rect = Rect::new(100.0, 100.0, 120.0, 120.0);
    let mover = world
        .spawn((BoxCollider::new(mover_rect), Motion::new(4.0)))
        .id();
    world
        .resource_mut::<SpatialIndex>()
        .insert(mover, mover_rect)
        .unwrap();
    spawn_indexed(&mut world, Rect::new(122.0, 0.0, 140.0, 400.0), true);

    let mut delta = world.get_mut::<Motion>(mover).unwrap();
    delta.apply_vector(1.0, 0.0);
    delta.apply_vector(0.0, 1.0);

    for _ in 0..3 {
        tick_movement(&mut world);
        tick_collision(&mut world);
    }

    let rect = world.get::<BoxCollider>(mover).unwrap().rect;
    // pinned against the wall horizontally
    assert_eq!(rect.right(), 122.0);
    // but three ticks of downward motion went through
    assert_eq!(rect.top(), 112.0);
}
