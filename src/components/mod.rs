//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – animation clips and the per-entity playback stack machine
//! - [`boxcollider`] – axis-aligned bounds, previous-tick bounds, solid flag
//! - [`focus`] – marker for the boundary-clamped focus entity
//! - [`group`] – tag component for labelling entities by name
//! - [`motion`] – accumulated movement vector applied once per tick
//! - [`sprite`] – visible spritesheet slice and redraw flag

pub mod animation;
pub mod boxcollider;
pub mod focus;
pub mod group;
pub mod motion;
pub mod sprite;
