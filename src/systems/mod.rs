//! Engine systems.
//!
//! This module groups the ECS systems that advance one fixed simulation
//! tick. They run in a fixed order (see [`crate::game::Stage`]):
//! input actions, movement, collision, boundary clamp, animation.
//!
//! Submodules overview
//! - [`control`] – translate queued action messages into vectors and clips
//! - [`movement`] – apply accumulated movement vectors to entity bounds
//! - [`collision`] – resync the spatial index and resolve solid contacts
//! - [`animation`] – advance players and sync visible sprite slices

pub mod animation;
pub mod collision;
pub mod control;
pub mod movement;
