//! Drift Engine library.
//!
//! A small 2D tile-engine core: sprite animation with a stack-based override
//! model, a quad-tree spatial index, impact-directional collision
//! resolution, and a fixed-timestep update loop. This module exposes the
//! engine's ECS components, resources, systems, and events for use in
//! integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
