//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the spatial index, timing, the
//! world boundary, and configuration. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `frameclock` – fixed-timestep accumulator driving discrete update ticks
//! - `gameconfig` – world/simulation/player settings loaded from config.ini
//! - `spatialindex` – quad-tree mapping bounding boxes to entity ids
//! - `worldbounds` – the hard boundary the focus entity is clamped into

pub mod frameclock;
pub mod gameconfig;
pub mod spatialindex;
pub mod worldbounds;
