//! Player action messages.
//!
//! This module defines [`ActionMessage`], the message an input-to-action
//! mapper writes when a gameplay-relevant key goes down or up. The core does
//! not read hardware input; whoever owns the window translates key events
//! into these messages (one per input edge) and the
//! [`action_controller`](crate::systems::control::action_controller) system
//! turns them into movement vectors and walk animations.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Enumeration of logical movement actions.
///
/// These abstract the physical keys into gameplay-meaningful directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveAction {
    Up,
    Down,
    Left,
    Right,
}

impl MoveAction {
    /// Signed unit delta for this direction; `y` grows downwards.
    pub fn unit(&self) -> (f32, f32) {
        match self {
            MoveAction::Up => (0.0, -1.0),
            MoveAction::Down => (0.0, 1.0),
            MoveAction::Left => (-1.0, 0.0),
            MoveAction::Right => (1.0, 0.0),
        }
    }

    /// Name of the walk clip that loops while this direction is held.
    pub fn clip(&self) -> &'static str {
        match self {
            MoveAction::Up => "walking_up",
            MoveAction::Down => "walking_down",
            MoveAction::Left => "walking_left",
            MoveAction::Right => "walking_right",
        }
    }
}

/// Message written when a movement action is pressed or released.
///
/// `pressed` distinguishes the key-down edge (true) from key-up (false).
/// The release edge reverses exactly what the press edge applied.
#[derive(Message, Debug, Clone, Copy)]
pub struct ActionMessage {
    /// The controlled entity.
    pub entity: Entity,
    /// The movement action that changed.
    pub action: MoveAction,
    /// Press (true) or release (false).
    pub pressed: bool,
}
