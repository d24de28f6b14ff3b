//! Action-message controller.
//!
//! Consumes [`ActionMessage`](crate::events::action::ActionMessage)s written
//! by the (external) input mapper and turns each input edge into a movement
//! vector change plus a walk-clip start/stop on the entity's
//! [`AnimationPlayer`](crate::components::animation::AnimationPlayer).
//!
//! A press applies the action's unit delta and starts its walk clip; a
//! release applies the negated delta and stops the clip, so the accumulated
//! vector returns to zero when all held keys are released.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::motion::Motion;
use crate::events::action::ActionMessage;

/// Apply queued action messages to the controlled entities.
pub fn action_controller(
    mut reader: MessageReader<ActionMessage>,
    mut query: Query<(&mut Motion, Option<&mut AnimationPlayer>)>,
) {
    for message in reader.read() {
        let Ok((mut motion, player)) = query.get_mut(message.entity) else {
            log::warn!(
                "action {:?} targets entity {:?} without a Motion component",
                message.action,
                message.entity
            );
            continue;
        };

        let (x, y) = message.action.unit();
        if message.pressed {
            motion.apply_vector(x, y);
            if let Some(mut player) = player
                && let Err(err) = player.start(message.action.clip())
            {
                // Contract violation by the input-mapping layer, not fatal.
                log::error!("input mapping referenced an undefined animation: {err}");
            }
        } else {
            motion.apply_vector(-x, -y);
            if let Some(mut player) = player
                && let Err(err) = player.stop(message.action.clip())
            {
                log::error!("input mapping referenced an undefined animation: {err}");
            }
        }
    }
}

/// Advance the ECS message queue for [`ActionMessage`].
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per tick so
/// already-read messages are dropped and fresh ones become readable. Run
/// this after [`action_controller`] in the schedule.
pub fn update_action_messages(mut messages: ResMut<Messages<ActionMessage>>) {
    messages.update();
}
