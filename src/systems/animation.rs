//! Animation advancement system.
//!
//! Advances every [`AnimationPlayer`] by one tick and forwards visible-slice
//! changes onto the entity's [`Sprite`], raising its redraw flag. The
//! player's own `dirty` flag is consumed here; the sprite's `dirty` flag is
//! consumed by the renderer.
//!
//! # Animation Flow
//!
//! 1. Clip tables are built per entity at spawn
//!    ([`AnimationPlayer::new`](crate::components::animation::AnimationPlayer::new))
//! 2. The [`action_controller`](crate::systems::control::action_controller)
//!    starts/stops walk clips on input edges
//! 3. This system advances playback one tick and updates [`Sprite::slice`]
//! 4. The (external) renderer reads and clears [`Sprite::dirty`]

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationPlayer;
use crate::components::sprite::Sprite;

/// Advance animation playback and update the visible sprite slice.
pub fn animation(mut query: Query<(&mut AnimationPlayer, &mut Sprite)>) {
    for (mut player, mut sprite) in query.iter_mut() {
        player.advance();

        if player.dirty {
            // Change in animation frame
            sprite.slice = player.current_slice;
            sprite.dirty = true;
            player.dirty = false;
        }
    }
}
