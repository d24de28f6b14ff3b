//! Sprite animation clip and playback components.
//!
//! - [`AnimationClip`] is an immutable description of a named animation: an
//!   ordered sequence of spritesheet slices plus the number of ticks each
//!   slice is shown.
//! - [`AnimationPlayer`] is the per-entity stack machine that tracks which
//!   clip is active, the current frame, and elapsed-frame counters. It is
//!   advanced one tick at a time by the
//!   [`animation`](crate::systems::animation::animation) system.
//!
//! # Playback model
//!
//! Clips are pushed onto a stack by [`AnimationPlayer::start`] and removed by
//! [`AnimationPlayer::stop`]; the top of the stack is the visible clip. An
//! empty stack means the sprite rests on the first slice of whatever clip was
//! stopped last. Frame advancement compares a running `frame_count` against
//! the cumulative tick threshold of the current frame, so clips with uneven
//! per-frame durations need no per-tick bookkeeping beyond one counter.
//!
//! # Related
//!
//! - [`crate::systems::animation`] – advances players and syncs sprites
//! - [`crate::systems::control`] – starts/stops walk clips from input actions

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque reference to one visual frame of a sprite: an index into the
/// entity's sliced spritesheet images.
pub type SliceId = usize;

/// Errors raised by animation clip construction and playback control.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimationError {
    /// Slice and duration sequences differ in length.
    #[error("lengths of slices and durations need to be equal ({slices} slices, {durations} durations)")]
    MismatchedLengths { slices: usize, durations: usize },
    /// A frame duration of zero ticks.
    #[error("animation durations must be at least one tick")]
    ZeroDuration,
    /// A clip with no slices at all.
    #[error("animation needs at least one slice")]
    Empty,
    /// `start`/`stop` referenced a clip name the player does not know.
    #[error("unknown animation '{0}'")]
    UnknownAnimation(String),
}

/// Immutable description of a single animation: slices plus per-slice
/// durations, stored as cumulative tick thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationClip {
    slices: Vec<SliceId>,
    /// `slice_frames[i]` is the cumulative tick count up to and including
    /// frame `i`; monotonically non-decreasing.
    slice_frames: Vec<u32>,
    /// Suppresses [`AnimationPlayer::advance`] while this clip is on top.
    pub paused: bool,
}

impl AnimationClip {
    /// Build a clip from slice ids and matching per-slice durations in ticks.
    pub fn new(slices: Vec<SliceId>, durations: Vec<u32>) -> Result<Self, AnimationError> {
        if slices.len() != durations.len() {
            return Err(AnimationError::MismatchedLengths {
                slices: slices.len(),
                durations: durations.len(),
            });
        }
        if slices.is_empty() {
            return Err(AnimationError::Empty);
        }
        if durations.iter().any(|&d| d == 0) {
            return Err(AnimationError::ZeroDuration);
        }

        let mut slice_frames = Vec::with_capacity(durations.len());
        let mut frame_counter = 0u32;
        for d in durations {
            frame_counter += d;
            slice_frames.push(frame_counter);
        }

        Ok(Self {
            slices,
            slice_frames,
            paused: false,
        })
    }

    /// Number of frames in the clip.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total ticks for one full loop of the clip.
    pub fn total_frames(&self) -> u32 {
        *self.slice_frames.last().expect("clip is never empty")
    }

    /// Slice ids in frame order.
    pub fn slices(&self) -> &[SliceId] {
        &self.slices
    }

    /// Cumulative tick thresholds, one per frame.
    pub fn slice_frames(&self) -> &[u32] {
        &self.slice_frames
    }

    /// Map an elapsed-tick count since clip start to `(frame_index, slice)`.
    ///
    /// The offset wraps modulo the clip length. Frame boundaries are
    /// exclusive on the low edge: the returned index is the first whose
    /// cumulative tick count is strictly greater than the wrapped offset.
    pub fn frame_at(&self, tick_offset: u32) -> (usize, SliceId) {
        let t = tick_offset % self.total_frames();
        let index = self.slice_frames.partition_point(|&f| f <= t);
        (index, self.slices[index])
    }
}

/// Per-entity animation stack machine.
///
/// Holds a fixed table of named clips (built once at spawn) and an active
/// stack of clip names; the top of the stack is the playing clip. The
/// `dirty` flag is raised whenever the visible slice changes and is cleared
/// by the consumer (the [`animation`](crate::systems::animation::animation)
/// system forwards it onto the entity's [`Sprite`](super::sprite::Sprite)).
#[derive(Component, Debug, Clone)]
pub struct AnimationPlayer {
    clips: FxHashMap<String, AnimationClip>,
    stack: Vec<String>,
    /// Name of the clip on top of the stack, if any.
    pub current_animation: Option<String>,
    /// Ticks elapsed within the current clip loop.
    pub frame_count: u32,
    /// Index of the visible frame in the current clip.
    pub frame_index: usize,
    /// Cached cumulative threshold of the visible frame.
    pub threshold: u32,
    /// Slice currently shown.
    pub current_slice: SliceId,
    /// Raised on every visible-slice change; cleared by the consumer.
    pub dirty: bool,
}

impl AnimationPlayer {
    /// Build a player around a clip table. The table is immutable afterwards.
    pub fn new(clips: impl IntoIterator<Item = (String, AnimationClip)>) -> Self {
        Self {
            clips: clips.into_iter().collect(),
            stack: Vec::new(),
            current_animation: None,
            frame_count: 0,
            frame_index: 0,
            threshold: 0,
            current_slice: 0,
            dirty: false,
        }
    }

    /// Look up a clip by name.
    pub fn clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }

    /// Whether any clip is on the stack.
    pub fn is_playing(&self) -> bool {
        !self.stack.is_empty()
    }

    fn current(&self) -> Option<&AnimationClip> {
        self.stack.last().and_then(|name| self.clips.get(name))
    }

    /// Seed playback of the stack top on its second frame, so a freshly
    /// started clip shows visible motion instead of repeating the resting
    /// slice it was just displaying. Single-frame clips seed on their only
    /// frame.
    fn reseed(&mut self) {
        let (index, threshold, frame_count, slice) = {
            let clip = self.current().expect("reseed requires a playing clip");
            let index = 1.min(clip.len() - 1);
            (
                index,
                clip.slice_frames[index],
                clip.slice_frames[0] + 1,
                clip.slices[index],
            )
        };
        self.frame_index = index;
        self.threshold = threshold;
        self.frame_count = frame_count;
        self.current_slice = slice;
        self.dirty = true;
    }

    /// Push a clip onto the stack and make it the visible animation.
    pub fn start(&mut self, name: &str) -> Result<(), AnimationError> {
        if !self.clips.contains_key(name) {
            return Err(AnimationError::UnknownAnimation(name.to_string()));
        }
        self.stack.push(name.to_string());
        self.current_animation = Some(name.to_string());
        self.reseed();
        Ok(())
    }

    /// Remove the topmost occurrence of a clip from the stack.
    ///
    /// Stopping the last clip resets to idle with the stopped clip's first
    /// slice as the resting pose. Stopping under a still-populated stack
    /// re-seeds the new top from its second frame, restarting it rather than
    /// resuming where it was interrupted. A name that is known but not on
    /// the stack is a no-op.
    pub fn stop(&mut self, name: &str) -> Result<(), AnimationError> {
        let Some(resting_slice) = self.clips.get(name).map(|clip| clip.slices[0]) else {
            return Err(AnimationError::UnknownAnimation(name.to_string()));
        };
        let Some(pos) = self.stack.iter().rposition(|n| n == name) else {
            return Ok(());
        };
        self.stack.remove(pos);

        if self.stack.is_empty() {
            self.current_animation = None;
            self.frame_index = 0;
            self.threshold = 0;
            self.frame_count = 0;
            self.current_slice = resting_slice;
            self.dirty = true;
        } else {
            self.current_animation = self.stack.last().cloned();
            self.reseed();
        }
        Ok(())
    }

    /// Pause or resume a clip. A paused clip suppresses [`Self::advance`]
    /// while it is on top of the stack; stack membership is unaffected.
    pub fn set_paused(&mut self, name: &str, paused: bool) -> Result<(), AnimationError> {
        match self.clips.get_mut(name) {
            Some(clip) => {
                clip.paused = paused;
                Ok(())
            }
            None => Err(AnimationError::UnknownAnimation(name.to_string())),
        }
    }

    /// Advance playback by one tick.
    ///
    /// No-op while idle or while the active clip is paused. Crossing a
    /// cumulative-frame threshold moves to the next frame, wrapping to frame
    /// zero (and resetting the tick counter) at the end of the clip, and
    /// raises `dirty`.
    pub fn advance(&mut self) {
        let Some(name) = self.stack.last() else {
            return;
        };
        let clip = &self.clips[name.as_str()];
        if clip.paused {
            return;
        }

        self.frame_count += 1;
        if self.frame_count > self.threshold {
            self.frame_index += 1;
            if self.frame_index >= clip.len() {
                self.frame_count = 0;
                self.frame_index = 0;
            }
            self.threshold = clip.slice_frames[self.frame_index];
            self.current_slice = clip.slices[self.frame_index];
            self.dirty = true;
        }
    }
}
