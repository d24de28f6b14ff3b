//! Tag component for labelling entities by name.

use bevy_ecs::prelude::Component;

/// Human-readable entity label, used in collision logs and debugging.
#[derive(Component, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
