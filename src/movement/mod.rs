//! Movement domain: player locomotion, rolling and input sampling.

mod components;
mod input;
mod player;
#[cfg(test)]
mod tests;

pub use components::{Axis, DamageOutcome, Facing, Player, PlayerSprite, RollState};
pub use input::{PendingTriggers, PlayerInput, TickInput};

pub(crate) use input::held_input;

use bevy::prelude::*;

use crate::movement::input::latch_triggers;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingTriggers>()
            .add_systems(Update, latch_triggers);
    }
}
