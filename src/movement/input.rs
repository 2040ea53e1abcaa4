//! Movement domain: input sampling for the fixed tick.
//!
//! Held keys are read when a tick runs. Discrete presses (roll, attack) are
//! latched every frame into [`PendingTriggers`] and drained by the next tick,
//! so a press between two ticks is neither lost nor applied twice.

use bevy::prelude::*;

/// Held movement keys at the moment a tick runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Everything one tick consumes from the input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub held: PlayerInput,
    pub roll: bool,
    pub attack: bool,
}

/// Discrete presses seen since the last tick.
#[derive(Resource, Debug, Default)]
pub struct PendingTriggers {
    pub roll: bool,
    pub attack: bool,
}

impl PendingTriggers {
    /// Build this tick's input and clear the latched presses.
    pub fn drain(&mut self, held: PlayerInput) -> TickInput {
        let input = TickInput {
            held,
            roll: self.roll,
            attack: self.attack,
        };
        self.roll = false;
        self.attack = false;
        input
    }
}

pub(crate) fn held_input(keyboard: &ButtonInput<KeyCode>) -> PlayerInput {
    PlayerInput {
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
        jump: keyboard.pressed(KeyCode::Space),
    }
}

pub(crate) fn latch_triggers(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut pending: ResMut<PendingTriggers>,
) {
    if keyboard.any_just_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        pending.roll = true;
    }
    if mouse.just_pressed(MouseButton::Left) {
        pending.attack = true;
    }
}
