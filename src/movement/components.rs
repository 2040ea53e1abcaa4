//! Movement domain: player body, facing and roll state.

use bevy::prelude::*;

use crate::content::PlayerTuning;
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Collision pass. Horizontal is always resolved before vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollState {
    pub is_rolling: bool,
    pub ticks_remaining: u32,
    pub cooldown_remaining: u32,
}

/// Result of a damage attempt, used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health dropped by `dealt`, which may be less than requested at low health.
    Applied { dealt: u32 },
    /// Target was invincible or already dead.
    Ignored,
}

impl DamageOutcome {
    pub fn landed(&self) -> bool {
        matches!(self, DamageOutcome::Applied { .. })
    }
}

/// Marker for the player's sprite entity.
#[derive(Component, Debug)]
pub struct PlayerSprite;

/// The player character.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,
    pub facing: Facing,
    pub health: u32,
    pub max_health: u32,
    pub invincibility: u32,
    pub roll: RollState,
    pub on_ground: bool,
    pub tuning: PlayerTuning,
}

impl Player {
    /// Spawn with a body of `size`, which depends on whether the sprite art
    /// loaded or the placeholder is in use.
    pub fn new(tuning: &PlayerTuning, size: (i32, i32)) -> Self {
        Self {
            rect: Rect::from_midbottom(tuning.spawn_center_x, tuning.spawn_bottom, size.0, size.1),
            vel_x: 0.0,
            vel_y: 0.0,
            facing: Facing::Right,
            health: tuning.max_health,
            max_health: tuning.max_health,
            invincibility: 0,
            roll: RollState::default(),
            on_ground: false,
            tuning: tuning.clone(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0
    }
}
