//! Combat domain: boss body, spin state and strike reporting.

use bevy::prelude::*;

use crate::content::BossTuning;
use crate::geometry::Rect;
use crate::movement::DamageOutcome;

/// Marker for the boss's sprite entity.
#[derive(Component, Debug)]
pub struct BossSprite;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinState {
    pub ticks_remaining: u32,
    pub cooldown_remaining: u32,
    /// Degrees in [0, 360). Visual only, but it drives the body size.
    pub angle: f32,
}

impl SpinState {
    pub fn is_spinning(&self) -> bool {
        self.ticks_remaining > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeKind {
    Spin,
    Contact,
}

/// The boss body touched the player this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub kind: StrikeKind,
    pub outcome: DamageOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    pub rect: Rect,
    /// Unrotated body size. The live rect grows while spinning.
    pub base_size: (i32, i32),
    pub health: u32,
    pub max_health: u32,
    pub spin: SpinState,
    pub tuning: BossTuning,
}

impl Boss {
    pub fn new(tuning: &BossTuning, size: (i32, i32)) -> Self {
        Self {
            rect: Rect::from_midbottom(tuning.spawn_center_x, tuning.ground_line, size.0, size.1),
            base_size: size,
            health: tuning.max_health,
            max_health: tuning.max_health,
            spin: SpinState {
                cooldown_remaining: tuning.initial_spin_cooldown_ticks,
                ..default()
            },
            tuning: tuning.clone(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Subtract health directly; the boss has no invincibility window.
    /// Returns the health actually removed.
    pub fn receive_hit(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        dealt
    }
}
