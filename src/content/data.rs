//! Data definitions for the arena tuning file.
//!
//! These structs mirror assets/data/arena.ron. Every field has a compiled-in
//! default so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

// ============================================================================
// Top-level tuning (arena.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaTuning {
    /// Fixed simulation rate. Physics is tick-count based, so changing this
    /// changes game speed.
    pub tick_rate_hz: f64,
    pub player: PlayerTuning,
    pub boss: BossTuning,
    pub melee: MeleeTuning,
    pub layout: ArenaLayout,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            player: PlayerTuning::default(),
            boss: BossTuning::default(),
            melee: MeleeTuning::default(),
            layout: ArenaLayout::default(),
        }
    }
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: u32,
    /// Velocity added per tick while a direction is held.
    pub accel: f32,
    /// Multiplicative horizontal damping applied every tick, in (0, 1).
    pub friction: f32,
    pub gravity: f32,
    /// Vertical velocity set on jump. Negative is upward.
    pub jump_impulse: f32,
    pub roll_speed: f32,
    pub roll_ticks: u32,
    pub roll_cooldown_ticks: u32,
    pub roll_invincibility_ticks: u32,
    pub hit_invincibility_ticks: u32,
    pub spawn_center_x: i32,
    pub spawn_bottom: i32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            accel: 0.8,
            friction: 0.85,
            gravity: 0.8,
            jump_impulse: -12.0,
            roll_speed: 12.0,
            roll_ticks: 12,
            roll_cooldown_ticks: 40,
            roll_invincibility_ticks: 15,
            hit_invincibility_ticks: 60,
            spawn_center_x: 200,
            spawn_bottom: 640,
        }
    }
}

// ============================================================================
// Boss
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BossTuning {
    pub max_health: u32,
    /// Horizontal pixels moved per tick while chasing.
    pub speed: i32,
    /// The boss holds position when the player's centre is within this many
    /// pixels of its own.
    pub dead_zone: i32,
    /// Screen-space y the boss's bottom edge is pinned to.
    pub ground_line: i32,
    pub spawn_center_x: i32,
    pub initial_spin_cooldown_ticks: u32,
    pub spin_ticks: u32,
    pub spin_cooldown_ticks: u32,
    pub spin_degrees_per_tick: f32,
    /// A spin starts when a uniform draw from `0..=spin_chance_range` hits 1.
    pub spin_chance_range: u32,
    pub spin_damage: u32,
    pub contact_damage: u32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_health: 400,
            speed: 2,
            dead_zone: 5,
            ground_line: 640,
            spawn_center_x: 1000,
            initial_spin_cooldown_ticks: 120,
            spin_ticks: 60,
            spin_cooldown_ticks: 180,
            spin_degrees_per_tick: 25.0,
            spin_chance_range: 180,
            spin_damage: 30,
            contact_damage: 5,
        }
    }
}

// ============================================================================
// Melee
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MeleeTuning {
    pub cooldown_ticks: u32,
    /// Width added to the player's box to form the attack area.
    pub reach_w: i32,
    /// Height added to the player's box to form the attack area.
    pub reach_h: i32,
    pub damage: u32,
}

impl Default for MeleeTuning {
    fn default() -> Self {
        Self {
            cooldown_ticks: 15,
            reach_w: 90,
            reach_h: 60,
            damage: 25,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaLayout {
    pub platforms: Vec<Rect>,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            platforms: vec![Rect::new(0, 640, 1280, 80)],
        }
    }
}
